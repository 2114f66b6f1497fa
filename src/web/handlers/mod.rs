pub mod frequency;
pub mod history;
