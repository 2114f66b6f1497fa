// Text analysis — the core of the service.
//
// topic:     input normalization and validation
// sanitize:  HTML tag stripping
// frequency: tokenization, filtering, counting, top-K ranking
// pipeline:  fetch → sanitize → analyze → persist orchestration

pub mod frequency;
pub mod pipeline;
pub mod sanitize;
pub mod topic;
