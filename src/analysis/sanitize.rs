// HTML tag stripping for MediaWiki extracts.
//
// The extracts API returns limited HTML (<p>, <b>, <i>, …). We only need
// the text, so every minimal <…> span is removed. The pattern must be
// non-greedy: "<p>text<b>bold</b></p>" contains four tags, each matched
// individually, and the inner text survives.

use regex_lite::Regex;

pub struct TagStripper {
    pattern: Regex,
}

impl Default for TagStripper {
    fn default() -> Self {
        Self {
            // Static pattern, cannot fail to compile
            pattern: Regex::new("<.*?>").expect("valid tag pattern"),
        }
    }
}

impl TagStripper {
    /// Remove every HTML tag from the text, leaving the inner text intact.
    /// Empty input returns empty output.
    pub fn strip_tags(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}
