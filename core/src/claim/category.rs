use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict bucket used to select a pre-authored response.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    False,
    PartlyTrue,
    True,
    MemeImage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::False,
        Category::PartlyTrue,
        Category::True,
        Category::MemeImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::False => "false",
            Category::PartlyTrue => "partly_true",
            Category::True => "true",
            Category::MemeImage => "meme_image",
        }
    }

    /// Parses a wire tag exactly as given; unknown or padded tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_serde_names() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
            assert_eq!(Category::from_tag(c.as_str()), Some(c));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(Category::from_tag("misleading"), None);
        assert_eq!(Category::from_tag(""), None);
        assert_eq!(Category::from_tag("FALSE"), None);
        assert_eq!(Category::from_tag(" true "), None);
        assert_eq!(Category::from_tag("meme_image\n"), None);
    }
}
