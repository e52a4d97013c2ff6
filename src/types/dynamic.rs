use serde::{Deserialize, Serialize};

/// A loosely typed element, for sequences that mix integers and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dynamic {
    Int(i32),
    Text(String),
}

impl From<i32> for Dynamic {
    fn from(value: i32) -> Self {
        Dynamic::Int(value)
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::Text(value.to_string())
    }
}

/// Types that can be recovered from a [`Dynamic`] when the runtime variant matches.
pub trait Narrow: Sized {
    fn narrow(value: &Dynamic) -> Option<&Self>;
}

impl Narrow for i32 {
    fn narrow(value: &Dynamic) -> Option<&Self> {
        match value {
            Dynamic::Int(v) => Some(v),
            Dynamic::Text(_) => None,
        }
    }
}

impl Narrow for String {
    fn narrow(value: &Dynamic) -> Option<&Self> {
        match value {
            Dynamic::Text(v) => Some(v),
            Dynamic::Int(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_matches_only_its_own_variant() {
        let int = Dynamic::from(7);
        let text = Dynamic::from("seven");

        assert_eq!(i32::narrow(&int), Some(&7));
        assert_eq!(i32::narrow(&text), None);
        assert_eq!(String::narrow(&text).map(String::as_str), Some("seven"));
        assert_eq!(String::narrow(&int), None);
    }

    #[test]
    fn untagged_serialization_is_the_bare_value() {
        let items = vec![Dynamic::from(1), Dynamic::from("object")];
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"[1,"object"]"#);
    }
}
