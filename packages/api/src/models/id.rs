use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Entity identifier. The backend emits numeric ids for some entities and UUID strings
/// for others; both are kept as their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Id(n.to_string()),
            Raw::Uint(n) => Id(n.to_string()),
            Raw::Text(s) => Id(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let n: Id = serde_json::from_str("42").unwrap();
        let s: Id = serde_json::from_str("\"b3f1-77\"").unwrap();
        assert_eq!(n, Id::from(42));
        assert_eq!(s.as_str(), "b3f1-77");
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"42\"");
    }

    #[test]
    fn test_optional_null_id() {
        let id: Option<Id> = serde_json::from_str("null").unwrap();
        assert!(id.is_none());
    }
}
