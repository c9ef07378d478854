use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a catalog entry.
///
/// Source data may carry either integer or string ids, and clients send
/// whichever form they have at hand. The original form is kept so items
/// serialize back unchanged, while equality and hashing go through
/// [`MediaId::key`] so that `1` and `"1"` name the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaId {
    Numeric(i64),
    Text(String),
}

impl MediaId {
    /// Canonical string form used for lookups.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            MediaId::Numeric(n) => Cow::Owned(n.to_string()),
            MediaId::Text(s) => Cow::Borrowed(s.trim()),
        }
    }

    /// Reads an id out of an arbitrary JSON value. Only strings and
    /// integers qualify; anything else is treated as "not provided".
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(MediaId::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(MediaId::Numeric),
            _ => None,
        }
    }
}

impl PartialEq for MediaId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for MediaId {}

impl Hash for MediaId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<i64> for MediaId {
    fn from(value: i64) -> Self {
        MediaId::Numeric(value)
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        MediaId::Text(value.to_string())
    }
}

impl From<String> for MediaId {
    fn from(value: String) -> Self {
        MediaId::Text(value)
    }
}
