use serde::{Deserialize, Serialize};
use serde_json::{Value, value::RawValue};

/// Popularity value as received from a client, before validation.
///
/// Clients send either a JSON number or a numeric string; any other shape
/// is kept so the caller can reject it with a proper message instead of a
/// body-level deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPopularity {
    Number(f64),
    Text(String),
    Unsupported(Value),
}

impl RawPopularity {
    /// Reads a value kept verbatim from a request body.
    ///
    /// Number literals outside the `f64` range cannot be represented as
    /// [`RawPopularity::Number`] and end up as [`RawPopularity::Unsupported`].
    pub fn from_raw(raw: &RawValue) -> Self {
        serde_json::from_str(raw.get()).unwrap_or_else(|_| {
            RawPopularity::Unsupported(Value::String(raw.get().to_owned()))
        })
    }

    /// Returns the value as a finite float, or `None` if it is not one.
    ///
    /// `NaN` and infinities are refused since they have no JSON number form.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            RawPopularity::Number(n) => *n,
            RawPopularity::Text(s) => s.trim().parse::<f64>().ok()?,
            RawPopularity::Unsupported(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawPopularity {
    fn from(value: f64) -> Self {
        RawPopularity::Number(value)
    }
}

impl From<&str> for RawPopularity {
    fn from(value: &str) -> Self {
        RawPopularity::Text(value.to_string())
    }
}
