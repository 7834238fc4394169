use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The only JWT claim the client reads; every other claim is ignored
/// whatever its type.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (Unix seconds)
    #[serde(deserialize_with = "numeric_date")]
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Seconds until expiry, zero once expired.
    pub fn remaining_secs(&self, now: i64) -> i64 {
        (self.exp - now).max(0)
    }
}

// NumericDate may legally carry a fractional part.
fn numeric_date<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.floor() as i64))
            .ok_or_else(|| serde::de::Error::custom("exp out of range")),
        other => Err(serde::de::Error::custom(format!(
            "exp must be a number, got {other}"
        ))),
    }
}
