//! Custom serde helpers for backend wire formats.

/// Deserializes a nullable or missing number as `0.0`.
///
/// The price feed leaves `marketCap`, `tradingVolume` and friends `null` for
/// freshly listed coins. Use with `#[serde(default, deserialize_with = ...)]`.
pub mod f64_or_zero {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
    }
}

/// Deserializes a nullable array as an empty `Vec`.
pub mod vec_or_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
