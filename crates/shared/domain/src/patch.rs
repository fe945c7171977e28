//! Serde support for partial updates of nullable columns.
//!
//! A nullable field in a `*Changes` struct is `Option<Option<T>>`:
//! absent leaves the column alone, `null` clears it, a value sets it.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(..)`.
///
/// Use together with `#[serde(default)]` so that an absent field stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
