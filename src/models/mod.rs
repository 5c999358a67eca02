//! Strict wire models, one module per schema version
//!
//! Each module mirrors its version's wire shape exactly, including native
//! integer typing. Nothing is widened or coerced here; that is the job of
//! [`crate::compat`]. Records whose shape did not change in a version are
//! re-exported from the version that introduced them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// A record decoded directly from one version's wire shape
pub trait StrictModel: DeserializeOwned + Serialize {
    /// Record name used in error messages
    const NAME: &'static str;

    /// Decode from an already-parsed JSON value. Unknown keys are dropped.
    fn from_payload(payload: &Value) -> Result<Self> {
        Self::deserialize(payload).map_err(|source| ModelError::Decode {
            entity: Self::NAME,
            source,
        })
    }

    /// Encode back into this version's wire shape
    fn to_payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Read a key the wire shape always carries, possibly as `null`.
///
/// Used through `deserialize_with`, which makes serde reject a missing key
/// instead of reading it as `None`.
pub(crate) fn required_nullable<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

macro_rules! strict_model {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::models::StrictModel for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

pub mod pinned;
pub mod v2020_11_30;
pub mod v2022_09_01;
pub mod v2022_11_01;
pub mod v2023_09_01;
pub mod v2024_01_01;
pub mod v2025_01_01;

pub use pinned::Pinned;
