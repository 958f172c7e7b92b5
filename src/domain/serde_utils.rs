//! Serde utilities for upstream payloads.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Deserializes an optional identifier that may arrive as a string or a number.
pub mod string_or_number {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes an optional identifier from a string, an integer or null.
    ///
    /// Numbers are rendered in decimal; floats are accepted only when integral.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string, number or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl<'de> Visitor<'de> for StringOrNumberVisitor {
            type Value = Option<String>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifier")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value.to_string()))
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss
            )]
            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.fract() == 0.0 && value >= 0.0 && value <= u64::MAX as f64 {
                    Ok(Some((value as u64).to_string()))
                } else {
                    Err(de::Error::custom(format!("non-integral identifier {value}")))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

/// Deserializes an optional display string, dropping values of any other type.
pub mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Keeps strings and maps every other JSON value to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not valid JSON.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }
}
