/// Delivery service deep caching type.
///
/// This is the one enum with a strict JSON contract: it accepts `null`,
/// `"ALWAYS"` or `"NEVER"` (any case) and always writes `"ALWAYS"` or `"NEVER"`.
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::DeepCachingTypeError;
use crate::text::fold_case;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeepCachingType {
    Always,
    /// Default when omitted.
    #[default]
    Never,
    Invalid,
}

impl DeepCachingType {
    pub const ALL: [DeepCachingType; 2] = [DeepCachingType::Always, DeepCachingType::Never];

    /// Case-insensitive parse. The empty string means `Never`; anything
    /// unrecognized is `Invalid`.
    pub fn from_str(s: &str) -> Self {
        match fold_case(s).as_str() {
            "always" => Self::Always,
            "never" | "" => Self::Never,
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::Never => "NEVER",
            Self::Invalid => "INVALID",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }

    /// Decode a raw JSON token, keeping "not a JSON string" apart from
    /// "a string that isn't a deep caching type". Only the exact token `null`
    /// means `Never`.
    pub fn from_json(raw: &str) -> Result<Self, DeepCachingTypeError> {
        if raw == "null" {
            return Ok(Self::Never);
        }
        let unquoted: String = serde_json::from_str(raw).map_err(|e| {
            tracing::debug!(payload = raw, error = %e, "deep caching type payload not quoted");
            DeepCachingTypeError::NotQuoted(raw.to_string())
        })?;
        match Self::from_str(&unquoted) {
            Self::Invalid => {
                tracing::debug!(payload = raw, "unrecognized deep caching type");
                Err(DeepCachingTypeError::NotDeepCachingType(raw.to_string()))
            }
            t => Ok(t),
        }
    }
}

impl fmt::Display for DeepCachingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeepCachingType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DeepCachingType::from_str(s))
    }
}

impl From<&str> for DeepCachingType {
    fn from(s: &str) -> Self {
        DeepCachingType::from_str(s)
    }
}

impl Serialize for DeepCachingType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct DeepCachingTypeVisitor;

impl<'de> Visitor<'de> for DeepCachingTypeVisitor {
    type Value = DeepCachingType;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a quoted DeepCachingType string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DeepCachingType::Never)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DeepCachingType::Never)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DeepCachingTypeVisitor)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match DeepCachingType::from_str(v) {
            DeepCachingType::Invalid => {
                tracing::debug!(value = v, "unrecognized deep caching type");
                Err(E::custom(DeepCachingTypeError::NotDeepCachingType(format!(
                    "{v:?}"
                ))))
            }
            t => Ok(t),
        }
    }
}

impl<'de> Deserialize<'de> for DeepCachingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(DeepCachingTypeVisitor)
    }
}
