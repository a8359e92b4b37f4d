/// Runtime selection of one of the enumerations, for callers that only know
/// the enum by name (the CLI, config files).
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::cache::{CacheStatus, CacheType};
use crate::deep_caching::DeepCachingType;
use crate::delivery_service::{DsMatchType, DsType, DsTypeCategory};
use crate::error::KindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumKind {
    CacheType,
    CacheStatus,
    DsType,
    DsTypeCategory,
    DsMatchType,
    DeepCachingType,
}

/// Outcome of canonicalizing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Canonical {
    pub kind: EnumKind,
    pub input: String,
    pub canonical: String,
    pub valid: bool,
}

impl EnumKind {
    pub const ALL: [EnumKind; 6] = [
        EnumKind::CacheType,
        EnumKind::CacheStatus,
        EnumKind::DsType,
        EnumKind::DsTypeCategory,
        EnumKind::DsMatchType,
        EnumKind::DeepCachingType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheType => "cache-type",
            Self::CacheStatus => "cache-status",
            Self::DsType => "ds-type",
            Self::DsTypeCategory => "ds-type-category",
            Self::DsMatchType => "ds-match-type",
            Self::DeepCachingType => "deep-caching-type",
        }
    }

    /// Run the loose parser for this kind and render the result.
    pub fn canonicalize(&self, input: &str) -> Canonical {
        let (canonical, valid) = match self {
            Self::CacheType => {
                let v = CacheType::from_str(input);
                (v.to_string(), v.is_valid())
            }
            Self::CacheStatus => {
                let v = CacheStatus::from_str(input);
                (v.to_string(), v.is_valid())
            }
            Self::DsType => {
                let v = DsType::from_str(input);
                (v.to_string(), v.is_valid())
            }
            Self::DsTypeCategory => {
                let v = DsTypeCategory::from_str(input);
                (v.to_string(), v.is_valid())
            }
            Self::DsMatchType => {
                let v = DsMatchType::from_str(input);
                (v.to_string(), v.is_valid())
            }
            Self::DeepCachingType => {
                let v = DeepCachingType::from_str(input);
                (v.to_string(), v.is_valid())
            }
        };
        Canonical {
            kind: *self,
            input: input.to_string(),
            canonical,
            valid,
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnumKind {
    type Err = KindError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| KindError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_loose() {
        assert_eq!("ds-type".parse::<EnumKind>(), Ok(EnumKind::DsType));
        assert_eq!("DS_MATCH_TYPE".parse::<EnumKind>(), Ok(EnumKind::DsMatchType));
        assert_eq!(
            "Deep_Caching-Type".parse::<EnumKind>(),
            Ok(EnumKind::DeepCachingType)
        );
        assert_eq!(
            "dstype".parse::<EnumKind>(),
            Err(KindError::Unknown("dstype".to_string()))
        );
    }

    #[test]
    fn canonicalize_dispatches_to_the_right_parser() {
        let c = EnumKind::CacheType.canonicalize("edge01");
        assert_eq!(c.canonical, "EDGE");
        assert!(c.valid);

        let c = EnumKind::DsType.canonicalize("http-live");
        assert_eq!(c.canonical, "INVALID");
        assert!(!c.valid);

        let c = EnumKind::DeepCachingType.canonicalize("");
        assert_eq!(c.canonical, "NEVER");
        assert!(c.valid);
    }

    #[test]
    fn canonical_serializes_for_json_output() {
        let c = EnumKind::CacheStatus.canonicalize("admindown");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "cache-status",
                "input": "admindown",
                "canonical": "ADMIN_DOWN",
                "valid": true,
            })
        );
    }
}
