/// Cache tier and Traffic Ops status enums.
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::text::fold_case;

/// Tier of a CDN cache.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum CacheType {
    Edge,
    Mid,
    #[default]
    Invalid,
}

impl CacheType {
    pub const ALL: [CacheType; 2] = [CacheType::Edge, CacheType::Mid];

    /// Parse by case-insensitive prefix, so "edge1" and "EDGE_ATS" are both edges.
    /// Anything else is `Invalid`.
    pub fn from_str(s: &str) -> Self {
        let s = fold_case(s);
        if s.starts_with("edge") {
            Self::Edge
        } else if s.starts_with("mid") {
            Self::Mid
        } else {
            Self::Invalid
        }
    }

    /// Value stored on the wire. Invalid is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edge => "EDGE",
            Self::Mid => "MID",
            Self::Invalid => "",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }
}

impl fmt::Display for CacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("INVALIDCACHETYPE"),
            valid => f.write_str(valid.as_str()),
        }
    }
}

impl FromStr for CacheType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CacheType::from_str(s))
    }
}

impl From<&str> for CacheType {
    fn from(s: &str) -> Self {
        CacheType::from_str(s)
    }
}

// JSON null leaves the invalid sentinel, as an unset field would.
impl From<Option<String>> for CacheType {
    fn from(s: Option<String>) -> Self {
        s.map(|s| CacheType::from_str(&s)).unwrap_or_default()
    }
}

impl From<CacheType> for &'static str {
    fn from(t: CacheType) -> Self {
        t.as_str()
    }
}

/// Traffic Server status as set in Traffic Ops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum CacheStatus {
    /// Administratively down, but still present in the CDN.
    AdminDown,
    /// Always flagged available, irrespective of monitoring.
    Online,
    /// Hidden from every endpoint; monitoring acts as if it doesn't exist.
    Offline,
    /// Polled for health; availability follows bandwidth, response time and friends.
    Reported,
    #[default]
    Invalid,
}

impl CacheStatus {
    pub const ALL: [CacheStatus; 4] = [
        CacheStatus::AdminDown,
        CacheStatus::Online,
        CacheStatus::Offline,
        CacheStatus::Reported,
    ];

    /// Case-insensitive parse. "admin_down" and "admindown" are the same status.
    pub fn from_str(s: &str) -> Self {
        match fold_case(s).as_str() {
            "admin_down" | "admindown" => Self::AdminDown,
            "offline" => Self::Offline,
            "online" => Self::Online,
            "reported" => Self::Reported,
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminDown => "ADMIN_DOWN",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Reported => "REPORTED",
            Self::Invalid => "",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("INVALIDCACHESTATUS"),
            valid => f.write_str(valid.as_str()),
        }
    }
}

impl FromStr for CacheStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CacheStatus::from_str(s))
    }
}

impl From<&str> for CacheStatus {
    fn from(s: &str) -> Self {
        CacheStatus::from_str(s)
    }
}

// JSON null leaves the invalid sentinel, as an unset field would.
impl From<Option<String>> for CacheStatus {
    fn from(s: Option<String>) -> Self {
        s.map(|s| CacheStatus::from_str(&s)).unwrap_or_default()
    }
}

impl From<CacheStatus> for &'static str {
    fn from(s: CacheStatus) -> Self {
        s.as_str()
    }
}
