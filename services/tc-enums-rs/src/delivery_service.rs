/// Delivery service enums: type, type category and match type.
///
/// `DsType` and `DsMatchType` parse case-insensitively and ignore underscores,
/// so "HTTP_LIVE" and "httplive" are the same type. Hyphens are not stripped.
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::text::fold_case;

fn normalize(s: &str) -> String {
    fold_case(&s.replace('_', ""))
}

/// Delivery service type category: HTTP or DNS.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum DsTypeCategory {
    Http,
    Dns,
    #[default]
    Invalid,
}

impl DsTypeCategory {
    pub const ALL: [DsTypeCategory; 2] = [DsTypeCategory::Http, DsTypeCategory::Dns];

    pub fn from_str(s: &str) -> Self {
        match fold_case(s).as_str() {
            "http" => Self::Http,
            "dns" => Self::Dns,
            _ => Self::Invalid,
        }
    }

    /// Stored value. Lowercase, unlike the rendered form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Dns => "dns",
            Self::Invalid => "",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }
}

impl fmt::Display for DsTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "HTTP",
            Self::Dns => "DNS",
            Self::Invalid => "INVALIDDSTYPE",
        })
    }
}

/// Delivery service type.
///
/// The classifier predicates overlap on purpose: `HttpNoCache` is both HTTP
/// and DNS, and `DnsLive` is both DNS and steering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum DsType {
    ClientSteering,
    Dns,
    DnsLive,
    DnsLiveNational,
    Http,
    HttpLive,
    HttpLiveNational,
    HttpNoCache,
    Steering,
    AnyMap,
    #[default]
    Invalid,
}

impl DsType {
    pub const ALL: [DsType; 10] = [
        DsType::ClientSteering,
        DsType::Dns,
        DsType::DnsLive,
        DsType::DnsLiveNational,
        DsType::Http,
        DsType::HttpLive,
        DsType::HttpLiveNational,
        DsType::HttpNoCache,
        DsType::Steering,
        DsType::AnyMap,
    ];

    pub fn from_str(s: &str) -> Self {
        match normalize(s).as_str() {
            "httpnocache" => Self::HttpNoCache,
            "dns" => Self::Dns,
            "dnslive" => Self::DnsLive,
            "http" => Self::Http,
            "dnslivenatnl" => Self::DnsLiveNational,
            "anymap" => Self::AnyMap,
            "httplive" => Self::HttpLive,
            "steering" => Self::Steering,
            "httplivenatnl" => Self::HttpLiveNational,
            "clientsteering" => Self::ClientSteering,
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientSteering => "CLIENT_STEERING",
            Self::Dns => "DNS",
            Self::DnsLive => "DNS_LIVE",
            Self::DnsLiveNational => "DNS_LIVE_NATNL",
            Self::Http => "HTTP",
            Self::HttpLive => "HTTP_LIVE",
            Self::HttpLiveNational => "HTTP_LIVE_NATNL",
            Self::HttpNoCache => "HTTP_NO_CACHE",
            Self::Steering => "STEERING",
            Self::AnyMap => "ANY_MAP",
            Self::Invalid => "",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }

    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Self::Http | Self::HttpLive | Self::HttpLiveNational | Self::HttpNoCache
        )
    }

    pub fn is_dns(&self) -> bool {
        matches!(
            self,
            Self::HttpNoCache | Self::Dns | Self::DnsLive | Self::DnsLiveNational
        )
    }

    pub fn is_steering(&self) -> bool {
        matches!(self, Self::Steering | Self::ClientSteering | Self::DnsLive)
    }

    pub fn is_live(&self) -> bool {
        matches!(
            self,
            Self::DnsLive | Self::DnsLiveNational | Self::HttpLive | Self::HttpLiveNational
        )
    }

    pub fn is_national(&self) -> bool {
        matches!(self, Self::DnsLiveNational | Self::HttpLiveNational)
    }

    /// Whether delivery services of this type carry SSL keys.
    pub fn has_ssl_keys(&self) -> bool {
        self.is_http() || self.is_dns() || self.is_steering()
    }
}

impl fmt::Display for DsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("INVALID"),
            valid => f.write_str(valid.as_str()),
        }
    }
}

/// How a delivery service claims a request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum DsMatchType {
    HostRegex,
    PathRegex,
    SteeringRegex,
    HeaderRegex,
    #[default]
    Invalid,
}

impl DsMatchType {
    pub const ALL: [DsMatchType; 4] = [
        DsMatchType::HostRegex,
        DsMatchType::PathRegex,
        DsMatchType::SteeringRegex,
        DsMatchType::HeaderRegex,
    ];

    pub fn from_str(s: &str) -> Self {
        match normalize(s).as_str() {
            "hostregexp" => Self::HostRegex,
            "pathregexp" => Self::PathRegex,
            "steeringregexp" => Self::SteeringRegex,
            "headerregexp" => Self::HeaderRegex,
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostRegex => "HOST_REGEXP",
            Self::PathRegex => "PATH_REGEXP",
            Self::SteeringRegex => "STEERING_REGEXP",
            Self::HeaderRegex => "HEADER_REGEXP",
            Self::Invalid => "",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }
}

impl fmt::Display for DsMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("INVALID_MATCH_TYPE"),
            valid => f.write_str(valid.as_str()),
        }
    }
}

// Conversions shared by all three: loose parse in, backing value out.
// JSON null deserializes to the invalid sentinel.
macro_rules! string_conversions {
    ($($name:ident),+) => {
        $(
            impl FromStr for $name {
                type Err = Infallible;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok($name::from_str(s))
                }
            }

            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    $name::from_str(s)
                }
            }

            impl From<Option<String>> for $name {
                fn from(s: Option<String>) -> Self {
                    s.map(|s| $name::from_str(&s)).unwrap_or_default()
                }
            }

            impl From<$name> for &'static str {
                fn from(v: $name) -> Self {
                    v.as_str()
                }
            }
        )+
    };
}

string_conversions!(DsTypeCategory, DsType, DsMatchType);
