/// Strongly typed names.
///
/// These carry no value restriction. They exist so a cache hostname can't be
/// passed where a delivery service name is expected.
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }
    };
}

name_type!(
    /// Name of a CDN in Traffic Control.
    CdnName
);

name_type!(
    /// Hostname of a Traffic Monitor peer.
    TrafficMonitorName
);

name_type!(
    /// Hostname of a CDN cache.
    CacheName
);

name_type!(
    /// Name of a CDN cache group.
    CacheGroupName
);

name_type!(
    /// Name of a CDN delivery service.
    DeliveryServiceName
);
