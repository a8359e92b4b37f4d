//! Enumerations and strongly typed names for CDN traffic control.
//!
//! Every enum here is closed, has a loose `from_str` that never fails, and a
//! canonical `Display`. Unrecognized input parses to an `Invalid` variant,
//! which is also the `Default` (except for [`DeepCachingType`], whose default
//! is `Never`).
//!
//! Treat these values as enums. Don't store or compare them as strings; the
//! string forms exist only so they serialize as readable JSON. Convert input
//! with `from_str` as early as possible, reject `Invalid`, and keep the enum.
//!
//! ```
//! use tc_enums::{CacheType, DsType};
//!
//! assert_eq!(CacheType::from_str("edge-sea-01"), CacheType::Edge);
//! assert_eq!(DsType::from_str("HTTP_LIVE").to_string(), "HTTP_LIVE");
//! assert!(!DsType::from_str("http-live").is_valid());
//! ```

pub mod cache;
pub mod deep_caching;
pub mod delivery_service;
pub mod error;
pub mod kind;
pub mod names;
mod text;

pub use cache::{CacheStatus, CacheType};
pub use deep_caching::DeepCachingType;
pub use delivery_service::{DsMatchType, DsType, DsTypeCategory};
pub use error::{DeepCachingTypeError, KindError};
pub use kind::{Canonical, EnumKind};
pub use names::{CacheGroupName, CacheName, CdnName, DeliveryServiceName, TrafficMonitorName};
