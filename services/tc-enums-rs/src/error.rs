use thiserror::Error;

/// Rejections from the DeepCachingType JSON codec.
///
/// Both variants carry the raw payload as received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepCachingTypeError {
    /// The payload is neither `null` nor a quoted JSON string.
    #[error("{0} JSON not quoted")]
    NotQuoted(String),
    /// A well-formed string that names no deep caching type.
    #[error("{0} is not a DeepCachingType")]
    NotDeepCachingType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    #[error("unknown enumeration kind '{0}'")]
    Unknown(String),
}
