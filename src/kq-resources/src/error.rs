use std::error::Error as StdError;
use std::fmt;

use kq_cache::CacheError;
use kq_query::ParseError;
use kq_types::ResourceKind;

// For error mapping: see: https://doc.rust-lang.org/nightly/core/convert/trait.From.html

/// terminal per-call errors of the query engine, retry belongs to the caller
#[derive(Debug)]
pub enum Error {
    /// unknown or mis-scoped kind
    NotSupported(String),
    /// object absent from the cache
    NotFound {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },
    /// malformed condition or query input
    Parse(ParseError),
    /// upstream cache failure, propagated unchanged
    Cache(CacheError),
}

impl Error {
    pub fn not_supported<T: Into<String>>(resource: T) -> Self {
        Self::NotSupported(resource.into())
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn from_lookup(
        kind: ResourceKind,
        namespace: &str,
        name: &str,
        error: CacheError,
    ) -> Self {
        if error.not_found() {
            Self::NotFound {
                kind,
                namespace: namespace.to_owned(),
                name: name.to_owned(),
            }
        } else {
            Self::Cache(error)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Cache(err) => Some(err),
            Self::NotSupported(_) => None,
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<CacheError> for Error {
    fn from(error: CacheError) -> Self {
        Self::Cache(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotSupported(resource) => write!(f, "resource {} is not supported", resource),
            Self::NotFound {
                kind,
                namespace,
                name,
            } => write!(f, "resource {}.{}.{} not found", namespace, kind, name),
            Self::Parse(err) => write!(f, "{}", err),
            Self::Cache(err) => write!(f, "{}", err),
        }
    }
}
