use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Pure-computation failures. These indicate misconfiguration discovered
/// while computing, are raised immediately and never retried by the core.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "no rule produced a value for tag category {tag_category} in {category} and no default is configured"
    )]
    MissingDefaultRule { category: String, tag_category: String },
    #[error("inferred value {value:?} is not a legal {tag_category} value")]
    IllegalTagValue { tag_category: String, value: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

/// Top-level error surface of the engine. Unclassifiable products and empty
/// recommendation sets are deliberately not represented here: both are normal
/// outcomes, not failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    /// Stable user-facing message. The "no recommendations, try different
    /// criteria" case never reaches this: it is an `Ok` outcome with an empty
    /// recommendation set.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) | Self::Configuration(_) => {
                "This product category is not set up for recommendations."
            }
            Self::Store(_) => "Product data could not be loaded. Please retry shortly.",
        }
    }
}
