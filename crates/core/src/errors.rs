use thiserror::Error;

use crate::domain::product::{ProductId, ProductIdentifier};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("product `{identifier}` not found")]
    NotFound { identifier: ProductIdentifier },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("store `{store}` is unavailable: {message}")]
    Unavailable { store: String, message: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("product id {product_id} is outside the searchable range {min}..={max}")]
    OutOfRange { product_id: ProductId, min: u32, max: u32 },
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("fleet search did not complete within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl StoreError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Please fill out all categories",
            Self::NotFound { .. } => "Couldn't find product",
        }
    }
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "Please enter a valid input.",
            Self::Lookup(_) => "A store could not be reached. Please retry shortly.",
            Self::Timeout { .. } => "The search took too long. Please retry shortly.",
        }
    }

    /// Short machine-readable class used in command output envelopes.
    pub fn class(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out_of_range",
            Self::Lookup(_) => "store_unavailable",
            Self::Timeout { .. } => "timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::product::{ProductId, ProductIdentifier};
    use crate::errors::{LookupError, SearchError, StoreError};

    #[test]
    fn not_found_names_the_identifier() {
        let error = StoreError::NotFound { identifier: ProductIdentifier::Name("Kiwi".to_owned()) };

        assert_eq!(error.to_string(), "product `Kiwi` not found");
        assert_eq!(error.user_message(), "Couldn't find product");
    }

    #[test]
    fn lookup_failure_converts_into_search_failure() {
        let error = SearchError::from(LookupError::Unavailable {
            store: "Rio Grande".to_owned(),
            message: "connection reset".to_owned(),
        });

        assert!(matches!(error, SearchError::Lookup(_)));
        assert_eq!(error.class(), "store_unavailable");
        assert!(error.to_string().contains("Rio Grande"));
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let error = SearchError::OutOfRange { product_id: ProductId(11), min: 1, max: 10 };

        assert_eq!(error.to_string(), "product id 11 is outside the searchable range 1..=10");
        assert_eq!(error.user_message(), "Please enter a valid input.");
    }
}
