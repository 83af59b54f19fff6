use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

/// Target of a delete request: either a product number or a product name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductIdentifier {
    Id(ProductId),
    Name(String),
}

impl ProductIdentifier {
    /// Digit-only input that fits a product number is an id; everything else,
    /// including digit strings too wide for `u32`, is matched against names.
    pub fn parse(raw: &str) -> Self {
        let is_numeric = !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit());
        if is_numeric {
            if let Ok(value) = raw.parse::<u32>() {
                return Self::Id(ProductId(value));
            }
        }
        Self::Name(raw.to_string())
    }
}

impl From<ProductId> for ProductIdentifier {
    fn from(value: ProductId) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for ProductIdentifier {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for ProductIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}
