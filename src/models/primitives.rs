//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the string
//! identifiers that appear in endpoint paths, so a listing ID can never be
//! passed where an order ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the identifier is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }
    };
}

string_id! {
    /// A BackMarket category ID.
    ///
    /// # Example
    ///
    /// ```
    /// use backmarket_rs::CategoryId;
    ///
    /// let category = CategoryId::from(2u64);
    /// assert_eq!(category.as_str(), "2");
    /// ```
    CategoryId
}

string_id! {
    /// A listing ID, as shown in the seller back office.
    ListingId
}

string_id! {
    /// An order ID.
    OrderId
}

string_id! {
    /// The ID of an asynchronous task (for example a bulk listing import).
    TaskId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_conversions() {
        assert_eq!(ListingId::from("L1").as_str(), "L1");
        assert_eq!(OrderId::from(42u64).to_string(), "42");
        assert_eq!(TaskId::new(String::from("t-9")).as_ref(), "t-9");
        assert!(CategoryId::new("").is_empty());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = OrderId::new("A123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A123\"");
    }
}
