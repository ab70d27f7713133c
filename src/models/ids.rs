//! Typed entity IDs
//!
//! Accounts and transactions get their own UUID newtype so one can never
//! stand in for the other. Listings print the short form (the type's
//! prefix plus the first 8 hex characters); resolving a short form back to
//! an entity is a prefix match done at the service layer via [`matches`],
//! while `FromStr` wants the full UUID, prefixed or bare.
//!
//! [`matches`]: AccountId::matches

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Borrow the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// The display prefix for this ID type (e.g. "acc-")
            pub const fn prefix() -> &'static str {
                $prefix
            }

            /// Whether a lookup string refers to this ID
            ///
            /// Accepts the full UUID or any leading fragment of at least 4
            /// hex characters, with or without the display prefix. Matching
            /// is case-insensitive.
            pub fn matches(&self, lookup: &str) -> bool {
                let bare = lookup.strip_prefix($prefix).unwrap_or(lookup);
                if bare.len() < 4 {
                    return false;
                }
                self.0.to_string().starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.as_simple().to_string();
                write!(f, "{}{}", $prefix, &hex[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let bare = input.strip_prefix($prefix).unwrap_or(input);
                Uuid::parse_str(bare).map(Self)
            }
        }
    };
}

id_type!(AccountId, "acc-");
id_type!(TransactionId, "txn-");
