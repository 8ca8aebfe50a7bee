//! # Anchor Inspector Core
//!
//! Seed classification and program-derived-address derivation for the
//! Anchor inspector, plus the address book and IDL model that feed it.

pub mod error;
pub mod pubkey;
pub mod seed;
pub mod pda;
pub mod store;
pub mod idl;

pub mod prelude {
    pub use crate::error::{InspectorError, InspectorResult};
    pub use crate::pda::{derive_pda, derive_pda_from_strings, DerivedAddress};
    pub use crate::pubkey::Pubkey;
    pub use crate::seed::{classify, classify_all, Seed, SeedKind};
    pub use crate::store::{AddressBook, AddressEntry, KeyValueStore, MemoryStore};
}
