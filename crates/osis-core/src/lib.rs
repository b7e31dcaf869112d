//! # osis-core: Foundational Types for OSIS Admission
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on: identities, UTC timestamps, closed enumerations with stable
//! persisted names, runtime configuration, and the workspace error type.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identities.** `PropositionIdentity` and `FormationIdentity`
//!    are distinct types; a formation can never be passed where a
//!    proposition is expected.
//!
//! 2. **Closed enumerations with explicit name tables.** [`choix_enum!`]
//!    generates `name()` / `from_name()` as literal `match` tables. An
//!    unknown persisted name resolves to `None`, never to a panic.
//!
//! 3. **Injected time.** Domain code never reads the wall clock. Callers
//!    pass a [`Timestamp`] in; only the outermost layer calls
//!    [`Timestamp::now()`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `osis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod enumeration;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use config::{AdmissionConfig, ConfigError, LogFormat};
pub use error::OsisError;
pub use identity::{FormationIdentity, PropositionIdentity};
pub use temporal::Timestamp;
