//! # osis-validation: Business Validators and Two-Phase Validator Lists
//!
//! Decouples "what data is needed to decide" from "what the decision is".
//! A [`BusinessValidator`] is handed the primitive values it needs at
//! construction and implements exactly one predicate; on failure it
//! returns exactly one business exception carrying a message and a
//! `status_code` that outer layers map to protocol-level errors.
//!
//! ## Two-Phase Contract
//!
//! A [`ValidatorList`] splits its validators into:
//!
//! 1. **Data contract**: is the input well-formed? Runs first and stops
//!    at the first failure ([`ValidationFailure::DataContract`]).
//! 2. **Invariants**: is the operation business-legal? Runs only if the
//!    data contract passed. Every invariant runs, and every failure is
//!    collected in declaration order into one
//!    [`MultipleBusinessExceptions`] ([`ValidationFailure::Invariants`]).
//!
//! Declaration order is observable: callers inspect the first collected
//! exception and assert its kind.
//!
//! ## Crate Policy
//!
//! - No I/O, no clocks, no shared mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod failure;
pub mod list;
pub mod validator;

pub use failure::{MultipleBusinessExceptions, ValidationFailure};
pub use list::{valider_en_deux_etapes, ValidatorList, Validators};
pub use validator::{BusinessException, BusinessValidator};
