//! # Business Validators
//!
//! Single-rule validators grouped by concern, and the per-transition
//! lists that compose them. Aggregate methods only ever run lists.

pub mod acces;
pub mod candidat;
pub mod comptabilite;
pub mod decision;
pub mod lists;

pub use lists::*;
