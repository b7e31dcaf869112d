//! # osis-checklist: Checklist Sub-Status Model
//!
//! Per-tab review state of a doctoral admission proposition. Each tab
//! (prior studies, financeability, CDD decision, SIC decision, ...) holds
//! a [`StatutChecklist`]: a primary status plus an `extra` map of string
//! discriminators. The prior-studies tab carries one child per
//! curriculum experience, keyed by the experience identifier.
//!
//! ## Persisted Encoding
//!
//! `extra` values are strings. Boolean flags are stored as `"1"` and
//! `"0"` ([`AUTHENTIFICATION_OUI`], [`AUTHENTIFICATION_NON`]) so that
//! checklists already persisted by other consumers keep deserialising.
//!
//! ## Crate Policy
//!
//! - Data only: no validation, no I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod configuration;
pub mod enums;
pub mod onglets;
pub mod statut;

// ─── Status re-exports ───────────────────────────────────────────────

pub use statut::{
    ChoixStatutChecklist, StatutChecklist, AUTHENTIFICATION_NON, AUTHENTIFICATION_OUI,
    CLE_AUTHENTIFICATION, CLE_ETAT_AUTHENTIFICATION, CLE_IDENTIFIANT,
};

// ─── Tab re-exports ──────────────────────────────────────────────────

pub use onglets::{nouvel_enfant_experience, OngletChecklist, StatutsChecklistDoctorale};

// ─── Configuration re-exports ────────────────────────────────────────

pub use configuration::{
    configuration_experiences, configuration_onglet, identifier, statut_configure,
    ConfigurationOngletChecklist, ConfigurationStatutChecklist,
};

pub use enums::{BesoinDeDerogation, DecisionCdd, DerogationFinancement, EtatAuthentificationParcours};
