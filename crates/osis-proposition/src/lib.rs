//! # osis-proposition: Doctoral Admission Propositions
//!
//! The proposition aggregate, its business rules, and the use cases that
//! drive it.
//!
//! ## Architecture
//!
//! ```text
//! service ──▶ ports (repository, translators, side effects)
//!    │
//!    ▼
//! proposition (aggregate) ──▶ validator (lists) ──▶ exceptions
//!    │
//!    └──▶ osis-checklist (review tabs)
//! ```
//!
//! - [`proposition`] owns the state and its transitions. A rejected
//!   transition leaves it unchanged.
//! - [`validator`] holds single-rule validators and the per-transition
//!   lists composing them. Declaration order is the reporting order.
//! - [`ports`] declares the collaborators the use cases need;
//!   [`in_memory`] implements each of them.
//! - [`service`] loads, decides, saves, then fires side effects.
//!
//! ## Crate Policy
//!
//! - The aggregate performs no I/O and never reads the clock.
//! - Failures are values: no `panic!()` or `.unwrap()` outside tests.
//! - Logging happens in [`service`] only, through `tracing`.

pub mod enums;
pub mod exceptions;
pub mod in_memory;
pub mod ports;
pub mod proposition;
pub mod service;
pub mod valeurs;
pub mod validator;

// ─── Aggregate re-exports ────────────────────────────────────────────

pub use proposition::{
    ContexteApprobationSic, DonneesCompletion, InformationsAcceptation, InformationsAcceptationSic,
    NouvelleProposition, Proposition, Soumission,
};

// ─── Error re-exports ────────────────────────────────────────────────

pub use exceptions::{PropositionError, TransitionError};

// ─── Port re-exports ─────────────────────────────────────────────────

pub use ports::{
    AnneeAcademique, AnneeAcademiqueRepository, DoctoratTranslator, EmplacementsDocumentsTranslator,
    Evenement, Historique, Notification, PdfGeneration, PortError, ProfilCandidatTranslator,
    PropositionRepository, TitreAccesSelectionnableRepository,
};

// ─── Service re-exports ──────────────────────────────────────────────

pub use service::{
    echeance_reclamation_documents, Collaborateurs, InitierPropositionCommand, PropositionService,
    ReclamerDocumentsCommand, ServiceError, SoumettrePropositionCommand,
    SpecifierConditionAccesCommand,
};
