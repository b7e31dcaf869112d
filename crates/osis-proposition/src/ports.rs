//! # Collaborator Ports
//!
//! Interfaces to everything the proposition aggregate does not own:
//! persistence, the candidate's profile, academic years, access titles,
//! document placements, and the fire-and-forget side effects (PDF
//! certificates, notifications, history).
//!
//! The aggregate never sees these traits. Use cases in
//! [`service`](crate::service) gather data through them, call exactly one
//! aggregate method, persist, then trigger side effects.
//!
//! In-memory implementations live in [`in_memory`](crate::in_memory).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use osis_core::{choix_enum, FormationIdentity, PropositionIdentity};
use osis_validation::MultipleBusinessExceptions;

use crate::enums::TypeCertificat;
use crate::exceptions::PropositionError;
use crate::proposition::Proposition;
use crate::valeurs::{Doctorat, EmplacementDocument, TitreAccesSelectionnable};

/// Failure of a collaborator, as opposed to a broken business rule.
#[derive(Error, Debug)]
pub enum PortError {
    /// Storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be (de)serialised.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The collaborator is unreachable or refused the request.
    #[error("collaborator unavailable: {0}")]
    Indisponible(String),
}

// ─── Persistence ─────────────────────────────────────────────────────

/// Storage of proposition aggregates.
pub trait PropositionRepository {
    /// The proposition, or `None` when it does not exist.
    fn get(&self, entity_id: &PropositionIdentity) -> Result<Option<Proposition>, PortError>;

    /// Insert or replace a proposition.
    fn save(&self, proposition: &Proposition) -> Result<(), PortError>;

    /// Every proposition, optionally restricted to one candidate, ordered
    /// by reference.
    fn search(&self, matricule_candidat: Option<&str>) -> Result<Vec<Proposition>, PortError>;

    /// Reference for the next created proposition.
    fn prochaine_reference(&self) -> Result<u64, PortError> {
        let derniere = self
            .search(None)?
            .iter()
            .map(Proposition::reference)
            .max()
            .unwrap_or(0);
        Ok(derniere + 1)
    }
}

/// Doctoral programmes, owned by the programme catalogue.
pub trait DoctoratTranslator {
    fn get(&self, formation: &FormationIdentity) -> Option<Doctorat>;
}

// ─── Candidate profile ───────────────────────────────────────────────

/// The candidate's profile: curriculum, experiences, and
/// administrative state.
pub trait ProfilCandidatTranslator {
    /// Check that the curriculum is complete for the given year.
    ///
    /// Reports every problem found. Callers that need a single signal
    /// narrow this themselves.
    fn verifier_curriculum(
        &self,
        matricule: &str,
        annee_courante: i32,
        date_soumission: Option<NaiveDate>,
    ) -> Result<(), MultipleBusinessExceptions<PropositionError>>;

    /// Whether the candidate's file is blocked by a quarantine.
    fn est_en_quarantaine(&self, matricule: &str) -> bool;

    /// Identifiers of the candidate's curriculum experiences.
    fn uuids_experiences(&self, matricule: &str) -> Vec<String>;
}

// ─── Academic years ──────────────────────────────────────────────────

/// An academic year, e.g. 2024 runs from mid-September 2024 to
/// mid-September 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnneeAcademique {
    pub annee: i32,
    pub debut: NaiveDate,
    pub fin: NaiveDate,
}

impl AnneeAcademique {
    /// Whether `date` falls inside this year (bounds included).
    pub fn contient(&self, date: NaiveDate) -> bool {
        self.debut <= date && date <= self.fin
    }
}

pub trait AnneeAcademiqueRepository {
    fn get(&self, annee: i32) -> Option<AnneeAcademique>;

    /// Every known academic year.
    fn search(&self) -> Vec<AnneeAcademique>;

    /// The academic year `date` falls in.
    fn annee_contenant(&self, date: NaiveDate) -> Option<AnneeAcademique> {
        self.search().into_iter().find(|annee| annee.contient(date))
    }
}

// ─── Access titles and documents ─────────────────────────────────────

pub trait TitreAccesSelectionnableRepository {
    /// Access titles of a proposition's candidate, optionally only the
    /// selected ones.
    fn search_by_proposition(
        &self,
        entity_id: &PropositionIdentity,
        seulement_selectionnes: bool,
    ) -> Vec<TitreAccesSelectionnable>;
}

pub trait EmplacementsDocumentsTranslator {
    /// Current document placements of a proposition.
    fn recuperer_emplacements(&self, entity_id: &PropositionIdentity) -> Vec<EmplacementDocument>;

    /// Mark the named placements as requested from the candidate.
    fn reclamer(
        &self,
        entity_id: &PropositionIdentity,
        identifiants: &[String],
        auteur: &str,
        a_echeance_le: NaiveDate,
    ) -> Result<(), PortError>;
}

// ─── Side effects ────────────────────────────────────────────────────

choix_enum! {
    /// What happened to a proposition, for notifications and history.
    pub enum Evenement {
        Initiee => "INITIEE",
        Completee => "COMPLETEE",
        Soumise => "SOUMISE",
        VerrouilleePourSignature => "VERROUILLEE_POUR_SIGNATURE",
        MainRedonneeAuCandidat => "MAIN_REDONNEE_AU_CANDIDAT",
        EnvoyeeACdd => "ENVOYEE_A_CDD",
        InformationsAcceptationSpecifiees => "INFORMATIONS_ACCEPTATION_SPECIFIEES",
        ApprouveeParCdd => "APPROUVEE_PAR_CDD",
        RefuseeParCdd => "REFUSEE_PAR_CDD",
        ApprouveeParSic => "APPROUVEE_PAR_SIC",
        RefuseeParSic => "REFUSEE_PAR_SIC",
        DocumentsReclames => "DOCUMENTS_RECLAMES",
        ParcoursAnterieurModifie => "PARCOURS_ANTERIEUR_MODIFIE",
        ExperienceModifiee => "EXPERIENCE_MODIFIEE",
        ConditionAccesSpecifiee => "CONDITION_ACCES_SPECIFIEE",
        FinancabiliteModifiee => "FINANCABILITE_MODIFIEE",
    }
}

pub trait PdfGeneration {
    /// Render a certificate and return its storage handle.
    fn generer_certificat(
        &self,
        proposition: &Proposition,
        certificat: TypeCertificat,
    ) -> Result<String, PortError>;
}

pub trait Notification {
    /// Tell the candidate (and whoever else follows the file).
    fn notifier(&self, proposition: &Proposition, evenement: Evenement) -> Result<(), PortError>;
}

pub trait Historique {
    /// Append an entry to the proposition's audit trail.
    fn historiser(
        &self,
        proposition: &Proposition,
        evenement: Evenement,
        auteur: &str,
    ) -> Result<(), PortError>;
}
