//! Read-only records owned by other bounded contexts: the doctorate a
//! proposition targets, the candidate's selectable access titles, and
//! document placements.

use serde::{Deserialize, Serialize};

use osis_core::FormationIdentity;

use crate::enums::{StatutEmplacementDocument, StatutReclamationEmplacementDocument};

// ─── Doctorate ───────────────────────────────────────────────────────

/// A doctoral programme for one academic year, with the doctoral
/// committee (CDD) that manages it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctorat {
    pub entity_id: FormationIdentity,
    pub intitule: String,
    /// Acronym of the managing doctoral committee (`CDE`, `CLSM`, `CDSS`, ...).
    pub sigle_entite_gestion: String,
}

impl Doctorat {
    pub fn new(
        entity_id: FormationIdentity,
        intitule: impl Into<String>,
        sigle_entite_gestion: impl Into<String>,
    ) -> Self {
        Self {
            entity_id,
            intitule: intitule.into(),
            sigle_entite_gestion: sigle_entite_gestion.into(),
        }
    }

    /// Programme acronym.
    pub fn sigle(&self) -> &str {
        &self.entity_id.sigle
    }
}

// ─── Access titles ───────────────────────────────────────────────────

/// Kind of record an access title comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeTitreAccesSelectionnable {
    ExperiencesAcademiques,
    ExperiencesNonAcademiques,
    EtudesSecondaires,
}

/// A prior qualification that may be selected as the legal basis of the
/// admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitreAccesSelectionnable {
    pub uuid_experience: String,
    pub type_titre: TypeTitreAccesSelectionnable,
    /// Academic year the title was obtained.
    pub annee: Option<i32>,
    pub selectionne: bool,
}

// ─── Documents ───────────────────────────────────────────────────────

/// One document placement of a proposition, as seen by the reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmplacementDocument {
    pub identifiant: String,
    pub statut: StatutEmplacementDocument,
    pub statut_reclamation: Option<StatutReclamationEmplacementDocument>,
    pub justification_gestionnaire: String,
}

impl EmplacementDocument {
    /// Whether the document is still expected and must be returned
    /// before the proposition can move on.
    pub fn est_a_reclamer_immediatement(&self) -> bool {
        self.statut.est_dans_a_reclamer()
            && self.statut_reclamation == Some(StatutReclamationEmplacementDocument::Immediatement)
    }
}

impl StatutEmplacementDocument {
    fn est_dans_a_reclamer(&self) -> bool {
        Self::A_RECLAMER.contains(self)
    }
}

// ─── Decision references ─────────────────────────────────────────────

/// Reference to a configured refusal motive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotifRefusIdentity(pub String);

/// Reference to a configured training complement (additional course).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplementFormationIdentity(pub String);

/// Reference to a configured approval condition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionComplementaireIdentity(pub String);

/// A free-text approval condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionComplementaireLibre {
    pub nom_fr: String,
    pub nom_en: String,
    /// Whether the condition concerns a training complement.
    pub liee_a_complement_formation: bool,
}
