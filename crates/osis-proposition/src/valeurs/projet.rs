//! Research project, funding, and prior research experience.
//!
//! Each value object is replaced as a whole by its setter on the
//! aggregate. Absence is a typed sentinel, never `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ChoixDoctoratDejaRealise, ChoixTypeContratTravail, ChoixTypeFinancement};

// ─── Project ─────────────────────────────────────────────────────────

/// The doctoral research project described by the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailProjet {
    pub titre: String,
    pub resume: String,
    /// Language the thesis will be written in (ISO code).
    pub langue_redaction_these: String,
    /// Identifier of the research institute hosting the thesis.
    pub institut_these: Option<String>,
    pub lieu_these: String,
    pub documents: Vec<String>,
    pub graphe_gantt: Vec<String>,
    pub proposition_programme_doctoral: Vec<String>,
    pub projet_formation_complementaire: Vec<String>,
    pub lettres_recommandation: Vec<String>,
    /// Whether the doctoral project already started elsewhere.
    pub deja_commence: Option<bool>,
    pub deja_commence_institution: String,
    pub date_debut: Option<NaiveDate>,
}

// ─── Funding ─────────────────────────────────────────────────────────

/// How the doctorate is funded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Financement {
    /// `None` only in the [`Financement::non_rempli`] sentinel.
    #[serde(rename = "type")]
    pub type_financement: Option<ChoixTypeFinancement>,
    /// Contract type name, or free text when the type is not listed.
    pub type_contrat_travail: String,
    /// Full-time equivalent, in percent.
    pub eft: Option<u8>,
    pub bourse_recherche: Option<String>,
    pub autre_bourse_recherche: String,
    pub bourse_date_debut: Option<NaiveDate>,
    pub bourse_date_fin: Option<NaiveDate>,
    pub bourse_preuve: Vec<String>,
    /// Expected duration, in months.
    pub duree_prevue: Option<u16>,
    /// Share of working time devoted to the thesis, in percent.
    pub temps_consacre: Option<u8>,
    pub est_lie_fnrs_fria_fresh_csc: Option<bool>,
    pub commentaire: String,
}

impl Financement {
    /// The "no funding specified" sentinel.
    pub fn non_rempli() -> Self {
        Self::default()
    }

    /// Whether this is the sentinel.
    pub fn est_non_rempli(&self) -> bool {
        *self == Self::non_rempli()
    }

    /// The listed contract type, when `type_contrat_travail` names one.
    pub fn contrat_travail(&self) -> Option<ChoixTypeContratTravail> {
        ChoixTypeContratTravail::from_name(&self.type_contrat_travail)
    }
}

// ─── Prior research ──────────────────────────────────────────────────

/// A doctorate the candidate already started or completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePrecedenteRecherche {
    pub doctorat_deja_realise: ChoixDoctoratDejaRealise,
    pub institution: String,
    pub domaine_these: String,
    pub date_soutenance: Option<NaiveDate>,
    pub raison_non_soutenue: String,
}

impl ExperiencePrecedenteRecherche {
    /// The "no prior doctorate" sentinel.
    pub fn aucune() -> Self {
        Self {
            doctorat_deja_realise: ChoixDoctoratDejaRealise::No,
            institution: String::new(),
            domaine_these: String::new(),
            date_soutenance: None,
            raison_non_soutenue: String::new(),
        }
    }
}

impl Default for ExperiencePrecedenteRecherche {
    fn default() -> Self {
        Self::aucune()
    }
}
