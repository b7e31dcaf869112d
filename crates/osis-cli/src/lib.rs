//! # osis-cli: Command-Line Driver for Doctoral Propositions
//!
//! Provides the `osis` binary. Propositions live as JSON files in the
//! state directory (`OSIS_STATE_DIR`); every other collaborator is the
//! in-memory one from `osis-proposition`, seeded from command arguments
//! where a command needs it (selected access titles, curriculum
//! experiences).
//!
//! ## Subcommands
//!
//! - `osis init`, `complete`, `lock`, `submit`: candidate side.
//! - `osis send-to-cdd`, `cdd approve|refuse`, `sic approve|refuse`:
//!   decisions.
//! - `osis request-documents`: ask the candidate for documents.
//! - `osis checklist past-studies|experience`, `access-condition`:
//!   prior-studies review.
//! - `osis show`, `list`: read-only.
//!
//! ## Exit Codes
//!
//! `0` on success, [`EXIT_REJET`] when a business rule rejected the
//! command (every `status_code: message` line goes to stderr), `1` on
//! any other failure.

pub mod checklist;
pub mod decision;
pub mod proposition;
pub mod store;

use anyhow::{anyhow, Result};

use osis_core::{AdmissionConfig, PropositionIdentity};
use osis_proposition::in_memory::EnvironnementInMemory;
use osis_proposition::valeurs::{TitreAccesSelectionnable, TypeTitreAccesSelectionnable};
use osis_proposition::{PropositionService, ServiceError, TransitionError};

use store::JsonPropositionStore;

/// Exit code of a command rejected by a business rule.
pub const EXIT_REJET: u8 = 2;

/// What every command runs against.
pub struct Contexte {
    pub config: AdmissionConfig,
    pub store: JsonPropositionStore,
    pub environnement: EnvironnementInMemory,
    /// Who is acting.
    pub auteur: String,
}

impl Contexte {
    pub fn new(config: AdmissionConfig, auteur: impl Into<String>) -> Self {
        Self {
            store: JsonPropositionStore::new(config.state_dir.clone()),
            config,
            environnement: EnvironnementInMemory::new(),
            auteur: auteur.into(),
        }
    }

    pub fn service(&self) -> PropositionService<'_> {
        PropositionService::new(self.environnement.avec_propositions(&self.store), &self.config)
    }

    /// Make `titres` the selected access titles of `entity_id`.
    pub fn selectionner_titres(&self, entity_id: &PropositionIdentity, titres: &[TitreAccesSelectionnable]) {
        self.environnement
            .titres_acces
            .definir(entity_id, titres.to_vec());
    }
}

/// Turn a use-case outcome into an exit code.
///
/// Business rejections are reported on stderr, one line per collected
/// exception. Collaborator failures become errors.
pub fn terminer<T>(resultat: Result<T, ServiceError>, succes: impl FnOnce(T)) -> Result<u8> {
    match resultat {
        Ok(valeur) => {
            succes(valeur);
            Ok(0)
        }
        Err(ServiceError::Transition(e)) => {
            for ligne in lignes_rejet(&e) {
                eprintln!("{ligne}");
            }
            Ok(EXIT_REJET)
        }
        Err(ServiceError::Port(e)) => Err(anyhow::Error::new(e).context("collaborator failure")),
    }
}

/// `status_code: message`, one per reported exception, in order.
pub fn lignes_rejet(erreur: &TransitionError) -> Vec<String> {
    erreur
        .status_codes()
        .into_iter()
        .zip(erreur.exceptions())
        .map(|(code, exception)| format!("{code}: {exception}"))
        .collect()
}

/// Parse a closed-enumeration name, listing the accepted names on error.
pub fn parse_nom<T: Copy + std::fmt::Display>(
    valeur: &str,
    from_name: fn(&str) -> Option<T>,
    tous: &[T],
) -> Result<T> {
    from_name(valeur).ok_or_else(|| {
        let noms: Vec<String> = tous.iter().map(ToString::to_string).collect();
        anyhow!("unknown value {valeur:?} (expected one of: {})", noms.join(", "))
    })
}

/// Parse a selected access title given as `EXPERIENCE[:YEAR]`.
pub fn parse_titre(valeur: &str) -> std::result::Result<TitreAccesSelectionnable, String> {
    let (uuid, annee) = match valeur.split_once(':') {
        Some((uuid, annee)) => {
            let annee = annee
                .parse::<i32>()
                .map_err(|e| format!("invalid year in {valeur:?}: {e}"))?;
            (uuid, Some(annee))
        }
        None => (valeur, None),
    };
    if uuid.trim().is_empty() {
        return Err(format!("missing experience identifier in {valeur:?}"));
    }
    Ok(TitreAccesSelectionnable {
        uuid_experience: uuid.to_string(),
        type_titre: TypeTitreAccesSelectionnable::ExperiencesAcademiques,
        annee,
        selectionne: true,
    })
}
