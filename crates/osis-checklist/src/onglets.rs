//! # Doctoral Checklist Tabs
//!
//! [`StatutsChecklistDoctorale`] holds one [`StatutChecklist`] per tab. A
//! proposition owns two of them: a frozen baseline captured at submission
//! and the live tree that managers keep updating.
//!
//! Child lookup returns `Option`. Whether a missing child is created on
//! demand or treated as an error is decided by the caller.

use serde::{Deserialize, Serialize};

use crate::statut::{
    ChoixStatutChecklist, StatutChecklist, CLE_ETAT_AUTHENTIFICATION, CLE_IDENTIFIANT,
};
use crate::enums::EtatAuthentificationParcours;

osis_core::choix_enum! {
    /// The checklist tabs of a doctoral proposition, in display order.
    pub enum OngletChecklist {
        /// Identity and contact data.
        DonneesPersonnelles => "donnees_personnelles",
        /// Belgian student status.
        Assimilation => "assimilation",
        /// Prior studies, with one child per curriculum experience.
        ParcoursAnterieur => "parcours_anterieur",
        /// Financeability.
        Financabilite => "financabilite",
        /// Programme choice.
        ChoixFormation => "choix_formation",
        /// Research project.
        ProjetRecherche => "projet_recherche",
        /// Faculty (CDD) decision.
        DecisionCdd => "decision_cdd",
        /// Central administration (SIC) decision.
        DecisionSic => "decision_sic",
    }
}

/// Per-tab review state of a doctoral proposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutsChecklistDoctorale {
    pub donnees_personnelles: StatutChecklist,
    pub assimilation: StatutChecklist,
    pub parcours_anterieur: StatutChecklist,
    pub financabilite: StatutChecklist,
    pub choix_formation: StatutChecklist,
    pub projet_recherche: StatutChecklist,
    pub decision_cdd: StatutChecklist,
    pub decision_sic: StatutChecklist,
}

impl StatutsChecklistDoctorale {
    /// The checklist of a freshly submitted proposition.
    ///
    /// Every tab starts in its candidate state, except financeability
    /// which starts as not concerned. The prior-studies tab gets one
    /// child per curriculum experience.
    pub fn initiale<I, S>(uuids_experiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let a_traiter = || StatutChecklist::new(ChoixStatutChecklist::InitialCandidat, "To be processed");

        let mut parcours_anterieur = a_traiter();
        parcours_anterieur.enfants = uuids_experiences
            .into_iter()
            .map(nouvel_enfant_experience)
            .collect();

        Self {
            donnees_personnelles: a_traiter(),
            assimilation: StatutChecklist::new(
                ChoixStatutChecklist::InitialCandidat,
                "Declared assimilated or not",
            ),
            parcours_anterieur,
            financabilite: StatutChecklist::new(
                ChoixStatutChecklist::InitialNonConcerne,
                "Not concerned",
            ),
            choix_formation: a_traiter(),
            projet_recherche: a_traiter(),
            decision_cdd: a_traiter(),
            decision_sic: a_traiter(),
        }
    }

    /// The status of one tab.
    pub fn onglet(&self, onglet: OngletChecklist) -> &StatutChecklist {
        match onglet {
            OngletChecklist::DonneesPersonnelles => &self.donnees_personnelles,
            OngletChecklist::Assimilation => &self.assimilation,
            OngletChecklist::ParcoursAnterieur => &self.parcours_anterieur,
            OngletChecklist::Financabilite => &self.financabilite,
            OngletChecklist::ChoixFormation => &self.choix_formation,
            OngletChecklist::ProjetRecherche => &self.projet_recherche,
            OngletChecklist::DecisionCdd => &self.decision_cdd,
            OngletChecklist::DecisionSic => &self.decision_sic,
        }
    }

    /// Mutable access to the status of one tab.
    pub fn onglet_mut(&mut self, onglet: OngletChecklist) -> &mut StatutChecklist {
        match onglet {
            OngletChecklist::DonneesPersonnelles => &mut self.donnees_personnelles,
            OngletChecklist::Assimilation => &mut self.assimilation,
            OngletChecklist::ParcoursAnterieur => &mut self.parcours_anterieur,
            OngletChecklist::Financabilite => &mut self.financabilite,
            OngletChecklist::ChoixFormation => &mut self.choix_formation,
            OngletChecklist::ProjetRecherche => &mut self.projet_recherche,
            OngletChecklist::DecisionCdd => &mut self.decision_cdd,
            OngletChecklist::DecisionSic => &mut self.decision_sic,
        }
    }

    /// Find the child of `onglet` whose identifier is `identifiant`.
    pub fn recuperer_enfant(
        &self,
        onglet: OngletChecklist,
        identifiant: &str,
    ) -> Option<&StatutChecklist> {
        self.onglet(onglet)
            .enfants
            .iter()
            .find(|enfant| enfant.identifiant() == Some(identifiant))
    }

    /// Mutable variant of [`recuperer_enfant`](Self::recuperer_enfant).
    pub fn recuperer_enfant_mut(
        &mut self,
        onglet: OngletChecklist,
        identifiant: &str,
    ) -> Option<&mut StatutChecklist> {
        self.onglet_mut(onglet)
            .enfants
            .iter_mut()
            .find(|enfant| enfant.identifiant() == Some(identifiant))
    }

    /// Children of the prior-studies tab (one per experience).
    pub fn experiences(&self) -> &[StatutChecklist] {
        &self.parcours_anterieur.enfants
    }
}

/// A new, untouched experience child.
pub fn nouvel_enfant_experience(identifiant: impl Into<String>) -> StatutChecklist {
    StatutChecklist::new(ChoixStatutChecklist::InitialCandidat, "To be processed")
        .avec_extra(CLE_IDENTIFIANT, identifiant)
        .avec_extra(
            CLE_ETAT_AUTHENTIFICATION,
            EtatAuthentificationParcours::NonConcerne.name(),
        )
}
