//! # Checklist Status Configuration
//!
//! The named sub-states of each tab ("A_TRAITER", "CLOTURE",
//! "AUTORISATION_A_VALIDER", ...) and how they map onto a
//! `(statut, extra)` pair. Several sub-states share the same primary
//! status and differ only by an `extra` discriminator.
//!
//! Entries with an `identifiant_parent` refine their parent through an
//! extra key only and carry no primary status of their own.

use std::collections::BTreeMap;

use crate::enums::{BesoinDeDerogation, DecisionCdd, DerogationFinancement, EtatAuthentificationParcours};
use crate::onglets::OngletChecklist;
use crate::statut::{ChoixStatutChecklist, StatutChecklist};

/// One named sub-state of a checklist tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationStatutChecklist {
    pub identifiant: String,
    pub libelle: String,
    pub statut: Option<ChoixStatutChecklist>,
    pub extra: BTreeMap<String, String>,
    pub identifiant_parent: Option<String>,
}

impl ConfigurationStatutChecklist {
    fn new(identifiant: &str, libelle: &str, statut: ChoixStatutChecklist) -> Self {
        Self {
            identifiant: identifiant.to_string(),
            libelle: libelle.to_string(),
            statut: Some(statut),
            extra: BTreeMap::new(),
            identifiant_parent: None,
        }
    }

    fn sous_etat(parent: &str, nom: &str, libelle: &str, cle: &str) -> Self {
        let mut extra = BTreeMap::new();
        extra.insert(cle.to_string(), nom.to_string());
        Self {
            identifiant: format!("{parent}.{nom}"),
            libelle: libelle.to_string(),
            statut: None,
            extra,
            identifiant_parent: Some(parent.to_string()),
        }
    }

    fn avec_extra(mut self, cle: &str, valeur: &str) -> Self {
        self.extra.insert(cle.to_string(), valeur.to_string());
        self
    }

    /// Whether an actual `(statut, extra)` pair is in this sub-state.
    ///
    /// The primary status must be equal and every configured extra entry
    /// must be present with the same value. Additional actual entries are
    /// ignored. Entries without a primary status never match.
    pub fn matches(&self, statut: ChoixStatutChecklist, extra: &BTreeMap<String, String>) -> bool {
        self.statut == Some(statut)
            && self
                .extra
                .iter()
                .all(|(cle, valeur)| extra.get(cle) == Some(valeur))
    }

    /// Whether a checklist status is in this sub-state.
    pub fn matches_statut(&self, statut: &StatutChecklist) -> bool {
        self.matches(statut.statut, &statut.extra)
    }

    /// Build the checklist status for this sub-state.
    ///
    /// Returns `None` for refinement entries that have no primary status.
    pub fn vers_statut(&self) -> Option<StatutChecklist> {
        let statut = self.statut?;
        Some(StatutChecklist {
            libelle: self.libelle.clone(),
            statut,
            enfants: Vec::new(),
            extra: self.extra.clone(),
        })
    }
}

/// All sub-states of one tab, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationOngletChecklist {
    pub statuts: Vec<ConfigurationStatutChecklist>,
}

impl ConfigurationOngletChecklist {
    /// The first sub-state matching an actual status.
    pub fn get_status(&self, statut: &StatutChecklist) -> Option<&ConfigurationStatutChecklist> {
        self.statuts.iter().find(|c| c.matches_statut(statut))
    }

    /// The sub-state named `identifiant`.
    pub fn par_identifiant(&self, identifiant: &str) -> Option<&ConfigurationStatutChecklist> {
        self.statuts.iter().find(|c| c.identifiant == identifiant)
    }
}

// ─── Per-tab tables ──────────────────────────────────────────────────

use ChoixStatutChecklist::{
    GestBlocage, GestBlocageUlterieur, GestEnCours, GestReussite, InitialCandidat,
    InitialNonConcerne,
};

/// Configured sub-states of a tab.
pub fn configuration_onglet(onglet: OngletChecklist) -> ConfigurationOngletChecklist {
    let statuts = match onglet {
        OngletChecklist::DonneesPersonnelles => vec![
            ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
            ConfigurationStatutChecklist::new("A_COMPLETER", "To be completed", GestBlocage)
                .avec_extra("fraud", "0"),
            ConfigurationStatutChecklist::new("FRAUDEUR", "Fraudster", GestBlocage)
                .avec_extra("fraud", "1"),
            ConfigurationStatutChecklist::new("VALIDEES", "Validated", GestReussite),
        ],
        OngletChecklist::Assimilation => vec![
            ConfigurationStatutChecklist::new("NON_CONCERNE", "Not concerned", InitialNonConcerne),
            ConfigurationStatutChecklist::new(
                "DECLARE_ASSIMILE_OU_PAS",
                "Declared assimilated or not",
                InitialCandidat,
            ),
            ConfigurationStatutChecklist::new("A_COMPLETER", "To be completed", GestBlocage),
            ConfigurationStatutChecklist::new("AVIS_EXPERT", "Expert opinion", GestEnCours),
            ConfigurationStatutChecklist::new(
                "A_COMPLETER_APRES_INSCRIPTION",
                "To be completed after application",
                GestBlocageUlterieur,
            ),
            ConfigurationStatutChecklist::new("VALIDEE", "Validated", GestReussite),
        ],
        OngletChecklist::ParcoursAnterieur => vec![
            ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
            ConfigurationStatutChecklist::new("TOILETTE", "Cleaned", GestEnCours),
            ConfigurationStatutChecklist::new("INSUFFISANT", "Insufficient", GestBlocage),
            ConfigurationStatutChecklist::new("SUFFISANT", "Sufficient", GestReussite),
        ],
        OngletChecklist::Financabilite => {
            let mut statuts = vec![
                ConfigurationStatutChecklist::new("NON_CONCERNE", "Not concerned", InitialNonConcerne),
                ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
                ConfigurationStatutChecklist::new("AVIS_EXPERT", "Expert opinion", GestEnCours)
                    .avec_extra("en_cours", "expert"),
                ConfigurationStatutChecklist::new(
                    "BESOIN_DEROGATION",
                    "Dispensation needed",
                    GestEnCours,
                )
                .avec_extra("en_cours", "derogation"),
            ];
            statuts.extend(DerogationFinancement::ALL.iter().map(|d| {
                ConfigurationStatutChecklist::sous_etat(
                    "BESOIN_DEROGATION",
                    d.name(),
                    d.libelle(),
                    "etat_besoin_derogation",
                )
            }));
            statuts.extend([
                ConfigurationStatutChecklist::new("A_COMPLETER", "To be completed", GestBlocage)
                    .avec_extra("to_be_completed", "1"),
                ConfigurationStatutChecklist::new("NON_FINANCABLE", "Not financeable", GestBlocage)
                    .avec_extra("to_be_completed", "0"),
                ConfigurationStatutChecklist::new(
                    "DEROGATION_ACCORDEE",
                    "Dispensation granted",
                    GestReussite,
                )
                .avec_extra("reussite", "derogation"),
                ConfigurationStatutChecklist::new("FINANCABLE", "Financeable", GestReussite)
                    .avec_extra("reussite", "financable"),
            ]);
            statuts
        }
        OngletChecklist::ChoixFormation => vec![
            ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
            ConfigurationStatutChecklist::new("VALIDE", "Validated", GestReussite),
        ],
        OngletChecklist::ProjetRecherche => vec![
            ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
            ConfigurationStatutChecklist::new("A_COMPLETER", "To be completed", GestBlocage),
            ConfigurationStatutChecklist::new("VALIDE", "Validated", GestReussite),
        ],
        OngletChecklist::DecisionCdd => vec![
            ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
            ConfigurationStatutChecklist::new("PRIS_EN_CHARGE", "Taken in charge", GestEnCours),
            ConfigurationStatutChecklist::new(
                "A_COMPLETER_PAR_SIC",
                "To be completed by SIC",
                GestBlocage,
            )
            .avec_extra("decision", DecisionCdd::HorsDecision.name()),
            ConfigurationStatutChecklist::new("CLOTURE", "Closed", GestBlocage)
                .avec_extra("decision", DecisionCdd::Cloture.name()),
            ConfigurationStatutChecklist::new("REFUS", "Refusal", GestBlocage)
                .avec_extra("decision", DecisionCdd::EnDecision.name()),
            ConfigurationStatutChecklist::new("ACCORD", "Approval", GestReussite),
        ],
        OngletChecklist::DecisionSic => {
            let mut statuts = vec![
                ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
                ConfigurationStatutChecklist::new("A_COMPLETER", "Manager follow-up", GestBlocage)
                    .avec_extra("blocage", "to_be_completed"),
                ConfigurationStatutChecklist::new(
                    "BESOIN_DEROGATION",
                    "Dispensation needed",
                    GestEnCours,
                )
                .avec_extra("en_cours", "derogation"),
            ];
            statuts.extend(BesoinDeDerogation::ALL.iter().map(|b| {
                ConfigurationStatutChecklist::sous_etat(
                    "BESOIN_DEROGATION",
                    b.name(),
                    b.libelle(),
                    "etat_besoin_derogation",
                )
            }));
            statuts.extend([
                ConfigurationStatutChecklist::new("REFUS_A_VALIDER", "Refusal to validate", GestEnCours)
                    .avec_extra("en_cours", "refusal"),
                ConfigurationStatutChecklist::new(
                    "AUTORISATION_A_VALIDER",
                    "Approval to validate",
                    GestEnCours,
                )
                .avec_extra("en_cours", "approval"),
                ConfigurationStatutChecklist::new("CLOTURE", "Closed", GestBlocage)
                    .avec_extra("blocage", "closed"),
                ConfigurationStatutChecklist::new("REFUSE", "Refused", GestBlocage)
                    .avec_extra("blocage", "refusal"),
                ConfigurationStatutChecklist::new("AUTORISE", "Approved", GestReussite),
            ]);
            statuts
        }
    };
    ConfigurationOngletChecklist { statuts }
}

/// Configured sub-states of a curriculum experience child.
pub fn configuration_experiences() -> ConfigurationOngletChecklist {
    let mut statuts = vec![
        ConfigurationStatutChecklist::new("A_TRAITER", "To be processed", InitialCandidat),
        ConfigurationStatutChecklist::new("A_COMPLETER", "To be completed", GestBlocage),
        ConfigurationStatutChecklist::new("AUTHENTIFICATION", "Authentication", GestEnCours)
            .avec_extra("authentification", "1"),
    ];
    statuts.extend(EtatAuthentificationParcours::ALL.iter().map(|e| {
        ConfigurationStatutChecklist::sous_etat(
            "AUTHENTIFICATION",
            e.name(),
            e.libelle(),
            "etat_authentification",
        )
    }));
    statuts.extend([
        ConfigurationStatutChecklist::new("AVIS_EXPERT", "Expert advice", GestEnCours)
            .avec_extra("authentification", "0"),
        ConfigurationStatutChecklist::new(
            "A_COMPLETER_APRES_INSCRIPTION",
            "To complete after enrolment",
            GestBlocageUlterieur,
        ),
        ConfigurationStatutChecklist::new("VALIDEE", "Validated", GestReussite),
    ]);
    ConfigurationOngletChecklist { statuts }
}

/// The checklist status of the sub-state `identifiant` of `onglet`.
pub fn statut_configure(onglet: OngletChecklist, identifiant: &str) -> Option<StatutChecklist> {
    configuration_onglet(onglet)
        .par_identifiant(identifiant)
        .and_then(ConfigurationStatutChecklist::vers_statut)
}

/// Name the sub-state an actual tab status is in (e.g. `"CLOTURE"`).
pub fn identifier(onglet: OngletChecklist, statut: &StatutChecklist) -> Option<String> {
    configuration_onglet(onglet)
        .get_status(statut)
        .map(|c| c.identifiant.clone())
}
