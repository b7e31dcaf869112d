//! # Checklist Sub-Statuses
//!
//! A [`StatutChecklist`] is the review state of one checklist tab: a
//! primary [`ChoixStatutChecklist`] plus a free-form `extra` map that
//! carries discriminators the enum alone does not capture (for example
//! `{"decision": "EN_DECISION"}` on the CDD decision tab).
//!
//! Assignment is full replacement. Setting a tab to a new
//! `StatutChecklist` discards the previous value entirely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

osis_core::choix_enum! {
    /// Primary review state of a checklist tab.
    pub enum ChoixStatutChecklist {
        /// Not reviewed yet; data as entered by the candidate.
        InitialCandidat => "INITIAL_CANDIDAT",
        /// The tab does not apply to this proposition.
        InitialNonConcerne => "INITIAL_NON_CONCERNE",
        /// A manager is working on the tab.
        GestEnCours => "GEST_EN_COURS",
        /// The tab blocks the proposition.
        GestBlocage => "GEST_BLOCAGE",
        /// The tab will block later, after enrolment.
        GestBlocageUlterieur => "GEST_BLOCAGE_ULTERIEUR",
        /// Validated by a manager.
        GestReussite => "GEST_REUSSITE",
        /// Validated automatically.
        SystReussite => "SYST_REUSSITE",
    }
}

/// Key of the child identifier in a child status's `extra` map.
pub const CLE_IDENTIFIANT: &str = "identifiant";

/// Key of the authentication flag in an experience child's `extra` map.
pub const CLE_AUTHENTIFICATION: &str = "authentification";

/// Key of the authentication state in an experience child's `extra` map.
pub const CLE_ETAT_AUTHENTIFICATION: &str = "etat_authentification";

/// Persisted value of a positive authentication flag.
pub const AUTHENTIFICATION_OUI: &str = "1";

/// Persisted value of a negative authentication flag.
pub const AUTHENTIFICATION_NON: &str = "0";

/// Review state of one checklist tab, or of one child of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutChecklist {
    /// Display label of the state.
    #[serde(default)]
    pub libelle: String,
    /// Primary review state.
    pub statut: ChoixStatutChecklist,
    /// Per-item sub-statuses (one per curriculum experience on the
    /// prior-studies tab).
    #[serde(default)]
    pub enfants: Vec<StatutChecklist>,
    /// Secondary discriminators. Values are strings; booleans are stored
    /// as `"1"` / `"0"`.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl StatutChecklist {
    /// A childless status with no extra data.
    pub fn new(statut: ChoixStatutChecklist, libelle: impl Into<String>) -> Self {
        Self {
            libelle: libelle.into(),
            statut,
            enfants: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Builder: add one `extra` entry.
    pub fn avec_extra(mut self, cle: impl Into<String>, valeur: impl Into<String>) -> Self {
        self.extra.insert(cle.into(), valeur.into());
        self
    }

    /// Read one `extra` entry.
    pub fn extra(&self, cle: &str) -> Option<&str> {
        self.extra.get(cle).map(String::as_str)
    }

    /// The child identifier stored in `extra`, if any.
    pub fn identifiant(&self) -> Option<&str> {
        self.extra(CLE_IDENTIFIANT)
    }

    /// Set or clear the string-encoded authentication flag.
    ///
    /// `Some(true)` stores `"1"`, `Some(false)` stores `"0"`, `None`
    /// removes the key.
    pub fn definir_authentification(&mut self, authentification: Option<bool>) {
        match authentification {
            Some(true) => {
                self.extra
                    .insert(CLE_AUTHENTIFICATION.to_string(), AUTHENTIFICATION_OUI.to_string());
            }
            Some(false) => {
                self.extra
                    .insert(CLE_AUTHENTIFICATION.to_string(), AUTHENTIFICATION_NON.to_string());
            }
            None => {
                self.extra.remove(CLE_AUTHENTIFICATION);
            }
        }
    }

    /// Decode the authentication flag. Any value other than `"1"`/`"0"`
    /// reads as absent.
    pub fn authentification(&self) -> Option<bool> {
        match self.extra(CLE_AUTHENTIFICATION) {
            Some(AUTHENTIFICATION_OUI) => Some(true),
            Some(AUTHENTIFICATION_NON) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avec_extra_accumulates() {
        let statut = StatutChecklist::new(ChoixStatutChecklist::GestBlocage, "Closed")
            .avec_extra("decision", "CLOTURE")
            .avec_extra("motif", "x");
        assert_eq!(statut.extra("decision"), Some("CLOTURE"));
        assert_eq!(statut.extra("motif"), Some("x"));
        assert_eq!(statut.extra("absent"), None);
    }

    // ── Authentication flag encoding ─────────────────────────────────

    #[test]
    fn test_authentification_is_string_encoded() {
        let mut statut = StatutChecklist::new(ChoixStatutChecklist::GestEnCours, "");

        statut.definir_authentification(Some(true));
        assert_eq!(statut.extra(CLE_AUTHENTIFICATION), Some("1"));
        assert_eq!(statut.authentification(), Some(true));

        statut.definir_authentification(Some(false));
        assert_eq!(statut.extra(CLE_AUTHENTIFICATION), Some("0"));
        assert_eq!(statut.authentification(), Some(false));

        statut.definir_authentification(None);
        assert!(!statut.extra.contains_key(CLE_AUTHENTIFICATION));
        assert_eq!(statut.authentification(), None);
    }

    #[test]
    fn test_unknown_authentification_value_reads_as_absent() {
        let statut = StatutChecklist::new(ChoixStatutChecklist::GestEnCours, "")
            .avec_extra(CLE_AUTHENTIFICATION, "true");
        assert_eq!(statut.authentification(), None);
    }

    // ── Serde ────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let statut: StatutChecklist =
            serde_json::from_str(r#"{"statut": "GEST_REUSSITE"}"#).unwrap();
        assert_eq!(statut.statut, ChoixStatutChecklist::GestReussite);
        assert!(statut.libelle.is_empty());
        assert!(statut.enfants.is_empty());
        assert!(statut.extra.is_empty());
    }

    #[test]
    fn test_serialize_keeps_string_flags() {
        let mut statut = StatutChecklist::new(ChoixStatutChecklist::GestEnCours, "Authentication");
        statut.definir_authentification(Some(true));
        let json = serde_json::to_value(&statut).unwrap();
        assert_eq!(json["statut"], "GEST_EN_COURS");
        assert_eq!(json["extra"]["authentification"], "1");
    }
}
