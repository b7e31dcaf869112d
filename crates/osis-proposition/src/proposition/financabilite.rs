//! Financeability: the computed outcome, the rule a manager establishes,
//! and the faculty dispensation sub-workflow for non-financeable
//! candidates.
//!
//! Time is always passed in by the caller.

use osis_checklist::{ChoixStatutChecklist, DerogationFinancement, OngletChecklist, StatutChecklist};
use osis_core::Timestamp;

use crate::enums::{EtatFinancabilite, SituationFinancabilite};
use crate::valeurs::MotifRefusIdentity;

use super::{statut_onglet, Proposition, CLE_ETAT_BESOIN_DEROGATION};

fn onglet_financabilite(identifiant: &str, repli: ChoixStatutChecklist) -> StatutChecklist {
    statut_onglet(OngletChecklist::Financabilite, identifiant, repli)
}

/// The financeability tab while a dispensation is pending.
fn onglet_besoin_derogation(etat: DerogationFinancement) -> StatutChecklist {
    onglet_financabilite("BESOIN_DEROGATION", ChoixStatutChecklist::GestEnCours)
        .avec_extra(CLE_ETAT_BESOIN_DEROGATION, etat.name())
}

impl Proposition {
    /// Record the outcome of the automatic financeability computation.
    /// The review tab is left to the manager.
    pub fn specifier_financabilite_resultat_calcul(
        &mut self,
        auteur: &str,
        etat: EtatFinancabilite,
        situation: Option<SituationFinancabilite>,
        maintenant: Timestamp,
    ) {
        self.financabilite_regle_calcule = Some(etat);
        self.financabilite_regle_calcule_situation = situation;
        self.financabilite_regle_calcule_le = Some(maintenant);
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// A manager establishes the rule that applies to the candidate.
    pub fn specifier_financabilite_regle(
        &mut self,
        auteur: &str,
        situation: SituationFinancabilite,
        maintenant: Timestamp,
    ) {
        let onglet = match situation {
            SituationFinancabilite::PlusFinancable => {
                onglet_financabilite("NON_FINANCABLE", ChoixStatutChecklist::GestBlocage)
            }
            SituationFinancabilite::FinancableDerogation => {
                onglet_financabilite("DEROGATION_ACCORDEE", ChoixStatutChecklist::GestReussite)
            }
            _ => onglet_financabilite("FINANCABLE", ChoixStatutChecklist::GestReussite),
        };

        self.financabilite_regle = Some(situation);
        self.financabilite_etabli_par = Some(auteur.to_string());
        self.financabilite_etabli_le = Some(maintenant);
        self.checklist_actuelle.financabilite = onglet;
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// Financeability does not apply to this candidate.
    pub fn specifier_financabilite_non_concernee(&mut self, auteur: &str) {
        self.financabilite_regle = None;
        self.financabilite_etabli_par = None;
        self.financabilite_etabli_le = None;
        self.checklist_actuelle.financabilite =
            onglet_financabilite("NON_CONCERNE", ChoixStatutChecklist::InitialNonConcerne);
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// Move the faculty dispensation forward.
    ///
    /// Refusal motives are recorded only with a faculty refusal; other
    /// states leave the motives untouched.
    pub fn specifier_derogation_financabilite(
        &mut self,
        auteur: &str,
        statut: DerogationFinancement,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) {
        let onglet = match statut {
            DerogationFinancement::AccordDeDerogationFacultaire => {
                onglet_financabilite("DEROGATION_ACCORDEE", ChoixStatutChecklist::GestReussite)
            }
            _ => onglet_besoin_derogation(statut),
        };

        if statut == DerogationFinancement::RefusDeDerogationFacultaire {
            self.motifs_refus = motifs_refus;
            self.autres_motifs_refus = autres_motifs_refus;
        }
        self.financabilite_derogation_statut = statut;
        self.checklist_actuelle.financabilite = onglet;
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// The candidate was told a dispensation is needed. The first
    /// notification is kept; the last one is overwritten.
    pub fn notifier_candidat_derogation_financabilite(&mut self, auteur: &str, maintenant: Timestamp) {
        if self.financabilite_derogation_premiere_notification_le.is_none() {
            self.financabilite_derogation_premiere_notification_le = Some(maintenant);
            self.financabilite_derogation_premiere_notification_par = Some(auteur.to_string());
        }
        self.financabilite_derogation_derniere_notification_le = Some(maintenant);
        self.financabilite_derogation_derniere_notification_par = Some(auteur.to_string());
        self.financabilite_derogation_statut = DerogationFinancement::CandidatNotifie;
        self.checklist_actuelle.financabilite =
            onglet_besoin_derogation(DerogationFinancement::CandidatNotifie);
        self.auteur_derniere_modification = auteur.to_string();
    }
}
