//! Faculty (CDD) decision transitions.
//!
//! SIC hands the proposition to the doctoral committee, which records
//! its acceptance details or refusal motives, then approves or refuses.
//! Either decision returns the file to SIC (`RETOUR_DE_FAC`) and sets the
//! `decision_cdd` tab in the same step.

use osis_checklist::{ChoixStatutChecklist, OngletChecklist};

use crate::enums::ChoixStatutPropositionDoctorale;
use crate::exceptions::TransitionError;
use crate::valeurs::{
    ComplementFormationIdentity, ConditionComplementaireIdentity, ConditionComplementaireLibre,
    MotifRefusIdentity, TitreAccesSelectionnable,
};
use crate::validator::{
    ApprouverParCddValidatorList, EnvoyerACddValidatorList, RefuserParCddValidatorList,
    SpecifierInformationsAcceptationCddValidatorList,
    SpecifierInformationsDecisionCddValidatorList,
};

use super::{statut_onglet, valider, Proposition};

/// Acceptance details recorded before an approval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformationsAcceptation {
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: Vec<ConditionComplementaireIdentity>,
    pub conditions_complementaires_libres: Vec<ConditionComplementaireLibre>,
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: Vec<ComplementFormationIdentity>,
    pub commentaire_complements_formation: String,
    pub nombre_annees_prevoir_programme: Option<u8>,
    pub nom_personne_contact_programme_annuel: String,
    pub email_personne_contact_programme_annuel: String,
    pub commentaire_programme_conjoint: String,
}

impl Proposition {
    pub(crate) fn appliquer_acceptation(&mut self, infos: InformationsAcceptation) {
        self.avec_conditions_complementaires = infos.avec_conditions_complementaires;
        self.conditions_complementaires_existantes = infos.conditions_complementaires_existantes;
        self.conditions_complementaires_libres = infos.conditions_complementaires_libres;
        self.avec_complements_formation = infos.avec_complements_formation;
        self.complements_formation = infos.complements_formation;
        self.commentaire_complements_formation = infos.commentaire_complements_formation;
        self.nombre_annees_prevoir_programme = infos.nombre_annees_prevoir_programme;
        self.nom_personne_contact_programme_annuel = infos.nom_personne_contact_programme_annuel;
        self.email_personne_contact_programme_annuel = infos.email_personne_contact_programme_annuel;
        self.commentaire_programme_conjoint = infos.commentaire_programme_conjoint;
    }

    /// SIC sends the proposition to the faculty for a decision.
    pub fn envoyer_a_cdd_pour_decision(&mut self, auteur: &str) -> Result<(), TransitionError> {
        valider(&EnvoyerACddValidatorList { statut: self.statut })?;

        self.statut = ChoixStatutPropositionDoctorale::TraitementFac;
        self.checklist_actuelle.decision_cdd = statut_onglet(
            OngletChecklist::DecisionCdd,
            "A_TRAITER",
            ChoixStatutChecklist::InitialCandidat,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Record the faculty's acceptance details, without deciding yet.
    pub fn specifier_informations_acceptation_par_cdd(
        &mut self,
        auteur: &str,
        infos: InformationsAcceptation,
    ) -> Result<(), TransitionError> {
        valider(&SpecifierInformationsAcceptationCddValidatorList {
            statut: self.statut,
            avec_complements_formation: infos.avec_complements_formation,
            complements_formation: &infos.complements_formation,
            commentaire_complements_formation: &infos.commentaire_complements_formation,
        })?;

        self.appliquer_acceptation(infos);
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Record the faculty's refusal motives and flag the decision tab.
    pub fn specifier_motifs_refus_par_cdd(
        &mut self,
        auteur: &str,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) -> Result<(), TransitionError> {
        valider(&SpecifierInformationsDecisionCddValidatorList { statut: self.statut })?;

        self.motifs_refus = motifs_refus;
        self.autres_motifs_refus = autres_motifs_refus;
        self.checklist_actuelle.decision_cdd = statut_onglet(
            OngletChecklist::DecisionCdd,
            "REFUS",
            ChoixStatutChecklist::GestBlocage,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// The faculty approves, using the acceptance details recorded earlier.
    pub fn approuver_par_cdd(
        &mut self,
        auteur: &str,
        titres_selectionnes: &[TitreAccesSelectionnable],
    ) -> Result<(), TransitionError> {
        valider(&ApprouverParCddValidatorList {
            statut: self.statut,
            checklist_actuelle: &self.checklist_actuelle,
            titres_selectionnes,
            avec_conditions_complementaires: self.avec_conditions_complementaires,
            conditions_complementaires_existantes: &self.conditions_complementaires_existantes,
            conditions_complementaires_libres: &self.conditions_complementaires_libres,
            nombre_annees_prevoir_programme: self.nombre_annees_prevoir_programme,
            avec_complements_formation: self.avec_complements_formation,
            complements_formation: &self.complements_formation,
            commentaire_complements_formation: &self.commentaire_complements_formation,
        })?;

        self.statut = ChoixStatutPropositionDoctorale::RetourDeFac;
        self.checklist_actuelle.decision_cdd = statut_onglet(
            OngletChecklist::DecisionCdd,
            "ACCORD",
            ChoixStatutChecklist::GestReussite,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// The faculty refuses, using the motives recorded earlier.
    pub fn refuser_par_cdd(
        &mut self,
        auteur: &str,
        titres_selectionnes: &[TitreAccesSelectionnable],
    ) -> Result<(), TransitionError> {
        valider(&RefuserParCddValidatorList {
            statut: self.statut,
            checklist_actuelle: &self.checklist_actuelle,
            titres_selectionnes,
            motifs_refus: &self.motifs_refus,
            autres_motifs_refus: &self.autres_motifs_refus,
        })?;

        self.statut = ChoixStatutPropositionDoctorale::RetourDeFac;
        self.checklist_actuelle.decision_cdd = statut_onglet(
            OngletChecklist::DecisionCdd,
            "REFUS",
            ChoixStatutChecklist::GestBlocage,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }
}
