//! Rules gating the faculty (CDD) and central administration (SIC)
//! decisions: who may act in which status, what a decision must carry,
//! and which checklist states allow an approval.

use osis_checklist::{
    BesoinDeDerogation, ChoixStatutChecklist, DecisionCdd, StatutsChecklistDoctorale,
};
use osis_validation::{BusinessValidator, MultipleBusinessExceptions};

use crate::enums::{ChoixStatutPropositionDoctorale, TypeDemande};
use crate::exceptions::PropositionError;
use crate::valeurs::{
    ConditionComplementaireIdentity, ConditionComplementaireLibre, EmplacementDocument,
    MotifRefusIdentity, TitreAccesSelectionnable,
};

const CLE_DECISION: &str = "decision";
const CLE_EN_COURS: &str = "en_cours";
const EN_COURS_DEROGATION: &str = "derogation";

// ─── Actor gates ─────────────────────────────────────────────────────

/// SIC may hand the proposition to the CDD only from its own statuses.
pub struct ShouldSicPeutSoumettreACddLorsDeLaDecisionCdd {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldSicPeutSoumettreACddLorsDeLaDecisionCdd {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self
            .statut
            .est_dans(ChoixStatutPropositionDoctorale::ENVOYABLE_EN_CDD_POUR_DECISION)
        {
            return Err(PropositionError::SituationPropositionNonSic);
        }
        Ok(())
    }
}

pub struct ShouldCddPeutDonnerDecision {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldCddPeutDonnerDecision {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self.statut.est_dans(ChoixStatutPropositionDoctorale::SOUMISE_POUR_CDD) {
            return Err(PropositionError::SituationPropositionNonCdd);
        }
        Ok(())
    }
}

/// Decision details may also be edited while documents are requested.
pub struct ShouldPeutSpecifierInformationsDecisionCdd {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldPeutSpecifierInformationsDecisionCdd {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self
            .statut
            .est_dans(ChoixStatutPropositionDoctorale::SOUMISE_POUR_CDD_ETENDUS)
        {
            return Err(PropositionError::SituationPropositionNonCdd);
        }
        Ok(())
    }
}

pub struct ShouldSicPeutDonnerDecision {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldSicPeutDonnerDecision {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self.statut.est_dans(ChoixStatutPropositionDoctorale::SOUMISE_POUR_SIC) {
            return Err(PropositionError::SituationPropositionNonSic);
        }
        Ok(())
    }
}

pub struct ShouldPeutSpecifierInformationsDecisionSic {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldPeutSpecifierInformationsDecisionSic {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self
            .statut
            .est_dans(ChoixStatutPropositionDoctorale::SOUMISE_POUR_SIC_ETENDUS)
        {
            return Err(PropositionError::SituationPropositionNonSic);
        }
        Ok(())
    }
}

/// A closed CDD decision cannot be reopened.
pub struct ShouldStatutDecisionCddEtreDifferentCloture<'a> {
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldStatutDecisionCddEtreDifferentCloture<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.checklist_actuelle.decision_cdd.extra(CLE_DECISION) == Some(DecisionCdd::Cloture.name())
        {
            return Err(PropositionError::StatutChecklistDecisionCddDoitEtreDifferentCloture);
        }
        Ok(())
    }
}

// ─── Request type ────────────────────────────────────────────────────

pub struct ShouldDemandeEtreTypeAdmission {
    pub type_demande: TypeDemande,
}

impl BusinessValidator<PropositionError> for ShouldDemandeEtreTypeAdmission {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.type_demande != TypeDemande::Admission {
            return Err(PropositionError::DemandeDoitEtreAdmission);
        }
        Ok(())
    }
}

pub struct ShouldDemandeEtreTypeInscription {
    pub type_demande: TypeDemande,
}

impl BusinessValidator<PropositionError> for ShouldDemandeEtreTypeInscription {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.type_demande != TypeDemande::Inscription {
            return Err(PropositionError::DemandeDoitEtreInscription);
        }
        Ok(())
    }
}

// ─── Decision content ────────────────────────────────────────────────

pub struct ShouldSpecifierMotifRefus<'a> {
    pub motifs_refus: &'a [MotifRefusIdentity],
    pub autres_motifs_refus: &'a [String],
}

impl BusinessValidator<PropositionError> for ShouldSpecifierMotifRefus<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.motifs_refus.is_empty() && self.autres_motifs_refus.is_empty() {
            return Err(PropositionError::MotifRefusNonSpecifie);
        }
        Ok(())
    }
}

/// An admission approval states whether it has conditions (and lists
/// them if so) and how many years the programme should last.
pub struct ShouldSpecifierInformationsAcceptation<'a> {
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: &'a [ConditionComplementaireIdentity],
    pub conditions_complementaires_libres: &'a [ConditionComplementaireLibre],
    pub nombre_annees_prevoir_programme: Option<u8>,
}

impl BusinessValidator<PropositionError> for ShouldSpecifierInformationsAcceptation<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        let sans_condition = self.conditions_complementaires_existantes.is_empty()
            && self.conditions_complementaires_libres.is_empty();
        let incomplet = match self.avec_conditions_complementaires {
            None => true,
            Some(true) => sans_condition,
            Some(false) => false,
        } || self.nombre_annees_prevoir_programme.unwrap_or(0) == 0;

        if incomplet {
            return Err(PropositionError::InformationsAcceptationNonSpecifiees);
        }
        Ok(())
    }
}

/// The enrolment variant only checks that announced conditions are
/// listed.
pub struct ShouldSpecifierInformationsAcceptationInscription<'a> {
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: &'a [ConditionComplementaireIdentity],
    pub conditions_complementaires_libres: &'a [ConditionComplementaireLibre],
}

impl BusinessValidator<PropositionError> for ShouldSpecifierInformationsAcceptationInscription<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.avec_conditions_complementaires == Some(true)
            && self.conditions_complementaires_existantes.is_empty()
            && self.conditions_complementaires_libres.is_empty()
        {
            return Err(PropositionError::InformationsAcceptationNonSpecifiees);
        }
        Ok(())
    }
}

pub struct ShouldSelectionnerTitreAccesPourEnvoyerASic<'a> {
    pub titres_selectionnes: &'a [TitreAccesSelectionnable],
}

impl BusinessValidator<PropositionError> for ShouldSelectionnerTitreAccesPourEnvoyerASic<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.titres_selectionnes.is_empty() {
            return Err(PropositionError::TitreAccesEtreSelectionnePourEnvoyerASic);
        }
        Ok(())
    }
}

// ─── Approval preconditions ──────────────────────────────────────────

pub struct ShouldNePasAvoirDeDocumentReclameImmediat<'a> {
    pub documents: &'a [EmplacementDocument],
}

impl BusinessValidator<PropositionError> for ShouldNePasAvoirDeDocumentReclameImmediat<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self
            .documents
            .iter()
            .any(EmplacementDocument::est_a_reclamer_immediatement)
        {
            return Err(PropositionError::DocumentAReclamerImmediat);
        }
        Ok(())
    }
}

/// Financeability must be settled: not concerned, or established.
pub struct ShouldFinancabiliteEtreDansEtatCorrectPourApprouverDemande<'a> {
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
}

impl BusinessValidator<PropositionError>
    for ShouldFinancabiliteEtreDansEtatCorrectPourApprouverDemande<'_>
{
    fn validate(&self) -> Result<(), PropositionError> {
        match self.checklist_actuelle.financabilite.statut {
            ChoixStatutChecklist::InitialNonConcerne | ChoixStatutChecklist::GestReussite => Ok(()),
            _ => Err(PropositionError::EtatChecklistFinancabiliteNonValidePourApprouverDemande),
        }
    }
}

/// An enrolment is approved from an untouched SIC decision, or from a
/// dispensation request that management approved.
pub struct ShouldChecklistEtreDansEtatCorrectPourApprouverInscription<'a> {
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
    pub besoin_de_derogation: BesoinDeDerogation,
}

impl BusinessValidator<PropositionError>
    for ShouldChecklistEtreDansEtatCorrectPourApprouverInscription<'_>
{
    fn validate(&self) -> Result<(), PropositionError> {
        let decision_sic = &self.checklist_actuelle.decision_sic;
        let derogation_accordee = decision_sic.statut == ChoixStatutChecklist::GestEnCours
            && decision_sic.extra(CLE_EN_COURS) == Some(EN_COURS_DEROGATION)
            && self.besoin_de_derogation == BesoinDeDerogation::AccordDirection;

        if decision_sic.statut == ChoixStatutChecklist::InitialCandidat || derogation_accordee {
            Ok(())
        } else {
            Err(PropositionError::EtatChecklistDecisionSicNonValidePourApprouverUneInscription)
        }
    }
}

pub struct ShouldDonneesPersonnellesEtreValidees<'a> {
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldDonneesPersonnellesEtreValidees<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.checklist_actuelle.donnees_personnelles.statut != ChoixStatutChecklist::GestReussite {
            return Err(PropositionError::EtatChecklistDonneesPersonnellesNonValidePourApprouverDemande);
        }
        Ok(())
    }
}

pub struct ShouldNePasEtreEnQuarantaine {
    pub en_quarantaine: bool,
}

impl BusinessValidator<PropositionError> for ShouldNePasEtreEnQuarantaine {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.en_quarantaine {
            return Err(PropositionError::EnQuarantaine);
        }
        Ok(())
    }
}

/// Narrows whatever the curriculum check reported into the single
/// approval-time exception.
pub struct ShouldCurriculumEtreCompletPourAcceptation<'a> {
    pub verification_curriculum: &'a Result<(), MultipleBusinessExceptions<PropositionError>>,
}

impl BusinessValidator<PropositionError> for ShouldCurriculumEtreCompletPourAcceptation<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        self.verification_curriculum
            .as_ref()
            .map_err(|_| PropositionError::CurriculumNonCompletePourAcceptation)
            .copied()
    }
}
