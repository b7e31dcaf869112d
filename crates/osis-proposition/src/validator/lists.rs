//! # Validator Lists
//!
//! One list per aggregate transition. Each list is built from borrowed
//! aggregate state plus the method arguments, and declares its
//! validators in the order their exceptions are reported.

use osis_checklist::{BesoinDeDerogation, ChoixStatutChecklist, StatutsChecklistDoctorale};
use osis_validation::{MultipleBusinessExceptions, ValidatorList, Validators};

use crate::enums::{
    ChoixDoctoratDejaRealise, ChoixStatutPropositionDoctorale, ChoixTypeAdmission,
    ChoixTypeFinancement, ConditionAcces, TypeDemande,
};
use crate::exceptions::PropositionError;
use crate::valeurs::{
    ComplementFormationIdentity, Comptabilite, ConditionComplementaireIdentity,
    ConditionComplementaireLibre, DetailProjet, Doctorat, EmplacementDocument, Financement,
    MotifRefusIdentity, TitreAccesSelectionnable,
};

use super::acces::*;
use super::candidat::*;
use super::comptabilite::*;
use super::decision::*;

type E = PropositionError;

// ─── Candidate ───────────────────────────────────────────────────────

pub struct InitierPropositionValidatorList<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<&'a str>,
    pub doctorat: &'a Doctorat,
    pub commission_proximite: Option<&'a str>,
}

impl ValidatorList<E> for InitierPropositionValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldJustificationDonneeSiPreadmission {
                type_admission: self.type_admission,
                justification: self.justification,
            }),
            Box::new(ShouldCommissionProximiteEtreValide {
                doctorat: self.doctorat,
                commission_proximite: self.commission_proximite,
            }),
        ]
    }
}

pub struct ModifierTypeAdmissionValidatorList<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<&'a str>,
    pub doctorat: &'a Doctorat,
    pub commission_proximite: Option<&'a str>,
}

impl ValidatorList<E> for ModifierTypeAdmissionValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldJustificationDonneeSiPreadmission {
                type_admission: self.type_admission,
                justification: self.justification,
            }),
            Box::new(ShouldCommissionProximiteEtreValide {
                doctorat: self.doctorat,
                commission_proximite: self.commission_proximite,
            }),
        ]
    }
}

pub struct CompletionPropositionValidatorList<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<&'a str>,
    pub type_financement: Option<ChoixTypeFinancement>,
    pub type_contrat_travail: &'a str,
    pub doctorat_deja_realise: ChoixDoctoratDejaRealise,
    pub institution: &'a str,
    pub domaine_these: &'a str,
    pub doctorat: &'a Doctorat,
    pub commission_proximite: Option<&'a str>,
}

impl ValidatorList<E> for CompletionPropositionValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldJustificationDonneeSiPreadmission {
                type_admission: self.type_admission,
                justification: self.justification,
            }),
            Box::new(ShouldTypeContratTravailDependreTypeFinancement {
                type_financement: self.type_financement,
                type_contrat_travail: self.type_contrat_travail,
            }),
            Box::new(ShouldInstitutionDependreDoctoratRealise {
                doctorat_deja_realise: self.doctorat_deja_realise,
                institution: self.institution,
            }),
            Box::new(ShouldDomaineDependreDoctoratRealise {
                doctorat_deja_realise: self.doctorat_deja_realise,
                domaine_these: self.domaine_these,
            }),
            Box::new(ShouldCommissionProximiteEtreValide {
                doctorat: self.doctorat,
                commission_proximite: self.commission_proximite,
            }),
        ]
    }
}

pub struct ProjetDoctoralValidatorList<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub projet: &'a DetailProjet,
    pub financement: &'a Financement,
}

impl ValidatorList<E> for ProjetDoctoralValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldProjetEtreComplet {
            type_admission: self.type_admission,
            projet: self.projet,
            financement: self.financement,
        })]
    }
}

pub struct ComptabiliteValidatorList<'a> {
    pub a_frequente_recemment_etablissement_communaute_fr: Option<bool>,
    pub pays_nationalite_ue: Option<bool>,
    pub comptabilite: &'a Comptabilite,
}

impl ValidatorList<E> for ComptabiliteValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        let c = self.comptabilite;
        vec![
            Box::new(ShouldAbsenceDeDetteEtreCompletee {
                attestation_absence_dette_etablissement: &c.attestation_absence_dette_etablissement,
                a_frequente_recemment_etablissement_communaute_fr: self
                    .a_frequente_recemment_etablissement_communaute_fr,
            }),
            Box::new(ShouldAssimilationEtreCompletee {
                pays_nationalite_ue: self.pays_nationalite_ue,
                comptabilite: c,
            }),
            Box::new(ShouldAffiliationsEtreCompletees {
                etudiant_solidaire: c.etudiant_solidaire,
            }),
            Box::new(ShouldTypeCompteBancaireRemboursementEtreComplete {
                type_numero_compte: c.type_numero_compte,
            }),
            Box::new(ShouldIbanCarteBancaireRemboursementEtreCompletee {
                type_numero_compte: c.type_numero_compte,
                numero_compte_iban: &c.numero_compte_iban,
                prenom_titulaire_compte: &c.prenom_titulaire_compte,
                nom_titulaire_compte: &c.nom_titulaire_compte,
            }),
            Box::new(ShouldAutreFormatCarteBancaireRemboursementEtreCompletee {
                type_numero_compte: c.type_numero_compte,
                numero_compte_autre_format: &c.numero_compte_autre_format,
                code_bic_swift_banque: &c.code_bic_swift_banque,
                prenom_titulaire_compte: &c.prenom_titulaire_compte,
                nom_titulaire_compte: &c.nom_titulaire_compte,
            }),
        ]
    }
}

pub struct RedonnerLaMainAuCandidatValidatorList {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl ValidatorList<E> for RedonnerLaMainAuCandidatValidatorList {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldPropositionEtreEnAttenteDeSignature {
            statut: self.statut,
        })]
    }
}

pub struct SoumettrePropositionValidatorList {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl ValidatorList<E> for SoumettrePropositionValidatorList {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldPropositionEtreSoumettable {
            statut: self.statut,
        })]
    }
}

// ─── CDD decision ────────────────────────────────────────────────────

pub struct EnvoyerACddValidatorList {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl ValidatorList<E> for EnvoyerACddValidatorList {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldSicPeutSoumettreACddLorsDeLaDecisionCdd {
            statut: self.statut,
        })]
    }
}

pub struct ApprouverParCddValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
    pub titres_selectionnes: &'a [TitreAccesSelectionnable],
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: &'a [ConditionComplementaireIdentity],
    pub conditions_complementaires_libres: &'a [ConditionComplementaireLibre],
    pub nombre_annees_prevoir_programme: Option<u8>,
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: &'a [ComplementFormationIdentity],
    pub commentaire_complements_formation: &'a str,
}

impl ValidatorList<E> for ApprouverParCddValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldCddPeutDonnerDecision { statut: self.statut }),
            Box::new(ShouldStatutDecisionCddEtreDifferentCloture {
                checklist_actuelle: self.checklist_actuelle,
            }),
            Box::new(ShouldSpecifierInformationsAcceptation {
                avec_conditions_complementaires: self.avec_conditions_complementaires,
                conditions_complementaires_existantes: self.conditions_complementaires_existantes,
                conditions_complementaires_libres: self.conditions_complementaires_libres,
                nombre_annees_prevoir_programme: self.nombre_annees_prevoir_programme,
            }),
            Box::new(ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
                avec_complements_formation: self.avec_complements_formation,
                complements_formation: self.complements_formation,
                commentaire_complements_formation: self.commentaire_complements_formation,
            }),
            Box::new(ShouldSelectionnerTitreAccesPourEnvoyerASic {
                titres_selectionnes: self.titres_selectionnes,
            }),
        ]
    }
}

pub struct RefuserParCddValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
    pub titres_selectionnes: &'a [TitreAccesSelectionnable],
    pub motifs_refus: &'a [MotifRefusIdentity],
    pub autres_motifs_refus: &'a [String],
}

impl ValidatorList<E> for RefuserParCddValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldCddPeutDonnerDecision { statut: self.statut }),
            Box::new(ShouldStatutDecisionCddEtreDifferentCloture {
                checklist_actuelle: self.checklist_actuelle,
            }),
            Box::new(ShouldSpecifierMotifRefus {
                motifs_refus: self.motifs_refus,
                autres_motifs_refus: self.autres_motifs_refus,
            }),
            Box::new(ShouldSelectionnerTitreAccesPourEnvoyerASic {
                titres_selectionnes: self.titres_selectionnes,
            }),
        ]
    }
}

pub struct SpecifierInformationsDecisionCddValidatorList {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl ValidatorList<E> for SpecifierInformationsDecisionCddValidatorList {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldPeutSpecifierInformationsDecisionCdd {
            statut: self.statut,
        })]
    }
}

pub struct SpecifierInformationsAcceptationCddValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: &'a [ComplementFormationIdentity],
    pub commentaire_complements_formation: &'a str,
}

impl ValidatorList<E> for SpecifierInformationsAcceptationCddValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldPeutSpecifierInformationsDecisionCdd { statut: self.statut }),
            Box::new(ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
                avec_complements_formation: self.avec_complements_formation,
                complements_formation: self.complements_formation,
                commentaire_complements_formation: self.commentaire_complements_formation,
            }),
        ]
    }
}

// ─── SIC decision ────────────────────────────────────────────────────

pub struct ApprouverAdmissionParSicValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub type_demande: TypeDemande,
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
    pub documents: &'a [EmplacementDocument],
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: &'a [ConditionComplementaireIdentity],
    pub conditions_complementaires_libres: &'a [ConditionComplementaireLibre],
    pub nombre_annees_prevoir_programme: Option<u8>,
    pub verification_curriculum: &'a Result<(), MultipleBusinessExceptions<E>>,
}

impl ValidatorList<E> for ApprouverAdmissionParSicValidatorList<'_> {
    fn data_contract_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldDemandeEtreTypeAdmission {
            type_demande: self.type_demande,
        })]
    }

    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldSicPeutDonnerDecision { statut: self.statut }),
            Box::new(ShouldParcoursAnterieurEtreSuffisant {
                parcours_anterieur: &self.checklist_actuelle.parcours_anterieur,
            }),
            Box::new(ShouldSpecifierInformationsAcceptation {
                avec_conditions_complementaires: self.avec_conditions_complementaires,
                conditions_complementaires_existantes: self.conditions_complementaires_existantes,
                conditions_complementaires_libres: self.conditions_complementaires_libres,
                nombre_annees_prevoir_programme: self.nombre_annees_prevoir_programme,
            }),
            Box::new(ShouldNePasAvoirDeDocumentReclameImmediat {
                documents: self.documents,
            }),
            Box::new(ShouldFinancabiliteEtreDansEtatCorrectPourApprouverDemande {
                checklist_actuelle: self.checklist_actuelle,
            }),
            Box::new(ShouldCurriculumEtreCompletPourAcceptation {
                verification_curriculum: self.verification_curriculum,
            }),
        ]
    }
}

pub struct ApprouverInscriptionParSicValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub type_demande: TypeDemande,
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
    pub besoin_de_derogation: BesoinDeDerogation,
    pub documents: &'a [EmplacementDocument],
    pub avec_conditions_complementaires: Option<bool>,
    pub conditions_complementaires_existantes: &'a [ConditionComplementaireIdentity],
    pub conditions_complementaires_libres: &'a [ConditionComplementaireLibre],
    pub en_quarantaine: bool,
    pub verification_curriculum: &'a Result<(), MultipleBusinessExceptions<E>>,
}

impl ValidatorList<E> for ApprouverInscriptionParSicValidatorList<'_> {
    fn data_contract_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldDemandeEtreTypeInscription {
            type_demande: self.type_demande,
        })]
    }

    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldSicPeutDonnerDecision { statut: self.statut }),
            Box::new(ShouldParcoursAnterieurEtreSuffisant {
                parcours_anterieur: &self.checklist_actuelle.parcours_anterieur,
            }),
            Box::new(ShouldChecklistEtreDansEtatCorrectPourApprouverInscription {
                checklist_actuelle: self.checklist_actuelle,
                besoin_de_derogation: self.besoin_de_derogation,
            }),
            Box::new(ShouldDonneesPersonnellesEtreValidees {
                checklist_actuelle: self.checklist_actuelle,
            }),
            Box::new(ShouldSpecifierInformationsAcceptationInscription {
                avec_conditions_complementaires: self.avec_conditions_complementaires,
                conditions_complementaires_existantes: self.conditions_complementaires_existantes,
                conditions_complementaires_libres: self.conditions_complementaires_libres,
            }),
            Box::new(ShouldNePasAvoirDeDocumentReclameImmediat {
                documents: self.documents,
            }),
            Box::new(ShouldFinancabiliteEtreDansEtatCorrectPourApprouverDemande {
                checklist_actuelle: self.checklist_actuelle,
            }),
            Box::new(ShouldNePasEtreEnQuarantaine {
                en_quarantaine: self.en_quarantaine,
            }),
            Box::new(ShouldCurriculumEtreCompletPourAcceptation {
                verification_curriculum: self.verification_curriculum,
            }),
        ]
    }
}

pub struct RefuserParSicValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub motifs_refus: &'a [MotifRefusIdentity],
    pub autres_motifs_refus: &'a [String],
}

impl ValidatorList<E> for RefuserParSicValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldSicPeutDonnerDecision { statut: self.statut }),
            Box::new(ShouldSpecifierMotifRefus {
                motifs_refus: self.motifs_refus,
                autres_motifs_refus: self.autres_motifs_refus,
            }),
        ]
    }
}

pub struct SpecifierInformationsAcceptationSicValidatorList<'a> {
    pub statut: ChoixStatutPropositionDoctorale,
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: &'a [ComplementFormationIdentity],
    pub commentaire_complements_formation: &'a str,
}

impl ValidatorList<E> for SpecifierInformationsAcceptationSicValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldPeutSpecifierInformationsDecisionSic { statut: self.statut }),
            Box::new(ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
                avec_complements_formation: self.avec_complements_formation,
                complements_formation: self.complements_formation,
                commentaire_complements_formation: self.commentaire_complements_formation,
            }),
        ]
    }
}

pub struct SpecifierBesoinDerogationValidatorList {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl ValidatorList<E> for SpecifierBesoinDerogationValidatorList {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldSicPeutDonnerDecision { statut: self.statut })]
    }
}

// ─── Checklist ───────────────────────────────────────────────────────

pub struct ModifierStatutChecklistParcoursAnterieurValidatorList<'a> {
    pub statut: ChoixStatutChecklist,
    pub titres_acces_selectionnes: &'a [TitreAccesSelectionnable],
    pub condition_acces: Option<ConditionAcces>,
    pub millesime_condition_acces: Option<i32>,
    pub checklist_actuelle: &'a StatutsChecklistDoctorale,
}

impl ValidatorList<E> for ModifierStatutChecklistParcoursAnterieurValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![
            Box::new(ShouldTitreAccesEtreSelectionne {
                statut: self.statut,
                titres_acces_selectionnes: self.titres_acces_selectionnes,
            }),
            Box::new(ShouldConditionAccesEtreSelectionne {
                statut: self.statut,
                condition_acces: self.condition_acces,
                millesime_condition_acces: self.millesime_condition_acces,
            }),
            Box::new(ShouldStatutsChecklistExperiencesEtreValidees {
                statut: self.statut,
                experiences: self.checklist_actuelle.experiences(),
            }),
        ]
    }
}

pub struct SpecifierConditionAccesValidatorList<'a> {
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: &'a [ComplementFormationIdentity],
    pub commentaire_complements_formation: &'a str,
}

impl ValidatorList<E> for SpecifierConditionAccesValidatorList<'_> {
    fn invariants_validators(&self) -> Validators<'_, E> {
        vec![Box::new(ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
            avec_complements_formation: self.avec_complements_formation,
            complements_formation: self.complements_formation,
            commentaire_complements_formation: self.commentaire_complements_formation,
        })]
    }
}
