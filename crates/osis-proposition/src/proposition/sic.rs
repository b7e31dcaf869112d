//! Central administration (SIC) decision transitions.
//!
//! SIC records its decision details first (tab moves to "to validate"),
//! then approves or refuses. Approval rules differ between an admission
//! and an enrolment request; [`Proposition::approuver_par_sic`] picks the
//! rule set from `type_demande`.

use osis_checklist::{ChoixStatutChecklist, OngletChecklist};
use osis_validation::MultipleBusinessExceptions;

use crate::enums::{
    BesoinDeDerogation, ChoixStatutPropositionDoctorale, DispenseOuDroitsMajores,
    DroitsInscriptionMontant, MobiliteNombreDeMois, TypeDemande,
};
use crate::exceptions::{PropositionError, TransitionError};
use crate::valeurs::{EmplacementDocument, MotifRefusIdentity};
use crate::validator::{
    ApprouverAdmissionParSicValidatorList, ApprouverInscriptionParSicValidatorList,
    RefuserParSicValidatorList, SpecifierBesoinDerogationValidatorList,
    SpecifierInformationsAcceptationSicValidatorList,
};

use super::{
    statut_onglet, valider, InformationsAcceptation, Proposition, CLE_ETAT_BESOIN_DEROGATION,
};

/// SIC acceptance details: the faculty bundle plus fees and mobility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformationsAcceptationSic {
    pub acceptation: InformationsAcceptation,
    pub droits_inscription_montant: Option<DroitsInscriptionMontant>,
    pub dispense_ou_droits_majores: Option<DispenseOuDroitsMajores>,
    pub est_mobilite: Option<bool>,
    pub nombre_de_mois_de_mobilite: Option<MobiliteNombreDeMois>,
    pub doit_se_presenter_en_sic: Option<bool>,
    pub communication_au_candidat: String,
}

/// Collaborator data an approval is checked against.
#[derive(Debug, Clone)]
pub struct ContexteApprobationSic {
    /// Current document placements of the proposition.
    pub documents: Vec<EmplacementDocument>,
    /// Outcome of the profile service's curriculum check.
    pub verification_curriculum: Result<(), MultipleBusinessExceptions<PropositionError>>,
    pub en_quarantaine: bool,
}

impl Proposition {
    /// SIC authorises the proposition.
    ///
    /// Whatever the curriculum check reported surfaces as a single
    /// `CurriculumNonCompletePourAcceptation`.
    pub fn approuver_par_sic(
        &mut self,
        auteur: &str,
        contexte: &ContexteApprobationSic,
    ) -> Result<(), TransitionError> {
        match self.type_demande {
            TypeDemande::Admission => valider(&ApprouverAdmissionParSicValidatorList {
                statut: self.statut,
                type_demande: self.type_demande,
                checklist_actuelle: &self.checklist_actuelle,
                documents: &contexte.documents,
                avec_conditions_complementaires: self.avec_conditions_complementaires,
                conditions_complementaires_existantes: &self.conditions_complementaires_existantes,
                conditions_complementaires_libres: &self.conditions_complementaires_libres,
                nombre_annees_prevoir_programme: self.nombre_annees_prevoir_programme,
                verification_curriculum: &contexte.verification_curriculum,
            })?,
            TypeDemande::Inscription => valider(&ApprouverInscriptionParSicValidatorList {
                statut: self.statut,
                type_demande: self.type_demande,
                checklist_actuelle: &self.checklist_actuelle,
                besoin_de_derogation: self.besoin_de_derogation,
                documents: &contexte.documents,
                avec_conditions_complementaires: self.avec_conditions_complementaires,
                conditions_complementaires_existantes: &self.conditions_complementaires_existantes,
                conditions_complementaires_libres: &self.conditions_complementaires_libres,
                en_quarantaine: contexte.en_quarantaine,
                verification_curriculum: &contexte.verification_curriculum,
            })?,
        }

        self.statut = ChoixStatutPropositionDoctorale::InscriptionAutorisee;
        self.checklist_actuelle.decision_sic = statut_onglet(
            OngletChecklist::DecisionSic,
            "AUTORISE",
            ChoixStatutChecklist::GestReussite,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// SIC refuses, using the motives recorded earlier.
    pub fn refuser_par_sic(&mut self, auteur: &str) -> Result<(), TransitionError> {
        valider(&RefuserParSicValidatorList {
            statut: self.statut,
            motifs_refus: &self.motifs_refus,
            autres_motifs_refus: &self.autres_motifs_refus,
        })?;

        self.statut = ChoixStatutPropositionDoctorale::InscriptionRefusee;
        self.checklist_actuelle.decision_sic = statut_onglet(
            OngletChecklist::DecisionSic,
            "REFUSE",
            ChoixStatutChecklist::GestBlocage,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    pub fn specifier_informations_acceptation_par_sic(
        &mut self,
        auteur: &str,
        infos: InformationsAcceptationSic,
    ) -> Result<(), TransitionError> {
        valider(&SpecifierInformationsAcceptationSicValidatorList {
            statut: self.statut,
            avec_complements_formation: infos.acceptation.avec_complements_formation,
            complements_formation: &infos.acceptation.complements_formation,
            commentaire_complements_formation: &infos.acceptation.commentaire_complements_formation,
        })?;

        self.appliquer_acceptation(infos.acceptation);
        self.droits_inscription_montant = infos.droits_inscription_montant;
        self.dispense_ou_droits_majores = infos.dispense_ou_droits_majores;
        self.est_mobilite = infos.est_mobilite;
        self.nombre_de_mois_de_mobilite = infos.nombre_de_mois_de_mobilite;
        self.doit_se_presenter_en_sic = infos.doit_se_presenter_en_sic;
        self.communication_au_candidat = infos.communication_au_candidat;
        self.checklist_actuelle.decision_sic = statut_onglet(
            OngletChecklist::DecisionSic,
            "AUTORISATION_A_VALIDER",
            ChoixStatutChecklist::GestEnCours,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    pub fn specifier_motifs_refus_par_sic(
        &mut self,
        auteur: &str,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) -> Result<(), TransitionError> {
        valider(&RefuserParSicValidatorList {
            statut: self.statut,
            motifs_refus: &motifs_refus,
            autres_motifs_refus: &autres_motifs_refus,
        })?;

        self.motifs_refus = motifs_refus;
        self.autres_motifs_refus = autres_motifs_refus;
        self.checklist_actuelle.decision_sic = statut_onglet(
            OngletChecklist::DecisionSic,
            "REFUS_A_VALIDER",
            ChoixStatutChecklist::GestEnCours,
        );
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Record whether a dispensation from management is needed.
    ///
    /// Asking management parks the proposition; any answer from
    /// management gives it back to SIC.
    pub fn specifier_besoin_de_derogation(
        &mut self,
        auteur: &str,
        besoin_de_derogation: BesoinDeDerogation,
    ) -> Result<(), TransitionError> {
        valider(&SpecifierBesoinDerogationValidatorList { statut: self.statut })?;

        let decision_sic = statut_onglet(
            OngletChecklist::DecisionSic,
            "BESOIN_DEROGATION",
            ChoixStatutChecklist::GestEnCours,
        )
        .avec_extra(CLE_ETAT_BESOIN_DEROGATION, besoin_de_derogation.name());

        let statut = match besoin_de_derogation {
            BesoinDeDerogation::AvisDirectionDemande => {
                ChoixStatutPropositionDoctorale::AttenteValidationDirection
            }
            _ if self.statut == ChoixStatutPropositionDoctorale::AttenteValidationDirection => {
                ChoixStatutPropositionDoctorale::Confirmee
            }
            _ => self.statut,
        };

        self.besoin_de_derogation = besoin_de_derogation;
        self.checklist_actuelle.decision_sic = decision_sic;
        self.statut = statut;
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use osis_checklist::identifier;

    use ChoixStatutPropositionDoctorale as S;

    fn make_contexte() -> ContexteApprobationSic {
        ContexteApprobationSic {
            documents: vec![],
            verification_curriculum: Ok(()),
            en_quarantaine: false,
        }
    }

    fn make_acceptation_sic() -> InformationsAcceptationSic {
        InformationsAcceptationSic {
            acceptation: InformationsAcceptation {
                avec_conditions_complementaires: Some(false),
                nombre_annees_prevoir_programme: Some(4),
                ..InformationsAcceptation::default()
            },
            droits_inscription_montant: Some(DroitsInscriptionMontant::InscriptionAuRole),
            ..InformationsAcceptationSic::default()
        }
    }

    /// A submitted proposition whose prior studies were found sufficient.
    fn make_proposition_prete(type_demande: TypeDemande) -> Proposition {
        let mut p = make_proposition_soumise();
        p.type_demande = type_demande;
        p.checklist_actuelle.parcours_anterieur.statut = ChoixStatutChecklist::GestReussite;
        p.checklist_actuelle.donnees_personnelles.statut = ChoixStatutChecklist::GestReussite;
        p
    }

    fn identifiant_decision_sic(p: &Proposition) -> Option<String> {
        identifier(OngletChecklist::DecisionSic, &p.checklist_actuelle().decision_sic)
    }

    // ── Admission approval ──────────────────────────────────────────

    #[test]
    fn test_approuver_admission() {
        let mut p = make_proposition_prete(TypeDemande::Admission);
        p.specifier_informations_acceptation_par_sic(GESTIONNAIRE, make_acceptation_sic())
            .unwrap();
        assert_eq!(identifiant_decision_sic(&p).as_deref(), Some("AUTORISATION_A_VALIDER"));

        p.approuver_par_sic("sic-director", &make_contexte()).unwrap();
        assert_eq!(p.statut(), S::InscriptionAutorisee);
        assert_eq!(identifiant_decision_sic(&p).as_deref(), Some("AUTORISE"));
        assert_eq!(p.auteur_derniere_modification(), "sic-director");
    }

    #[test]
    fn test_curriculum_failures_are_narrowed_to_one_exception() {
        let mut p = make_proposition_prete(TypeDemande::Admission);
        p.specifier_informations_acceptation_par_sic(GESTIONNAIRE, make_acceptation_sic())
            .unwrap();
        let contexte = ContexteApprobationSic {
            verification_curriculum: Err(MultipleBusinessExceptions::from_vec(vec![
                PropositionError::FichierCurriculumNonRenseigne,
                PropositionError::AnneesCurriculumNonSpecifiees {
                    debut: "09/2019".into(),
                    fin: "08/2020".into(),
                },
            ])
            .unwrap()),
            ..make_contexte()
        };
        let avant = snapshot(&p);
        let err = p.approuver_par_sic(GESTIONNAIRE, &contexte).unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-66"]);
        assert_eq!(snapshot(&p), avant);
    }

    // ── Enrolment approval ──────────────────────────────────────────

    #[test]
    fn test_enrolment_uses_its_own_rule_set() {
        // No programme duration: blocks an admission, not an enrolment.
        let mut admission = make_proposition_prete(TypeDemande::Admission);
        let err = admission.approuver_par_sic(GESTIONNAIRE, &make_contexte()).unwrap_err();
        assert!(err.contient(&PropositionError::InformationsAcceptationNonSpecifiees));

        let mut inscription = make_proposition_prete(TypeDemande::Inscription);
        inscription
            .approuver_par_sic(GESTIONNAIRE, &make_contexte())
            .unwrap();
        assert_eq!(inscription.statut(), S::InscriptionAutorisee);
    }

    #[test]
    fn test_enrolment_with_pending_dispensation_is_blocked() {
        let mut p = make_proposition_prete(TypeDemande::Inscription);
        p.specifier_besoin_de_derogation(GESTIONNAIRE, BesoinDeDerogation::AvisDirectionDemande)
            .unwrap();
        assert_eq!(p.statut(), S::AttenteValidationDirection);

        let err = p.approuver_par_sic(GESTIONNAIRE, &make_contexte()).unwrap_err();
        assert_eq!(
            err.first(),
            Some(&PropositionError::EtatChecklistDecisionSicNonValidePourApprouverUneInscription)
        );

        p.specifier_besoin_de_derogation("direction", BesoinDeDerogation::AccordDirection)
            .unwrap();
        assert_eq!(p.statut(), S::Confirmee);
        assert_eq!(
            p.checklist_actuelle().decision_sic.extra(CLE_ETAT_BESOIN_DEROGATION),
            Some("ACCORD_DIRECTION")
        );
        p.approuver_par_sic(GESTIONNAIRE, &make_contexte()).unwrap();
    }

    #[test]
    fn test_quarantine_blocks_enrolment() {
        let mut p = make_proposition_prete(TypeDemande::Inscription);
        let contexte = ContexteApprobationSic {
            en_quarantaine: true,
            ..make_contexte()
        };
        let err = p.approuver_par_sic(GESTIONNAIRE, &contexte).unwrap_err();
        assert_eq!(err.status_codes(), vec!["ADMISSION-23"]);
    }

    // ── Refusal ─────────────────────────────────────────────────────

    #[test]
    fn test_refuser_par_sic() {
        let mut p = make_proposition_en_statut(S::RetourDeFac);
        let err = p.refuser_par_sic(GESTIONNAIRE).unwrap_err();
        assert_eq!(err.first(), Some(&PropositionError::MotifRefusNonSpecifie));

        p.specifier_motifs_refus_par_sic(GESTIONNAIRE, vec![], vec!["Incomplete file".into()])
            .unwrap();
        assert_eq!(identifiant_decision_sic(&p).as_deref(), Some("REFUS_A_VALIDER"));

        p.refuser_par_sic(GESTIONNAIRE).unwrap();
        assert_eq!(p.statut(), S::InscriptionRefusee);
        assert_eq!(identifiant_decision_sic(&p).as_deref(), Some("REFUSE"));
    }

    #[test]
    fn test_sic_cannot_decide_during_faculty_review() {
        let mut p = make_proposition_en_statut(S::TraitementFac);
        let err = p
            .specifier_besoin_de_derogation(GESTIONNAIRE, BesoinDeDerogation::AvisDirectionDemande)
            .unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-67"]);
        assert_eq!(p.besoin_de_derogation(), BesoinDeDerogation::NonConcerne);
    }
}
