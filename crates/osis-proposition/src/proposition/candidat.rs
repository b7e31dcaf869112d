//! Candidate-side transitions: creation, completion, signatures and
//! submission.

use std::collections::BTreeMap;

use osis_checklist::StatutsChecklistDoctorale;
use osis_core::{PropositionIdentity, Timestamp};

use crate::enums::{
    BesoinDeDerogation, ChoixStatutPropositionDoctorale, ChoixTypeAdmission, DerogationFinancement,
    TypeDemande,
};
use crate::exceptions::TransitionError;
use crate::valeurs::{
    CommissionProximite, Comptabilite, DetailProjet, Doctorat, ExperiencePrecedenteRecherche,
    Financement,
};
use crate::validator::{
    ComptabiliteValidatorList, CompletionPropositionValidatorList, InitierPropositionValidatorList,
    ModifierTypeAdmissionValidatorList, ProjetDoctoralValidatorList,
    RedonnerLaMainAuCandidatValidatorList, SoumettrePropositionValidatorList,
};

use super::{valider, Proposition};

/// Input of [`Proposition::initier`].
#[derive(Debug, Clone)]
pub struct NouvelleProposition {
    pub reference: u64,
    pub matricule_candidat: String,
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<String>,
    /// Persisted name of the proximity commission, if any.
    pub commission_proximite: Option<String>,
}

/// Input of [`Proposition::completer`].
#[derive(Debug, Clone)]
pub struct DonneesCompletion {
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<String>,
    pub commission_proximite: Option<String>,
    pub projet: DetailProjet,
    pub financement: Financement,
    pub experience_precedente_recherche: ExperiencePrecedenteRecherche,
}

/// Input of [`Proposition::soumettre`].
#[derive(Debug, Clone)]
pub struct Soumission {
    /// Academic year computed for the submission.
    pub annee: i32,
    /// Admission or enrolment, as determined from the candidate's profile.
    pub type_demande: TypeDemande,
    pub pot_calcule: Option<String>,
    /// Confirmation answers, by element name.
    pub elements_confirmation: BTreeMap<String, String>,
    /// Curriculum experiences to review, one checklist child each.
    pub uuids_experiences: Vec<String>,
}

fn commission(nom: &Option<String>) -> Option<CommissionProximite> {
    nom.as_deref().and_then(CommissionProximite::from_name)
}

impl Proposition {
    // ─── Creation ────────────────────────────────────────────────────

    /// Create a draft proposition for `doctorat`.
    pub fn initier(
        entity_id: PropositionIdentity,
        nouvelle: NouvelleProposition,
        doctorat: &Doctorat,
        maintenant: Timestamp,
    ) -> Result<Self, TransitionError> {
        valider(&InitierPropositionValidatorList {
            type_admission: nouvelle.type_admission,
            justification: nouvelle.justification.as_deref(),
            doctorat,
            commission_proximite: nouvelle.commission_proximite.as_deref(),
        })?;

        Ok(Self {
            entity_id,
            reference: nouvelle.reference,
            statut: ChoixStatutPropositionDoctorale::EnBrouillon,
            type_admission: nouvelle.type_admission,
            type_demande: TypeDemande::Admission,
            formation_id: doctorat.entity_id.clone(),
            auteur_derniere_modification: nouvelle.matricule_candidat.clone(),
            commission_proximite: commission(&nouvelle.commission_proximite),
            matricule_candidat: nouvelle.matricule_candidat,
            creee_le: maintenant,
            soumise_le: None,
            echeance_demande_documents: None,
            justification: nouvelle.justification.unwrap_or_default(),
            projet: DetailProjet::default(),
            financement: Financement::non_rempli(),
            experience_precedente_recherche: ExperiencePrecedenteRecherche::aucune(),
            comptabilite: Comptabilite::non_remplie(),
            curriculum: Vec::new(),
            reponses_questions_specifiques: BTreeMap::new(),
            elements_confirmation: BTreeMap::new(),
            fiche_archive_signatures_envoyees: Vec::new(),
            annee_calculee: None,
            pot_calcule: None,
            checklist_initiale: None,
            checklist_actuelle: StatutsChecklistDoctorale::initiale(Vec::<String>::new()),
            motifs_refus: Vec::new(),
            autres_motifs_refus: Vec::new(),
            avec_conditions_complementaires: None,
            conditions_complementaires_existantes: Vec::new(),
            conditions_complementaires_libres: Vec::new(),
            avec_complements_formation: None,
            complements_formation: Vec::new(),
            commentaire_complements_formation: String::new(),
            nombre_annees_prevoir_programme: None,
            nom_personne_contact_programme_annuel: String::new(),
            email_personne_contact_programme_annuel: String::new(),
            commentaire_programme_conjoint: String::new(),
            certificat_approbation_cdd: Vec::new(),
            certificat_approbation_sic: Vec::new(),
            certificat_approbation_sic_annexe: Vec::new(),
            certificat_refus_cdd: Vec::new(),
            certificat_refus_sic: Vec::new(),
            droits_inscription_montant: None,
            dispense_ou_droits_majores: None,
            est_mobilite: None,
            nombre_de_mois_de_mobilite: None,
            doit_se_presenter_en_sic: None,
            communication_au_candidat: String::new(),
            besoin_de_derogation: BesoinDeDerogation::NonConcerne,
            condition_acces: None,
            millesime_condition_acces: None,
            type_equivalence_titre_acces: None,
            statut_equivalence_titre_acces: None,
            etat_equivalence_titre_acces: None,
            date_prise_effet_equivalence_titre_acces: None,
            financabilite_regle_calcule: None,
            financabilite_regle_calcule_situation: None,
            financabilite_regle_calcule_le: None,
            financabilite_regle: None,
            financabilite_etabli_par: None,
            financabilite_etabli_le: None,
            financabilite_derogation_statut: DerogationFinancement::NonConcerne,
            financabilite_derogation_premiere_notification_le: None,
            financabilite_derogation_premiere_notification_par: None,
            financabilite_derogation_derniere_notification_le: None,
            financabilite_derogation_derniere_notification_par: None,
        })
    }

    // ─── Completion ──────────────────────────────────────────────────

    /// Replace the project, funding and prior research as a whole.
    pub fn completer(
        &mut self,
        donnees: DonneesCompletion,
        doctorat: &Doctorat,
    ) -> Result<(), TransitionError> {
        valider(&CompletionPropositionValidatorList {
            type_admission: donnees.type_admission,
            justification: donnees.justification.as_deref(),
            type_financement: donnees.financement.type_financement,
            type_contrat_travail: &donnees.financement.type_contrat_travail,
            doctorat_deja_realise: donnees.experience_precedente_recherche.doctorat_deja_realise,
            institution: &donnees.experience_precedente_recherche.institution,
            domaine_these: &donnees.experience_precedente_recherche.domaine_these,
            doctorat,
            commission_proximite: donnees.commission_proximite.as_deref(),
        })?;

        self.type_admission = donnees.type_admission;
        self.justification = donnees.justification.unwrap_or_default();
        self.commission_proximite = commission(&donnees.commission_proximite);
        self.formation_id = doctorat.entity_id.clone();
        self.projet = donnees.projet;
        self.financement = donnees.financement;
        self.experience_precedente_recherche = donnees.experience_precedente_recherche;
        self.auteur_derniere_modification = self.matricule_candidat.clone();
        Ok(())
    }

    /// Record the curriculum documents and the programme's specific
    /// question answers.
    pub fn completer_curriculum(
        &mut self,
        curriculum: Vec<String>,
        reponses_questions_specifiques: BTreeMap<String, serde_json::Value>,
    ) {
        self.curriculum = curriculum;
        self.reponses_questions_specifiques = reponses_questions_specifiques;
        self.auteur_derniere_modification = self.matricule_candidat.clone();
    }

    /// Replace the accounting block as a whole.
    pub fn completer_comptabilite(&mut self, auteur: &str, comptabilite: Comptabilite) {
        self.comptabilite = comptabilite;
        self.auteur_derniere_modification = auteur.to_string();
    }

    pub fn modifier_type_admission(
        &mut self,
        doctorat: &Doctorat,
        type_admission: ChoixTypeAdmission,
        justification: Option<String>,
        commission_proximite: Option<String>,
    ) -> Result<(), TransitionError> {
        valider(&ModifierTypeAdmissionValidatorList {
            type_admission,
            justification: justification.as_deref(),
            doctorat,
            commission_proximite: commission_proximite.as_deref(),
        })?;

        self.type_admission = type_admission;
        self.justification = justification.unwrap_or_default();
        self.commission_proximite = commission(&commission_proximite);
        self.formation_id = doctorat.entity_id.clone();
        self.auteur_derniere_modification = self.matricule_candidat.clone();
        Ok(())
    }

    /// A manager moves the proposition to another programme.
    pub fn modifier_choix_formation_gestionnaire(
        &mut self,
        auteur: &str,
        doctorat: &Doctorat,
        reponses_questions_specifiques: BTreeMap<String, serde_json::Value>,
    ) {
        self.formation_id = doctorat.entity_id.clone();
        self.reponses_questions_specifiques = reponses_questions_specifiques;
        self.auteur_derniere_modification = auteur.to_string();
    }

    pub fn definir_institut_these(&mut self, auteur: &str, institut_these: Option<String>) {
        self.projet.institut_these = institut_these;
        self.auteur_derniere_modification = auteur.to_string();
    }

    // ─── Checks without mutation ─────────────────────────────────────

    /// Whether the project is complete enough to be signed.
    pub fn verifier_projet_doctoral(&self) -> Result<(), TransitionError> {
        valider(&ProjetDoctoralValidatorList {
            type_admission: self.type_admission,
            projet: &self.projet,
            financement: &self.financement,
        })
    }

    /// Whether the accounting block is complete, given the candidate's
    /// profile facts.
    pub fn verifier_comptabilite(
        &self,
        a_frequente_recemment_etablissement_communaute_fr: Option<bool>,
        pays_nationalite_ue: Option<bool>,
    ) -> Result<(), TransitionError> {
        valider(&ComptabiliteValidatorList {
            a_frequente_recemment_etablissement_communaute_fr,
            pays_nationalite_ue,
            comptabilite: &self.comptabilite,
        })
    }

    // ─── Signatures ──────────────────────────────────────────────────

    /// Lock the draft while signatures are collected.
    pub fn verrouiller_proposition_pour_signature(&mut self) {
        self.statut = if self.statut == ChoixStatutPropositionDoctorale::CaACompleter {
            ChoixStatutPropositionDoctorale::CaEnAttenteDeSignature
        } else {
            ChoixStatutPropositionDoctorale::EnAttenteDeSignature
        };
        self.auteur_derniere_modification = self.matricule_candidat.clone();
    }

    pub fn deverrouiller_projet_doctoral(&mut self) {
        self.statut = ChoixStatutPropositionDoctorale::EnBrouillon;
        self.auteur_derniere_modification = self.matricule_candidat.clone();
    }

    /// A signatory hands the draft back to the candidate.
    pub fn redonner_la_main_au_candidat(&mut self, auteur: &str) -> Result<(), TransitionError> {
        valider(&RedonnerLaMainAuCandidatValidatorList {
            statut: self.statut,
        })?;
        self.statut = ChoixStatutPropositionDoctorale::EnBrouillon;
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Drop the archived signature sheet, once signatures are reset.
    pub fn reinitialiser_archive(&mut self, auteur: &str) {
        self.fiche_archive_signatures_envoyees = Vec::new();
        self.auteur_derniere_modification = auteur.to_string();
    }

    // ─── Submission and end of life ──────────────────────────────────

    /// Submit the proposition to SIC and capture the checklist baseline.
    /// Only a draft or a proposition awaiting signatures can be submitted.
    pub fn soumettre(
        &mut self,
        soumission: Soumission,
        maintenant: Timestamp,
    ) -> Result<(), TransitionError> {
        valider(&SoumettrePropositionValidatorList {
            statut: self.statut,
        })?;
        let checklist = StatutsChecklistDoctorale::initiale(soumission.uuids_experiences);
        self.checklist_initiale = Some(checklist.clone());
        self.checklist_actuelle = checklist;
        self.statut = ChoixStatutPropositionDoctorale::Confirmee;
        self.type_demande = soumission.type_demande;
        self.annee_calculee = Some(soumission.annee);
        self.pot_calcule = soumission.pot_calcule;
        self.elements_confirmation = soumission.elements_confirmation;
        self.soumise_le = Some(maintenant);
        self.auteur_derniere_modification = self.matricule_candidat.clone();
        Ok(())
    }

    /// Cancel the proposition.
    pub fn supprimer(&mut self) {
        self.statut = ChoixStatutPropositionDoctorale::Annulee;
        self.auteur_derniere_modification = self.matricule_candidat.clone();
    }

    pub fn valider_inscription(&mut self, auteur: &str) {
        self.statut = ChoixStatutPropositionDoctorale::InscriptionAutorisee;
        self.auteur_derniere_modification = auteur.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::enums::{ChoixDoctoratDejaRealise, ChoixTypeCompteBancaire, ChoixTypeFinancement};
    use crate::exceptions::PropositionError;
    use osis_checklist::ChoixStatutChecklist;

    fn make_completion() -> DonneesCompletion {
        DonneesCompletion {
            type_admission: ChoixTypeAdmission::Admission,
            justification: None,
            commission_proximite: Some("MANAGEMENT".into()),
            projet: DetailProjet {
                titre: "Monetary policy".into(),
                langue_redaction_these: "EN".into(),
                ..DetailProjet::default()
            },
            financement: Financement {
                type_financement: Some(ChoixTypeFinancement::SelfFunding),
                ..Financement::non_rempli()
            },
            experience_precedente_recherche: ExperiencePrecedenteRecherche::aucune(),
        }
    }

    // ── Creation ────────────────────────────────────────────────────

    #[test]
    fn test_initier_creates_draft_with_sentinels() {
        let p = make_proposition();
        assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::EnBrouillon);
        assert_eq!(p.auteur_derniere_modification(), MATRICULE);
        assert!(p.financement().est_non_rempli());
        assert!(p.checklist_initiale().is_none());
        assert_eq!(p.formation_id().sigle, "ECGE3DP");
        assert_eq!(p.commission_proximite().map(|c| c.name()), Some("ECONOMY"));
    }

    #[test]
    fn test_initier_rejects_pre_admission_without_justification() {
        let err = Proposition::initier(
            PropositionIdentity::new(),
            NouvelleProposition {
                reference: 2,
                matricule_candidat: MATRICULE.into(),
                type_admission: ChoixTypeAdmission::PreAdmission,
                justification: None,
                commission_proximite: None,
            },
            &make_doctorat(),
            make_instant(),
        )
        .unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-16", "PROPOSITION-5"]);
    }

    // ── Completion ──────────────────────────────────────────────────

    #[test]
    fn test_completer_replaces_nested_values() {
        let mut p = make_proposition();
        p.completer(make_completion(), &make_doctorat()).unwrap();
        assert_eq!(p.projet().titre, "Monetary policy");
        assert!(!p.financement().est_non_rempli());
        assert_eq!(p.commission_proximite().map(|c| c.name()), Some("MANAGEMENT"));
    }

    #[test]
    fn test_completer_failure_leaves_proposition_untouched() {
        let mut p = make_proposition();
        let avant = snapshot(&p);
        let mut donnees = make_completion();
        donnees.experience_precedente_recherche.doctorat_deja_realise = ChoixDoctoratDejaRealise::Yes;

        let err = p.completer(donnees, &make_doctorat()).unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-7", "PROPOSITION-8"]);
        assert_eq!(snapshot(&p), avant);
    }

    #[test]
    fn test_completer_comptabilite_round_trip() {
        let mut p = make_proposition();
        let comptabilite = Comptabilite {
            etudiant_solidaire: Some(false),
            type_numero_compte: Some(ChoixTypeCompteBancaire::Iban),
            numero_compte_iban: Some("BE43068999999501".into()),
            ..Comptabilite::non_remplie()
        };
        p.completer_comptabilite(MATRICULE, comptabilite.clone());
        assert_eq!(p.comptabilite(), &comptabilite);
        assert_eq!(p.comptabilite().code_bic_swift_banque, None);
        assert!(p.comptabilite().attestation_absence_dette_etablissement.is_empty());
    }

    #[test]
    fn test_verifier_projet_doctoral_does_not_mutate() {
        let p = make_proposition();
        let err = p.verifier_projet_doctoral().unwrap_err();
        assert_eq!(err.first(), Some(&PropositionError::DetailProjetNonComplete));
    }

    // ── Signatures ──────────────────────────────────────────────────

    #[test]
    fn test_verrouiller_depends_on_support_committee_state() {
        let mut p = make_proposition();
        p.statut = ChoixStatutPropositionDoctorale::CaACompleter;
        p.verrouiller_proposition_pour_signature();
        assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::CaEnAttenteDeSignature);

        for statut in ChoixStatutPropositionDoctorale::ALL {
            if *statut == ChoixStatutPropositionDoctorale::CaACompleter {
                continue;
            }
            let mut p = make_proposition();
            p.statut = *statut;
            p.verrouiller_proposition_pour_signature();
            assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::EnAttenteDeSignature);
        }
    }

    #[test]
    fn test_redonner_la_main_requires_signature_state() {
        let mut p = make_proposition();
        let err = p.redonner_la_main_au_candidat("promoteur").unwrap_err();
        assert!(err.contient(&PropositionError::PropositionNonEnAttenteDeSignature));
        assert_eq!(p.auteur_derniere_modification(), MATRICULE);

        p.verrouiller_proposition_pour_signature();
        p.redonner_la_main_au_candidat("promoteur").unwrap();
        assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::EnBrouillon);
        assert_eq!(p.auteur_derniere_modification(), "promoteur");
    }

    // ── Submission ──────────────────────────────────────────────────

    #[test]
    fn test_soumettre_captures_checklist_baseline() {
        let p = make_proposition_soumise();
        assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::Confirmee);
        assert_eq!(p.soumise_le(), Some(make_instant()));
        assert_eq!(p.annee_calculee(), Some(2024));
        assert_eq!(p.checklist_initiale(), Some(p.checklist_actuelle()));
        assert_eq!(p.checklist_actuelle().experiences().len(), 1);
        assert_eq!(
            p.checklist_actuelle().decision_sic.statut,
            ChoixStatutChecklist::InitialCandidat
        );
    }

    #[test]
    fn test_soumettre_refused_once_submitted() {
        use ChoixStatutPropositionDoctorale as S;
        for statut in S::ALL {
            if statut.est_dans(S::SOUMETTABLE) {
                continue;
            }
            let mut p = make_proposition_en_statut(*statut);
            let avant = snapshot(&p);
            let err = p
                .soumettre(
                    Soumission {
                        annee: 2025,
                        type_demande: TypeDemande::Inscription,
                        pot_calcule: None,
                        elements_confirmation: BTreeMap::new(),
                        uuids_experiences: vec!["exp-2".into()],
                    },
                    make_instant(),
                )
                .unwrap_err();
            assert!(err.contient(&PropositionError::PropositionDejaSoumise), "{statut}");
            assert_eq!(snapshot(&p), avant, "{statut}");
        }
    }

    #[test]
    fn test_soumettre_from_draft() {
        let mut p = make_proposition();
        p.soumettre(
            Soumission {
                annee: 2024,
                type_demande: TypeDemande::Admission,
                pot_calcule: None,
                elements_confirmation: BTreeMap::new(),
                uuids_experiences: Vec::new(),
            },
            make_instant(),
        )
        .unwrap();
        assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::Confirmee);
    }

    #[test]
    fn test_supprimer_is_terminal() {
        let mut p = make_proposition();
        p.supprimer();
        assert!(p.statut().is_terminal());
    }
}
