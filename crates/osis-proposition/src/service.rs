//! # Use Cases
//!
//! Each use case loads one proposition, gathers what its transition needs
//! from the collaborators, calls exactly one aggregate method, saves, and
//! only then fires side effects (certificate, notification, history).
//!
//! ## Failure Handling
//!
//! - A missing proposition or doctorate is a [`TransitionError::NonTrouve`].
//! - A rejected transition is logged at `warn` and returned unchanged;
//!   nothing is saved.
//! - A failing save is returned as [`ServiceError::Port`].
//! - Side effects run after the save. Their failures are logged and do
//!   not undo the transition.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use osis_checklist::ChoixStatutChecklist;
use osis_core::{AdmissionConfig, FormationIdentity, PropositionIdentity, Timestamp};

use crate::enums::{
    ChoixTypeAdmission, DerogationFinancement, SituationFinancabilite, TypeCertificat, TypeDemande,
    TypeGestionnaire,
};
use crate::exceptions::{PropositionError, TransitionError};
use crate::ports::{
    AnneeAcademiqueRepository, DoctoratTranslator, EmplacementsDocumentsTranslator, Evenement,
    Historique, Notification, PdfGeneration, PortError, ProfilCandidatTranslator,
    PropositionRepository, TitreAccesSelectionnableRepository,
};
use crate::proposition::{
    ContexteApprobationSic, DonneesCompletion, InformationsAcceptation, NouvelleProposition,
    Proposition, Soumission,
};
use crate::valeurs::MotifRefusIdentity;

/// Why a use case did not complete.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A business rule was broken or an entity is missing.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// A collaborator failed.
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ServiceError {
    /// The business failure, if this is one.
    pub fn transition(&self) -> Option<&TransitionError> {
        match self {
            Self::Transition(e) => Some(e),
            Self::Port(_) => None,
        }
    }
}

impl From<PropositionError> for ServiceError {
    fn from(e: PropositionError) -> Self {
        Self::Transition(TransitionError::NonTrouve(e))
    }
}

/// Deadline of a document request made on `aujourdhui`: the configured
/// delay, but never past the end of the current academic year.
pub fn echeance_reclamation_documents(
    aujourdhui: NaiveDate,
    delai_jours: u32,
    annees: &dyn AnneeAcademiqueRepository,
) -> NaiveDate {
    let echeance = aujourdhui + Duration::days(i64::from(delai_jours));
    match annees.annee_contenant(aujourdhui) {
        Some(annee) => echeance.min(annee.fin),
        None => echeance,
    }
}

fn rejet(operation: &'static str, entity_id: &PropositionIdentity, erreur: TransitionError) -> ServiceError {
    tracing::warn!(
        proposition = %entity_id,
        operation,
        codes = ?erreur.status_codes(),
        "transition rejected"
    );
    ServiceError::Transition(erreur)
}

// ─── Commands ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InitierPropositionCommand {
    pub matricule_candidat: String,
    pub sigle_formation: String,
    pub annee_formation: i32,
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<String>,
    pub commission_proximite: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SoumettrePropositionCommand {
    pub uuid_proposition: PropositionIdentity,
    pub annee: i32,
    pub type_demande: TypeDemande,
    pub pot_calcule: Option<String>,
    pub elements_confirmation: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ReclamerDocumentsCommand {
    pub uuid_proposition: PropositionIdentity,
    pub identifiants_emplacements: Vec<String>,
    /// Explicit deadline; computed from the configuration when absent.
    pub a_echeance_le: Option<NaiveDate>,
    pub auteur: String,
    pub type_gestionnaire: TypeGestionnaire,
}

#[derive(Debug, Clone)]
pub struct SpecifierConditionAccesCommand {
    pub uuid_proposition: PropositionIdentity,
    pub auteur: String,
    pub condition_acces: Option<String>,
    pub millesime_condition_acces: Option<i32>,
    pub avec_complements_formation: Option<bool>,
}

// ─── Service ─────────────────────────────────────────────────────────

/// Every collaborator a use case may need.
#[derive(Clone, Copy)]
pub struct Collaborateurs<'a> {
    pub propositions: &'a dyn PropositionRepository,
    pub doctorats: &'a dyn DoctoratTranslator,
    pub profil_candidat: &'a dyn ProfilCandidatTranslator,
    pub annees_academiques: &'a dyn AnneeAcademiqueRepository,
    pub titres_acces: &'a dyn TitreAccesSelectionnableRepository,
    pub emplacements_documents: &'a dyn EmplacementsDocumentsTranslator,
    pub pdf: &'a dyn PdfGeneration,
    pub notification: &'a dyn Notification,
    pub historique: &'a dyn Historique,
}

/// Doctoral admission use cases.
pub struct PropositionService<'a> {
    ports: Collaborateurs<'a>,
    config: &'a AdmissionConfig,
}

impl<'a> PropositionService<'a> {
    pub fn new(ports: Collaborateurs<'a>, config: &'a AdmissionConfig) -> Self {
        Self { ports, config }
    }

    // ─── Plumbing ────────────────────────────────────────────────────

    fn charger(&self, entity_id: &PropositionIdentity) -> Result<Proposition, ServiceError> {
        self.ports
            .propositions
            .get(entity_id)?
            .ok_or_else(|| PropositionError::PropositionNonTrouvee.into())
    }

    /// Save, then fire notification and history.
    fn enregistrer(
        &self,
        proposition: &Proposition,
        evenement: Evenement,
        auteur: &str,
    ) -> Result<(), ServiceError> {
        self.ports.propositions.save(proposition)?;
        tracing::info!(
            proposition = %proposition.entity_id(),
            statut = %proposition.statut(),
            evenement = %evenement,
            auteur,
            "proposition saved"
        );

        if let Err(e) = self.ports.notification.notifier(proposition, evenement) {
            tracing::warn!(proposition = %proposition.entity_id(), error = %e, "notification failed");
        }
        if let Err(e) = self.ports.historique.historiser(proposition, evenement, auteur) {
            tracing::warn!(proposition = %proposition.entity_id(), error = %e, "history entry failed");
        }
        Ok(())
    }

    /// Render a certificate after a decision and attach its handle.
    fn certifier(&self, proposition: &mut Proposition, certificat: TypeCertificat) {
        let handle = match self.ports.pdf.generer_certificat(proposition, certificat) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(
                    proposition = %proposition.entity_id(),
                    certificat = %certificat,
                    error = %e,
                    "certificate generation failed"
                );
                return;
            }
        };
        proposition.enregistrer_certificat(certificat, handle);
        if let Err(e) = self.ports.propositions.save(proposition) {
            tracing::warn!(proposition = %proposition.entity_id(), error = %e, "certificate not saved");
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────

    pub fn recuperer_proposition(
        &self,
        entity_id: &PropositionIdentity,
    ) -> Result<Proposition, ServiceError> {
        self.charger(entity_id)
    }

    pub fn lister_propositions(
        &self,
        matricule_candidat: Option<&str>,
    ) -> Result<Vec<Proposition>, ServiceError> {
        Ok(self.ports.propositions.search(matricule_candidat)?)
    }

    // ─── Candidate ───────────────────────────────────────────────────

    pub fn initier_proposition(
        &self,
        cmd: InitierPropositionCommand,
        maintenant: Timestamp,
    ) -> Result<PropositionIdentity, ServiceError> {
        let formation = FormationIdentity::new(cmd.sigle_formation, cmd.annee_formation);
        let doctorat = self
            .ports
            .doctorats
            .get(&formation)
            .ok_or(PropositionError::DoctoratNonTrouve)?;
        let entity_id = PropositionIdentity::new();
        let matricule = cmd.matricule_candidat.clone();

        let proposition = Proposition::initier(
            entity_id.clone(),
            NouvelleProposition {
                reference: self.ports.propositions.prochaine_reference()?,
                matricule_candidat: cmd.matricule_candidat,
                type_admission: cmd.type_admission,
                justification: cmd.justification,
                commission_proximite: cmd.commission_proximite,
            },
            &doctorat,
            maintenant,
        )
        .map_err(|e| rejet("initier_proposition", &entity_id, e))?;

        self.ports.propositions.save(&proposition)?;
        tracing::info!(proposition = %entity_id, formation = %formation, "proposition created");
        if let Err(e) = self.ports.historique.historiser(&proposition, Evenement::Initiee, &matricule) {
            tracing::warn!(proposition = %entity_id, error = %e, "history entry failed");
        }
        Ok(entity_id)
    }

    /// Replace the project, funding and prior research of a draft.
    pub fn completer_proposition(
        &self,
        entity_id: &PropositionIdentity,
        donnees: DonneesCompletion,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        let doctorat = self
            .ports
            .doctorats
            .get(proposition.formation_id())
            .ok_or(PropositionError::DoctoratNonTrouve)?;

        proposition
            .completer(donnees, &doctorat)
            .map_err(|e| rejet("completer_proposition", entity_id, e))?;

        let auteur = proposition.matricule_candidat().to_string();
        self.enregistrer(&proposition, Evenement::Completee, &auteur)?;
        Ok(entity_id.clone())
    }

    pub fn verrouiller_proposition_pour_signature(
        &self,
        entity_id: &PropositionIdentity,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition
            .verifier_projet_doctoral()
            .map_err(|e| rejet("verrouiller_proposition_pour_signature", entity_id, e))?;

        proposition.verrouiller_proposition_pour_signature();

        let auteur = proposition.matricule_candidat().to_string();
        self.enregistrer(&proposition, Evenement::VerrouilleePourSignature, &auteur)?;
        Ok(entity_id.clone())
    }

    /// Submit the proposition. The curriculum must be complete for the
    /// submission year.
    pub fn soumettre_proposition(
        &self,
        cmd: SoumettrePropositionCommand,
        maintenant: Timestamp,
    ) -> Result<PropositionIdentity, ServiceError> {
        let entity_id = cmd.uuid_proposition;
        let mut proposition = self.charger(&entity_id)?;
        let matricule = proposition.matricule_candidat().to_string();

        proposition
            .verifier_projet_doctoral()
            .map_err(|e| rejet("soumettre_proposition", &entity_id, e))?;
        self.ports
            .profil_candidat
            .verifier_curriculum(&matricule, cmd.annee, Some(maintenant.date()))
            .map_err(|e| rejet("soumettre_proposition", &entity_id, e.into()))?;
        let uuids_experiences = self.ports.profil_candidat.uuids_experiences(&matricule);

        proposition
            .soumettre(
                Soumission {
                    annee: cmd.annee,
                    type_demande: cmd.type_demande,
                    pot_calcule: cmd.pot_calcule,
                    elements_confirmation: cmd.elements_confirmation,
                    uuids_experiences,
                },
                maintenant,
            )
            .map_err(|e| rejet("soumettre_proposition", &entity_id, e))?;

        self.enregistrer(&proposition, Evenement::Soumise, &matricule)?;
        Ok(entity_id)
    }

    pub fn redonner_la_main_au_candidat(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition
            .redonner_la_main_au_candidat(auteur)
            .map_err(|e| rejet("redonner_la_main_au_candidat", entity_id, e))?;
        self.enregistrer(&proposition, Evenement::MainRedonneeAuCandidat, auteur)?;
        Ok(entity_id.clone())
    }

    // ─── Faculty ─────────────────────────────────────────────────────

    pub fn envoyer_a_cdd_pour_decision(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition
            .envoyer_a_cdd_pour_decision(auteur)
            .map_err(|e| rejet("envoyer_a_cdd_pour_decision", entity_id, e))?;
        self.enregistrer(&proposition, Evenement::EnvoyeeACdd, auteur)?;
        Ok(entity_id.clone())
    }

    /// Record the acceptance details the faculty approval relies on.
    pub fn specifier_informations_acceptation_par_cdd(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        informations: InformationsAcceptation,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition
            .specifier_informations_acceptation_par_cdd(auteur, informations)
            .map_err(|e| rejet("specifier_informations_acceptation_par_cdd", entity_id, e))?;
        self.enregistrer(&proposition, Evenement::InformationsAcceptationSpecifiees, auteur)?;
        Ok(entity_id.clone())
    }

    pub fn approuver_par_cdd(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        let titres = self.ports.titres_acces.search_by_proposition(entity_id, true);

        proposition
            .approuver_par_cdd(auteur, &titres)
            .map_err(|e| rejet("approuver_par_cdd", entity_id, e))?;

        self.enregistrer(&proposition, Evenement::ApprouveeParCdd, auteur)?;
        self.certifier(&mut proposition, TypeCertificat::ApprobationCdd);
        Ok(entity_id.clone())
    }

    /// Record the refusal motives, then refuse.
    pub fn refuser_par_cdd(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        let titres = self.ports.titres_acces.search_by_proposition(entity_id, true);

        // Nothing is saved unless both steps pass.
        proposition
            .specifier_motifs_refus_par_cdd(auteur, motifs_refus, autres_motifs_refus)
            .and_then(|()| proposition.refuser_par_cdd(auteur, &titres))
            .map_err(|e| rejet("refuser_par_cdd", entity_id, e))?;

        self.enregistrer(&proposition, Evenement::RefuseeParCdd, auteur)?;
        self.certifier(&mut proposition, TypeCertificat::RefusCdd);
        Ok(entity_id.clone())
    }

    // ─── Central administration ──────────────────────────────────────

    /// SIC authorises the proposition, after checking documents, the
    /// curriculum and the quarantine through the collaborators.
    pub fn approuver_par_sic(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        maintenant: Timestamp,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        let matricule = proposition.matricule_candidat().to_string();

        let annee = proposition
            .annee_calculee()
            .or_else(|| {
                self.ports
                    .annees_academiques
                    .annee_contenant(maintenant.date())
                    .map(|a| a.annee)
            })
            .unwrap_or(proposition.formation_id().annee);
        let contexte = ContexteApprobationSic {
            documents: self
                .ports
                .emplacements_documents
                .recuperer_emplacements(entity_id),
            verification_curriculum: self.ports.profil_candidat.verifier_curriculum(
                &matricule,
                annee,
                proposition.soumise_le().map(|t| t.date()),
            ),
            en_quarantaine: self.ports.profil_candidat.est_en_quarantaine(&matricule),
        };

        proposition
            .approuver_par_sic(auteur, &contexte)
            .map_err(|e| rejet("approuver_par_sic", entity_id, e))?;

        self.enregistrer(&proposition, Evenement::ApprouveeParSic, auteur)?;
        self.certifier(&mut proposition, TypeCertificat::ApprobationSic);
        self.certifier(&mut proposition, TypeCertificat::ApprobationSicAnnexe);
        Ok(entity_id.clone())
    }

    /// Record the refusal motives, then refuse.
    pub fn refuser_par_sic(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition
            .specifier_motifs_refus_par_sic(auteur, motifs_refus, autres_motifs_refus)
            .and_then(|()| proposition.refuser_par_sic(auteur))
            .map_err(|e| rejet("refuser_par_sic", entity_id, e))?;

        self.enregistrer(&proposition, Evenement::RefuseeParSic, auteur)?;
        self.certifier(&mut proposition, TypeCertificat::RefusSic);
        Ok(entity_id.clone())
    }

    // ─── Documents ───────────────────────────────────────────────────

    pub fn reclamer_documents_au_candidat(
        &self,
        cmd: ReclamerDocumentsCommand,
        maintenant: Timestamp,
    ) -> Result<PropositionIdentity, ServiceError> {
        let entity_id = cmd.uuid_proposition;
        let mut proposition = self.charger(&entity_id)?;
        let echeance = cmd.a_echeance_le.unwrap_or_else(|| {
            echeance_reclamation_documents(
                maintenant.date(),
                self.config.delai_reclamation_documents_jours,
                self.ports.annees_academiques,
            )
        });

        // Placements first: if they cannot be marked, nothing is saved.
        self.ports
            .emplacements_documents
            .reclamer(&entity_id, &cmd.identifiants_emplacements, &cmd.auteur, echeance)
            .map_err(|e| {
                tracing::warn!(proposition = %entity_id, error = %e, "document placements not updated");
                e
            })?;
        proposition.reclamer_documents(&cmd.auteur, cmd.type_gestionnaire, echeance);

        self.enregistrer(&proposition, Evenement::DocumentsReclames, &cmd.auteur)?;
        Ok(entity_id)
    }

    // ─── Checklist ───────────────────────────────────────────────────

    pub fn modifier_statut_checklist_parcours_anterieur(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        statut: ChoixStatutChecklist,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        let titres = self.ports.titres_acces.search_by_proposition(entity_id, true);

        proposition
            .modifier_statut_checklist_parcours_anterieur(auteur, statut, &titres)
            .map_err(|e| rejet("modifier_statut_checklist_parcours_anterieur", entity_id, e))?;

        self.enregistrer(&proposition, Evenement::ParcoursAnterieurModifie, auteur)?;
        Ok(entity_id.clone())
    }

    pub fn modifier_statut_checklist_experience_parcours_anterieur(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        uuid_experience: &str,
        statut: ChoixStatutChecklist,
        statut_authentification: Option<bool>,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition.specifier_statut_checklist_experience_parcours_anterieur(
            auteur,
            uuid_experience,
            statut,
            statut_authentification,
        );
        self.enregistrer(&proposition, Evenement::ExperienceModifiee, auteur)?;
        Ok(entity_id.clone())
    }

    pub fn specifier_condition_acces(
        &self,
        cmd: SpecifierConditionAccesCommand,
    ) -> Result<PropositionIdentity, ServiceError> {
        let entity_id = cmd.uuid_proposition;
        let mut proposition = self.charger(&entity_id)?;
        let titres = self.ports.titres_acces.search_by_proposition(&entity_id, true);

        proposition
            .specifier_condition_acces(
                &cmd.auteur,
                cmd.condition_acces.as_deref(),
                cmd.millesime_condition_acces,
                cmd.avec_complements_formation,
                &titres,
            )
            .map_err(|e| rejet("specifier_condition_acces", &entity_id, e))?;

        self.enregistrer(&proposition, Evenement::ConditionAccesSpecifiee, &cmd.auteur)?;
        Ok(entity_id)
    }

    // ─── Financeability ──────────────────────────────────────────────

    pub fn specifier_financabilite_regle(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        situation: SituationFinancabilite,
        maintenant: Timestamp,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition.specifier_financabilite_regle(auteur, situation, maintenant);
        self.enregistrer(&proposition, Evenement::FinancabiliteModifiee, auteur)?;
        Ok(entity_id.clone())
    }

    pub fn specifier_derogation_financabilite(
        &self,
        entity_id: &PropositionIdentity,
        auteur: &str,
        statut: DerogationFinancement,
        motifs_refus: Vec<MotifRefusIdentity>,
        autres_motifs_refus: Vec<String>,
    ) -> Result<PropositionIdentity, ServiceError> {
        let mut proposition = self.charger(entity_id)?;
        proposition.specifier_derogation_financabilite(auteur, statut, motifs_refus, autres_motifs_refus);
        self.enregistrer(&proposition, Evenement::FinancabiliteModifiee, auteur)?;
        Ok(entity_id.clone())
    }
}
