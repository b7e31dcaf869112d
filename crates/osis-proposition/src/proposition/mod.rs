//! # Doctoral Admission Proposition Aggregate
//!
//! One candidate's application to one doctoral programme. The aggregate
//! owns the lifecycle status, the candidate's project data, the review
//! checklists, and every decision taken on the application.
//!
//! ## Transition Contract
//!
//! Every mutating method follows the same shape:
//!
//! 1. Build the new field values locally.
//! 2. Run the transition's validator list against the current state and
//!    those local values.
//! 3. Only if validation passed, assign every new value, always
//!    including `auteur_derniere_modification`.
//!
//! A rejected transition therefore leaves the aggregate exactly as it
//! was. Methods are grouped by actor: [`candidat`], [`documents`],
//! [`cdd`], [`sic`], [`checklist`] (prior studies and access) and
//! [`financabilite`].
//!
//! The aggregate performs no I/O and never reads the clock. Collaborator
//! data (documents, curriculum check, quarantine) and the current instant
//! are passed in by the caller.

pub mod candidat;
pub mod cdd;
pub mod checklist;
pub mod documents;
pub mod financabilite;
pub mod sic;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use osis_checklist::{
    statut_configure, ChoixStatutChecklist, OngletChecklist, StatutChecklist,
    StatutsChecklistDoctorale,
};
use osis_core::{FormationIdentity, PropositionIdentity, Timestamp};
use osis_validation::ValidatorList;

use crate::enums::{
    BesoinDeDerogation, ChoixStatutPropositionDoctorale, ChoixTypeAdmission, ConditionAcces,
    DerogationFinancement, DispenseOuDroitsMajores, DroitsInscriptionMontant, EtatEquivalenceTitreAcces,
    EtatFinancabilite, MobiliteNombreDeMois, SituationFinancabilite, StatutEquivalenceTitreAcces,
    TypeDemande, TypeEquivalenceTitreAcces,
};
use crate::exceptions::{PropositionError, TransitionError};
use crate::valeurs::{
    CommissionProximite, ComplementFormationIdentity, Comptabilite, ConditionComplementaireIdentity,
    ConditionComplementaireLibre, DetailProjet, ExperiencePrecedenteRecherche, Financement,
    MotifRefusIdentity,
};

pub use candidat::{DonneesCompletion, NouvelleProposition, Soumission};
pub use cdd::InformationsAcceptation;
pub use sic::{ContexteApprobationSic, InformationsAcceptationSic};

// ─── Aggregate ───────────────────────────────────────────────────────

/// A doctoral admission proposition.
///
/// Fields are readable through accessors and writable only through the
/// transition methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposition {
    pub(crate) entity_id: PropositionIdentity,
    pub(crate) reference: u64,
    pub(crate) statut: ChoixStatutPropositionDoctorale,
    pub(crate) type_admission: ChoixTypeAdmission,
    pub(crate) type_demande: TypeDemande,
    pub(crate) formation_id: FormationIdentity,
    pub(crate) matricule_candidat: String,
    pub(crate) auteur_derniere_modification: String,
    pub(crate) creee_le: Timestamp,
    pub(crate) soumise_le: Option<Timestamp>,
    pub(crate) echeance_demande_documents: Option<NaiveDate>,

    // Candidate data
    pub(crate) justification: String,
    pub(crate) commission_proximite: Option<CommissionProximite>,
    pub(crate) projet: DetailProjet,
    pub(crate) financement: Financement,
    pub(crate) experience_precedente_recherche: ExperiencePrecedenteRecherche,
    pub(crate) comptabilite: Comptabilite,
    pub(crate) curriculum: Vec<String>,
    pub(crate) reponses_questions_specifiques: BTreeMap<String, serde_json::Value>,
    pub(crate) elements_confirmation: BTreeMap<String, String>,
    pub(crate) fiche_archive_signatures_envoyees: Vec<String>,
    pub(crate) annee_calculee: Option<i32>,
    pub(crate) pot_calcule: Option<String>,

    // Review checklists
    pub(crate) checklist_initiale: Option<StatutsChecklistDoctorale>,
    pub(crate) checklist_actuelle: StatutsChecklistDoctorale,

    // Refusal
    /// Motives of the latest refusal: a CDD or SIC decision, or a refused
    /// faculty dispensation. One slot shared by all three.
    pub(crate) motifs_refus: Vec<MotifRefusIdentity>,
    /// Free-text counterpart of `motifs_refus`.
    pub(crate) autres_motifs_refus: Vec<String>,

    // Faculty acceptance bundle
    pub(crate) avec_conditions_complementaires: Option<bool>,
    pub(crate) conditions_complementaires_existantes: Vec<ConditionComplementaireIdentity>,
    pub(crate) conditions_complementaires_libres: Vec<ConditionComplementaireLibre>,
    pub(crate) avec_complements_formation: Option<bool>,
    pub(crate) complements_formation: Vec<ComplementFormationIdentity>,
    pub(crate) commentaire_complements_formation: String,
    pub(crate) nombre_annees_prevoir_programme: Option<u8>,
    pub(crate) nom_personne_contact_programme_annuel: String,
    pub(crate) email_personne_contact_programme_annuel: String,
    pub(crate) commentaire_programme_conjoint: String,

    // Decision certificates (opaque storage handles)
    pub(crate) certificat_approbation_cdd: Vec<String>,
    pub(crate) certificat_approbation_sic: Vec<String>,
    pub(crate) certificat_approbation_sic_annexe: Vec<String>,
    pub(crate) certificat_refus_cdd: Vec<String>,
    pub(crate) certificat_refus_sic: Vec<String>,

    // SIC approval details
    pub(crate) droits_inscription_montant: Option<DroitsInscriptionMontant>,
    pub(crate) dispense_ou_droits_majores: Option<DispenseOuDroitsMajores>,
    pub(crate) est_mobilite: Option<bool>,
    pub(crate) nombre_de_mois_de_mobilite: Option<MobiliteNombreDeMois>,
    pub(crate) doit_se_presenter_en_sic: Option<bool>,
    pub(crate) communication_au_candidat: String,
    pub(crate) besoin_de_derogation: BesoinDeDerogation,

    // Prior studies equivalence
    pub(crate) condition_acces: Option<ConditionAcces>,
    pub(crate) millesime_condition_acces: Option<i32>,
    pub(crate) type_equivalence_titre_acces: Option<TypeEquivalenceTitreAcces>,
    pub(crate) statut_equivalence_titre_acces: Option<StatutEquivalenceTitreAcces>,
    pub(crate) etat_equivalence_titre_acces: Option<EtatEquivalenceTitreAcces>,
    pub(crate) date_prise_effet_equivalence_titre_acces: Option<NaiveDate>,

    // Financeability
    pub(crate) financabilite_regle_calcule: Option<EtatFinancabilite>,
    pub(crate) financabilite_regle_calcule_situation: Option<SituationFinancabilite>,
    pub(crate) financabilite_regle_calcule_le: Option<Timestamp>,
    pub(crate) financabilite_regle: Option<SituationFinancabilite>,
    pub(crate) financabilite_etabli_par: Option<String>,
    pub(crate) financabilite_etabli_le: Option<Timestamp>,
    pub(crate) financabilite_derogation_statut: DerogationFinancement,
    pub(crate) financabilite_derogation_premiere_notification_le: Option<Timestamp>,
    pub(crate) financabilite_derogation_premiere_notification_par: Option<String>,
    pub(crate) financabilite_derogation_derniere_notification_le: Option<Timestamp>,
    pub(crate) financabilite_derogation_derniere_notification_par: Option<String>,
}

// ─── Shared helpers ──────────────────────────────────────────────────

/// Extra key refining a `BESOIN_DEROGATION` tab status.
pub(crate) const CLE_ETAT_BESOIN_DEROGATION: &str = "etat_besoin_derogation";

/// Run a validator list, converting its failure into a transition error.
pub(crate) fn valider<L>(liste: &L) -> Result<(), TransitionError>
where
    L: ValidatorList<PropositionError>,
{
    liste.validate()?;
    Ok(())
}

/// The configured status named `identifiant` on a tab.
///
/// Identifiers are literals of this crate; an unconfigured one falls
/// back to a bare status so a transition never panics.
pub(crate) fn statut_onglet(
    onglet: OngletChecklist,
    identifiant: &str,
    repli: ChoixStatutChecklist,
) -> StatutChecklist {
    statut_configure(onglet, identifiant).unwrap_or_else(|| StatutChecklist::new(repli, identifiant))
}

// ─── Accessors ───────────────────────────────────────────────────────

impl Proposition {
    pub fn entity_id(&self) -> &PropositionIdentity {
        &self.entity_id
    }

    /// Human-facing sequential reference.
    pub fn reference(&self) -> u64 {
        self.reference
    }

    pub fn statut(&self) -> ChoixStatutPropositionDoctorale {
        self.statut
    }

    pub fn type_admission(&self) -> ChoixTypeAdmission {
        self.type_admission
    }

    pub fn type_demande(&self) -> TypeDemande {
        self.type_demande
    }

    pub fn formation_id(&self) -> &FormationIdentity {
        &self.formation_id
    }

    pub fn matricule_candidat(&self) -> &str {
        &self.matricule_candidat
    }

    /// Identifier of whoever performed the last successful transition.
    pub fn auteur_derniere_modification(&self) -> &str {
        &self.auteur_derniere_modification
    }

    pub fn creee_le(&self) -> Timestamp {
        self.creee_le
    }

    pub fn soumise_le(&self) -> Option<Timestamp> {
        self.soumise_le
    }

    /// Deadline of the pending document request.
    pub fn echeance_demande_documents(&self) -> Option<NaiveDate> {
        self.echeance_demande_documents
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    pub fn commission_proximite(&self) -> Option<CommissionProximite> {
        self.commission_proximite
    }

    pub fn projet(&self) -> &DetailProjet {
        &self.projet
    }

    pub fn financement(&self) -> &Financement {
        &self.financement
    }

    pub fn experience_precedente_recherche(&self) -> &ExperiencePrecedenteRecherche {
        &self.experience_precedente_recherche
    }

    pub fn comptabilite(&self) -> &Comptabilite {
        &self.comptabilite
    }

    pub fn curriculum(&self) -> &[String] {
        &self.curriculum
    }

    pub fn reponses_questions_specifiques(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.reponses_questions_specifiques
    }

    pub fn fiche_archive_signatures_envoyees(&self) -> &[String] {
        &self.fiche_archive_signatures_envoyees
    }

    pub fn annee_calculee(&self) -> Option<i32> {
        self.annee_calculee
    }

    /// Baseline captured at submission; `None` for a draft.
    pub fn checklist_initiale(&self) -> Option<&StatutsChecklistDoctorale> {
        self.checklist_initiale.as_ref()
    }

    pub fn checklist_actuelle(&self) -> &StatutsChecklistDoctorale {
        &self.checklist_actuelle
    }

    /// Motives recorded by the last CDD, SIC or dispensation refusal.
    pub fn motifs_refus(&self) -> &[MotifRefusIdentity] {
        &self.motifs_refus
    }

    pub fn autres_motifs_refus(&self) -> &[String] {
        &self.autres_motifs_refus
    }

    pub fn avec_conditions_complementaires(&self) -> Option<bool> {
        self.avec_conditions_complementaires
    }

    pub fn avec_complements_formation(&self) -> Option<bool> {
        self.avec_complements_formation
    }

    pub fn complements_formation(&self) -> &[ComplementFormationIdentity] {
        &self.complements_formation
    }

    pub fn commentaire_complements_formation(&self) -> &str {
        &self.commentaire_complements_formation
    }

    pub fn nombre_annees_prevoir_programme(&self) -> Option<u8> {
        self.nombre_annees_prevoir_programme
    }

    pub fn besoin_de_derogation(&self) -> BesoinDeDerogation {
        self.besoin_de_derogation
    }

    pub fn condition_acces(&self) -> Option<ConditionAcces> {
        self.condition_acces
    }

    pub fn millesime_condition_acces(&self) -> Option<i32> {
        self.millesime_condition_acces
    }

    pub fn type_equivalence_titre_acces(&self) -> Option<TypeEquivalenceTitreAcces> {
        self.type_equivalence_titre_acces
    }

    pub fn statut_equivalence_titre_acces(&self) -> Option<StatutEquivalenceTitreAcces> {
        self.statut_equivalence_titre_acces
    }

    pub fn etat_equivalence_titre_acces(&self) -> Option<EtatEquivalenceTitreAcces> {
        self.etat_equivalence_titre_acces
    }

    pub fn financabilite_regle_calcule(&self) -> Option<EtatFinancabilite> {
        self.financabilite_regle_calcule
    }

    pub fn financabilite_regle_calcule_situation(&self) -> Option<SituationFinancabilite> {
        self.financabilite_regle_calcule_situation
    }

    pub fn financabilite_regle_calcule_le(&self) -> Option<Timestamp> {
        self.financabilite_regle_calcule_le
    }

    pub fn financabilite_regle(&self) -> Option<SituationFinancabilite> {
        self.financabilite_regle
    }

    pub fn financabilite_etabli_par(&self) -> Option<&str> {
        self.financabilite_etabli_par.as_deref()
    }

    pub fn financabilite_etabli_le(&self) -> Option<Timestamp> {
        self.financabilite_etabli_le
    }

    pub fn financabilite_derogation_statut(&self) -> DerogationFinancement {
        self.financabilite_derogation_statut
    }

    pub fn financabilite_derogation_premiere_notification_le(&self) -> Option<Timestamp> {
        self.financabilite_derogation_premiere_notification_le
    }

    pub fn financabilite_derogation_derniere_notification_le(&self) -> Option<Timestamp> {
        self.financabilite_derogation_derniere_notification_le
    }

    pub fn financabilite_derogation_derniere_notification_par(&self) -> Option<&str> {
        self.financabilite_derogation_derniere_notification_par.as_deref()
    }
}
