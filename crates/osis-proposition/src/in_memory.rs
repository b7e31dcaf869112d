//! # In-Memory Collaborators
//!
//! One implementation of every port in [`ports`](crate::ports), used as
//! test doubles and as the CLI's defaults for everything except storage.
//!
//! Each type is a cloneable handle over shared state: clones observe the
//! same data. Locks are `parking_lot`, so a panicking test cannot poison
//! a double for the next one.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use parking_lot::RwLock;

use osis_core::{FormationIdentity, PropositionIdentity};
use osis_validation::MultipleBusinessExceptions;

use crate::enums::{ChoixStatutPropositionDoctorale, StatutEmplacementDocument, TypeCertificat};
use crate::exceptions::PropositionError;
use crate::ports::{
    AnneeAcademique, AnneeAcademiqueRepository, DoctoratTranslator, EmplacementsDocumentsTranslator,
    Evenement, Historique, Notification, PdfGeneration, PortError, ProfilCandidatTranslator,
    PropositionRepository, TitreAccesSelectionnableRepository,
};
use crate::proposition::Proposition;
use crate::service::Collaborateurs;
use crate::valeurs::{Doctorat, EmplacementDocument, TitreAccesSelectionnable};

type Partage<T> = Arc<RwLock<T>>;

// ─── Propositions ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct PropositionInMemoryRepository {
    data: Partage<BTreeMap<PropositionIdentity, Proposition>>,
}

impl PropositionInMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&self) {
        self.data.write().clear();
    }
}

impl PropositionRepository for PropositionInMemoryRepository {
    fn get(&self, entity_id: &PropositionIdentity) -> Result<Option<Proposition>, PortError> {
        Ok(self.data.read().get(entity_id).cloned())
    }

    fn save(&self, proposition: &Proposition) -> Result<(), PortError> {
        self.data
            .write()
            .insert(proposition.entity_id().clone(), proposition.clone());
        Ok(())
    }

    fn search(&self, matricule_candidat: Option<&str>) -> Result<Vec<Proposition>, PortError> {
        let mut propositions: Vec<Proposition> = self
            .data
            .read()
            .values()
            .filter(|p| matricule_candidat.map_or(true, |m| p.matricule_candidat() == m))
            .cloned()
            .collect();
        propositions.sort_by_key(Proposition::reference);
        Ok(propositions)
    }
}

// ─── Doctorates ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DoctoratInMemoryTranslator {
    doctorats: Vec<Doctorat>,
}

impl DoctoratInMemoryTranslator {
    pub fn new(doctorats: Vec<Doctorat>) -> Self {
        Self { doctorats }
    }
}

impl Default for DoctoratInMemoryTranslator {
    /// A small catalogue covering each managing committee kind.
    fn default() -> Self {
        let catalogue = [
            ("ECGE3DP", "Doctorate in economics and management", "CDE"),
            ("ESP3DP", "Doctorate in political and social sciences", "CLSM"),
            ("SC3DP", "Doctorate in sciences", "CDSS"),
            ("MED3DP", "Doctorate in medical sciences", "CDSS"),
            ("PHIL3DP", "Doctorate in philosophy", "CDPHIL"),
        ];
        let doctorats = (2020..=2026)
            .flat_map(|annee| {
                catalogue.iter().map(move |(sigle, intitule, entite)| {
                    Doctorat::new(FormationIdentity::new(*sigle, annee), *intitule, *entite)
                })
            })
            .collect();
        Self { doctorats }
    }
}

impl DoctoratTranslator for DoctoratInMemoryTranslator {
    fn get(&self, formation: &FormationIdentity) -> Option<Doctorat> {
        self.doctorats
            .iter()
            .find(|d| &d.entity_id == formation)
            .cloned()
    }
}

// ─── Candidate profile ───────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ProfilCandidatInMemoryTranslator {
    curriculum_incomplet: Partage<BTreeMap<String, Vec<PropositionError>>>,
    quarantaine: Partage<BTreeSet<String>>,
    experiences: Partage<BTreeMap<String, Vec<String>>>,
}

impl ProfilCandidatInMemoryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the curriculum check report `manquements` for this candidate.
    pub fn signaler_curriculum_incomplet(&self, matricule: &str, manquements: Vec<PropositionError>) {
        self.curriculum_incomplet
            .write()
            .insert(matricule.to_string(), manquements);
    }

    pub fn mettre_en_quarantaine(&self, matricule: &str) {
        self.quarantaine.write().insert(matricule.to_string());
    }

    pub fn definir_experiences(&self, matricule: &str, uuids: Vec<String>) {
        self.experiences.write().insert(matricule.to_string(), uuids);
    }
}

impl ProfilCandidatTranslator for ProfilCandidatInMemoryTranslator {
    fn verifier_curriculum(
        &self,
        matricule: &str,
        _annee_courante: i32,
        _date_soumission: Option<NaiveDate>,
    ) -> Result<(), MultipleBusinessExceptions<PropositionError>> {
        let manquements = self
            .curriculum_incomplet
            .read()
            .get(matricule)
            .cloned()
            .unwrap_or_default();
        match MultipleBusinessExceptions::from_vec(manquements) {
            Some(toutes) => Err(toutes),
            None => Ok(()),
        }
    }

    fn est_en_quarantaine(&self, matricule: &str) -> bool {
        self.quarantaine.read().contains(matricule)
    }

    fn uuids_experiences(&self, matricule: &str) -> Vec<String> {
        self.experiences
            .read()
            .get(matricule)
            .cloned()
            .unwrap_or_default()
    }
}

// ─── Academic years ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AnneeAcademiqueInMemoryRepository {
    annees: Vec<AnneeAcademique>,
}

impl AnneeAcademiqueInMemoryRepository {
    pub fn new(annees: Vec<AnneeAcademique>) -> Self {
        Self { annees }
    }

    /// Years `premiere..=derniere`, each from 15 September to the
    /// following 14 September.
    pub fn entre(premiere: i32, derniere: i32) -> Self {
        let annees = (premiere..=derniere)
            .filter_map(|annee| {
                Some(AnneeAcademique {
                    annee,
                    debut: NaiveDate::from_ymd_opt(annee, 9, 15)?,
                    fin: NaiveDate::from_ymd_opt(annee + 1, 9, 14)?,
                })
            })
            .collect();
        Self { annees }
    }
}

impl Default for AnneeAcademiqueInMemoryRepository {
    fn default() -> Self {
        let courante = chrono::Utc::now().year();
        Self::entre(courante - 5, courante + 2)
    }
}

impl AnneeAcademiqueRepository for AnneeAcademiqueInMemoryRepository {
    fn get(&self, annee: i32) -> Option<AnneeAcademique> {
        self.annees.iter().find(|a| a.annee == annee).copied()
    }

    fn search(&self) -> Vec<AnneeAcademique> {
        self.annees.clone()
    }
}

// ─── Access titles ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct TitreAccesSelectionnableInMemoryRepository {
    titres: Partage<BTreeMap<PropositionIdentity, Vec<TitreAccesSelectionnable>>>,
}

impl TitreAccesSelectionnableInMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definir(&self, entity_id: &PropositionIdentity, titres: Vec<TitreAccesSelectionnable>) {
        self.titres.write().insert(entity_id.clone(), titres);
    }
}

impl TitreAccesSelectionnableRepository for TitreAccesSelectionnableInMemoryRepository {
    fn search_by_proposition(
        &self,
        entity_id: &PropositionIdentity,
        seulement_selectionnes: bool,
    ) -> Vec<TitreAccesSelectionnable> {
        self.titres
            .read()
            .get(entity_id)
            .map(|titres| {
                titres
                    .iter()
                    .filter(|t| !seulement_selectionnes || t.selectionne)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ─── Documents ───────────────────────────────────────────────────────

/// A document request sent to a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reclamation {
    pub entity_id: PropositionIdentity,
    pub identifiants: Vec<String>,
    pub auteur: String,
    pub a_echeance_le: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct EmplacementsDocumentsInMemoryTranslator {
    emplacements: Partage<BTreeMap<PropositionIdentity, Vec<EmplacementDocument>>>,
    reclamations: Partage<Vec<Reclamation>>,
}

impl EmplacementsDocumentsInMemoryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definir(&self, entity_id: &PropositionIdentity, emplacements: Vec<EmplacementDocument>) {
        self.emplacements.write().insert(entity_id.clone(), emplacements);
    }

    pub fn reclamations(&self) -> Vec<Reclamation> {
        self.reclamations.read().clone()
    }
}

impl EmplacementsDocumentsTranslator for EmplacementsDocumentsInMemoryTranslator {
    fn recuperer_emplacements(&self, entity_id: &PropositionIdentity) -> Vec<EmplacementDocument> {
        self.emplacements
            .read()
            .get(entity_id)
            .cloned()
            .unwrap_or_default()
    }

    fn reclamer(
        &self,
        entity_id: &PropositionIdentity,
        identifiants: &[String],
        auteur: &str,
        a_echeance_le: NaiveDate,
    ) -> Result<(), PortError> {
        if let Some(emplacements) = self.emplacements.write().get_mut(entity_id) {
            emplacements
                .iter_mut()
                .filter(|e| identifiants.contains(&e.identifiant))
                .for_each(|e| e.statut = StatutEmplacementDocument::Reclame);
        }
        self.reclamations.write().push(Reclamation {
            entity_id: entity_id.clone(),
            identifiants: identifiants.to_vec(),
            auteur: auteur.to_string(),
            a_echeance_le,
        });
        Ok(())
    }
}

// ─── Side effects ────────────────────────────────────────────────────

/// Hands out deterministic handles instead of rendering anything.
#[derive(Debug, Clone, Default)]
pub struct PdfGenerationInMemory {
    generes: Partage<Vec<(PropositionIdentity, TypeCertificat)>>,
}

impl PdfGenerationInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generes(&self) -> Vec<(PropositionIdentity, TypeCertificat)> {
        self.generes.read().clone()
    }
}

impl PdfGeneration for PdfGenerationInMemory {
    fn generer_certificat(
        &self,
        proposition: &Proposition,
        certificat: TypeCertificat,
    ) -> Result<String, PortError> {
        let mut generes = self.generes.write();
        generes.push((proposition.entity_id().clone(), certificat));
        Ok(format!(
            "{}-{}-{}",
            certificat.name().to_lowercase(),
            proposition.entity_id(),
            generes.len()
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationInMemory {
    envoyees: Partage<Vec<(PropositionIdentity, Evenement)>>,
}

impl NotificationInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn envoyees(&self) -> Vec<(PropositionIdentity, Evenement)> {
        self.envoyees.read().clone()
    }
}

impl Notification for NotificationInMemory {
    fn notifier(&self, proposition: &Proposition, evenement: Evenement) -> Result<(), PortError> {
        self.envoyees
            .write()
            .push((proposition.entity_id().clone(), evenement));
        Ok(())
    }
}

/// One audit-trail entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub entity_id: PropositionIdentity,
    pub evenement: Evenement,
    pub auteur: String,
    /// Proposition status right after the event.
    pub statut: ChoixStatutPropositionDoctorale,
}

#[derive(Debug, Clone, Default)]
pub struct HistoriqueInMemory {
    entrees: Partage<Vec<EntreeHistorique>>,
}

impl HistoriqueInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of one proposition, oldest first.
    pub fn entrees(&self, entity_id: &PropositionIdentity) -> Vec<EntreeHistorique> {
        self.entrees
            .read()
            .iter()
            .filter(|e| &e.entity_id == entity_id)
            .cloned()
            .collect()
    }
}

impl Historique for HistoriqueInMemory {
    fn historiser(
        &self,
        proposition: &Proposition,
        evenement: Evenement,
        auteur: &str,
    ) -> Result<(), PortError> {
        self.entrees.write().push(EntreeHistorique {
            entity_id: proposition.entity_id().clone(),
            evenement,
            auteur: auteur.to_string(),
            statut: proposition.statut(),
        });
        Ok(())
    }
}

// ─── Bundle ──────────────────────────────────────────────────────────

/// One of each in-memory collaborator.
#[derive(Debug, Clone, Default)]
pub struct EnvironnementInMemory {
    pub propositions: PropositionInMemoryRepository,
    pub doctorats: DoctoratInMemoryTranslator,
    pub profil_candidat: ProfilCandidatInMemoryTranslator,
    pub annees_academiques: AnneeAcademiqueInMemoryRepository,
    pub titres_acces: TitreAccesSelectionnableInMemoryRepository,
    pub emplacements_documents: EmplacementsDocumentsInMemoryTranslator,
    pub pdf: PdfGenerationInMemory,
    pub notification: NotificationInMemory,
    pub historique: HistoriqueInMemory,
}

impl EnvironnementInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collaborateurs(&self) -> Collaborateurs<'_> {
        self.avec_propositions(&self.propositions)
    }

    /// Every in-memory collaborator, but propositions stored elsewhere.
    pub fn avec_propositions<'a>(
        &'a self,
        propositions: &'a dyn PropositionRepository,
    ) -> Collaborateurs<'a> {
        Collaborateurs {
            propositions,
            doctorats: &self.doctorats,
            profil_candidat: &self.profil_candidat,
            annees_academiques: &self.annees_academiques,
            titres_acces: &self.titres_acces,
            emplacements_documents: &self.emplacements_documents,
            pdf: &self.pdf,
            notification: &self.notification,
            historique: &self.historique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposition::fixtures::*;
    use crate::valeurs::TypeTitreAccesSelectionnable;

    // ── Propositions ────────────────────────────────────────────────

    #[test]
    fn test_repository_clones_share_storage() {
        let repository = PropositionInMemoryRepository::new();
        let clone = repository.clone();
        let p = make_proposition();
        repository.save(&p).unwrap();

        assert_eq!(clone.get(p.entity_id()).unwrap(), Some(p));
        assert_eq!(clone.prochaine_reference().unwrap(), 2);
    }

    #[test]
    fn test_repository_search_by_candidate() {
        let repository = PropositionInMemoryRepository::new();
        repository.save(&make_proposition()).unwrap();
        assert_eq!(repository.search(Some(MATRICULE)).unwrap().len(), 1);
        assert!(repository.search(Some("someone-else")).unwrap().is_empty());
        assert_eq!(
            repository
                .get(&PropositionIdentity::from_string("unknown"))
                .unwrap(),
            None
        );
    }

    // ── Collaborators ───────────────────────────────────────────────

    #[test]
    fn test_curriculum_check_reports_every_gap() {
        let profil = ProfilCandidatInMemoryTranslator::new();
        assert!(profil.verifier_curriculum(MATRICULE, 2024, None).is_ok());

        profil.signaler_curriculum_incomplet(
            MATRICULE,
            vec![
                PropositionError::FichierCurriculumNonRenseigne,
                PropositionError::AnneesCurriculumNonSpecifiees {
                    debut: "09/2020".into(),
                    fin: "06/2021".into(),
                },
            ],
        );
        let err = profil.verifier_curriculum(MATRICULE, 2024, None).unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_academic_year_lookup_by_date() {
        let annees = AnneeAcademiqueInMemoryRepository::entre(2022, 2024);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(annees.annee_contenant(date).map(|a| a.annee), Some(2023));
        assert_eq!(annees.get(2025), None);
    }

    #[test]
    fn test_selected_titles_filter() {
        let titres = TitreAccesSelectionnableInMemoryRepository::new();
        let entity_id = PropositionIdentity::from_string("uuid-proposition");
        let titre = |uuid: &str, selectionne| TitreAccesSelectionnable {
            uuid_experience: uuid.into(),
            type_titre: TypeTitreAccesSelectionnable::ExperiencesAcademiques,
            annee: Some(2020),
            selectionne,
        };
        titres.definir(&entity_id, vec![titre("a", true), titre("b", false)]);

        assert_eq!(titres.search_by_proposition(&entity_id, false).len(), 2);
        assert_eq!(titres.search_by_proposition(&entity_id, true).len(), 1);
    }

    #[test]
    fn test_document_request_marks_placements() {
        let documents = EmplacementsDocumentsInMemoryTranslator::new();
        let entity_id = PropositionIdentity::from_string("uuid-proposition");
        documents.definir(
            &entity_id,
            vec![EmplacementDocument {
                identifiant: "ID1".into(),
                statut: StatutEmplacementDocument::AReclamer,
                statut_reclamation: None,
                justification_gestionnaire: String::new(),
            }],
        );
        let echeance = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        documents
            .reclamer(&entity_id, &["ID1".into()], GESTIONNAIRE, echeance)
            .unwrap();

        assert_eq!(
            documents.recuperer_emplacements(&entity_id)[0].statut,
            StatutEmplacementDocument::Reclame
        );
        assert_eq!(documents.reclamations()[0].a_echeance_le, echeance);
    }

    #[test]
    fn test_side_effects_are_recorded() {
        let p = make_proposition_soumise();
        let pdf = PdfGenerationInMemory::new();
        let handle = pdf
            .generer_certificat(&p, TypeCertificat::ApprobationSic)
            .unwrap();
        assert!(handle.starts_with("approbation_sic-uuid-proposition"));

        let historique = HistoriqueInMemory::new();
        historique
            .historiser(&p, Evenement::Soumise, MATRICULE)
            .unwrap();
        let entrees = historique.entrees(p.entity_id());
        assert_eq!(entrees.len(), 1);
        assert_eq!(entrees[0].statut, ChoixStatutPropositionDoctorale::Confirmee);
    }
}
