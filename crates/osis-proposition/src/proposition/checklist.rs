//! Prior-studies review: tab and per-experience statuses, the legal
//! access condition, and foreign title equivalence.
//!
//! Experience children are found by identifier in two ways:
//! [`enfant_experience_ou_nouveau`](Proposition::enfant_experience_ou_nouveau)
//! creates a missing child, while
//! [`enfant_experience_existant`](Proposition::enfant_experience_existant)
//! reports `ExperienceNonTrouvee`.

use chrono::NaiveDate;

use osis_checklist::{
    configuration_experiences, configuration_onglet, nouvel_enfant_experience, ChoixStatutChecklist,
    ConfigurationOngletChecklist, ConfigurationStatutChecklist, EtatAuthentificationParcours,
    OngletChecklist, StatutChecklist, CLE_ETAT_AUTHENTIFICATION,
};

use crate::enums::{
    ConditionAcces, EtatEquivalenceTitreAcces, StatutEquivalenceTitreAcces,
    TypeEquivalenceTitreAcces,
};
use crate::exceptions::{PropositionError, TransitionError};
use crate::valeurs::TitreAccesSelectionnable;
use crate::validator::{
    ModifierStatutChecklistParcoursAnterieurValidatorList, SpecifierConditionAccesValidatorList,
};

use super::{valider, Proposition};

/// The first configured sub-state with this primary status.
fn statut_depuis_configuration(
    configuration: &ConfigurationOngletChecklist,
    statut: ChoixStatutChecklist,
) -> StatutChecklist {
    configuration
        .statuts
        .iter()
        .filter(|c| c.statut == Some(statut))
        .find_map(ConfigurationStatutChecklist::vers_statut)
        .unwrap_or_else(|| StatutChecklist::new(statut, ""))
}

impl Proposition {
    // ─── Experience children ─────────────────────────────────────────

    /// The child for `uuid_experience`, created untouched if missing.
    pub(crate) fn enfant_experience_ou_nouveau(&mut self, uuid_experience: &str) -> &mut StatutChecklist {
        let enfants = &mut self.checklist_actuelle.parcours_anterieur.enfants;
        let index = match enfants
            .iter()
            .position(|e| e.identifiant() == Some(uuid_experience))
        {
            Some(index) => index,
            None => {
                enfants.push(nouvel_enfant_experience(uuid_experience));
                enfants.len() - 1
            }
        };
        &mut enfants[index]
    }

    /// The child for `uuid_experience`, which must already exist.
    pub(crate) fn enfant_experience_existant(
        &mut self,
        uuid_experience: &str,
    ) -> Result<&mut StatutChecklist, TransitionError> {
        self.checklist_actuelle
            .recuperer_enfant_mut(OngletChecklist::ParcoursAnterieur, uuid_experience)
            .ok_or(TransitionError::NonTrouve(PropositionError::ExperienceNonTrouvee))
    }

    // ─── Prior studies tab ───────────────────────────────────────────

    /// Change the prior-studies verdict, keeping the experience children.
    pub fn modifier_statut_checklist_parcours_anterieur(
        &mut self,
        auteur: &str,
        statut: ChoixStatutChecklist,
        titres_acces_selectionnes: &[TitreAccesSelectionnable],
    ) -> Result<(), TransitionError> {
        valider(&ModifierStatutChecklistParcoursAnterieurValidatorList {
            statut,
            titres_acces_selectionnes,
            condition_acces: self.condition_acces,
            millesime_condition_acces: self.millesime_condition_acces,
            checklist_actuelle: &self.checklist_actuelle,
        })?;

        let configuration = configuration_onglet(OngletChecklist::ParcoursAnterieur);
        let mut parcours = statut_depuis_configuration(&configuration, statut);
        parcours.enfants = std::mem::take(&mut self.checklist_actuelle.parcours_anterieur.enfants);
        self.checklist_actuelle.parcours_anterieur = parcours;
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Set the review status of one experience, creating its child if the
    /// experience was added after submission.
    pub fn specifier_statut_checklist_experience_parcours_anterieur(
        &mut self,
        auteur: &str,
        uuid_experience: &str,
        statut: ChoixStatutChecklist,
        statut_authentification: Option<bool>,
    ) {
        let modele = statut_depuis_configuration(&configuration_experiences(), statut);
        let enfant = self.enfant_experience_ou_nouveau(uuid_experience);
        enfant.statut = modele.statut;
        enfant.libelle = modele.libelle;
        enfant.definir_authentification(statut_authentification);
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// Record where the authentication of one experience stands.
    pub fn specifier_authentification_experience_parcours_anterieur(
        &mut self,
        auteur: &str,
        uuid_experience: &str,
        etat_authentification: EtatAuthentificationParcours,
    ) -> Result<(), TransitionError> {
        let enfant = self.enfant_experience_existant(uuid_experience)?;
        enfant
            .extra
            .insert(CLE_ETAT_AUTHENTIFICATION.to_string(), etat_authentification.name().to_string());
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Replace one tab's status with whatever the manager chose.
    pub fn modifier_checklist_onglet_libre(
        &mut self,
        auteur: &str,
        onglet: OngletChecklist,
        statut: StatutChecklist,
    ) {
        *self.checklist_actuelle.onglet_mut(onglet) = statut;
        self.auteur_derniere_modification = auteur.to_string();
    }

    // ─── Access condition ────────────────────────────────────────────

    /// Set the legal access condition.
    ///
    /// When the condition changes and exactly one access title is
    /// selected, the title's year becomes the condition's year. The
    /// short-cycle condition always comes with training complements.
    /// Unknown condition names clear the condition.
    pub fn specifier_condition_acces(
        &mut self,
        auteur: &str,
        condition_acces: Option<&str>,
        millesime_condition_acces: Option<i32>,
        avec_complements_formation: Option<bool>,
        titres_selectionnes: &[TitreAccesSelectionnable],
    ) -> Result<(), TransitionError> {
        let condition_acces = condition_acces.and_then(ConditionAcces::from_name);

        let millesime_condition_acces = match titres_selectionnes {
            [titre] if condition_acces != self.condition_acces => titre.annee,
            _ => millesime_condition_acces,
        };
        let avec_complements_formation = if condition_acces == Some(ConditionAcces::SnuTypeCourt) {
            Some(true)
        } else {
            avec_complements_formation
        };

        valider(&SpecifierConditionAccesValidatorList {
            avec_complements_formation,
            complements_formation: &self.complements_formation,
            commentaire_complements_formation: &self.commentaire_complements_formation,
        })?;

        self.condition_acces = condition_acces;
        self.millesime_condition_acces = millesime_condition_acces;
        self.avec_complements_formation = avec_complements_formation;
        self.auteur_derniere_modification = auteur.to_string();
        Ok(())
    }

    /// Record the equivalence of a foreign access title. Unknown names
    /// clear the matching field.
    pub fn specifier_equivalence_titre_acces(
        &mut self,
        auteur: &str,
        type_equivalence_titre_acces: Option<&str>,
        statut_equivalence_titre_acces: Option<&str>,
        etat_equivalence_titre_acces: Option<&str>,
        date_prise_effet_equivalence_titre_acces: Option<NaiveDate>,
    ) {
        self.type_equivalence_titre_acces =
            type_equivalence_titre_acces.and_then(TypeEquivalenceTitreAcces::from_name);
        self.statut_equivalence_titre_acces =
            statut_equivalence_titre_acces.and_then(StatutEquivalenceTitreAcces::from_name);
        self.etat_equivalence_titre_acces =
            etat_equivalence_titre_acces.and_then(EtatEquivalenceTitreAcces::from_name);
        self.date_prise_effet_equivalence_titre_acces = date_prise_effet_equivalence_titre_acces;
        self.auteur_derniere_modification = auteur.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::valeurs::{ComplementFormationIdentity, TypeTitreAccesSelectionnable};
    use osis_checklist::{identifier, AUTHENTIFICATION_OUI, CLE_AUTHENTIFICATION};

    fn make_titre(annee: i32) -> TitreAccesSelectionnable {
        TitreAccesSelectionnable {
            uuid_experience: "exp-1".into(),
            type_titre: TypeTitreAccesSelectionnable::ExperiencesAcademiques,
            annee: Some(annee),
            selectionne: true,
        }
    }

    // ── Experience children ─────────────────────────────────────────

    #[test]
    fn test_experience_status_creates_missing_child() {
        let mut p = make_proposition_soumise();
        p.specifier_statut_checklist_experience_parcours_anterieur(
            GESTIONNAIRE,
            "X",
            ChoixStatutChecklist::GestReussite,
            Some(true),
        );

        let enfant = p
            .checklist_actuelle()
            .recuperer_enfant(OngletChecklist::ParcoursAnterieur, "X")
            .unwrap();
        assert_eq!(enfant.statut, ChoixStatutChecklist::GestReussite);
        assert_eq!(enfant.extra(CLE_AUTHENTIFICATION), Some(AUTHENTIFICATION_OUI));
        assert_eq!(p.checklist_actuelle().experiences().len(), 2);
    }

    #[test]
    fn test_experience_status_updates_existing_child_in_place() {
        let mut p = make_proposition_soumise();
        p.specifier_statut_checklist_experience_parcours_anterieur(
            GESTIONNAIRE,
            "exp-1",
            ChoixStatutChecklist::GestEnCours,
            Some(true),
        );
        p.specifier_statut_checklist_experience_parcours_anterieur(
            GESTIONNAIRE,
            "exp-1",
            ChoixStatutChecklist::GestReussite,
            None,
        );
        let experiences = p.checklist_actuelle().experiences();
        assert_eq!(experiences.len(), 1);
        assert_eq!(experiences[0].statut, ChoixStatutChecklist::GestReussite);
        assert_eq!(experiences[0].authentification(), None);
    }

    #[test]
    fn test_authentication_requires_existing_child() {
        let mut p = make_proposition_soumise();
        let avant = snapshot(&p);
        let err = p
            .specifier_authentification_experience_parcours_anterieur(
                GESTIONNAIRE,
                "X",
                EtatAuthentificationParcours::Vrai,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::NonTrouve(PropositionError::ExperienceNonTrouvee)
        ));
        assert_eq!(snapshot(&p), avant);

        p.specifier_authentification_experience_parcours_anterieur(
            GESTIONNAIRE,
            "exp-1",
            EtatAuthentificationParcours::EtablissementContacte,
        )
        .unwrap();
        assert_eq!(
            p.checklist_actuelle().experiences()[0].extra(CLE_ETAT_AUTHENTIFICATION),
            Some("ETABLISSEMENT_CONTACTE")
        );
    }

    // ── Prior studies tab ───────────────────────────────────────────

    #[test]
    fn test_sufficient_prior_studies_keeps_children() {
        let mut p = make_proposition_soumise();
        p.specifier_statut_checklist_experience_parcours_anterieur(
            GESTIONNAIRE,
            "exp-1",
            ChoixStatutChecklist::GestReussite,
            None,
        );
        p.specifier_condition_acces(GESTIONNAIRE, Some("MASTER"), Some(2021), None, &[])
            .unwrap();
        p.modifier_statut_checklist_parcours_anterieur(
            GESTIONNAIRE,
            ChoixStatutChecklist::GestReussite,
            &[make_titre(2021)],
        )
        .unwrap();

        let parcours = &p.checklist_actuelle().parcours_anterieur;
        assert_eq!(
            identifier(OngletChecklist::ParcoursAnterieur, parcours).as_deref(),
            Some("SUFFISANT")
        );
        assert_eq!(parcours.enfants.len(), 1);
    }

    #[test]
    fn test_sufficient_prior_studies_rejected_without_condition() {
        let mut p = make_proposition_soumise();
        let err = p
            .modifier_statut_checklist_parcours_anterieur(
                GESTIONNAIRE,
                ChoixStatutChecklist::GestReussite,
                &[make_titre(2021)],
            )
            .unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-54", "PROPOSITION-69"]);
    }

    #[test]
    fn test_free_tab_replacement() {
        let mut p = make_proposition_soumise();
        let statut = StatutChecklist::new(ChoixStatutChecklist::GestBlocage, "Fraudster")
            .avec_extra("fraud", "1");
        p.modifier_checklist_onglet_libre(GESTIONNAIRE, OngletChecklist::DonneesPersonnelles, statut.clone());
        assert_eq!(p.checklist_actuelle().donnees_personnelles, statut);
    }

    // ── Access condition ────────────────────────────────────────────

    #[test]
    fn test_short_cycle_forces_training_complements() {
        let mut p = make_proposition_soumise();
        p.specifier_condition_acces(GESTIONNAIRE, Some("SNU_TYPE_COURT"), None, Some(false), &[])
            .unwrap();
        assert_eq!(p.condition_acces(), Some(ConditionAcces::SnuTypeCourt));
        assert_eq!(p.avec_complements_formation(), Some(true));
    }

    #[test]
    fn test_single_title_year_becomes_millesime_on_change() {
        let mut p = make_proposition_soumise();
        p.specifier_condition_acces(GESTIONNAIRE, Some("MASTER"), Some(2010), None, &[make_titre(2019)])
            .unwrap();
        assert_eq!(p.millesime_condition_acces(), Some(2019));

        // Same condition: the caller's year is kept.
        p.specifier_condition_acces(GESTIONNAIRE, Some("MASTER"), Some(2010), None, &[make_titre(2019)])
            .unwrap();
        assert_eq!(p.millesime_condition_acces(), Some(2010));

        // Several titles: the caller's year is kept.
        p.specifier_condition_acces(
            GESTIONNAIRE,
            Some("BAC"),
            Some(2011),
            None,
            &[make_titre(2019), make_titre(2020)],
        )
        .unwrap();
        assert_eq!(p.millesime_condition_acces(), Some(2011));
    }

    #[test]
    fn test_condition_rejected_when_complements_remain() {
        let mut p = make_proposition_soumise();
        p.avec_complements_formation = Some(true);
        p.complements_formation = vec![ComplementFormationIdentity("LECGE1001".into())];
        let avant = snapshot(&p);

        let err = p
            .specifier_condition_acces(GESTIONNAIRE, Some("MASTER"), Some(2020), Some(false), &[])
            .unwrap_err();
        assert_eq!(err.status_codes(), vec!["PROPOSITION-60"]);
        assert_eq!(snapshot(&p), avant);
    }

    #[test]
    fn test_unknown_names_become_absent() {
        let mut p = make_proposition_soumise();
        p.specifier_condition_acces(GESTIONNAIRE, Some("NOT_A_CONDITION"), None, None, &[])
            .unwrap();
        assert_eq!(p.condition_acces(), None);

        p.specifier_equivalence_titre_acces(
            GESTIONNAIRE,
            Some("EQUIVALENCE_CESS"),
            Some("???"),
            Some("DEFINITIVE"),
            None,
        );
        assert_eq!(
            p.type_equivalence_titre_acces(),
            Some(TypeEquivalenceTitreAcces::EquivalenceCess)
        );
        assert_eq!(p.statut_equivalence_titre_acces(), None);
        assert_eq!(
            p.etat_equivalence_titre_acces(),
            Some(EtatEquivalenceTitreAcces::Definitive)
        );
    }
}
