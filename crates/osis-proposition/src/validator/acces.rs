//! Prior studies and access rules: access titles, admission requirement,
//! experience review states, and training complements.

use osis_checklist::{ChoixStatutChecklist, StatutChecklist};
use osis_validation::BusinessValidator;

use crate::enums::ConditionAcces;
use crate::exceptions::PropositionError;
use crate::valeurs::{ComplementFormationIdentity, TitreAccesSelectionnable};

/// Marking prior studies as sufficient requires a selected access title.
pub struct ShouldTitreAccesEtreSelectionne<'a> {
    pub statut: ChoixStatutChecklist,
    pub titres_acces_selectionnes: &'a [TitreAccesSelectionnable],
}

impl BusinessValidator<PropositionError> for ShouldTitreAccesEtreSelectionne<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.statut == ChoixStatutChecklist::GestReussite && self.titres_acces_selectionnes.is_empty()
        {
            return Err(PropositionError::TitreAccesEtreSelectionne);
        }
        Ok(())
    }
}

/// Marking prior studies as sufficient requires an admission requirement
/// and its year.
pub struct ShouldConditionAccesEtreSelectionne {
    pub statut: ChoixStatutChecklist,
    pub condition_acces: Option<ConditionAcces>,
    pub millesime_condition_acces: Option<i32>,
}

impl BusinessValidator<PropositionError> for ShouldConditionAccesEtreSelectionne {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.statut == ChoixStatutChecklist::GestReussite
            && (self.condition_acces.is_none() || self.millesime_condition_acces.is_none())
        {
            return Err(PropositionError::ConditionAccesEtreSelectionne);
        }
        Ok(())
    }
}

/// Marking prior studies as sufficient requires every experience to be
/// validated, or deferred until after enrolment.
pub struct ShouldStatutsChecklistExperiencesEtreValidees<'a> {
    pub statut: ChoixStatutChecklist,
    pub experiences: &'a [StatutChecklist],
}

impl BusinessValidator<PropositionError> for ShouldStatutsChecklistExperiencesEtreValidees<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        let toutes_valides = self.experiences.iter().all(|experience| {
            matches!(
                experience.statut,
                ChoixStatutChecklist::GestReussite | ChoixStatutChecklist::GestBlocageUlterieur
            )
        });
        if self.statut == ChoixStatutChecklist::GestReussite && !toutes_valides {
            return Err(PropositionError::StatutsChecklistExperiencesEtreValides);
        }
        Ok(())
    }
}

pub struct ShouldParcoursAnterieurEtreSuffisant<'a> {
    pub parcours_anterieur: &'a StatutChecklist,
}

impl BusinessValidator<PropositionError> for ShouldParcoursAnterieurEtreSuffisant<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.parcours_anterieur.statut != ChoixStatutChecklist::GestReussite {
            return Err(PropositionError::ParcoursAnterieurNonSuffisant);
        }
        Ok(())
    }
}

/// Without training complements there must be neither complements nor
/// a comment about them.
pub struct ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation<'a> {
    pub avec_complements_formation: Option<bool>,
    pub complements_formation: &'a [ComplementFormationIdentity],
    pub commentaire_complements_formation: &'a str,
}

impl BusinessValidator<PropositionError>
    for ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation<'_>
{
    fn validate(&self) -> Result<(), PropositionError> {
        if self.avec_complements_formation != Some(true)
            && (!self.complements_formation.is_empty()
                || !self.commentaire_complements_formation.is_empty())
        {
            return Err(PropositionError::ComplementsFormationEtreVidesSiPasDeComplementsFormation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valeurs::TypeTitreAccesSelectionnable;
    use osis_checklist::nouvel_enfant_experience;

    fn make_titre() -> TitreAccesSelectionnable {
        TitreAccesSelectionnable {
            uuid_experience: "exp-1".into(),
            type_titre: TypeTitreAccesSelectionnable::ExperiencesAcademiques,
            annee: Some(2020),
            selectionne: true,
        }
    }

    #[test]
    fn test_title_only_required_for_sufficient() {
        let v = ShouldTitreAccesEtreSelectionne {
            statut: ChoixStatutChecklist::GestBlocage,
            titres_acces_selectionnes: &[],
        };
        assert!(v.validate().is_ok());

        let v = ShouldTitreAccesEtreSelectionne {
            statut: ChoixStatutChecklist::GestReussite,
            titres_acces_selectionnes: &[],
        };
        assert_eq!(v.validate(), Err(PropositionError::TitreAccesEtreSelectionne));

        let titres = [make_titre()];
        let v = ShouldTitreAccesEtreSelectionne {
            statut: ChoixStatutChecklist::GestReussite,
            titres_acces_selectionnes: &titres,
        };
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_condition_requires_year() {
        let v = ShouldConditionAccesEtreSelectionne {
            statut: ChoixStatutChecklist::GestReussite,
            condition_acces: Some(ConditionAcces::Master),
            millesime_condition_acces: None,
        };
        assert_eq!(v.validate(), Err(PropositionError::ConditionAccesEtreSelectionne));
    }

    #[test]
    fn test_experiences_must_be_validated_or_deferred() {
        let mut valide = nouvel_enfant_experience("a");
        valide.statut = ChoixStatutChecklist::GestReussite;
        let mut differe = nouvel_enfant_experience("b");
        differe.statut = ChoixStatutChecklist::GestBlocageUlterieur;
        let a_traiter = nouvel_enfant_experience("c");

        let ok = [valide.clone(), differe];
        assert!(ShouldStatutsChecklistExperiencesEtreValidees {
            statut: ChoixStatutChecklist::GestReussite,
            experiences: &ok,
        }
        .validate()
        .is_ok());

        let ko = [valide, a_traiter];
        assert_eq!(
            ShouldStatutsChecklistExperiencesEtreValidees {
                statut: ChoixStatutChecklist::GestReussite,
                experiences: &ko,
            }
            .validate(),
            Err(PropositionError::StatutsChecklistExperiencesEtreValides)
        );
        assert!(ShouldStatutsChecklistExperiencesEtreValidees {
            statut: ChoixStatutChecklist::GestEnCours,
            experiences: &ko,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_complements_must_be_empty_without_complements() {
        let complements = [ComplementFormationIdentity("LSST1001".into())];
        let v = ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
            avec_complements_formation: Some(false),
            complements_formation: &complements,
            commentaire_complements_formation: "",
        };
        assert!(v.validate().is_err());

        let v = ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
            avec_complements_formation: None,
            complements_formation: &[],
            commentaire_complements_formation: "voir annexe",
        };
        assert!(v.validate().is_err());

        let v = ShouldComplementsFormationEtreVidesSiPasDeComplementsFormation {
            avec_complements_formation: Some(true),
            complements_formation: &complements,
            commentaire_complements_formation: "voir annexe",
        };
        assert!(v.validate().is_ok());
    }
}
