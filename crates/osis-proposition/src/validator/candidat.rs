//! Rules on the data the candidate fills in: admission type, proximity
//! commission, funding, prior research, project, and signature state.

use osis_validation::BusinessValidator;

use crate::enums::{
    ChoixCommissionProximiteCDEouCLSM, ChoixCommissionProximiteCDSS, ChoixDoctoratDejaRealise,
    ChoixSousDomaineSciences, ChoixStatutPropositionDoctorale, ChoixTypeAdmission,
    ChoixTypeFinancement,
};
use crate::exceptions::PropositionError;
use crate::valeurs::{DetailProjet, Doctorat, Financement};

/// Programme whose commission is a sciences sub-domain.
pub const SIGLE_SCIENCES: &str = "SC3DP";

const ENTITES_CDE_OU_CLSM: &[&str] = &["CDE", "CLSM"];
const ENTITE_CDSS: &str = "CDSS";

// ─── Admission type ──────────────────────────────────────────────────

pub struct ShouldJustificationDonneeSiPreadmission<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub justification: Option<&'a str>,
}

impl BusinessValidator<PropositionError> for ShouldJustificationDonneeSiPreadmission<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        let vide = self.justification.map_or(true, |j| j.trim().is_empty());
        if self.type_admission == ChoixTypeAdmission::PreAdmission && vide {
            return Err(PropositionError::JustificationRequise);
        }
        Ok(())
    }
}

// ─── Proximity commission ────────────────────────────────────────────

/// The commission must come from the set matching the doctorate's
/// managing committee, and be empty for any other committee.
pub struct ShouldCommissionProximiteEtreValide<'a> {
    pub doctorat: &'a Doctorat,
    pub commission_proximite: Option<&'a str>,
}

impl BusinessValidator<PropositionError> for ShouldCommissionProximiteEtreValide<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        let commission = self.commission_proximite.filter(|c| !c.is_empty());
        let entite = self.doctorat.sigle_entite_gestion.as_str();

        let valide = if ENTITES_CDE_OU_CLSM.contains(&entite) {
            commission.and_then(ChoixCommissionProximiteCDEouCLSM::from_name).is_some()
        } else if entite == ENTITE_CDSS {
            commission.and_then(ChoixCommissionProximiteCDSS::from_name).is_some()
        } else if self.doctorat.sigle() == SIGLE_SCIENCES {
            commission.and_then(ChoixSousDomaineSciences::from_name).is_some()
        } else {
            commission.is_none()
        };

        if valide {
            Ok(())
        } else {
            Err(PropositionError::CommissionProximiteInconsistant)
        }
    }
}

// ─── Funding ─────────────────────────────────────────────────────────

pub struct ShouldTypeContratTravailDependreTypeFinancement<'a> {
    pub type_financement: Option<ChoixTypeFinancement>,
    pub type_contrat_travail: &'a str,
}

impl BusinessValidator<PropositionError> for ShouldTypeContratTravailDependreTypeFinancement<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.type_financement == Some(ChoixTypeFinancement::WorkContract)
            && self.type_contrat_travail.trim().is_empty()
        {
            return Err(PropositionError::ContratTravailInconsistant);
        }
        Ok(())
    }
}

// ─── Prior research ──────────────────────────────────────────────────

pub struct ShouldInstitutionDependreDoctoratRealise<'a> {
    pub doctorat_deja_realise: ChoixDoctoratDejaRealise,
    pub institution: &'a str,
}

impl BusinessValidator<PropositionError> for ShouldInstitutionDependreDoctoratRealise<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.doctorat_deja_realise != ChoixDoctoratDejaRealise::No
            && self.institution.trim().is_empty()
        {
            return Err(PropositionError::InstitutionInconsistante);
        }
        Ok(())
    }
}

pub struct ShouldDomaineDependreDoctoratRealise<'a> {
    pub doctorat_deja_realise: ChoixDoctoratDejaRealise,
    pub domaine_these: &'a str,
}

impl BusinessValidator<PropositionError> for ShouldDomaineDependreDoctoratRealise<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.doctorat_deja_realise != ChoixDoctoratDejaRealise::No
            && self.domaine_these.trim().is_empty()
        {
            return Err(PropositionError::DomaineTheseInconsistant);
        }
        Ok(())
    }
}

// ─── Project ─────────────────────────────────────────────────────────

/// The project must be complete enough to be sent for signatures.
///
/// Any proposition needs a thesis language and a funding type. A full
/// admission also needs a title, an abstract, the project documents and
/// the doctoral programme proposal. A project declared as already
/// started needs the institution and the start date.
pub struct ShouldProjetEtreComplet<'a> {
    pub type_admission: ChoixTypeAdmission,
    pub projet: &'a DetailProjet,
    pub financement: &'a Financement,
}

impl BusinessValidator<PropositionError> for ShouldProjetEtreComplet<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        let projet = self.projet;
        let mut complet =
            !projet.langue_redaction_these.is_empty() && self.financement.type_financement.is_some();

        if self.type_admission == ChoixTypeAdmission::Admission {
            complet = complet
                && !projet.titre.trim().is_empty()
                && !projet.resume.trim().is_empty()
                && !projet.documents.is_empty()
                && !projet.proposition_programme_doctoral.is_empty();
        }

        if projet.deja_commence == Some(true) {
            complet = complet
                && !projet.deja_commence_institution.trim().is_empty()
                && projet.date_debut.is_some();
        }

        if complet {
            Ok(())
        } else {
            Err(PropositionError::DetailProjetNonComplete)
        }
    }
}

// ─── Signatures ──────────────────────────────────────────────────────

pub struct ShouldPropositionEtreEnAttenteDeSignature {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldPropositionEtreEnAttenteDeSignature {
    fn validate(&self) -> Result<(), PropositionError> {
        match self.statut {
            ChoixStatutPropositionDoctorale::EnAttenteDeSignature
            | ChoixStatutPropositionDoctorale::CaEnAttenteDeSignature => Ok(()),
            _ => Err(PropositionError::PropositionNonEnAttenteDeSignature),
        }
    }
}

// ─── Submission ──────────────────────────────────────────────────────

pub struct ShouldPropositionEtreSoumettable {
    pub statut: ChoixStatutPropositionDoctorale,
}

impl BusinessValidator<PropositionError> for ShouldPropositionEtreSoumettable {
    fn validate(&self) -> Result<(), PropositionError> {
        if !self.statut.est_dans(ChoixStatutPropositionDoctorale::SOUMETTABLE) {
            return Err(PropositionError::PropositionDejaSoumise);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osis_core::FormationIdentity;

    fn make_doctorat(sigle: &str, entite: &str) -> Doctorat {
        Doctorat::new(FormationIdentity::new(sigle, 2024), "Doctorate", entite)
    }

    fn commission(doctorat: &Doctorat, valeur: Option<&str>) -> Result<(), PropositionError> {
        ShouldCommissionProximiteEtreValide {
            doctorat,
            commission_proximite: valeur,
        }
        .validate()
    }

    // ── Admission type ──────────────────────────────────────────────

    #[test]
    fn test_pre_admission_requires_justification() {
        let v = ShouldJustificationDonneeSiPreadmission {
            type_admission: ChoixTypeAdmission::PreAdmission,
            justification: Some("  "),
        };
        assert_eq!(v.validate(), Err(PropositionError::JustificationRequise));

        let v = ShouldJustificationDonneeSiPreadmission {
            type_admission: ChoixTypeAdmission::Admission,
            justification: None,
        };
        assert!(v.validate().is_ok());
    }

    // ── Proximity commission ────────────────────────────────────────

    #[test]
    fn test_commission_follows_managing_entity() {
        let cde = make_doctorat("ECGE3DP", "CDE");
        assert!(commission(&cde, Some("ECONOMY")).is_ok());
        assert!(commission(&cde, Some("NEUR")).is_err());
        assert!(commission(&cde, None).is_err());

        let cdss = make_doctorat("MED3DP", "CDSS");
        assert!(commission(&cdss, Some("NEUR")).is_ok());
        assert!(commission(&cdss, Some("ECONOMY")).is_err());

        let sciences = make_doctorat(SIGLE_SCIENCES, "CDSC");
        assert!(commission(&sciences, Some("PHYSICS")).is_ok());
        assert!(commission(&sciences, Some("")).is_err());
    }

    #[test]
    fn test_commission_must_be_empty_elsewhere() {
        let autre = make_doctorat("FIAL3DP", "CDLETTRES");
        assert!(commission(&autre, None).is_ok());
        assert!(commission(&autre, Some("")).is_ok());
        assert_eq!(
            commission(&autre, Some("ECONOMY")),
            Err(PropositionError::CommissionProximiteInconsistant)
        );
    }

    // ── Funding and prior research ──────────────────────────────────

    #[test]
    fn test_work_contract_needs_contract_type() {
        let v = ShouldTypeContratTravailDependreTypeFinancement {
            type_financement: Some(ChoixTypeFinancement::WorkContract),
            type_contrat_travail: "",
        };
        assert_eq!(v.validate(), Err(PropositionError::ContratTravailInconsistant));

        let v = ShouldTypeContratTravailDependreTypeFinancement {
            type_financement: Some(ChoixTypeFinancement::SelfFunding),
            type_contrat_travail: "",
        };
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_prior_doctorate_needs_institution_and_field() {
        let institution = ShouldInstitutionDependreDoctoratRealise {
            doctorat_deja_realise: ChoixDoctoratDejaRealise::Partial,
            institution: "",
        };
        assert_eq!(institution.validate(), Err(PropositionError::InstitutionInconsistante));

        let domaine = ShouldDomaineDependreDoctoratRealise {
            doctorat_deja_realise: ChoixDoctoratDejaRealise::No,
            domaine_these: "",
        };
        assert!(domaine.validate().is_ok());
    }

    // ── Project ─────────────────────────────────────────────────────

    #[test]
    fn test_project_completeness_depends_on_admission_type() {
        let projet = DetailProjet {
            langue_redaction_these: "FR".into(),
            ..DetailProjet::default()
        };
        let financement = Financement {
            type_financement: Some(ChoixTypeFinancement::SelfFunding),
            ..Financement::default()
        };

        let pre_admission = ShouldProjetEtreComplet {
            type_admission: ChoixTypeAdmission::PreAdmission,
            projet: &projet,
            financement: &financement,
        };
        assert!(pre_admission.validate().is_ok());

        let admission = ShouldProjetEtreComplet {
            type_admission: ChoixTypeAdmission::Admission,
            projet: &projet,
            financement: &financement,
        };
        assert_eq!(admission.validate(), Err(PropositionError::DetailProjetNonComplete));
    }

    #[test]
    fn test_started_project_needs_start_date() {
        let projet = DetailProjet {
            langue_redaction_these: "EN".into(),
            deja_commence: Some(true),
            deja_commence_institution: "ULB".into(),
            ..DetailProjet::default()
        };
        let financement = Financement {
            type_financement: Some(ChoixTypeFinancement::SearchScholarship),
            ..Financement::default()
        };
        let v = ShouldProjetEtreComplet {
            type_admission: ChoixTypeAdmission::PreAdmission,
            projet: &projet,
            financement: &financement,
        };
        assert!(v.validate().is_err());
    }

    // ── Signatures ──────────────────────────────────────────────────

    #[test]
    fn test_signature_states() {
        use ChoixStatutPropositionDoctorale as S;
        for statut in S::ALL {
            let attendu = matches!(statut, S::EnAttenteDeSignature | S::CaEnAttenteDeSignature);
            let v = ShouldPropositionEtreEnAttenteDeSignature { statut: *statut };
            assert_eq!(v.validate().is_ok(), attendu, "{statut}");
        }
    }

    #[test]
    fn test_only_draft_and_signature_states_are_submittable() {
        use ChoixStatutPropositionDoctorale as S;
        for statut in S::ALL {
            let attendu = matches!(
                statut,
                S::EnBrouillon | S::EnAttenteDeSignature | S::CaACompleter | S::CaEnAttenteDeSignature
            );
            let v = ShouldPropositionEtreSoumettable { statut: *statut };
            assert_eq!(v.validate().is_ok(), attendu, "{statut}");
        }
    }
}
