//! Accounting rules: debt certificate, Belgian student status,
//! memberships, and the refund bank account.

use osis_validation::BusinessValidator;

use crate::enums::ChoixTypeCompteBancaire;
use crate::exceptions::PropositionError;
use crate::valeurs::Comptabilite;

fn renseigne(valeur: &Option<String>) -> bool {
    valeur.as_deref().map_or(false, |v| !v.trim().is_empty())
}

/// A candidate who recently attended a French-speaking Community
/// institution must provide a certificate of no debt.
pub struct ShouldAbsenceDeDetteEtreCompletee<'a> {
    pub attestation_absence_dette_etablissement: &'a [String],
    pub a_frequente_recemment_etablissement_communaute_fr: Option<bool>,
}

impl BusinessValidator<PropositionError> for ShouldAbsenceDeDetteEtreCompletee<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.a_frequente_recemment_etablissement_communaute_fr == Some(true)
            && self.attestation_absence_dette_etablissement.is_empty()
        {
            return Err(PropositionError::AbsenceDeDetteNonCompletee);
        }
        Ok(())
    }
}

/// A non-EU candidate must state an assimilation situation and provide
/// everything that situation requires.
pub struct ShouldAssimilationEtreCompletee<'a> {
    pub pays_nationalite_ue: Option<bool>,
    pub comptabilite: &'a Comptabilite,
}

impl BusinessValidator<PropositionError> for ShouldAssimilationEtreCompletee<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.pays_nationalite_ue != Some(false) {
            return Ok(());
        }
        let complete = self.comptabilite.type_situation_assimilation.is_some()
            && self
                .comptabilite
                .champs_assimilation_requis()
                .iter()
                .all(|champ| champ.rempli);
        if complete {
            Ok(())
        } else {
            Err(PropositionError::AssimilationNonCompletee)
        }
    }
}

pub struct ShouldAffiliationsEtreCompletees {
    pub etudiant_solidaire: Option<bool>,
}

impl BusinessValidator<PropositionError> for ShouldAffiliationsEtreCompletees {
    fn validate(&self) -> Result<(), PropositionError> {
        match self.etudiant_solidaire {
            Some(_) => Ok(()),
            None => Err(PropositionError::AffiliationsNonCompletees),
        }
    }
}

// ─── Refund bank account ─────────────────────────────────────────────

pub struct ShouldTypeCompteBancaireRemboursementEtreComplete {
    pub type_numero_compte: Option<ChoixTypeCompteBancaire>,
}

impl BusinessValidator<PropositionError> for ShouldTypeCompteBancaireRemboursementEtreComplete {
    fn validate(&self) -> Result<(), PropositionError> {
        match self.type_numero_compte {
            Some(_) => Ok(()),
            None => Err(PropositionError::TypeCompteBancaireRemboursementNonComplete),
        }
    }
}

pub struct ShouldIbanCarteBancaireRemboursementEtreCompletee<'a> {
    pub type_numero_compte: Option<ChoixTypeCompteBancaire>,
    pub numero_compte_iban: &'a Option<String>,
    pub prenom_titulaire_compte: &'a Option<String>,
    pub nom_titulaire_compte: &'a Option<String>,
}

impl BusinessValidator<PropositionError> for ShouldIbanCarteBancaireRemboursementEtreCompletee<'_> {
    fn validate(&self) -> Result<(), PropositionError> {
        if self.type_numero_compte == Some(ChoixTypeCompteBancaire::Iban)
            && !(renseigne(self.numero_compte_iban)
                && renseigne(self.prenom_titulaire_compte)
                && renseigne(self.nom_titulaire_compte))
        {
            return Err(PropositionError::CarteBancaireRemboursementIbanNonComplete);
        }
        Ok(())
    }
}

pub struct ShouldAutreFormatCarteBancaireRemboursementEtreCompletee<'a> {
    pub type_numero_compte: Option<ChoixTypeCompteBancaire>,
    pub numero_compte_autre_format: &'a Option<String>,
    pub code_bic_swift_banque: &'a Option<String>,
    pub prenom_titulaire_compte: &'a Option<String>,
    pub nom_titulaire_compte: &'a Option<String>,
}

impl BusinessValidator<PropositionError>
    for ShouldAutreFormatCarteBancaireRemboursementEtreCompletee<'_>
{
    fn validate(&self) -> Result<(), PropositionError> {
        if self.type_numero_compte == Some(ChoixTypeCompteBancaire::AutreFormat)
            && !(renseigne(self.numero_compte_autre_format)
                && renseigne(self.code_bic_swift_banque)
                && renseigne(self.prenom_titulaire_compte)
                && renseigne(self.nom_titulaire_compte))
        {
            return Err(PropositionError::CarteBancaireRemboursementAutreFormatNonComplete);
        }
        Ok(())
    }
}
