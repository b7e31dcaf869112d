//! Document requests: a manager asks the candidate for missing
//! documents, then the candidate returns them. Also records the storage
//! handles of generated decision certificates.

use chrono::NaiveDate;

use crate::enums::{ChoixStatutPropositionDoctorale, TypeCertificat, TypeGestionnaire};

use super::Proposition;

use ChoixStatutPropositionDoctorale as S;

impl Proposition {
    /// Put the proposition on hold until the candidate sends documents.
    pub fn reclamer_documents(
        &mut self,
        auteur: &str,
        type_gestionnaire: TypeGestionnaire,
        a_echeance_le: NaiveDate,
    ) {
        self.statut = match type_gestionnaire {
            TypeGestionnaire::Fac => S::ACompleterPourFac,
            TypeGestionnaire::Sic => S::ACompleterPourSic,
        };
        self.echeance_demande_documents = Some(a_echeance_le);
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// Withdraw a request and give the file back to the manager. Only a
    /// proposition waiting for, or just given, documents is affected.
    pub fn annuler_reclamation_documents(&mut self, auteur: &str, type_gestionnaire: TypeGestionnaire) {
        if !matches!(
            self.statut,
            S::ACompleterPourFac | S::ACompleterPourSic | S::CompleteePourFac | S::CompleteePourSic
        ) {
            return;
        }
        self.statut = match type_gestionnaire {
            TypeGestionnaire::Fac => S::TraitementFac,
            TypeGestionnaire::Sic => S::Confirmee,
        };
        self.echeance_demande_documents = None;
        self.auteur_derniere_modification = auteur.to_string();
    }

    /// The candidate returned the requested documents. Outside a pending
    /// request the status is kept.
    pub fn completer_documents_par_candidat(&mut self) {
        self.statut = match self.statut {
            S::ACompleterPourFac => S::CompleteePourFac,
            S::ACompleterPourSic => S::CompleteePourSic,
            autre => autre,
        };
        self.auteur_derniere_modification = self.matricule_candidat.clone();
    }

    /// Attach a rendered certificate. The handle replaces any previous
    /// certificate of the same kind.
    pub fn enregistrer_certificat(&mut self, certificat: TypeCertificat, handle: String) {
        let cible = match certificat {
            TypeCertificat::ApprobationCdd => &mut self.certificat_approbation_cdd,
            TypeCertificat::RefusCdd => &mut self.certificat_refus_cdd,
            TypeCertificat::ApprobationSic => &mut self.certificat_approbation_sic,
            TypeCertificat::ApprobationSicAnnexe => &mut self.certificat_approbation_sic_annexe,
            TypeCertificat::RefusSic => &mut self.certificat_refus_sic,
        };
        *cible = vec![handle];
    }

    pub fn certificat(&self, certificat: TypeCertificat) -> &[String] {
        match certificat {
            TypeCertificat::ApprobationCdd => &self.certificat_approbation_cdd,
            TypeCertificat::RefusCdd => &self.certificat_refus_cdd,
            TypeCertificat::ApprobationSic => &self.certificat_approbation_sic,
            TypeCertificat::ApprobationSicAnnexe => &self.certificat_approbation_sic_annexe,
            TypeCertificat::RefusSic => &self.certificat_refus_sic,
        }
    }
}
