//! Enumerations whose names appear inside checklist `extra` maps.

osis_core::choix_enum! {
    /// Discriminator of a blocking CDD decision.
    pub enum DecisionCdd {
        /// Sent back to SIC, outside of any decision.
        HorsDecision => "HORS_DECISION",
        /// The CDD closed the file.
        Cloture => "CLOTURE",
        /// The CDD refused.
        EnDecision => "EN_DECISION",
    }
}

osis_core::choix_enum! {
    /// Authentication progress of one curriculum experience.
    pub enum EtatAuthentificationParcours {
        /// No authentication requested.
        NonConcerne => "NON_CONCERNE",
        /// The issuing institution was contacted.
        EtablissementContacte => "ETABLISSEMENT_CONTACTE",
        /// Authentication was requested.
        AuthentificationDemandee => "AUTHENTIFICATION_DEMANDEE",
        /// The document was authenticated.
        Vrai => "VRAI",
        /// The document failed authentication.
        Faux => "FAUX",
    }
}

impl EtatAuthentificationParcours {
    /// Display label.
    pub fn libelle(&self) -> &'static str {
        match self {
            Self::NonConcerne => "Not concerned",
            Self::EtablissementContacte => "Institution contacted",
            Self::AuthentificationDemandee => "Authentication requested",
            Self::Vrai => "Authentic",
            Self::Faux => "Fraudulent",
        }
    }
}

osis_core::choix_enum! {
    /// State of the faculty dispensation for non-financeable candidates.
    pub enum DerogationFinancement {
        /// No dispensation needed.
        NonConcerne => "NON_CONCERNE",
        /// The candidate was notified of the need for a dispensation.
        CandidatNotifie => "CANDIDAT_NOTIFIE",
        /// The candidate gave up.
        AbandonDuCandidat => "ABANDON_DU_CANDIDAT",
        /// The faculty refused the dispensation.
        RefusDeDerogationFacultaire => "REFUS_DE_DEROGATION_FACULTAIRE",
        /// The faculty granted the dispensation.
        AccordDeDerogationFacultaire => "ACCORD_DE_DEROGATION_FACULTAIRE",
    }
}

impl DerogationFinancement {
    /// Display label.
    pub fn libelle(&self) -> &'static str {
        match self {
            Self::NonConcerne => "Not concerned",
            Self::CandidatNotifie => "Candidate notified",
            Self::AbandonDuCandidat => "Abandon of the candidate",
            Self::RefusDeDerogationFacultaire => "Faculty dispensation refusal",
            Self::AccordDeDerogationFacultaire => "Faculty dispensation approval",
        }
    }
}

osis_core::choix_enum! {
    /// Management approval of an enrolment dispensation.
    pub enum BesoinDeDerogation {
        /// No dispensation needed.
        NonConcerne => "NON_CONCERNE",
        /// Management opinion requested.
        AvisDirectionDemande => "AVIS_DIRECTION_DEMANDE",
        /// Management approved.
        AccordDirection => "ACCORD_DIRECTION",
        /// Management refused.
        RefusDirection => "REFUS_DIRECTION",
    }
}

impl BesoinDeDerogation {
    /// Display label.
    pub fn libelle(&self) -> &'static str {
        match self {
            Self::NonConcerne => "Not concerned",
            Self::AvisDirectionDemande => "Management opinion requested",
            Self::AccordDirection => "Management approval",
            Self::RefusDirection => "Management refusal",
        }
    }
}
