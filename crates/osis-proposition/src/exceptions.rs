//! # Business Exceptions
//!
//! Every rule violation the proposition aggregate can report. Each
//! variant has a stable [`status_code`](BusinessException::status_code)
//! that outer layers map to protocol-level errors, and an English
//! message through `Display`.
//!
//! ## Taxonomy
//!
//! - **Rule violations** are collected by validator lists and surface as
//!   [`TransitionError::Validation`].
//! - **Entity-not-found** errors stop an operation outright and surface
//!   singly as [`TransitionError::NonTrouve`].

use thiserror::Error;

use osis_validation::{BusinessException, MultipleBusinessExceptions, ValidationFailure};

/// A violated business rule, or a missing entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropositionError {
    // ── Not found ────────────────────────────────────────────────────
    #[error("No PhD found.")]
    DoctoratNonTrouve,

    #[error("Proposition not found.")]
    PropositionNonTrouvee,

    #[error("Experience not found.")]
    ExperienceNonTrouvee,

    // ── Candidate data ───────────────────────────────────────────────
    #[error("Proximity commission should be filled in only if the doctorate's entity is CDE, CLSM or CDSS")]
    CommissionProximiteInconsistant,

    #[error("Work contract should be set when funding type is set to work contract")]
    ContratTravailInconsistant,

    #[error("Institution should be set when PhD has been set to yes or partial")]
    InstitutionInconsistante,

    #[error("Thesis field should be set when PhD has been set to yes or partial")]
    DomaineTheseInconsistant,

    #[error("A justification is needed when creating a pre-admission.")]
    JustificationRequise,

    #[error("Mandatory fields are missing in the project details of the proposition.")]
    DetailProjetNonComplete,

    // ── Curriculum (reported by the profile service) ─────────────────
    #[error("Please provide a copy of your curriculum.")]
    FichierCurriculumNonRenseigne,

    /// A period of the last five years is not covered by any experience.
    #[error("From {debut} to {fin}")]
    AnneesCurriculumNonSpecifiees {
        /// First uncovered month (`MM/YYYY`).
        debut: String,
        /// Last uncovered month (`MM/YYYY`).
        fin: String,
    },

    /// An educational experience lacks mandatory data.
    #[error("The educational experience '{nom}' is not completed.")]
    ExperiencesAcademiquesNonCompletees {
        /// Experience identifier.
        reference: String,
        /// Experience display name.
        nom: String,
    },

    // ── Accounting ───────────────────────────────────────────────────
    #[error("Some fields are missing in the 'Absence of debt' block.")]
    AbsenceDeDetteNonCompletee,

    #[error("Some fields are missing in the 'Belgian student status' block.")]
    AssimilationNonCompletee,

    #[error("Some fields are missing in the 'Memberships' block.")]
    AffiliationsNonCompletees,

    #[error("Some fields related to the bank account number in IBAN format are missing.")]
    CarteBancaireRemboursementIbanNonComplete,

    #[error("Some fields related to the bank account are missing.")]
    CarteBancaireRemboursementAutreFormatNonComplete,

    #[error("You haven't answered to the question about your bank account.")]
    TypeCompteBancaireRemboursementNonComplete,

    // ── Signatures ───────────────────────────────────────────────────
    #[error("The proposition must be in the 'In the process of signing' status.")]
    PropositionNonEnAttenteDeSignature,

    #[error("The proposition has already been submitted.")]
    PropositionDejaSoumise,

    // ── Prior studies and access ─────────────────────────────────────
    #[error("You must choose a title of access among the previous experiences of the candidate.")]
    TitreAccesEtreSelectionne,

    #[error("You must choose an admission requirement.")]
    ConditionAccesEtreSelectionne,

    #[error("Please select in the previous experience, the diploma(s), or non-academic activity(ies) giving access to the chosen program.")]
    TitreAccesEtreSelectionnePourEnvoyerASic,

    #[error("The Previous experience must be in the \"Sufficient\" status in order to do this action.")]
    ParcoursAnterieurNonSuffisant,

    #[error("All experiences must be in the 'Validated' status or in the 'To complete after enrolment' status so that the previous experience can be changed to the 'Sufficient' status.")]
    StatutsChecklistExperiencesEtreValides,

    // ── Decisions ────────────────────────────────────────────────────
    #[error("The authorization can not be done while there is one or more documents to be requested immediately.")]
    DocumentAReclamerImmediat,

    #[error("If the answer to the additional courses question is no, there must be no additional LU and the communication relating to the additional courses must be completely empty.")]
    ComplementsFormationEtreVidesSiPasDeComplementsFormation,

    #[error("The proposition must be an admission.")]
    DemandeDoitEtreAdmission,

    #[error("The proposition must be an enrollment.")]
    DemandeDoitEtreInscription,

    #[error("The status of the checklist for the SIC decision must be \"To be processed\" or \"Dispensation needed\" (with management approval of the dispensation).")]
    EtatChecklistDecisionSicNonValidePourApprouverUneInscription,

    #[error("The status of the checklist for the financeability must be \"Not concerned\" or \"Financable\" or \"Dispensation granted\".")]
    EtatChecklistFinancabiliteNonValidePourApprouverDemande,

    #[error("The 'Approved' status requires the last 5 years to be justified in the previous experience.")]
    CurriculumNonCompletePourAcceptation,

    #[error("The proposition must be managed by SIC to realized this action.")]
    SituationPropositionNonSic,

    #[error("The proposition must be managed by the CDD to realized this action.")]
    SituationPropositionNonCdd,

    #[error("When refusing a proposition, the reason must be specified.")]
    MotifRefusNonSpecifie,

    #[error("It is not possible to go from the \"Closed\" status to this status.")]
    StatutChecklistDecisionCddDoitEtreDifferentCloture,

    #[error("The status of the checklist for the personal data must be \"Validated\".")]
    EtatChecklistDonneesPersonnellesNonValidePourApprouverDemande,

    #[error("Please complete the approval information: additional conditions and number of years of the programme.")]
    InformationsAcceptationNonSpecifiees,

    #[error("The person is in quarantine.")]
    EnQuarantaine,
}

impl BusinessException for PropositionError {
    fn status_code(&self) -> &'static str {
        use PropositionError::*;
        match self {
            DoctoratNonTrouve => "PROPOSITION-2",
            PropositionNonTrouvee => "PROPOSITION-3",
            CommissionProximiteInconsistant => "PROPOSITION-5",
            ContratTravailInconsistant => "PROPOSITION-6",
            InstitutionInconsistante => "PROPOSITION-7",
            DomaineTheseInconsistant => "PROPOSITION-8",
            JustificationRequise => "PROPOSITION-16",
            DetailProjetNonComplete => "PROPOSITION-17",
            FichierCurriculumNonRenseigne => "PROPOSITION-34",
            AnneesCurriculumNonSpecifiees { .. } => "PROPOSITION-35",
            ExperiencesAcademiquesNonCompletees { .. } => "PROPOSITION-49",
            TitreAccesEtreSelectionne => "PROPOSITION-53",
            ConditionAccesEtreSelectionne => "PROPOSITION-54",
            TitreAccesEtreSelectionnePourEnvoyerASic => "PROPOSITION-56",
            ParcoursAnterieurNonSuffisant => "PROPOSITION-57",
            DocumentAReclamerImmediat => "PROPOSITION-58",
            ComplementsFormationEtreVidesSiPasDeComplementsFormation => "PROPOSITION-60",
            DemandeDoitEtreAdmission => "PROPOSITION-61",
            DemandeDoitEtreInscription => "PROPOSITION-62",
            EtatChecklistDecisionSicNonValidePourApprouverUneInscription => "PROPOSITION-63",
            EtatChecklistFinancabiliteNonValidePourApprouverDemande => "PROPOSITION-64",
            CurriculumNonCompletePourAcceptation => "PROPOSITION-66",
            SituationPropositionNonSic => "PROPOSITION-67",
            SituationPropositionNonCdd => "PROPOSITION-68",
            StatutsChecklistExperiencesEtreValides => "PROPOSITION-69",
            MotifRefusNonSpecifie => "PROPOSITION-70",
            StatutChecklistDecisionCddDoitEtreDifferentCloture => "PROPOSITION-71",
            EtatChecklistDonneesPersonnellesNonValidePourApprouverDemande => "PROPOSITION-72",
            InformationsAcceptationNonSpecifiees => "PROPOSITION-76",
            PropositionDejaSoumise => "PROPOSITION-77",
            AbsenceDeDetteNonCompletee => "DOCTORAT-1",
            AssimilationNonCompletee => "DOCTORAT-3",
            AffiliationsNonCompletees => "DOCTORAT-4",
            CarteBancaireRemboursementIbanNonComplete => "DOCTORAT-5",
            CarteBancaireRemboursementAutreFormatNonComplete => "DOCTORAT-6",
            TypeCompteBancaireRemboursementNonComplete => "DOCTORAT-7",
            PropositionNonEnAttenteDeSignature => "DOCTORAT-8",
            ExperienceNonTrouvee => "ADMISSION-22",
            EnQuarantaine => "ADMISSION-23",
        }
    }
}

/// Why an aggregate method refused to run. The aggregate is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A validator list rejected the transition.
    #[error(transparent)]
    Validation(#[from] ValidationFailure<PropositionError>),

    /// A required entity does not exist.
    #[error("{0}")]
    NonTrouve(PropositionError),
}

impl TransitionError {
    /// Every reported exception, in order.
    pub fn exceptions(&self) -> Vec<&PropositionError> {
        match self {
            Self::Validation(failure) => failure.exceptions(),
            Self::NonTrouve(e) => vec![e],
        }
    }

    /// Status codes of every reported exception, in order.
    pub fn status_codes(&self) -> Vec<&'static str> {
        self.exceptions().iter().map(|e| e.status_code()).collect()
    }

    /// The first reported exception.
    pub fn first(&self) -> Option<&PropositionError> {
        self.exceptions().into_iter().next()
    }

    /// Whether `exception` is among the reported exceptions.
    pub fn contient(&self, exception: &PropositionError) -> bool {
        self.exceptions().contains(&exception)
    }
}

impl From<MultipleBusinessExceptions<PropositionError>> for TransitionError {
    fn from(all: MultipleBusinessExceptions<PropositionError>) -> Self {
        Self::Validation(ValidationFailure::Invariants(all))
    }
}
