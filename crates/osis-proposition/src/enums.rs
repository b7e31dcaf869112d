//! # Doctoral Admission Enumerations
//!
//! Closed sets persisted by name. Unknown names resolve to `None` through
//! each enum's `from_name()`.
//!
//! ## Proposition Lifecycle
//!
//! ```text
//! EN_BROUILLON ──verrouiller──▶ EN_ATTENTE_DE_SIGNATURE ──soumettre──▶ CONFIRMEE
//!      ▲                               │                                │
//!      └──────redonner la main─────────┘                     envoyer à la CDD
//!                                                                       ▼
//!              RETOUR_DE_FAC ◀──approuver/refuser par CDD── TRAITEMENT_FAC
//!                    │
//!          approuver/refuser par SIC
//!                    ▼
//!   INSCRIPTION_AUTORISEE / INSCRIPTION_REFUSEE
//! ```

use osis_core::choix_enum;

pub use osis_checklist::{BesoinDeDerogation, DecisionCdd, DerogationFinancement, EtatAuthentificationParcours};

// ─── Proposition status ──────────────────────────────────────────────

choix_enum! {
    /// Status of a doctoral admission proposition.
    pub enum ChoixStatutPropositionDoctorale {
        /// Draft being filled in by the candidate.
        EnBrouillon => "EN_BROUILLON",
        /// Locked while the supervision group signs.
        EnAttenteDeSignature => "EN_ATTENTE_DE_SIGNATURE",
        /// Support committee to be completed.
        CaACompleter => "CA_A_COMPLETER",
        /// Locked while the support committee signs.
        CaEnAttenteDeSignature => "CA_EN_ATTENTE_DE_SIGNATURE",
        /// Submitted and confirmed; in the hands of SIC.
        Confirmee => "CONFIRMEE",
        /// Under faculty (CDD) review.
        TraitementFac => "TRAITEMENT_FAC",
        /// Documents requested by the faculty.
        ACompleterPourFac => "A_COMPLETER_POUR_FAC",
        /// Documents returned to the faculty.
        CompleteePourFac => "COMPLETEE_POUR_FAC",
        /// Back from the faculty with a decision.
        RetourDeFac => "RETOUR_DE_FAC",
        /// Documents requested by SIC.
        ACompleterPourSic => "A_COMPLETER_POUR_SIC",
        /// Documents returned to SIC.
        CompleteePourSic => "COMPLETEE_POUR_SIC",
        /// Waiting for management to validate a dispensation.
        AttenteValidationDirection => "ATTENTE_VALIDATION_DIRECTION",
        /// Cancelled (terminal).
        Annulee => "ANNULEE",
        /// Enrolment authorised (terminal).
        InscriptionAutorisee => "INSCRIPTION_AUTORISEE",
        /// Enrolment refused (terminal).
        InscriptionRefusee => "INSCRIPTION_REFUSEE",
    }
}

impl ChoixStatutPropositionDoctorale {
    /// Statuses from which the candidate may still submit: the draft and
    /// the signature stages.
    pub const SOUMETTABLE: &'static [Self] = &[
        Self::EnBrouillon,
        Self::EnAttenteDeSignature,
        Self::CaACompleter,
        Self::CaEnAttenteDeSignature,
    ];

    /// Statuses in which the faculty (CDD) handles the proposition.
    pub const SOUMISE_POUR_CDD: &'static [Self] = &[Self::TraitementFac, Self::CompleteePourFac];

    /// [`SOUMISE_POUR_CDD`](Self::SOUMISE_POUR_CDD) plus the
    /// documents-requested-by-faculty status.
    pub const SOUMISE_POUR_CDD_ETENDUS: &'static [Self] = &[
        Self::TraitementFac,
        Self::CompleteePourFac,
        Self::ACompleterPourFac,
    ];

    /// Statuses in which SIC handles the proposition.
    pub const SOUMISE_POUR_SIC: &'static [Self] = &[
        Self::Confirmee,
        Self::RetourDeFac,
        Self::CompleteePourSic,
        Self::AttenteValidationDirection,
    ];

    /// [`SOUMISE_POUR_SIC`](Self::SOUMISE_POUR_SIC) plus the
    /// documents-requested-by-SIC status.
    pub const SOUMISE_POUR_SIC_ETENDUS: &'static [Self] = &[
        Self::Confirmee,
        Self::RetourDeFac,
        Self::CompleteePourSic,
        Self::AttenteValidationDirection,
        Self::ACompleterPourSic,
    ];

    /// Statuses from which SIC may send the proposition to the CDD.
    pub const ENVOYABLE_EN_CDD_POUR_DECISION: &'static [Self] = &[
        Self::Confirmee,
        Self::RetourDeFac,
        Self::CompleteePourSic,
    ];

    /// Whether no transition leaves this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Annulee | Self::InscriptionAutorisee | Self::InscriptionRefusee
        )
    }

    /// Whether the status belongs to `groupe`.
    pub fn est_dans(&self, groupe: &[Self]) -> bool {
        groupe.contains(self)
    }
}

// ─── Admission request ───────────────────────────────────────────────

choix_enum! {
    /// Kind of admission requested.
    pub enum ChoixTypeAdmission {
        /// Full admission.
        Admission => "ADMISSION",
        /// Pre-admission; requires a justification.
        PreAdmission => "PRE_ADMISSION",
    }
}

choix_enum! {
    /// Whether the proposition is an admission or a re-enrolment.
    pub enum TypeDemande {
        /// Admission of a new student.
        Admission => "ADMISSION",
        /// Enrolment of a known student.
        Inscription => "INSCRIPTION",
    }
}

choix_enum! {
    /// Which manager population acts on the proposition.
    pub enum TypeGestionnaire {
        /// Faculty managers.
        Fac => "FAC",
        /// Central enrolment service.
        Sic => "SIC",
    }
}

choix_enum! {
    /// Proximity commission of the CDE and CLSM doctoral committees.
    pub enum ChoixCommissionProximiteCDEouCLSM {
        /// Economics.
        Economy => "ECONOMY",
        /// Management.
        Management => "MANAGEMENT",
    }
}

choix_enum! {
    /// Proximity commission of the CDSS doctoral committee.
    pub enum ChoixCommissionProximiteCDSS {
        /// Clinical and experimental research.
        Ecli => "ECLI",
        /// Molecular biology and genetics.
        Gim => "GIM",
        /// Neuroscience.
        Neur => "NEUR",
        /// Public health.
        Spss => "SPSS",
        /// Pharmaceutical sciences.
        Pharm => "PHARM",
        /// Dental sciences.
        Dent => "DENT",
    }
}

choix_enum! {
    /// Sub-domain of the SC3DP science doctorate.
    pub enum ChoixSousDomaineSciences {
        /// Physics.
        Physics => "PHYSICS",
        /// Chemistry.
        Chemistry => "CHEMISTRY",
        /// Mathematics.
        Mathematics => "MATHEMATICS",
        /// Statistics.
        Statistics => "STATISTICS",
        /// Biology.
        Biology => "BIOLOGY",
        /// Geography.
        Geography => "GEOGRAPHY",
    }
}

// ─── Funding and prior research ──────────────────────────────────────

choix_enum! {
    /// How the doctorate is funded.
    pub enum ChoixTypeFinancement {
        /// Employment contract.
        WorkContract => "WORK_CONTRACT",
        /// Research scholarship.
        SearchScholarship => "SEARCH_SCHOLARSHIP",
        /// Self-funded.
        SelfFunding => "SELF_FUNDING",
    }
}

choix_enum! {
    /// Kind of employment contract funding the doctorate.
    pub enum ChoixTypeContratTravail {
        /// Teaching assistant at the university.
        UclouvainAssistant => "UCLOUVAIN_ASSISTANT",
        /// Scientific staff at the university.
        UclouvainScientificStaff => "UCLOUVAIN_SCIENTIFIC_STAFF",
        /// Any other employer.
        Other => "OTHER",
    }
}

choix_enum! {
    /// Whether the candidate already started or completed a doctorate.
    pub enum ChoixDoctoratDejaRealise {
        /// Completed.
        Yes => "YES",
        /// Never started.
        No => "NO",
        /// Started, not completed.
        Partial => "PARTIAL",
    }
}

// ─── Accounting ──────────────────────────────────────────────────────

choix_enum! {
    /// Belgian student status ("assimilation") category.
    pub enum TypeSituationAssimilation {
        AutorisationEtablissementOuResidentLongueDuree => "AUTORISATION_ETABLISSEMENT_OU_RESIDENT_LONGUE_DUREE",
        RefugieOuApatrideOuProtectionSubsidiaireTemporaire => "REFUGIE_OU_APATRIDE_OU_PROTECTION_SUBSIDIAIRE_TEMPORAIRE",
        AutorisationSejourEtRevenusProfessionnelsOuRemplacement => "AUTORISATION_SEJOUR_ET_REVENUS_PROFESSIONNELS_OU_REMPLACEMENT",
        PrisEnChargeOuDesigneCpas => "PRIS_EN_CHARGE_OU_DESIGNE_CPAS",
        ProcheANationaliteUeOuRespecteAssimilations1A4 => "PROCHE_A_NATIONALITE_UE_OU_RESPECTE_ASSIMILATIONS_1_A_4",
        ABourseArticle105Paragraph2 => "A_BOURSE_ARTICLE_105_PARAGRAPH_2",
        ResidentLongueDureeUeHorsBelgique => "RESIDENT_LONGUE_DUREE_UE_HORS_BELGIQUE",
        AucuneAssimilation => "AUCUNE_ASSIMILATION",
    }
}

choix_enum! {
    /// Assimilation 1: residence permit holders.
    pub enum ChoixAssimilation1 {
        TitulaireCarteResidentLongueDuree => "TITULAIRE_CARTE_RESIDENT_LONGUE_DUREE",
        TitulaireCarteEtranger => "TITULAIRE_CARTE_ETRANGER",
        TitulaireCarteSejourMembreUe => "TITULAIRE_CARTE_SEJOUR_MEMBRE_UE",
        TitulaireCarteSejourPermanentMembreUe => "TITULAIRE_CARTE_SEJOUR_PERMANENT_MEMBRE_UE",
    }
}

choix_enum! {
    /// Assimilation 2: refugees and protected persons.
    pub enum ChoixAssimilation2 {
        Refugie => "REFUGIE",
        DemandeurAsile => "DEMANDEUR_ASILE",
        ProtectionSubsidiaire => "PROTECTION_SUBSIDIAIRE",
        ProtectionTemporaire => "PROTECTION_TEMPORAIRE",
    }
}

choix_enum! {
    /// Assimilation 3: residence with income.
    pub enum ChoixAssimilation3 {
        AutorisationSejourEtRevenusProfessionnels => "AUTORISATION_SEJOUR_ET_REVENUS_PROFESSIONNELS",
        AutorisationSejourEtRevenusDeRemplacement => "AUTORISATION_SEJOUR_ET_REVENUS_DE_REMPLACEMENT",
    }
}

choix_enum! {
    /// Assimilation 5: situation of the relative the candidate depends on.
    pub enum ChoixAssimilation5 {
        ANationaliteUe => "A_NATIONALITE_UE",
        TitulaireTitreSejourLongueDuree => "TITULAIRE_TITRE_SEJOUR_LONGUE_DUREE",
        CandidateRefugieOuRefugieOuApatrideOuProtectionSubsidiaireTemporaire => "CANDIDATE_REFUGIE_OU_REFUGIE_OU_APATRIDE_OU_PROTECTION_SUBSIDIAIRE_TEMPORAIRE",
        AutorisationSejourEtRevenusProfessionnelsOuRemplacement => "AUTORISATION_SEJOUR_ET_REVENUS_PROFESSIONNELS_OU_REMPLACEMENT",
        PrisEnChargeOuDesigneCpas => "PRIS_EN_CHARGE_OU_DESIGNE_CPAS",
    }
}

choix_enum! {
    /// Assimilation 6: grant holders.
    pub enum ChoixAssimilation6 {
        ABourseEtudesCommunauteFrancaise => "A_BOURSE_ETUDES_COMMUNAUTE_FRANCAISE",
        ABourseCooperationDeveloppement => "A_BOURSE_COOPERATION_DEVELOPPEMENT",
    }
}

choix_enum! {
    /// Relationship to the relative an assimilation 5 depends on.
    pub enum LienParente {
        Pere => "PERE",
        Mere => "MERE",
        TuteurLegal => "TUTEUR_LEGAL",
        Conjoint => "CONJOINT",
        CohabitantLegal => "COHABITANT_LEGAL",
    }
}

choix_enum! {
    /// Sports affiliation.
    pub enum ChoixAffiliationSport {
        LouvainWoluwe => "LOUVAIN_WOLUWE",
        MonsUcl => "MONS_UCL",
        Mons => "MONS",
        SaintGillesUcl => "SAINT_GILLES_UCL",
        SaintGilles => "SAINT_GILLES",
        TournaiUcl => "TOURNAI_UCL",
        Tournai => "TOURNAI",
        Non => "NON",
    }
}

choix_enum! {
    /// Format of the refund bank account.
    pub enum ChoixTypeCompteBancaire {
        /// IBAN account number.
        Iban => "IBAN",
        /// Another account number format.
        AutreFormat => "AUTRE_FORMAT",
        /// No account.
        Non => "NON",
    }
}

// ─── SIC acceptance ──────────────────────────────────────────────────

choix_enum! {
    /// Tuition fee amount decided by SIC.
    pub enum DroitsInscriptionMontant {
        InscriptionAuRole => "INSCRIPTION_AU_ROLE",
        InscriptionReguliere => "INSCRIPTION_REGULIERE",
        DroitsMajores => "DROITS_MAJORES",
        NouveauxDroitsMajores => "NOUVEAUX_DROITS_MAJORES",
        Autre => "AUTRE",
    }
}

choix_enum! {
    /// Fee waiver or surcharge.
    pub enum DispenseOuDroitsMajores {
        NonConcerne => "NON_CONCERNE",
        DroitsMajoresDemandes => "DROITS_MAJORES_DEMANDES",
        DispenseLdc => "DISPENSE_LDC",
        DispenseReussite => "DISPENSE_REUSSITE",
        DispenseOffre => "DISPENSE_OFFRE",
        DispenseBourse => "DISPENSE_BOURSE",
    }
}

choix_enum! {
    /// Duration of an exchange stay.
    pub enum MobiliteNombreDeMois {
        Six => "SIX",
        Douze => "DOUZE",
    }
}

// ─── Access and equivalence ──────────────────────────────────────────

choix_enum! {
    /// Legal access condition to the programme.
    pub enum ConditionAcces {
        Secondaire => "SECONDAIRE",
        ExamenAdmission => "EXAMEN_ADMISSION",
        Bac => "BAC",
        Bama15 => "BAMA15",
        SnuTypeLong1 => "SNU_TYPE_LONG_1",
        SnuTypeLong2 => "SNU_TYPE_LONG_2",
        /// Short-cycle higher education; always implies training complements.
        SnuTypeCourt => "SNU_TYPE_COURT",
        Vae => "VAE",
        Master => "MASTER",
        Valorisation180Ects => "VALORISATION_180_ECTS",
        Valorisation240Ects => "VALORISATION_240_ECTS",
        Valorisation300Ects => "VALORISATION_300_ECTS",
    }
}

choix_enum! {
    /// Kind of equivalence of a foreign access title.
    pub enum TypeEquivalenceTitreAcces {
        NonConcerne => "NON_CONCERNE",
        EquivalenceCess => "EQUIVALENCE_CESS",
        EquivalenceGradeAcademiqueFwb => "EQUIVALENCE_GRADE_ACADEMIQUE_FWB",
        EquivalenceDeNiveau => "EQUIVALENCE_DE_NIVEAU",
        EnAttente => "EN_ATTENTE",
    }
}

choix_enum! {
    /// Scope of an obtained equivalence.
    pub enum StatutEquivalenceTitreAcces {
        Complete => "COMPLETE",
        Restrictive => "RESTRICTIVE",
        EnAttente => "EN_ATTENTE",
    }
}

choix_enum! {
    /// Whether an equivalence is final.
    pub enum EtatEquivalenceTitreAcces {
        Definitive => "DEFINITIVE",
        Provisoire => "PROVISOIRE",
    }
}

// ─── Financeability ──────────────────────────────────────────────────

choix_enum! {
    /// Computed financeability outcome.
    pub enum EtatFinancabilite {
        NonConcerne => "NON_CONCERNE",
        Financable => "FINANCABLE",
        NonFinancable => "NON_FINANCABLE",
    }
}

choix_enum! {
    /// Financeability rule that applies to the candidate.
    pub enum SituationFinancabilite {
        PlusFinancable => "PLUS_FINANCABLE",
        AcquisPlusDe75PourcentEnNMoins1 => "ACQUIS_PLUS_DE_75_POURCENT_EN_N_MOINS_1",
        AcquisTousCreditsEnNMoins1 => "ACQUIS_TOUS_CREDITS_EN_N_MOINS_1",
        ReussiteCycleEnNMoins1 => "REUSSITE_CYCLE_EN_N_MOINS_1",
        PremiereInscription => "PREMIERE_INSCRIPTION",
        FinancableDerogation => "FINANCABLE_DEROGATION",
    }
}

// ─── Documents ───────────────────────────────────────────────────────

choix_enum! {
    /// A decision certificate rendered as PDF.
    pub enum TypeCertificat {
        ApprobationCdd => "APPROBATION_CDD",
        RefusCdd => "REFUS_CDD",
        ApprobationSic => "APPROBATION_SIC",
        /// Annex sent alongside the SIC approval.
        ApprobationSicAnnexe => "APPROBATION_SIC_ANNEXE",
        RefusSic => "REFUS_SIC",
    }
}

choix_enum! {
    /// Lifecycle of a document placement.
    pub enum StatutEmplacementDocument {
        AReclamer => "A_RECLAMER",
        Reclame => "RECLAME",
        NonAnalyse => "NON_ANALYSE",
        Valide => "VALIDE",
        CompleteApresReclamation => "COMPLETE_APRES_RECLAMATION",
    }
}

impl StatutEmplacementDocument {
    /// Statuses of documents still expected from the candidate.
    pub const A_RECLAMER: &'static [Self] = &[Self::AReclamer, Self::Reclame];
}

choix_enum! {
    /// When a requested document must be returned.
    pub enum StatutReclamationEmplacementDocument {
        Immediatement => "IMMEDIATEMENT",
        UlterieurementBloquant => "ULTERIEUREMENT_BLOQUANT",
        UlterieurementNonBloquant => "ULTERIEUREMENT_NON_BLOQUANT",
    }
}
