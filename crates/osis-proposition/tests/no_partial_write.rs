//! Property tests: a rejected transition writes nothing, and an accepted
//! one always records its author.

use std::collections::BTreeMap;

use osis_checklist::{ChoixStatutChecklist, DerogationFinancement, EtatAuthentificationParcours};
use osis_core::{FormationIdentity, PropositionIdentity, Timestamp};
use osis_proposition::enums::{
    BesoinDeDerogation, ChoixStatutPropositionDoctorale, ChoixTypeAdmission, TypeDemande,
};
use osis_proposition::valeurs::{
    Doctorat, MotifRefusIdentity, TitreAccesSelectionnable, TypeTitreAccesSelectionnable,
};
use osis_proposition::{
    ContexteApprobationSic, InformationsAcceptation, NouvelleProposition, Proposition,
    Soumission, TransitionError,
};
use proptest::prelude::*;

const GESTIONNAIRE: &str = "00321234";

fn make_proposition(statut: ChoixStatutPropositionDoctorale, type_demande: TypeDemande) -> Proposition {
    let mut p = Proposition::initier(
        PropositionIdentity::from_string("uuid-property"),
        NouvelleProposition {
            reference: 1,
            matricule_candidat: "0123456789".into(),
            type_admission: ChoixTypeAdmission::Admission,
            justification: None,
            commission_proximite: Some("ECONOMY".into()),
        },
        &Doctorat::new(FormationIdentity::new("ECGE3DP", 2024), "Economics", "CDE"),
        Timestamp::from_ymd(2024, 3, 1).unwrap(),
    )
    .unwrap();
    p.soumettre(
        Soumission {
            annee: 2024,
            type_demande,
            pot_calcule: None,
            elements_confirmation: BTreeMap::new(),
            uuids_experiences: vec!["exp-1".into()],
        },
        Timestamp::from_ymd(2024, 3, 1).unwrap(),
    )
    .unwrap();

    let mut json = serde_json::to_value(&p).unwrap();
    json["statut"] = serde_json::Value::String(statut.name().into());
    serde_json::from_value(json).unwrap()
}

/// The selected access titles: one, or none.
fn titres(un_titre: bool) -> Vec<TitreAccesSelectionnable> {
    if !un_titre {
        return Vec::new();
    }
    vec![TitreAccesSelectionnable {
        uuid_experience: "exp-1".into(),
        type_titre: TypeTitreAccesSelectionnable::ExperiencesAcademiques,
        annee: Some(2020),
        selectionne: true,
    }]
}

/// A fallible transition, with inputs drawn by the strategy.
#[derive(Debug, Clone)]
enum Transition {
    RedonnerLaMain,
    EnvoyerACdd,
    AccepterParCdd { annees: Option<u8> },
    MotifsRefusParCdd { avec_motif: bool },
    ApprouverParCdd { titre: bool },
    RefuserParCdd { titre: bool },
    MotifsRefusParSic { avec_motif: bool },
    ApprouverParSic { quarantaine: bool },
    RefuserParSic,
    BesoinDerogation(usize),
    ParcoursAnterieur { titre: bool, suffisant: bool },
    AuthentificationExperience { connue: bool },
    ConditionAcces { condition: usize, complements: Option<bool> },
}

fn transition() -> impl Strategy<Value = Transition> {
    prop_oneof![
        Just(Transition::RedonnerLaMain),
        Just(Transition::EnvoyerACdd),
        proptest::option::of(0u8..4).prop_map(|annees| Transition::AccepterParCdd { annees }),
        any::<bool>().prop_map(|avec_motif| Transition::MotifsRefusParCdd { avec_motif }),
        any::<bool>().prop_map(|titre| Transition::ApprouverParCdd { titre }),
        any::<bool>().prop_map(|titre| Transition::RefuserParCdd { titre }),
        any::<bool>().prop_map(|avec_motif| Transition::MotifsRefusParSic { avec_motif }),
        any::<bool>().prop_map(|quarantaine| Transition::ApprouverParSic { quarantaine }),
        Just(Transition::RefuserParSic),
        (0..BesoinDeDerogation::ALL.len()).prop_map(Transition::BesoinDerogation),
        (any::<bool>(), any::<bool>())
            .prop_map(|(titre, suffisant)| Transition::ParcoursAnterieur { titre, suffisant }),
        any::<bool>().prop_map(|connue| Transition::AuthentificationExperience { connue }),
        (0..4usize, proptest::option::of(any::<bool>()))
            .prop_map(|(condition, complements)| Transition::ConditionAcces { condition, complements }),
    ]
}

fn motifs(avec_motif: bool) -> Vec<MotifRefusIdentity> {
    if avec_motif {
        vec![MotifRefusIdentity("motif".into())]
    } else {
        Vec::new()
    }
}

fn appliquer(p: &mut Proposition, transition: &Transition) -> Result<(), TransitionError> {
    match transition {
        Transition::RedonnerLaMain => p.redonner_la_main_au_candidat(GESTIONNAIRE),
        Transition::EnvoyerACdd => p.envoyer_a_cdd_pour_decision(GESTIONNAIRE),
        Transition::AccepterParCdd { annees } => p.specifier_informations_acceptation_par_cdd(
            GESTIONNAIRE,
            InformationsAcceptation {
                avec_conditions_complementaires: Some(false),
                avec_complements_formation: Some(false),
                nombre_annees_prevoir_programme: *annees,
                ..InformationsAcceptation::default()
            },
        ),
        Transition::MotifsRefusParCdd { avec_motif } => {
            p.specifier_motifs_refus_par_cdd(GESTIONNAIRE, motifs(*avec_motif), Vec::new())
        }
        Transition::ApprouverParCdd { titre } => p.approuver_par_cdd(GESTIONNAIRE, &titres(*titre)),
        Transition::RefuserParCdd { titre } => p.refuser_par_cdd(GESTIONNAIRE, &titres(*titre)),
        Transition::MotifsRefusParSic { avec_motif } => {
            p.specifier_motifs_refus_par_sic(GESTIONNAIRE, motifs(*avec_motif), Vec::new())
        }
        Transition::ApprouverParSic { quarantaine } => p.approuver_par_sic(
            GESTIONNAIRE,
            &ContexteApprobationSic {
                documents: Vec::new(),
                verification_curriculum: Ok(()),
                en_quarantaine: *quarantaine,
            },
        ),
        Transition::RefuserParSic => p.refuser_par_sic(GESTIONNAIRE),
        Transition::BesoinDerogation(i) => {
            p.specifier_besoin_de_derogation(GESTIONNAIRE, BesoinDeDerogation::ALL[*i])
        }
        Transition::ParcoursAnterieur { titre, suffisant } => {
            let statut = if *suffisant {
                ChoixStatutChecklist::GestReussite
            } else {
                ChoixStatutChecklist::GestEnCours
            };
            p.modifier_statut_checklist_parcours_anterieur(GESTIONNAIRE, statut, &titres(*titre))
        }
        Transition::AuthentificationExperience { connue } => p
            .specifier_authentification_experience_parcours_anterieur(
                GESTIONNAIRE,
                if *connue { "exp-1" } else { "inconnue" },
                EtatAuthentificationParcours::Vrai,
            ),
        Transition::ConditionAcces { condition, complements } => {
            let nom = ["SNU_TYPE_COURT", "MASTER", "BAC", "NOT_A_CONDITION"][*condition];
            p.specifier_condition_acces(GESTIONNAIRE, Some(nom), Some(2020), *complements, &[])
        }
    }
}

proptest! {
    /// A rejected transition leaves every field as it was; an accepted
    /// one records the acting manager.
    #[test]
    fn transition_is_all_or_nothing(
        statut in 0..ChoixStatutPropositionDoctorale::ALL.len(),
        inscription in any::<bool>(),
        transition in transition(),
    ) {
        let type_demande = if inscription { TypeDemande::Inscription } else { TypeDemande::Admission };
        let mut p = make_proposition(ChoixStatutPropositionDoctorale::ALL[statut], type_demande);
        let avant = serde_json::to_value(&p).unwrap();

        match appliquer(&mut p, &transition) {
            Ok(()) => prop_assert_eq!(p.auteur_derniere_modification(), GESTIONNAIRE),
            Err(err) => {
                prop_assert!(!err.status_codes().is_empty());
                prop_assert_eq!(serde_json::to_value(&p).unwrap(), avant);
            }
        }
    }

    /// Dispensation updates never fail and never touch the lifecycle
    /// status.
    #[test]
    fn dispensation_keeps_status(
        statut in 0..ChoixStatutPropositionDoctorale::ALL.len(),
        derogation in 0..DerogationFinancement::ALL.len(),
    ) {
        let statut = ChoixStatutPropositionDoctorale::ALL[statut];
        let mut p = make_proposition(statut, TypeDemande::Admission);
        p.specifier_derogation_financabilite(
            GESTIONNAIRE,
            DerogationFinancement::ALL[derogation],
            Vec::new(),
            Vec::new(),
        );
        prop_assert_eq!(p.statut(), statut);
        prop_assert_eq!(p.financabilite_derogation_statut(), DerogationFinancement::ALL[derogation]);
    }
}
