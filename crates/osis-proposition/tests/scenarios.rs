//! Behavioural scenarios of the proposition aggregate, through its public
//! API only.

use std::collections::BTreeMap;

use osis_checklist::{ChoixStatutChecklist, EtatAuthentificationParcours, OngletChecklist};
use osis_core::{FormationIdentity, PropositionIdentity, Timestamp};
use osis_proposition::enums::{
    ChoixAssimilation1, ChoixStatutPropositionDoctorale, ChoixTypeAdmission, TypeDemande,
    TypeSituationAssimilation,
};
use osis_proposition::valeurs::{Comptabilite, Doctorat};
use osis_proposition::{
    ContexteApprobationSic, NouvelleProposition, Proposition, PropositionError, Soumission,
};

const MATRICULE: &str = "0123456789";
const GESTIONNAIRE: &str = "00321234";

fn make_instant() -> Timestamp {
    Timestamp::from_ymd(2024, 3, 1).unwrap()
}

fn make_proposition() -> Proposition {
    Proposition::initier(
        PropositionIdentity::from_string("uuid-scenario"),
        NouvelleProposition {
            reference: 7,
            matricule_candidat: MATRICULE.into(),
            type_admission: ChoixTypeAdmission::Admission,
            justification: None,
            commission_proximite: Some("ECONOMY".into()),
        },
        &Doctorat::new(FormationIdentity::new("ECGE3DP", 2024), "Economics", "CDE"),
        make_instant(),
    )
    .unwrap()
}

fn make_soumise(type_demande: TypeDemande) -> Proposition {
    let mut p = make_proposition();
    p.verrouiller_proposition_pour_signature();
    p.soumettre(
        Soumission {
            annee: 2024,
            type_demande,
            pot_calcule: None,
            elements_confirmation: BTreeMap::new(),
            uuids_experiences: vec!["exp-1".into()],
        },
        make_instant(),
    )
    .unwrap();
    p
}

/// The same proposition, reloaded from storage with another status.
fn en_statut(p: &Proposition, statut: ChoixStatutPropositionDoctorale) -> Proposition {
    let mut json = serde_json::to_value(p).unwrap();
    json["statut"] = serde_json::Value::String(statut.name().into());
    serde_json::from_value(json).unwrap()
}

// ── Signatures ──────────────────────────────────────────────────────

#[test]
fn lock_from_ca_to_complete_waits_for_ca_signatures() {
    let mut p = en_statut(&make_proposition(), ChoixStatutPropositionDoctorale::CaACompleter);
    p.verrouiller_proposition_pour_signature();
    assert_eq!(p.statut(), ChoixStatutPropositionDoctorale::CaEnAttenteDeSignature);
}

#[test]
fn lock_from_any_other_status_waits_for_signatures() {
    for statut in ChoixStatutPropositionDoctorale::ALL {
        if *statut == ChoixStatutPropositionDoctorale::CaACompleter {
            continue;
        }
        let mut p = en_statut(&make_proposition(), *statut);
        p.verrouiller_proposition_pour_signature();
        assert_eq!(
            p.statut(),
            ChoixStatutPropositionDoctorale::EnAttenteDeSignature,
            "from {statut}"
        );
        assert_eq!(p.auteur_derniere_modification(), MATRICULE);
    }
}

// ── Prior studies ───────────────────────────────────────────────────

#[test]
fn unknown_experience_status_creates_the_child() {
    let mut p = make_soumise(TypeDemande::Admission);
    p.specifier_statut_checklist_experience_parcours_anterieur(
        GESTIONNAIRE,
        "X",
        ChoixStatutChecklist::GestReussite,
        None,
    );

    let enfant = p
        .checklist_actuelle()
        .recuperer_enfant(OngletChecklist::ParcoursAnterieur, "X")
        .unwrap();
    assert_eq!(enfant.statut, ChoixStatutChecklist::GestReussite);
    assert_eq!(p.auteur_derniere_modification(), GESTIONNAIRE);
}

#[test]
fn unknown_experience_authentication_is_not_found() {
    let mut p = make_soumise(TypeDemande::Admission);
    let avant = serde_json::to_value(&p).unwrap();

    let err = p
        .specifier_authentification_experience_parcours_anterieur(
            GESTIONNAIRE,
            "X",
            EtatAuthentificationParcours::Vrai,
        )
        .unwrap_err();

    assert_eq!(err.first(), Some(&PropositionError::ExperienceNonTrouvee));
    assert_eq!(err.status_codes(), vec!["ADMISSION-22"]);
    assert_eq!(serde_json::to_value(&p).unwrap(), avant);
}

// ── Access condition ────────────────────────────────────────────────

#[test]
fn short_cycle_condition_forces_training_complements() {
    let mut p = make_soumise(TypeDemande::Admission);
    p.specifier_condition_acces(GESTIONNAIRE, Some("SNU_TYPE_COURT"), None, Some(false), &[])
        .unwrap();
    assert_eq!(p.avec_complements_formation(), Some(true));
}

// ── SIC approval ────────────────────────────────────────────────────

#[test]
fn sic_approval_picks_the_list_from_the_request_type() {
    let contexte = ContexteApprobationSic {
        documents: Vec::new(),
        verification_curriculum: Ok(()),
        en_quarantaine: true,
    };

    let donnees_personnelles =
        PropositionError::EtatChecklistDonneesPersonnellesNonValidePourApprouverDemande;

    // Quarantine and personal data only matter for an enrolment.
    let mut inscription = make_soumise(TypeDemande::Inscription);
    let err = inscription.approuver_par_sic(GESTIONNAIRE, &contexte).unwrap_err();
    assert!(err.contient(&PropositionError::EnQuarantaine));
    assert!(err.contient(&donnees_personnelles));

    let mut admission = make_soumise(TypeDemande::Admission);
    let err = admission.approuver_par_sic(GESTIONNAIRE, &contexte).unwrap_err();
    assert!(!err.contient(&PropositionError::EnQuarantaine));
    assert!(!err.contient(&donnees_personnelles));
    assert!(err.contient(&PropositionError::InformationsAcceptationNonSpecifiees));
}

// ── Accounting ──────────────────────────────────────────────────────

#[test]
fn accounting_round_trip_keeps_set_fields_and_defaults_the_rest() {
    let mut p = make_proposition();
    let comptabilite = Comptabilite {
        type_situation_assimilation: Some(TypeSituationAssimilation::AutorisationEtablissementOuResidentLongueDuree),
        sous_type_situation_assimilation_1: Some(ChoixAssimilation1::TitulaireCarteResidentLongueDuree),
        carte_resident_longue_duree: vec!["carte.pdf".into()],
        ..Comptabilite::non_remplie()
    };

    p.completer_comptabilite(MATRICULE, comptabilite.clone());

    assert_eq!(p.comptabilite(), &comptabilite);
    assert!(p.comptabilite().attestation_absence_dette_etablissement.is_empty());
    assert_eq!(p.comptabilite().relation_parente, None);
}
