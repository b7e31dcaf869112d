//! # Checklist Subcommands
//!
//! Prior-studies review: the tab status, one experience's status, and
//! the access condition.

use anyhow::Result;
use clap::{Args, Subcommand};

use osis_checklist::ChoixStatutChecklist;
use osis_core::PropositionIdentity;
use osis_proposition::valeurs::TitreAccesSelectionnable;
use osis_proposition::SpecifierConditionAccesCommand;

use crate::{parse_nom, parse_titre, terminer, Contexte};

/// Arguments for `osis checklist`.
#[derive(Args, Debug)]
pub struct ChecklistArgs {
    #[command(subcommand)]
    pub command: ChecklistCommand,
}

#[derive(Subcommand, Debug)]
pub enum ChecklistCommand {
    /// Set the status of the prior-studies tab.
    PastStudies {
        id: String,
        /// Checklist status name (e.g. GEST_REUSSITE).
        #[arg(long)]
        status: String,
        /// Selected access title as EXPERIENCE[:YEAR]. Repeatable.
        #[arg(long = "title", value_parser = parse_titre)]
        titres: Vec<TitreAccesSelectionnable>,
    },
    /// Set the status of one curriculum experience.
    Experience {
        id: String,
        /// Experience identifier.
        #[arg(long)]
        experience: String,
        /// Checklist status name.
        #[arg(long)]
        status: String,
        /// Whether the experience was authenticated.
        #[arg(long)]
        authenticated: Option<bool>,
    },
}

/// Arguments for `osis access-condition`.
#[derive(Args, Debug)]
pub struct AccessConditionArgs {
    pub id: String,
    /// Access condition name (e.g. MASTER, SNU_TYPE_COURT).
    #[arg(long)]
    pub condition: Option<String>,
    /// Year the access title was obtained.
    #[arg(long)]
    pub year: Option<i32>,
    /// Whether training complements are required.
    #[arg(long)]
    pub complements: Option<bool>,
    /// Selected access title as EXPERIENCE[:YEAR]. Repeatable.
    #[arg(long = "title", value_parser = parse_titre)]
    pub titres: Vec<TitreAccesSelectionnable>,
}

fn parse_statut(valeur: &str) -> Result<ChoixStatutChecklist> {
    parse_nom(valeur, ChoixStatutChecklist::from_name, ChoixStatutChecklist::ALL)
}

pub fn run_checklist(args: &ChecklistArgs, ctx: &Contexte) -> Result<u8> {
    let service = ctx.service();
    match &args.command {
        ChecklistCommand::PastStudies { id, status, titres } => {
            let statut = parse_statut(status)?;
            let id = PropositionIdentity::from_string(id);
            ctx.selectionner_titres(&id, titres);
            terminer(
                service.modifier_statut_checklist_parcours_anterieur(&id, &ctx.auteur, statut),
                |id| println!("OK: past studies of {id} set to {statut}"),
            )
        }
        ChecklistCommand::Experience {
            id,
            experience,
            status,
            authenticated,
        } => {
            let statut = parse_statut(status)?;
            let id = PropositionIdentity::from_string(id);
            terminer(
                service.modifier_statut_checklist_experience_parcours_anterieur(
                    &id,
                    &ctx.auteur,
                    experience,
                    statut,
                    *authenticated,
                ),
                |id| println!("OK: experience {experience} of {id} set to {statut}"),
            )
        }
    }
}

pub fn run_access_condition(args: &AccessConditionArgs, ctx: &Contexte) -> Result<u8> {
    let id = PropositionIdentity::from_string(&args.id);
    ctx.selectionner_titres(&id, &args.titres);
    let resultat = ctx.service().specifier_condition_acces(SpecifierConditionAccesCommand {
        uuid_proposition: id,
        auteur: ctx.auteur.clone(),
        condition_acces: args.condition.clone(),
        millesime_condition_acces: args.year,
        avec_complements_formation: args.complements,
    });
    terminer(resultat, |id| println!("OK: access condition of {id} recorded"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use osis_checklist::OngletChecklist;
    use osis_core::{AdmissionConfig, FormationIdentity, Timestamp};
    use osis_proposition::enums::{ChoixTypeAdmission, TypeDemande};
    use osis_proposition::valeurs::Doctorat;
    use osis_proposition::{NouvelleProposition, Proposition, PropositionRepository, Soumission};
    use std::collections::BTreeMap;

    const ID: &str = "uuid-checklist";

    /// A context whose store holds one submitted proposition with
    /// experience `exp-1`.
    fn make_contexte(dir: &std::path::Path) -> Contexte {
        let config = AdmissionConfig {
            state_dir: dir.to_path_buf(),
            ..AdmissionConfig::default()
        };
        let ctx = Contexte::new(config, "00321234");

        let mut p = Proposition::initier(
            PropositionIdentity::from_string(ID),
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
        p.verrouiller_proposition_pour_signature();
        p.soumettre(
            Soumission {
                annee: 2024,
                type_demande: TypeDemande::Admission,
                pot_calcule: None,
                elements_confirmation: BTreeMap::new(),
                uuids_experiences: vec!["exp-1".into()],
            },
            Timestamp::from_ymd(2024, 3, 1).unwrap(),
        )
        .unwrap();
        ctx.store.save(&p).unwrap();
        ctx
    }

    fn charger(ctx: &Contexte) -> Proposition {
        ctx.store
            .get(&PropositionIdentity::from_string(ID))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_past_studies_success_needs_a_title() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_contexte(dir.path());

        let sans_titre = ChecklistArgs {
            command: ChecklistCommand::PastStudies {
                id: ID.into(),
                status: "GEST_REUSSITE".into(),
                titres: Vec::new(),
            },
        };
        assert_eq!(run_checklist(&sans_titre, &ctx).unwrap(), crate::EXIT_REJET);

        let condition = AccessConditionArgs {
            id: ID.into(),
            condition: Some("MASTER".into()),
            year: Some(2020),
            complements: Some(false),
            titres: Vec::new(),
        };
        assert_eq!(run_access_condition(&condition, &ctx).unwrap(), 0);
        let experience = ChecklistArgs {
            command: ChecklistCommand::Experience {
                id: ID.into(),
                experience: "exp-1".into(),
                status: "GEST_REUSSITE".into(),
                authenticated: None,
            },
        };
        assert_eq!(run_checklist(&experience, &ctx).unwrap(), 0);

        let avec_titre = ChecklistArgs {
            command: ChecklistCommand::PastStudies {
                id: ID.into(),
                status: "GEST_REUSSITE".into(),
                titres: vec![parse_titre("exp-1:2020").unwrap()],
            },
        };
        assert_eq!(run_checklist(&avec_titre, &ctx).unwrap(), 0);
        assert_eq!(
            charger(&ctx).checklist_actuelle().parcours_anterieur.statut,
            ChoixStatutChecklist::GestReussite
        );
    }

    #[test]
    fn test_experience_status_is_upserted() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_contexte(dir.path());

        let args = ChecklistArgs {
            command: ChecklistCommand::Experience {
                id: ID.into(),
                experience: "exp-new".into(),
                status: "GEST_EN_COURS".into(),
                authenticated: Some(true),
            },
        };
        assert_eq!(run_checklist(&args, &ctx).unwrap(), 0);

        let p = charger(&ctx);
        let enfant = p
            .checklist_actuelle()
            .recuperer_enfant(OngletChecklist::ParcoursAnterieur, "exp-new")
            .unwrap();
        assert_eq!(enfant.statut, ChoixStatutChecklist::GestEnCours);
    }

    #[test]
    fn test_unknown_status_name_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_contexte(dir.path());
        let args = ChecklistArgs {
            command: ChecklistCommand::Experience {
                id: ID.into(),
                experience: "exp-1".into(),
                status: "DONE".into(),
                authenticated: None,
            },
        };
        let err = run_checklist(&args, &ctx).unwrap_err();
        assert!(err.to_string().contains("GEST_REUSSITE"));
    }

    #[test]
    fn test_short_cycle_condition_forces_complements() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_contexte(dir.path());
        let args = AccessConditionArgs {
            id: ID.into(),
            condition: Some("SNU_TYPE_COURT".into()),
            year: Some(2020),
            complements: Some(false),
            titres: Vec::new(),
        };

        assert_eq!(run_access_condition(&args, &ctx).unwrap(), 0);
        assert_eq!(charger(&ctx).avec_complements_formation(), Some(true));
    }
}
