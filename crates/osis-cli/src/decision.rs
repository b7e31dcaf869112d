//! # Decision Subcommands
//!
//! Faculty (CDD) and central administration (SIC) decisions, plus the
//! hand-over from SIC to the faculty.

use anyhow::Result;
use clap::{Args, Subcommand};

use osis_core::{PropositionIdentity, Timestamp};
use osis_proposition::valeurs::{
    ConditionComplementaireLibre, MotifRefusIdentity, TitreAccesSelectionnable,
};
use osis_proposition::InformationsAcceptation;

use crate::{parse_titre, terminer, Contexte};

/// Arguments for `osis send-to-cdd`.
#[derive(Args, Debug)]
pub struct SendToCddArgs {
    pub id: String,
}

/// Arguments for `osis cdd`.
#[derive(Args, Debug)]
pub struct CddArgs {
    #[command(subcommand)]
    pub command: DecisionCommand,
}

/// Arguments for `osis sic`.
#[derive(Args, Debug)]
pub struct SicArgs {
    #[command(subcommand)]
    pub command: DecisionCommand,
}

#[derive(Subcommand, Debug)]
pub enum DecisionCommand {
    /// Approve the proposition.
    Approve {
        id: String,
        /// Years to plan for the doctoral programme (faculty only).
        #[arg(long)]
        years: Option<u8>,
        /// Free additional condition, in French. Repeatable.
        #[arg(long = "condition")]
        conditions: Vec<String>,
        /// Selected access title as EXPERIENCE[:YEAR]. Repeatable.
        #[arg(long = "title", value_parser = parse_titre)]
        titres: Vec<TitreAccesSelectionnable>,
    },
    /// Refuse the proposition.
    Refuse {
        id: String,
        /// Refusal motive identifier. Repeatable.
        #[arg(long = "motive")]
        motifs: Vec<String>,
        /// Free-text refusal reason. Repeatable.
        #[arg(long = "reason")]
        autres: Vec<String>,
        /// Selected access title as EXPERIENCE[:YEAR]. Repeatable.
        #[arg(long = "title", value_parser = parse_titre)]
        titres: Vec<TitreAccesSelectionnable>,
    },
}

pub fn run_send_to_cdd(args: &SendToCddArgs, ctx: &Contexte) -> Result<u8> {
    let id = PropositionIdentity::from_string(&args.id);
    terminer(ctx.service().envoyer_a_cdd_pour_decision(&id, &ctx.auteur), |id| {
        println!("OK: proposition {id} sent to the faculty")
    })
}

pub fn run_cdd(args: &CddArgs, ctx: &Contexte) -> Result<u8> {
    let service = ctx.service();
    match &args.command {
        DecisionCommand::Approve {
            id,
            years,
            conditions,
            titres,
        } => {
            let id = PropositionIdentity::from_string(id);
            ctx.selectionner_titres(&id, titres);
            let informations = informations_acceptation(*years, conditions);
            let resultat = service
                .specifier_informations_acceptation_par_cdd(&id, &ctx.auteur, informations)
                .and_then(|id| service.approuver_par_cdd(&id, &ctx.auteur));
            terminer(resultat, |id| println!("OK: proposition {id} approved by the faculty"))
        }
        DecisionCommand::Refuse {
            id,
            motifs,
            autres,
            titres,
        } => {
            let id = PropositionIdentity::from_string(id);
            ctx.selectionner_titres(&id, titres);
            let resultat = service.refuser_par_cdd(&id, &ctx.auteur, motifs_refus(motifs), autres.clone());
            terminer(resultat, |id| println!("OK: proposition {id} refused by the faculty"))
        }
    }
}

pub fn run_sic(args: &SicArgs, ctx: &Contexte) -> Result<u8> {
    let service = ctx.service();
    match &args.command {
        DecisionCommand::Approve { id, titres, .. } => {
            let id = PropositionIdentity::from_string(id);
            ctx.selectionner_titres(&id, titres);
            terminer(
                service.approuver_par_sic(&id, &ctx.auteur, Timestamp::now()),
                |id| println!("OK: proposition {id} approved by SIC"),
            )
        }
        DecisionCommand::Refuse {
            id, motifs, autres, ..
        } => {
            let id = PropositionIdentity::from_string(id);
            terminer(
                service.refuser_par_sic(&id, &ctx.auteur, motifs_refus(motifs), autres.clone()),
                |id| println!("OK: proposition {id} refused by SIC"),
            )
        }
    }
}

fn motifs_refus(motifs: &[String]) -> Vec<MotifRefusIdentity> {
    motifs.iter().cloned().map(MotifRefusIdentity).collect()
}

/// Acceptance details from the command line. Free conditions are given
/// in French only; the English label repeats it.
fn informations_acceptation(annees: Option<u8>, conditions: &[String]) -> InformationsAcceptation {
    InformationsAcceptation {
        avec_conditions_complementaires: Some(!conditions.is_empty()),
        conditions_complementaires_libres: conditions
            .iter()
            .map(|c| ConditionComplementaireLibre {
                nom_fr: c.clone(),
                nom_en: c.clone(),
                liee_a_complement_formation: false,
            })
            .collect(),
        avec_complements_formation: Some(false),
        nombre_annees_prevoir_programme: annees,
        ..InformationsAcceptation::default()
    }
}
