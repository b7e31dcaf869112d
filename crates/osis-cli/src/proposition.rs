//! # Proposition Subcommands
//!
//! Candidate-side lifecycle (`init`, `complete`, `lock`, `submit`),
//! document requests, and the read-only `show` and `list`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use osis_core::{PropositionIdentity, Timestamp};
use osis_proposition::enums::{ChoixTypeAdmission, ChoixTypeFinancement, TypeDemande, TypeGestionnaire};
use osis_proposition::valeurs::{DetailProjet, ExperiencePrecedenteRecherche, Financement};
use osis_proposition::{
    DonneesCompletion, InitierPropositionCommand, Proposition, PropositionRepository,
    ReclamerDocumentsCommand, SoumettrePropositionCommand,
};
use osis_checklist::OngletChecklist;

use crate::{parse_nom, terminer, Contexte};

// ─── Arguments ───────────────────────────────────────────────────────

/// Arguments for `osis init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Candidate registration number.
    #[arg(long)]
    pub candidate: String,
    /// Programme acronym (e.g. "SC3DP").
    #[arg(long)]
    pub programme: String,
    /// Academic year of the programme.
    #[arg(long)]
    pub year: i32,
    /// ADMISSION or PRE_ADMISSION.
    #[arg(long, default_value = "ADMISSION")]
    pub admission_type: String,
    /// Required for a pre-admission.
    #[arg(long)]
    pub justification: Option<String>,
    /// Proximity commission, for committees that have them.
    #[arg(long)]
    pub commission: Option<String>,
}

/// Arguments for `osis complete`.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    pub id: String,
    #[arg(long, default_value = "ADMISSION")]
    pub admission_type: String,
    #[arg(long)]
    pub justification: Option<String>,
    #[arg(long)]
    pub commission: Option<String>,
    /// Project title.
    #[arg(long, default_value = "")]
    pub title: String,
    /// Project summary.
    #[arg(long, default_value = "")]
    pub summary: String,
    /// Thesis language.
    #[arg(long, default_value = "")]
    pub language: String,
    /// Funding type (WORK_CONTRACT, SEARCH_SCHOLARSHIP, SELF_FUNDING).
    #[arg(long)]
    pub funding: Option<String>,
    /// Project document handle. Repeatable.
    #[arg(long = "document")]
    pub documents: Vec<String>,
    /// Doctoral programme proposal handle. Repeatable.
    #[arg(long = "programme-proposal")]
    pub programme_proposals: Vec<String>,
}

/// Arguments for commands taking only a proposition identifier.
#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

/// Arguments for `osis submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    pub id: String,
    /// Academic year the proposition is submitted for.
    #[arg(long)]
    pub year: i32,
    /// ADMISSION or INSCRIPTION.
    #[arg(long, default_value = "ADMISSION")]
    pub request_type: String,
    /// Computed pool.
    #[arg(long)]
    pub pool: Option<String>,
    /// Curriculum experience to review. Repeatable.
    #[arg(long = "experience")]
    pub experiences: Vec<String>,
    /// Confirmation answer as NAME=VALUE. Repeatable.
    #[arg(long = "confirm", value_parser = parse_confirmation)]
    pub confirmations: Vec<(String, String)>,
}

/// Arguments for `osis request-documents`.
#[derive(Args, Debug)]
pub struct RequestDocumentsArgs {
    pub id: String,
    /// Document placement identifier. Repeatable.
    #[arg(long = "document", required = true)]
    pub documents: Vec<String>,
    /// Deadline (YYYY-MM-DD). Defaults to the configured delay.
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    /// Which managers ask: FAC or SIC.
    #[arg(long, default_value = "SIC")]
    pub manager: String,
}

/// Output format of `osis show`.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

/// Arguments for `osis show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: String,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for `osis list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only this candidate's propositions.
    #[arg(long)]
    pub candidate: Option<String>,
}

fn parse_confirmation(valeur: &str) -> std::result::Result<(String, String), String> {
    valeur
        .split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {valeur:?}"))
}

// ─── Commands ────────────────────────────────────────────────────────

pub fn run_init(args: &InitArgs, ctx: &Contexte) -> Result<u8> {
    let type_admission = parse_nom(
        &args.admission_type,
        ChoixTypeAdmission::from_name,
        ChoixTypeAdmission::ALL,
    )?;
    let resultat = ctx.service().initier_proposition(
        InitierPropositionCommand {
            matricule_candidat: args.candidate.clone(),
            sigle_formation: args.programme.clone(),
            annee_formation: args.year,
            type_admission,
            justification: args.justification.clone(),
            commission_proximite: args.commission.clone(),
        },
        Timestamp::now(),
    );
    terminer(resultat, |id| println!("{id}"))
}

pub fn run_complete(args: &CompleteArgs, ctx: &Contexte) -> Result<u8> {
    let type_admission = parse_nom(
        &args.admission_type,
        ChoixTypeAdmission::from_name,
        ChoixTypeAdmission::ALL,
    )?;
    let type_financement = args
        .funding
        .as_deref()
        .map(|f| parse_nom(f, ChoixTypeFinancement::from_name, ChoixTypeFinancement::ALL))
        .transpose()?;

    let donnees = DonneesCompletion {
        type_admission,
        justification: args.justification.clone(),
        commission_proximite: args.commission.clone(),
        projet: DetailProjet {
            titre: args.title.clone(),
            resume: args.summary.clone(),
            langue_redaction_these: args.language.clone(),
            documents: args.documents.clone(),
            proposition_programme_doctoral: args.programme_proposals.clone(),
            ..DetailProjet::default()
        },
        financement: Financement {
            type_financement,
            ..Financement::non_rempli()
        },
        experience_precedente_recherche: ExperiencePrecedenteRecherche::aucune(),
    };

    let id = PropositionIdentity::from_string(&args.id);
    terminer(ctx.service().completer_proposition(&id, donnees), |id| {
        println!("OK: proposition {id} completed")
    })
}

pub fn run_lock(args: &IdArgs, ctx: &Contexte) -> Result<u8> {
    let id = PropositionIdentity::from_string(&args.id);
    terminer(ctx.service().verrouiller_proposition_pour_signature(&id), |id| {
        println!("OK: proposition {id} locked for signatures")
    })
}

pub fn run_submit(args: &SubmitArgs, ctx: &Contexte) -> Result<u8> {
    let type_demande = parse_nom(&args.request_type, TypeDemande::from_name, TypeDemande::ALL)?;
    let id = PropositionIdentity::from_string(&args.id);

    if let Some(p) = ctx.store.get(&id)? {
        ctx.environnement
            .profil_candidat
            .definir_experiences(p.matricule_candidat(), args.experiences.clone());
    }

    let resultat = ctx.service().soumettre_proposition(
        SoumettrePropositionCommand {
            uuid_proposition: id,
            annee: args.year,
            type_demande,
            pot_calcule: args.pool.clone(),
            elements_confirmation: args.confirmations.iter().cloned().collect::<BTreeMap<_, _>>(),
        },
        Timestamp::now(),
    );
    terminer(resultat, |id| println!("OK: proposition {id} submitted"))
}

pub fn run_request_documents(args: &RequestDocumentsArgs, ctx: &Contexte) -> Result<u8> {
    let type_gestionnaire = parse_nom(&args.manager, TypeGestionnaire::from_name, TypeGestionnaire::ALL)?;
    let resultat = ctx.service().reclamer_documents_au_candidat(
        ReclamerDocumentsCommand {
            uuid_proposition: PropositionIdentity::from_string(&args.id),
            identifiants_emplacements: args.documents.clone(),
            a_echeance_le: args.deadline,
            auteur: ctx.auteur.clone(),
            type_gestionnaire,
        },
        Timestamp::now(),
    );
    terminer(resultat, |id| println!("OK: documents requested for proposition {id}"))
}

pub fn run_show(args: &ShowArgs, ctx: &Contexte) -> Result<u8> {
    let id = PropositionIdentity::from_string(&args.id);
    terminer(ctx.service().recuperer_proposition(&id), |p| match args.format {
        Format::Text => print!("{}", afficher(&p)),
        Format::Json => match serde_json::to_string_pretty(&p) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "cannot serialise proposition"),
        },
        Format::Yaml => match serde_yaml::to_string(&p) {
            Ok(yaml) => print!("{yaml}"),
            Err(e) => tracing::error!(error = %e, "cannot serialise proposition"),
        },
    })
}

pub fn run_list(args: &ListArgs, ctx: &Contexte) -> Result<u8> {
    let propositions = ctx
        .service()
        .lister_propositions(args.candidate.as_deref())
        .context("failed to list propositions")?;

    if propositions.is_empty() {
        println!("No propositions found.");
        return Ok(0);
    }
    println!("Propositions ({}):", propositions.len());
    for p in &propositions {
        println!(
            "  [{}] {} {} {} {}",
            p.reference(),
            p.entity_id(),
            p.matricule_candidat(),
            p.formation_id(),
            p.statut()
        );
    }
    Ok(0)
}

/// Human-readable summary of a proposition.
pub fn afficher(p: &Proposition) -> String {
    let mut sortie = format!(
        "Proposition: {}\n  Reference: {}\n  Candidate: {}\n  Programme: {}\n  Status: {}\n  Request type: {}\n  Last modified by: {}\n",
        p.entity_id(),
        p.reference(),
        p.matricule_candidat(),
        p.formation_id(),
        p.statut(),
        p.type_demande(),
        p.auteur_derniere_modification(),
    );
    if let Some(echeance) = p.echeance_demande_documents() {
        sortie.push_str(&format!("  Documents due: {echeance}\n"));
    }

    sortie.push_str("  Checklist:\n");
    let checklist = p.checklist_actuelle();
    for onglet in OngletChecklist::ALL {
        let statut = checklist.onglet(*onglet);
        sortie.push_str(&format!("    {onglet}: {}", statut.statut));
        if !statut.extra.is_empty() {
            let extra: Vec<String> = statut.extra.iter().map(|(k, v)| format!("{k}={v}")).collect();
            sortie.push_str(&format!(" [{}]", extra.join(", ")));
        }
        sortie.push('\n');
        for enfant in &statut.enfants {
            let identifiant = enfant.identifiant().unwrap_or("?");
            sortie.push_str(&format!("      {identifiant}: {}\n", enfant.statut));
        }
    }
    sortie
}
