use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use iota_score::input::centers::{CenterDirectory, CenterLookup, Prefill, lookup_center};
use iota_score::input::load_schema;
use iota_score::input::store::{ReferenceSources, ReferenceStore};
use iota_score::logging::init_tracing;
use iota_score::model::cell::CellValue;
use iota_score::model::schema::ReferenceSchema;
use iota_score::pipeline::stage6_report::write_reports;
use iota_score::report::json::render_summary_json;
use iota_score::report::text::render_report_text;
use iota_score::{
    ScoreInput, ScoringProfile, compile_center_results, compile_center_results_with_details,
};

#[derive(Parser, Debug)]
#[command(name = "iota-score")]
#[command(about = "Estimate IOTA transplant-center scores and payments", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one center and estimate its payments
    Run(RunArgs),
    /// Show what the reference data knows about a center
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Clone)]
struct ReferenceArgs {
    /// National summary table (.csv or .json, optionally .gz)
    #[arg(long)]
    summary: PathBuf,

    /// Dedicated graft-survival table
    #[arg(long)]
    graft: Option<PathBuf>,

    /// Center directory with names (Name, CTR_CD)
    #[arg(long)]
    centers: Option<PathBuf>,

    /// JSON file overriding column names and year labels
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    #[command(flatten)]
    refs: ReferenceArgs,

    /// Four-character center code
    #[arg(long)]
    center: String,

    /// Proposed transplant volume (defaults to the last reported value)
    #[arg(long)]
    transplants: Option<String>,

    /// Proposed organ offer acceptance rate
    #[arg(long)]
    acceptance: Option<String>,

    /// Proposed graft survival rate (fraction or percentage)
    #[arg(long = "graft-survival")]
    graft_survival: Option<String>,

    /// Include per-transplant payment detail rows
    #[arg(long)]
    details: bool,

    /// Seed for the detail-row jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Write summary.json and report.txt into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct LookupArgs {
    #[command(flatten)]
    refs: ReferenceArgs,

    #[arg(long)]
    center: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_score(&args),
        Command::Lookup(args) => run_lookup(&args),
    }
}

fn run_score(args: &RunArgs) -> Result<(), String> {
    let profile = ScoringProfile::iota_v1();
    let (store, schema) = open_store(&args.refs)?;
    let tables = store.snapshot();
    let directory = load_directory(&args.refs, &schema);

    let lookup = lookup_center(&tables.summary, &directory, &args.center, profile.code_len);
    log_lookup(&lookup);

    let input = build_input(args, lookup.prefill.as_ref());
    let result = if args.details {
        let mut rng = match args.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        compile_center_results_with_details(&tables, &input, &profile, &mut rng)
    } else {
        compile_center_results(&tables, &input, &profile)
    };
    let result = result.with_timestamp(Utc::now());

    match &args.out {
        Some(out_dir) => {
            write_reports(&result, out_dir).map_err(|e| e.to_string())?;
        }
        None if args.json => {
            print!("{}", render_summary_json(&result).map_err(|e| e.to_string())?);
        }
        None => print!("{}", render_report_text(&result)),
    }
    Ok(())
}

fn run_lookup(args: &LookupArgs) -> Result<(), String> {
    let profile = ScoringProfile::iota_v1();
    let (store, schema) = open_store(&args.refs)?;
    let tables = store.snapshot();
    let directory = load_directory(&args.refs, &schema);

    let lookup = lookup_center(&tables.summary, &directory, &args.center, profile.code_len);
    print!("{}", render_lookup(&lookup));
    Ok(())
}

fn open_store(refs: &ReferenceArgs) -> Result<(ReferenceStore, ReferenceSchema), String> {
    let schema = load_schema(refs.schema.as_deref()).map_err(|e| e.to_string())?;
    let store = ReferenceStore::load(ReferenceSources {
        summary: refs.summary.clone(),
        graft: refs.graft.clone(),
        schema: schema.clone(),
    })
    .map_err(|e| e.to_string())?;
    Ok((store, schema))
}

fn load_directory(refs: &ReferenceArgs, schema: &ReferenceSchema) -> CenterDirectory {
    refs.centers
        .as_deref()
        .map(|p| CenterDirectory::load_or_empty(p, schema))
        .unwrap_or_default()
}

/// Explicit arguments win; otherwise the center's last reported values are
/// used, and anything still missing scores as 0.
fn build_input(args: &RunArgs, prefill: Option<&Prefill>) -> ScoreInput {
    let pick = |explicit: &Option<String>, fallback: Option<f64>| match explicit {
        Some(raw) => CellValue::parse(raw),
        None => fallback.map(CellValue::Number).unwrap_or_default(),
    };
    let prefill = prefill.copied().unwrap_or_default();
    ScoreInput::coerce(
        &args.center,
        &pick(&args.transplants, prefill.num_transplants),
        &pick(&args.acceptance, prefill.offer_accept_rate),
        &pick(&args.graft_survival, prefill.graft_survival),
    )
}

fn log_lookup(lookup: &CenterLookup) {
    if let Some(name) = &lookup.name {
        tracing::info!(code = %lookup.code, name = %name, "center identified");
    }
    if let Some(warning) = lookup.warning {
        tracing::warn!(code = %lookup.code, "{warning}");
    }
}

fn render_lookup(lookup: &CenterLookup) -> String {
    let mut out = String::new();
    out.push_str(&format!("Center: {}\n", lookup.code));
    out.push_str(&format!(
        "Name: {}\n",
        lookup.name.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!("In reference data: {}\n", yes_no(lookup.exists)));
    out.push_str(&format!("Participating in IOTA: {}\n", yes_no(lookup.participating)));
    if let Some(p) = &lookup.prefill {
        out.push_str(&format!(
            "Last reported transplants: {}\n",
            iota_score::report::format_opt(p.num_transplants)
        ));
        out.push_str(&format!(
            "Last reported offer acceptance rate: {}\n",
            iota_score::report::format_opt(p.offer_accept_rate)
        ));
        out.push_str(&format!(
            "Last reported graft survival: {}\n",
            iota_score::report::format_opt(p.graft_survival)
        ));
    }
    if let Some(warning) = lookup.warning {
        out.push_str(&format!("Warning: {warning}\n"));
    }
    out
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
