use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use crate::drafts::DraftStore;
use crate::request::PlanRequest;

mod config;
mod drafts;
mod plotting;
mod request;
mod workflow;

const DRAFT_KEY: &str = "last_request";

#[derive(Parser, Debug)]
#[command(name = "aquaforge", about = "Grow-out and ROI planner for pond aquaculture")]
struct Cli {
    /// Planning request to run.
    #[arg(long, default_value = "aquaforge-app/request.yaml")]
    request: String,

    /// Directory holding the species knowledge base.
    #[arg(long, default_value = "./data/knowledge_base")]
    knowledge_base: String,

    /// Parent directory for run outputs.
    #[arg(long, default_value = "./data/runs")]
    output_root: String,

    /// Directory for saved request drafts.
    #[arg(long, default_value = "./data/drafts")]
    drafts: String,

    /// Run the last saved draft instead of reading --request.
    #[arg(long)]
    from_draft: bool,

    /// Delete the saved draft after a successful run.
    #[arg(long)]
    clear_draft: bool,

    /// Skip PNG chart generation.
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Aquaforge Farm Planner ---");

    let drafts = DraftStore::open(&cli.drafts)?;

    let request: PlanRequest = if cli.from_draft {
        match drafts.load(DRAFT_KEY)? {
            Some(request) => request,
            None => bail!("No saved draft found in '{}'", cli.drafts),
        }
    } else {
        let request_str = fs::read_to_string(&cli.request)
            .with_context(|| format!("Failed to read {}", cli.request))?;
        let request: PlanRequest = serde_yaml::from_str(&request_str)
            .with_context(|| format!("Failed to parse {}", cli.request))?;
        drafts.save(DRAFT_KEY, &request)?;
        request
    };

    let kb = config::KnowledgeBase::load(&cli.knowledge_base)?;

    let output_dir = format!(
        "{}/{}_{}",
        cli.output_root,
        drafts::safe_file_stem(&request.pond.species),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Keep the request next to its results for traceability
    fs::write(
        Path::new(&output_dir).join("request.yaml"),
        serde_yaml::to_string(&request)?,
    )?;

    let report = workflow::run_planning(&request, &kb, &output_dir, !cli.no_plots)?;
    workflow::print_summary_report(&report, &request);

    if cli.clear_draft {
        drafts.clear(DRAFT_KEY)?;
    }

    println!("\nPlanning workflow complete. Results are in '{}'", output_dir);

    Ok(())
}
