use crate::config::KnowledgeBase;
use crate::plotting;
use crate::request::PlanRequest;
use anyhow::{Context, Result};
use aquaforge_core::{
    logger,
    planner::{
        builder::PlanBuilder,
        report::{PlanReport, PriceSource},
    },
    sensitivity::group_thousands,
    species::UnknownSpeciesPolicy,
};
use aquaforge_schemas::roi::ScenarioKind;
use std::{fs, path::Path};

/// Runs one planning request end to end and writes its artefacts to `output_dir`.
pub fn run_planning(
    request: &PlanRequest,
    kb: &KnowledgeBase,
    output_dir: &str,
    with_plots: bool,
) -> Result<PlanReport> {
    println!("\n--- [Workflow] Planning '{}' ---", request.farm_name);

    let log_path = Path::new(output_dir).join("schedule.csv");
    let log_path = log_path
        .to_str()
        .context("Output directory is not valid UTF-8")?;

    let mut builder = PlanBuilder::new()
        .with_catalog(kb.species.clone())
        .with_pond(request.pond.clone())
        .with_growth(request.etp_input())
        .with_roi(request.roi_parameters())
        .with_schedule_logging_to_file(log_path);
    if let Some(model) = &request.price_agreement {
        builder = builder.with_price_model(model.clone());
    }
    if let Some(index) = request.index_price_per_kg {
        builder = builder.with_index_price(index);
    }
    if let Some(date) = request.target_harvest_date {
        builder = builder.with_target_harvest_date(date);
    }
    if let Some(species) = &request.fallback_species {
        builder = builder.with_unknown_species(UnknownSpeciesPolicy::FallbackTo(species.clone()));
    }

    let mut planner = builder.build()?;
    let report = planner.run()?;

    let scenarios_path = Path::new(output_dir).join("scenarios.csv");
    logger::write_scenarios_csv(
        scenarios_path.to_str().context("Output directory is not valid UTF-8")?,
        &report.sensitivity.scenarios,
    )?;

    let report_yaml = serde_yaml::to_string(&report)?;
    fs::write(Path::new(output_dir).join("plan_report.yaml"), report_yaml)?;

    if with_plots {
        plotting::generate_all_plots(output_dir, log_path, &report.sensitivity.scenarios)?;
    }

    Ok(report)
}

pub fn print_summary_report(report: &PlanReport, request: &PlanRequest) {
    println!("\n\n--- [Final Summary Report] ---");
    println!("========================================");
    println!("Farm: {}", request.farm_name);
    println!(
        "Pond: {:?} {} x {} x {} m, {} fish/m² of {}",
        request.pond.pond_type,
        request.pond.length,
        request.pond.width,
        request.pond.depth,
        request.pond.stocking_density,
        report.species_id
    );
    for warning in &report.validation.warnings {
        println!("  ! {}", warning);
    }
    for note in &report.notes {
        println!("  * {}", note);
    }
    println!("----------------------------------------");

    println!("\nGrowth Estimate:");
    println!(
        "  - Time to {} g: {} weeks ({} days), confidence {:?}",
        request.growth.target_weight,
        report.growth.estimated_weeks,
        report.growth.estimated_days,
        report.growth.confidence
    );
    println!(
        "  - Harvest window: {} to {} (optimal {})",
        report.harvest_window.earliest, report.harvest_window.latest, report.harvest_window.optimal
    );
    for note in &report.growth.notes {
        println!("  - {}", note);
    }

    println!("\nOperational Schedule:");
    println!("  Week | Phase    | Avg g  | Feeds/day | Feed kg/day | Water change");
    for week in &report.schedule.weeks {
        println!(
            "  {:>4} | {:<8} | {:>6.1} | {:>9} | {:>11.2} | {}x {:.0}%",
            week.week,
            week.phase,
            week.average_weight,
            week.feeding.frequency_per_day,
            week.feeding.daily_amount_kg,
            week.water_change.times_per_week,
            week.water_change.percentage
        );
    }
    println!("  - Total feed required: {:.2} kg", report.schedule.total_feed_required);

    match &report.price_source {
        PriceSource::Parameters => {}
        PriceSource::Agreement { kind, price_per_kg } => println!(
            "\nSelling price from {} agreement: {} per kg",
            kind,
            group_thousands(*price_per_kg)
        ),
        PriceSource::ExpiredAgreement { kind } => {
            println!("\nThe {} price agreement is outside its validity window.", kind)
        }
    }

    println!("\nROI Scenarios:");
    for kind in ScenarioKind::ALL {
        let r = report.sensitivity.scenarios.get(kind);
        println!(
            "  - {:<12} | cost {:>14} | revenue {:>14} | profit {:>14} | ROI {:>7.2}% | BEP {:>8}/kg",
            kind.to_string(),
            group_thousands(r.total_cost),
            group_thousands(r.revenue),
            group_thousands(r.profit),
            r.roi_percent,
            group_thousands(r.bep_per_kg)
        );
    }

    println!("\nSensitivity (favourable 10% move):");
    for s in &report.sensitivity.sensitivities {
        println!(
            "  - {:<22} {:>+7.2} pts ({:?})",
            s.parameter.label(),
            s.delta_roi,
            s.impact
        );
    }
    println!("\n{}", report.sensitivity.summary);

    println!("========================================");
}
