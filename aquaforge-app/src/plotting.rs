//! This module is responsible for generating all visualizations from a planning run.

use anyhow::Result;
use aquaforge_core::logger::ScheduleLogEntry;
use aquaforge_schemas::roi::{ScenarioKind, ScenarioSet};
use plotters::prelude::*;

/// The main function to generate and save all plots for a planning run.
pub fn generate_all_plots(output_dir: &str, log_path: &str, scenarios: &ScenarioSet) -> Result<()> {
    println!("[Plotting] Generating graphs from the schedule log...");

    let data = parse_log_file(log_path)?;

    if data.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    plot_weekly_feed(output_dir, &data)?;
    plot_growth_curve(output_dir, &data)?;
    plot_scenarios(output_dir, scenarios)?;

    println!("[Plotting] Graphs have been saved to '{}'.", output_dir);
    Ok(())
}

/// Parses the schedule CSV written by the planner.
fn parse_log_file(log_path: &str) -> Result<Vec<ScheduleLogEntry>> {
    let mut reader = csv::Reader::from_path(log_path)?;
    let mut data = Vec::new();
    for result in reader.deserialize() {
        let record: ScheduleLogEntry = result?;
        data.push(record);
    }
    Ok(data)
}

/// Bar chart of feed per week with the cumulative total as a line.
fn plot_weekly_feed(output_dir: &str, data: &[ScheduleLogEntry]) -> Result<()> {
    let path = format!("{}/1_weekly_feed.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_week = data.last().map_or(12, |d| d.week) as f64;
    let max_feed = data
        .iter()
        .map(|d| d.cumulative_feed_kg)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Feed Requirement per Week", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_week + 1.0, 0f64..max_feed * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Feed (kg)")
        .draw()?;

    chart
        .draw_series(data.iter().map(|d| {
            let x = d.week as f64;
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, d.weekly_feed_kg)], BLUE.filled())
        }))?
        .label("Weekly feed")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            data.iter().map(|d| (d.week as f64, d.cumulative_feed_kg)),
            RED.stroke_width(2),
        ))?
        .label("Cumulative feed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Average fish weight by week, coloured by grow-out phase.
fn plot_growth_curve(output_dir: &str, data: &[ScheduleLogEntry]) -> Result<()> {
    let path = format!("{}/2_growth_curve.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_week = data.last().map_or(12, |d| d.week) as f64;
    let max_weight = data
        .iter()
        .map(|d| d.average_weight_g)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Fish Weight", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_week + 1.0, 0f64..max_weight * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Average weight (g)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        data.iter().map(|d| (d.week as f64, d.average_weight_g)),
        BLACK.stroke_width(2),
    ))?;

    let phases = [("initial", GREEN), ("growing", BLUE), ("maturing", MAGENTA)];
    for (phase, color) in phases {
        chart
            .draw_series(
                data.iter()
                    .filter(|d| d.phase == phase)
                    .map(|d| Circle::new((d.week as f64, d.average_weight_g), 6, color.filled())),
            )?
            .label(phase)
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Side-by-side cost and revenue bars for the three scenarios.
fn plot_scenarios(output_dir: &str, scenarios: &ScenarioSet) -> Result<()> {
    let path = format!("{}/3_roi_scenarios.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = ScenarioKind::ALL
        .iter()
        .map(|&k| {
            let r = scenarios.get(k);
            r.total_cost.max(r.revenue)
        })
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Cost and Revenue by Scenario", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5f64..2.5f64, 0f64..max_value * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(3)
        .x_label_formatter(&|x: &f64| {
            match x.round() as i64 {
                0 => "conservative",
                1 => "moderate",
                2 => "aggressive",
                _ => "",
            }
            .to_string()
        })
        .y_desc("Currency units")
        .draw()?;

    let indexed: Vec<(f64, ScenarioKind)> = ScenarioKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &k)| (i as f64, k))
        .collect();

    chart
        .draw_series(indexed.iter().map(|&(x, k)| {
            Rectangle::new([(x - 0.35, 0.0), (x, scenarios.get(k).total_cost)], RED.filled())
        }))?
        .label("Total cost")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], RED.filled()));

    chart
        .draw_series(indexed.iter().map(|&(x, k)| {
            Rectangle::new([(x, 0.0), (x + 0.35, scenarios.get(k).revenue)], GREEN.filled())
        }))?
        .label("Revenue")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
