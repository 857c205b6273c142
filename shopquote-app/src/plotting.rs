//! Renders the cost breakdown of a priced work order from its quote log.

use anyhow::Result;
use plotters::prelude::*;
use shopquote_core::logger::{self, QuoteLogEntry};

/// Draws one stacked bar per line item: labor, overhead, margin.
pub fn plot_quote_breakdown(output_dir: &str, log_path: &str) -> Result<()> {
    println!("[Plotting] Generating cost breakdown chart...");

    let entries = logger::read_quote_log(log_path)?;
    if entries.is_empty() {
        println!("[Plotting] Warning: No priced lines to plot.");
        return Ok(());
    }

    let path = format!("{}/breakdown.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_total = entries.iter().map(|e| e.total).fold(0.0, f64::max);
    let min_part = entries
        .iter()
        .map(|e| e.labor_cost.min(e.overhead_per_job).min(e.margin_amount))
        .fold(0.0, f64::min);
    let y_max = if max_total > 0.0 { max_total * 1.1 } else { 1.0 };
    let labels: Vec<String> = entries.iter().map(|e| e.service_id.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Quoted Price Breakdown", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..entries.len() as f64, min_part * 1.1..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len() + 1)
        .x_label_formatter(&|x| labels.get(x.floor() as usize).cloned().unwrap_or_default())
        .y_desc("Amount per unit")
        .draw()?;

    let segments: [(&str, RGBColor, fn(&QuoteLogEntry) -> (f64, f64)); 3] = [
        ("Labor", BLUE, labor_segment),
        ("Overhead", GREEN, overhead_segment),
        ("Margin", RED, margin_segment),
    ];

    for (label, color, bounds) in segments {
        chart
            .draw_series(entries.iter().enumerate().map(|(i, entry)| {
                let (bottom, top) = bounds(entry);
                Rectangle::new(
                    [(i as f64 + 0.15, bottom), (i as f64 + 0.85, top)],
                    color.filled(),
                )
            }))?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn labor_segment(entry: &QuoteLogEntry) -> (f64, f64) {
    (0.0, entry.labor_cost)
}

fn overhead_segment(entry: &QuoteLogEntry) -> (f64, f64) {
    (entry.labor_cost, entry.labor_cost + entry.overhead_per_job)
}

fn margin_segment(entry: &QuoteLogEntry) -> (f64, f64) {
    (entry.labor_cost + entry.overhead_per_job, entry.total)
}
