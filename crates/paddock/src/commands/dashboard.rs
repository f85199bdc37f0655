//! Dashboard and report handlers.

use std::fmt::Write as _;

use tabled::Tabled;
use tabled::settings::Style;

use paddock_core::Facility;
use paddock_core::insights::{
    self, DashboardSummary, MonthlyActivity, Report, ReportFilters, ReportType, TimeRange,
};

use crate::cli::{GlobalOpts, ReportsArgs};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Dashboard ───────────────────────────────────────────────────────

fn render_dashboard(d: &DashboardSummary, painter: Painter) -> String {
    let count = |n: usize, tone: Tone| {
        if n == 0 {
            n.to_string()
        } else {
            painter.paint(n, tone)
        }
    };
    let budget_tone = if d.budget_utilization > 100.0 {
        Tone::Bad
    } else {
        Tone::Neutral
    };

    output::detail(
        painter,
        "Facility overview",
        &[
            ("Animals", d.total_animals.to_string()),
            ("Needing attention", count(d.animals_needing_attention, Tone::Warn)),
            ("Active staff", d.active_staff.to_string()),
            ("Alerts", count(d.alert_count, Tone::Bad)),
            ("  Pending feedings", count(d.pending_feedings, Tone::Warn)),
            ("  Items to reorder", count(d.items_to_reorder, Tone::Warn)),
            ("  Open health records", count(d.open_health_records, Tone::Warn)),
            ("Births due soon", count(d.breedings_due_soon, Tone::Warn)),
            ("Inventory value", format!("${:.2}", d.inventory_value)),
            (
                "Budget used",
                painter.paint(format!("{:.1}%", d.budget_utilization), budget_tone),
            ),
        ],
    )
}

pub fn dashboard(facility: &Facility, global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let summary = insights::dashboard_summary(&facility.store().snapshot_all(), util::today());
    let out = output::render_single(
        &global.output,
        &summary,
        |d| render_dashboard(d, painter),
        |d| d.alert_count.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Reports ─────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "New Animals")]
    new_animals: usize,
    #[tabled(rename = "Health Records")]
    health_records: usize,
    #[tabled(rename = "Feeding Tasks")]
    feeding_tasks: usize,
    #[tabled(rename = "Breedings")]
    breedings: usize,
}

impl From<&MonthlyActivity> for ActivityRow {
    fn from(m: &MonthlyActivity) -> Self {
        Self {
            month: m.month.clone(),
            new_animals: m.new_animals,
            health_records: m.health_records,
            feeding_tasks: m.feeding_tasks,
            breedings: m.breedings,
        }
    }
}

fn render_report(r: &Report, painter: Painter) -> String {
    let title = format!(
        "{} report, {} to {}",
        capitalize(&r.report_type.to_string()),
        r.from,
        r.to
    );
    let fields: Vec<(&str, String)> = r
        .metrics
        .iter()
        .map(|m| (m.label, m.value.clone()))
        .collect();

    let mut out = output::detail(painter, &title, &fields);
    if !r.series.is_empty() {
        let rows: Vec<ActivityRow> = r.series.iter().map(ActivityRow::from).collect();
        let table = tabled::Table::new(rows).with(Style::rounded()).to_string();
        let _ = write!(out, "\n\n{table}");
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

pub fn reports(facility: &Facility, args: &ReportsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let time_range: TimeRange = util::parse_enum("range", &args.range)?;
    let report_type: ReportType = util::parse_enum("type", &args.report_type)?;

    let filters = ReportFilters {
        time_range,
        report_type,
    };
    facility.set_report_filters(filters);

    let report = insights::reports::build_report(
        &facility.store().snapshot_all(),
        facility.report_filters(),
        util::today(),
    );

    let painter = Painter::new(global);
    let out = output::render_single(
        &global.output,
        &report,
        |r| render_report(r, painter),
        |r| r.report_type.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_report_names() {
        assert_eq!(capitalize("overview"), "Overview");
        assert_eq!(capitalize(""), "");
    }
}
