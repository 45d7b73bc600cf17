//! `careerchat report`: print the career report to the terminal.

use anyhow::Result;
use console::style;

use careerchat_core::report::career_report;
use careerchat_types::report::CareerReport;

/// Print the career report as styled text, or as JSON with `--json`.
pub fn print_report(json: bool) -> Result<()> {
    let report = career_report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_text(&report));
    Ok(())
}

fn render_text(report: &CareerReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("  {}\n", style("Career Report").bold().cyan()));
    out.push('\n');
    out.push_str(&format!("  {}\n\n", report.summary));

    out.push_str(&format!("  {}\n", style("── SWOT Analysis ──").dim()));
    let swot = &report.swot_analysis;
    for (label, items) in [
        ("Strengths", &swot.strengths),
        ("Weaknesses", &swot.weaknesses),
        ("Opportunities", &swot.opportunities),
        ("Threats", &swot.threats),
    ] {
        out.push_str(&format!("  {}\n", style(label).bold()));
        for item in items {
            out.push_str(&format!("    • {item}\n"));
        }
    }
    out.push('\n');

    out.push_str(&format!("  {}\n", style("── Career Options ──").dim()));
    for option in &report.career_options {
        out.push_str(&format!("  {}\n", style(&option.title).green().bold()));
        out.push_str(&format!("    {}\n", option.description));
        out.push_str(&format!(
            "    Growth: {}  Salary: {}\n",
            option.growth_projections, option.salary_range
        ));
    }
    out.push('\n');
    out
}
