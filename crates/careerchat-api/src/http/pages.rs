//! HTML pages.
//!
//! The chat page is a static document; the report page is rendered from a
//! [`CareerReport`] with every value HTML-escaped.

use std::fmt::Write;

use html_escape::encode_text;

use careerchat_types::report::CareerReport;

/// The chat UI served at `GET /`.
pub const CHAT_PAGE: &str = include_str!("../../assets/chat.html");

const REPORT_STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { color: #1a5fb4; }
.swot { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.swot section, .option { border: 1px solid #ddd; border-radius: 6px; padding: 0.5rem 1rem; }
.option { margin-bottom: 1rem; }
";

/// Render the report page.
pub fn render_report(report: &CareerReport) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Career Report</title>\n<style>\n");
    html.push_str(REPORT_STYLE);
    html.push_str("</style>\n</head>\n<body>\n<h1>Career Report</h1>\n");

    let _ = writeln!(html, "<p class=\"summary\">{}</p>", encode_text(&report.summary));

    html.push_str("<h2>SWOT Analysis</h2>\n<div class=\"swot\">\n");
    let swot = &report.swot_analysis;
    for (label, items) in [
        ("Strengths", &swot.strengths),
        ("Weaknesses", &swot.weaknesses),
        ("Opportunities", &swot.opportunities),
        ("Threats", &swot.threats),
    ] {
        let _ = writeln!(html, "<section>\n<h3>{label}</h3>\n<ul>");
        for item in items {
            let _ = writeln!(html, "<li>{}</li>", encode_text(item));
        }
        html.push_str("</ul>\n</section>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<h2>Career Options</h2>\n");
    for option in &report.career_options {
        let _ = writeln!(
            html,
            "<div class=\"option\">\n<h3>{}</h3>\n<p>{}</p>\n\
             <p><strong>Growth:</strong> {}</p>\n<p><strong>Salary:</strong> {}</p>\n</div>",
            encode_text(&option.title),
            encode_text(&option.description),
            encode_text(&option.growth_projections),
            encode_text(&option.salary_range),
        );
    }

    html.push_str("<p><a href=\"/\">Back to chat</a></p>\n</body>\n</html>\n");
    html
}
