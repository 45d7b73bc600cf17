//! The career report shown on `/report`.
//!
//! The report content is fixed; it does not yet depend on the conversation.

use careerchat_types::report::{CareerOption, CareerReport, SwotAnalysis};

/// Build the career guidance report.
pub fn career_report() -> CareerReport {
    CareerReport {
        summary: "Career guidance report based on your inputs.".to_string(),
        swot_analysis: SwotAnalysis {
            strengths: strings(&["Good communication", "Analytical thinking"]),
            weaknesses: strings(&["Time management"]),
            opportunities: strings(&["Growing demand in tech"]),
            threats: strings(&["Economic instability"]),
        },
        career_options: vec![
            CareerOption {
                title: "Data Scientist".to_string(),
                description: "Analyze data to extract insights.".to_string(),
                growth_projections: "High".to_string(),
                salary_range: "$80k-$120k".to_string(),
            },
            CareerOption {
                title: "Software Engineer".to_string(),
                description: "Develop and maintain software.".to_string(),
                growth_projections: "Moderate".to_string(),
                salary_range: "$70k-$110k".to_string(),
            },
        ],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_stable() {
        assert_eq!(career_report(), career_report());
    }

    #[test]
    fn test_report_contents() {
        let report = career_report();
        assert_eq!(report.summary, "Career guidance report based on your inputs.");
        assert_eq!(report.swot_analysis.strengths.len(), 2);
        assert_eq!(report.swot_analysis.weaknesses, vec!["Time management"]);
        assert_eq!(report.swot_analysis.threats, vec!["Economic instability"]);

        let titles: Vec<&str> = report.career_options.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist", "Software Engineer"]);
        assert_eq!(report.career_options[1].salary_range, "$70k-$110k");
    }
}
