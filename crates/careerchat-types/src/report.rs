//! Career report types rendered by the `/report` page.

use serde::{Deserialize, Serialize};

/// Career guidance report shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerReport {
    pub summary: String,
    pub swot_analysis: SwotAnalysis,
    pub career_options: Vec<CareerOption>,
}

/// Strengths, weaknesses, opportunities and threats, each a list of short phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// A suggested career path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerOption {
    pub title: String,
    pub description: String,
    pub growth_projections: String,
    pub salary_range: String,
}
