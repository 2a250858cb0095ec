// src/types/job.rs
//! Job analysis and salary calculation payloads

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;

/// Structured extraction of an uploaded job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    #[serde(default)]
    pub id: Option<String>,
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub detected_level: Option<u8>,
    #[serde(default)]
    pub years_experience_min: Option<u32>,
    #[serde(default)]
    pub years_experience_max: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills_extracted: Vec<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

impl JobAnalysis {
    /// "3-6 years" style range, `None` when either bound is missing
    pub fn experience_range(&self) -> Option<String> {
        match (self.years_experience_min, self.years_experience_max) {
            (Some(min), Some(max)) => Some(format!("{}-{} years", min, max)),
            _ => None,
        }
    }

    pub fn top_skills(&self, n: usize) -> &[String] {
        let end = n.min(self.skills_extracted.len());
        &self.skills_extracted[..end]
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub recommended_min: Option<Amount>,
    #[serde(default)]
    pub recommended_target: Option<Amount>,
    #[serde(default)]
    pub recommended_max: Option<Amount>,
    #[serde(default)]
    pub confidence_score: Option<Amount>,
    #[serde(default)]
    pub geographic_factor: Option<Amount>,
    #[serde(default)]
    pub market_insights: Option<MarketInsights>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketInsights {
    #[serde(default)]
    pub market_position: Option<String>,
    #[serde(default)]
    pub retention_risk: Option<String>,
    #[serde(default)]
    pub competitive_analysis: Option<CompetitiveAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetitiveAnalysis {
    #[serde(default)]
    pub market_demand: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}
