// src/types/benchmark.rs
//! Benchmark detail payload: market sources, calculation breakdown and the
//! resulting range for one job analysis.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDetails {
    pub job_analysis: JobSummary,
    pub benchmark_data: BenchmarkSources,
    pub calculation_breakdown: CalculationBreakdown,
    pub salary_range: SalarySummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSummary {
    pub position: String,
    pub level: Option<u8>,
    pub level_name: Option<String>,
    pub zone: Option<u8>,
    pub zone_name: Option<String>,
    pub location: Option<String>,
    pub experience_range: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkSources {
    pub mercer: SourceStats,
    pub lattice: SourceStats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStats {
    pub count: u32,
    pub p50_range: P50Range,
    pub p25_avg: Amount,
    pub p75_avg: Amount,
    pub data_points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct P50Range {
    pub min: Amount,
    pub max: Amount,
    pub avg: Amount,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoint {
    pub job_title: String,
    pub location: Option<String>,
    /// Percentiles are `null` for rows the source did not report
    pub p25: Option<Amount>,
    pub p50: Option<Amount>,
    pub p75: Option<Amount>,
    pub data_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationBreakdown {
    pub base_p50: BasePercentiles,
    pub adjustments: Adjustments,
    pub final_calculation: FinalCalculation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePercentiles {
    pub mercer_avg: Amount,
    pub lattice_avg: Amount,
    pub combined_avg: Amount,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub geographic_factor: Amount,
    pub geographic_adjustment: Option<String>,
    pub skills_premium: Amount,
    pub market_adjustment: Amount,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalCalculation {
    pub base: Amount,
    pub final_target: Amount,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalarySummary {
    pub minimum: Amount,
    pub target: Amount,
    pub maximum: Amount,
    pub confidence_score: Amount,
}
