// src/analysis.rs
//! Results dashboard for one analysed job

use anyhow::{Context, Result};
use std::fmt::Write;
use tracing::info;

use crate::core::SalaryApi;
use crate::types::{JobAnalysis, SalaryRange};
use crate::utils::{format_percent, format_whole_currency, level_name};

#[derive(Debug, Clone, PartialEq)]
pub struct JobOverview {
    pub job: JobAnalysis,
    pub salary: SalaryRange,
}

/// Fetch the job analysis and its salary calculation concurrently.
///
/// Both requests are issued together; the first failure wins.
pub async fn load_job_overview<A>(api: &A, job_id: &str) -> Result<JobOverview>
where
    A: SalaryApi + ?Sized,
{
    info!("Loading job overview for {}", job_id);

    let (job, salary) = tokio::try_join!(
        async {
            api.get_job(job_id)
                .await
                .with_context(|| format!("Failed to load job {}", job_id))
        },
        async {
            api.calculate_salary(job_id)
                .await
                .with_context(|| format!("Failed to calculate salary for job {}", job_id))
        },
    )?;

    Ok(JobOverview { job, salary })
}

pub fn render_overview(overview: &JobOverview) -> String {
    let JobOverview { job, salary } = overview;
    let mut out = String::new();

    let _ = writeln!(out, "{}", job.job_title);
    if let Some(location) = &job.location {
        let _ = writeln!(out, "  Location:   {}", location);
    }
    if let Some(level) = job.detected_level {
        let _ = writeln!(out, "  Level:      {} ({})", level, level_name(level));
    }
    if let Some(range) = job.experience_range() {
        let _ = writeln!(out, "  Experience: {} exp.", range);
    }
    if !job.skills_extracted.is_empty() {
        let _ = writeln!(out, "  Skills:     {}", job.skills_extracted.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Salary Range");
    for (label, amount) in [
        ("Minimum", salary.recommended_min),
        ("Target", salary.recommended_target),
        ("Maximum", salary.recommended_max),
    ] {
        if let Some(amount) = amount {
            let _ = writeln!(out, "  {:<8} {}", label, format_whole_currency(amount.value()));
        }
    }

    if let Some(insights) = &salary.market_insights {
        let _ = writeln!(out);
        let _ = writeln!(out, "Market Insights");
        if let Some(position) = &insights.market_position {
            let _ = writeln!(out, "  Market Position:   {}", position);
        }
        if let Some(risk) = &insights.retention_risk {
            let _ = writeln!(out, "  Retention Risk:    {}", risk);
        }
        if let Some(factor) = salary.geographic_factor {
            let _ = writeln!(out, "  Geographic Factor: {}x", factor);
        }
        if let Some(analysis) = &insights.competitive_analysis {
            if let Some(demand) = &analysis.market_demand {
                let _ = writeln!(out, "  Market Demand:     {}", demand);
            }
            if let Some(recommendation) = &analysis.recommendation {
                let _ = writeln!(out, "  Recommendation:    {}", recommendation);
            }
        }
    }

    if let Some(confidence) = salary.confidence_score {
        let _ = writeln!(out);
        let _ = writeln!(out, "Confidence Score: {}", format_percent(confidence.value()));
    }

    out
}
