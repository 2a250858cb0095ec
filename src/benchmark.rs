// src/benchmark.rs
//! Collapsible benchmark details panel

use std::fmt::Write;
use std::sync::Arc;
use tracing::{error, info};

use crate::chat::{ExpandedSections, Section};
use crate::core::SalaryApi;
use crate::types::benchmark::{BenchmarkDetails, SourceStats};
use crate::utils::{format_currency, format_percent};

pub struct BenchmarkPanel<A: ?Sized> {
    api: Arc<A>,
    job_id: String,
    loading: bool,
    data: Option<BenchmarkDetails>,
    expanded: ExpandedSections,
}

impl<A> BenchmarkPanel<A>
where
    A: SalaryApi + ?Sized,
{
    pub fn new(api: Arc<A>, job_id: impl Into<String>) -> Self {
        Self {
            api,
            job_id: job_id.into(),
            loading: true,
            data: None,
            expanded: ExpandedSections::default(),
        }
    }

    /// Fetch the details once. Failures are logged and leave the panel empty.
    pub async fn load(&mut self) {
        info!("Fetching benchmark details for job {}", self.job_id);
        match self.api.benchmark_details(&self.job_id).await {
            Ok(details) => self.data = Some(details),
            Err(e) => error!("Error fetching benchmark details: {:#}", e),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&BenchmarkDetails> {
        self.data.as_ref()
    }

    pub fn expanded(&self) -> ExpandedSections {
        self.expanded
    }

    pub fn toggle(&mut self, section: Section) {
        self.expanded = self.expanded.toggle(section);
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading benchmark details...\n".to_string();
        }
        match &self.data {
            Some(details) => render_details(details, self.expanded),
            None => "Benchmark details unavailable.\n".to_string(),
        }
    }
}

fn marker(expanded: bool) -> &'static str {
    if expanded {
        "[-]"
    } else {
        "[+]"
    }
}

fn render_source(out: &mut String, name: &str, stats: &SourceStats) {
    let _ = writeln!(out, "  {} ({} data points)", name, stats.count);
    let _ = writeln!(
        out,
        "    P50 range: {} - {}",
        format_currency(stats.p50_range.min.value()),
        format_currency(stats.p50_range.max.value())
    );
    let _ = writeln!(out, "    P50 avg:   {}", format_currency(stats.p50_range.avg.value()));
    let _ = writeln!(
        out,
        "    P25 / P75: {} / {}",
        format_currency(stats.p25_avg.value()),
        format_currency(stats.p75_avg.value())
    );
    for point in &stats.data_points {
        let _ = writeln!(
            out,
            "      {} ({}): {}",
            point.job_title,
            point.location.as_deref().unwrap_or("-"),
            point
                .p50
                .map(|p50| format_currency(p50.value()))
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

pub fn render_details(details: &BenchmarkDetails, expanded: ExpandedSections) -> String {
    let mut out = String::new();
    let job = &details.job_analysis;

    let _ = writeln!(out, "Job Analysis");
    let _ = writeln!(out, "  Position:   {}", job.position);
    if let Some(level) = job.level {
        let name = job.level_name.as_deref().unwrap_or("");
        let _ = writeln!(out, "  Level:      {} {}", level, name);
    }
    if let Some(zone) = job.zone {
        let name = job.zone_name.as_deref().unwrap_or("");
        let _ = writeln!(out, "  Zone:       {} {}", zone, name);
    }
    if let Some(location) = &job.location {
        let _ = writeln!(out, "  Location:   {}", location);
    }
    if let Some(range) = &job.experience_range {
        let _ = writeln!(out, "  Experience: {}", range);
    }
    if !job.skills.is_empty() {
        let _ = writeln!(out, "  Skills:     {}", job.skills.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} Market Benchmark Data",
        marker(expanded.is_expanded(Section::BenchmarkData))
    );
    if expanded.is_expanded(Section::BenchmarkData) {
        render_source(&mut out, "Mercer", &details.benchmark_data.mercer);
        render_source(&mut out, "Lattice", &details.benchmark_data.lattice);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} Calculation Breakdown",
        marker(expanded.is_expanded(Section::Calculation))
    );
    if expanded.is_expanded(Section::Calculation) {
        let calc = &details.calculation_breakdown;
        let adj = &calc.adjustments;
        let range = &details.salary_range;

        let _ = writeln!(out, "  Mercer P50:        {}", format_currency(calc.base_p50.mercer_avg.value()));
        let _ = writeln!(out, "  Lattice P50:       {}", format_currency(calc.base_p50.lattice_avg.value()));
        let _ = writeln!(out, "  Combined P50:      {}", format_currency(calc.base_p50.combined_avg.value()));
        let _ = writeln!(
            out,
            "  Geographic factor: {}x {}",
            adj.geographic_factor,
            adj.geographic_adjustment.as_deref().unwrap_or("")
        );
        let _ = writeln!(out, "  Skills premium:    +{}", format_percent(adj.skills_premium.value()));
        let _ = writeln!(out, "  Market adjustment: +{}", format_percent(adj.market_adjustment.value()));
        let _ = writeln!(
            out,
            "  Final range:       {} / {} / {}",
            format_currency(range.minimum.value()),
            format_currency(range.target.value()),
            format_currency(range.maximum.value())
        );
        let _ = writeln!(out, "  Confidence:        {}", format_percent(range.confidence_score.value()));
    }

    out
}
