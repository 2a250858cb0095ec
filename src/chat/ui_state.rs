// src/chat/ui_state.rs
use serde::{Deserialize, Serialize};

/// Transient widget flags. Changed by user input or by a request completing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub open: bool,
    pub minimized: bool,
    pub has_notification: bool,
    /// Set while a request is in flight; input and quick actions are disabled
    pub is_typing: bool,
    pub input_value: String,
}

/// Collapsible parts of the benchmark details panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    BenchmarkData,
    Calculation,
}

impl std::str::FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "benchmark" | "benchmark-data" | "benchmarkdata" => Ok(Section::BenchmarkData),
            "calculation" => Ok(Section::Calculation),
            other => anyhow::bail!("Unknown section: {}. Use benchmark-data or calculation", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedSections {
    pub benchmark_data: bool,
    pub calculation: bool,
}

impl Default for ExpandedSections {
    fn default() -> Self {
        Self {
            benchmark_data: true,
            calculation: true,
        }
    }
}

impl ExpandedSections {
    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::BenchmarkData => self.benchmark_data,
            Section::Calculation => self.calculation,
        }
    }

    /// Copy with one section flipped
    #[must_use]
    pub fn toggle(self, section: Section) -> Self {
        match section {
            Section::BenchmarkData => Self {
                benchmark_data: !self.benchmark_data,
                ..self
            },
            Section::Calculation => Self {
                calculation: !self.calculation,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_start_expanded() {
        let sections = ExpandedSections::default();
        assert!(sections.is_expanded(Section::BenchmarkData));
        assert!(sections.is_expanded(Section::Calculation));
    }

    #[test]
    fn test_toggle_flips_only_one_section() {
        let sections = ExpandedSections::default().toggle(Section::Calculation);
        assert!(sections.is_expanded(Section::BenchmarkData));
        assert!(!sections.is_expanded(Section::Calculation));

        let restored = sections.toggle(Section::Calculation);
        assert_eq!(restored, ExpandedSections::default());
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("calculation".parse::<Section>().unwrap(), Section::Calculation);
        assert_eq!("Benchmark-Data".parse::<Section>().unwrap(), Section::BenchmarkData);
        assert!("totals".parse::<Section>().is_err());
    }
}
