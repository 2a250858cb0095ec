// src/chat/greeting.rs
//! Fixed assistant texts and the job-aware opening message

use crate::types::{Amount, JobAnalysis, SalaryRange};
use crate::utils::{format_whole_currency, level_name};

pub const GENERIC_GREETING: &str = "Welcome to the Salary Intelligence Platform! Upload a job description to get started, or ask me any questions about compensation benchmarking.";

pub const FALLBACK_GREETING: &str = "Hello! I can help you analyze job descriptions and provide salary recommendations. How can I assist you today?";

pub const UNBOUND_REPLY: &str =
    "Please upload a job description first so I can provide specific salary recommendations.";

pub const SEND_FAILURE_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

pub const UPLOAD_FAILURE_REPLY: &str =
    "Failed to upload the file. Please ensure it's a valid PDF, DOCX, or text file.";

const MISSING: &str = "N/A";

const JOB_QUICK_ACTIONS: &[&str] = &[
    "Explain the salary calculation",
    "Compare to market rates",
    "What skills affect the salary?",
    "Geographic adjustments?",
    "Total compensation package?",
];

const GENERIC_QUICK_ACTIONS: &[&str] = &[
    "How does salary benchmarking work?",
    "What factors affect compensation?",
    "Upload job description",
];

pub fn uploading_notice(file_name: &str) -> String {
    format!("Uploading and analyzing {}...", file_name)
}

/// Canned prompts offered under the log
pub fn quick_actions(has_job: bool) -> &'static [&'static str] {
    if has_job {
        JOB_QUICK_ACTIONS
    } else {
        GENERIC_QUICK_ACTIONS
    }
}

/// Opening message for a conversation bound to an analysed job
pub fn job_greeting(job: &JobAnalysis, salary: &SalaryRange) -> String {
    let location = job.location.as_deref().unwrap_or(MISSING);
    let level = match job.detected_level {
        Some(level) => format!("{} ({})", level, level_name(level)),
        None => format!("{} ({})", MISSING, level_name(0)),
    };
    let experience = job
        .experience_range()
        .unwrap_or_else(|| MISSING.to_string());
    let skills = job.top_skills(3).join(", ");

    format!(
        "Hello! I'm analyzing the **{title}** position in {location}.

Based on my analysis:
• Level: {level}
• Experience: {experience}
• Key Skills: {skills}

**Recommended Salary Range:**
• Minimum: {min}
• Target: {target}
• Maximum: {max}

How can I help you understand this compensation analysis?",
        title = job.job_title,
        min = money(salary.recommended_min),
        target = money(salary.recommended_target),
        max = money(salary.recommended_max),
    )
}

fn money(amount: Option<Amount>) -> String {
    amount
        .map(|a| format_whole_currency(a.value()))
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobAnalysis {
        serde_json::from_value(serde_json::json!({
            "job_title": "Software Engineer",
            "location": "Remote",
            "detected_level": 5,
            "years_experience_min": 3,
            "years_experience_max": 6,
            "skills_extracted": ["Python", "SQL", "AWS", "Docker"]
        }))
        .unwrap()
    }

    fn sample_salary() -> SalaryRange {
        serde_json::from_value(serde_json::json!({
            "recommended_min": "90000",
            "recommended_target": "110000",
            "recommended_max": "130000"
        }))
        .unwrap()
    }

    #[test]
    fn test_job_greeting_interpolates_analysis() {
        let text = job_greeting(&sample_job(), &sample_salary());

        assert!(text.starts_with("Hello! I'm analyzing the **Software Engineer** position in Remote."));
        assert!(text.contains("• Level: 5 (Senior)"));
        assert!(text.contains("• Experience: 3-6 years"));
        assert!(text.contains("• Key Skills: Python, SQL, AWS\n"));
        assert!(!text.contains("Docker"));
        assert!(text.contains("• Minimum: $90,000"));
        assert!(text.contains("• Target: $110,000"));
        assert!(text.contains("• Maximum: $130,000"));
        assert!(text.ends_with("How can I help you understand this compensation analysis?"));
    }

    #[test]
    fn test_job_greeting_marks_missing_fields() {
        let job: JobAnalysis =
            serde_json::from_value(serde_json::json!({"job_title": "Designer"})).unwrap();
        let salary: SalaryRange = serde_json::from_value(serde_json::json!({})).unwrap();
        let text = job_greeting(&job, &salary);

        assert!(text.contains("position in N/A."));
        assert!(text.contains("• Level: N/A (Unknown)"));
        assert!(text.contains("• Minimum: N/A"));
    }

    #[test]
    fn test_quick_actions_depend_on_job() {
        assert_eq!(quick_actions(true).len(), 5);
        assert_eq!(quick_actions(false)[2], "Upload job description");
    }
}
