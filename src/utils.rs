// src/utils.rs
use std::path::Path;

/// Extensions the upload picker offers. Advisory only; nothing downstream re-checks.
pub const ACCEPTED_UPLOAD_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Format a dollar amount the way en-US currency formatting does with no
/// fraction digits: `90000.0` -> `$90,000`, `-1500.4` -> `-$1,500`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Integer-parse semantics: the fractional part is dropped, not rounded
pub fn format_whole_currency(value: f64) -> String {
    format_currency(value.trunc())
}

/// Render a `[0, 1]` fraction as a whole percentage
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = n / 1000;
        if rest == 0 {
            groups.push(format!("{}", n % 1000));
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n = rest;
    }
    groups.reverse();
    groups.join(",")
}

/// Human label for a detected job level
pub fn level_name(level: u8) -> &'static str {
    match level {
        1 => "Entry Level",
        2 => "Junior",
        3 => "Mid-Level",
        4 => "Experienced",
        5 => "Senior",
        6 => "Lead",
        7 => "Staff/Principal",
        8 => "Director",
        9 => "VP",
        10 => "C-Level",
        _ => "Unknown",
    }
}

/// Location the page is replaced with once an upload has produced a job
pub fn navigation_target(job_id: &str) -> String {
    format!("/?job={}", job_id)
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub fn is_accepted_upload(filename: &str) -> bool {
    get_file_extension(filename)
        .map(|ext| ACCEPTED_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Content type for the multipart `file` field
pub fn upload_content_type(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
