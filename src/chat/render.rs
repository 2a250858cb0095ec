// src/chat/render.rs
//! Terminal rendering of chat messages.
//!
//! Assistant replies use a light markdown-ish convention: `**heading**`
//! lines, `• ` or `- ` bullets, dollar figures and status emoji.

use super::message::{Message, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Bullet,
    Money,
    Notice,
    Code,
    Plain,
}

pub fn classify_line(line: &str) -> LineStyle {
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        LineStyle::Heading
    } else if line.starts_with("• ") || line.starts_with("- ") {
        LineStyle::Bullet
    } else if line.contains('$') {
        LineStyle::Money
    } else if line.starts_with("⚠️") || line.starts_with('❌') || line.starts_with('✅') {
        LineStyle::Notice
    } else if line.starts_with('[') && line.ends_with(']') {
        LineStyle::Code
    } else {
        LineStyle::Plain
    }
}

fn render_line(line: &str) -> String {
    match classify_line(line) {
        LineStyle::Heading => line.replace("**", "").to_uppercase(),
        LineStyle::Bullet => {
            let body = line
                .strip_prefix("• ")
                .or_else(|| line.strip_prefix("- "))
                .unwrap_or(line);
            format!("  • {}", body)
        }
        LineStyle::Code => format!("    {}", line),
        LineStyle::Money | LineStyle::Notice | LineStyle::Plain => line.to_string(),
    }
}

pub fn render_message(message: &Message) -> String {
    if message.is_typing {
        let notice = if message.content.is_empty() {
            "..."
        } else {
            message.content.as_str()
        };
        return format!("assistant> {}", notice);
    }

    let prefix = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    let body = message
        .content
        .lines()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}> {}", prefix, body)
}
