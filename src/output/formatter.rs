use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::input::Snapshot;
use crate::record::SubmissionRecord;
use crate::scoring::{CalculationResult, Degree};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Report palette, one color per degree. Matches the printed report
/// renderer: green, yellow, orange, red.
fn degree_rgb(degree: Degree) -> (u8, u8, u8) {
    match degree {
        Degree::Zero => (34, 197, 94),
        Degree::One => (234, 179, 8),
        Degree::Two => (249, 115, 22),
        Degree::Three => (239, 68, 68),
    }
}

/// Guidance line shown next to the overall result.
pub fn degree_comment(degree: Degree) -> &'static str {
    match degree {
        Degree::Zero => "No signs of locomotive syndrome. Keep up your current level of activity.",
        Degree::One => {
            "Decline in mobility is beginning. Work on maintaining muscle strength and balance."
        }
        Degree::Two => {
            "Decline in mobility is progressing. Countermeasures are needed to stay independent."
        }
        Degree::Three => {
            "Daily and social activities may be affected. Consulting a specialist is recommended."
        }
    }
}

fn degree_badge(degree: Degree, use_colors: bool) -> String {
    let badge = format!("Degree {}", degree);
    if use_colors {
        let (r, g, b) = degree_rgb(degree);
        badge.truecolor(r, g, b).bold().to_string()
    } else {
        badge
    }
}

/// Format the full assessment as a multi-line terminal report.
pub fn format_report(snapshot: &Snapshot, result: &CalculationResult, use_colors: bool) -> String {
    let info = &snapshot.basic_info;
    let header = if info.company_name.is_empty() {
        format!("{} ({}, {})", info.user_name, info.age, info.gender.as_str())
    } else {
        format!(
            "{} ({}, {}) - {}",
            info.user_name,
            info.age,
            info.gender.as_str(),
            info.company_name
        )
    };

    let mut lines = Vec::new();
    lines.push("Locomotive Syndrome Check".to_string());
    lines.push(header);
    lines.push(format!("Height: {} cm", info.height_cm));
    lines.push(String::new());
    lines.push(format!(
        "  Stand-up   {}  {}",
        degree_badge(result.stand_up_degree, use_colors),
        result.stand_up_reason
    ));
    lines.push(format!(
        "  Two-step   {}  value {:.2} (best of {} / {} cm)",
        degree_badge(result.two_step_degree, use_colors),
        result.two_step_value,
        snapshot.two_step_test.step1_cm,
        snapshot.two_step_test.step2_cm
    ));
    lines.push(format!(
        "  Locomo25   {}  score {}/100 ({} of 25 answered)",
        degree_badge(result.locomo25_degree, use_colors),
        result.locomo25_score,
        snapshot.locomo25_answers.answered_count()
    ));
    lines.push(String::new());
    lines.push(format!(
        "  Overall    {}",
        degree_badge(result.final_degree, use_colors)
    ));
    lines.push(format!("  {}", degree_comment(result.final_degree)));

    lines.join("\n")
}

/// Format the submission record as pretty-printed JSON.
pub fn format_json(record: &SubmissionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Format the submission record as a single tab-separated row for
/// scripting (no headers, no colors). Unanswered questionnaire items are
/// left empty in the comma-joined answers column.
pub fn format_tsv(record: &SubmissionRecord) -> String {
    let answers = record
        .locomo25_answers
        .iter()
        .map(|a| a.map(|v| v.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.2}\t{}\t{}\t{}\t{}",
        record.date,
        record.name,
        record.age,
        record.gender.as_str(),
        record.height,
        record.stand_up_both,
        record.stand_up_single_right,
        record.stand_up_single_left,
        record.stand_up_score,
        record.two_step1_cm,
        record.two_step2_cm,
        record.two_step_score,
        record.two_step_degree,
        answers,
        record.locomo25_score,
        record.locomo_level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::template;
    use crate::scoring::calculate_result;

    fn sample() -> (Snapshot, CalculationResult) {
        let snapshot: Snapshot = serde_saphyr::from_str(template::template_str()).unwrap();
        let result = calculate_result(&snapshot);
        (snapshot, result)
    }

    #[test]
    fn test_format_report_plain() {
        let (snapshot, result) = sample();
        let report = format_report(&snapshot, &result, false);
        assert!(report.contains("Taro Yamada"));
        assert!(report.contains("Height: 165 cm"));
        assert!(report.contains("Stand-up   Degree 1"));
        assert!(report.contains("value 1.11"));
        assert!(report.contains("score 13/100"));
        assert!(report.contains("23 of 25 answered"));
        assert!(report.contains("Overall    Degree 1"));
        assert!(report.contains("Decline in mobility is beginning"));
    }

    #[test]
    fn test_format_report_value_always_two_decimals() {
        let (mut snapshot, _) = sample();
        snapshot.two_step_test = crate::input::TwoStepTest {
            step1_cm: 160.0,
            step2_cm: 150.0,
        };
        snapshot.basic_info.height_cm = 160.0;
        let result = calculate_result(&snapshot);
        let report = format_report(&snapshot, &result, false);
        assert!(report.contains("value 1.00"));
    }

    #[test]
    fn test_format_report_colored_keeps_content() {
        let (snapshot, result) = sample();
        let colored = format_report(&snapshot, &result, true);
        assert!(colored.contains("Taro Yamada"));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_format_json_round_trips() {
        let (snapshot, result) = sample();
        let record =
            SubmissionRecord::build(&snapshot, &result, "2026/08/27 12:00:00".to_string());
        let json = format_json(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Taro Yamada");
        assert_eq!(value["locomoLevel"], 1);
    }

    #[test]
    fn test_format_tsv_columns() {
        let (snapshot, result) = sample();
        let record =
            SubmissionRecord::build(&snapshot, &result, "2026/08/27 12:00:00".to_string());
        let tsv = format_tsv(&record);
        let columns: Vec<&str> = tsv.split('\t').collect();
        assert_eq!(columns.len(), 16);
        assert_eq!(columns[0], "2026/08/27 12:00:00");
        assert_eq!(columns[1], "Taro Yamada");
        assert_eq!(columns[5], "20cm");
        // Unanswered items stay empty between commas.
        assert!(columns[13].contains(",,") || columns[13].ends_with(','));
        assert_eq!(columns[15], "1");
    }
}
