use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::catalog::Catalog;
use crate::scoring::Decision;
use crate::store::{AssessmentRecord, SummaryStats};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a dollar amount in compact notation ($2.5M, $150k, $900)
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Short decision label for table cells ("PURSUE WITH HIGH MARGIN" -> "HIGH")
pub fn short_decision(decision: Decision) -> &'static str {
    match decision {
        Decision::Decline => "DECLINE",
        Decision::PursueHighMargin => "HIGH",
        Decision::PursueModerateMargin => "MODERATE",
        Decision::PursueStandardMargin => "STANDARD",
    }
}

fn colored_decision(decision: Decision, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match decision {
        Decision::Decline => text.red().to_string(),
        Decision::PursueHighMargin => text.yellow().to_string(),
        Decision::PursueModerateMargin => text.cyan().to_string(),
        Decision::PursueStandardMargin => text.green().to_string(),
    }
}

/// Format the assessment listing as a table, one row per record.
pub fn format_record_table(records: &[AssessmentRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No assessments recorded yet. Run `wcc-assess assess` to create one.".to_string();
    }

    let client_width = client_column_width();
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header = format!(
        "{:<19}  {:<width$}  {:>10}  {:<8}  {:<11}  {:<11}  {:>5}  {}",
        "DATE",
        "CLIENT",
        "VALUE",
        "DECISION",
        "CLIENT CAT",
        "WORK CAT",
        "SCORE",
        "ID",
        width = client_width,
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for record in records {
        let date = record.timestamp.format("%Y-%m-%d %H:%M").to_string();
        let client = truncate(or_na(&record.project_info.client_name), client_width);
        let value = truncate(or_na(&record.project_info.value), 10);
        let decision = short_decision(record.result.decision);
        let score = format!("{}/60", record.result.total_score);

        lines.push(format!(
            "{:<19}  {:<width$}  {:>10}  {}  {:<11}  {:<11}  {:>5}  {}",
            date,
            client,
            value,
            colored_decision(
                record.result.decision,
                &format!("{:<8}", decision),
                use_colors
            ),
            record.result.client_category.as_str(),
            record.result.work_category.as_str(),
            score,
            record.id,
            width = client_width,
        ));
    }

    lines.join("\n")
}

/// Full multi-line view of a single assessment, for `show`.
pub fn format_record_detail(
    record: &AssessmentRecord,
    catalog: &Catalog,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    let heading = format!("Assessment {}", record.id);
    if use_colors {
        out.push_str(&heading.bold().to_string());
    } else {
        out.push_str(&heading);
    }
    out.push('\n');
    out.push_str(&format!(
        "  Recorded: {}\n",
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    let info = &record.project_info;
    out.push_str(&format!("  Client: {}\n", or_na(&info.client_name)));
    out.push_str(&format!("  Work scope: {}\n", or_na(&info.work_scope)));
    out.push_str(&format!("  Work type: {}\n", or_na(&info.work_type)));
    out.push_str(&format!("  Location: {}\n", or_na(&info.location)));
    out.push_str(&format!("  Value: {}\n", or_na(&info.value)));
    out.push_str(&format!("  Assessed by: {}\n", or_na(&info.assessed_by)));

    out.push_str("\nScreening\n");
    let screening = &record.screening_answers;
    out.push_str(&format!(
        "  Within WA & cost-effective: {}\n",
        yes_no(screening.within_wa)
    ));
    out.push_str(&format!(
        "  Aligns with services: {}\n",
        yes_no(screening.aligns_with_services)
    ));
    out.push_str(&format!(
        "  Meets compliance: {}\n",
        yes_no(screening.meets_compliance)
    ));

    out.push_str("\nScores\n");
    for q in &catalog.questions {
        let value = q.key.value_in(&record.assessment_scores);
        out.push_str(&format!("  {}: {}/5\n", q.question.trim_end_matches('?'), value));
    }

    let result = &record.result;
    out.push_str("\nResult\n");
    out.push_str(&format!(
        "  Decision: {}\n",
        colored_decision(result.decision, result.decision.as_str(), use_colors)
    ));
    if let Some(reason) = &result.reason {
        out.push_str(&format!("  Reason: {}\n", reason));
    }
    out.push_str(&format!("  Margin guidance: {}\n", result.margin_guidance));
    out.push_str(&format!(
        "  Client: {} ({}/25)   Work: {} ({}/35)   Total: {}/60\n",
        result.client_category.as_str(),
        result.client_score,
        result.work_category.as_str(),
        result.work_score,
        result.total_score
    ));

    out
}

/// Summary statistics block for the `stats` subcommand.
pub fn format_stats(stats: &SummaryStats, use_colors: bool) -> String {
    let mut out = String::new();

    let heading = "Assessment summary";
    if use_colors {
        out.push_str(&heading.bold().to_string());
    } else {
        out.push_str(heading);
    }
    out.push('\n');

    out.push_str(&format!("  Total assessments: {}\n", stats.total));
    out.push_str(&format!("  Approved: {}\n", stats.approved));
    out.push_str(&format!("  Declined: {}\n", stats.declined));
    out.push_str(&format!(
        "  Combined value: {}\n",
        format_currency(stats.total_value)
    ));
    out.push_str(&format!("  Average score: {}/60\n", stats.avg_score));

    out.push_str("\nClient categories\n");
    out.push_str(&format_tier_line(
        stats.client_categories.development,
        stats.client_categories.leverage,
        stats.client_categories.nuisance,
        stats.client_categories.avoid,
    ));
    out.push_str("\nWork categories\n");
    out.push_str(&format_tier_line(
        stats.work_categories.development,
        stats.work_categories.leverage,
        stats.work_categories.nuisance,
        stats.work_categories.avoid,
    ));

    if !stats.decisions.is_empty() {
        out.push_str("\nDecisions\n");
        for (decision, count) in &stats.decisions {
            out.push_str(&format!("  {}: {}\n", decision, count));
        }
    }

    out
}

fn format_tier_line(development: usize, leverage: usize, nuisance: usize, avoid: usize) -> String {
    format!(
        "  Development: {}   Leverage: {}   Nuisance: {}   Avoid: {}\n",
        development, leverage, nuisance, avoid
    )
}

fn or_na(text: &str) -> &str {
    if text.trim().is_empty() {
        "N/A"
    } else {
        text
    }
}

fn yes_no(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Unanswered",
    }
}

/// Column width for client names, derived from terminal width when available.
fn client_column_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if (w as usize) > 120 => 30,
        Some((Width(w), _)) if (w as usize) < 100 => 14,
        _ => 20,
    }
}

/// Truncate a cell to fit its column, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else {
        let mut truncated: String = chars[..max_width.saturating_sub(1)].iter().collect();
        truncated.push('…');
        truncated
    }
}
