//! Interactive questionnaire driving a single assessment.
//!
//! The wizard owns no persistence and reads no ambient state: it collects
//! answers into local values, snapshots them once for the scoring engine,
//! and hands the finished bundle back to the caller to save.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::Local;

use crate::catalog::{Catalog, Category, QuestionDef};
use crate::scoring::{evaluate, AssessmentScores, ScreeningAnswers};
use crate::store::{AssessmentDraft, ProjectInfo};

/// Run the full questionnaire and return the completed, evaluated bundle.
///
/// Screening failures still produce a bundle: the engine returns its decline
/// result and the assessment is recorded like any other.
pub fn run_wizard(
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<AssessmentDraft> {
    writeln!(out, "WCC project assessment")?;
    writeln!(out)?;

    let project_info = collect_project_info(catalog, input, out)?;
    let screening_answers = collect_screening(input, out)?;

    let assessment_scores = if screening_answers.all_passed() {
        collect_scores(catalog, input, out)?
    } else {
        writeln!(out)?;
        writeln!(
            out,
            "Screening not passed; skipping scored questions. The assessment will be recorded as a decline."
        )?;
        AssessmentScores::default()
    };

    let result = evaluate(&screening_answers, &assessment_scores);

    Ok(AssessmentDraft {
        project_info,
        screening_answers,
        assessment_scores,
        result,
    })
}

fn collect_project_info(
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<ProjectInfo> {
    writeln!(out, "Step 1 of 3: project details (Enter to skip any)")?;

    let work_scope = prompt_line(input, out, "Work scope")?;
    let client_name = prompt_line(input, out, "Client name")?;
    let location = prompt_pick_list(input, out, "Location", &catalog.locations)?;
    let work_type = prompt_pick_list(input, out, "Work type", &catalog.work_types)?;
    let value = prompt_line(input, out, "Approximate value (e.g. $2.5M, 150k)")?;
    let assessed_by = prompt_line(input, out, "Assessed by")?;

    Ok(ProjectInfo {
        work_scope,
        client_name,
        location,
        work_type,
        value,
        assessed_by,
        assessment_date: Local::now().format("%-m/%-d/%Y").to_string(),
    })
}

fn collect_screening(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<ScreeningAnswers> {
    writeln!(out)?;
    writeln!(out, "Step 2 of 3: screening (all must be yes to proceed)")?;

    Ok(ScreeningAnswers {
        within_wa: Some(prompt_yes_no(
            input,
            out,
            "Is the project within WA and cost-effective to service?",
        )?),
        aligns_with_services: Some(prompt_yes_no(
            input,
            out,
            "Does the work align with WCC services?",
        )?),
        meets_compliance: Some(prompt_yes_no(
            input,
            out,
            "Can we meet all compliance requirements?",
        )?),
    })
}

fn collect_scores(
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<AssessmentScores> {
    writeln!(out)?;
    writeln!(out, "Step 3 of 3: weighted questions (1-5, Enter to skip)")?;

    let mut scores = AssessmentScores::default();

    for category in [Category::Client, Category::Work] {
        writeln!(out)?;
        writeln!(out, "-- {} questions --", category.as_str())?;
        for question in catalog.questions_in(category) {
            let value = prompt_score(input, out, question)?;
            question.key.assign(&mut scores, value);
        }
    }

    Ok(scores)
}

fn prompt_line(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<String> {
    write!(out, "{}: ", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Numbered pick list. Accepts an option number, literal text, or blank.
fn prompt_pick_list(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    options: &[String],
) -> Result<String> {
    writeln!(out, "{}:", prompt)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, option)?;
    }

    loop {
        write!(out, "Choose 1-{} (or type a value): ", options.len())?;
        out.flush()?;

        let answer = read_line(input)?;
        if answer.is_empty() {
            return Ok(String::new());
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].clone()),
            Ok(_) => {
                writeln!(out, "Out of range.")?;
            }
            Err(_) => return Ok(answer),
        }
    }
}

fn prompt_yes_no(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<bool> {
    loop {
        write!(out, "{} [y/n]: ", prompt)?;
        out.flush()?;

        match read_line(input)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                writeln!(out, "Please answer y or n.")?;
            }
        }
    }
}

fn prompt_score(
    input: &mut impl BufRead,
    out: &mut impl Write,
    question: &QuestionDef,
) -> Result<u8> {
    writeln!(out)?;
    writeln!(out, "{}", question.question)?;
    for option in &question.options {
        writeln!(out, "  {}: {}", option.value, option.label)?;
    }

    loop {
        write!(out, "Score 1-5: ")?;
        out.flush()?;

        let answer = read_line(input)?;
        if answer.is_empty() {
            // Unanswered stays 0 and counts for nothing.
            return Ok(0);
        }
        match answer.parse::<u8>() {
            Ok(v) if (1..=5).contains(&v) => return Ok(v),
            _ => {
                writeln!(out, "Enter a number from 1 to 5, or leave blank to skip.")?;
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if bytes == 0 {
        anyhow::bail!("Input ended before the assessment was complete");
    }
    Ok(line.trim().to_string())
}
