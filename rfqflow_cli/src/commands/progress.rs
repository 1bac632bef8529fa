use anyhow::{Context, Result};
use rfqflow_core::{Deriver, NextPolicy, Plan, WorkflowProgress, WorkflowRecord};
use std::path::Path;

use crate::config::Config;
use crate::record_loader;

pub fn run<P: AsRef<Path>>(
    input: P,
    plan: Option<Plan>,
    policy: Option<NextPolicy>,
    json: bool,
) -> Result<()> {
    let config = Config::resolve(plan, policy)?;
    let deriver = Deriver::new(config.plan, config.policy);

    let records = record_loader::load(input)?;

    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    let derived: Vec<(&WorkflowRecord, WorkflowProgress)> = records
        .iter()
        .map(|record| (record, deriver.derive(record)))
        .collect();

    if json {
        let progress: Vec<&WorkflowProgress> = derived.iter().map(|(_, p)| p).collect();
        let output = if let [single] = progress.as_slice() {
            serde_json::to_string_pretty(single)
        } else {
            serde_json::to_string_pretty(&progress)
        }
        .context("Failed to serialize progress")?;

        println!("{}", output);
        return Ok(());
    }

    for (record, progress) in &derived {
        println!("{}", render(record, progress));
    }

    Ok(())
}

/// Human-readable table: ✓ for done, ▶ for the next milestone.
pub fn render(record: &WorkflowRecord, progress: &WorkflowProgress) -> String {
    let mut lines = vec![format!(
        "{}  [{} / {}]  {}% ({} of {} completed)",
        record.display_name(),
        progress.plan,
        progress.policy,
        progress.progress_percent,
        progress.completed_count,
        progress.total
    )];

    let label_width = progress
        .milestones
        .iter()
        .map(|m| m.label.len())
        .max()
        .unwrap_or(0);

    for (idx, milestone) in progress.milestones.iter().enumerate() {
        let marker = if milestone.done {
            "✓"
        } else if milestone.is_next {
            "▶"
        } else {
            " "
        };

        let mut details = Vec::new();
        if milestone.done {
            details.extend(milestone.date.iter().cloned());
            details.extend(milestone.info.iter().cloned());
        }
        if milestone.is_next {
            details.push("NEXT".to_string());
        }

        let line = format!(
            "  {} {:>2}. {:<width$}  {}",
            marker,
            idx + 1,
            milestone.label,
            details.join("  "),
            width = label_width
        );
        lines.push(line.trim_end().to_string());
    }

    if progress.complete {
        lines.push("Workflow complete!".to_string());
    } else {
        lines.push(format!("{} steps remaining", progress.remaining));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
