use anyhow::Result;
use rfqflow_core::{NextPolicy, Plan};

pub fn list() -> Result<()> {
    print!("{}", render());
    Ok(())
}

/// Every plan with its milestones, then the next-action policies.
pub fn render() -> String {
    let mut lines = vec![format!("Milestone plans ({}):", Plan::ALL.len()), String::new()];

    for plan in Plan::ALL {
        lines.push(plan.to_string());
        for (idx, milestone) in plan.milestones().iter().enumerate() {
            let chain = if milestone.chained { "  (chain)" } else { "" };
            lines.push(format!(
                "  {:>2}. {:<10} {}{}",
                idx + 1,
                milestone.key,
                milestone.label,
                chain
            ));
        }
        lines.push(String::new());
    }

    lines.push("Next-action policies:".to_string());
    for policy in NextPolicy::ALL {
        let summary = match policy {
            NextPolicy::FirstGap => "earliest milestone not yet done",
            NextPolicy::StrictChain => "earliest missing link in the (chain) milestones",
        };
        lines.push(format!("  {:<13} {}", policy, summary));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
