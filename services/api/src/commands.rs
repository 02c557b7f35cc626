use crate::routes::FlamesResponse;
use clap::Args;
use flames::batch::{BatchEntry, BatchScorer, BatchSummary};
use flames::calculator::Reading;
use flames::error::AppError;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ComputeArgs {
    /// First name (any text; only ASCII letters count)
    pub(crate) name1: String,
    /// Second name
    pub(crate) name2: String,
    /// Show normalized names, leftover letters and each elimination step
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the JSON body the HTTP API would return
    #[arg(long, conflicts_with = "explain")]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with `name1,name2` columns
    pub(crate) path: PathBuf,
    /// Append counts per outcome after the listing
    #[arg(long)]
    pub(crate) summary: bool,
}

pub(crate) fn run_compute(args: ComputeArgs) -> Result<(), AppError> {
    let ComputeArgs {
        name1,
        name2,
        explain,
        json,
    } = args;

    let reading = flames::evaluate(&name1, &name2);

    if json {
        let body = FlamesResponse::from_reading(reading, true);
        let rendered = serde_json::to_string_pretty(&body).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else if explain {
        print!("{}", render_explanation(&reading));
    } else {
        println!("{}", reading.outcome);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let entries = BatchScorer::from_path(&args.path)?;
    print!("{}", render_batch(&entries));

    if args.summary {
        print!("{}", render_summary(&BatchSummary::from_entries(&entries)));
    }

    Ok(())
}

fn render_explanation(reading: &Reading) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Normalized: {:?} / {:?}",
        reading.first.as_str(),
        reading.second.as_str()
    );

    match (reading.remaining(), reading.tally()) {
        (Some(remaining), Some(tally)) => {
            let _ = writeln!(
                out,
                "Remaining letters: {:?} / {:?} (tally {tally})",
                remaining.first, remaining.second
            );
        }
        _ => {
            let _ = writeln!(out, "Remaining letters: n/a");
        }
    }

    for (number, step) in reading.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "Step {}: removed {} at index {} of {}",
            number + 1,
            step.removed.letter(),
            step.remove_index,
            step.wheel_len
        );
    }

    let _ = writeln!(out, "{}", reading.outcome);
    out
}

fn render_batch(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}. {} + {} -> {}",
            entry.row, entry.name1, entry.name2, entry.message
        );
    }
    out
}

fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSummary ({} pairs)", summary.total);
    for count in &summary.categories {
        let _ = writeln!(out, "- {}: {}", count.label, count.count);
    }
    let _ = writeln!(out, "- Fully matched: {}", summary.fully_matched);
    let _ = writeln!(out, "- Invalid input: {}", summary.invalid_input);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn explanation_lists_every_step() {
        let text = render_explanation(&flames::evaluate("David", "Maria"));
        assert!(text.contains(r#"Normalized: "david" / "maria""#));
        assert!(text.contains(r#"Remaining letters: "dvd" / "mra" (tally 6)"#));
        assert!(text.contains("Step 1: removed S at index 5 of 6"));
        assert!(text.contains("Step 5: removed E at index 1 of 2"));
        assert!(text.ends_with("Your relationship: Marriage (M)\n"));
    }

    #[test]
    fn explanation_of_invalid_input_has_no_steps() {
        let text = render_explanation(&flames::evaluate("", "Maria"));
        assert!(text.contains("Remaining letters: n/a"));
        assert!(!text.contains("Step"));
    }

    #[test]
    fn batch_listing_and_summary_render() {
        let entries = BatchScorer::from_reader(Cursor::new("name1,name2\nDavid,Maria\nab,ba\n"))
            .expect("pairs parse");

        let listing = render_batch(&entries);
        assert!(listing.contains("1. David + Maria -> Your relationship: Marriage (M)"));
        assert!(listing.contains("2. ab + ba -> All letters matched"));

        let summary = render_summary(&BatchSummary::from_entries(&entries));
        assert!(summary.contains("Summary (2 pairs)"));
        assert!(summary.contains("- Marriage: 1"));
        assert!(summary.contains("- Fully matched: 1"));
    }

    #[test]
    fn json_body_includes_trace() {
        let body = FlamesResponse::from_reading(flames::evaluate("Alice", "Bob"), true);
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["label"], serde_json::json!("Affection"));
        assert_eq!(value["steps"].as_array().map(Vec::len), Some(5));
    }
}
