//! Retrieve handler: closest-entry search and its report

use colored::Colorize;

use crate::collection::Collection;
use crate::matcher::{MatchOutcome, Matcher};

/// Search `collection` for `query` and render the outcome.
pub fn retrieve(matcher: &Matcher, collection: &Collection, query: &str) -> String {
    let outcome = matcher.find_closest(query, collection);
    format_outcome(query, &outcome)
}

/// Render a match outcome.
pub fn format_outcome(query: &str, outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Empty => "No match found; database is empty".yellow().to_string(),
        MatchOutcome::ExactMatch(entry) => format!("Perfect match found; {} is in database", entry)
            .green()
            .to_string(),
        MatchOutcome::RankedMatches(matches) => {
            let mut output = format!(
                "{}\n",
                format!("No perfect match found; {} is not in database", query).yellow()
            );
            output.push_str(&format!("{}\n", "Best matches:".bold()));
            output.push_str("Distance\tString\n");
            for m in matches {
                output.push_str(&format!(
                    "{}\t\t{}\n",
                    m.distance.to_string().yellow(),
                    m.entry.cyan()
                ));
            }
            output.trim_end().to_string()
        }
    }
}
