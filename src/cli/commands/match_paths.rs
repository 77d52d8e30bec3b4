//! Match command - rank compiled outputs against a source path

use crate::cli::args::{MatchArgs, OutputFormat};
use crate::config::Config;
use crate::error::HostrunResult;
use crate::project::{rank_candidates, ScoredCandidate};
use console::style;

/// Execute the match command
pub async fn execute(args: MatchArgs, _config: &Config) -> HostrunResult<()> {
    let ranked = rank_candidates(&args.reference, &args.candidates);

    match args.format {
        OutputFormat::Table => print_table(&ranked),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Plain => {
            if let Some(best) = ranked.first() {
                println!("{}", best.path.display());
            }
        }
    }

    Ok(())
}

fn print_table(ranked: &[ScoredCandidate<'_>]) {
    println!("{:<7} {}", style("SCORE").bold(), style("CANDIDATE").bold());
    println!("{}", "-".repeat(40));

    for (i, candidate) in ranked.iter().enumerate() {
        let path = candidate.path.display().to_string();
        if i == 0 {
            println!("{:<7} {} {}", candidate.score, style(path).green(), style("(selected)").dim());
        } else {
            println!("{:<7} {}", candidate.score, path);
        }
    }
}
