use clap::{Parser, Subcommand, ValueEnum};

use clinscore::SelectionSet;
use clinscore::registry::{all_scorers, scorer_by_id};
use clinscore::report::ScoreReport;
use clinscore::report::json::{render_criteria_json, render_report_json, render_scorer_list_json};
use clinscore::report::text::{render_criteria_text, render_report_text, render_scorer_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "clinscore", version, about = "Clinical risk score calculators", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// List available scorers
    Scorers,
    /// List the criteria of one scorer
    Criteria {
        /// cpssmol | wells | spesi | cmml-prerequisites
        scorer: String,
    },
    /// Score a set of selected criterion ids
    Evaluate {
        scorer: String,
        /// Selected criterion ids; may be empty
        ids: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    clinscore::tracing::init(cli.verbose);
    match run(&cli) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    match &cli.command {
        Command::Scorers => match cli.format {
            OutputFormat::Text => Ok(render_scorer_list(all_scorers())),
            OutputFormat::Json => {
                render_scorer_list_json(all_scorers()).map(with_newline).map_err(|e| e.to_string())
            }
        },
        Command::Criteria { scorer } => {
            let scorer = scorer_by_id(scorer).map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Text => Ok(render_criteria_text(scorer)),
                OutputFormat::Json => render_criteria_json(scorer)
                    .map(with_newline)
                    .map_err(|e| e.to_string()),
            }
        }
        Command::Evaluate { scorer, ids } => {
            let scorer = scorer_by_id(scorer).map_err(|e| e.to_string())?;
            let selection: SelectionSet = ids.iter().map(String::as_str).collect();
            let result = scorer.evaluate(&selection).map_err(|e| e.to_string())?;
            tracing::info!(scorer = %result.scorer, category = result.category.label, "scored");
            let report = ScoreReport::new(scorer, &selection, &result);
            match cli.format {
                OutputFormat::Text => Ok(render_report_text(&report)),
                OutputFormat::Json => render_report_json(&report)
                    .map(with_newline)
                    .map_err(|e| e.to_string()),
            }
        }
    }
}

fn with_newline(mut s: String) -> String {
    s.push('\n');
    s
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
