use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_VALIDATION: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess a completed check snapshot and print the result
    Assess {
        /// Path to the snapshot file (.yaml or .json)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Print a sample snapshot file to start from
    Template {
        /// Write to this path instead of stdout
        path: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    /// Colored terminal report
    Text,
    /// Submission record as pretty JSON
    Json,
    /// Submission record as a single tab-separated row
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "locomo-check")]
#[command(about = "Locomotive function risk assessment CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess { file, output } => assess(&file, output, cli.verbose),
        Commands::Template { path } => template(path.as_deref()),
    }
}

fn assess(file: &std::path::Path, output: OutputFormat, verbose: bool) {
    let snapshot = match locomo_check::input::load_snapshot(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        eprintln!("Loaded snapshot from {}", file.display());
        eprintln!(
            "  Subject: {} ({} cm), {} of 25 questionnaire items answered",
            snapshot.basic_info.user_name,
            snapshot.basic_info.height_cm,
            snapshot.locomo25_answers.answered_count()
        );
    }

    if let Err(errors) = locomo_check::scoring::validate_snapshot(&snapshot) {
        eprintln!("Snapshot errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_VALIDATION);
    }

    let result = locomo_check::scoring::calculate_result(&snapshot);

    if verbose {
        eprintln!(
            "Sub-test degrees: stand-up={}, two-step={}, locomo25={}",
            result.stand_up_degree, result.two_step_degree, result.locomo25_degree
        );
    }

    match output {
        OutputFormat::Text => {
            let use_colors = locomo_check::output::should_use_colors();
            println!(
                "{}",
                locomo_check::output::format_report(&snapshot, &result, use_colors)
            );
        }
        OutputFormat::Json => {
            let record = locomo_check::record::SubmissionRecord::build(
                &snapshot,
                &result,
                locomo_check::record::current_date_time(),
            );
            match locomo_check::output::format_json(&record) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize record: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        OutputFormat::Tsv => {
            let record = locomo_check::record::SubmissionRecord::build(
                &snapshot,
                &result,
                locomo_check::record::current_date_time(),
            );
            println!("{}", locomo_check::output::format_tsv(&record));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn template(path: Option<&std::path::Path>) {
    match path {
        Some(path) => {
            if let Err(e) = locomo_check::input::template::write_template(path) {
                eprintln!("Template error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
            println!("Wrote sample snapshot to {}", path.display());
        }
        None => {
            print!("{}", locomo_check::input::template::template_str());
        }
    }
}
