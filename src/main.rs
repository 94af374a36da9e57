//! payoff-sched command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Solve jobs read from stdin
//! payoff-sched < jobs.txt
//!
//! # Cross-check with the exhaustive oracle
//! payoff-sched jobs.txt --brute
//!
//! # JSON output with statistics
//! payoff-sched jobs.txt --format json --stats
//!
//! # Write a random instance
//! payoff-sched generate --count 20 --seed 7 > jobs.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use payoff_sched::generator::JobGenerator;
use payoff_sched::io::{load_jobs, render_jobs, render_json, render_kpi_text, render_text};
use payoff_sched::models::Job;
use payoff_sched::scheduler::{SelectionKpi, SolveMode, Solver, SolverConfig, TieBreak};
use payoff_sched::validation::validate_jobs;

fn cli() -> Command {
    Command::new("payoff-sched")
        .about("Selects non-overlapping jobs with maximum total payoff")
        .arg(
            arg!([INPUT] "Job file, one 'start finish payoff' per line ('-' or absent for stdin)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--brute "Use the brute-force oracle (payoff only)").action(ArgAction::SetTrue))
        .arg(
            arg!(--"prefer-take" "Take a job when taking and skipping tie")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--format <FORMAT> "Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(arg!(--stats "Print selection statistics").action(ArgAction::SetTrue))
        .subcommand(
            Command::new("generate")
                .about("Writes a random job instance to stdout")
                .arg(
                    arg!(--count <COUNT> "Number of jobs")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    arg!(--horizon <HORIZON> "Start times fall in 0..HORIZON")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("100"),
                )
                .arg(
                    arg!(--"max-duration" <MAX> "Longest job duration")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("20"),
                )
                .arg(
                    arg!(--"max-payoff" <MAX> "Largest payoff")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("100"),
                )
                .arg(
                    arg!(--seed <SEED> "RNG seed")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("0"),
                ),
        )
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(sub_m),
        Some((name, _)) => Err(anyhow!("Invalid subcommand: {name}")),
        None => run(&matches),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let jobs = read_jobs(matches.get_one::<PathBuf>("INPUT"))?;

    let mode = if matches.get_flag("brute") {
        SolveMode::BruteForce
    } else {
        SolveMode::Dynamic
    };
    let tie_break = if matches.get_flag("prefer-take") {
        TieBreak::PreferTake
    } else {
        TieBreak::PreferSkip
    };
    let solver = Solver::new(SolverConfig::new().with_mode(mode).with_tie_break(tie_break));

    let job_set = solver.prepare(jobs)?;
    warn_on_invalid(&job_set);
    let selection = solver.solve_set(&job_set)?;
    let kpi = matches
        .get_flag("stats")
        .then(|| SelectionKpi::calculate(&selection, &job_set));

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", render_json(&selection, kpi.as_ref())?),
        _ => {
            if mode == SolveMode::BruteForce {
                println!("Using brute force.");
            }
            print!("{}", render_text(&selection));
            if let Some(kpi) = &kpi {
                print!("{}", render_kpi_text(kpi));
            }
        }
    }

    Ok(())
}

fn generate(matches: &ArgMatches) -> Result<()> {
    let generator = JobGenerator::new(*matches.get_one::<usize>("count").context("count")?)
        .with_horizon(*matches.get_one::<i64>("horizon").context("horizon")?)
        .with_max_duration(*matches.get_one::<i64>("max-duration").context("max-duration")?)
        .with_payoff_range(1, *matches.get_one::<i64>("max-payoff").context("max-payoff")?)
        .with_seed(*matches.get_one::<u64>("seed").context("seed")?);

    print!("{}", render_jobs(&generator.generate()));
    Ok(())
}

fn read_jobs(path: Option<&PathBuf>) -> Result<Vec<Job>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(load_jobs(BufReader::new(file))?)
        }
        _ => Ok(load_jobs(io::stdin().lock())?),
    }
}

fn warn_on_invalid(jobs: &[Job]) {
    if let Err(errors) = validate_jobs(jobs) {
        for error in &errors {
            warn!("{}", error.message);
        }
    }
}
