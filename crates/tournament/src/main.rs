//! Tournament CLI
//!
//! Plan a tournament from a TOML config, or dry-run it with simulated scores.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Result};
use tournament::{init_telemetry, MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tournament_core::{advancing_options, suggest_group_count, Tournament, MAX_TEAMS, MIN_TEAMS};

fn print_usage() {
    println!("Tournament Planner");
    println!();
    println!("Usage:");
    println!("  tournament plan <config.toml> [--out schedule.csv]");
    println!("  tournament simulate <config.toml> [--seed N] [--max-goals G]");
    println!("                      [--standings standings.csv] [--save results.json]");
    println!("  tournament suggest <num_teams>");
    println!();
    println!("Examples:");
    println!("  tournament plan demos/summer_cup.toml --out schedule.csv");
    println!("  tournament simulate demos/summer_cup.toml --seed 7 --save results.json");
    println!("  tournament suggest 12");
}

/// Value following a flag, e.g. `--seed 7`
fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Option<&'a str> {
    let value = args.get(*i + 1)?;
    *i += 1;
    Some(value.as_str())
}

fn load_tournament(path: &Path) -> Result<(String, Tournament)> {
    let config = TournamentConfig::load(path)?;
    let mut tournament = Tournament::new(config.settings)?;
    tournament.generate();
    Ok((config.name, tournament))
}

fn run_plan(args: &[String]) -> Result<()> {
    let Some(config_path) = args.first() else {
        bail!("plan requires a config file");
    };

    let mut out: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => out = flag_value(args, &mut i).map(PathBuf::from),
            other => eprintln!("Ignoring unknown option: {}", other),
        }
        i += 1;
    }

    let (name, tournament) = load_tournament(Path::new(config_path))?;
    let results = TournamentResults::new(&name, &tournament);
    results.print_report();

    if let Some(path) = out {
        results.write_schedule_csv(&path)?;
        println!("Schedule written to {}", path.display());
    }
    Ok(())
}

fn run_simulate(args: &[String]) -> Result<()> {
    let Some(config_path) = args.first() else {
        bail!("simulate requires a config file");
    };

    let mut config = MatchConfig::default();
    let mut standings: Option<PathBuf> = None;
    let mut save: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => config.seed = flag_value(args, &mut i).and_then(|v| v.parse().ok()),
            "--max-goals" | "-g" => {
                if let Some(value) = flag_value(args, &mut i) {
                    config.max_goals = value.parse().unwrap_or(config.max_goals);
                }
            }
            "--standings" => standings = flag_value(args, &mut i).map(PathBuf::from),
            "--save" => save = flag_value(args, &mut i).map(PathBuf::from),
            "--quiet" | "-q" => config.verbose = false,
            other => eprintln!("Ignoring unknown option: {}", other),
        }
        i += 1;
    }

    let (name, mut tournament) = load_tournament(Path::new(config_path))?;

    println!("=== Simulating: {} ===", name);
    if let Some(seed) = config.seed {
        println!("Seed: {}, Max goals: {}", seed, config.max_goals);
    }
    println!();

    let runner = MatchRunner::new(config);
    let simulation = runner.run(&mut tournament)?;

    println!();
    let results = TournamentResults::new(&name, &tournament).with_simulation(simulation);
    results.print_report();

    if let Some(path) = standings {
        results.write_standings_csv(&path)?;
        println!("Standings written to {}", path.display());
    }
    if let Some(path) = save {
        results.save(&path)?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn run_suggest(args: &[String]) -> Result<()> {
    let Some(num_teams) = args.first().and_then(|v| v.parse::<u32>().ok()) else {
        bail!("suggest requires a number of teams");
    };
    if !(MIN_TEAMS..=MAX_TEAMS).contains(&num_teams) {
        bail!("number of teams must be between {} and {}", MIN_TEAMS, MAX_TEAMS);
    }

    let groups = suggest_group_count(num_teams);
    let advancing = advancing_options(num_teams, groups);
    println!("{} teams: {} groups suggested", num_teams, groups);
    println!(
        "Teams advancing per group: {} to {}",
        advancing.start(),
        advancing.end()
    );
    Ok(())
}

fn main() {
    init_telemetry();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "plan" => run_plan(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "suggest" => run_suggest(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
