//! Balance inspection CLI.
//!
//! Compiles every preset and prints the cross-preset comparison, a
//! per-wave risk timeline, or a Monte Carlo assumption sweep.
//!
//! Usage:
//!   cargo run --bin balance_sim -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin balance_sim                       # Wave-10 comparison
//!   cargo run --bin balance_sim -- -w 25 --timeline   # Risk table at wave 25
//!   cargo run --bin balance_sim -- --sweep 500 -s 42  # Reproducible sweep

use rampart::analytics::aggregator::CHECKPOINT_WAVE;
use rampart::analytics::report::timeline_text;
use rampart::analytics::sweep::{run_sweep, SweepConfig};
use rampart::balance::assumptions::PresetId;
use rampart::build_info;
use rampart::registry::PresetRegistry;
use std::env;

struct CliOptions {
    wave: u32,
    preset: PresetId,
    show_timeline: bool,
    save_json: bool,
    sweep_runs: Option<u32>,
    seed: Option<u64>,
    jitter: f64,
    verbosity: u8,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            wave: CHECKPOINT_WAVE,
            preset: PresetId::Standard,
            show_timeline: false,
            save_json: false,
            sweep_runs: None,
            seed: None,
            jitter: 0.15,
            verbosity: 1,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              RAMPART BALANCE INSPECTOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!(
        "Build: {} ({})",
        build_info::BUILD_COMMIT,
        build_info::BUILD_DATE
    );
    println!("Checkpoint wave: {}", options.wave);
    println!();

    if let Some(num_runs) = options.sweep_runs {
        let config = SweepConfig {
            num_runs,
            seed: options.seed,
            jitter: options.jitter,
            base_preset: options.preset,
            verbosity: options.verbosity,
            ..Default::default()
        };
        println!(
            "Sweeping {} variants around '{}' (jitter ±{:.0}%)...",
            num_runs,
            options.preset.as_str(),
            options.jitter * 100.0
        );
        if let Some(seed) = options.seed {
            println!("Seed: {}", seed);
        }
        println!();
        let report = run_sweep(&config);
        println!("{}", report.to_text());
        return;
    }

    let registry = PresetRegistry::with_active(options.preset);
    let summary = registry.build_balance_scheme_summary(options.wave);
    println!("{}", summary.to_text());

    if options.show_timeline {
        println!("{}", timeline_text(registry.active(), 1, 30));
    }

    if options.save_json {
        let filename = format!(
            "balance_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, summary.to_json()).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-w" | "--wave" => {
                if i + 1 < args.len() {
                    options.wave = args[i + 1].parse().unwrap_or(CHECKPOINT_WAVE);
                    i += 1;
                }
            }
            "-p" | "--preset" => {
                if i + 1 < args.len() {
                    match PresetId::parse(&args[i + 1]) {
                        Some(id) => options.preset = id,
                        None => {
                            eprintln!("Unknown preset '{}'.", args[i + 1]);
                            eprintln!("Known presets: casual, standard, hardcore");
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--sweep" => {
                if i + 1 < args.len() {
                    if let Ok(runs) = args[i + 1].parse::<u32>() {
                        options.sweep_runs = Some(runs);
                        i += 1;
                    }
                }
                if options.sweep_runs.is_none() {
                    options.sweep_runs = Some(200);
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--jitter" => {
                if i + 1 < args.len() {
                    options.jitter = args[i + 1].parse().unwrap_or(0.15);
                    i += 1;
                }
            }
            "--timeline" => {
                options.show_timeline = true;
            }
            "--json" => {
                options.save_json = true;
            }
            "-v" | "--verbose" => {
                options.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Rampart Balance Inspector");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin balance_sim -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -w, --wave <N>      Checkpoint wave for the comparison (default: 10)");
    println!("    -p, --preset <ID>   Active preset: casual|standard|hardcore");
    println!("    --timeline          Print a per-wave risk table for the active preset");
    println!("    --json              Save the comparison as a timestamped JSON file");
    println!("    --sweep [N]         Run a Monte Carlo assumption sweep (default: 200)");
    println!("    -s, --seed <S>      Sweep seed for reproducibility");
    println!("    --jitter <J>        Sweep jitter span (default: 0.15)");
    println!("    -v, --verbose       Per-run sweep output");
    println!("    -h, --help          Show this help");
}
