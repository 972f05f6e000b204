//! sim-runner: headless runner for the 100 prisoners problem.
//!
//! Usage:
//!   sim-runner --prisoners 100 --rounds 1000 --seed 42
//!   sim-runner --prisoners 10 --details --grid
//!   sim-runner --rounds 500 --json | jq .all_succeeded

use anyhow::Result;
use prisoners_core::{config::SimConfig, engine::SimEngine, round::RoundReport};
use std::env;
use std::process;

mod render;

const USAGE: &str = "\
sim-runner [OPTIONS]

Options:
  --prisoners <N>   number of boxes/prisoners (default 100)
  --rounds <S>      number of independent rounds (default 1)
  --seed <SEED>     master seed for the run (default 42)
  --round-up        use ceil(N/2) tries instead of floor(N/2)
  --details         print every prisoner's walk
  --grid            print the per-prisoner win/loss grid
  --json            emit one JSON round report per line, no text output
  -h, --help        show this help";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let seed = parse_arg(&args, "--seed").unwrap_or(42u64);
    let config = SimConfig {
        num_prisoners: parse_arg(&args, "--prisoners").unwrap_or(100),
        num_rounds: parse_arg(&args, "--rounds").unwrap_or(1),
        round_up_max_tries: args.iter().any(|a| a == "--round-up"),
        verbose_details: args.iter().any(|a| a == "--details"),
        print_winloss_grid: args.iter().any(|a| a == "--grid"),
    };
    let json_mode = args.iter().any(|a| a == "--json");

    let mut engine = match SimEngine::new(config.clone(), seed) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("sim-runner: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let width = render::terminal_width();
    log::info!(
        "seed={seed} prisoners={} rounds={} max_tries={} width={width}",
        config.num_prisoners,
        config.num_rounds,
        config.max_tries(),
    );

    if !json_mode {
        println!("WELCOME to the 100 prisoners problem simulation!");
        println!();
    }

    for _ in 0..config.num_rounds {
        let report = engine.run_round()?;
        if json_mode {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_round(&report, &config, &engine, width);
        }
    }

    Ok(())
}

fn print_round(report: &RoundReport, config: &SimConfig, engine: &SimEngine, width: usize) {
    let n = config.num_prisoners as usize;

    println!(">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>");
    println!(
        "Round {} of {}, number of prisoners is {n}",
        report.round, config.num_rounds,
    );
    println!(">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>");

    print!("{}", render::render_boxes(&report.permutation, width));
    println!();
    print!("{}", render::render_cycles(&report.cycles, n, width));
    println!();

    if config.verbose_details {
        for outcome in &report.outcomes {
            print!(
                "{}",
                render::render_walk(outcome, config.max_tries(), n, width),
            );
            println!();
        }
    }

    if report.all_succeeded {
        println!("Prisoners WON the game!");
    } else {
        println!(
            "Prisoners LOST the game! Failure ratio is {:.2}",
            report.failure_ratio,
        );
    }

    if config.print_winloss_grid {
        print!("{}", render::render_winloss(&report.outcomes, width));
    }

    let tally = &engine.tally;
    println!("------------------------------------------------------------");
    println!(
        "W:{} L:{} G:{} W/L Ratio: {:.0}%/{:.0}%",
        tally.wins,
        tally.losses,
        tally.rounds,
        tally.win_ratio() * 100.0,
        tally.loss_ratio() * 100.0,
    );
    println!("------------------------------------------------------------");
}

/// Parse `--flag value`. A missing flag yields None; a present flag
/// with an unparseable value is a usage error and exits non-zero.
fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let pair = args.windows(2).find(|w| w[0] == flag)?;
    match pair[1].parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("sim-runner: invalid value for {flag}: {}", pair[1]);
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }
}
