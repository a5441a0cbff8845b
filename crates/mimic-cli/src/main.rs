//! `mimic-cli` – Mimic pipeline driver.
//!
//! This binary is the entry point for the retargeting pipeline:
//!
//! 1. Initialises structured logging from `RUST_LOG`
//!    (`MIMIC_LOG_FORMAT=json` switches to newline-delimited JSON).
//! 2. Loads `~/.mimic/config.toml` (falling back to defaults).
//! 3. Dispatches the `extract` / `retarget` / `run` / `config`
//!    subcommands.
//! 4. Catches every pipeline failure at one place, reports the tagged
//!    error kind to the operator, and exits non-zero — after every scoped
//!    resource (the kinematic engine handle) has been released.

mod cli;
mod commands;
mod config;

use clap::Parser;
use colored::Colorize;
use tracing::error;

use cli::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // All scoped resources live and die inside run(); only then is it
    // safe to exit, because process::exit skips Drop.
    let code = run(cli);
    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if std::env::var("MIMIC_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }
}

fn run(cli: Cli) -> i32 {
    let cfg = match config::load_effective() {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("{}: {}", "Config error".red(), e);
            println!("  Using default configuration.");
            let mut cfg = config::Config::default();
            config::apply_env_overrides(&mut cfg);
            cfg
        }
    };

    let result = match &cli.command {
        Commands::Extract { input, output } => commands::extract(input, output),
        Commands::Retarget {
            model,
            input,
            output,
        } => commands::retarget(model, input, output, &cfg),
        Commands::Run {
            input,
            model,
            poses,
            output,
        } => commands::run(input, model, poses, output, &cfg),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => match toml::to_string_pretty(&cfg) {
                    Ok(rendered) => print!("{rendered}"),
                    Err(e) => println!("{}: {}", "Config error".red(), e),
                },
                ConfigAction::Path => println!("{}", config::config_path().display()),
                ConfigAction::Init { force } => {
                    let path = config::config_path();
                    if path.exists() && !force {
                        println!(
                            "{} config already exists at {} (use --force to overwrite)",
                            "!".yellow().bold(),
                            path.display()
                        );
                    } else {
                        match config::save(&config::Config::default()) {
                            Ok(()) => println!(
                                "  {} Config written to {}",
                                "✓".green().bold(),
                                path.display()
                            ),
                            Err(e) => println!("{}: {}", "Config error".red(), e),
                        }
                    }
                }
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(kind = e.kind(), "pipeline run failed");
            println!("{}: {}", "error".red().bold(), e);
            1
        }
    }
}
