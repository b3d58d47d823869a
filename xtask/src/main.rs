// Development automation for famicore
//
// Wraps the usual cargo invocations so CI and pre-commit runs stay
// consistent: `cargo xtask ci` is the whole gate.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for famicore")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci,
    /// Quick checks before commit (fmt, clippy)
    Check,
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Filter passed through to cargo test
        filter: Option<String>,
    },
    /// Run benchmarks
    Bench,
}

fn run(step: &str, program: &str, args: &[&str]) -> Result<()> {
    println!("{} {} {}", "▶".blue(), program, args.join(" "));
    let start = Instant::now();

    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        bail!("{} failed", step);
    }

    println!(
        "{} {} ({:.1}s)",
        "✓".green(),
        step,
        start.elapsed().as_secs_f32()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => {
            run("fmt", "cargo", &["fmt", "--all", "--", "--check"])?;
            run(
                "clippy",
                "cargo",
                &["clippy", "--all-targets", "--", "-D", "warnings"],
            )?;
            run("build", "cargo", &["build"])?;
            run("test", "cargo", &["test"])?;
            println!("{}", "CI checks passed".green().bold());
        }
        Commands::Check => {
            run("fmt", "cargo", &["fmt", "--all", "--", "--check"])?;
            run(
                "clippy",
                "cargo",
                &["clippy", "--all-targets", "--", "-D", "warnings"],
            )?;
        }
        Commands::Fmt { check } => {
            if check {
                run("fmt", "cargo", &["fmt", "--all", "--", "--check"])?;
            } else {
                run("fmt", "cargo", &["fmt", "--all"])?;
            }
        }
        Commands::Clippy => {
            run(
                "clippy",
                "cargo",
                &["clippy", "--all-targets", "--", "-D", "warnings"],
            )?;
        }
        Commands::Build { release } => {
            if release {
                run("build", "cargo", &["build", "--release"])?;
            } else {
                run("build", "cargo", &["build"])?;
            }
        }
        Commands::Test { filter } => match filter {
            Some(filter) => run("test", "cargo", &["test", filter.as_str()])?,
            None => run("test", "cargo", &["test"])?,
        },
        Commands::Bench => {
            run("bench", "cargo", &["bench"])?;
        }
    }

    Ok(())
}
