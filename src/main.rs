//! Navigation demo command line
//!
//! Replays navigation commands against the main window and prints what the
//! user would see after each one.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use navigation_demo::{logging, AppConfig, Command, MainActivity};

#[derive(Parser)]
#[command(name = "navigation-demo")]
#[command(about = "Bottom-tab and details navigation demo", long_about = None)]
struct Cli {
    /// Config file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// UI locale, overrides the config file
    #[arg(short, long)]
    locale: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Commands to replay: tab:<name>, click, back, clear, go:<path>.
    /// Read from stdin, one per line, when none are given.
    commands: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        config = config.with_locale(locale);
    }

    let filter = if cli.verbose { "debug" } else { config.log_filter.as_str() };
    logging::init_tracing(filter)?;

    let mut activity = MainActivity::new(&config)?;
    show(&activity);

    if cli.commands.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }
            run(&mut activity, &line);
        }
    } else {
        for command in &cli.commands {
            run(&mut activity, command);
        }
    }

    Ok(())
}

fn run(activity: &mut MainActivity, input: &str) {
    let command: Command = match input.parse() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    println!("> {}", command);
    match activity.handle(&command) {
        Ok(true) => show(activity),
        Ok(false) => println!("(nothing to do)"),
        Err(e) => eprintln!("Navigation failed: {}", e),
    }
}

fn show(activity: &MainActivity) {
    println!("== {} ==", activity.title());
    for line in activity.render() {
        println!("  {}", line);
    }
    let tab = activity
        .bottom_navigation()
        .selected()
        .map(|item| item.label.as_str())
        .unwrap_or_default();
    println!("  [tab: {}] [depth: {}]", tab, activity.controller().depth());
}
