use std::io;

use anyhow::{Context, Result};
use avl::menu::Menu;
use avl::tree::Tree;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "avl", about = "Interactive AVL tree operations")]
struct Cli {
    /// Keys to insert before the menu starts (comma separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    insert: Vec<i32>,
    /// Verbosity of the log written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the menu, so logs go to stderr.
    TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;

    let tree: Tree<i32> = cli.insert.into_iter().collect();
    info!("starting with {} keys", tree.len());

    run(tree)
}

fn run(mut tree: Tree<i32>) -> Result<()> {
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
    menu.run(&mut tree).context("menu failed reading input or writing output")?;
    info!("finished with {} keys", tree.len());

    Ok(())
}
