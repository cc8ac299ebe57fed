//! `daylog` command line.
//!
//! Emits records through the engine, either one at a time or one per stdin line,
//! and shows the effective configuration and file naming.
//!
//! Diagnostics of the tool itself go to stderr through `tracing`; records go to
//! stdout and/or the daily file.

use std::borrow::Cow;
use std::io::{self, BufRead};
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daylog::config::schema::{default_directory, ensure_directory};
use daylog::config::watcher::ConfigWatcher;
use daylog::config::{global, load_config, LoggerConfig};
use daylog::record::Moment;
use daylog::sink::FileSink;
use daylog::{CallSite, Severity};

#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "Leveled text logging to the terminal and daily files", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for daily log files.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Minimum severity (trace, debug, info, warn, error, critical).
    #[arg(short, long)]
    level: Option<String>,

    /// Also write colored lines to stdout.
    #[arg(long)]
    console: bool,

    /// Do not write to the daily file.
    #[arg(long)]
    no_file: bool,

    /// File name prefix.
    #[arg(long)]
    prefix: Option<String>,

    /// File name postfix.
    #[arg(long)]
    postfix: Option<String>,

    /// Prefix each message with the thread id.
    #[arg(long)]
    thread_id: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one record
    Emit {
        severity: String,
        template: String,
        args: Vec<String>,
    },
    /// Emit one record per stdin line, hot-reloading --config
    Pipe {
        #[arg(short, long, default_value = "info")]
        severity: String,
    },
    /// Print the effective configuration as JSON
    Config,
    /// Print the daily file path for today or --date
    FileName {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Command-line settings layered over the file configuration.
#[derive(Clone)]
struct Overrides {
    dir: Option<PathBuf>,
    level: Option<Severity>,
    console: bool,
    no_file: bool,
    prefix: Option<String>,
    postfix: Option<String>,
    thread_id: bool,
}

impl Overrides {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            dir: cli.dir.clone(),
            level: cli.level.as_deref().map(Severity::parse),
            console: cli.console,
            no_file: cli.no_file,
            prefix: cli.prefix.clone(),
            postfix: cli.postfix.clone(),
            thread_id: cli.thread_id,
        }
    }

    fn apply(&self, mut config: LoggerConfig) -> LoggerConfig {
        if let Some(dir) = &self.dir {
            config.directory = Some(dir.clone());
        }
        if let Some(level) = self.level {
            config.minimum_severity = level;
        }
        if let Some(prefix) = &self.prefix {
            config.file_name_prefix = prefix.clone();
        }
        if let Some(postfix) = &self.postfix {
            config.file_name_postfix = postfix.clone();
        }
        config.write_to_console |= self.console;
        config.write_to_file &= !self.no_file;
        config.include_thread_id |= self.thread_id;
        if config.write_to_file && config.directory.is_none() {
            config.directory = Some(default_directory());
        }
        config
    }
}

fn install(config: LoggerConfig) {
    if let Some(dir) = config.file_directory() {
        if let Err(e) = ensure_directory(dir) {
            tracing::error!(directory = %dir.display(), error = %e, "Failed to create log directory");
        }
    }
    global::replace(config);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daylog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let overrides = Overrides::from_cli(&cli);

    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    install(overrides.apply(base));

    let config = global::current();
    tracing::debug!(
        directory = ?config.directory,
        minimum_severity = %config.minimum_severity,
        console = config.write_to_console,
        file = config.write_to_file,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Emit { severity, template, args } => {
            let args: Vec<Cow<'_, str>> = args.iter().map(|a| Cow::Borrowed(a.as_str())).collect();
            let site = CallSite::new(file!(), line!(), "emit");
            daylog::engine::log(Severity::parse(&severity), &site, &template, &args)?;
        }
        Commands::Pipe { severity } => {
            let severity = Severity::parse(&severity);
            let _watcher = match &cli.config {
                Some(path) => {
                    let overrides = overrides.clone();
                    Some(ConfigWatcher::new(path).run_with(move |next| install(overrides.apply(next)))?)
                }
                None => None,
            };
            for line in io::stdin().lock().lines() {
                let line = line?;
                daylog::log!(severity, "{}", line);
            }
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&*config)?);
        }
        Commands::FileName { date } => {
            let now = match date {
                Some(d) => Moment {
                    year: d.year(),
                    month: d.month(),
                    day: d.day(),
                    ..Moment::zero()
                },
                None => Moment::now(),
            };
            let dir = config.directory.clone().unwrap_or_else(default_directory);
            let sink = FileSink::new(&dir, &config.file_name_prefix, &config.file_name_postfix);
            println!("{}", sink.path_for(&now).display());
        }
    }

    Ok(())
}
