//! Power Bill: command-line bill generator
//!
//! Prompts for anything not passed as a flag, then prints the ledger.
//!
//! ```sh
//! # Fully interactive
//! power-bill
//!
//! # Non-interactive, JSON output
//! power-bill --name Asha --category domestic --previous 100 --current 150 --json
//!
//! # Validate config without billing
//! power-bill --config /etc/power-bill/config.toml --check
//! ```

mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, warn};

use power_bill::{
    default_config_path, init_tracing, AppConfig, BillCalculator, BillStatement, ConfigError,
};

use crate::input::{collect, BillRequest, InputError, Prompter};

/// Tiered electricity bill generator for domestic, commercial and
/// industrial connections.
#[derive(Parser, Debug)]
#[command(name = "power-bill", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "POWER_BILL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Customer name.
    #[arg(short, long)]
    name: Option<String>,

    /// Customer type: domestic, commercial or industrial (any case).
    #[arg(short = 't', long)]
    category: Option<String>,

    /// Previous meter reading.
    #[arg(long, allow_hyphen_values = true)]
    previous: Option<String>,

    /// Current meter reading.
    #[arg(long, allow_hyphen_values = true)]
    current: Option<String>,

    /// Print the bill as JSON instead of the text ledger.
    #[arg(long)]
    json: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn request(&self) -> BillRequest {
        BillRequest {
            name: self.name.clone(),
            category: self.category.clone(),
            previous: self.previous.clone(),
            current: self.current.clone(),
        }
    }

    fn is_interactive(&self) -> bool {
        self.name.is_none()
            || self.category.is_none()
            || self.previous.is_none()
            || self.current.is_none()
    }

    /// Where the banner and prompts go. JSON output keeps stdout clean.
    fn prompt_stream(&self) -> PromptStream {
        if self.json {
            PromptStream::Stderr
        } else {
            PromptStream::Stdout
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStream {
    Stdout,
    Stderr,
}

impl PromptStream {
    fn writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

/// How the effective configuration was obtained
#[derive(Debug)]
enum ConfigSource {
    /// Read from the file
    File,
    /// File given or present but unusable; defaults in effect
    Fallback(ConfigError),
    /// No file at the default path
    Defaults,
}

/// Pick the config file and load it. An explicit path is always read; the
/// default path only when it exists.
fn resolve_config(
    explicit: Option<PathBuf>,
    default_path: PathBuf,
) -> (PathBuf, AppConfig, ConfigSource) {
    let is_explicit = explicit.is_some();
    let path = explicit.unwrap_or(default_path);

    if !is_explicit && !path.exists() {
        return (path, AppConfig::default(), ConfigSource::Defaults);
    }
    match AppConfig::load(&path) {
        Ok(cfg) => (path, cfg, ConfigSource::File),
        Err(e) => (path, AppConfig::default(), ConfigSource::Fallback(e)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let (config_path, mut config, source) =
        resolve_config(cli.config.clone(), default_config_path());
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match source {
        ConfigSource::File => info!("Configuration loaded from {}", config_path.display()),
        ConfigSource::Fallback(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        ConfigSource::Defaults => {
            debug!("No config file at {}, using defaults", config_path.display())
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            eprintln!("Configuration is invalid: {}", e);
            return ExitCode::FAILURE;
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Provider    : {}", config.ledger.provider);
        println!("   Currency    : {}", config.ledger.currency_symbol);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return ExitCode::SUCCESS;
    }

    // ── Generate bill ──────────────────────────────────────────
    match run(&cli, &config) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "bill not generated");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<String, InputError> {
    let input = {
        let mut prompts = cli.prompt_stream().writer();
        if cli.is_interactive() {
            writeln!(prompts, "\n{} Electricity Bill Generator", config.ledger.provider)?;
        }
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), prompts);
        collect(cli.request(), &mut prompter)?
    };

    let charges = BillCalculator::standard().bill(&input.readings, input.category)?;
    info!(
        customer = %input.name,
        category = %input.category,
        total = %charges.total,
        "bill generated"
    );

    let statement = BillStatement::new(input.name, input.category, input.readings, charges)
        .with_bill_date(chrono::Local::now().date_naive());

    if cli.json {
        Ok(statement.render_json()?)
    } else {
        Ok(format!("\n{}", statement.render_text(&config.ledger)))
    }
}
