use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use netplan_parser::NetplanQuery;
use netplan_parser::config::{ParserConfig, parse_config_file};
use netplan_parser::output::{OutputFormat, render};

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "NETPLAN_PARSER_LOG";

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "netplan-parser")]
#[command(
	author,
	version,
	about = "Query merged netplan configuration for interface definitions and dependencies"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Output format: names, json or yaml
	#[arg(short, long, global = true, default_value_t = OutputFormat::Yaml)]
	format: OutputFormat,

	/// Root directory prefixed to every netplan directory
	#[arg(short, long, global = true, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Skip netplan files with this basename (may be repeated)
	#[arg(short = 'x', long, global = true, value_name = "FILE")]
	exclude: Vec<String>,

	/// TOML file overriding the netplan directories and exclusions
	#[arg(short, long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Log more details to stderr (may be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,

	/// Print the list of supported features and exit
	#[arg(long)]
	features: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Display the merged definitions of the named interfaces, or all of them
	Show { names: Vec<String> },
	/// Display the named interfaces and everything linked to them
	Related {
		#[arg(required = true)]
		names: Vec<String>,
	},
	/// Display the physical interfaces backing the named interfaces
	Physical {
		#[arg(required = true)]
		names: Vec<String>,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	init_logging(cli.verbose);

	// Handle --features
	if cli.features {
		print!("{}", features_line());
		return Ok(ExitCode::SUCCESS);
	}

	let Some(command) = cli.command else {
		anyhow::bail!("No command given. Use --help for usage.");
	};

	let config = load_config(cli.config.as_deref(), cli.root)?;
	let query = NetplanQuery::new(config);
	let exclude: BTreeSet<String> = cli.exclude.into_iter().collect();

	let table = query
		.parse(&exclude)
		.context("Failed to load netplan configuration")?;

	let result = match command {
		Commands::Show { names } => query.show(&table, &names)?,
		Commands::Related { names } => query.related(&table, &names)?,
		Commands::Physical { names } => query.physical(&table, &names)?,
	};

	print!("{}", render(&result, cli.format)?);
	Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
	let filter = match verbose {
		0 => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
		1 => EnvFilter::new("info"),
		2 => EnvFilter::new("debug"),
		_ => EnvFilter::new("trace"),
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Build the effective config from an optional file and the --root flag.
fn load_config(path: Option<&Path>, root: Option<PathBuf>) -> Result<ParserConfig> {
	let mut config = match path {
		Some(path) => parse_config_file(path)
			.with_context(|| format!("Failed to load config file {}", path.display()))?,
		None => ParserConfig::default(),
	};

	if let Some(root) = root {
		config = config.with_root(root);
	}

	Ok(config)
}

fn features_line() -> String {
	format!(
		"Features: netplan-parser={VERSION} {}\n",
		"show=1.0 related=1.0 physical=1.0 exclude=1.0 format=1.0"
	)
}
