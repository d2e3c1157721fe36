//! Tagwright CLI entry point.
//!
//! Provides command-line tools for inspecting and exercising the tag runtime:
//! - `tagwright modifiers` - List registered modifiers
//! - `tagwright resolve` - Resolve a modifier name, with suggestions on typos
//! - `tagwright tags` - List registered tags
//! - `tagwright eval` - Render a placeholder template
//! - `tagwright call` - Dispatch a tag outside a full templating context

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_call, run_eval, run_modifiers, run_resolve, run_tags, CallArgs, EvalArgs, ListArgs,
    ResolveArgs,
};
use tagwright::runtime::{DEFAULT_DOCS_URL, DEFAULT_MAX_DEPTH};
use tagwright::Settings;
use tracing_subscriber::EnvFilter;

/// Tag runtime tools.
#[derive(Debug, Parser)]
#[command(name = "tagwright")]
#[command(about = "Inspect and exercise the tagwright tag runtime", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Maximum tag nesting depth
    #[arg(long, env = "TAGWRIGHT_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    pub max_depth: usize,

    /// Base URL for documentation links in diagnostics
    #[arg(long, env = "TAGWRIGHT_DOCS_URL", default_value = DEFAULT_DOCS_URL, global = true)]
    pub docs_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered modifiers
    Modifiers(ListArgs),
    /// Resolve a modifier name
    Resolve(ResolveArgs),
    /// List registered tags
    Tags(ListArgs),
    /// Render a placeholder template
    Eval(EvalArgs),
    /// Dispatch a tag
    Call(CallArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// `--verbose` shows dispatch events, otherwise `RUST_LOG` decides.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let settings = Settings::builder()
        .max_depth(cli.max_depth)
        .docs_base_url(cli.docs_url)
        .build();

    let result = match cli.command {
        Commands::Modifiers(args) => run_modifiers(args, &settings),
        Commands::Resolve(args) => run_resolve(args, &settings),
        Commands::Tags(args) => run_tags(args),
        Commands::Eval(args) => run_eval(args, &settings),
        Commands::Call(args) => run_call(args, &settings),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
