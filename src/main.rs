use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use slug_forge::{
    slugify_truncate, validate_slug, CliConfig, JsonWriter, OutputFormat, OutputWriter,
    PlainWriter, Slugifier,
};

/// Slug-Forge CLI: turn arbitrary text into URL-safe ASCII slugs
#[derive(Parser, Debug)]
#[command(name = "slug-forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert text into slugs
    #[command(name = "slugify")]
    Slugify {
        #[command(flatten)]
        args: SlugifyArgs,
    },

    /// Check whether strings are already well-formed slugs
    #[command(name = "check")]
    Check {
        /// Candidate slugs (read from stdin, one per line, when omitted)
        slugs: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Parser, Debug)]
struct SlugifyArgs {
    /// Text to slugify (read from stdin when omitted)
    texts: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Truncate slugs to at most this many bytes
    #[arg(short, long)]
    max_length: Option<usize>,

    /// Do not print empty slugs
    #[arg(long)]
    skip_empty: bool,

    /// Treat all of stdin as a single text instead of one text per line
    #[arg(long)]
    whole_input: bool,

    /// Print the text produced by every pipeline stage
    /// (ignores --max-length and --skip-empty)
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Slugify { args }) => handle_slugify_command(args),
        Some(Command::Check { slugs, format }) => handle_check_command(slugs, format),
        None => {
            // Default behavior: show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Example: slug-forge slugify \"Hello, World!\"");
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout only carries results
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Use positional arguments if given, otherwise read stdin
fn resolve_inputs(args: Vec<String>, per_line: bool) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;

    if per_line {
        Ok(content.lines().map(String::from).collect())
    } else {
        Ok(vec![content])
    }
}

fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    let stdout = io::stdout().lock();
    match format {
        OutputFormat::Plain => Box::new(PlainWriter::new(stdout)),
        OutputFormat::Json => Box::new(JsonWriter::new(stdout)),
    }
}

fn handle_slugify_command(args: SlugifyArgs) -> Result<()> {
    // Load configuration
    let mut config = CliConfig::load_or_default(args.config.as_ref())?;
    debug!("Loaded config: {:?}", config);

    // Apply CLI overrides
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(max_length) = args.max_length {
        config.output.max_length = Some(max_length);
    }
    if args.skip_empty {
        config.output.skip_empty = true;
    }
    if args.whole_input {
        config.input.per_line = false;
    }

    let inputs = resolve_inputs(args.texts, config.input.per_line)?;
    let slugifier = Slugifier::pinyin();
    let mut writer = create_writer(config.output.format);

    for input in &inputs {
        if args.explain {
            writer.write_trace(input, &slugifier.trace(input))?;
            continue;
        }

        let slug = match config.output.max_length {
            Some(max_length) => slugify_truncate(input, max_length),
            None => slugifier.slugify(input),
        };

        if slug.is_empty() && config.output.skip_empty {
            debug!("Skipping empty slug for input {:?}", input);
            continue;
        }

        writer.write_slug(input, &slug)?;
    }

    info!("Processed {} input(s)", inputs.len());
    Ok(())
}

fn handle_check_command(slugs: Vec<String>, format: OutputFormat) -> Result<()> {
    let candidates = resolve_inputs(slugs, true)?;
    let mut writer = create_writer(format);
    let mut invalid = 0usize;

    for candidate in &candidates {
        let result = validate_slug(candidate);
        if result.is_err() {
            invalid += 1;
        }
        writer.write_check(candidate, &result)?;
    }
    drop(writer);

    if invalid > 0 {
        info!("{} of {} candidate(s) are not valid slugs", invalid, candidates.len());
        std::process::exit(1);
    }

    Ok(())
}
