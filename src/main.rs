//! mermaid-render - CLI tool to render Mermaid diagrams through mmdc.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use mermaid_core::config::{DEFAULT_BACKGROUND, DEFAULT_OUTPUT_NAME, PROGRAM_ENV_VAR};
use mermaid_core::{
    discover, probe, Notice, NoticeLevel, OutputFormat, RenderError, RenderOutcome,
    RenderRequest, Renderer, RendererConfig,
};

/// Render Mermaid diagrams to png, jpg, svg or pdf with the Mermaid CLI.
#[derive(Parser, Debug)]
#[command(name = "mermaid-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mermaid source file, or `-` for standard input
    #[arg(short, long, conflicts_with = "code")]
    input: Option<PathBuf>,

    /// Mermaid source given inline
    #[arg(short, long)]
    code: Option<String>,

    /// Output file name, without extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    name: String,

    /// Output format: png, jpg, svg or pdf
    #[arg(short, long, default_value = "png")]
    format: OutputFormat,

    /// Width in pixels (automatic when omitted)
    #[arg(short, long)]
    width: Option<NonZeroU32>,

    /// Height in pixels (automatic when omitted)
    #[arg(short = 'H', long)]
    height: Option<NonZeroU32>,

    /// Background color, e.g. transparent, #ffffff, red. Empty to omit
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    background: String,

    /// Output directory (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Renderer executable
    #[arg(long, env = PROGRAM_ENV_VAR)]
    renderer: Option<PathBuf>,

    /// Look for a working mmdc and report its version
    #[arg(long)]
    check: bool,

    /// Print the renderer command line without running it
    #[arg(long)]
    dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // An explicit renderer (`--renderer` or MMDC_PATH) is used as given;
    // otherwise the same discovery `--check` reports picks the program.
    let explicit = args.renderer.is_some();
    let config = args
        .renderer
        .clone()
        .map(RendererConfig::new)
        .unwrap_or_else(RendererConfig::from_env);

    if args.check {
        return Ok(check(&config, explicit));
    }

    let source = read_source(&args)?;

    let request = match RenderRequest::builder(source, &args.name)
        .format(args.format)
        .width(args.width)
        .height(args.height)
        .background(Some(&args.background))
        .output_dir(args.output_dir.as_ref())
        .build()
    {
        Ok(request) => request,
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&error_json(&e))?);
            } else {
                report(&Notice::from(&e));
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let resolved = resolve(&config, explicit);

    if args.dry_run {
        let renderer = Renderer::new(resolved.unwrap_or(config));
        println!("{}", renderer.command(&request));
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = match resolved {
        Some(config) => Renderer::new(config).render(request),
        None => RenderOutcome::ToolNotFound,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        report(&outcome.notice());
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Pick the renderer to launch. `None` when discovery finds nothing.
fn resolve(config: &RendererConfig, explicit: bool) -> Option<RendererConfig> {
    if explicit {
        return Some(config.clone());
    }
    match discover(config) {
        Ok((program, _)) => Some(RendererConfig::new(program)),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

/// JSON shape for a request that never reached the renderer.
fn error_json(err: &RenderError) -> serde_json::Value {
    let notice = Notice::from(err);
    match err {
        RenderError::MissingField { field } => serde_json::json!({
            "kind": "missing_field",
            "field": field,
            "message": notice.message,
        }),
        other => serde_json::json!({
            "kind": "invalid_request",
            "code": other.code_value(),
            "message": notice.message,
        }),
    }
}

/// Read diagram source from `--code`, `--input <file>` or `--input -`.
fn read_source(args: &Args) -> Result<String> {
    if let Some(code) = &args.code {
        return Ok(code.clone());
    }

    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read diagram source from stdin")?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}

fn check(config: &RendererConfig, explicit: bool) -> ExitCode {
    let found = if explicit {
        probe(&config.program).map(|version| (config.program.clone(), version))
    } else {
        discover(config)
    };

    match found {
        Ok((program, version)) => {
            println!("mmdc found at {}: {}", program.display(), version);
            ExitCode::SUCCESS
        }
        Err(e @ RenderError::ToolNotFound { .. }) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("mmdc check failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Info notices go to stdout, errors to stderr.
fn report(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => {
            info!("{}", notice.title);
            println!("{}", notice.message);
        }
        NoticeLevel::Error => {
            error!("{}", notice.title);
            eprintln!("{}", notice.message);
        }
    }
}
