// src/main.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;

use gcd_trace::batch;
use gcd_trace::config::{GcdConfig, OutputFormat};
use gcd_trace::core::cancellation_token::CancellationToken;
use gcd_trace::{parse_numbers, GcdAlgorithm, NumericValue, Reducer, Reduction, TraceRenderer};

/// Greatest common divisor of two or more numbers, with a step-by-step trace.
#[derive(Debug, Parser)]
#[command(name = "gcd-trace", version)]
struct Cli {
    /// Comma-separated numbers: integers, fractions (3/4) or decimals (2.5)
    numbers: Option<String>,

    /// euclidean, prime or stein (overrides the configured algorithm)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Configuration file (defaults to ./gcd.toml or ./gcd.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print only the result
    #[arg(long)]
    no_trace: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// File with one comma-separated sequence per line
    #[arg(long, conflicts_with = "numbers")]
    batch: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    input: String,
    algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gcd: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

struct Output {
    renderer: TraceRenderer,
    show_trace: bool,
    format: OutputFormat,
}

impl Output {
    fn report(
        &self,
        line: Option<usize>,
        input: &str,
        algorithm: GcdAlgorithm,
        result: &Result<Reduction, gcd_trace::GcdError>,
    ) -> Report {
        let (gcd, steps, error) = match result {
            Ok(reduction) => {
                let steps = if self.show_trace {
                    self.renderer.render(&reduction.trace)
                } else {
                    Vec::new()
                };
                (Some(reduction.gcd.to_string()), steps, None)
            }
            Err(e) => (None, Vec::new(), Some(e.to_string())),
        };
        Report {
            line,
            input: input.to_string(),
            algorithm: algorithm.id().to_string(),
            gcd,
            steps,
            error,
        }
    }

    fn print_single(
        &self,
        values: &[NumericValue],
        algorithm: GcdAlgorithm,
        reduction: &Reduction,
    ) -> anyhow::Result<()> {
        let input = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        match self.format {
            OutputFormat::Json => {
                let report = self.report(None, &input, algorithm, &Ok(reduction.clone()));
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                println!("Numbers: [{}]", input);
                println!("Algorithm: {}", algorithm);
                println!("GCD: {}", reduction.gcd);
                if self.show_trace {
                    println!();
                    println!("Steps:");
                    for line in self.renderer.render(&reduction.trace) {
                        println!("{}", line);
                    }
                }
            }
        }
        Ok(())
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<GcdConfig> {
    let mut config = match &cli.config {
        Some(path) => GcdConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GcdConfig::load().context("failed to load configuration")?,
    };

    if let Some(algorithm) = &cli.algorithm {
        config.algorithm = algorithm.clone();
    }
    if cli.no_trace {
        config.output.show_trace = false;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    Ok(config)
}

fn run_batch(
    path: &Path,
    algorithm: GcdAlgorithm,
    config: &GcdConfig,
    output: &Output,
    token: &CancellationToken,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    let inputs = batch::sequences(&text);
    info!("Batch: {} sequences from {}", inputs.len(), path.display());

    let pool = batch::build_pool(config.threads).context("failed to build thread pool")?;
    let entries = pool.install(|| batch::reduce_all(&inputs, algorithm, token));

    let reports: Vec<Report> = entries
        .iter()
        .map(|entry| output.report(Some(entry.line), &entry.input, algorithm, &entry.result))
        .collect();

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                let line = report.line.unwrap_or(0);
                match (&report.gcd, &report.error) {
                    (Some(gcd), _) => println!("line {}: gcd({}) = {}", line, report.input, gcd),
                    (None, Some(error)) => println!("line {}: error: {}", line, error),
                    (None, None) => {}
                }
                for step in &report.steps {
                    println!("    {}", step);
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{} of {} sequences failed", failed, reports.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;

    // Initialize the logger
    let env = Env::default()
        .filter_or("GCD_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("GCD_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if cli.list {
        for algorithm in GcdAlgorithm::ALL {
            println!(
                "{:<10} {}: {}",
                algorithm.id(),
                algorithm.name(),
                algorithm.description()
            );
        }
        return Ok(());
    }

    let algorithm = config.algorithm()?;
    debug!("Configuration: {:?}", config);

    let token = CancellationToken::new();
    let handler_token = token.clone();
    // Stages are not interruptible, so a second Ctrl-C exits immediately.
    ctrlc::set_handler(move || {
        if handler_token.request_cancel() {
            std::process::exit(130);
        }
        warn!("Interrupted: stopping after the current stage (Ctrl-C again to exit now)");
    })
    .context("failed to install Ctrl-C handler")?;

    let output = Output {
        renderer: config.renderer(),
        show_trace: config.output.show_trace,
        format: config.output.format,
    };

    if let Some(path) = &cli.batch {
        return run_batch(path, algorithm, &config, &output, &token);
    }

    let Some(numbers) = cli.numbers.as_deref() else {
        bail!("no numbers given (pass e.g. \"12, 18, 24\" or --batch FILE)");
    };

    let values = parse_numbers(numbers)?;
    let reduction = Reducer::new(algorithm)
        .with_cancellation(&token)
        .on_progress(|p| {
            debug!(
                "Stage {} of {} complete, running GCD {}",
                p.stage, p.stage_count, p.running_gcd
            )
        })
        .run(&values)?;

    output.print_single(&values, algorithm, &reduction)
}
