use anyhow::{Context, Result};
use benchsum::{
    average_by_size, performance_drops, render_drop_chart, render_mean_bar_chart, write_chart,
    BenchsumError, ChartConfig, DropMetric, DropTable, LabelPolicy, MeanBar, ResultBundle,
    SummaryStats, WrkSamples,
};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Benchmark summary tool for wrk logs and result bundles
#[derive(Parser)]
#[command(name = "benchsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which drop metric to chart
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricChoice {
    /// Requests-per-second drop only
    Request,
    /// Transfer-per-second drop only
    Transfer,
    /// Both metrics, one chart each
    Both,
}

impl MetricChoice {
    fn metrics(self) -> &'static [DropMetric] {
        match self {
            MetricChoice::Request => &[DropMetric::Request],
            MetricChoice::Transfer => &[DropMetric::Transfer],
            MetricChoice::Both => &[DropMetric::Request, DropMetric::Transfer],
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize wrk logs into per-scenario statistics
    Stats {
        /// Log files, each NAME=PATH or a bare path named by its file stem
        #[arg(value_name = "NAME=PATH", required = true)]
        logs: Vec<String>,

        /// Display label for a scenario (repeatable)
        #[arg(short, long, value_name = "KEY=LABEL", value_parser = parse_key_value)]
        label: Vec<(String, String)>,

        /// Write a mean requests/sec bar chart to this file
        #[arg(long, value_name = "FILE")]
        chart: Option<PathBuf>,

        /// Print the summaries as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare scenarios in result bundles against a baseline
    Compare {
        /// Result bundle files (merged by key union)
        #[arg(value_name = "FILE", required = true)]
        bundles: Vec<PathBuf>,

        /// Scenario to compare everything else against
        #[arg(short, long, value_name = "KEY")]
        baseline: String,

        /// Display label for a scenario (repeatable)
        #[arg(short, long, value_name = "KEY=LABEL", value_parser = parse_key_value)]
        label: Vec<(String, String)>,

        /// Chart unlabeled scenarios under their raw keys instead of skipping them
        #[arg(long)]
        keep_unlabeled: bool,

        /// Directory to write chart files into
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Which drop metric to chart
        #[arg(long, value_enum, default_value = "both")]
        metric: MetricChoice,

        /// Print the drop tables as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge per-group result files into one bundle keyed by file stem
    Merge {
        /// Input files or directories to scan for *.json
        #[arg(value_name = "PATH", default_value = ".")]
        inputs: Vec<PathBuf>,

        /// Merged bundle to write
        #[arg(short, long, value_name = "FILE", default_value = "merged.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity flags
    setup_logging(cli.verbose, cli.quiet);

    // Execute the appropriate command
    match cli.command {
        Commands::Stats {
            logs,
            label,
            chart,
            json,
        } => {
            let config = ChartConfig::new().with_labels(label.into_iter().collect());
            stats_command(&logs, &config, chart.as_deref(), json, cli.quiet)?;
        }
        Commands::Compare {
            bundles,
            baseline,
            label,
            keep_unlabeled,
            out_dir,
            metric,
            json,
        } => {
            // With no labels at all, skipping would leave nothing to chart.
            let policy = if keep_unlabeled || label.is_empty() {
                LabelPolicy::KeyAsLabel
            } else {
                LabelPolicy::Skip
            };
            let config = ChartConfig::new()
                .with_labels(label.into_iter().collect())
                .with_label_policy(policy);
            compare_command(
                &bundles, &baseline, &config, &out_dir, metric, json, cli.quiet,
            )?;
        }
        Commands::Merge { inputs, output } => {
            merge_command(&inputs, &output, cli.quiet)?;
        }
    }

    Ok(())
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Parse a KEY=VALUE argument
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=LABEL, got '{}'", s)),
    }
}

/// Split a log argument into scenario name and path
fn split_log_entry(entry: &str) -> (String, String) {
    if let Some((name, path)) = entry.split_once('=') {
        if !name.is_empty() {
            return (name.to_string(), path.to_string());
        }
    }
    let name = Path::new(entry)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(entry);
    (name.to_string(), entry.to_string())
}

/// Execute the stats command
fn stats_command(
    logs: &[String],
    config: &ChartConfig,
    chart: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let start_time = Instant::now();

    info!("Summarizing {} log file(s)", logs.len());

    // Scrape and reduce every log before printing anything
    let progress = create_progress_bar(quiet, "Reading logs");
    let mut summaries: Vec<(String, usize, SummaryStats, SummaryStats)> = Vec::new();
    for entry in logs {
        let (name, path) = split_log_entry(entry);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read log file: {}", path))?;
        debug!("Read {} bytes from {}", content.len(), path);

        let samples = WrkSamples::parse(&content);
        if samples.req_sec.len() != samples.transfer_sec.len() {
            warn!(
                "scenario '{}' has {} request but {} transfer samples",
                name,
                samples.req_sec.len(),
                samples.transfer_sec.len()
            );
        }

        let scope = format!("scenario '{}'", name);
        let requests = samples
            .req_stats()
            .map_err(|e| map_benchsum_error(e, &scope))?;
        let transfer = samples
            .transfer_stats()
            .map_err(|e| map_benchsum_error(e, &scope))?;
        summaries.push((name, samples.req_sec.len(), requests, transfer));
    }
    progress.finish_and_clear();

    if json {
        let mut report = serde_json::Map::new();
        for (name, runs, requests, transfer) in &summaries {
            report.insert(
                name.clone(),
                serde_json::json!({
                    "runs": runs,
                    "requests_per_sec": requests,
                    "transfer_per_sec": transfer,
                }),
            );
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(report))?
        );
    } else {
        println!("=== Benchmark Summary ===");
        for (name, runs, requests, transfer) in &summaries {
            println!("\n--- {} ({} runs) ---", name, runs);
            print_metric_block("Requests/sec", requests);
            print_metric_block("Transfer/sec (MB)", transfer);
        }
        println!();
    }

    // Optional mean-RPS bar chart, one category per scenario
    if let Some(chart_path) = chart {
        let bars: Vec<MeanBar> = summaries
            .iter()
            .map(|(name, _, requests, _)| MeanBar {
                category: name.clone(),
                scenario: name.clone(),
                value: requests.mean,
            })
            .collect();

        let progress = create_progress_bar(quiet, "Rendering chart");
        let html = render_mean_bar_chart(&bars, "Mean requests per second", "Requests/sec", config)
            .map_err(|e| map_benchsum_error(e, "mean chart"))?;
        write_chart(&html, chart_path).map_err(|e| map_benchsum_error(e, "mean chart"))?;
        progress.finish_and_clear();

        if !quiet {
            eprintln!("✓ Chart written to {}", chart_path.display());
        }
    }

    info!(
        "Stats completed in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Print one metric's summary block
fn print_metric_block(label: &str, stats: &SummaryStats) {
    println!("  {}:", label);
    println!("    Mean:    {:>12.2}", stats.mean);
    println!("    Median:  {:>12.2}", stats.median);
    println!("    Stdev:   {:>12.2}", stats.stdev);
    println!("    Min:     {:>12.2}", stats.min);
    println!("    Max:     {:>12.2}", stats.max);
}

/// Execute the compare command
fn compare_command(
    bundles: &[PathBuf],
    baseline: &str,
    config: &ChartConfig,
    out_dir: &Path,
    metric: MetricChoice,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Comparing {} bundle(s) against '{}'",
        bundles.len(),
        baseline
    );

    // Load and merge all bundles up front
    let progress = create_progress_bar(quiet, "Loading bundles");
    let mut merged = ResultBundle::default();
    for path in bundles {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle: {}", path.display()))?;
        let scope = format!("bundle '{}'", path.display());
        let bundle =
            ResultBundle::from_json(&content).map_err(|e| map_benchsum_error(e, &scope))?;
        debug!("Loaded {} group(s) from {}", bundle.len(), path.display());
        merged.merge(bundle);
    }
    progress.finish_and_clear();

    if merged.is_empty() {
        error!("No benchmark groups found in the given bundles");
        anyhow::bail!("No benchmark groups found in the given bundles");
    }

    // Aggregate every group before rendering anything, so a bad group
    // cannot leave partial chart files behind.
    let progress = create_progress_bar(quiet, "Aggregating");
    let mut tables: Vec<(String, DropTable)> = Vec::new();
    for (group, sweep) in &merged.groups {
        let averages = average_by_size(sweep);
        let scope = format!("group '{}'", group);
        let drops =
            performance_drops(&averages, baseline).map_err(|e| map_benchsum_error(e, &scope))?;
        debug!("Group '{}': {} scenario(s) compared", group, drops.len());
        tables.push((group.clone(), drops));
    }
    progress.finish_and_clear();

    if json {
        let mut report = serde_json::Map::new();
        for (group, drops) in &tables {
            report.insert(group.clone(), serde_json::to_value(drops)?);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(report))?
        );
    }

    // Render all charts, then write all files
    let progress = create_progress_bar(quiet, "Rendering charts");
    let mut pages: Vec<(PathBuf, String)> = Vec::new();
    for (group, drops) in &tables {
        for drop_metric in metric.metrics() {
            let scope = format!("group '{}'", group);
            let html = render_drop_chart(drops, *drop_metric, group, config)
                .map_err(|e| map_benchsum_error(e, &scope))?;
            let file = out_dir.join(format!("{}-{}.html", group, drop_metric.file_stem()));
            pages.push((file, html));
        }
    }
    progress.finish_and_clear();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    for (file, html) in &pages {
        write_chart(html, file)
            .map_err(|e| map_benchsum_error(e, &format!("chart '{}'", file.display())))?;
    }

    // Display summary
    if !quiet {
        eprintln!("✓ Comparison complete");
        eprintln!("  Baseline:  {}", baseline);
        eprintln!("  Groups:    {}", tables.len());
        eprintln!("  Charts:");
        for (file, _) in &pages {
            eprintln!("    {}", file.display());
        }
        eprintln!("  Time:      {:.3}s", start_time.elapsed().as_secs_f64());
    }

    info!(
        "Comparison completed in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Execute the merge command
fn merge_command(inputs: &[PathBuf], output: &Path, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    info!("Merging result files from {} input(s)", inputs.len());

    // Collect candidate files; directory scans skip the output file itself
    let mut files: Vec<PathBuf> = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(input)
                .with_context(|| format!("Failed to read directory: {}", input.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .filter(|path| path.file_name() != output.file_name())
                .collect();
            entries.sort();
            debug!(
                "Found {} JSON file(s) in {}",
                entries.len(),
                input.display()
            );
            files.extend(entries);
        } else {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        error!("No JSON inputs found");
        anyhow::bail!("No JSON inputs found");
    }

    let progress = create_progress_bar(quiet, "Merging");
    let mut map = serde_json::Map::new();
    for file in &files {
        let stem = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("Invalid file name: {}", file.display()))?;
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read input file: {}", file.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", file.display()))?;
        debug!("Merged '{}' from {}", stem, file.display());
        map.insert(stem.to_string(), value);
    }
    progress.finish_and_clear();

    let merged = serde_json::Value::Object(map);
    let text = serde_json::to_string_pretty(&merged)?;
    fs::write(output, text + "\n")
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    // Display summary
    if !quiet {
        eprintln!("✓ Merge complete");
        eprintln!("  Inputs:    {}", files.len());
        eprintln!("  Output:    {}", output.display());
        eprintln!("  Time:      {:.3}s", start_time.elapsed().as_secs_f64());
    }

    info!(
        "Merge completed in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Create a progress bar (spinner) for operations
fn create_progress_bar(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        // Return a hidden progress bar in quiet mode
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Map BenchsumError to anyhow::Error with context
fn map_benchsum_error(error: BenchsumError, context: &str) -> anyhow::Error {
    match error {
        BenchsumError::EmptyInput => {
            anyhow::anyhow!("{}: no samples to reduce", context)
        }
        BenchsumError::MissingSizeKey { scenario, size } => {
            anyhow::anyhow!(
                "{}: scenario '{}' has no data for size {}",
                context,
                scenario,
                size
            )
        }
        BenchsumError::MissingScenario { scenario } => {
            anyhow::anyhow!(
                "{}: scenario '{}' not found in aggregated data",
                context,
                scenario
            )
        }
        BenchsumError::MalformedRecord { scenario, field } => {
            anyhow::anyhow!(
                "{}: malformed record in scenario '{}': bad field '{}'",
                context,
                scenario,
                field
            )
        }
        BenchsumError::InvalidPattern { pattern, message } => {
            anyhow::anyhow!(
                "{}: invalid metric pattern '{}': {}",
                context,
                pattern,
                message
            )
        }
        BenchsumError::JsonParseError(e) => {
            anyhow::anyhow!("{}: JSON parse error: {}", context, e)
        }
        BenchsumError::IoError(e) => {
            anyhow::anyhow!("{}: IO error: {}", context, e)
        }
    }
}
