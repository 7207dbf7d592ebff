//! `overlap` command line tool.
//!
//! Compares every document in a directory against every other one, prints
//! the similarity matrix and writes a highlighted HTML (and/or JSON) report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use overlap::{
    LocateStrategy, OverlapConfig, Pipeline, ReportFormat, ScorerKind, render_console_table,
    write_html_report, write_json_report,
};

const JSON_REPORT_FILE: &str = "report.json";

#[derive(Parser, Debug)]
#[command(
    name = "overlap",
    version,
    about = "Detect overlapping passages between documents and render a side-by-side report"
)]
struct Cli {
    /// Directory holding the documents to compare (txt, docx, odt, pdf)
    in_dir: PathBuf,

    /// Output directory for the report [default: results/<timestamp>]
    #[arg(short = 'o', long = "out-dir", visible_alias = "out_dir")]
    out_dir: Option<PathBuf>,

    /// Minimum number of consecutive matching words highlighted [default: 2]
    #[arg(short = 's', long = "block-size", visible_alias = "block_size")]
    block_size: Option<usize>,

    /// YAML configuration file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report files to write: html, json or both
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Score used for the matrix: ratio, overlap or jaccard
    #[arg(long)]
    scorer: Option<ScorerKind>,

    /// How matches are located in the text: literal or token_aligned
    #[arg(long)]
    locate: Option<LocateStrategy>,

    /// Compare document pairs in parallel
    #[arg(long)]
    parallel: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<OverlapConfig> {
        let mut cfg = match &self.config {
            Some(path) => OverlapConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => OverlapConfig::default(),
        };

        if let Some(block_size) = self.block_size {
            cfg.matching.min_block_size = block_size;
        }
        if let Some(scorer) = self.scorer {
            cfg.matching.scorer = scorer;
        }
        if let Some(locate) = self.locate {
            cfg.matching.locate = locate;
        }
        if self.parallel {
            cfg.matching.use_parallel = true;
        }
        if let Some(format) = self.format {
            cfg.report.format = format;
        }
        if let Some(out_dir) = &self.out_dir {
            cfg.report.output_dir = Some(out_dir.clone());
        }

        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }
}

fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn default_output_dir() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    PathBuf::from("results").join(stamp)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    let cfg = cli.load_config()?;
    let pipeline = Pipeline::from_config(&cfg)?;
    let report = pipeline
        .run(&cli.in_dir)
        .with_context(|| format!("comparing documents in {}", cli.in_dir.display()))?;

    print!("{}", render_console_table(&report.matrix));

    let out_dir = cfg.report.output_dir.clone().unwrap_or_else(default_output_dir);
    if cfg.report.format.html() {
        let results = write_html_report(&out_dir, &report)
            .with_context(|| format!("writing HTML report to {}", out_dir.display()))?;
        println!("Results: {}", results.display());
    }
    if cfg.report.format.json() {
        let path = out_dir.join(JSON_REPORT_FILE);
        write_json_report(&path, &report)
            .with_context(|| format!("writing JSON report to {}", path.display()))?;
        println!("JSON report: {}", path.display());
    }

    Ok(())
}
