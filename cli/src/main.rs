//! unlayout CLI - page text reconstruction from saved layout analysis

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unlayout::render::{page_to_line, to_json};
use unlayout::{
    DocumentAnalysisParser, JsonAnalyzer, JsonFormat, LayoutOptions, LayoutStats, Page, PageStream,
    TableFormat,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "unlayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct page text with inline tables from layout analysis JSON", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct the pages of one or more saved analysis results
    Pages {
        /// Analysis result files (bare result or operation envelope)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file for one input, output directory for several
        /// (stdout if not specified with one input)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "jsonl")]
        format: OutputMode,

        /// How tables are flattened into page text
        #[arg(
            long,
            value_enum,
            default_value = "html",
            env = "UNLAYOUT_TABLE_FORMAT"
        )]
        table_format: TableMode,

        /// Number of pages buffered ahead of the writer
        #[arg(long, default_value = "16")]
        buffer: usize,
    },

    /// Show document and reconstruction statistics
    Info {
        /// Analysis result file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Concatenated page text (page offsets index into it)
    Text,
    /// Pretty-printed JSON array of pages
    Json,
    /// One JSON object per page per line
    Jsonl,
}

impl OutputMode {
    fn extension(self) -> &'static str {
        match self {
            OutputMode::Text => "txt",
            OutputMode::Json => "json",
            OutputMode::Jsonl => "jsonl",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// HTML tables with header cells and spans
    Html,
    /// Tab-separated rows
    Text,
}

impl From<TableMode> for TableFormat {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Html => TableFormat::Html,
            TableMode::Text => TableFormat::Text,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Some(Commands::Pages {
            inputs,
            output,
            format,
            table_format,
            buffer,
        }) => {
            let options = LayoutOptions::new()
                .with_table_format(table_format.into())
                .with_channel_capacity(buffer);
            cmd_pages(&inputs, output.as_deref(), format, options)
        }
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unlayout pages <FILE>...".yellow());
            println!("       unlayout --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_pages(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: OutputMode,
    options: LayoutOptions,
) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let parser = DocumentAnalysisParser::with_options(Arc::new(JsonAnalyzer::new()), options);

    if let [input] = inputs {
        let pages = rt.block_on(read_pages(&parser, input))?;
        let rendered = render_pages(&pages, format)?;
        match output {
            Some(path) => {
                fs::write(path, &rendered)?;
                println!("{} {}", "Saved to".green(), path.display());
            }
            None => print!("{}", rendered),
        }
        return Ok(());
    }

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let paths = output_paths(&output_dir, inputs, format);
    let mut failed = 0;
    for (input, path) in inputs.iter().zip(paths) {
        pb.set_message(input.display().to_string());
        let result = rt
            .block_on(read_pages(&parser, input))
            .and_then(|pages| render_pages(&pages, format))
            .and_then(|rendered| {
                fs::write(&path, rendered)?;
                Ok(&path)
            });

        match result {
            Ok(path) => log::debug!("Wrote {}", path.display()),
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} files written to {}",
        "Done!".green().bold(),
        inputs.len() - failed,
        inputs.len(),
        output_dir.display()
    );

    if failed > 0 {
        return Err(format!("{} files failed", failed).into());
    }
    Ok(())
}

/// Drive the page channel for one file and collect its pages in order.
async fn read_pages(parser: &DocumentAnalysisParser, input: &Path) -> CliResult<Vec<Page>> {
    let content = tokio::fs::read(input).await?;
    let mut rx = parser.stream_pages(content);

    let mut pages = Vec::new();
    while let Some(page) = rx.recv().await {
        pages.push(page?);
    }
    Ok(pages)
}

fn render_pages(pages: &[Page], format: OutputMode) -> CliResult<String> {
    let rendered = match format {
        OutputMode::Text => pages.iter().map(|p| p.text.as_str()).collect::<String>(),
        OutputMode::Json => {
            let mut json = to_json(pages, JsonFormat::Pretty)?;
            json.push('\n');
            json
        }
        OutputMode::Jsonl => {
            let mut lines = String::new();
            for page in pages {
                lines.push_str(&page_to_line(page)?);
                lines.push('\n');
            }
            lines
        }
    };
    Ok(rendered)
}

/// One output path per input, named after the input's stem. Inputs sharing a
/// stem get a numeric suffix so no output overwrites another.
fn output_paths(dir: &Path, inputs: &[PathBuf], format: OutputMode) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = format!("{}.pages.{}", stem, format.extension());
            let mut n = 1;
            while !taken.insert(name.clone()) {
                n += 1;
                name = format!("{}-{}.pages.{}", stem, n, format.extension());
            }
            if n > 1 {
                log::warn!(
                    "{} shares its name with an earlier input; writing {}",
                    input.display(),
                    name
                );
            }
            dir.join(name)
        })
        .collect()
}

fn cmd_info(input: &Path, json: bool) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let parser = DocumentAnalysisParser::new(Arc::new(JsonAnalyzer::new()));
    let mut stream: PageStream = rt.block_on(parser.parse_file(input))?;
    let content_chars = stream.by_ref().map(|p| p.char_len()).sum::<usize>();
    let stats = stream.stats().clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), stream.page_count());

    println!();
    println!("{}", "Reconstruction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print_stats(&stats, content_chars);

    Ok(())
}

fn print_stats(stats: &LayoutStats, content_chars: usize) {
    println!("{}: {}", "Characters".bold(), content_chars);
    println!("{}: {}", "Tables rendered".bold(), stats.table_count);

    let orphaned = stats.orphaned_tables.to_string();
    println!(
        "{}: {}",
        "Tables without page".bold(),
        if stats.orphaned_tables > 0 {
            orphaned.yellow()
        } else {
            orphaned.normal()
        }
    );
    println!(
        "{}: {}",
        "Span chars outside page".bold(),
        stats.out_of_bounds_chars
    );
}

fn cmd_version() {
    println!("{} {}", "unlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page text reconstruction from layout analysis");
    println!();
    println!("License: MIT");
}
