use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use charscope::api;
use charscope::{DetectionInput, Recognizer, Script};
use clap::{Parser, Subcommand};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use tracing::error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Statistical single-byte charset recognition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of a table
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a file and report candidate charsets, best first
    Detect {
        file: PathBuf,

        /// Restrict to one writing system (latin, cyrillic, greek, hebrew, arabic)
        #[arg(long)]
        script: Option<String>,
    },
    /// Show the recognizer bank
    List,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let bank = api::recognizers().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Detect { file, script } => {
            let script = script.as_deref().map(parse_script);
            run_detect(&bank, &file, script, cli.json);
        }
        Commands::List => run_list(&bank, cli.json),
    }
}

fn parse_script(raw: &str) -> Script {
    Script::from_str(raw).unwrap_or_else(|_| {
        let known: Vec<String> = Script::iter().map(|s| s.to_string()).collect();
        error!("Unknown script '{}' (expected one of: {})", raw, known.join(", "));
        process::exit(1);
    })
}

fn run_detect(bank: &[Recognizer], file: &Path, script: Option<Script>, json: bool) {
    let bytes = std::fs::read(file).unwrap_or_else(|e| {
        error!("Cannot read {}: {}", file.display(), e);
        process::exit(1);
    });

    let input = DetectionInput::from_bytes(&bytes);
    let matches = api::scan(bank, &input, script);

    if json {
        match serde_json::to_string_pretty(&matches) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    if matches.is_empty() {
        println!("No candidate charsets for {}", file.display());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Charset", "Language", "Confidence"]);

    for m in &matches {
        let color = if m.confidence >= 50 {
            Color::Green
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(m.charset),
            Cell::new(m.language.unwrap_or("-")),
            Cell::new(m.confidence)
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn run_list(bank: &[Recognizer], json: bool) {
    if json {
        let entries: Vec<serde_json::Value> = bank
            .iter()
            .map(|r| serde_json::json!({ "charset": r.charset(), "script": r.script() }))
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["Charset", "Script"]);
    for r in bank {
        table.add_row(vec![Cell::new(r.charset()), Cell::new(r.script())]);
    }
    println!("{table}");
}
