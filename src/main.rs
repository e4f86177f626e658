//! html2draft - HTML to Draft.js raw content converter

use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use html2draft::{ConvertOptions, Document, convert_bytes, convert_file};

#[derive(Parser)]
#[command(name = "html2draft")]
#[command(version, about = "Convert HTML to Draft.js raw content JSON", long_about = None)]
#[command(after_help = "EXAMPLES:
    html2draft page.html                 Print JSON for page.html
    html2draft page.html -o page.json    Write JSON to page.json
    cat page.html | html2draft --pretty  Read from stdin")]
struct Cli {
    /// Input HTML file ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Fail on unsupported block-level tags
    #[arg(long)]
    strict: bool,

    /// Indent the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Off,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("html5ever")
        .build();
    // A logger can only be installed once; nothing to do if that fails.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: &Cli) -> html2draft::Result<()> {
    let options = ConvertOptions::new().with_strict(cli.strict);

    let doc: Document = match cli.input.as_deref() {
        None | Some("-") => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            convert_bytes(&bytes, &options)?
        }
        Some(path) => convert_file(path, &options)?,
    };

    let json = if cli.pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };

    match &cli.output {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    log::info!(
        "wrote {} blocks, {} entities",
        doc.blocks.len(),
        doc.entity_map.len()
    );
    Ok(())
}
