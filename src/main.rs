use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fogcheck::classifier::classify_paragraphs;
use fogcheck::document::{read_document, write_document};
use fogcheck::text::{join_paragraphs, split_paragraphs};
use fogcheck::{report, Config, Corrector};

/// Readability analyzer, spelling fixer and paragraph classifier
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding word lists and default input/output files
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fix spelling and report readability paragraph by paragraph
    Analyze(AnalyzeArgs),
    /// Split paragraphs into technology and medical files
    Classify(ClassifyArgs),
    /// Add a word to the custom dictionary
    AddWord {
        /// Word to add
        word: String,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input text file (default: <data-dir>/in/raw-data.txt)
    input: Option<PathBuf>,

    /// Where to save the corrected text (default: <data-dir>/out/corrected-spelling-data.txt)
    #[arg(short, long, conflicts_with = "no_output")]
    output: Option<PathBuf>,

    /// Only print the report
    #[arg(long)]
    no_output: bool,

    /// Additional word list (`word` or `word|frequency` per line)
    #[arg(short = 'd', long)]
    custom_dict: Option<PathBuf>,

    /// File with extra technical terms, one per line
    #[arg(long)]
    terms: Option<PathBuf>,

    /// Number of frequent words to list per paragraph
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Largest edit distance accepted for a correction
    #[arg(long, default_value_t = 2)]
    max_distance: usize,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Input text file (default: <data-dir>/in/raw-data.txt)
    input: Option<PathBuf>,

    /// Output for technology paragraphs (default: <data-dir>/out/technology.txt)
    #[arg(long)]
    technology: Option<PathBuf>,

    /// Output for medical paragraphs (default: <data-dir>/out/medical.txt)
    #[arg(long)]
    medical: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config {
        data_dir: cli.data_dir,
        ..Config::default()
    };

    match cli.command {
        Command::Analyze(args) => analyze(config, args),
        Command::Classify(args) => classify(&config, args),
        Command::AddWord { word } => {
            let mut corrector = Corrector::new(&config)?;
            corrector.add_custom_word(&word)?;
            println!("Word '{}' added to the custom dictionary.", word);
            Ok(())
        }
    }
}

fn analyze(mut config: Config, args: AnalyzeArgs) -> anyhow::Result<()> {
    config.custom_dict = args.custom_dict;
    config.top_words = args.top;
    config.max_distance = args.max_distance;
    if let Some(ref terms) = args.terms {
        config
            .technical_terms
            .extend_from_file(terms)
            .context("loading technical terms")?;
    }

    let input = args.input.unwrap_or_else(|| config.default_input());
    let output = match (args.no_output, args.output) {
        (true, _) => None,
        (false, Some(path)) => Some(path),
        (false, None) => Some(config.default_corrected_output()),
    };

    // read before building the dictionary so a missing file fails fast
    let text = read_document(&input)?;
    let corrector = Corrector::new(&config)?;
    let document = corrector.process_document(&text);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_and_save(&mut out, &document, output.as_deref())?;
    Ok(())
}

fn classify(config: &Config, args: ClassifyArgs) -> anyhow::Result<()> {
    let input = args.input.unwrap_or_else(|| config.default_input());
    let technology = args
        .technology
        .unwrap_or_else(|| config.default_technology_output());
    let medical = args
        .medical
        .unwrap_or_else(|| config.default_medical_output());

    let paragraphs = split_paragraphs(&read_document(&input)?);
    if paragraphs.is_empty() {
        println!("No paragraphs found in {}", input.display());
        return Ok(());
    }

    let classification = classify_paragraphs(&paragraphs);

    write_document(&technology, &join_paragraphs(&classification.technology))?;
    println!(
        "Technology-related content ({} paragraphs) written to {}",
        classification.technology.len(),
        technology.display()
    );

    write_document(&medical, &join_paragraphs(&classification.medical))?;
    println!(
        "Medical-related content ({} paragraphs) written to {}",
        classification.medical.len(),
        medical.display()
    );

    if classification.unclassified > 0 {
        println!("{} paragraphs matched neither category", classification.unclassified);
    }
    Ok(())
}
