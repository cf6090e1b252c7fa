use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::error;

use pramaan::models::DocumentKind;
use pramaan::processing::ExtractionConfig;
use pramaan::validation::reference::DEFAULT_DB_PATH;
use pramaan::validation::ReferenceStore;
use pramaan::DocumentValidator;

#[derive(Parser)]
#[command(
    name = "pramaan",
    version,
    about = "Validate Aadhaar cards and Driving Licences from PDF files"
)]
struct Cli {
    /// Path to the reference-store database.
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an Aadhaar card PDF.
    Aadhaar(ValidateArgs),
    /// Validate a Driving Licence PDF.
    Dl(ValidateArgs),
    /// Create the reference-store tables and seed the demo records.
    Seed,
}

#[derive(Args)]
struct ValidateArgs {
    /// The PDF file to validate.
    pdf: PathBuf,

    /// Emit the full report as JSON instead of a plain-text message.
    #[arg(long)]
    json: bool,

    /// Rasterization resolution for the OCR fallback.
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Minimum embedded-text length before the OCR fallback kicks in.
    #[arg(long, default_value_t = 50)]
    threshold: usize,

    /// Tesseract language code.
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Skip image preprocessing before OCR.
    #[arg(long)]
    no_preprocess: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("An error occurred during validation: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ReferenceStore::open(&cli.db)?;

    match cli.command {
        Commands::Seed => {
            store.seed_defaults()?;
            println!("Reference store ready at {}", cli.db.display());
        }
        Commands::Aadhaar(args) => validate(&store, DocumentKind::Aadhaar, &args)?,
        Commands::Dl(args) => validate(&store, DocumentKind::DrivingLicence, &args)?,
    }

    Ok(())
}

fn validate(
    store: &ReferenceStore,
    kind: DocumentKind,
    args: &ValidateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ExtractionConfig {
        min_native_text_len: args.threshold,
        ocr_dpi: args.dpi,
        ocr_language: args.lang.clone(),
        preprocess: !args.no_preprocess,
    };

    let validator = DocumentValidator::new(config);
    let report = validator.validate(&args.pdf, kind, store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message());
    }

    Ok(())
}
