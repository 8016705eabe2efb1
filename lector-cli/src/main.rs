// lector: convert a PDF's text into a spoken-audio file

use clap::Parser;
use lector_pdf::{ExtractError, PdfExtractor};
use lector_spk::{SpeechError, SpeechOptions, SpeechSynthesizer};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lector")]
#[command(about = "Convert PDF text to speech (MP3)", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to input PDF file
    #[arg(long, short, default_value = "introduction-aws-security.pdf")]
    input: PathBuf,

    /// Output MP3 file path
    #[arg(long, short, default_value = "Audio.mp3")]
    output: PathBuf,

    /// Language code for synthesis (default: en)
    #[arg(long, short, default_value = "en")]
    lang: String,

    /// Speak more slowly
    #[arg(long)]
    slow: bool,
}

/// Exit code for an extraction failure: 2 when the input file is missing,
/// 3 for any other read error.
fn extract_failure_code(err: &ExtractError) -> i32 {
    match err {
        ExtractError::NotFound(_) => 2,
        _ => 3,
    }
}

/// Exit code for a synthesis failure: 4 when there was nothing to speak,
/// 5 for engine or write errors.
fn speech_failure_code(err: &SpeechError) -> i32 {
    match err {
        SpeechError::EmptyText => 4,
        _ => 5,
    }
}

async fn run(cli: Cli) -> i32 {
    let extraction = match PdfExtractor::new().extract(&cli.input) {
        Ok(extraction) => extraction,
        Err(err @ ExtractError::NotFound(_)) => {
            eprintln!("{}", err);
            return extract_failure_code(&err);
        }
        Err(err) => {
            eprintln!("Error extracting text from PDF: {}", err);
            return extract_failure_code(&err);
        }
    };

    if extraction.pages_skipped > 0 {
        warn!(
            skipped = extraction.pages_skipped,
            total = extraction.pages.len(),
            "some pages could not be extracted"
        );
    }

    let text = extraction.joined_text();
    if text.trim().is_empty() {
        eprintln!("No text was extracted from the PDF.");
        return 4;
    }

    let options = SpeechOptions {
        language: cli.lang,
        slow: cli.slow,
    };
    match SpeechSynthesizer::new()
        .synthesize_to_file(&text, &cli.output, &options)
        .await
    {
        Ok(()) => {
            println!("Saved audio to {}", cli.output.display());
            0
        }
        Err(err) => {
            eprintln!("Error generating audio: {}", err);
            speech_failure_code(&err)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}
