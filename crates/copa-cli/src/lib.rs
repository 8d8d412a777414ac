//! Command-line driver: read CoNLL-U, extract per sentence, render.
//!
//! The batch policy lives here: a sentence that fails extraction is logged
//! and skipped; the rest of the document proceeds.

use clap::{Parser, ValueEnum};
use copa_conllu::{ConlluReader, ConlluReaderConfig};
use copa_extractor::{ExtractorConfig, TripleExtractor};
use copa_output::{to_json, to_tabular, to_text, SentenceRecord};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Rendering format for the extracted triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Structured JSON, one object per sentence
    Json,
    /// Tab-separated rows with hierarchical extraction ids
    Tabular,
    /// Plain text triples, sub-extractions indented
    Text,
}

/// Open Information Extraction for Portuguese over UD trees.
#[derive(Debug, Parser)]
#[command(name = "copa", version, about)]
pub struct Args {
    /// CoNLL-U input file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Write the rendering here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rendering format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Split coordinated verbs and decompose coordinated complements
    #[arg(long)]
    pub coordinating_conjunctions: bool,

    /// Emit sub-extractions for subordinate clauses with explicit subjects
    #[arg(long)]
    pub subordinating_conjunctions: bool,

    /// Permit extractions with a hidden (empty) subject
    #[arg(long)]
    pub hidden_subjects: bool,

    /// Synthesize "is-a" triples from appositives
    #[arg(long)]
    pub appositive: bool,

    /// Infer triples across appositives (implies --appositive semantics)
    #[arg(long)]
    pub appositive_transitivity: bool,

    /// Enable every extraction module
    #[arg(long)]
    pub all: bool,

    /// Stop after this many sentences
    #[arg(long)]
    pub max_sentences: Option<usize>,

    /// Verbose tracing; never changes outputs
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Map the CLI flags onto an extractor configuration.
    pub fn extractor_config(&self) -> ExtractorConfig {
        if self.all {
            return ExtractorConfig {
                debug: self.debug,
                ..ExtractorConfig::full()
            };
        }
        ExtractorConfig {
            coordinating_conjunctions: self.coordinating_conjunctions,
            subordinating_conjunctions: self.subordinating_conjunctions,
            hidden_subjects: self.hidden_subjects,
            appositive: self.appositive || self.appositive_transitivity,
            appositive_transitivity: self.appositive_transitivity,
            debug: self.debug,
        }
    }
}

/// Run the CLI end to end.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.debug);
    run(&args)
}

/// Testable body: everything past argument parsing.
pub fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let reader = ConlluReader::with_config(ConlluReaderConfig {
        max_sentences: args.max_sentences,
        ..Default::default()
    });
    let sentences = reader.read_str(&input)?;

    let extractor = TripleExtractor::new(args.extractor_config());
    let mut records = Vec::new();
    for sentence in &sentences {
        match extractor.extract(sentence) {
            Ok(set) => records.push(SentenceRecord::from_extractions(sentence, &set)),
            Err(e) => warn!("sentence '{}' failed: {}", sentence.sent_id(), e),
        }
    }

    let rendered = match args.format {
        OutputFormat::Json => to_json(&records)?,
        OutputFormat::Tabular => to_tabular(&records),
        OutputFormat::Text => to_text(&records),
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
