//! CLI tool for inspecting Chatterbox tokenization
//!
//! Encodes text the way the TTS model sees it, decodes generated ids back to
//! text, and reports which language markers a vocabulary provides.
//!
//! Usage:
//!     cargo run --features cli --bin chatterbox-tokenize -- --vocab model_dir encode "Hello world"
//!     cargo run --features cli --bin chatterbox-tokenize -- --vocab model_dir --multilingual encode --lang de "Guten Tag"
//!     cargo run --features cli --bin chatterbox-tokenize -- --vocab model_dir decode 12 40 3 51

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chatterbox_tokenizer::{
    device_info, parse_device, TextTokenizer, TokenizerConfig, TokenizerKind,
    SUPPORTED_LANGUAGES,
};

/// Encode and decode text with a Chatterbox vocabulary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vocabulary file, model directory, or HuggingFace repo ID
    /// (defaults to the config's repo_id)
    #[arg(long)]
    vocab: Option<String>,

    /// Tokenizer config JSON (vocab_file, kind, language_id, repo_id)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the multilingual tokenizer regardless of the config (and its
    /// vocabulary file unless the config names one)
    #[arg(long)]
    multilingual: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text to token IDs (printed as JSON)
    Encode {
        text: String,

        /// Language code (en, de, fr, ...); defaults to the config's language_id
        #[arg(short, long)]
        lang: Option<String>,

        /// Wrap in [START] ... [STOP] (ignored with --pad)
        #[arg(long)]
        special: bool,

        /// Left-pad or truncate to this many tokens
        #[arg(long)]
        pad: Option<usize>,

        /// Build the [1, N] model input tensor and print its shape instead
        #[arg(long)]
        tensor: bool,

        /// Device for --tensor (auto, cpu, cuda, cuda:N, metal)
        #[arg(long, default_value = "cpu")]
        device: String,
    },

    /// Decode token IDs back to text
    Decode {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// List supported languages and whether the vocabulary has their marker
    Languages,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TokenizerConfig::from_file(path)?,
        None => TokenizerConfig::default(),
    };
    if args.multilingual {
        config.kind = TokenizerKind::Multilingual;
    }

    let tokenizer = config.load(args.vocab.as_deref())?;

    match args.command {
        Command::Encode {
            text,
            lang,
            special,
            pad,
            tensor,
            device,
        } => {
            let lang = config.resolve_language(lang.as_deref());
            if tensor {
                let device = parse_device(&device)?;
                let tokens = tokenizer.text_to_tokens(&text, lang, &device)?;
                println!(
                    "shape={:?} dtype={:?} device={}",
                    tokens.dims(),
                    tokens.dtype(),
                    device_info(&device)
                );
                return Ok(());
            }

            let ids = match (special, pad) {
                (_, Some(max_length)) => tokenizer.encode_padded(&text, lang, max_length)?,
                (true, None) => tokenizer.encode_with_special(&text, lang)?,
                (false, None) => tokenizer.encode(&text, lang)?,
            };
            println!("{}", serde_json::to_string(&ids)?);
        }
        Command::Decode { ids } => {
            println!("{}", tokenizer.decode(&ids)?);
        }
        Command::Languages => print_languages(tokenizer.as_ref()),
    }

    Ok(())
}

fn print_languages(tokenizer: &dyn TextTokenizer) {
    let vocab = tokenizer.vocabulary();
    println!("{:<6} {:<12} {:<8} {}", "code", "language", "marker", "id");
    for lang in SUPPORTED_LANGUAGES {
        let id = vocab
            .token_to_id(lang.marker())
            .map(|id| id.to_string())
            .unwrap_or_else(|| "missing".to_string());
        println!(
            "{:<6} {:<12} {:<8} {}",
            lang.code(),
            lang.name(),
            lang.marker(),
            id
        );
    }

    let available = SUPPORTED_LANGUAGES
        .iter()
        .filter(|lang| vocab.contains(lang.marker()))
        .count();
    println!("\n{available}/{} languages available", SUPPORTED_LANGUAGES.len());
}
