use std::path::PathBuf;

use clap::Parser;
use letter_huffman::{CodeReport, FrequencyReport, HuffmanCodec, HuffmanError};
use log::info;

const SPEECH: &str = "I have a dream that one day this nation will rise up and live out the true \
meaning of its creed we hold these truths to be self evident that all men are created equal \
I have a dream that one day on the red hills of Georgia the sons of former slaves and the sons \
of former slave owners will be able to sit down together at the table of brotherhood I have a \
dream that one day even the state of Mississippi a state sweltering with the heat of injustice \
sweltering with the heat of oppression will be transformed into an oasis of freedom and justice \
I have a dream that my four little children will one day live in a nation where they will not \
be judged by the color of their skin but by the content of their character I have a dream today";

/// Build letter Huffman codes from a corpus and show how words encode
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// corpus file to count letters from (defaults to the built-in speech)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// phrase encoded after the individual words
    #[arg(long, default_value = "i have a dream")]
    phrase: String,

    /// words to encode
    #[arg(default_values = [
        "dream", "freedom", "justice", "equality", "brotherhood", "have", "nation",
    ])]
    words: Vec<String>,
}

fn show(codec: &HuffmanCodec, text: &str) {
    let encoded = codec.encode(text);
    if encoded.is_empty() {
        println!("{}: (no encodable letters)", text);
        return;
    }
    println!("{}: {} (length: {} bits)", text, encoded, encoded.bit_len());
    println!(
        "  compression: {:.2}% (original: {} bits)",
        encoded.compression_ratio(),
        encoded.baseline_bits()
    );
}

fn main() -> Result<(), HuffmanError> {
    env_logger::init();
    let args = Args::parse();

    let codec = match &args.corpus {
        Some(path) => HuffmanCodec::from_file(path)?,
        None => HuffmanCodec::from_text(SPEECH)?,
    };
    info!(
        "{} distinct letters, {} internal nodes",
        codec.tree().leaf_count(),
        codec.tree().internal_count()
    );

    if codec.tree().is_empty() {
        println!("corpus has no letters, nothing to encode");
        return Ok(());
    }

    println!("{}", FrequencyReport::new(codec.frequencies()));
    println!("{}", CodeReport::new(codec.table()));

    println!("=== word encodings ===");
    for word in &args.words {
        show(&codec, word);
    }

    println!();
    show(&codec, &args.phrase);
    Ok(())
}
