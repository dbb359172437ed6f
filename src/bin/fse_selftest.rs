use clap::Parser;
use tracing_subscriber::EnvFilter;

use fse::cost::{code_bits, ideal_bits};
use fse::{naive_frequencies, EntropyCoder, HuffmanCode, StatisticsTable};

const LOREM: &str = "
    Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt
    ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation
    ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in
    reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur
    sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id
    est laborum.
";

#[derive(Debug, Parser)]
#[command(name = "fse-selftest")]
#[command(about = "Round-trip sample texts through the big-integer entropy coder")]
struct Args {
    /// Text to round-trip; may be repeated. Defaults to built-in samples.
    #[arg(long = "text")]
    texts: Vec<String>,

    #[arg(long, default_value = "info")]
    log: String,
}

fn samples() -> Vec<String> {
    vec![
        "Hello, world!".to_string(),
        "Huffman coding is limited to 1 bit per symbol. FSE can a symbol as a fraction of a bit."
            .to_string(),
        LOREM.split_whitespace().collect::<Vec<_>>().join(" "),
    ]
}

fn roundtrip(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let symbols: Vec<char> = text.chars().collect();
    let table = StatisticsTable::new(naive_frequencies(symbols.iter().copied()))?;
    let ideal = ideal_bits(&table, &symbols)?;
    let huffman = HuffmanCode::new(&table).encoded_bits(&symbols)?;
    let coder = EntropyCoder::new(table);

    let encoded = coder.encode(&symbols)?;
    println!("  Encoded: {encoded}");
    let decoded: String = coder.decode(&encoded)?.into_iter().collect();
    println!("  Decoded: {decoded}");

    tracing::info!(
        symbols = symbols.len(),
        bits = code_bits(&encoded),
        ideal_bits = ideal,
        huffman_bits = huffman,
        "coded"
    );

    if decoded != text {
        return Err("decoding failed".into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log))
        .init();

    let texts = if args.texts.is_empty() {
        samples()
    } else {
        args.texts
    };

    println!("Testing...");
    for text in &texts {
        println!("Test: {text}");
        roundtrip(text)?;
    }
    println!("Tests pass.");
    Ok(())
}
