use huffcode::encode_text;
use huffcode::Result;

const SAMPLE_TEXT: &str = "Abdullah is a bad man!  ";

fn main() -> Result<()> {
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| SAMPLE_TEXT.to_string());
    println!("Encoding {:?}", text);
    let encoding = encode_text(&text)?;
    println!("{}", encoding.bits());

    let stats = encoding.statistics();
    println!("\nCodes");
    for (symbol, code) in stats.codes.iter() {
        println!("{:?}: {}", symbol, code);
    }

    println!("\nFrequency / probability");
    for (symbol, count) in stats.frequencies.iter() {
        println!(
            "{:?}: {} {:.4}",
            symbol,
            count,
            stats.frequencies.probability(&symbol)
        );
    }
    println!("Total: {}", stats.total);

    println!("\nCompression ratio: {:.2}%", stats.compression_ratio);
    println!(
        "Fixed length: {} bits per symbol, {} bits",
        stats.max_length,
        stats.fixed_length_bits()
    );
    println!(
        "Encoded:      {:.4} bits per symbol, {} bits",
        stats.average_length,
        stats.encoded_bits()
    );
    println!("Saved:        {:.4} bits per symbol", stats.bits_saved_per_symbol());

    encoding.verify(&text.chars().collect::<Vec<_>>())?;
    let decoded = encoding.decode_text()?;
    println!("\nDecoded {:?}", decoded);
    println!("Bits: {}", encoding.into_bits().len());
    Ok(())
}
