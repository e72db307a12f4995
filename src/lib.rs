/*!
huffcode builds a minimum-redundancy prefix code (Huffman code) for the symbols of an input, encodes
the input into a string of `'0'` and `'1'` and decodes it back.

The bits are kept as text on purpose, which makes the codes easy to inspect. There is no packing
into bytes and no serialization of the tree.

Encoding counts the symbols, builds the tree and derives the code table fresh for every call. The
resulting [`Encoding`] keeps the frequencies and the code table, which is everything needed to
decode the bits again or to compute [`Statistics`]. A [`Session`] does the same bookkeeping for
callers which only want to hand over bits.

```
let encoding = huffcode::encode_text("aab").unwrap();
assert_eq!(encoding.bits(), "110");
assert_eq!(encoding.decode_text().unwrap(), "aab");
```
*/

use log::*;

pub mod compress;
pub mod decompress;
pub mod stats;

pub use crate::compress::encode_with;
pub use crate::decompress::decode;
pub use crate::stats::Statistics;
pub use common::{HuffError, Result, Symbol};
pub use hist::{count_symbols, FrequencyTable};
pub use hufflpuff::{build_tree, tree_to_table, CodeTable, Node, Tree};

/// The result of one encode call: the bits and the tables they were created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding<S: Symbol> {
    bits: String,
    codes: CodeTable<S>,
    frequencies: FrequencyTable<S>,
}

impl<S: Symbol> Encoding<S> {
    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn into_bits(self) -> String {
        self.bits
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// decodes the bits of this encoding
    pub fn decode(&self) -> Result<Vec<S>> {
        decode(&self.bits, &self.codes)
    }

    /// decodes other bits created with the same code table
    pub fn decode_bits(&self, bits: &str) -> Result<Vec<S>> {
        decode(bits, &self.codes)
    }

    pub fn statistics(&self) -> Statistics<'_, S> {
        Statistics::compute(&self.codes, &self.frequencies)
    }

    /// Decodes the bits and compares them against `input`.
    ///
    /// A mismatch fails with `CorruptEncoding`, positioned at the first bit of the first symbol
    /// that differs.
    pub fn verify(&self, input: &[S]) -> Result<()> {
        let decoded = self.decode()?;
        if decoded == input {
            return Ok(());
        }
        let position = decoded
            .iter()
            .zip(input)
            .take_while(|(decoded, original)| decoded == original)
            .map(|(symbol, _)| self.codes.code_len(symbol).unwrap_or(0))
            .sum();
        warn!("decoded symbols differ from the input at bit {}", position);
        Err(HuffError::CorruptEncoding { position })
    }
}

impl Encoding<char> {
    pub fn decode_text(&self) -> Result<String> {
        decode_text(&self.bits, &self.codes)
    }
}

/// Counts the symbols of `input`, builds the tree and code table, and encodes `input` with it.
///
/// Fails with `InvalidInput` for empty input, since there is no symbol to build a tree from.
pub fn encode<S: Symbol>(input: &[S]) -> Result<Encoding<S>> {
    let frequencies = count_symbols(input);
    let tree = build_tree(&frequencies)?;
    let codes = tree_to_table(&tree);
    let bits = encode_with(input, &codes)?;
    debug!(
        "encoded {} symbols with {} codes, tree depth {}",
        input.len(),
        codes.len(),
        tree.get_depth()
    );
    Ok(Encoding {
        bits,
        codes,
        frequencies,
    })
}

/// encodes the chars of `text`
pub fn encode_text(text: &str) -> Result<Encoding<char>> {
    encode(&text.chars().collect::<Vec<_>>())
}

pub fn decode_text(bits: &str, table: &CodeTable<char>) -> Result<String> {
    Ok(decode(bits, table)?.into_iter().collect())
}

/// Keeps the code table of the most recent encode call for the following decode calls.
#[derive(Debug, Clone)]
pub struct Session<S: Symbol> {
    last: Option<Encoding<S>>,
}

impl<S: Symbol> Default for Session<S> {
    fn default() -> Self {
        Session { last: None }
    }
}

impl<S: Symbol> Session<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `input` with a fresh code table, which replaces the previous one.
    ///
    /// On failure the previous table is dropped as well, a later decode fails with
    /// `MissingCodeTable` instead of using a stale table.
    pub fn encode(&mut self, input: &[S]) -> Result<&str> {
        self.last = None;
        let encoding = encode(input)?;
        Ok(self.last.get_or_insert(encoding).bits())
    }

    /// decodes with the code table of the most recent encode call
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        self.last()?.decode_bits(bits)
    }

    pub fn statistics(&self) -> Option<Statistics<'_, S>> {
        self.last.as_ref().map(Encoding::statistics)
    }

    pub fn code_table(&self) -> Option<&CodeTable<S>> {
        self.last.as_ref().map(Encoding::code_table)
    }

    pub fn last_encoding(&self) -> Option<&Encoding<S>> {
        self.last.as_ref()
    }

    fn last(&self) -> Result<&Encoding<S>> {
        self.last.as_ref().ok_or(HuffError::MissingCodeTable)
    }
}
