use common::{HuffError, Result, Symbol};
use hufflpuff::CodeTable;
use log::*;

/// Decodes a bit string created with the same code table.
///
/// The candidate code grows one bit at a time until it matches a code of the table, then the
/// symbol is emitted and the candidate starts over. Since the table is prefix-free, the first
/// match is the only possible one.
///
/// Fails with `CorruptEncoding` if the candidate gets longer than the longest code, or if the
/// input ends in the middle of a code. `position` points to the first bit of the unmatched
/// candidate.
pub fn decode<S: Symbol>(encoded: &str, table: &CodeTable<S>) -> Result<Vec<S>> {
    let lookup = table.code_to_symbol();
    let max_code_len = table.max_code_len();

    let mut out = Vec::new();
    let mut start = 0;
    for (end, bit) in encoded.char_indices() {
        let end = end + bit.len_utf8();
        let candidate = &encoded[start..end];
        if let Some(symbol) = lookup.get(candidate) {
            out.push(*symbol);
            start = end;
        } else if candidate.len() >= max_code_len {
            return Err(corrupt(encoded, start));
        }
    }
    if start != encoded.len() {
        return Err(corrupt(encoded, start));
    }

    debug!("decoded {} bits into {} symbols", encoded.len(), out.len());
    Ok(out)
}

fn corrupt(encoded: &str, start: usize) -> HuffError {
    // byte offset to bit position, they differ only if the input contains non ascii garbage
    let position = encoded[..start].chars().count();
    warn!("no code matches the bits at position {}", position);
    HuffError::CorruptEncoding { position }
}
