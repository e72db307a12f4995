use common::{HuffError, Result, Symbol};
use hufflpuff::CodeTable;
use log::*;

/// Concatenates the codes of all symbols in `input`.
///
/// Fails with `UnknownSymbol` on the first symbol without a code, nothing is returned in that case.
pub fn encode_with<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<String> {
    let mut out = String::with_capacity(encoded_len(input, table)?);
    for symbol in input {
        out.push_str(encode_symbol(symbol, table)?);
    }
    debug!("encoded {} symbols into {} bits", input.len(), out.len());
    Ok(out)
}

#[inline]
fn encode_symbol<'a, S: Symbol>(symbol: &S, table: &'a CodeTable<S>) -> Result<&'a str> {
    table
        .get(symbol)
        .ok_or_else(|| HuffError::UnknownSymbol(format!("{:?}", symbol)))
}

/// exact length of the output, so the string is allocated only once
fn encoded_len<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<usize> {
    input.iter().try_fold(0, |len, symbol| {
        Ok(len + encode_symbol(symbol, table)?.len())
    })
}
