use common::Symbol;
use hist::FrequencyTable;
use hufflpuff::CodeTable;

/// Read-only figures about how well a code table compresses the counted input.
///
/// The baseline is a fixed-length code using as many bits per symbol as the longest code.
#[derive(Debug, Clone)]
pub struct Statistics<'a, S: Symbol> {
    /// number of encoded symbols
    pub total: u64,
    /// bits per symbol, weighted by frequency
    pub average_length: f64,
    /// length of the longest code
    pub max_length: usize,
    /// `(1 - average_length / max_length) * 100`
    pub compression_ratio: f64,
    pub codes: &'a CodeTable<S>,
    pub frequencies: &'a FrequencyTable<S>,
}

impl<'a, S: Symbol> Statistics<'a, S> {
    /// Symbols of the code table which do not appear in `frequencies` count as 0.
    pub fn compute(codes: &'a CodeTable<S>, frequencies: &'a FrequencyTable<S>) -> Self {
        let mut total = 0;
        let mut weighted_bits = 0;
        for (symbol, code) in codes.iter() {
            let count = frequencies.get(&symbol).unwrap_or(0);
            total += count;
            weighted_bits += count * code.len() as u64;
        }
        let max_length = codes.max_code_len();

        let average_length = if total == 0 {
            0.0
        } else {
            weighted_bits as f64 / total as f64
        };
        let compression_ratio = if max_length == 0 || total == 0 {
            0.0
        } else {
            (1.0 - average_length / max_length as f64) * 100.0
        };

        Statistics {
            total,
            average_length,
            max_length,
            compression_ratio,
            codes,
            frequencies,
        }
    }

    /// length of the encoded input in bits
    pub fn encoded_bits(&self) -> u64 {
        self.codes
            .iter()
            .map(|(symbol, code)| self.frequencies.get(&symbol).unwrap_or(0) * code.len() as u64)
            .sum()
    }

    /// length of the input in bits, if every symbol used `max_length` bits
    pub fn fixed_length_bits(&self) -> u64 {
        self.total * self.max_length as u64
    }

    /// bits per symbol saved compared to the fixed-length baseline
    pub fn bits_saved_per_symbol(&self) -> f64 {
        self.max_length as f64 - self.average_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hist::count_symbols;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_statistics() {
        let codes = CodeTable::from_codes(vec![('a', "1"), ('b', "01"), ('c', "00")]).unwrap();
        let frequencies = count_symbols(&['a', 'a', 'b', 'c']);
        let stats = Statistics::compute(&codes, &frequencies);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.max_length, 2);
        // (2 * 1 + 1 * 2 + 1 * 2) / 4
        assert_close(stats.average_length, 1.5);
        assert_close(stats.compression_ratio, 25.0);
        assert_eq!(stats.encoded_bits(), 6);
        assert_eq!(stats.fixed_length_bits(), 8);
        assert_close(stats.bits_saved_per_symbol(), 0.5);
    }

    #[test]
    fn test_single_symbol() {
        let codes = CodeTable::from_codes(vec![('z', "0")]).unwrap();
        let frequencies = count_symbols(&['z', 'z', 'z']);
        let stats = Statistics::compute(&codes, &frequencies);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.max_length, 1);
        assert_close(stats.average_length, 1.0);
        assert_close(stats.compression_ratio, 0.0);
    }

    #[test]
    fn test_no_counts() {
        let codes = CodeTable::from_codes(vec![('a', "0"), ('b', "1")]).unwrap();
        let frequencies = FrequencyTable::new();
        let stats = Statistics::compute(&codes, &frequencies);
        assert_eq!(stats.total, 0);
        assert_close(stats.average_length, 0.0);
        assert_close(stats.compression_ratio, 0.0);
        assert_eq!(stats.encoded_bits(), 0);
    }
}
