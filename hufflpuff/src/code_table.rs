use std::collections::HashMap;

use common::{is_valid_code, HuffError, Result, Symbol};

/// Maps every symbol to its prefix code, a non-empty string of `'0'` and `'1'`.
///
/// Iteration order is the order in which the codes were assigned, for tables created by
/// `tree_to_table` that is the depth-first, left-first walk order of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    entries: Vec<(S, String)>,
    /// symbol to position in `entries`
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeTable<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        CodeTable {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Assigns `code` to `symbol`. The first assignment wins, returns false if the symbol already
    /// had a code.
    pub(crate) fn insert(&mut self, symbol: S, code: String) -> bool {
        if self.index.contains_key(&symbol) {
            return false;
        }
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
        true
    }

    /// Creates a table from codes which were not derived from a tree, e.g. kept from an earlier
    /// encoding.
    ///
    /// Fails with `InvalidCodeTable` if the table is empty, a code is empty or contains anything
    /// else than `'0'` and `'1'`, a symbol appears twice, or a code is the prefix of another one.
    pub fn from_codes<I, C>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        C: Into<String>,
    {
        let codes = codes.into_iter();
        let mut table = Self::with_capacity(codes.size_hint().0);
        for (symbol, code) in codes {
            let code = code.into();
            if !is_valid_code(&code) {
                return Err(HuffError::InvalidCodeTable(format!(
                    "code {:?} of symbol {:?} is not a bit string",
                    code, symbol
                )));
            }
            if !table.insert(symbol, code) {
                return Err(HuffError::InvalidCodeTable(format!(
                    "symbol {:?} has more than one code",
                    symbol
                )));
            }
        }
        if table.is_empty() {
            return Err(HuffError::InvalidCodeTable("no codes".to_string()));
        }
        if let Some((prefix, symbol)) = find_prefix_violation(&table) {
            return Err(HuffError::InvalidCodeTable(format!(
                "code of {:?} is a prefix of the code of {:?}",
                prefix, symbol
            )));
        }
        Ok(table)
    }

    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.index
            .get(symbol)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn code_len(&self, symbol: &S) -> Option<usize> {
        self.get(symbol).map(str::len)
    }

    /// number of symbols with a code
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> + '_ {
        self.entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }

    /// length of the longest code, 0 for an empty table
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// reverse lookup from code to symbol, used for decoding
    pub fn code_to_symbol(&self) -> HashMap<&str, S> {
        self.entries
            .iter()
            .map(|(symbol, code)| (code.as_str(), *symbol))
            .collect()
    }
}

/// Returns a pair of symbols where the code of the first is a prefix of (or equal to) the code of
/// the second, `None` if the table is prefix-free.
///
/// After sorting the codes lexicographically, a code which is a prefix of any other code is also
/// a prefix of its direct successor, so comparing neighbours is enough.
pub fn find_prefix_violation<S: Symbol>(table: &CodeTable<S>) -> Option<(S, S)> {
    let mut codes: Vec<(&str, S)> = table.iter().map(|(symbol, code)| (code, symbol)).collect();
    codes.sort_by(|a, b| a.0.cmp(b.0));
    codes
        .windows(2)
        .find(|pair| pair[1].0.starts_with(pair[0].0))
        .map(|pair| (pair[0].1, pair[1].1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_assignment_wins() {
        let mut table = CodeTable::with_capacity(2);
        assert!(table.insert('a', "0".to_string()));
        assert!(!table.insert('a', "1".to_string()));
        assert_eq!(table.get(&'a'), Some("0"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_codes() {
        let table = CodeTable::from_codes(vec![('a', "0"), ('b', "10"), ('c', "11")]).unwrap();
        assert_eq!(table.get(&'b'), Some("10"));
        assert_eq!(table.code_len(&'c'), Some(2));
        assert_eq!(table.get(&'d'), None);
        assert_eq!(table.max_code_len(), 2);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![('a', "0"), ('b', "10"), ('c', "11")]
        );
        assert_eq!(table.code_to_symbol().get("11"), Some(&'c'));
    }

    #[test]
    fn test_from_codes_rejects_prefix() {
        let err = CodeTable::from_codes(vec![('a', "1"), ('b', "10")]).unwrap_err();
        assert!(matches!(err, HuffError::InvalidCodeTable(_)));
        let err = CodeTable::from_codes(vec![('a', "01"), ('b', "01")]).unwrap_err();
        assert!(matches!(err, HuffError::InvalidCodeTable(_)));
    }

    #[test]
    fn test_from_codes_rejects_invalid_codes() {
        assert!(CodeTable::<char>::from_codes(Vec::<(char, String)>::new()).is_err());
        assert!(CodeTable::from_codes(vec![('a', "")]).is_err());
        assert!(CodeTable::from_codes(vec![('a', "0x")]).is_err());
        assert!(CodeTable::from_codes(vec![('a', "0"), ('a', "1")]).is_err());
    }

    #[test]
    fn test_find_prefix_violation() {
        let table = CodeTable::from_codes(vec![('a', "00"), ('b', "01"), ('c', "1")]).unwrap();
        assert_eq!(find_prefix_violation(&table), None);

        let mut table = CodeTable::with_capacity(3);
        table.insert('a', "0".to_string());
        table.insert('b', "11".to_string());
        table.insert('c', "0110".to_string());
        assert_eq!(find_prefix_violation(&table), Some(('a', 'c')));
    }
}
