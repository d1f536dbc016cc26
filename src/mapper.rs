//! Case mapping applied before trie lookups.

/// Maps decoded scalar values to the edge labels stored in the trie.
///
/// Case-insensitive automata lower-case each scalar value on its own, both
/// when patterns are added and when haystacks are scanned. Only mappings to a
/// single scalar value are applied; characters whose lower-case form expands
/// to several scalar values (e.g., `'İ'`) are kept as is.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct CaseMapper {
    fold: bool,
}

impl CaseMapper {
    /// Creates a mapper that lower-cases if `case_insensitive` is set.
    pub const fn new(case_insensitive: bool) -> Self {
        Self {
            fold: case_insensitive,
        }
    }

    /// Returns `true` if scalar values are lower-cased.
    #[inline(always)]
    pub const fn is_folding(self) -> bool {
        self.fold
    }

    /// Maps `c` to its edge label.
    #[inline(always)]
    pub fn get(self, c: char) -> char {
        if !self.fold {
            return c;
        }
        if c.is_ascii() {
            return c.to_ascii_lowercase();
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_mapper() {
        let mapper = CaseMapper::new(false);
        assert_eq!('A', mapper.get('A'));
        assert_eq!('Ä', mapper.get('Ä'));
        assert_eq!('全', mapper.get('全'));
    }

    #[test]
    fn test_case_insensitive_mapper() {
        let mapper = CaseMapper::new(true);
        assert_eq!('a', mapper.get('A'));
        assert_eq!('z', mapper.get('z'));
        assert_eq!('1', mapper.get('1'));
        assert_eq!('ä', mapper.get('Ä'));
        assert_eq!('σ', mapper.get('Σ'));
        assert_eq!('д', mapper.get('Д'));
        assert_eq!('全', mapper.get('全'));
    }

    #[test]
    fn test_multi_char_lowercase_is_kept() {
        // 'İ' lower-cases to "i\u{307}".
        let mapper = CaseMapper::new(true);
        assert_eq!('İ', mapper.get('İ'));
    }
}
