//! Column-name normalization.
//!
//! Column headers arrive with inconsistent accents, punctuation and case
//! (`pPreçoVenda`, `PPRECOVENDA`, `p Preco-Venda`). All of them reduce to the
//! same canonical key, which is what schema matching compares.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce a column name to its canonical comparison key.
///
/// The text is NFKD-decomposed, combining marks are dropped, everything
/// outside `[A-Za-z0-9]` is discarded and the rest is lowercased.
/// Compatibility decomposition maps `²` to `2`, so `pM²/Pallet` becomes
/// `pm2pallet`.
pub fn canonical_key(text: &str) -> String {
    text.nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// A set of column names compared by canonical key.
#[derive(Debug, Clone, Default)]
pub struct CanonicalSet {
    inner: HashSet<String>,
}

impl CanonicalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column name.
    pub fn insert(&mut self, value: impl AsRef<str>) {
        self.inner.insert(canonical_key(value.as_ref()));
    }

    /// Check if a name with the same canonical key is present.
    pub fn contains(&self, value: impl AsRef<str>) -> bool {
        self.inner.contains(&canonical_key(value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CanonicalSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_punctuation() {
        assert_eq!(canonical_key("pPreçoVenda"), "pprecovenda");
        assert_eq!(canonical_key("pMúltiplo"), "pmultiplo");
        assert_eq!(canonical_key("pOrigem CST"), "porigemcst");
        assert_eq!(canonical_key("pQUANTIDADE NA EMBALAGEM"), "pquantidadenaembalagem");
    }

    #[test]
    fn superscript_decomposes_to_digit() {
        assert_eq!(canonical_key("pM²/Pallet"), "pm2pallet");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(canonical_key("  -/_ "), "");
    }

    #[test]
    fn case_and_spacing_share_a_key() {
        assert_eq!(canonical_key("pOrigem CST"), canonical_key("PORIGEM_CST"));
        assert_eq!(canonical_key("pExige Conferencia"), canonical_key("pExige Conferência"));
        assert_ne!(canonical_key("pCusto"), canonical_key("pCodigo"));
    }

    #[test]
    fn canonical_set_merges_spellings() {
        let set: CanonicalSet = ["pNCM", "PNCM"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("p.ncm"));
        assert!(!set.contains("pNCMx"));
    }
}
