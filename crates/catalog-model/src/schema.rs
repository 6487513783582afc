//! The fixed product-catalog schema.
//!
//! Every name listed in [`EXPECTED_COLUMNS`] must be present (by canonical
//! key) and populated in every row for a file to be accepted.

use std::fmt;

use serde::{Serialize, Serializer};

/// Name given to anonymous header cells (`Unnamed: 0`, blank headers).
pub const SENTINEL_COLUMN: &str = "pIndice";

/// Origin / tax-situation code column, restricted to [`ORIGIN_CODES`].
pub const ORIGIN_COLUMN: &str = "pOrigem CST";

/// Accepted values of [`ORIGIN_COLUMN`].
pub const ORIGIN_CODES: &[&str] = &["0", "2"];

/// Tariff classification code column (mixed numeric/text input).
pub const NCM_COLUMN: &str = "pNCM";

/// Expected columns, in file order.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "pIndice",
    "pCodigo",
    "pFornecedor",
    "pReferencia",
    "pCodigoBarras",
    "pDescricao",
    "pDescricaoReduzida",
    "pTamanho",
    "pColecao",
    "pLinha",
    "pSegmento",
    "pGrupo",
    "pFamilia",
    "pSubFamilia",
    "pNCM",
    "pOrigem CST",
    "pUN",
    "pMúltiplo",
    "pM²/Pallet",
    "pQUANTIDADE NA EMBALAGEM",
    "pPeso",
    "pCusto",
    "pPercST",
    "pPercIPI",
    "pPreçoVenda",
    "pExige Conferencia",
    "pMarkup",
    "pFrete",
    "pCodigoSA",
    "pDesconto",
    "pEmpresa",
];

/// Columns whose non-empty values must parse as decimals.
///
/// `pNCM` is deliberately absent: it has its own rule.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "pTamanho",
    "pSegmento",
    "pFamilia",
    "pSubFamilia",
    "pMúltiplo",
    "pM²/Pallet",
    "pQUANTIDADE NA EMBALAGEM",
    "pPercST",
    "pPercIPI",
    "pPreçoVenda",
    "pMarkup",
    "pFrete",
    "pCodigoSA",
    "pDesconto",
];

/// Suggested value for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    /// The `-1` sentinel meaning "not applicable".
    NotApplicable,
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::NotApplicable => f.write_str("-1"),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::NotApplicable => serializer.serialize_i64(-1),
        }
    }
}

/// Default values suggested for empty cells, keyed by column name.
pub const DEFAULT_VALUES: &[(&str, DefaultValue)] = &[
    ("pCodigoBarras", DefaultValue::Text("SEM GTIN")),
    ("pTamanho", DefaultValue::NotApplicable),
    ("pColecao", DefaultValue::NotApplicable),
    ("pLinha", DefaultValue::NotApplicable),
    ("pSegmento", DefaultValue::NotApplicable),
    ("pGrupo", DefaultValue::NotApplicable),
    ("pFamilia", DefaultValue::NotApplicable),
    ("pSubFamilia", DefaultValue::NotApplicable),
    ("pNCM", DefaultValue::Text("11111111")),
    ("pUN", DefaultValue::Text("UN")),
    ("pMúltiplo", DefaultValue::Integer(1)),
    ("pM²/Pallet", DefaultValue::Integer(0)),
    ("pQUANTIDADE NA EMBALAGEM", DefaultValue::NotApplicable),
    ("pPeso", DefaultValue::NotApplicable),
    ("pCusto", DefaultValue::NotApplicable),
    ("pPercST", DefaultValue::NotApplicable),
    ("pPercIPI", DefaultValue::NotApplicable),
    ("pPreçoVenda", DefaultValue::NotApplicable),
    ("pExige Conferencia", DefaultValue::Text("N")),
    ("pMarkup", DefaultValue::NotApplicable),
    ("pFrete", DefaultValue::NotApplicable),
    ("pDesconto", DefaultValue::NotApplicable),
    ("pEmpresa", DefaultValue::Text("101")),
];

/// Default value for a column, if one is defined.
pub fn default_for(column: &str) -> Option<DefaultValue> {
    DEFAULT_VALUES
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, value)| *value)
}

/// Check if a column is validated by the generic numeric rule.
pub fn is_numeric_column(column: &str) -> bool {
    NUMERIC_COLUMNS.iter().any(|name| *name == column)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::normalize::canonical_key;

    #[test]
    fn expected_columns_have_distinct_keys() {
        let keys: HashSet<String> = EXPECTED_COLUMNS.iter().map(|c| canonical_key(c)).collect();
        assert_eq!(keys.len(), EXPECTED_COLUMNS.len());
        assert_eq!(EXPECTED_COLUMNS.len(), 31);
    }

    #[test]
    fn rule_columns_are_part_of_the_schema() {
        for column in NUMERIC_COLUMNS {
            assert!(EXPECTED_COLUMNS.contains(column), "{column}");
        }
        for (column, _) in DEFAULT_VALUES {
            assert!(EXPECTED_COLUMNS.contains(column), "{column}");
        }
        assert!(EXPECTED_COLUMNS.contains(&ORIGIN_COLUMN));
        assert!(EXPECTED_COLUMNS.contains(&NCM_COLUMN));
        assert!(EXPECTED_COLUMNS.contains(&SENTINEL_COLUMN));
    }

    #[test]
    fn default_values_display() {
        assert_eq!(default_for("pCodigoBarras").unwrap().to_string(), "SEM GTIN");
        assert_eq!(default_for("pPeso").unwrap().to_string(), "-1");
        assert_eq!(default_for("pMúltiplo").unwrap().to_string(), "1");
        assert_eq!(default_for("pCodigo"), None);
    }

    #[test]
    fn numeric_columns_exclude_ncm() {
        assert_eq!(NUMERIC_COLUMNS.len(), 14);
        assert!(!is_numeric_column(NCM_COLUMN));
        assert!(is_numeric_column("pDesconto"));
    }
}
