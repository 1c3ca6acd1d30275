//! Symbol bindings: numeric values for a circuit's named parameters

use ahash::AHashMap;

/// A mapping from symbol name to numeric value, one per circuit
///
/// Built once from the batch's shared symbol-name row and a single
/// circuit's value row; consumed during circuit construction and then
/// discarded.
///
/// # Example
/// ```
/// use qbatch_core::SymbolBinding;
///
/// let names = vec!["alpha".to_string(), "beta".to_string()];
/// let binding = SymbolBinding::from_rows(&names, &[0.5, 1.5]);
/// assert_eq!(binding.get("beta"), Some(1.5));
/// assert_eq!(binding.get("gamma"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolBinding {
    values: AHashMap<String, f64>,
}

impl SymbolBinding {
    /// A binding with no symbols
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a binding by zipping names with values
    ///
    /// Surplus entries on either side are ignored; callers validate that
    /// both rows have the batch's shared symbol count before this point.
    pub fn from_rows(names: &[String], values: &[f64]) -> Self {
        let values = names
            .iter()
            .zip(values.iter())
            .map(|(name, &value)| (name.clone(), value))
            .collect();
        Self { values }
    }

    /// Look up a symbol's value
    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of bound symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the binding contains no symbols
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
