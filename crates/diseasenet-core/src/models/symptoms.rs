use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The symptom identifiers chosen for a single inference request.
///
/// Behaves as a set for encoding purposes, but keeps the order in which
/// identifiers were first chosen so the report can list them as entered.
/// Repeated identifiers collapse to their first occurrence. Identifiers are
/// not checked against any index here; unknown ones are ignored at encode
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomSelection {
    ids: Vec<String>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Human-readable labels, in selection order.
    pub fn display_labels(&self) -> Vec<String> {
        self.iter().map(display_label).collect()
    }
}

impl From<Vec<String>> for SymptomSelection {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SymptomSelection> for Vec<String> {
    fn from(selection: SymptomSelection) -> Self {
        selection.ids
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let ids = iter
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }
}

/// Fixed-length binary encoding of a selection against the symptom index.
///
/// Position `i` is 1 iff the index's `i`-th identifier was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    /// An all-zero vector of `len` positions.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// A vector of `len` positions with the given positions set.
    ///
    /// # Panics
    ///
    /// Panics if any position is `>= len`. Positions come from an index
    /// lookup, so an out-of-range value is an indexing bug.
    pub fn with_positions(len: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut bits = vec![0; len];
        for i in positions {
            assert!(i < len, "feature position {i} out of range for length {len}");
            bits[i] = 1;
        }
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<u8> {
        self.0.get(i).copied()
    }

    pub fn is_set(&self, i: usize) -> bool {
        self.get(i) == Some(1)
    }

    pub fn count_set(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Turn a symptom identifier into a display label: underscores become
/// spaces, the first character is upper-cased and the rest lower-cased.
///
/// `skin_rash` → `Skin rash`, `SKIN_RASH` → `Skin rash`,
/// `toxic_look_(typhos)` → `Toxic look (typhos)`.
pub fn display_label(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
