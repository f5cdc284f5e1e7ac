use std::collections::HashSet;

use diseasenet_core::models::prediction::ClassIndex;

use crate::error::ModelError;

/// Disease labels, index-aligned with a classifier's output classes.
#[derive(Debug, Clone)]
pub struct ClassLabels(Vec<String>);

impl ClassLabels {
    /// Fails when the table is empty or repeats a label.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Result<Self, ModelError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ModelError::NoClasses);
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ModelError::DuplicateClass(label.clone()));
            }
        }
        Ok(Self(labels))
    }

    /// The label for a class emitted by the model.
    ///
    /// # Panics
    ///
    /// Panics if `class` is outside the table. The engine checks that the
    /// model's class count matches this table when it is built, so an
    /// out-of-range class means the model broke its own contract.
    pub fn resolve(&self, class: ClassIndex) -> &str {
        self.get(class).unwrap_or_else(|| {
            panic!(
                "class index {class} out of range for {} labels",
                self.0.len()
            )
        })
    }

    pub fn get(&self, class: ClassIndex) -> Option<&str> {
        self.0.get(class.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
