use std::collections::BTreeSet;

/// Fields that never appear in published documentation.
pub const DEFAULT_HIDDEN_FIELDS: &[&str] = &[
    "passwordHash",
    "appKey",
    "passwordResetToken",
    "passwordResetExpires",
    "lastLogin",
    "lastFailedLogin",
    "_t",
    "__t",
    "__v",
    "salt",
    "__updatedFields",
];

/// Field-level access lookup consulted before a field is documented
pub trait FieldAccess: Send + Sync {
    /// Whether `field` (a full, possibly dotted, path name) is hidden
    fn is_hidden(&self, field: &str) -> bool;
}

/// A fixed set of hidden field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFields {
    fields: BTreeSet<String>,
}

impl HiddenFields {
    /// Hide nothing
    #[must_use]
    pub fn none() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into());
        self
    }
}

impl Default for HiddenFields {
    fn default() -> Self {
        DEFAULT_HIDDEN_FIELDS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for HiddenFields {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FieldAccess for HiddenFields {
    fn is_hidden(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

impl<F> FieldAccess for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_hidden(&self, field: &str) -> bool {
        self(field)
    }
}
