//! Submitted form values, read field by field at the page boundary.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Named values of a submitted form, as the host collected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Trimmed value of `name`; a field the form did not carry reads as empty.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(|v| v.trim()).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (name, value) in iter {
            form.insert(name, value);
        }
        form
    }
}

/// Collects required/optional fields and the names of required ones left empty.
pub(crate) struct FieldReader<'a> {
    form: &'a FormData,
    missing: Vec<&'static str>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(form: &'a FormData) -> Self {
        Self {
            form,
            missing: Vec::new(),
        }
    }

    pub(crate) fn required(&mut self, name: &'static str) -> String {
        let value = self.form.value(name);
        if value.is_empty() {
            self.missing.push(name);
        }
        value.to_string()
    }

    pub(crate) fn optional(&self, name: &str) -> Option<String> {
        let value = self.form.value(name);
        (!value.is_empty()).then(|| value.to_string())
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}
