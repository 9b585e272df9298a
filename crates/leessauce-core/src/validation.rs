//! Per-field validation of an order draft.
//!
//! Every rule runs on every pass; there is no short-circuiting, so the form
//! can show all problems at once.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::draft::OrderDraft;

/// Shortest trimmed address accepted.
///
/// A length heuristic only. Anything five characters or longer passes, even
/// if it is clearly not an address.
pub const MIN_ADDRESS_LEN: usize = 5;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const ADDRESS_INVALID: &str = "Please enter a valid address";
pub const PRODUCTS_REQUIRED: &str = "Please select at least one sauce";

/// Fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Address,
    Products,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Address => "address",
            FormField::Products => "products",
        }
    }
}

/// Messages for the fields that failed. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
        }
        Ok(())
    }
}

/// Check a draft against all rules.
pub fn validate(draft: &OrderDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.first_name.trim().is_empty() {
        errors.insert(FormField::FirstName, FIRST_NAME_REQUIRED);
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(FormField::LastName, LAST_NAME_REQUIRED);
    }
    if draft.address.trim().chars().count() < MIN_ADDRESS_LEN {
        errors.insert(FormField::Address, ADDRESS_INVALID);
    }
    if draft.quantities.total() == 0 {
        errors.insert(FormField::Products, PRODUCTS_REQUIRED);
    }

    errors
}
