//! # Validation Primitives
//!
//! The rule classes shared by every mutator:
//!
//! - **Non-empty**: [`require_non_empty`] rejects any value whose
//!   [`IsEmpty::is_empty`] is true with [`ValidationError::EmptyValue`].
//! - **Fixed value**: [`require_fixed`] rejects anything but the single
//!   accepted value with [`ValidationError::InvalidFixedValue`].
//!
//! Records nested inside other records are not rejected when empty. They are
//! pruned, and the same [`IsEmpty`] implementations decide what gets pruned,
//! so "rejected as empty on input" and "omitted as empty on output" are one
//! definition.

use serde_json::Value;

use crate::error::ValidationError;

/// The only pass format version the wallet platform accepts.
pub const FORMAT_VERSION: i64 = 1;

/// Whether a value carries no information.
///
/// For strings and collections this is zero length. For optional values it
/// is `None`. Records implement it as "every member unset", which plays
/// the part a nil pointer plays in loosely typed models.
pub trait IsEmpty {
    /// Returns true if the value is empty.
    fn is_empty(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// `None`, or `Some` of an empty value.
impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, IsEmpty::is_empty)
    }
}

impl IsEmpty for u64 {
    fn is_empty(&self) -> bool {
        *self == 0
    }
}

impl IsEmpty for Value {
    /// `null`, `""`, `[]` and `{}` are empty. Numbers and booleans never are.
    fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

/// Pass `value` through unchanged if it is non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyValue`] naming `field` otherwise.
pub fn require_non_empty<T: IsEmpty>(field: &'static str, value: T) -> Result<T, ValidationError> {
    if IsEmpty::is_empty(&value) {
        return Err(ValidationError::EmptyValue { field });
    }
    Ok(value)
}

/// Accept `actual` only if it equals `expected`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFixedValue`] otherwise.
pub fn require_fixed(field: &'static str, expected: i64, actual: i64) -> Result<i64, ValidationError> {
    if actual != expected {
        return Err(ValidationError::InvalidFixedValue {
            field,
            expected,
            actual,
        });
    }
    Ok(actual)
}

/// Drop repeated items in place, keeping the first occurrence of each.
pub fn retain_distinct<T: PartialEq>(items: &mut Vec<T>) {
    let mut i = 0;
    while i < items.len() {
        if items[..i].contains(&items[i]) {
            items.remove(i);
        } else {
            i += 1;
        }
    }
}

/// `skip_serializing_if` predicate for booleans that are omitted when false.
pub fn is_false(value: &bool) -> bool {
    !*value
}
