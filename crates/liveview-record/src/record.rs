#![forbid(unsafe_code)]

//! Validated record storage and the `Fields` capability.
//!
//! [`Record`] pairs a [`Schema`] with current values. Every write path
//! validates before it assigns: construction checks required fields and
//! types, `set` checks the declared type of the named field. The only
//! implicit coercion is the widening `Int → Float` when an integer is
//! written to a float field.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown field | Name not in schema | `UnknownField`, nothing stored |
//! | Type mismatch | Value kind ≠ declared type | `TypeMismatch`, previous value kept |
//! | Missing field | Required field omitted at construction | `MissingField` |
//!
//! The version counter increments by exactly 1 per successful `set` and is
//! never touched by a failed one, so callers can dirty-check cheaply.

use std::fmt;

use crate::schema::Schema;
use crate::value::{FieldType, FieldValue};

/// Errors from schema construction and record validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The named field is not declared by the schema.
    UnknownField(String),
    /// A value's type does not match the field's declared type.
    TypeMismatch {
        /// Field being assigned.
        field: String,
        /// Declared type.
        expected: FieldType,
        /// Type of the rejected value.
        actual: FieldType,
    },
    /// A required field was not supplied at construction.
    MissingField(String),
    /// Two schema declarations share a name.
    DuplicateField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field '{name}'"),
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "type mismatch for field '{field}': expected {expected}, got {actual}"
                )
            }
            Self::MissingField(name) => write!(f, "missing required field '{name}'"),
            Self::DuplicateField(name) => write!(f, "duplicate field '{name}' in schema"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Named, validated field access.
///
/// This is the capability the view layer binds to: read a field by name,
/// write a field by name with the write validated before it lands. `Record`
/// implements it; application types may implement it directly when they
/// keep their state in plain struct fields.
pub trait Fields {
    /// Read the current value of a field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for names the type does not
    /// carry.
    fn get_field(&self, name: &str) -> Result<FieldValue, ValidationError>;

    /// Write a field, validating first. On failure the previous value is
    /// kept and the error propagates.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownField`] or [`ValidationError::TypeMismatch`].
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError>;
}

/// A schema-conforming set of field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Schema,
    /// Parallel to the schema's declaration order.
    values: Vec<FieldValue>,
    version: u64,
}

/// Coerce `value` to the declared type, applying the single widening rule.
fn conform(
    field: &str,
    expected: FieldType,
    value: FieldValue,
) -> Result<FieldValue, ValidationError> {
    let actual = value.kind();
    if actual == expected {
        return Ok(value);
    }
    // Int widens to Float; nothing else converts implicitly.
    if let (FieldType::Float, FieldValue::Int(n)) = (expected, &value) {
        return Ok(FieldValue::Float(*n as f64));
    }
    Err(ValidationError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual,
    })
}

impl Record {
    /// Construct a record, validating the supplied values against `schema`.
    ///
    /// Every required field must be supplied; fields with defaults may be
    /// omitted. Supplied values must match their declared types (with the
    /// `Int → Float` widening).
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownField`], [`ValidationError::TypeMismatch`],
    /// or [`ValidationError::MissingField`].
    pub fn new<I, N>(schema: Schema, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: AsRef<str>,
    {
        let mut slots: Vec<Option<FieldValue>> = vec![None; schema.len()];
        for (name, value) in values {
            let name = name.as_ref();
            let Some((idx, ty)) = schema
                .fields()
                .enumerate()
                .find(|(_, f)| f.name() == name)
                .map(|(idx, f)| (idx, f.ty()))
            else {
                return Err(ValidationError::UnknownField(name.to_string()));
            };
            slots[idx] = Some(conform(name, ty, value)?);
        }

        let mut filled = Vec::with_capacity(schema.len());
        for (spec, slot) in schema.fields().zip(slots) {
            match slot {
                Some(value) => filled.push(value),
                None => match spec.default() {
                    Some(default) => filled.push(default.clone()),
                    None => return Err(ValidationError::MissingField(spec.name().to_string())),
                },
            }
        }

        Ok(Self {
            schema,
            values: filled,
            version: 0,
        })
    }

    /// The schema this record conforms to.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Read a field by name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for undeclared names.
    pub fn get(&self, name: &str) -> Result<&FieldValue, ValidationError> {
        match self.schema.index_of(name) {
            Some(idx) => Ok(&self.values[idx]),
            None => Err(ValidationError::UnknownField(name.to_string())),
        }
    }

    /// Write a field by name, validating first.
    ///
    /// Each successful write bumps [`version`](Self::version) by 1, even if
    /// the new value equals the old one: every write is an observable event
    /// for the layers above.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownField`] or [`ValidationError::TypeMismatch`];
    /// on error the stored value and version are untouched.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        let Some((idx, ty)) = self
            .schema
            .fields()
            .enumerate()
            .find(|(_, f)| f.name() == name)
            .map(|(idx, f)| (idx, f.ty()))
        else {
            return Err(ValidationError::UnknownField(name.to_string()));
        };
        let value = conform(name, ty, value)?;
        self.values[idx] = value;
        self.version += 1;
        Ok(())
    }

    /// Number of successful writes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.schema
            .fields()
            .zip(&self.values)
            .map(|(spec, value)| (spec.name(), value))
    }
}

impl Fields for Record {
    fn get_field(&self, name: &str) -> Result<FieldValue, ValidationError> {
        self.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        self.set(name, value)
    }
}
