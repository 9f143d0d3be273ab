#![forbid(unsafe_code)]

//! Field schemas: the declared shape of a record.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s built through
//! [`SchemaBuilder`]. Construction rejects duplicate field names; after
//! that the schema is immutable and shared by every record built from it.

use std::sync::Arc;

use crate::record::ValidationError;
use crate::value::{FieldType, FieldValue};

/// Declaration of a single field: name, type, and optional default.
///
/// A field with a default may be omitted when constructing a record; a
/// field without one is required.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    ty: FieldType,
    default: Option<FieldValue>,
}

impl FieldSpec {
    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's declared type.
    #[must_use]
    pub fn ty(&self) -> FieldType {
        self.ty
    }

    /// The default value, if the field has one.
    #[must_use]
    pub fn default(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    /// Whether the field must be supplied at construction time.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// An ordered, duplicate-free set of field declarations.
///
/// Cheap to clone: the field list is behind an `Arc`, so every record built
/// from one schema shares a single allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Arc<[FieldSpec]>,
}

impl Schema {
    /// Start declaring a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Look up a field declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field in declaration order.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Declare a required field of the given type.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            ty,
            default: None,
        });
        self
    }

    /// Declare an optional field whose type is taken from its default value.
    #[must_use]
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        default: impl Into<FieldValue>,
    ) -> Self {
        let default = default.into();
        self.fields.push(FieldSpec {
            name: name.into(),
            ty: default.kind(),
            default: Some(default),
        });
        self
    }

    /// Finish the declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateField`] if two declarations share
    /// a name.
    pub fn build(self) -> Result<Schema, ValidationError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ValidationError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Schema {
            fields: self.fields.into(),
        })
    }
}
