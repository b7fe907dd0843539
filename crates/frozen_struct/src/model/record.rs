//! Immutable struct instance.
//!
//! # Responsibility
//! - Validate a supplied field mapping against the effective field set and
//!   commit it atomically.
//! - Expose read access by name, reject every mutation.
//!
//! # Invariants
//! - Stored keys equal the concrete type's effective field set exactly.
//! - Stored data is never mutated after construction.
//! - Equality holds only between instances of the same concrete type.

use crate::error::{Mutation, StructError, StructResult};
use crate::model::value::Value;
use crate::schema::resolver::{self, FieldSet};
use crate::schema::{Schema, StructType};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Immutable, schema-validated record.
#[derive(Clone)]
pub struct Record {
    schema: Schema,
    fields: FieldSet,
    data: BTreeMap<String, Value>,
}

impl Record {
    /// Validates `fields` against `schema` and builds the instance.
    ///
    /// A later duplicate of one name replaces the earlier entry.
    ///
    /// # Errors
    /// - `MissingField` listing every absent name in field-set order.
    /// - `InvalidField` naming the first unknown name in sorted order.
    pub fn construct<I, K, V>(schema: Schema, fields: I) -> StructResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let field_set = resolver::resolve(schema);
        let supplied = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect::<BTreeMap<String, Value>>();

        let missing = field_set
            .iter()
            .filter(|name| !supplied.contains_key(*name))
            .map(str::to_string)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(StructError::MissingField {
                type_name: schema.type_name(),
                fields: missing,
            });
        }

        if let Some(unknown) = supplied.keys().find(|name| !field_set.contains(name)) {
            return Err(StructError::InvalidField {
                type_name: schema.type_name(),
                field: unknown.clone(),
            });
        }

        Ok(Self {
            schema,
            fields: field_set,
            data: supplied,
        })
    }

    /// Typed shorthand for `T::construct`.
    pub fn new<T, I, K, V>(fields: I) -> StructResult<Self>
    where
        T: StructType,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::construct(Schema::of::<T>(), fields)
    }

    /// Returns the stored value for `field`.
    ///
    /// # Errors
    /// - `InvalidField` when `field` is not in the effective field set.
    pub fn get(&self, field: &str) -> StructResult<&Value> {
        self.validate_field(field)?;
        self.data.get(field).ok_or_else(|| self.invalid_field(field))
    }

    /// Always fails: records are immutable.
    pub fn set(&self, field: &str, _value: impl Into<Value>) -> StructResult<()> {
        Err(self.unsupported(Mutation::Set, field))
    }

    /// Always fails: records are immutable.
    pub fn unset(&self, field: &str) -> StructResult<()> {
        Err(self.unsupported(Mutation::Unset, field))
    }

    /// Structural equality scoped to the exact concrete type.
    pub fn equals(&self, other: &Record) -> bool {
        if self.schema != other.schema {
            return false;
        }

        self.data
            .iter()
            .all(|(field, value)| other.data.get(field) == Some(value))
    }

    /// Builds a new record of the same type with `overrides` applied.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    /// - `InvalidField` when an override names an unknown field.
    pub fn amend<I, K, V>(&self, overrides: I) -> StructResult<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut merged = self.data.clone();
        for (field, value) in overrides {
            merged.insert(field.into(), value.into());
        }
        Self::construct(self.schema, merged)
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.type_name()
    }

    /// Returns whether this record's concrete type is `T`.
    pub fn is<T: StructType>(&self) -> bool {
        self.schema.is::<T>()
    }

    /// Effective field names in declaration order.
    pub fn field_names(&self) -> &FieldSet {
        &self.fields
    }

    /// Iterates `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.fields
            .iter()
            .filter_map(move |field| self.data.get(field).map(|value| (field, value)))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn validate_field(&self, field: &str) -> StructResult<()> {
        if self.fields.contains(field) {
            Ok(())
        } else {
            Err(self.invalid_field(field))
        }
    }

    fn invalid_field(&self, field: &str) -> StructError {
        StructError::InvalidField {
            type_name: self.type_name(),
            field: field.to_string(),
        }
    }

    fn unsupported(&self, operation: Mutation, field: &str) -> StructError {
        StructError::UnsupportedOperation {
            type_name: self.type_name(),
            operation,
            field: field.to_string(),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct(self.type_name());
        for (field, value) in self.iter() {
            out.field(field, value);
        }
        out.finish()
    }
}
