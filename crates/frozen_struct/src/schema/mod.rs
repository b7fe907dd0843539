//! Struct type declarations.
//!
//! # Responsibility
//! - Let a concrete type name the fields it adds and the struct types it
//!   includes.
//! - Carry type identity for field-set caching and equality scoping.
//!
//! # Invariants
//! - A `Schema` is identified by the `TypeId` of its concrete type only.
//! - Declarations are `'static` and fixed for the life of the process.

pub mod resolver;

use crate::error::StructResult;
use crate::model::record::Record;
use crate::model::value::Value;
use resolver::FieldSet;
use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Declares one concrete struct type.
///
/// ```
/// use frozen_struct::{Schema, StructType, Value};
///
/// struct Named;
/// impl StructType for Named {
///     const FIELDS: &'static [&'static str] = &["name"];
/// }
///
/// struct Person;
/// impl StructType for Person {
///     const FIELDS: &'static [&'static str] = &["age"];
///     const EXTENDS: &'static [Schema] = &[Schema::of::<Named>()];
/// }
///
/// let person = Person::construct([("name", Value::from("Ada")), ("age", Value::from(36))]).unwrap();
/// assert_eq!(person.get("age").unwrap().as_int(), Some(36));
/// ```
pub trait StructType: 'static {
    /// Field names this type adds on its own.
    const FIELDS: &'static [&'static str];

    /// Struct types whose effective fields this type includes.
    const EXTENDS: &'static [Schema] = &[];

    /// Name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Builds an immutable instance of this type.
    ///
    /// # Errors
    /// - `MissingField` when a required field is absent.
    /// - `InvalidField` when a supplied name is not in the effective field set.
    fn construct<I, K, V>(fields: I) -> StructResult<Record>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Record::construct(Schema::of::<Self>(), fields)
    }

    /// Effective field set of this type.
    fn field_set() -> FieldSet
    where
        Self: Sized,
    {
        resolver::resolve(Schema::of::<Self>())
    }
}

/// Const-constructible descriptor of one `StructType`.
#[derive(Clone, Copy)]
pub struct Schema {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    fields: &'static [&'static str],
    extends: &'static [Schema],
}

impl Schema {
    pub const fn of<T: StructType>() -> Self {
        Self {
            type_id: type_id_of::<T>,
            type_name: T::type_name,
            fields: T::FIELDS,
            extends: T::EXTENDS,
        }
    }

    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Fields declared by this type itself, without included types.
    pub fn own_fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn extends(&self) -> &'static [Schema] {
        self.extends
    }

    pub fn is<T: StructType>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

fn type_id_of<T: 'static>() -> TypeId {
    TypeId::of::<T>()
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl Debug for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name())
            .field("fields", &self.fields)
            .field(
                "extends",
                &self
                    .extends
                    .iter()
                    .map(Schema::type_name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
