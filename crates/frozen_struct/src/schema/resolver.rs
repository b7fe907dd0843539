//! Field-set resolution and the process-wide field-set cache.
//!
//! # Responsibility
//! - Merge a type's own fields with every included type's effective fields.
//! - Compute each concrete type's field set at most once per process.
//!
//! # Invariants
//! - The first stored field set for a `TypeId` is never replaced.
//! - Concurrent first resolutions converge on one shared list.
//! - Cache entries are never invalidated.

use super::Schema;
use log::debug;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

static FIELD_SETS: Lazy<RwLock<HashMap<TypeId, FieldSet>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Effective field set of one concrete type.
///
/// Order is presentation only: own fields first, then included types in
/// declaration order. Names are unique.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldSet(Arc<[&'static str]>);

impl FieldSet {
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|name| *name == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    /// Returns whether both handles share one cached list.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for FieldSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Returns the effective field set for `schema`, computing it on first use.
pub fn resolve(schema: Schema) -> FieldSet {
    let type_id = schema.type_id();
    if let Some(cached) = lookup(type_id) {
        return cached;
    }

    // Computed outside the lock: included types resolve through this same path.
    let computed = merge(schema);

    let mut cache = FIELD_SETS.write().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(type_id)
        .or_insert_with(|| {
            debug!(
                "event=field_set_resolved module=schema status=ok type={} fields={}",
                schema.type_name(),
                computed.len()
            );
            computed
        })
        .clone()
}

/// Returns whether `schema` already has a cached field set.
pub fn is_cached(schema: Schema) -> bool {
    lookup(schema.type_id()).is_some()
}

fn lookup(type_id: TypeId) -> Option<FieldSet> {
    FIELD_SETS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .cloned()
}

fn merge(schema: Schema) -> FieldSet {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    let own = schema.own_fields().iter().copied();
    let included = schema
        .extends()
        .iter()
        .flat_map(|parent| resolve(*parent).iter().collect::<Vec<_>>());

    for field in own.chain(included) {
        if seen.insert(field) {
            merged.push(field);
        }
    }

    FieldSet(merged.into())
}
