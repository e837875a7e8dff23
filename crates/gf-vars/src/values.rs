//! Computed variable values.

use std::collections::HashMap;

use gf_core::Real;
use ndarray::ArrayD;

use crate::error::{VarError, VarResult};

/// Computed arrays keyed by variable name; each name is written once.
#[derive(Debug, Clone, Default)]
pub struct VarValues {
    values: HashMap<&'static str, ArrayD<Real>>,
}

impl VarValues {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, name: &'static str, value: ArrayD<Real>) -> VarResult<()> {
        if self.values.contains_key(name) {
            return Err(VarError::AlreadyComputed { name });
        }
        self.values.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ArrayD<Real>> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArrayD<Real>)> {
        self.values.iter().map(|(&k, v)| (k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut ArrayD<Real>)> {
        self.values.iter_mut().map(|(&k, v)| (k, v))
    }
}
