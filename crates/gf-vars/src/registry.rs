//! Variable registry.
//!
//! A registry owns a fixed set of descriptors whose dependency graph is
//! checked once at construction: names are unique, every dependency exists,
//! and there are no cycles.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::Tdv;
use crate::descriptor::VarDescriptor;
use crate::error::{VarError, VarResult};

#[derive(Debug, Clone)]
pub struct Registry {
    vars: Vec<VarDescriptor>,
    index: HashMap<&'static str, usize>,
    /// Descriptor indices, dependencies first.
    order: Vec<usize>,
}

impl Registry {
    /// Build a registry, validating its dependency graph.
    pub fn new(vars: Vec<VarDescriptor>) -> VarResult<Self> {
        let mut index = HashMap::with_capacity(vars.len());
        for (i, var) in vars.iter().enumerate() {
            if index.insert(var.name, i).is_some() {
                return Err(VarError::Duplicate { name: var.name });
            }
        }

        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(vars.len(), vars.len());
        let nodes: Vec<NodeIndex> = (0..vars.len()).map(|i| graph.add_node(i)).collect();
        for (i, var) in vars.iter().enumerate() {
            for &dep in &var.deps {
                if dep == var.name {
                    return Err(VarError::SelfDependency { var: var.name });
                }
                let &j = index.get(dep).ok_or(VarError::UnknownDependency {
                    var: var.name,
                    dep,
                })?;
                // edge dep -> dependent
                graph.add_edge(nodes[j], nodes[i], ());
            }
        }

        let order = toposort(&graph, None)
            .map_err(|cycle| VarError::Cycle {
                var: vars[graph[cycle.node_id()]].name,
            })?
            .into_iter()
            .map(|n| graph[n])
            .collect();

        Ok(Self { vars, index, order })
    }

    /// Registry of the standard thermodynamic variables.
    pub fn standard() -> Self {
        Self::new(Tdv::descriptors()).expect("standard catalog is a valid dependency graph")
    }

    pub fn get(&self, name: &str) -> Option<&VarDescriptor> {
        self.index.get(name).map(|&i| &self.vars[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &VarDescriptor> {
        self.vars.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vars.iter().map(|v| v.name)
    }

    /// Descriptors ordered so that every variable follows its dependencies.
    pub fn topological(&self) -> impl Iterator<Item = &VarDescriptor> {
        self.order.iter().map(|&i| &self.vars[i])
    }

    /// Variables computed when a caller requests nothing specific.
    ///
    /// A spline without a molality dimension gets every variable that doesn't
    /// need one; a spline with molality gets the whole registry.
    pub fn default_set(&self, dim_count: usize) -> Vec<&'static str> {
        self.vars
            .iter()
            .filter(|v| dim_count >= 3 || !v.requires_molality())
            .map(|v| v.name)
            .collect()
    }
}
