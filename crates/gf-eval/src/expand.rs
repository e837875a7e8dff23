//! Expansion of a variable request into its dependency closure.

use std::collections::HashSet;

use gf_vars::Registry;
use tracing::info;

use crate::error::{EvalError, EvalResult};

/// Closure of a request over the registry's dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Every variable to compute, dependencies first.
    pub closure: Vec<&'static str>,
    /// Variables not requested but needed by the request.
    pub added: Vec<&'static str>,
}

impl Expansion {
    pub fn contains(&self, name: &str) -> bool {
        self.closure.iter().any(|&n| n == name)
    }
}

/// Expand `requested` into its transitive closure.
///
/// An empty request stands for the registry's default set for a spline with
/// `dim_count` dimensions; nothing is reported as added in that case.
pub fn expand(registry: &Registry, requested: &[&str], dim_count: usize) -> EvalResult<Expansion> {
    let seeds: Vec<&'static str> = if requested.is_empty() {
        registry.default_set(dim_count)
    } else {
        requested
            .iter()
            .map(|&name| {
                registry.get(name).map(|v| v.name).ok_or_else(|| EvalError::UnknownVariable {
                    name: name.to_string(),
                })
            })
            .collect::<EvalResult<_>>()?
    };

    let mut members: HashSet<&'static str> = HashSet::with_capacity(seeds.len());
    let mut stack = seeds.clone();
    while let Some(name) = stack.pop() {
        if !members.insert(name) {
            continue;
        }
        let Some(var) = registry.get(name) else {
            continue;
        };
        stack.extend(var.deps.iter().filter(|d| !members.contains(*d)));
    }

    let closure: Vec<&'static str> = registry
        .topological()
        .map(|v| v.name)
        .filter(|name| members.contains(name))
        .collect();

    let added: Vec<&'static str> = if requested.is_empty() {
        Vec::new()
    } else {
        closure.iter().copied().filter(|name| !seeds.contains(name)).collect()
    };
    if !added.is_empty() {
        info!(added = %added.join(", "), "added dependencies of the requested variables");
    }

    Ok(Expansion { closure, added })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_adds_dependencies() {
        let registry = Registry::standard();
        let expansion = expand(&registry, &["Cv"], 2).unwrap();
        for name in ["Cv", "Cp", "alpha", "Kt", "rho"] {
            assert!(expansion.contains(name), "{name}");
        }
        assert_eq!(expansion.closure.len(), 5);
        assert!(!expansion.added.contains(&"Cv"));
        assert_eq!(expansion.added.len(), 4);
        // dependencies come first
        assert_eq!(expansion.closure.last(), Some(&"Cv"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let registry = Registry::standard();
        let err = expand(&registry, &["rho", "Gamma"], 2).unwrap_err();
        assert!(matches!(err, EvalError::UnknownVariable { name } if name == "Gamma"));
    }

    #[test]
    fn empty_request_uses_default_set() {
        let registry = Registry::standard();
        let pt = expand(&registry, &[], 2).unwrap();
        assert_eq!(pt.closure.len(), registry.default_set(2).len());
        assert!(pt.added.is_empty());
        assert!(!pt.contains("muw"));

        let ptm = expand(&registry, &[], 3).unwrap();
        assert_eq!(ptm.closure.len(), registry.len());
    }

    #[test]
    fn repeated_names_appear_once() {
        let registry = Registry::standard();
        let expansion = expand(&registry, &["G", "G", "rho"], 2).unwrap();
        assert_eq!(expansion.closure.len(), 2);
        assert!(expansion.added.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use gf_vars::Tdv;
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    proptest! {
        #[test]
        fn closure_is_a_closed_superset(picked in subsequence(Tdv::ALL.to_vec(), 1..8)) {
            let registry = Registry::standard();
            let requested: Vec<&str> = picked.iter().map(|t| t.name()).collect();
            let expansion = expand(&registry, &requested, 3).unwrap();

            for name in &requested {
                prop_assert!(expansion.contains(name));
            }
            for name in &expansion.closure {
                prop_assert!(registry.contains(name));
                let var = registry.get(name).unwrap();
                for dep in &var.deps {
                    prop_assert!(expansion.contains(dep));
                }
            }
            let unique: HashSet<_> = expansion.closure.iter().collect();
            prop_assert_eq!(unique.len(), expansion.closure.len());
        }

        #[test]
        fn expansion_is_idempotent(picked in subsequence(Tdv::ALL.to_vec(), 1..8)) {
            let registry = Registry::standard();
            let requested: Vec<&str> = picked.iter().map(|t| t.name()).collect();
            let once = expand(&registry, &requested, 3).unwrap();
            let twice = expand(&registry, &once.closure, 3).unwrap();
            prop_assert_eq!(&twice.closure, &once.closure);
            prop_assert!(twice.added.is_empty());
        }
    }
}
