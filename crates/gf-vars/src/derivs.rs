//! Gibbs energy derivative requests.

use core::fmt;
use std::collections::HashMap;

use gf_core::{Dim, Real};
use ndarray::ArrayD;

/// Derivative order along pressure, temperature and molality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DerivOrders {
    pub p: u8,
    pub t: u8,
    pub m: u8,
}

impl DerivOrders {
    /// The Gibbs energy itself.
    pub const G: DerivOrders = DerivOrders::new(0, 0, 0);
    pub const D1P: DerivOrders = DerivOrders::new(1, 0, 0);
    pub const D1T: DerivOrders = DerivOrders::new(0, 1, 0);
    pub const D1M: DerivOrders = DerivOrders::new(0, 0, 1);
    pub const D2P: DerivOrders = DerivOrders::new(2, 0, 0);
    pub const D2T: DerivOrders = DerivOrders::new(0, 2, 0);
    pub const D2PT: DerivOrders = DerivOrders::new(1, 1, 0);
    pub const D2PM: DerivOrders = DerivOrders::new(1, 0, 1);
    pub const D3P: DerivOrders = DerivOrders::new(3, 0, 0);
    pub const D3T2M: DerivOrders = DerivOrders::new(0, 2, 1);

    pub const fn new(p: u8, t: u8, m: u8) -> Self {
        Self { p, t, m }
    }

    pub const fn order(self, dim: Dim) -> u8 {
        match dim {
            Dim::P => self.p,
            Dim::T => self.t,
            Dim::M => self.m,
        }
    }

    pub const fn total(self) -> u8 {
        self.p + self.t + self.m
    }

    pub const fn involves_molality(self) -> bool {
        self.m > 0
    }

    /// Per-dimension directive for a spline with `dim_count` axes.
    pub fn directive(self, dim_count: usize) -> Vec<usize> {
        Dim::first(dim_count)
            .iter()
            .map(|&d| usize::from(self.order(d)))
            .collect()
    }

    /// Canonical name: `G`, `d1P`, `d2PT`, `d3T2M`, ...
    ///
    /// A dimension's order is written only when several dimensions are
    /// involved and it exceeds one.
    pub fn name(self) -> String {
        if self.total() == 0 {
            return "G".to_string();
        }
        let involved: Vec<Dim> = Dim::ALL.into_iter().filter(|&d| self.order(d) > 0).collect();
        let mut out = format!("d{}", self.total());
        for &dim in &involved {
            let order = self.order(dim);
            if involved.len() > 1 && order > 1 {
                out.push_str(&format!("{}{}", dim.label(), order));
            } else {
                out.push_str(dim.label());
            }
        }
        out
    }
}

impl fmt::Debug for DerivOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Display for DerivOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Evaluated Gibbs energy derivatives, one array per distinct request.
#[derive(Debug, Clone, Default)]
pub struct GibbsDerivatives {
    values: HashMap<DerivOrders, ArrayD<Real>>,
}

impl GibbsDerivatives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, orders: DerivOrders, values: ArrayD<Real>) {
        self.values.insert(orders, values);
    }

    pub fn get(&self, orders: DerivOrders) -> Option<&ArrayD<Real>> {
        self.values.get(&orders)
    }

    pub fn contains(&self, orders: DerivOrders) -> bool {
        self.values.contains_key(&orders)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = DerivOrders> + '_ {
        self.values.keys().copied()
    }
}
