//! Optional audit of directional compatibility symmetry
//!
//! The solver assumes that if A accepts B to its right, B accepts A to its
//! left. Catalog authoring tools guarantee this; the audit only reports
//! violations and never alters a catalog.

use std::fmt;

use crate::catalog::module::Catalog;
use crate::spatial::coords::Direction;

/// One-sided compatibility entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryViolation {
    /// Module that lists the neighbour
    pub module: usize,
    /// Direction in which the neighbour is listed
    pub direction: Direction,
    /// Neighbour that does not list `module` back
    pub neighbour: usize,
}

impl fmt::Display for SymmetryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "module {} accepts {} to its {}, but {} does not accept {} to its {}",
            self.module,
            self.neighbour,
            self.direction,
            self.neighbour,
            self.module,
            self.direction.opposite()
        )
    }
}

/// List every one-sided compatibility entry in the catalog
///
/// Violations are reported in module, direction, neighbour order.
pub fn audit(catalog: &Catalog) -> Vec<SymmetryViolation> {
    let mut violations = Vec::new();
    for module in 0..catalog.len() {
        for direction in Direction::ALL {
            for &neighbour in catalog.compatible(module, direction) {
                if !catalog
                    .compatible(neighbour, direction.opposite())
                    .contains(&module)
                {
                    violations.push(SymmetryViolation {
                        module,
                        direction,
                        neighbour,
                    });
                }
            }
        }
    }
    violations
}

/// Whether the catalog has no one-sided compatibility entries
pub fn is_symmetric(catalog: &Catalog) -> bool {
    audit(catalog).is_empty()
}
