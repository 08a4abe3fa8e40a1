//! Built-in catalogs for the command line, benchmarks and tests
//!
//! Compatibility tables are generated from a single "may this pair touch?"
//! rule per axis, so every preset is symmetric by construction.

use std::fmt;
use std::str::FromStr;

use crate::catalog::module::{Catalog, Compatibility, EMPTY_MODULE, ModuleDefinition};
use crate::io::error::Result;
use crate::spatial::coords::Direction;

/// Selectable built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Empty plus one solid cube that only touches open space
    Cube,
    /// Stackable blocks that grow a base at the bottom and a cap on top
    Terrace,
}

impl Preset {
    /// Every preset, in display order
    pub const ALL: [Self; 2] = [Self::Cube, Self::Terrace];

    /// Name accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Terrace => "terrace",
        }
    }

    /// Build the preset's catalog
    ///
    /// # Errors
    ///
    /// Returns an error only if the generated tables fail validation
    pub fn catalog(self) -> Result<Catalog> {
        match self {
            Self::Cube => cube(),
            Self::Terrace => terrace(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Index of the solid module in [`cube`]
pub const CUBE_SOLID: usize = 1;

/// Indices of the modules in [`terrace`]
pub mod terrace_modules {
    /// Generic stackable block
    pub const BLOCK: usize = 1;
    /// Top piece, needs open space above
    pub const CAP: usize = 2;
    /// Bottom piece, needs open space below
    pub const BASE: usize = 3;
}

/// Empty module and a solid cube compatible with empty on every side and with itself on none
///
/// # Errors
///
/// Never fails in practice; the signature matches [`Catalog::new`]
pub fn cube() -> Result<Catalog> {
    generate(
        &[("empty", 0), ("solid", 0)],
        |a, b| a == EMPTY_MODULE || b == EMPTY_MODULE,
        |lower, upper| lower == EMPTY_MODULE || upper == EMPTY_MODULE,
    )
}

/// Blocks that resolve into base, block and cap pieces depending on vertical context
///
/// Horizontal neighbours are unrestricted. Vertically a cap only accepts
/// open space above it and a base only accepts open space below it. Because
/// constraints form independent vertical chains, greedy collapse never
/// contradicts for any arrangement of occupied cells.
///
/// # Errors
///
/// Never fails in practice; the signature matches [`Catalog::new`]
pub fn terrace() -> Result<Catalog> {
    use terrace_modules::{BASE, CAP};

    generate(
        &[("empty", 0), ("block", 0), ("cap", 2), ("base", 1)],
        |_, _| true,
        |lower, upper| {
            if lower == CAP {
                upper == EMPTY_MODULE
            } else if upper == BASE {
                lower == EMPTY_MODULE
            } else {
                true
            }
        },
    )
}

/// Build a symmetric catalog from pairwise rules
///
/// `horizontal(a, b)` decides whether `a` and `b` may be side by side in any
/// horizontal direction; `vertical(lower, upper)` decides whether `upper` may
/// rest directly on `lower`.
///
/// # Errors
///
/// Returns an error if the resulting catalog fails validation
pub fn generate<H, V>(modules: &[(&str, i32)], horizontal: H, vertical: V) -> Result<Catalog>
where
    H: Fn(usize, usize) -> bool,
    V: Fn(usize, usize) -> bool,
{
    let count = modules.len();
    let definitions = modules
        .iter()
        .enumerate()
        .map(|(index, &(name, priority))| {
            let mut compatibility = Compatibility::default();
            for direction in Direction::ALL {
                let allowed = compatibility.get_mut(direction);
                for other in 0..count {
                    let fits = match direction {
                        Direction::Up => vertical(index, other),
                        Direction::Down => vertical(other, index),
                        _ => horizontal(index, other),
                    };
                    if fits {
                        allowed.push(other);
                    }
                }
            }
            ModuleDefinition::new(name, priority, compatibility)
        })
        .collect();

    Catalog::new(definitions, EMPTY_MODULE)
}
