//! Module definitions and the immutable catalog consumed by the solver

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_catalog};
use crate::spatial::coords::Direction;

/// Index of the empty module in every catalog
pub const EMPTY_MODULE: usize = 0;

/// Per-direction lists of module indices allowed as neighbours
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Neighbours allowed on the negative x side
    #[serde(default)]
    pub left: Vec<usize>,
    /// Neighbours allowed on the positive x side
    #[serde(default)]
    pub right: Vec<usize>,
    /// Neighbours allowed below
    #[serde(default)]
    pub down: Vec<usize>,
    /// Neighbours allowed above
    #[serde(default)]
    pub up: Vec<usize>,
    /// Neighbours allowed on the negative z side
    #[serde(default)]
    pub back: Vec<usize>,
    /// Neighbours allowed on the positive z side
    #[serde(default)]
    pub forward: Vec<usize>,
}

impl Compatibility {
    /// Same neighbour list in all six directions
    pub fn uniform(modules: &[usize]) -> Self {
        Self {
            left: modules.to_vec(),
            right: modules.to_vec(),
            down: modules.to_vec(),
            up: modules.to_vec(),
            back: modules.to_vec(),
            forward: modules.to_vec(),
        }
    }

    /// Neighbour list for one direction
    pub fn get(&self, direction: Direction) -> &[usize] {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Down => &self.down,
            Direction::Up => &self.up,
            Direction::Back => &self.back,
            Direction::Forward => &self.forward,
        }
    }

    /// Mutable neighbour list for one direction
    pub const fn get_mut(&mut self, direction: Direction) -> &mut Vec<usize> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Up => &mut self.up,
            Direction::Back => &mut self.back,
            Direction::Forward => &mut self.forward,
        }
    }
}

/// A placeable piece with a name, tie-break priority and adjacency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Display name
    pub name: String,
    /// Higher priority wins when a cell is collapsed
    #[serde(default)]
    pub priority: i32,
    /// Allowed neighbours per direction
    #[serde(default)]
    pub compatibility: Compatibility,
}

impl ModuleDefinition {
    /// Create a module definition
    pub fn new(name: impl Into<String>, priority: i32, compatibility: Compatibility) -> Self {
        Self {
            name: name.into(),
            priority,
            compatibility,
        }
    }
}

/// Validated, read-only table of modules shared by every solve
///
/// Directional symmetry of the compatibility lists is trusted, not checked;
/// see [`crate::catalog::symmetry::audit`] for an optional report.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<ModuleDefinition>,
    empty_allowed: Vec<[bool; 6]>,
}

impl Catalog {
    /// Build a catalog, validating its structure
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty, `empty_module` is not index 0,
    /// or any compatibility list names a module that does not exist
    pub fn new(modules: Vec<ModuleDefinition>, empty_module: usize) -> Result<Self> {
        if modules.is_empty() {
            return Err(invalid_catalog(&"catalog contains no modules"));
        }
        if empty_module != EMPTY_MODULE {
            return Err(invalid_catalog(&format!(
                "empty module must be index {EMPTY_MODULE}, got {empty_module}"
            )));
        }

        let module_count = modules.len();
        for (index, module) in modules.iter().enumerate() {
            for direction in Direction::ALL {
                if let Some(&bad) = module
                    .compatibility
                    .get(direction)
                    .iter()
                    .find(|&&neighbour| neighbour >= module_count)
                {
                    return Err(invalid_catalog(&format!(
                        "module {index} ('{}') lists unknown module {bad} to its {direction}",
                        module.name
                    )));
                }
            }
        }

        let empty_allowed = modules
            .iter()
            .map(|module| {
                Direction::ALL.map(|direction| {
                    module.compatibility.get(direction).contains(&EMPTY_MODULE)
                })
            })
            .collect();

        Ok(Self {
            modules,
            empty_allowed,
        })
    }

    /// Number of modules, including the empty module
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Always false for a validated catalog
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Index of the empty module
    pub const fn empty_module(&self) -> usize {
        EMPTY_MODULE
    }

    /// Definition of a module
    pub fn module(&self, index: usize) -> Option<&ModuleDefinition> {
        self.modules.get(index)
    }

    /// All module definitions in index order
    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    /// Collapse priority of a module, lowest possible if unknown
    pub fn priority(&self, index: usize) -> i32 {
        self.modules.get(index).map_or(i32::MIN, |m| m.priority)
    }

    /// Modules allowed next to `index` in `direction`
    pub fn compatible(&self, index: usize, direction: Direction) -> &[usize] {
        match self.modules.get(index) {
            Some(module) => module.compatibility.get(direction),
            None => &[],
        }
    }

    /// Whether `index` may face open space in `direction`
    pub fn allows_empty(&self, index: usize, direction: Direction) -> bool {
        self.empty_allowed
            .get(index)
            .and_then(|allowed| allowed.get(direction.index()))
            .copied()
            .unwrap_or(false)
    }

    /// Indices of every module except the empty module
    pub fn non_empty_modules(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.modules.len()).filter(|&index| index != EMPTY_MODULE)
    }

    /// Look up a module index by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.name == name)
    }
}
