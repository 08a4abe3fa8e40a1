use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset holding the candidate modules of one cell
///
/// Module indices are 0-based, matching catalog positions. Iteration always
/// yields indices in ascending order, which makes collapse tie-breaking
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSet {
    bits: BitVec,
}

impl ModuleSet {
    /// Create a set with no modules present
    pub fn new(module_count: usize) -> Self {
        Self {
            bits: bitvec![0; module_count],
        }
    }

    /// Create a set containing only `module`
    pub fn single(module_count: usize, module: usize) -> Self {
        let mut set = Self::new(module_count);
        set.insert(module);
        set
    }

    /// Create a set containing every module except `excluded`
    pub fn all_except(module_count: usize, excluded: usize) -> Self {
        let mut set = Self {
            bits: bitvec![1; module_count],
        };
        set.remove(excluded);
        set
    }

    /// Number of module slots this set was sized for
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a module index
    ///
    /// Indices beyond the set's capacity are ignored.
    pub fn insert(&mut self, module: usize) {
        if module < self.bits.len() {
            self.bits.set(module, true);
        }
    }

    /// Remove a module index, returning whether it was present
    pub fn remove(&mut self, module: usize) -> bool {
        let present = self.contains(module);
        if present {
            self.bits.set(module, false);
        }
        present
    }

    /// Test module membership
    pub fn contains(&self, module: usize) -> bool {
        self.bits.get(module).as_deref() == Some(&true)
    }

    /// Keep only the modules for which `keep` returns true
    ///
    /// Returns how many modules were removed. Does not allocate.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let mut removed = 0;
        for module in 0..self.bits.len() {
            if self.contains(module) && !keep(module) {
                self.bits.set(module, false);
                removed += 1;
            }
        }
        removed
    }

    /// Reduce the set to exactly `module`
    pub fn collapse_to(&mut self, module: usize) {
        self.bits.fill(false);
        self.insert(module);
    }

    /// Test if no modules are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count modules in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining module, if exactly one is left
    pub fn resolved(&self) -> Option<usize> {
        let mut ones = self.bits.iter_ones();
        match (ones.next(), ones.next()) {
            (Some(module), None) => Some(module),
            _ => None,
        }
    }

    /// Iterate module indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all module indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleSet({} modules: {:?})", self.count(), self.to_vec())
    }
}
