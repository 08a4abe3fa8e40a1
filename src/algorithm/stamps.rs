//! Generation-stamped membership buffer for permitted neighbour modules
//!
//! One integer slot per module holds the generation in which it was last
//! stamped. Membership is an equality test against the current generation, and
//! starting a new set only bumps the counter.

/// Reusable module membership buffer keyed by a monotonically increasing generation
#[derive(Debug, Clone)]
pub struct NeighbourStamps {
    stamps: Vec<u32>,
    generation: u32,
}

impl NeighbourStamps {
    /// Create a buffer for a catalog of `module_count` modules
    pub fn new(module_count: usize) -> Self {
        Self {
            stamps: vec![0; module_count],
            generation: 0,
        }
    }

    /// Start a new, empty membership set
    ///
    /// Previous stamps become stale without being touched.
    pub fn begin(&mut self) {
        if self.generation == u32::MAX {
            // Wrapped counters would make ancient stamps look current
            self.stamps.fill(0);
            self.generation = 0;
        }
        self.generation += 1;
    }

    /// Add a module to the current set
    pub fn stamp(&mut self, module: usize) {
        if let Some(slot) = self.stamps.get_mut(module) {
            *slot = self.generation;
        }
    }

    /// Add every module in `modules` to the current set
    pub fn stamp_all(&mut self, modules: &[usize]) {
        for &module in modules {
            self.stamp(module);
        }
    }

    /// Test membership in the current set
    pub fn contains(&self, module: usize) -> bool {
        self.generation != 0 && self.stamps.get(module) == Some(&self.generation)
    }

    /// Current generation counter
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}
