//! Tests for `ModuleSet` membership, filtering and collapse

#[cfg(test)]
mod tests {
    use modulegrid::algorithm::bitset::ModuleSet;

    // Verifies a new set holds nothing
    #[test]
    fn test_new_set_is_empty() {
        let set = ModuleSet::new(5);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.capacity(), 5);
        assert_eq!(set.resolved(), None);
    }

    // Tests the occupied-cell initializer excludes only the empty module
    // Verified by filling with zeros instead of ones
    #[test]
    fn test_all_except() {
        let set = ModuleSet::all_except(4, 0);
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
        assert!(!set.contains(0));
    }

    // Tests the empty-cell initializer pins a single module
    #[test]
    fn test_single_is_resolved() {
        let set = ModuleSet::single(4, 0);
        assert_eq!(set.count(), 1);
        assert_eq!(set.resolved(), Some(0));
    }

    // Tests out-of-range indices are ignored rather than growing the set
    // Verified by removing the capacity check in insert
    #[test]
    fn test_insert_out_of_range_ignored() {
        let mut set = ModuleSet::new(3);
        set.insert(7);
        assert!(set.is_empty());
        assert!(!set.contains(7));
        assert_eq!(set.capacity(), 3);
    }

    // Tests remove reports whether anything changed
    #[test]
    fn test_remove_reports_presence() {
        let mut set = ModuleSet::all_except(3, 0);
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(!set.remove(0));
        assert_eq!(set.to_vec(), vec![2]);
    }

    // Tests retain counts exactly the removed modules
    // Verified by counting every visited module instead of removed ones
    #[test]
    fn test_retain_counts_removals() {
        let mut set = ModuleSet::all_except(6, 0);
        let removed = set.retain(|module| module % 2 == 0);
        assert_eq!(removed, 3);
        assert_eq!(set.to_vec(), vec![2, 4]);

        let removed_again = set.retain(|module| module % 2 == 0);
        assert_eq!(removed_again, 0);
    }

    // Tests retain only consults present modules
    #[test]
    fn test_retain_skips_absent_modules() {
        let mut set = ModuleSet::single(5, 3);
        let mut visited = Vec::new();
        set.retain(|module| {
            visited.push(module);
            true
        });
        assert_eq!(visited, vec![3]);
    }

    // Tests collapse leaves exactly one candidate
    #[test]
    fn test_collapse_to() {
        let mut set = ModuleSet::all_except(4, 0);
        set.collapse_to(2);
        assert_eq!(set.resolved(), Some(2));
        assert_eq!(set.count(), 1);
    }

    // Tests iteration order is ascending, which collapse tie-breaking relies on
    #[test]
    fn test_iteration_is_ascending() {
        let mut set = ModuleSet::new(8);
        for module in [6, 1, 4, 3] {
            set.insert(module);
        }
        let order: Vec<usize> = set.iter().collect();
        assert_eq!(order, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_display() {
        let set = ModuleSet::all_except(3, 0);
        assert_eq!(set.to_string(), "ModuleSet(2 modules: [1, 2])");
    }
}
