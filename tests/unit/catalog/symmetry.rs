//! Tests for the compatibility symmetry audit

#[cfg(test)]
mod tests {
    use modulegrid::catalog::module::{Catalog, Compatibility, EMPTY_MODULE, ModuleDefinition};
    use modulegrid::catalog::presets;
    use modulegrid::catalog::symmetry::{SymmetryViolation, audit, is_symmetric};
    use modulegrid::spatial::coords::Direction;

    // Verifies symmetric catalogs report nothing
    #[test]
    fn test_symmetric_catalog() {
        let catalog = presets::terrace().unwrap();
        assert!(audit(&catalog).is_empty());
        assert!(is_symmetric(&catalog));
    }

    // Tests a one-sided entry is reported once, naming both ends
    // Verified by checking the same direction instead of the opposite one
    #[test]
    fn test_one_sided_entry() {
        let mut wall = Compatibility::uniform(&[0]);
        wall.right.push(1);
        let catalog = Catalog::new(
            vec![
                ModuleDefinition::new("empty", 0, Compatibility::uniform(&[0, 1])),
                ModuleDefinition::new("wall", 0, wall),
            ],
            EMPTY_MODULE,
        )
        .unwrap();

        let violations = audit(&catalog);

        assert_eq!(
            violations,
            vec![SymmetryViolation {
                module: 1,
                direction: Direction::Right,
                neighbour: 1,
            }]
        );
        assert!(!is_symmetric(&catalog));
        assert!(violations[0].to_string().contains("to its left"));
    }
}
