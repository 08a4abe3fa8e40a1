//! Tests for minimum-entropy selection and priority collapse

#[cfg(test)]
mod tests {
    use modulegrid::algorithm::bitset::ModuleSet;
    use modulegrid::algorithm::selection::{
        Selection, collapse_at, highest_priority, select_min_entropy,
    };
    use modulegrid::catalog::module::{Catalog, Compatibility, ModuleDefinition};
    use modulegrid::catalog::presets::{self, terrace_modules};
    use modulegrid::spatial::coords::{GridCoord, GridSize};
    use modulegrid::spatial::field::SuperpositionField;
    use modulegrid::spatial::grid::GridSnapshot;

    fn terrace_field(size: GridSize, cells: &[GridCoord]) -> (Catalog, SuperpositionField) {
        let catalog = presets::terrace().unwrap();
        let snapshot = GridSnapshot::from_coords(size, cells).unwrap();
        let field = SuperpositionField::from_snapshot(&snapshot, &catalog);
        (catalog, field)
    }

    // Verifies a field of empty cells needs no collapse
    #[test]
    fn test_all_resolved_is_done() {
        let (_, field) = terrace_field(GridSize::new(2, 2, 2), &[]);
        assert_eq!(select_min_entropy(&field), Selection::Done);
    }

    // Tests the lowest-entropy undecided cell wins over earlier higher-entropy cells
    // Verified by changing the strict comparison to less-or-equal
    #[test]
    fn test_minimum_entropy_selected() {
        let first = GridCoord::new(0, 0, 0);
        let second = GridCoord::new(1, 0, 0);
        let (_, mut field) = terrace_field(GridSize::new(2, 1, 1), &[first, second]);
        field.get_mut(second).unwrap().remove(terrace_modules::CAP);

        assert_eq!(select_min_entropy(&field), Selection::Collapse(second));
    }

    // Tests ties go to the first cell in scan order (x fastest, then y, then z)
    #[test]
    fn test_ties_use_scan_order() {
        let cells = [
            GridCoord::new(0, 0, 1),
            GridCoord::new(0, 1, 0),
            GridCoord::new(1, 0, 0),
        ];
        let (_, field) = terrace_field(GridSize::new(2, 2, 2), &cells);
        assert_eq!(
            select_min_entropy(&field),
            Selection::Collapse(GridCoord::new(1, 0, 0))
        );
    }

    // Tests an empty candidate set is reported instead of skipped
    #[test]
    fn test_empty_cell_reported() {
        let broken = GridCoord::new(1, 0, 0);
        let (_, mut field) =
            terrace_field(GridSize::new(2, 1, 1), &[GridCoord::new(0, 0, 0), broken]);
        field.get_mut(broken).unwrap().retain(|_| false);

        assert_eq!(select_min_entropy(&field), Selection::Contradiction(broken));
    }

    // Tests the highest priority candidate is chosen
    #[test]
    fn test_highest_priority() {
        let catalog = presets::terrace().unwrap();
        let candidates = ModuleSet::all_except(catalog.len(), catalog.empty_module());
        assert_eq!(
            highest_priority(&candidates, &catalog),
            Some(terrace_modules::CAP)
        );
    }

    // Tests equal priorities resolve to the lowest module index
    // Verified by changing the priority comparison to greater-or-equal
    #[test]
    fn test_priority_tie_prefers_lowest_index() {
        let any = Compatibility::uniform(&[0, 1, 2]);
        let catalog = Catalog::new(
            vec![
                ModuleDefinition::new("empty", 0, any.clone()),
                ModuleDefinition::new("first", 5, any.clone()),
                ModuleDefinition::new("second", 5, any),
            ],
            0,
        )
        .unwrap();

        let candidates = ModuleSet::all_except(3, 0);
        assert_eq!(highest_priority(&candidates, &catalog), Some(1));
    }

    #[test]
    fn test_highest_priority_of_empty_set() {
        let catalog = presets::cube().unwrap();
        assert_eq!(highest_priority(&ModuleSet::new(2), &catalog), None);
    }

    // Tests collapse_at pins the cell to the chosen module
    #[test]
    fn test_collapse_at() {
        let cell = GridCoord::new(0, 0, 0);
        let (catalog, mut field) = terrace_field(GridSize::new(1, 1, 1), &[cell]);

        assert_eq!(
            collapse_at(&mut field, cell, &catalog),
            Some(terrace_modules::CAP)
        );
        assert_eq!(field.entropy(cell), 1);
        assert_eq!(
            collapse_at(&mut field, GridCoord::new(3, 0, 0), &catalog),
            None
        );
    }
}
