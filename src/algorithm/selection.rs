use crate::{
    algorithm::bitset::ModuleSet,
    catalog::module::Catalog,
    spatial::coords::GridCoord,
    spatial::field::SuperpositionField,
};

/// Outcome of scanning the field for the next cell to collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every cell has exactly one candidate
    Done,
    /// Undecided cell with the fewest candidates
    Collapse(GridCoord),
    /// Cell with no candidates left
    Contradiction(GridCoord),
}

/// Find the undecided cell with minimum entropy
///
/// Entropy is the candidate count. Cells with a single candidate are already
/// resolved and skipped. Ties go to the first cell in scan order (x fastest,
/// then y, then z). An empty cell anywhere ends the scan immediately.
pub fn select_min_entropy(field: &SuperpositionField) -> Selection {
    let mut best: Option<(usize, GridCoord)> = None;

    for coord in field.size().coords() {
        let entropy = field.entropy(coord);
        if entropy == 0 {
            return Selection::Contradiction(coord);
        }
        if entropy > 1 && best.is_none_or(|(min, _)| entropy < min) {
            best = Some((entropy, coord));
        }
    }

    best.map_or(Selection::Done, |(_, coord)| Selection::Collapse(coord))
}

/// Candidate with the highest priority
///
/// Ties go to the first candidate in iteration order, which for a
/// [`ModuleSet`] is ascending module index.
pub fn highest_priority(candidates: &ModuleSet, catalog: &Catalog) -> Option<usize> {
    let mut chosen: Option<(i32, usize)> = None;
    for module in candidates.iter() {
        let priority = catalog.priority(module);
        if chosen.is_none_or(|(best, _)| priority > best) {
            chosen = Some((priority, module));
        }
    }
    chosen.map(|(_, module)| module)
}

/// Force a cell down to its highest-priority candidate
///
/// Returns the chosen module, or `None` if the cell is out of bounds or empty.
pub fn collapse_at(
    field: &mut SuperpositionField,
    coord: GridCoord,
    catalog: &Catalog,
) -> Option<usize> {
    let cell = field.get_mut(coord)?;
    let module = highest_priority(cell, catalog)?;
    cell.collapse_to(module);
    Some(module)
}
