//! Tests for solver constants and configuration defaults

#[cfg(test)]
mod tests {
    use modulegrid::io::configuration::{
        DEFAULT_EDIT_COUNT, DEFAULT_GRID_SIZE, DEFAULT_ROUND_CAP, DEFAULT_SEED,
        DESTROY_PROBABILITY, MAX_EDIT_ATTEMPTS, PROGRESS_BAR_WIDTH, WORKER_THREAD_NAME,
    };
    use modulegrid::spatial::coords::GridSize;

    // Tests the round cap value
    // Verified by changing constant values
    #[test]
    fn test_round_cap() {
        assert_eq!(DEFAULT_ROUND_CAP, 1000);
    }

    // Tests the default grid size string parses
    #[test]
    fn test_default_grid_size_parses() {
        let size: GridSize = DEFAULT_GRID_SIZE.parse().unwrap();
        assert!(!size.is_degenerate());
        assert_eq!(size, GridSize::new(8, 6, 8));
    }

    #[test]
    fn test_destroy_probability_range() {
        assert!(DESTROY_PROBABILITY > 0.0);
        assert!(DESTROY_PROBABILITY < 0.5);
    }

    #[test]
    fn test_session_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!(DEFAULT_EDIT_COUNT > 0);
        assert!(MAX_EDIT_ATTEMPTS > 0);
        assert!(PROGRESS_BAR_WIDTH > 0);
        assert!(!WORKER_THREAD_NAME.is_empty());
    }
}
