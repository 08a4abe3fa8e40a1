//! Tests for logger installation

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use modulegrid::io::logging::{default_level, init};

    #[test]
    fn test_default_levels() {
        assert_eq!(default_level(false), LevelFilter::Info);
        assert_eq!(default_level(true), LevelFilter::Warn);
    }

    // Tests repeated initialization is tolerated
    #[test]
    fn test_init_twice() {
        init(true);
        init(false);
        log::info!("logger still usable");
    }
}
