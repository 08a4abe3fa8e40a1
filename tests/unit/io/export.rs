//! Tests for placement list serialization

#[cfg(test)]
mod tests {
    use modulegrid::algorithm::executor::{Placement, Solution, SolveStats};
    use modulegrid::catalog::presets::{self, terrace_modules};
    use modulegrid::WfcError;
    use modulegrid::io::export::{SolutionDocument, export_solution, write_solution};
    use modulegrid::spatial::coords::{GridCoord, GridSize};
    use serde_json::Value;
    use std::fs;
    use std::io::{self, Write};
    use tempfile::TempDir;

    // Accepts every byte but fails to flush
    struct UnflushableWriter;

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    fn solution() -> Solution {
        Solution {
            placements: vec![
                Placement {
                    coord: GridCoord::new(0, 0, 0),
                    module: terrace_modules::BASE,
                },
                Placement {
                    coord: GridCoord::new(0, 1, 0),
                    module: terrace_modules::CAP,
                },
            ],
            stats: SolveStats {
                rounds: 2,
                ..SolveStats::default()
            },
        }
    }

    // Verifies module names are attached to each placement
    #[test]
    fn test_document_names_modules() {
        let catalog = presets::terrace().unwrap();
        let document = SolutionDocument::new(&solution(), &catalog, GridSize::new(1, 2, 1));

        assert_eq!(document.size, [1, 2, 1]);
        assert_eq!(document.rounds, 2);
        let names: Vec<&str> = document.placements.iter().map(|record| record.name).collect();
        assert_eq!(names, vec!["base", "cap"]);
    }

    // Tests the written JSON layout
    #[test]
    fn test_write_solution_layout() {
        let catalog = presets::terrace().unwrap();
        let mut buffer = Vec::new();

        write_solution(&mut buffer, &solution(), &catalog, GridSize::new(1, 2, 1)).unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["placements"][1]["coord"]["y"], 1);
        assert_eq!(value["placements"][1]["name"], "cap");
        assert_eq!(value["placements"][0]["module"], terrace_modules::BASE);
        assert!(buffer.ends_with(b"\n"));
    }

    #[test]
    fn test_export_solution_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let catalog = presets::terrace().unwrap();

        export_solution(&path, &solution(), &catalog, GridSize::new(1, 2, 1)).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["placements"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let catalog = presets::terrace().unwrap();
        assert!(export_solution(&path, &solution(), &catalog, GridSize::new(1, 2, 1)).is_err());
    }

    // Tests flush failures keep the output context
    #[test]
    fn test_write_failure_reports_output() {
        let catalog = presets::terrace().unwrap();
        let result = write_solution(
            UnflushableWriter,
            &solution(),
            &catalog,
            GridSize::new(1, 2, 1),
        );

        assert!(
            matches!(
                &result,
                Err(WfcError::FileSystem { path, operation: "write", .. })
                    if path.to_str() == Some("<output>")
            ),
            "unexpected result: {result:?}"
        );
    }
}
