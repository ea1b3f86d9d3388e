//! Tests for configuration validation, planning and composing

#[cfg(test)]
mod tests {
    use crate::support::{seed_color, write_grid, write_instance};
    use image::Rgb;
    use iscompose::ComposeError;
    use iscompose::compose::composer::{CombineConfig, Composer, combine};
    use iscompose::compose::family::GraphFamily;
    use iscompose::compose::selection::{TileSelection, threshold_path};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const REGULAR: GraphFamily = GraphFamily::Regular { degree: 3 };

    fn regular_config(data_dir: &Path, graphsize: u32) -> CombineConfig {
        CombineConfig::new("regular", 50, 0.5, 3, graphsize)
            .unwrap()
            .with_data_dir(data_dir)
    }

    fn assert_invalid(result: iscompose::Result<CombineConfig>, expected: &str) {
        match result {
            Err(ComposeError::InvalidArgument { parameter, .. }) => {
                assert_eq!(parameter, expected);
            }
            other => unreachable!("Expected InvalidArgument for {expected}, got {other:?}"),
        }
    }

    // Tests each parameter is validated
    // Verified by removing the alpha range check
    #[test]
    fn test_config_validation() {
        assert_invalid(CombineConfig::new("hexagonal", 50, 0.5, 3, 10), "which");
        assert_invalid(CombineConfig::new("regular", 0, 0.5, 3, 10), "n");
        assert_invalid(CombineConfig::new("regular", 50, 0.0, 3, 10), "alpha");
        assert_invalid(CombineConfig::new("regular", 50, 1.5, 3, 10), "alpha");
        assert_invalid(CombineConfig::new("regular", 50, f64::NAN, 3, 10), "alpha");
        assert_invalid(CombineConfig::new("regular", 50, 0.5, 0, 10), "degree");
        assert_invalid(CombineConfig::new("regular", 50, 0.5, 3, 0), "graphsize");
        assert!(CombineConfig::new("regular", 50, 1.0, 3, 10).is_ok());
    }

    // Tests defaults are degree 3 on a 10x10 grid read from data/
    // Verified by changing the default grid side
    #[test]
    fn test_config_defaults() {
        let config = CombineConfig::with_defaults("regular", 50, 0.5).unwrap();

        assert_eq!(config.family(), REGULAR);
        assert_eq!(config.size(), 50);
        assert!((config.alpha() - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.layout().side(), 10);
        assert_eq!(config.data_dir(), Path::new("data"));
        assert_eq!(config.selection(), TileSelection::Exact);
        assert_eq!(
            config.instance_directory(7),
            PathBuf::from("data/IndependentSet_Regular50d3seed7")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("combined-regular50d3-alpha0.5.jpg")
        );
    }

    // Tests directory overrides feed instance and output paths
    // Verified by ignoring the output directory
    #[test]
    fn test_config_directories() {
        let config = CombineConfig::with_defaults("diagonal", 20, 0.25)
            .unwrap()
            .with_data_dir("runs")
            .with_output_dir("out")
            .with_selection(TileSelection::FirstAvailable);

        assert_eq!(
            config.instance_directory(3),
            PathBuf::from("runs/IndependentSet_Diag20x20f0.8seed3")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("out/combined-diagonal20-alpha0.25.jpg")
        );
        assert_eq!(config.selection(), TileSelection::FirstAvailable);
    }

    // Tests planning resolves every seed in order with its own index
    // Verified by reading the seed 1 threshold for every seed
    #[test]
    fn test_plan_resolves_all_tiles() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path();
        write_instance(data_dir, REGULAR, 50, 1, "57.0", 29, (4, 4));
        write_instance(data_dir, REGULAR, 50, 2, "10.0", 5, (4, 4));
        write_instance(data_dir, REGULAR, 50, 3, "# size\n8\n", 4, (4, 4));
        write_instance(data_dir, REGULAR, 50, 4, "1", 1, (4, 4));

        let plan = Composer::new(regular_config(data_dir, 2)).plan().unwrap();

        assert_eq!(plan.tiles().len(), 4);
        assert_eq!(plan.tile(2).unwrap().index, 5);
        assert_eq!(plan.tile(3).unwrap().threshold, Some(8.0));
        assert!(plan.tile(0).is_none());
        assert!(plan.tile(5).is_none());

        let grid = plan.selection_grid();
        assert_eq!(grid[[0, 0]], 29);
        assert_eq!(grid[[0, 1]], 5);
        assert_eq!(grid[[1, 0]], 4);
        assert_eq!(grid[[1, 1]], 1);
    }

    // Tests the canvas grid puts j on rows and i on columns
    // Verified by returning the selection grid untransposed
    #[test]
    fn test_canvas_grid_orientation() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path();
        write_instance(data_dir, REGULAR, 50, 1, "57.0", 29, (4, 4));
        write_instance(data_dir, REGULAR, 50, 2, "10.0", 5, (4, 4));
        write_instance(data_dir, REGULAR, 50, 3, "8", 4, (4, 4));
        write_instance(data_dir, REGULAR, 50, 4, "1", 1, (4, 4));

        let plan = Composer::new(regular_config(data_dir, 2)).plan().unwrap();
        let canvas = plan.canvas_grid();

        // Seed 2 is below seed 1, seed 3 to its right
        assert_eq!(canvas[[0, 0]], 29);
        assert_eq!(canvas[[1, 0]], 5);
        assert_eq!(canvas[[0, 1]], 4);
        assert_eq!(canvas[[1, 1]], 1);
    }

    // Tests a dry run clears the progress bar whether planning succeeds or not
    // Verified by returning the plan before abandoning the bar
    #[test]
    fn test_dry_run_clears_progress() {
        let temp_dir = TempDir::new().unwrap();
        write_grid(temp_dir.path(), REGULAR, 50, 2, (4, 4));

        let composer = Composer::new(regular_config(temp_dir.path(), 2));
        assert!(!composer.progress().is_finished());
        assert_eq!(composer.dry_run().unwrap().tiles().len(), 4);
        assert!(composer.progress().is_finished());

        let empty_dir = TempDir::new().unwrap();
        let failing = Composer::new(regular_config(empty_dir.path(), 2));
        assert!(matches!(failing.dry_run(), Err(ComposeError::DataRead { .. })));
        assert!(failing.progress().is_finished());
    }

    // Tests a missing threshold anywhere aborts planning
    // Verified by skipping seeds with unreadable thresholds
    #[test]
    fn test_plan_missing_threshold() {
        let temp_dir = TempDir::new().unwrap();
        write_grid(temp_dir.path(), REGULAR, 50, 2, (4, 4));
        let missing = threshold_path(&REGULAR.instance_directory(temp_dir.path(), 50, 3));
        fs::remove_file(&missing).unwrap();

        match Composer::new(regular_config(temp_dir.path(), 2)).plan() {
            Err(ComposeError::DataRead { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected DataRead, got {other:?}"),
        }
    }

    // Tests tiles are pasted with i horizontal and j vertical
    // Verified by swapping the offset axes
    #[test]
    fn test_compose_places_tiles() {
        let temp_dir = TempDir::new().unwrap();
        write_grid(temp_dir.path(), REGULAR, 50, 2, (4, 3));
        let composer = Composer::new(regular_config(temp_dir.path(), 2));

        let plan = composer.plan().unwrap();
        let canvas = composer.compose(&plan).unwrap();

        assert_eq!(canvas.dimensions(), (8, 6));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb(seed_color(1)));
        assert_eq!(canvas.get_pixel(3, 2), &Rgb(seed_color(1)));
        assert_eq!(canvas.get_pixel(0, 3), &Rgb(seed_color(2)));
        assert_eq!(canvas.get_pixel(4, 0), &Rgb(seed_color(3)));
        assert_eq!(canvas.get_pixel(7, 5), &Rgb(seed_color(4)));
    }

    // Tests seed 23 of a 10x10 grid lands at offset (2w, 2h)
    // Verified by placing tiles row-major on the canvas
    #[test]
    fn test_compose_full_grid_placement() {
        let temp_dir = TempDir::new().unwrap();
        write_grid(temp_dir.path(), REGULAR, 50, 10, (3, 2));
        let composer = Composer::new(regular_config(temp_dir.path(), 10));

        let plan = composer.plan().unwrap();
        let canvas = composer.compose(&plan).unwrap();

        assert_eq!(canvas.dimensions(), (30, 20));
        assert_eq!(canvas.get_pixel(6, 4), &Rgb(seed_color(23)));
        assert_eq!(canvas.get_pixel(3, 0), &Rgb(seed_color(11)));
        assert_eq!(canvas.get_pixel(0, 2), &Rgb(seed_color(2)));
        assert_eq!(canvas.get_pixel(29, 19), &Rgb(seed_color(100)));
    }

    // Tests the canvas is sized from the seed 1 tile and larger tiles are clipped
    // Verified by sizing the canvas from the largest tile
    #[test]
    fn test_compose_sizes_from_first_tile() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path();
        write_instance(data_dir, REGULAR, 50, 1, "57", 29, (4, 4));
        write_instance(data_dir, REGULAR, 50, 2, "57", 29, (4, 4));
        write_instance(data_dir, REGULAR, 50, 3, "57", 29, (4, 4));
        write_instance(data_dir, REGULAR, 50, 4, "57", 29, (6, 6));
        let composer = Composer::new(regular_config(data_dir, 2));

        let canvas = composer.compose(&composer.plan().unwrap()).unwrap();

        assert_eq!(canvas.dimensions(), (8, 8));
        assert_eq!(canvas.get_pixel(7, 7), &Rgb(seed_color(4)));
    }

    // Tests combine writes a JPEG with the composite dimensions
    // Verified by writing to the data directory instead
    #[test]
    fn test_combine_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let output_dir = temp_dir.path().join("out");
        write_grid(&data_dir, REGULAR, 50, 2, (8, 8));

        let config = regular_config(&data_dir, 2).with_output_dir(&output_dir);
        let output_path = combine(config).unwrap();

        assert_eq!(
            output_path,
            output_dir.join("combined-regular50d3-alpha0.5.jpg")
        );
        assert_eq!(image::image_dimensions(&output_path).unwrap(), (16, 16));
    }

    // Tests a missing tile leaves no output behind
    // Verified by saving before planning completes
    #[test]
    fn test_combine_missing_tile_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let output_dir = temp_dir.path().join("out");
        write_grid(&data_dir, REGULAR, 50, 2, (8, 8));
        let directory = REGULAR.instance_directory(&data_dir, 50, 4);
        fs::remove_file(directory.join("hamming-K29-n10000.png")).unwrap();

        let config = regular_config(&data_dir, 2).with_output_dir(&output_dir);
        let result = combine(config);

        assert!(matches!(result, Err(ComposeError::MissingTile { .. })));
        assert!(!output_dir.exists());
    }

    // Tests a tile that cannot be decoded aborts composing
    // Verified by skipping undecodable tiles
    #[test]
    fn test_compose_undecodable_tile() {
        let temp_dir = TempDir::new().unwrap();
        write_grid(temp_dir.path(), REGULAR, 50, 2, (4, 4));
        let broken = REGULAR
            .instance_directory(temp_dir.path(), 50, 3)
            .join("hamming-K29-n10000.png");
        fs::write(&broken, b"not a png").unwrap();
        let composer = Composer::new(regular_config(temp_dir.path(), 2));

        let plan = composer.plan().unwrap();

        match composer.compose(&plan) {
            Err(ComposeError::ImageLoad { path, .. }) => assert_eq!(path, broken),
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }
}
