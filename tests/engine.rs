use conway_console::{CellAssignment, Error, Grid, LifeEngine, Parallelism};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn with_alive(size: usize, cells: &[(usize, usize)]) -> LifeEngine {
    let mut engine = LifeEngine::new(size).unwrap();
    engine.set_grid(Grid::blank(size, size).unwrap()).unwrap();
    engine
        .set_cells(cells.iter().map(|&(x, y)| CellAssignment::alive(x, y)))
        .unwrap();
    engine
}

fn alive_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
    let grid = engine.grid().unwrap();
    let mut result = vec![];
    for x in 0..grid.rows() {
        for y in 0..grid.cols() {
            if grid.get(x, y) == Some(true) {
                result.push((x, y));
            }
        }
    }
    result
}

#[test]
fn test_zero_size_is_invalid_configuration() {
    assert!(matches!(
        LifeEngine::new(0),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_oversized_world_is_invalid_configuration() {
    for size in [1 << (usize::BITS / 2), usize::MAX] {
        assert!(
            matches!(LifeEngine::new(size), Err(Error::InvalidConfiguration(_))),
            "size={}",
            size
        );
    }
    assert!(LifeEngine::new((1 << (usize::BITS / 2)) - 1).is_ok());
}

#[test]
fn test_step_before_set_grid() {
    for size in [1, 2, 20, 100] {
        let mut engine = LifeEngine::new(size).unwrap();
        assert_eq!(engine.step(), Err(Error::NotInitialized));
        assert_eq!(engine.set_cell(0, 0, true), Err(Error::NotInitialized));
        assert_eq!(engine.get_cell(0, 0), Err(Error::NotInitialized));
        assert!(engine.grid().is_none());
        assert_eq!(engine.population(), None);
    }
}

#[test]
fn test_set_grid_wrong_dimensions_keeps_previous() {
    const N: usize = 10;

    let original = Grid::random(N, Some(SEED), FILL_RATE).unwrap();
    let mut engine = LifeEngine::new(N).unwrap();
    engine.set_grid(original.clone()).unwrap();

    for (rows, cols) in [(N - 1, N - 1), (N + 1, N + 1), (N, N + 1), (N - 1, N), (0, 0)] {
        let result = engine.set_grid(Grid::blank(rows, cols).unwrap());
        assert!(
            matches!(result, Err(Error::InvalidArgument(_))),
            "rows={} cols={}",
            rows,
            cols
        );
        assert_eq!(engine.grid(), Some(&original));
    }

    let ragged = vec![vec![false; N]; N - 1]
        .into_iter()
        .chain(Some(vec![false; N - 1]))
        .collect();
    assert!(matches!(
        Grid::from_rows(ragged),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_set_grid_wrong_dimensions_before_init() {
    let mut engine = LifeEngine::new(5).unwrap();
    assert!(engine.set_grid(Grid::blank(4, 5).unwrap()).is_err());
    assert_eq!(engine.step(), Err(Error::NotInitialized));
}

#[test]
fn test_set_grid_replaces_instead_of_merging() {
    let mut engine = with_alive(6, &[(1, 1), (2, 2)]);
    engine.set_grid(Grid::blank(6, 6).unwrap()).unwrap();
    assert_eq!(engine.population(), Some(0));
}

#[test]
fn test_set_cell_out_of_range() {
    let mut engine = with_alive(5, &[]);
    assert_eq!(
        engine.set_cell(5, 0, true),
        Err(Error::IndexOutOfRange { x: 5, y: 0, size: 5 })
    );
    assert_eq!(
        engine.set_cell(0, 7, true),
        Err(Error::IndexOutOfRange { x: 0, y: 7, size: 5 })
    );
    assert_eq!(engine.population(), Some(0));

    engine.set_cell(4, 4, true).unwrap();
    assert_eq!(engine.get_cell(4, 4), Ok(true));
    engine.set_cell(4, 4, false).unwrap();
    assert_eq!(engine.get_cell(4, 4), Ok(false));
}

#[test]
fn test_block_is_still_life() {
    let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
    let mut engine = with_alive(10, &block);
    for _ in 0..5 {
        engine.step().unwrap();
        assert_eq!(alive_cells(&engine), block.to_vec());
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = vec![(5, 4), (5, 5), (5, 6)];
    let vertical = vec![(4, 5), (5, 5), (6, 5)];
    let mut engine = with_alive(11, &horizontal);

    engine.step().unwrap();
    assert_eq!(alive_cells(&engine), vertical);
    engine.step().unwrap();
    assert_eq!(alive_cells(&engine), horizontal);
    assert_eq!(engine.generation(), 2);
}

#[test]
fn test_glider_moves_diagonally() {
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut engine = with_alive(12, &glider);
    for _ in 0..4 {
        engine.step().unwrap();
    }
    let moved = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect::<Vec<_>>();
    assert_eq!(alive_cells(&engine), moved);
}

#[test]
fn test_empty_world_stays_empty() {
    for parallelism in [Parallelism::Never, Parallelism::Always] {
        let mut engine = LifeEngine::new(70).unwrap().with_parallelism(parallelism);
        engine.set_grid(Grid::blank(70, 70).unwrap()).unwrap();
        for _ in 0..10 {
            engine.step().unwrap();
            assert_eq!(engine.population(), Some(0));
        }
    }
}

#[test]
fn test_corner_cell_dies_without_wraparound() {
    for size in [2, 3, 10] {
        let mut engine = with_alive(size, &[(0, 0)]);
        engine.step().unwrap();
        assert_eq!(engine.population(), Some(0), "size={}", size);
    }
}

#[test]
fn test_edges_are_not_stitched() {
    // a blinker split over opposite edges would keep oscillating on a torus
    let mut engine = with_alive(8, &[(3, 7), (3, 0), (3, 1)]);
    engine.step().unwrap();
    assert_eq!(engine.population(), Some(0));
}

#[test]
fn test_block_in_corner_is_still_life() {
    let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let mut engine = with_alive(4, &block);
    engine.step().unwrap();
    assert_eq!(alive_cells(&engine), block.to_vec());
}

#[test]
fn test_determinism() {
    const N: usize = 96;

    let grid = Grid::random(N, Some(SEED), FILL_RATE).unwrap();
    let run = |parallelism| {
        let mut engine = LifeEngine::new(N).unwrap().with_parallelism(parallelism);
        engine.set_grid(grid.clone()).unwrap();
        (0..30)
            .map(|_| {
                engine.step().unwrap();
                engine.grid().unwrap().clone()
            })
            .collect::<Vec<_>>()
    };

    let first = run(Parallelism::Always);
    assert_eq!(first, run(Parallelism::Always));
    assert_eq!(first, run(Parallelism::Never));
}
