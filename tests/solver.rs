use maze_dfs::{
    parse_maze, solution_path, Coordinate, Grid, Marker, Options, PathDisplay, SolveState, Solver,
    TraversalStack,
};

fn grid_from(text: &str) -> Grid {
    parse_maze(text, Options::default()).unwrap().grid
}

fn coords(pairs: &[(i64, i64)]) -> Vec<Coordinate> {
    pairs
        .iter()
        .map(|&(col, row)| Coordinate::new(col, row))
        .collect()
}

#[test]
fn open_grid_follows_right_left_down_up_order() {
    let outcome = Solver::new(grid_from("3 3\n1 1\n3 3\n\n"), Options::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(outcome.state, SolveState::Solved);
    assert_eq!(outcome.coin_n, 0);
    assert_eq!(
        outcome.path.unwrap(),
        coords(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 3)
        ])
    );
}

#[test]
fn blocked_center_walks_along_the_edge() {
    let outcome = Solver::new(grid_from("3 3\n1 1\n3 3\n2 2 b\n"), Options::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(
        outcome.path.unwrap(),
        coords(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)])
    );
}

#[test]
fn start_on_end_is_solved_at_once() {
    let mut solver = Solver::new(grid_from("2 2\n1 2\n1 2\n\n"), Options::default()).unwrap();
    assert_eq!(solver.step().unwrap(), SolveState::Solved);
    assert_eq!(solver.coin_n(), 0);
    assert_eq!(solver.step_n(), 1);

    let outcome = solver.run().unwrap();
    assert_eq!(outcome.path.unwrap(), coords(&[(1, 2)]));
}

#[test]
fn walled_in_start_is_exhausted() {
    let grid = grid_from("3 3\n2 2\n3 3\n1 2 b\n3 2 b\n2 1 b\n2 3 b\n");
    let outcome = Solver::new(grid, Options::default()).unwrap().run().unwrap();

    assert_eq!(outcome.state, SolveState::Exhausted);
    assert_eq!(outcome.coin_n, 0);
    assert_eq!(outcome.step_n, 1);
    assert!(outcome.path.is_none());
}

#[test]
fn coin_on_only_path_is_counted_once() {
    let outcome = Solver::new(grid_from("3 1\n1 1\n3 1\n2 1 c\n"), Options::default())
        .unwrap()
        .run()
        .unwrap();

    assert!(outcome.is_solved());
    assert_eq!(outcome.coin_n, 1);
}

#[test]
fn coin_in_dead_end_is_counted_and_dropped_from_path() {
    let grid = grid_from("4 2\n2 1\n1 2\n4 1 c\n2 2 b\n3 2 b\n4 2 b\n");
    let coin_total = grid.count(Marker::Coin);
    let outcome = Solver::new(grid, Options::default()).unwrap().run().unwrap();

    assert!(outcome.is_solved());
    assert_eq!(outcome.coin_n, 1);
    assert!(outcome.coin_n <= coin_total);
    assert_eq!(outcome.path.unwrap(), coords(&[(2, 1), (1, 1), (1, 2)]));
}

#[test]
fn stepping_marks_cells_visited() {
    let mut solver = Solver::new(grid_from("3 1\n1 1\n3 1\n2 1 c\n"), Options::default()).unwrap();
    assert_eq!(
        solver.grid().marker_at(&Coordinate::new(1, 1)),
        Some(Marker::Visited)
    );

    assert_eq!(solver.step().unwrap(), SolveState::Running);
    assert_eq!(
        solver.grid().marker_at(&Coordinate::new(2, 1)),
        Some(Marker::Visited)
    );
    assert_eq!(solver.coin_n(), 1);

    solver.step().unwrap();
    assert_eq!(
        solver.grid().marker_at(&Coordinate::new(3, 1)),
        Some(Marker::End)
    );
    assert_eq!(solver.stack().len(), 3);
    assert_eq!(solver.step().unwrap(), SolveState::Solved);
}

#[test]
fn same_maze_gives_same_outcome() {
    let text = "6 5\n1 1\n6 5\n2 1 b\n2 2 b\n4 2 c\n4 3 b\n5 4 c\n3 5 b\n";
    let first = Solver::new(grid_from(text), Options::default())
        .unwrap()
        .run()
        .unwrap();
    let second = Solver::new(grid_from(text), Options::traced())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn search_ends_within_step_bound() {
    let mazes = [
        "30 30\n1 1\n30 30\n\n",
        "30 30\n15 15\n1 30\n\n",
        "7 4\n1 1\n7 4\n1 2 b\n2 2 b\n3 2 b\n4 2 b\n5 2 b\n6 2 b\n7 2 b\n",
        "5 5\n3 3\n5 5\n2 2 c\n4 4 c\n3 4 b\n4 3 b\n",
    ];
    for text in mazes {
        let grid = grid_from(text);
        let cell_n = grid.width() * grid.height();
        let coin_total = grid.count(Marker::Coin);
        let outcome = Solver::new(grid, Options::default()).unwrap().run().unwrap();

        assert_ne!(outcome.state, SolveState::Running);
        assert!(outcome.step_n <= 2 * cell_n);
        assert!(outcome.coin_n <= coin_total);
    }
}

#[test]
fn split_maze_has_no_solution() {
    let text = "7 4\n1 1\n7 4\n1 2 b\n2 2 b\n3 2 b\n4 2 b\n5 2 b\n6 2 b\n7 2 b\n";
    let outcome = Solver::new(grid_from(text), Options::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(outcome.state, SolveState::Exhausted);
}

#[test]
fn path_is_reversed_stack() {
    let mut stack = TraversalStack::new(Options::default());
    for coord in coords(&[(1, 1), (1, 2), (2, 2)]) {
        stack.push(coord);
    }

    let path = solution_path(stack).unwrap();
    assert_eq!(path, coords(&[(1, 1), (1, 2), (2, 2)]));
    assert_eq!(PathDisplay(&path).to_string(), "(1,1) (1,2) (2,2)");
}
