#[cfg(test)]
mod tests {
    use crate::circuit::walk;
    use crate::error::{Malformation, MazeError};
    use crate::location::Location;
    use crate::shape::{Compass, PipeShape, Step};
    use crate::{solve, Cell, ConnectivityGraph, Grid, Maze, ScanState};

    const SQUARE: &str = ".....
.S-7.
.|.|.
.L-J.
.....
";

    const NESTED: &str = "...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    // the nested maze with stray pipes strewn over every ground cell they can't connect from
    const NESTED_DECORATED: &str = "F-7.L-J.|-7
.S-------7.
.|F-----7|.
.||.-7J.||.
.||F.|..||.
.|L-7|F-J|.
.|-J|.|7F|.
JL--J|L--J.
.F7.-.|L...
";

    const WINDING: &str = "..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const WINDING_NOISY: &str = "7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

    const SCATTERED: &str = ".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    const JUNKYARD: &str = "FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

    fn malformation(result: crate::Result<impl std::fmt::Debug>) -> Malformation {
        match result {
            Err(MazeError::MalformedMaze { reason, .. }) => reason,
            other => panic!("expected a malformed maze, got {:?}", other),
        }
    }

    #[test]
    fn parse_round_trip() {
        let grid = Grid::parse(NESTED).unwrap();

        assert_eq!(grid.start(), Location(2, 2));
        assert_eq!((grid.dims().0.get(), grid.dims().1.get()), (11, 9));
        assert_eq!(grid.get(Location(3, 3)), Some(Cell::Pipe(PipeShape::SouthEast)));
        assert_eq!(grid.get(Location(1, 1)), Some(Cell::Ground));
        assert_eq!(format!("{}", grid), NESTED);
    }

    #[test]
    fn short_rows_leave_cells_absent() {
        let grid = Grid::parse("S7\nLJ\n..\n.").unwrap();

        assert_eq!((grid.dims().0.get(), grid.dims().1.get()), (2, 4));
        assert_eq!(grid.get(Location(1, 4)), Some(Cell::Ground));
        assert_eq!(grid.get(Location(2, 4)), None);
        assert_eq!(grid.get(Location(0, 1)), None);
        assert_eq!(grid.get(Location(3, 1)), None);
        assert_eq!(format!("{}", grid), "S7\nLJ\n..\n.\n");
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            Grid::parse("S7\nLX\n").unwrap_err(),
            MazeError::UnknownSymbol { symbol: 'X', location: Location(2, 2) },
        );
    }

    #[test]
    fn start_count() {
        assert_eq!(Grid::parse("...\n.|.\n").unwrap_err(), MazeError::MissingStart);
        assert_eq!(Grid::parse("").unwrap_err(), MazeError::MissingStart);
        assert_eq!(
            Grid::parse("S-S\n...\nS..\n").unwrap_err(),
            MazeError::MultipleStarts { first: Location(1, 1), second: Location(3, 1) },
        );
    }

    #[test]
    fn connections_need_both_sides() {
        // the start claims every side but only the pipes east and south open back toward it
        let maze = Maze::parse(SQUARE).unwrap();
        let graph = maze.graph();

        assert_eq!(graph.degree(Location(2, 2)), 2);
        assert!(graph.connected(Location(2, 2), Location(3, 2)));
        assert!(graph.connected(Location(2, 3), Location(2, 2)));
        assert!(!graph.connected(Location(2, 2), Location(1, 2)));
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.degree(Location(1, 1)), 0);

        // the 7 at top right opens east, off the grid, and south, toward a pipe opening east
        let graph = ConnectivityGraph::build(&Grid::parse("S-7\n|.-\nL-J\n").unwrap());
        assert_eq!(graph.degree(Location(3, 1)), 1);
        assert_eq!(graph.degree(Location(3, 2)), 0);
        assert_eq!(graph.neighbors(Location(3, 1)), vec![Location(2, 1)]);
    }

    #[test]
    fn claims_must_be_returned() {
        for direction in [Compass::North, Compass::South, Compass::East, Compass::West] {
            assert_ne!(direction.invert(), direction);
            assert_eq!(direction.invert().invert(), direction);
            let here = Location(5, 5);
            assert_eq!(direction.invert().attempt_from(direction.attempt_from(here)), here);
        }

        // the - points east at a |, and the | points north at a J; neither is answered
        let graph = ConnectivityGraph::build(&Grid::parse("F7\nSJ\n-|\n").unwrap());
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(Location(1, 3)), 0);
        assert_eq!(graph.degree(Location(2, 3)), 0);
        assert_eq!(graph.degree(Location(1, 2)), 2);
    }

    #[test]
    fn farthest_point() {
        assert_eq!(solve(SQUARE).unwrap().farthest_distance, 4);
        assert_eq!(solve(WINDING).unwrap().farthest_distance, 8);
        assert_eq!(solve(WINDING_NOISY).unwrap().farthest_distance, 8);
        assert_eq!(solve(SCATTERED).unwrap().farthest_distance, 70);
        assert_eq!(solve(JUNKYARD).unwrap().farthest_distance, 80);
    }

    #[test]
    fn farthest_point_agrees_with_search() {
        for text in [SQUARE, NESTED, WINDING, WINDING_NOISY, SCATTERED, JUNKYARD] {
            let circuit = solve(text).unwrap().circuit;
            assert_eq!(circuit.farthest_distance(), circuit.farthest_distance_bfs());
        }
    }

    #[test]
    fn walks_mirror_each_other() {
        for text in [SQUARE, NESTED, WINDING_NOISY, JUNKYARD] {
            let maze = Maze::parse(text).unwrap();
            let start = maze.grid().start();
            let neighbors = maze.graph().neighbors(start);

            let mut forward = walk(maze.graph(), start, neighbors[0]).unwrap();
            let backward = walk(maze.graph(), start, neighbors[1]).unwrap();
            forward.reverse();
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn circuit_cells() {
        let circuit = solve(SQUARE).unwrap().circuit;

        assert_eq!(circuit.len(), 8);
        assert_eq!(circuit.cells()[0], Location(2, 2));
        assert!(circuit.contains(Location(4, 4)));
        assert!(!circuit.contains(Location(3, 3)));
        assert_eq!(circuit.edges().count(), 8);
        for (a, b) in circuit.edges() {
            assert!(Maze::parse(SQUARE).unwrap().graph().connected(a, b));
        }
    }

    #[test]
    fn start_shapes() {
        for (text, shape) in [
            ("S7\nLJ\n", PipeShape::SouthEast),
            ("F7\nSJ\n", PipeShape::NorthEast),
            ("F7\nLS\n", PipeShape::NorthWest),
            ("FS\nLJ\n", PipeShape::SouthWest),
            ("F7\nS|\nLJ\n", PipeShape::NorthSouth),
            ("FS7\nL-J\n", PipeShape::EastWest),
        ] {
            assert_eq!(solve(text).unwrap().start_shape, shape, "{}", text);
        }

        assert_eq!(PipeShape::from_exits(Compass::West, Compass::South), Some(PipeShape::SouthWest));
        assert_eq!(PipeShape::from_exits(Compass::North, Compass::North), None);
    }

    #[test]
    fn start_without_two_connections() {
        assert_eq!(
            Maze::parse("S-7\n..|\n.-J\n").unwrap().solve().unwrap_err(),
            MazeError::MalformedMaze { reason: Malformation::StartDegree, location: Some(Location(1, 1)) },
        );
        assert_eq!(malformation(solve(".S.\n...\n")), Malformation::StartDegree);
        // three pipes open toward the start
        assert_eq!(
            solve("-S-\n.|.\n").unwrap_err(),
            MazeError::MalformedMaze { reason: Malformation::StartDegree, location: Some(Location(2, 1)) },
        );
    }

    #[test]
    fn dead_end() {
        // the loop is broken at the bottom right
        assert_eq!(malformation(solve("S-7\n|.|\nL-.\n")), Malformation::Branch);
    }

    #[test]
    fn scan_pairs() {
        let here = Location(1, 1);

        // a vertical pipe always crosses
        let mut state = ScanState::default();
        state.visit(here, PipeShape::NorthSouth).unwrap();
        assert!(state.inside);

        // F-J and L-7 cross once
        for (open, close) in [(PipeShape::SouthEast, PipeShape::NorthWest), (PipeShape::NorthEast, PipeShape::SouthWest)] {
            let mut state = ScanState::default();
            state.visit(here, open).unwrap();
            assert!(state.pending.is_some());
            state.visit(here, PipeShape::EastWest).unwrap();
            state.visit(here, close).unwrap();
            assert_eq!(state, ScanState { inside: true, pending: None });
        }

        // F-7 and L-J turn back
        for (open, close) in [(PipeShape::SouthEast, PipeShape::SouthWest), (PipeShape::NorthEast, PipeShape::NorthWest)] {
            let mut state = ScanState { inside: true, pending: None };
            state.visit(here, open).unwrap();
            state.visit(here, close).unwrap();
            assert_eq!(state, ScanState { inside: true, pending: None });
        }
    }

    #[test]
    fn scan_corner_violations() {
        let here = Location(4, 2);

        let mut state = ScanState::default();
        state.visit(here, PipeShape::SouthEast).unwrap();
        assert_eq!(
            state.visit(here, PipeShape::NorthEast),
            Err(MazeError::malformed(Malformation::UnexpectedCorner, here)),
        );

        let mut state = ScanState::default();
        assert_eq!(
            state.visit(here, PipeShape::SouthWest),
            Err(MazeError::malformed(Malformation::UnopenedCorner, here)),
        );
    }

    #[test]
    fn scan_row_closure() {
        let here = Location(9, 3);

        assert_eq!(ScanState::default().finish(here), Ok(()));
        assert_eq!(
            ScanState { inside: true, pending: None }.finish(here),
            Err(MazeError::malformed(Malformation::RowEndsInside, here)),
        );
        assert_eq!(
            ScanState { inside: false, pending: Some(Compass::North) }.finish(here),
            Err(MazeError::malformed(Malformation::RowEndsInCorner, here)),
        );
    }

    #[test]
    fn interior() {
        assert_eq!(solve(SQUARE).unwrap().interior_count, 1);
        assert_eq!(solve(NESTED).unwrap().interior_count, 4);
        assert_eq!(solve(WINDING).unwrap().interior_count, 1);
        assert_eq!(solve(SCATTERED).unwrap().interior_count, 8);
        assert_eq!(solve(JUNKYARD).unwrap().interior_count, 10);
    }

    #[test]
    fn interior_cells() {
        let solution = solve(NESTED).unwrap();

        let mut cells = solution.interior.iter().copied().collect::<Vec<_>>();
        cells.sort_by_key(|location| (location.1, location.0));
        assert_eq!(cells, vec![Location(3, 7), Location(4, 7), Location(8, 7), Location(9, 7)]);
    }

    #[test]
    fn stray_pipes_are_scenery() {
        let plain = solve(NESTED).unwrap();
        let decorated = solve(NESTED_DECORATED).unwrap();

        assert_eq!(decorated.farthest_distance, plain.farthest_distance);
        assert_eq!(decorated.interior_count, plain.interior_count);
        assert_eq!(decorated.interior, plain.interior);
    }

    #[test]
    fn render() {
        let maze = Maze::parse(NESTED_DECORATED).unwrap();
        let solution = maze.solve().unwrap();

        assert_eq!(solution.render(maze.grid()), "OOOOOOOOOOO
OF-------7O
O|F-----7|O
O||OOOOO||O
O||OOOOO||O
O|L-7OF-J|O
O|II|O|II|O
OL--JOL--JO
OOOOOOOOOOO
");

        let maze = Maze::parse(JUNKYARD).unwrap();
        let solution = maze.solve().unwrap();

        assert_eq!(solution.start_shape, PipeShape::SouthWest);
        assert_eq!(solution.render(maze.grid()), "OF7F7F7F7F7F7F7F---7
O|LJ||||||||||||F--J
OL-7LJLJ||||||LJL-7O
F--JF--7||LJLJIF7FJO
L---JF-JLJIIIIFJLJOO
OOOF-JF---7IIIL7OOOO
OOFJF7L7F-JF7IIL---7
OOL-JL7||F7|L7F-7F7|
OOOOOFJ|||||FJL7||LJ
OOOOOL-JLJLJL--JLJOO
");
    }

    #[cfg(all(feature = "wasm", target_pointer_width = "64"))]
    #[test]
    fn oversized_answers_are_refused() {
        let mut solution = solve(SQUARE).unwrap();
        assert_eq!(crate::wasm::answers(&solution), Ok(vec![4, 1]));

        solution.interior_count = u32::MAX as usize + 1;
        assert!(crate::wasm::answers(&solution).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            MazeError::malformed(Malformation::Branch, Location(3, 2)).to_string(),
            "malformed maze at (3, 2): branch encountered",
        );
        assert_eq!(
            MazeError::MalformedMaze { reason: Malformation::NotSimple, location: None }.to_string(),
            "malformed maze: loop is not simple/unique",
        );
        assert_eq!(
            MazeError::UnknownSymbol { symbol: '#', location: Location(1, 2) }.to_string(),
            "unknown symbol '#' at (1, 2)",
        );
    }
}
