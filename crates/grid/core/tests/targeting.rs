use std::cell::RefCell;
use std::rc::Rc;

use grid_core::{
    Area, AreaFilter, AreaPickData, Board, Characteristic, Coordinate, DenseGrid, Grid, Piece,
    PieceHandle, PieceType, PointerEvent, SparseGrid, TileState, query_coordinates,
    resolve_absolute,
};

fn unit(handle: u32) -> Piece {
    Piece::new(PieceHandle(handle), "soldier")
        .with_characteristic(Characteristic::Unit { movement: 3 })
        .unwrap()
}

fn crate_piece(handle: u32) -> Piece {
    Piece::new(PieceHandle(handle), "crate")
        .with_characteristic(Characteristic::Destructible { durability: 2 })
        .unwrap()
}

fn all_generic<G: Grid>(grid: &G) -> bool {
    grid.dimensions()
        .coordinates()
        .all(|c| grid.tile(c).is_some_and(|t| t.state() == TileState::GENERIC))
}

#[test]
fn resolve_absolute_is_translation_equivariant() {
    let shapes = [
        Area::square(2, 1),
        Area::cone(3, Coordinate::new(1, 1), 0),
        Area::plus_sign(3, 2, 0),
        Area::circle(4, 0),
    ];
    let origin = Coordinate::new(3, -2);
    let shift = Coordinate::new(-7, 5);

    for area in &shapes {
        let mut shifted: Vec<_> = resolve_absolute(origin, area)
            .into_iter()
            .map(|c| c + shift)
            .collect();
        let mut moved = resolve_absolute(origin + shift, area);
        shifted.sort();
        moved.sort();
        assert_eq!(shifted, moved);
    }
}

#[test]
fn resolve_absolute_keeps_out_of_grid_coordinates() {
    let resolved = resolve_absolute(Coordinate::ORIGIN, &Area::diamond(1, 0));
    assert!(resolved.contains(&Coordinate::new(-1, 0)));
    assert!(resolved.contains(&Coordinate::new(0, -1)));
}

#[test]
fn query_tiles_stays_inside_grid() {
    let grid = DenseGrid::with_size(6, 4);
    let area = Area::square(3, 0);
    for origin in [
        Coordinate::ORIGIN,
        Coordinate::new(5, 3),
        Coordinate::new(-2, 7),
        Coordinate::new(9, 9),
    ] {
        for coordinate in query_coordinates(&grid, origin, &area, AreaFilter::ANY) {
            assert!(coordinate.x >= 0 && coordinate.x < 6, "{coordinate}");
            assert!(coordinate.y >= 0 && coordinate.y < 4, "{coordinate}");
        }
    }
}

#[test]
fn filter_zero_and_negative_match_every_tile() {
    let mut grid = DenseGrid::with_size(3, 3);
    grid.place_piece(Coordinate::new(1, 1), unit(1)).unwrap();
    let area = Area::square(1, 0);
    let center = Coordinate::new(1, 1);

    for filter in [AreaFilter(0), AreaFilter(-1), AreaFilter::ANY] {
        assert_eq!(query_coordinates(&grid, center, &area, filter).len(), 9);
    }
    assert_eq!(
        query_coordinates(&grid, center, &area, AreaFilter::from(PieceType::UNIT)),
        vec![center]
    );
    assert!(
        query_coordinates(&grid, center, &area, AreaFilter::from(PieceType::DESTRUCTIBLE))
            .is_empty()
    );
}

#[test]
fn committed_pick_matches_query_and_restores_other_tiles() {
    let mut grid = DenseGrid::with_size(6, 6);
    grid.place_piece(Coordinate::new(2, 2), unit(1)).unwrap();
    grid.place_piece(Coordinate::new(3, 2), crate_piece(2)).unwrap();
    grid.place_piece(Coordinate::new(4, 4), unit(3)).unwrap();

    let pick_area = Area::square(1, 0);
    let filter = AreaFilter::from(PieceType::ENTITY | PieceType::DESTRUCTIBLE);
    let expected = query_coordinates(&grid, Coordinate::new(2, 3), &pick_area, filter);

    let mut board = Board::new(grid);
    let data = AreaPickData::new(pick_area).with_filter(filter);
    board.begin_pick_session(data, |_| {}).unwrap();

    board.enter(Coordinate::new(2, 3));
    let event = board.click(Coordinate::new(2, 3)).expect("qualifying click commits");
    assert_eq!(event.origin, Coordinate::new(2, 3));
    assert_eq!(event.tiles, expected);
    assert!(!board.is_selecting());

    for coordinate in board.grid().dimensions().coordinates() {
        let state = board.grid().tile(coordinate).unwrap().state();
        if expected.contains(&coordinate) {
            assert!(state.contains(TileState::VALID), "{coordinate}");
        } else {
            assert_eq!(state, TileState::GENERIC, "{coordinate}");
        }
    }
}

#[test]
fn click_without_matching_tiles_keeps_listening() {
    let mut grid = DenseGrid::with_size(5, 5);
    grid.place_piece(Coordinate::new(4, 4), unit(1)).unwrap();
    let mut board = Board::new(grid);

    let data = AreaPickData::new(Area::point()).with_filter(AreaFilter::from(PieceType::UNIT));
    board.begin_pick_session(data, |_| {}).unwrap();

    assert!(board.click(Coordinate::ORIGIN).is_none());
    assert!(board.is_selecting());

    let event = board.click(Coordinate::new(4, 4)).unwrap();
    assert_eq!(event.tiles, vec![Coordinate::new(4, 4)]);
}

#[test]
fn clicks_outside_origin_area_are_ignored() {
    let mut board = Board::new(DenseGrid::with_size(7, 7));
    let data = AreaPickData::new(Area::point())
        .with_origin(Area::diamond(1, 0), Coordinate::new(3, 3));
    board.begin_pick_session(data, |_| {}).unwrap();

    assert_eq!(
        board.grid().tile(Coordinate::new(4, 3)).unwrap().state(),
        TileState::SELECTABLE
    );
    assert!(board.click(Coordinate::new(5, 5)).is_none());

    let event = board.click(Coordinate::new(4, 3)).unwrap();
    assert_eq!(event.area_origin, Coordinate::new(3, 3));
}

#[test]
fn stop_selecting_is_idempotent() {
    let mut grid = DenseGrid::with_size(4, 4);
    grid.place_piece(Coordinate::new(1, 1), unit(1)).unwrap();
    let mut board = Board::new(grid);

    board
        .begin_pick_session(AreaPickData::new(Area::square(1, 0)), |_| {})
        .unwrap();
    board.enter(Coordinate::new(2, 2));

    board.stop_selecting();
    let once = board.grid().clone();
    board.stop_selecting();
    assert_eq!(board.grid(), &once);
    assert!(all_generic(board.grid()));
    assert!(!board.is_selecting());

    board
        .begin_pick_session(AreaPickData::new(Area::point()), |_| {})
        .expect("a stopped board accepts a new session");
}

#[test]
fn cancelled_session_never_fires_callback() {
    let fired = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&fired);
    let mut board = Board::new(DenseGrid::with_size(3, 3));
    board
        .begin_pick_session(
            AreaPickData::new(Area::point()),
            move |_| *counter.borrow_mut() += 1,
        )
        .unwrap();

    board.stop_selecting();
    assert!(board.click(Coordinate::ORIGIN).is_none());
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn pieces_then_tile_then_grid() {
    let mut grid = DenseGrid::with_size(3, 3);
    grid.place_piece(Coordinate::new(1, 1), unit(7)).unwrap();
    let mut board = Board::new(grid);

    let log = Rc::new(RefCell::new(Vec::new()));
    let piece_log = Rc::clone(&log);
    board.on_piece(PieceHandle(7), move |event, piece, tile| {
        piece_log.borrow_mut().push(format!(
            "piece {event} {} valid={}",
            piece.handle(),
            tile.state().contains(TileState::VALID)
        ));
    });
    let grid_log = Rc::clone(&log);
    board.on_pointer(move |event, coordinate, tile| {
        grid_log.borrow_mut().push(format!(
            "grid {event} {coordinate} valid={}",
            tile.state().contains(TileState::VALID)
        ));
    });
    let pick_log = Rc::clone(&log);
    board
        .begin_pick_session(
            AreaPickData::new(Area::point()),
            move |event: &grid_core::PickEvent| {
                pick_log.borrow_mut().push(format!("pick {}", event.origin))
            },
        )
        .unwrap();

    board.enter(Coordinate::new(1, 1));
    board.click(Coordinate::new(1, 1));

    assert_eq!(
        *log.borrow(),
        vec![
            "piece enter #7 valid=false".to_string(),
            "grid enter (1,1) valid=true".to_string(),
            "piece click #7 valid=true".to_string(),
            "pick (1,1)".to_string(),
            "grid click (1,1) valid=true".to_string(),
        ]
    );
}

#[test]
fn dense_and_sparse_boards_agree() {
    fn run<G: Grid>(grid: G) -> Vec<(Coordinate, TileState)> {
        let mut board = Board::new(grid);
        board.grid_mut().place_piece(Coordinate::new(2, 2), unit(1)).unwrap();
        board
            .begin_pick_session(
                AreaPickData::new(Area::cone(2, Coordinate::new(1, 0), 0)),
                |_| {},
            )
            .unwrap();
        board.pointer(PointerEvent::Enter, Coordinate::new(1, 2));
        board
            .grid()
            .dimensions()
            .coordinates()
            .map(|c| (c, board.grid().tile(c).unwrap().state()))
            .collect()
    }

    assert_eq!(
        run(DenseGrid::with_size(5, 5)),
        run(SparseGrid::with_size(5, 5))
    );
}

#[test]
fn warp_moves_piece_listeners_with_it() {
    let mut grid = DenseGrid::with_size(4, 4);
    grid.place_piece(Coordinate::ORIGIN, unit(5)).unwrap();
    let mut board = Board::new(grid);

    let hits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hits);
    board.on_piece(PieceHandle(5), move |_, piece, _| sink.borrow_mut().push(piece.coordinate()));

    board.grid_mut().warp_piece(PieceHandle(5), Coordinate::new(3, 3)).unwrap();
    board.click(Coordinate::ORIGIN);
    board.click(Coordinate::new(3, 3));
    assert_eq!(*hits.borrow(), vec![Coordinate::new(3, 3)]);
}
