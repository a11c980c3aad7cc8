use std::collections::BTreeSet;

use mineclicker_core::*;

fn explicit(size: Coord2, mines: &[Coord2]) -> Game {
    Game::new(size, MinePlacement::Explicit(mines.to_vec())).unwrap()
}

fn all_cells(game: &Game) -> Vec<(Coord2, Cell)> {
    game.board().iter_cells().collect()
}

#[test]
fn random_boards_have_configured_mine_count() {
    for (rows, cols, count) in [(8, 8, 10), (16, 16, 40), (16, 30, 99), (1, 1, 0), (5, 5, 25)] {
        let game = new_game(rows, cols, MinePlacement::Random { count, seed: 3 }).unwrap();
        let mines = all_cells(&game).iter().filter(|(_, cell)| cell.is_mine).count();
        assert_eq!(mines, usize::from(count));
    }
}

#[test]
fn adjacency_matches_neighbor_mines() {
    let game = new_game(12, 9, MinePlacement::Random { count: 30, seed: 11 }).unwrap();

    for (coords, cell) in all_cells(&game) {
        if cell.is_mine {
            continue;
        }
        let expected = game
            .neighbors_of(coords)
            .unwrap()
            .into_iter()
            .filter(|&pos| game.cell_at(pos).unwrap().is_mine)
            .count();
        assert_eq!(usize::from(cell.adjacent_mine_count), expected, "{coords:?}");
    }
}

#[test]
fn corner_mine_on_three_by_three() {
    let game = explicit((3, 3), &[(0, 0)]);

    for (coords, cell) in all_cells(&game).into_iter().filter(|(_, cell)| !cell.is_mine) {
        let expected = u8::from(matches!(coords, (0, 1) | (1, 0) | (1, 1)));
        assert_eq!(cell.adjacent_mine_count, expected, "{coords:?}");
    }
}

#[test]
fn empty_three_by_three_opens_in_one_call() {
    let mut game = explicit((3, 3), &[]);

    let revealed = game.reveal((0, 0)).unwrap();

    assert_eq!(revealed.len(), 9);
    assert!(all_cells(&game).iter().all(|(_, cell)| cell.is_revealed));
    assert_eq!(game.check_game_state(), GameState::Won);
}

#[test]
fn mine_reveal_loses_and_stays_lost() {
    let mut game = explicit((4, 4), &[(2, 1), (3, 3)]);

    assert_eq!(game.reveal((2, 1)).unwrap(), BTreeSet::from([(2, 1)]));
    assert_eq!(game.check_game_state(), GameState::Lost);

    assert!(game.reveal((2, 1)).unwrap().is_empty());
    assert_eq!(game.check_game_state(), GameState::Lost);
}

#[test]
fn won_exactly_when_all_safe_cells_revealed() {
    let mines = [(1, 6), (3, 1), (5, 1)];
    let mut game = explicit((8, 8), &mines);
    let total = game.board().total_cells();
    let safe: Vec<_> = all_cells(&game)
        .into_iter()
        .filter(|(_, cell)| !cell.is_mine)
        .map(|(coords, _)| coords)
        .collect();

    for coords in safe.into_iter().rev() {
        game.reveal(coords).unwrap();
        let revealed = game.revealed_count();
        let state = game.check_game_state();
        if revealed == total - game.total_mines() {
            assert_eq!(state, GameState::Won);
            break;
        }
        assert_eq!(state, GameState::Ongoing);
    }
    assert_eq!(game.check_game_state(), GameState::Won);
}

#[test]
fn sweeping_around_mines_matches_known_counts() {
    let mines = [(1, 6), (3, 1), (5, 1)];
    let mut game = explicit((8, 8), &mines);

    let circle = [(0, 5), (0, 6), (0, 7), (1, 7), (2, 7), (2, 6), (2, 5), (1, 5)];
    for coords in circle {
        game.reveal(coords).unwrap();
        assert_eq!(game.cell_at(coords).unwrap().adjacent_mine_count, 1);
    }
    game.reveal((4, 1)).unwrap();
    assert_eq!(game.cell_at((4, 1)).unwrap().adjacent_mine_count, 2);
    assert_eq!(game.check_game_state(), GameState::Ongoing);

    game.reveal((1, 6)).unwrap();
    assert_eq!(game.check_game_state(), GameState::Lost);
}

#[test]
fn reveal_only_touches_revealed_bit() {
    let mut game = explicit((10, 10), &[(0, 0), (2, 7), (5, 5), (9, 9)]);
    game.flag((4, 4)).unwrap();
    let before = all_cells(&game);

    assert!(game.reveal((9, 0)).unwrap().len() > 1);

    for ((coords, old), (_, new)) in before.into_iter().zip(all_cells(&game)) {
        assert_eq!(old.is_mine, new.is_mine, "{coords:?}");
        assert_eq!(old.adjacent_mine_count, new.adjacent_mine_count, "{coords:?}");
        assert_eq!(old.is_flagged, new.is_flagged, "{coords:?}");
    }
}

#[test]
fn second_reveal_is_idempotent() {
    let mut game = explicit((3, 3), &[(0, 0)]);

    assert_eq!(game.reveal((1, 1)).unwrap(), BTreeSet::from([(1, 1)]));
    let snapshot = game.clone();
    assert!(game.reveal((1, 1)).unwrap().is_empty());
    assert_eq!(game, snapshot);

    // a cascaded cell is just as inert
    assert_eq!(game.reveal((2, 2)).unwrap().len(), 7);
    let snapshot = game.clone();
    assert!(game.reveal((2, 0)).unwrap().is_empty());
    assert_eq!(game, snapshot);
}

#[test]
fn out_of_bounds_never_mutates() {
    let mut game = explicit((3, 4), &[(1, 1)]);
    let snapshot = game.clone();

    let outside: [Coord2; 3] = [(3, 0), (0, 4), (255, 255)];
    for coords in outside {
        let expected = GameError::OutOfBounds(coords.0.into(), coords.1.into());
        assert_eq!(game.reveal(coords), Err(expected));
        assert_eq!(game.flag(coords), Err(expected));
        assert_eq!(game.unflag(coords), Err(expected));
        assert_eq!(game.cell_at(coords), Err(expected));
    }
    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 4)] {
        assert_eq!(game.locate(row, col), Err(GameError::OutOfBounds(row, col)));
    }
    assert_eq!(game, snapshot);
}

#[test]
fn large_zero_region_does_not_overflow_the_stack() {
    let mut game = explicit((255, 255), &[(254, 254)]);

    let revealed = game.reveal((0, 0)).unwrap();

    assert_eq!(revealed.len(), 255 * 255 - 1);
    assert_eq!(game.check_game_state(), GameState::Won);
}

#[test]
fn snapshot_serializes() {
    let mut game = explicit((2, 2), &[(1, 1)]);
    game.reveal((0, 0)).unwrap();
    game.flag((1, 1)).unwrap();

    let json = serde_json::to_value(game.view()).unwrap();
    let cells = json["data"].as_array().unwrap();

    assert_eq!(cells[0], serde_json::json!({ "Revealed": 1 }));
    assert_eq!(cells[1], serde_json::json!("Hidden"));
    assert_eq!(cells[3], serde_json::json!("Flagged"));
}

#[test]
fn game_serializes_board_and_mines() {
    let mut game = explicit((2, 2), &[(1, 1)]);
    game.reveal((0, 0)).unwrap();

    let json = serde_json::to_value(&game).unwrap();

    assert_eq!(json["board"]["mines"], serde_json::json!([[1, 1]]));
    assert_eq!(json["board"]["cells"]["dim"], serde_json::json!([2, 2]));
    assert_eq!(json["board"]["cells"]["data"][0]["is_revealed"], serde_json::json!(true));
}
