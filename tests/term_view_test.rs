use match3::core::{Board, Swap};
use match3::term::{BoardView, PlayState, Viewport};
use match3::types::{Gem, Position};

fn small_board() -> Board<Gem> {
    Board::from_rows(vec![
        vec![Gem::Ruby, Gem::Emerald, Gem::Sapphire],
        vec![Gem::Topaz, Gem::Amethyst, Gem::Pearl],
    ])
    .unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let board = small_board();
    let view = BoardView::default();

    // 3 cells * 3 columns + border => 11 wide, 2 rows + border => 4 high.
    assert_eq!(view.frame_size(&board), (11, 4));
    let fb = view.render(&board, &PlayState::default(), Viewport::new(11, 5));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(10, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 3).unwrap().ch, '└');
    assert_eq!(fb.get(10, 3).unwrap().ch, '┘');
}

#[test]
fn term_view_marks_cursor_and_empty_cells() {
    let mut board = small_board();
    board.clear(Position::new(1, 2));
    let view = BoardView::default();
    let play = PlayState {
        cursor: Position::new(0, 1),
        ..PlayState::default()
    };

    let fb = view.render(&board, &play, Viewport::new(11, 5));

    assert_eq!(fb.row_text(1), "│ ◆ [◆] ◆ │");
    assert_eq!(fb.row_text(2), "│ ◆  ◆  · │");
}

#[test]
fn term_view_selection_overrides_cursor_marker() {
    let board = small_board();
    let view = BoardView::default();
    let play = PlayState {
        cursor: Position::new(0, 0),
        selected: Some(Position::new(0, 0)),
        hint: Some(Swap::new(Position::new(1, 0), Position::new(1, 1))),
        ..PlayState::default()
    };

    let fb = view.render(&board, &play, Viewport::new(11, 5));

    assert_eq!(fb.get(1, 1).unwrap().ch, '<');
    assert_eq!(fb.get(3, 1).unwrap().ch, '>');
    // Hinted cells get their own background.
    assert_ne!(fb.get(2, 2).unwrap().style.bg, fb.get(8, 2).unwrap().style.bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let board = small_board();
    let view = BoardView::default();
    let play = PlayState {
        moves: 42,
        last_chain: 3,
        status: "2 matched",
        ..PlayState::default()
    };

    let fb = view.render(&board, &play, Viewport::new(40, 14));
    let all: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    let all = all.join("\n");

    assert!(all.contains("MOVES"));
    assert!(all.contains("42"));
    assert!(all.contains("CHAIN"));
    assert!(all.contains("2 matched"));
}
