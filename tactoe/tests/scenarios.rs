use tactoe::{GameHistory, GameStatus, Mark, MoveRejected, Snapshot};

fn snap(s: &str) -> Snapshot {
    s.parse().unwrap()
}

fn play_all(game: &mut GameHistory, moves: &[usize]) {
    for &m in moves {
        game.play_index(m).unwrap();
    }
}

#[test]
fn first_move_goes_to_x() {
    let mut game = GameHistory::new();
    game.play_index(0).unwrap();
    assert_eq!(*game.current_snapshot(), snap("X__ ___ ___"));
    assert_eq!(game.status(), GameStatus::NextToMove(Mark::O));
}

#[test]
fn winning_column_ends_the_game() {
    let mut game = GameHistory::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);
    assert_eq!(*game.current_snapshot(), snap("XO_ XO_ X__"));
    assert_eq!(game.status(), GameStatus::Winner(Mark::X));

    let before = game.clone();
    assert_eq!(
        game.play_index(2),
        Err(MoveRejected::GameDecided { winner: Mark::X })
    );
    assert_eq!(game, before);
}

#[test]
fn rewinding_a_won_game_reopens_it() {
    let mut game = GameHistory::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    game.jump_to(2).unwrap();
    assert_eq!(*game.current_snapshot(), snap("XO_ ___ ___"));
    assert_eq!(game.status(), GameStatus::NextToMove(Mark::X));
    assert_eq!(game.len(), 6);

    game.play_index(6).unwrap();
    assert_eq!(game.len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(*game.current_snapshot(), snap("XO_ ___ X__"));
    assert_eq!(game.status(), GameStatus::NextToMove(Mark::O));
}

#[test]
fn full_board_without_line_still_names_next_player() {
    let mut game = GameHistory::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(*game.current_snapshot(), snap("XOX XOO OXX"));
    assert!(matches!(game.status(), GameStatus::NextToMove(_)));
    assert_eq!(game.status().winner(), None);
}

#[test]
fn length_tracks_successful_plays() {
    let mut game = GameHistory::new();
    let moves = [4, 0, 8, 2, 1, 7];
    for (n, &m) in moves.iter().enumerate() {
        assert_eq!(game.len(), n + 1);
        game.play_index(m).unwrap();
        // a repeated click never grows the history
        assert!(game.play_index(m).is_err());
    }
    assert_eq!(game.len(), moves.len() + 1);
}

#[test]
fn play_after_any_jump_leaves_k_plus_two_entries() {
    let moves = [0, 4, 8, 2, 6, 3];
    for k in 0..moves.len() {
        let mut game = GameHistory::new();
        play_all(&mut game, &moves);
        let prefix = game.snapshots()[..=k].to_vec();
        game.jump_to(k).unwrap();
        let free = game.current_snapshot().empty_squares().next().unwrap();
        game.play(free).unwrap();
        assert_eq!(game.len(), k + 2);
        assert_eq!(&game.snapshots()[..=k], prefix.as_slice());
    }
}

#[test]
fn turn_alternates_with_position() {
    let mut game = GameHistory::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7]);
    for i in 0..game.len() {
        game.jump_to(i).unwrap();
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.next_mark(), expected);
    }
}
