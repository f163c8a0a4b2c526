//! Move generator properties checked over a corpus of reachable positions.

use jiang_core::{
    Board, Game, PieceKind, Player, Ruleset, Square, generate_legal_moves, generate_moves,
    is_illegal_facing_generals,
};

const FIXED: &[&str] = &[
    "4k4/9/9/9/9/9/9/9/9/4K4",
    "3ak4/4a4/4b4/9/2P1c4/4R4/9/4B4/4A4/3AK4 w",
    "r1bak4/4a4/2n1b1n2/p1p1C3p/9/6p2/P1P1P3P/2N1B4/4A4/R1BAK4 b",
    "2bak4/4a4/4b4/p7p/4c4/2P1C4/P3p3P/4B4/4A4/2BAK4 w",
    "5k3/4P4/3a5/9/9/9/9/9/9/4K4 b",
];

/// Deterministic pseudo-random walks from the start plus a few set pieces.
fn corpus() -> Vec<(Board, Player)> {
    let mut positions = Vec::new();

    for fen in FIXED {
        let game: Game = fen.parse().unwrap_or_else(|e| panic!("{fen}: {e}"));
        positions.push((*game.board(), game.side_to_move()));
    }

    for seed in 1u64..=8 {
        let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut game = Game::new(Ruleset::Basic);
        positions.push((*game.board(), game.side_to_move()));
        for _ in 0..40 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[(state >> 33) as usize % moves.len()];
            game.play(mv).unwrap();
            if game.outcome().is_some() {
                break;
            }
            positions.push((*game.board(), game.side_to_move()));
        }
    }

    positions
}

fn each_piece(mut check: impl FnMut(&Board, Square, jiang_core::Piece)) {
    for (board, _) in corpus() {
        for (sq, piece) in board.pieces() {
            check(&board, sq, piece);
        }
    }
}

#[test]
fn destinations_stay_on_board() {
    each_piece(|board, sq, _| {
        for dst in generate_moves(board, sq) {
            assert!(dst.col() <= 8 && dst.row() <= 9, "{sq} -> {dst:?}");
        }
    });
}

#[test]
fn no_self_capture() {
    each_piece(|board, sq, piece| {
        for dst in generate_moves(board, sq) {
            let target = board.piece_on(dst);
            assert!(
                target.is_none_or(|t| t.player() != piece.player()),
                "{piece:?} on {sq} captures own {target:?} on {dst}"
            );
        }
    });
}

#[test]
fn generals_and_advisors_stay_in_palace() {
    each_piece(|board, sq, piece| {
        if !matches!(piece.kind(), PieceKind::General | PieceKind::Advisor) {
            return;
        }
        let rows = match piece.player() {
            Player::Red => 7..=9,
            Player::Black => 0..=2,
        };
        for dst in generate_moves(board, sq) {
            assert!((3..=5).contains(&dst.col()), "{piece:?} {sq} -> {dst}");
            assert!(rows.contains(&dst.row()), "{piece:?} {sq} -> {dst}");
        }
    });
}

#[test]
fn elephants_never_cross_the_river() {
    each_piece(|board, sq, piece| {
        if piece.kind() != PieceKind::Elephant {
            return;
        }
        for dst in generate_moves(board, sq) {
            match piece.player() {
                Player::Red => assert!(dst.row() >= 5, "{sq} -> {dst}"),
                Player::Black => assert!(dst.row() <= 4, "{sq} -> {dst}"),
            }
        }
    });
}

#[test]
fn soldiers_move_sideways_only_after_crossing() {
    each_piece(|board, sq, piece| {
        if piece.kind() != PieceKind::Soldier {
            return;
        }
        let crossed = match piece.player() {
            Player::Red => sq.row() <= 4,
            Player::Black => sq.row() >= 5,
        };
        for dst in generate_moves(board, sq) {
            if dst.row() == sq.row() {
                assert!(crossed, "{piece:?} on {sq} moved sideways to {dst}");
                assert_eq!(dst.col().abs_diff(sq.col()), 1);
            } else {
                assert_eq!(dst.col(), sq.col());
                match piece.player() {
                    Player::Red => assert_eq!(dst.row() + 1, sq.row()),
                    Player::Black => assert_eq!(dst.row(), sq.row() + 1),
                }
            }
        }
    });
}

#[test]
fn hobbled_horse_jumps_are_excluded() {
    const JUMPS: [(i8, i8); 8] = [(1, 2), (-1, 2), (1, -2), (-1, -2), (2, 1), (2, -1), (-2, 1), (-2, -1)];

    each_piece(|board, sq, piece| {
        if piece.kind() != PieceKind::Horse {
            return;
        }
        let moves = generate_moves(board, sq);
        for (dc, dr) in JUMPS {
            let Some(dst) = sq.offset(dc, dr) else {
                continue;
            };
            let leg = if dc.abs() == 2 { sq.offset(dc / 2, 0) } else { sq.offset(0, dr / 2) };
            let Some(leg) = leg else {
                continue;
            };
            if board.is_occupied(leg) {
                assert!(!moves.contains(dst), "horse on {sq} jumped over {leg} to {dst}");
            }
        }
    });
}

#[test]
fn cannons_slide_to_the_screen_and_capture_past_it() {
    each_piece(|board, sq, piece| {
        if piece.kind() != PieceKind::Cannon {
            return;
        }
        let moves = generate_moves(board, sq);
        for (dc, dr) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let mut screen = false;
            let mut cur = sq;
            while let Some(next) = cur.offset(dc, dr) {
                cur = next;
                match board.piece_on(cur) {
                    None if !screen => assert!(moves.contains(cur), "{sq} should slide to {cur}"),
                    None => assert!(!moves.contains(cur), "{sq} slid past the screen to {cur}"),
                    Some(_) if !screen => {
                        assert!(!moves.contains(cur), "{sq} captured the screen on {cur}");
                        screen = true;
                    }
                    Some(target) => {
                        assert_eq!(moves.contains(cur), target.player() != piece.player());
                        break;
                    }
                }
            }
        }
    });
}

#[test]
fn move_queries_are_idempotent() {
    each_piece(|board, sq, _| {
        let before = *board;
        assert_eq!(generate_moves(board, sq), generate_moves(board, sq));
        assert_eq!(*board, before);
    });
}

#[test]
fn facing_generals_matches_definition() {
    for (board, _) in corpus() {
        let red = board.general_square(Player::Red);
        let black = board.general_square(Player::Black);
        let expected = match (red, black) {
            (Some(r), Some(b)) if r.col() == b.col() => (b.row() + 1..r.row())
                .all(|row| !board.is_occupied(Square::new(r.col(), row).unwrap())),
            _ => false,
        };
        assert_eq!(is_illegal_facing_generals(&board), expected, "{board:?}");
    }
}

#[test]
fn legal_moves_never_face_the_generals() {
    for (board, player) in corpus() {
        for &mv in &generate_legal_moves(&board, player, Ruleset::Basic) {
            assert!(!is_illegal_facing_generals(&board.make_move(mv)), "{board:?} {mv}");
        }
    }
}

#[test]
fn standard_moves_are_a_subset_of_basic() {
    for (board, player) in corpus() {
        let basic = generate_legal_moves(&board, player, Ruleset::Basic);
        let standard = generate_legal_moves(&board, player, Ruleset::Standard);
        assert!(standard.len() <= basic.len());
        for &mv in &standard {
            assert!(basic.contains(mv), "{board:?} {mv}");
        }
    }
}

#[test]
fn make_move_leaves_original_untouched() {
    for (board, player) in corpus() {
        let snapshot = board;
        for &mv in &generate_legal_moves(&board, player, Ruleset::Basic) {
            let after = board.make_move(mv);
            assert_eq!(after.piece_on(mv.dest()), board.piece_on(mv.source()));
            assert_eq!(after.piece_on(mv.source()), None);
            let lost = usize::from(board.captured_by(mv).is_some());
            assert_eq!(after.pieces().count() + lost, board.pieces().count());
        }
        assert_eq!(board, snapshot);
    }
}

#[test]
fn fen_roundtrips_over_corpus() {
    for (board, _) in corpus() {
        let reparsed: Board = board.to_fen().parse().unwrap();
        assert_eq!(reparsed, board);
    }
}
