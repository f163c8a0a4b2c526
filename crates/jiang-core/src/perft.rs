//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::player::Player;
use crate::rules::Ruleset;

/// Count the number of leaf nodes at the given depth, `player` moving first.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them. A position whose general has been
/// captured is a leaf with no children.
pub fn perft(board: &Board, player: Player, depth: usize, ruleset: Ruleset) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, player, ruleset);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.as_slice() {
        let child = board.make_move(*mv);
        nodes += perft(&child, player.flip(), depth - 1, ruleset);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(iccs_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, player: Player, depth: usize, ruleset: Ruleset) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board, player, ruleset);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            let child = board.make_move(*mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, player.flip(), depth - 1, ruleset)
            };
            (mv.to_iccs(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
