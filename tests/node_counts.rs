//! Node counts and values from the empty board

use ttt_search::{
    AlphaBeta, Board, Minimax, Player, compare_from_empty, evaluate_from_empty_with_alphabeta,
    evaluate_from_empty_with_minimax, search::SCORE_BOUND,
};

#[test]
fn empty_board_is_a_draw_for_both_engines() {
    let minimax = evaluate_from_empty_with_minimax();
    let alpha_beta = evaluate_from_empty_with_alphabeta();

    assert_eq!(minimax.value, 0);
    assert_eq!(alpha_beta.value, 0);
}

#[test]
fn driver_counts_nine_root_moves_on_top_of_engine_nodes() {
    let minimax = evaluate_from_empty_with_minimax();
    let alpha_beta = evaluate_from_empty_with_alphabeta();

    assert_eq!(minimax.nodes, 549_954);
    assert_eq!(alpha_beta.nodes, 18_305);
}

#[test]
fn direct_call_on_empty_board_counts_the_whole_game_tree() {
    let mut board = Board::new();

    let mut minimax = Minimax::new();
    assert_eq!(minimax.value(&mut board, Player::Max), 0);
    assert_eq!(minimax.nodes(), 549_946);

    let mut alpha_beta = AlphaBeta::new();
    assert_eq!(
        alpha_beta.value(&mut board, Player::Max, -SCORE_BOUND, SCORE_BOUND),
        0
    );
    assert_eq!(alpha_beta.nodes(), 18_297);

    assert_eq!(board, Board::new());
}

#[test]
fn pruning_savings_from_empty_board() {
    let comparison = compare_from_empty();

    assert!(comparison.values_agree());
    assert!(comparison.alpha_beta.nodes < comparison.minimax.nodes);
    assert_eq!(comparison.saved_nodes(), 531_649);
    assert_eq!(format!("{:.2}", comparison.reduction_percent()), "96.67");
}

#[test]
fn repeated_runs_do_not_share_counters() {
    let first = evaluate_from_empty_with_alphabeta();
    let second = evaluate_from_empty_with_alphabeta();
    assert_eq!(first, second);
}
