//! Reachability checks for positions entered from outside the search

use super::{
    board::{Board, Player},
    lines::{LINES, line_sum},
    moves::Move,
};

impl Board {
    /// Check the position can arise from the empty board by alternating
    /// placements with MAX first.
    ///
    /// Piece counts are checked when parsing; this adds the win rules:
    /// - at most one side has three in a row
    /// - the winner made the last placement
    /// - several winning lines were all completed by one placement
    pub fn check_reachable(&self) -> Result<(), String> {
        let (max_count, min_count) = self.piece_counts();
        let max_won = self.has_line(Player::Max);
        let min_won = self.has_line(Player::Min);

        if max_won && min_won {
            return Err("both players have three in a row".to_string());
        }
        if max_won && max_count != min_count + 1 {
            return Err("X has won but O moved afterwards".to_string());
        }
        if min_won && max_count != min_count {
            return Err("O has won but X moved afterwards".to_string());
        }
        for player in [Player::Max, Player::Min] {
            if !self.winning_lines_share_cell(player) {
                return Err(format!(
                    "{player} has winning lines that no single placement completes"
                ));
            }
        }
        Ok(())
    }

    /// Check `to_move` is the side the piece counts call for
    pub fn check_turn(&self, to_move: Player) -> crate::Result<()> {
        if to_move == self.side_to_move() {
            return Ok(());
        }
        let (max_count, min_count) = self.piece_counts();
        Err(crate::Error::TurnMismatch {
            to_move,
            max_count,
            min_count,
        })
    }

    /// True iff `player` has completed some line
    pub fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line_sum(self, line) == 3 * player.sign())
    }

    fn winning_lines_share_cell(&self, player: Player) -> bool {
        let winning: Vec<&[Move; 3]> = LINES
            .iter()
            .filter(|line| line_sum(self, line) == 3 * player.sign())
            .collect();

        match winning.split_first() {
            Some((first, rest)) => first
                .iter()
                .any(|cell| rest.iter().all(|line| line.contains(cell))),
            None => true,
        }
    }
}
