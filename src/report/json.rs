use crate::types::leaderboard::Leaderboard;

pub fn to_json(board: &Leaderboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}
