pub mod json;
pub mod md;

use crate::error::RankerError;
use crate::types::leaderboard::Leaderboard;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(board: &Leaderboard, format: OutputFormat) -> Result<String, RankerError> {
    match format {
        OutputFormat::Json => json::to_json(board).map_err(RankerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(board)),
    }
}
