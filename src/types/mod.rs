pub mod config;
pub mod leaderboard;
pub mod member;
pub mod war;
