pub mod attack;
pub mod member;

pub use attack::ThBand;
pub use member::member_score;
