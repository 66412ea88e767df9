pub mod ranker;
pub mod strength;
pub mod types;

pub use ranker::{alliance_for, combination_count, rank_alliances, top_alliances};
pub use strength::alliance_strength;
pub use types::Alliance;
