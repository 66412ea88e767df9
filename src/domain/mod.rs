pub mod models;
pub mod source;

pub use models::{loose_number_list, LooseNumber, RatingClass, Team, TeamInput, TeamNumber};
pub use source::TeamSource;
