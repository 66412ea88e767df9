pub mod settings;

pub use settings::{AllianceSettings, AppConfig, RatingThresholds, StoreSettings};
