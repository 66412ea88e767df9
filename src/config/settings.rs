const DEFAULT_DATABASE_PATH: &str = "frc_scouting.db";

#[derive(Debug, Clone)]
pub struct AllianceSettings {
    pub default_top_limit: usize,
    /// Optional cap on "top N" responses. Unset means the full ranking may be requested.
    pub max_top_limit: Option<usize>,
}

impl Default for AllianceSettings {
    fn default() -> Self {
        Self {
            default_top_limit: 10,
            max_top_limit: None,
        }
    }
}

impl AllianceSettings {
    /// Resolves a requested "top N" size. Only a missing value falls back to the default.
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        let limit = requested.unwrap_or(self.default_top_limit);
        match self.max_top_limit {
            Some(cap) => limit.min(cap),
            None => limit,
        }
    }
}

/// Lower bounds for the rating classes shown on the dashboard.
#[derive(Debug, Clone)]
pub struct RatingThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: 90.0,
            good: 80.0,
            average: 70.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub match_history_limit: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            match_history_limit: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub alliance: AllianceSettings,
    pub rating: RatingThresholds,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            alliance: AllianceSettings::default(),
            rating: RatingThresholds::default(),
            store: StoreSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.store.database_path = path.into();
        self
    }
}
