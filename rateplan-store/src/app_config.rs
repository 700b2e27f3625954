use rateplan_rules::RuleSettings;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub feeds: FeedSettings,
    pub pricing: RuleSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Worker threads; unset means one per available core
    pub workers: Option<usize>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            workers: None,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn worker_threads(&self) -> usize {
        self.workers.filter(|n| *n > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter directive, used when RUST_LOG is not set
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "rateplan_api=info,tower_http=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedSettings {
    /// Occupancy reported for hotels nobody has published a value for
    pub default_occupancy: f64,
    /// Base rate used when neither the request nor the feed has one
    pub fallback_base_rate: f64,
    pub occupancy: Vec<OccupancySeed>,
    pub base_rates: Vec<RoomRateSeed>,
    pub competitor_prices: Vec<RoomRateSeed>,
    pub season_multipliers: Vec<SeasonSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OccupancySeed {
    pub hotel_id: String,
    pub value: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoomRateSeed {
    pub hotel_id: String,
    pub room_type: String,
    pub value: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeasonSeed {
    pub hotel_id: String,
    /// Month name ("December", "dec") or number (1-12)
    pub month: String,
    pub value: f64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_occupancy: 0.70,
            fallback_base_rate: 4000.0,
            occupancy: vec![OccupancySeed {
                hotel_id: "H1".to_string(),
                value: 0.82,
            }],
            base_rates: vec![
                RoomRateSeed {
                    hotel_id: "H1".to_string(),
                    room_type: "DLX".to_string(),
                    value: 5000.0,
                },
                RoomRateSeed {
                    hotel_id: "H1".to_string(),
                    room_type: "STD".to_string(),
                    value: 3000.0,
                },
            ],
            competitor_prices: Vec::new(),
            season_multipliers: vec![
                SeasonSeed {
                    hotel_id: "H1".to_string(),
                    month: "December".to_string(),
                    value: 1.30,
                },
                SeasonSeed {
                    hotel_id: "H1".to_string(),
                    month: "January".to_string(),
                    value: 0.90,
                },
            ],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every section has built-in defaults, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }
}

/// Eg.. `RATEPLAN_SERVER__PORT=9090` sets `server.port`
fn environment() -> config::Environment {
    config::Environment::with_prefix("RATEPLAN")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
