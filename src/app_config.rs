use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    waypoints: Waypoints,
    bridge: Bridge,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    status_buffer_size: usize,
    #[serde(with = "humantime_serde")]
    tick_interval: Duration,
    waypoint: String,
}

impl Core {
    pub fn status_buffer_size(&self) -> usize {
        self.status_buffer_size
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn waypoint(&self) -> &str {
        &self.waypoint
    }
}

#[derive(Debug, Deserialize)]
pub struct Waypoints {
    directory: String,
}

impl Waypoints {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Bridge {
    url: String,
    api_key: String,
    retry_ms: u64,
    retry_max_delay_ms: u64,
}

impl Bridge {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay_ms(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    status_buffer_size: 8,
                    tick_interval: Duration::from_millis(1000),
                    waypoint: "Apple Shinsaibashi".to_string(),
                },
                waypoints: Waypoints { directory: "waypoints".to_string() },
                bridge: Bridge {
                    url: "https://bridge.url/".to_string(),
                    api_key: "key".to_string(),
                    retry_ms: 100,
                    retry_max_delay_ms: 200,
                },
            },
        }
    }

    pub fn bridge_url(mut self, url: String) -> Self {
        self.config.bridge.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
