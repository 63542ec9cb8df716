use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use wordquiz_algo::DEFAULT_QUIZ_SIZE;

use crate::db::config::DbConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";
const DEFAULT_TTS_CLIENT: &str = "tw-ob";
const DEFAULT_TTS_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Set when `ENABLE_FILE_LOGS` is on
    pub file_log_dir: Option<PathBuf>,
    /// Base URL the browser client uses to reach this API
    pub api_base_url: String,
    pub quiz_size: usize,
    pub source_lang: String,
    pub translation_lang: String,
    pub db: DbConfig,
    pub tts: TtsConfig,
}

#[derive(Debug, Clone)]
pub struct TtsConfig {
    pub endpoint: String,
    pub client: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = var("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = var("HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let file_logs = matches!(
            var("ENABLE_FILE_LOGS").as_deref(),
            Some("true") | Some("1")
        );
        let file_log_dir = file_logs.then(|| {
            PathBuf::from(var("LOG_DIR").unwrap_or_else(|| "./logs".to_string()))
        });

        let api_base_url = var("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let quiz_size = var("QUIZ_SIZE")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_QUIZ_SIZE);

        let tts = TtsConfig {
            endpoint: var("TTS_ENDPOINT").unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string()),
            client: var("TTS_CLIENT").unwrap_or_else(|| DEFAULT_TTS_CLIENT.to_string()),
            timeout: Duration::from_millis(
                var("TTS_TIMEOUT_MS")
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_TTS_TIMEOUT_MS),
            ),
        };

        Self {
            host,
            port,
            log_level,
            file_log_dir,
            api_base_url,
            quiz_size,
            source_lang: var("SOURCE_LANG").unwrap_or_else(|| "tr".to_string()),
            translation_lang: var("TRANSLATION_LANG").unwrap_or_else(|| "en".to_string()),
            db: DbConfig::from_vars(&var),
            tts,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
