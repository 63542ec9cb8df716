use std::sync::Arc;
use std::time::{Instant, SystemTime};

use wordquiz_algo::QuizGenerator;

use crate::config::Config;
use crate::db::WordStore;
use crate::services::speech::SpeechProxy;

/// Per-process handles shared by every request; holds no word data itself
#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    config: Arc<Config>,
    store: WordStore,
    speech: SpeechProxy,
}

impl AppState {
    pub fn new(config: Config, store: WordStore) -> Self {
        let speech = SpeechProxy::new(config.tts.clone());
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            config: Arc::new(config),
            store,
            speech,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn speech(&self) -> &SpeechProxy {
        &self.speech
    }

    /// Fresh entropy-seeded generator sized from config
    pub fn quiz_generator(&self) -> QuizGenerator {
        QuizGenerator::new().with_size(self.config.quiz_size)
    }
}
