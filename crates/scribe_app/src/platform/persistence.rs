use std::fs;
use std::path::{Path, PathBuf};

use scribe_core::EndpointConfig;
use scribe_engine::AtomicFileWriter;
use scribe_logging::{scribe_error, scribe_info, scribe_warn};
use serde::{Deserialize, Serialize};

const ENDPOINTS_FILENAME: &str = ".scribe_webhooks.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedEndpoints {
    generate_url: String,
    publish_url: String,
}

/// Loads the persisted webhook URLs. Missing, unreadable or corrupt files
/// yield `None` and the caller stays on the built-in defaults.
pub(crate) fn load_endpoints(state_dir: &Path) -> Option<EndpointConfig> {
    let path = state_dir.join(ENDPOINTS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            scribe_warn!("Failed to read persisted webhooks from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedEndpoints = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            scribe_warn!("Failed to parse persisted webhooks from {:?}: {}", path, err);
            return None;
        }
    };

    scribe_info!("Loaded persisted webhook URLs from {:?}", path);
    Some(EndpointConfig {
        generate_url: persisted.generate_url,
        publish_url: persisted.publish_url,
    })
}

pub(crate) fn save_endpoints(state_dir: &Path, endpoints: &EndpointConfig) {
    let persisted = PersistedEndpoints {
        generate_url: endpoints.generate_url.clone(),
        publish_url: endpoints.publish_url.clone(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            scribe_error!("Failed to serialize webhook URLs: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(ENDPOINTS_FILENAME, &content) {
        scribe_error!("Failed to write persisted webhooks to {:?}: {}", state_dir, err);
    }
}
