//! URL state persistence for mock pages
//!
//! Control state travels as base64-encoded JSON in a single query parameter,
//! which keeps URLs opaque and free of clashes with route parameters.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::debug;

/// Decode a state string from a URL query parameter into key-value pairs.
/// Anything undecodable yields no pairs, so the mock falls back to defaults.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            debug!("Ignoring mock state that isn't base64: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes) {
        Ok(map) => map.into_iter().collect(),
        Err(e) => {
            debug!("Ignoring mock state that isn't a JSON object: {}", e);
            Vec::new()
        }
    }
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects changed control values and produces an encoded state string
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Record a bool, skipped when it equals the default
    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// `None` when nothing differs from the defaults
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
