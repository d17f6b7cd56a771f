use cue_artifact::{CELEBRATION_TRIGGER, KNOWN_CANDIDATES};

use crate::render::ArtifactKind;

/// Width/height budget handed to the presentation layer with every image
/// instruction. Fitting (aspect-ratio preservation etc.) happens on the
/// presentation side; the core only forwards the budget.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderBudget {
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for RenderBudget {
    fn default() -> Self {
        Self {
            max_width: 880.0,
            max_height: 550.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Debounce before clearing a text artifact on silence, seconds.
    pub text_clear_delay_secs: f64,
    /// Debounce before clearing an image artifact on silence, seconds.
    /// Longer than text — an abruptly cut image reads as more jarring.
    pub image_clear_delay_secs: f64,
    pub render_budget: RenderBudget,
    /// Substring (case-insensitive) that fires the celebratory signal.
    pub celebration_trigger: String,
    /// The candidate vocabulary probed during pre-warming.
    pub candidate_words: Vec<String>,
    /// Per-probe timeout during pre-warming, milliseconds.
    pub probe_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            text_clear_delay_secs: 0.1,
            image_clear_delay_secs: 0.4,
            render_budget: RenderBudget::default(),
            celebration_trigger: CELEBRATION_TRIGGER.to_string(),
            candidate_words: KNOWN_CANDIDATES.iter().map(|w| w.to_string()).collect(),
            probe_timeout_ms: 500,
        }
    }
}

impl SessionConfig {
    pub fn clear_delay_secs(&self, kind: ArtifactKind) -> f64 {
        match kind {
            ArtifactKind::Image => self.image_clear_delay_secs,
            _ => self.text_clear_delay_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_delay_is_longer_than_text() {
        let config = SessionConfig::default();
        assert!(
            config.clear_delay_secs(ArtifactKind::Image)
                > config.clear_delay_secs(ArtifactKind::Text)
        );
    }

    #[test]
    fn defaults_roundtrip_through_serde() {
        let config = SessionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}
