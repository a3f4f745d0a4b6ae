//! State for generated supplementary content

use std::path::PathBuf;

/// A decoded image produced by the generative endpoint and written beneath
/// the cache directory. Not cached by prompt: an identical prompt regenerates
/// on every visit.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub prompt: String,
    pub bytes_len: usize,
    pub path: PathBuf,
}

/// Lifecycle of one visual panel. Loading and error are distinct states;
/// loading always clears, whatever the outcome.
#[derive(Debug, Clone, Default)]
pub enum VisualState {
    #[default]
    Idle,
    Loading,
    Ready(GeneratedImage),
    Failed(String),
}

impl VisualState {
    pub fn is_loading(&self) -> bool {
        matches!(self, VisualState::Loading)
    }
}

/// A structured algorithm recommendation from the advisor endpoint
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdvisorReply {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub algorithm: String,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_loading_flag() {
        assert!(VisualState::Loading.is_loading());
        assert!(!VisualState::Idle.is_loading());
        assert!(!VisualState::Failed("x".into()).is_loading());
    }
}
