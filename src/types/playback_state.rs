/// Ephemeral playback state for the review session. Never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds.
    pub playhead: f64,
    pub is_playing: bool,
    pub playback_rate: f64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            playhead: 0.0,
            is_playing: false,
            playback_rate: 1.0,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
