pub mod playback_state;
pub mod segment;
pub mod session;
pub mod timecode;
