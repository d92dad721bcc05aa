pub mod overlay;
pub mod surface;
pub mod ticks;
pub mod timebase;
pub mod timeline_renderer;
