pub mod app;
pub mod report_panel;
pub mod timeline_panel;
