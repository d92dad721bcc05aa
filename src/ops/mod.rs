pub mod analysis;
pub mod intake;
pub mod report_io;
