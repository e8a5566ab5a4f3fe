//! What the user sees around the compass: status text and an in-memory host

pub mod memory;
pub mod status;

pub use memory::MemoryHost;
pub use status::StatusReport;
