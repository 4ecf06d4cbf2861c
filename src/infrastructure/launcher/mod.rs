//! Host launcher adapters

mod process;

pub use process::ProcessLauncher;
