//! The build itself: a fixed toolchain invocation and the runner around it

pub mod command;
pub mod runner;

pub use command::{BuildCommand, WASM_PACK, WEB_TARGET_ARGS};
pub use runner::{BuildReport, BuildRunner, COMPLETE_MESSAGE, SERVE_HINT, START_MESSAGE};
