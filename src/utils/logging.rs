//! Logging utilities

use log::Level;

/// Routes `log` macros to the browser console. There is no log file and no
/// environment to read a filter from, so the level follows the build
/// profile: debug builds log everything down to `debug`, release builds
/// stay at `info`.
pub fn initialize_logging() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}
