// logging.rs - `log` backend for the browser console
//
// Native builds log through env_logger in the binary; in wasm the records
// go to console.debug/log/warn/error.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// One console line per record
pub(crate) fn format_record(level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    format!("[{level} {target}] {args}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }
        let line = format_record(record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => console_error(&line),
            Level::Warn => console_warn(&line),
            Level::Info => console_log(&line),
            Level::Debug | Level::Trace => console_debug(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once; later calls
/// only change the level.
pub fn init(level: LevelFilter) {
    if cfg!(target_arch = "wasm32") {
        let _ = log::set_logger(&LOGGER);
    }
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_has_level_and_target() {
        let line = format_record(
            Level::Warn,
            "landscape_engine::terrain",
            &format_args!("bad {}", "x"),
        );
        assert_eq!(line, "[WARN landscape_engine::terrain] bad x");
    }
}
