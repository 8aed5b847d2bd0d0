//! Logger setup.
//!
//! Everything goes to stderr through `fern`, so setup errors end up in the
//! same place whether or not a window was ever shown.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// The level used by the lessons: verbose in debug builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(time: &str, level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", time, level, target, message)
}

/// Installs the global logger. Subsequent calls are ignored.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        let result = fern::Dispatch::new()
            .format(|out, message, record| {
                let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
                out.finish(format_args!(
                    "{}",
                    format_line(&time, record.level(), record.target(), message)
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply();

        if let Err(e) = result {
            eprintln!("failed to install logger: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(
            "12:00:00.000",
            log::Level::Info,
            "hello_triangle",
            &format_args!("window opened"),
        );
        assert_eq!(line, "[12:00:00.000 INFO  hello_triangle] window opened");
    }

    #[test]
    fn test_init_twice() {
        init(LevelFilter::Debug);
        init(LevelFilter::Trace);
        log::debug!("still one logger");
    }

    #[test]
    fn test_default_level() {
        #[cfg(debug_assertions)]
        assert_eq!(default_level(), LevelFilter::Debug);
        #[cfg(not(debug_assertions))]
        assert_eq!(default_level(), LevelFilter::Info);
    }
}
