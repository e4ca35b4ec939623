//! `tracing` output for the browser console.
//!
//! The fmt layer formats each event into a [`ConsoleWriter`], which hands the
//! finished line to `console.error`, `console.warn` or `console.log`
//! depending on the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

pub fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        _ => ConsoleMethod::Log,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and writes it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end().to_string();
        if line.is_empty() {
            return;
        }

        match console_method(self.level) {
            ConsoleMethod::Error => gloo::console::error!(line),
            ConsoleMethod::Warn => gloo::console::warn!(line),
            ConsoleMethod::Log => gloo::console::log!(line),
        }
    }
}

/// Install the console subscriber. Debug builds log at DEBUG, release at INFO.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let result = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if result.is_err() {
        gloo::console::warn!("tracing subscriber was already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_console_method_by_level() {
        assert_eq!(console_method(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(console_method(Level::TRACE), ConsoleMethod::Log);
    }

    #[wasm_bindgen_test]
    fn test_writer_accepts_partial_writes() {
        let mut writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.write(b"INFO ").unwrap(), 5);
        assert_eq!(writer.write(b"booking loaded\n").unwrap(), 15);
        assert_eq!(writer.buffer, b"INFO booking loaded\n");
        assert!(writer.flush().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::info!(component = "test", "still logging");
    }
}
