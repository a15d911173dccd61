use std::io;

use anyhow::{anyhow, Context};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Browser console method a log line is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            ConsoleMethod::Error
        } else if level == Level::WARN {
            ConsoleMethod::Warn
        } else if level == Level::INFO {
            ConsoleMethod::Info
        } else {
            ConsoleMethod::Debug
        }
    }

    fn write(self, message: &str) {
        match self {
            ConsoleMethod::Error => gloo::console::error!(message),
            ConsoleMethod::Warn => gloo::console::warn!(message),
            ConsoleMethod::Info => gloo::console::info!(message),
            ConsoleMethod::Debug => gloo::console::debug!(message),
        }
    }
}

/// Hands the fmt layer one buffer per event, tagged with the event's level.
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

/// Collects one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { method: ConsoleMethod::for_level(level), buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        self.method.write(line.trim_end());
    }
}

/// Install the global subscriber. `filter` uses `EnvFilter` directive syntax.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {:?}", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("logging already initialised: {}", e))
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use std::io::Write;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_writer_emits_to_console() {
        let mut writer = ConsoleMakeWriter.make_writer();
        writer.write_all(b"calendar logging test\n").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_init_only_once() {
        let _ = init("debug");
        assert!(init("debug").is_err());
    }
}
