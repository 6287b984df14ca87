//! Igor Text file session
//!
//! Writes waves and commands as an Igor Text (`.itx`) file, which Igor
//! replays top to bottom when the file is loaded:
//!
//! ```text
//! IGOR
//! WAVES/D/O xWave_0
//! BEGIN
//! 	0
//! 	0.1
//! END
//! X Display
//! X AppendToGraph yWave_0 vs xWave_0
//! ```

use super::error::{IgorError, Result};
use super::session::IgorSession;
use std::collections::HashSet;
use std::io::Write;

/// Session writing an Igor Text file to any writer
#[derive(Debug)]
pub struct ItxSession<W: Write> {
    writer: W,
    waves: HashSet<String>,
    commands_written: usize,
}

impl<W: Write> ItxSession<W> {
    /// Start a new Igor Text file (writes the `IGOR` header)
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "IGOR")?;
        Ok(ItxSession {
            writer,
            waves: HashSet::new(),
            commands_written: 0,
        })
    }

    /// Number of `X` command lines written so far
    pub fn commands_written(&self) -> usize {
        self.commands_written
    }

    /// Number of distinct waves written so far
    pub fn waves_written(&self) -> usize {
        self.waves.len()
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> IgorSession for ItxSession<W> {
    fn execute(&mut self, command: &str) -> Result<()> {
        // One command per X line
        if command.contains(['\n', '\r']) {
            return Err(IgorError::Data(format!(
                "command spans several lines: {:?}",
                command
            )));
        }
        writeln!(self.writer, "X {}", command)?;
        self.commands_written += 1;
        Ok(())
    }

    fn create_wave(&mut self, name: &str, data: &[f64], overwrite: bool) -> Result<String> {
        if !self.waves.insert(name.to_string()) && !overwrite {
            return Err(IgorError::WaveExists(name.to_string()));
        }

        let flags = if overwrite { "/D/O" } else { "/D" };
        writeln!(self.writer, "WAVES{} {}", flags, name)?;
        writeln!(self.writer, "BEGIN")?;
        for value in data {
            writeln!(self.writer, "\t{}", itx_number(*value))?;
        }
        writeln!(self.writer, "END")?;
        Ok(name.to_string())
    }
}

/// Igor Text spelling of a double
fn itx_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let inf = if value > 0.0 { "INF" } else { "-INF" };
        inf.to_string()
    } else {
        value.to_string()
    }
}
