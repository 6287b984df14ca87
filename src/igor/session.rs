//! IgorSession trait and the in-memory session
//!
//! A session is the explicit handle to one Igor command channel: it creates
//! waves and executes command lines in order. The translator is the only
//! writer for the duration of a conversion, which `&mut` access enforces.
//!
//! Implementations:
//! - `RecordingSession`: keeps commands and waves in memory (tests, dry runs)
//! - `ItxSession`: writes an Igor Text file (see `itx.rs`)

use super::error::{IgorError, Result};
use std::collections::BTreeMap;

/// Command channel into an Igor experiment
pub trait IgorSession {
    /// Execute one command line
    fn execute(&mut self, command: &str) -> Result<()>;

    /// Create a double-precision wave from `data`, returning its name
    ///
    /// With `overwrite` an existing wave of the same name is replaced;
    /// without it, an existing wave is an error.
    fn create_wave(&mut self, name: &str, data: &[f64], overwrite: bool) -> Result<String>;
}

/// Session that records everything in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSession {
    commands: Vec<String>,
    waves: BTreeMap<String, Vec<f64>>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executed commands, in order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Contents of a wave, if it exists
    pub fn wave(&self, name: &str) -> Option<&[f64]> {
        self.waves.get(name).map(Vec::as_slice)
    }

    /// Names of all waves, sorted
    pub fn wave_names(&self) -> impl Iterator<Item = &str> {
        self.waves.keys().map(String::as_str)
    }

    /// Commands starting with `prefix`
    pub fn commands_starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.commands
            .iter()
            .map(String::as_str)
            .filter(move |c| c.starts_with(prefix))
    }
}

impl IgorSession for RecordingSession {
    fn execute(&mut self, command: &str) -> Result<()> {
        self.commands.push(command.to_string());
        Ok(())
    }

    fn create_wave(&mut self, name: &str, data: &[f64], overwrite: bool) -> Result<String> {
        if !overwrite && self.waves.contains_key(name) {
            return Err(IgorError::WaveExists(name.to_string()));
        }
        self.waves.insert(name.to_string(), data.to_vec());
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_session_commands_in_order() {
        let mut session = RecordingSession::new();
        session.execute("Display").unwrap();
        session.execute("Label bottom \"x\"").unwrap();
        assert_eq!(session.commands(), &["Display", "Label bottom \"x\""]);
        assert_eq!(session.commands_starting_with("Label").count(), 1);
    }

    #[test]
    fn test_create_wave_overwrite() {
        let mut session = RecordingSession::new();
        let name = session.create_wave("xWave_0", &[1.0, 2.0], true).unwrap();
        assert_eq!(name, "xWave_0");

        session.create_wave("xWave_0", &[3.0], true).unwrap();
        assert_eq!(session.wave("xWave_0"), Some(&[3.0][..]));
    }

    #[test]
    fn test_create_wave_without_overwrite_fails_on_existing() {
        let mut session = RecordingSession::new();
        session.create_wave("w", &[1.0], false).unwrap();
        let err = session.create_wave("w", &[2.0], false).unwrap_err();
        assert!(matches!(err, IgorError::WaveExists(ref n) if n == "w"));
        assert_eq!(session.wave("w"), Some(&[1.0][..]));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = RecordingSession::new();
        let b = RecordingSession::new();
        a.create_wave("w", &[1.0], true).unwrap();
        a.execute("Display").unwrap();
        assert!(b.wave("w").is_none());
        assert!(b.commands().is_empty());
    }
}
