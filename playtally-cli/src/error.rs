// ============================================================================
// playtally-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Reading command inputs
//
// The CLI reuses the core error type. Each command reads one text input, a
// label list or a saved page, and a failure to read it is reported as a path
// error naming which input was meant and where it was read from.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use playtally_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// The text input a command consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Duration labels, one per line.
    LabelList,
    /// HTML of a saved playlist page.
    SavedPage,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelList => write!(f, "label list"),
            Self::SavedPage => write!(f, "saved page"),
        }
    }
}

impl InputKind {
    /// Reads the whole input from `path`, or from stdin when no path is given.
    pub fn read(self, path: Option<&Path>) -> CliResult<String> {
        match path {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| self.read_error(&format!("'{}'", path.display()), &e)),
            None => io::read_to_string(io::stdin()).map_err(|e| self.read_error("stdin", &e)),
        }
    }

    fn read_error(self, source: &str, error: &io::Error) -> CoreError {
        CoreError::PathError(format!("Cannot read {self} from {source}: {error}"))
    }
}
