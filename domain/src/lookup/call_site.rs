//! Call site value object

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location of a lookup: file basename and line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Create a call site, keeping only the basename of `file`.
    pub fn new(file: impl AsRef<str>, line: u32) -> Self {
        let file = file.as_ref();
        let base = Path::new(file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string());
        Self { file: base, line }
    }

    /// The location of whoever called the outermost `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
