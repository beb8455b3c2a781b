//! Document input and output.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::CliError;

/// Path that selects stdin or stdout instead of a file.
const STDIO_PATH: &str = "-";

/// Read the whole document from `path`, or from stdin when absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path.filter(|p| is_file(p)) {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut content = String::new();
            std::io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Write `content` to `path`, or to stdout when absent or `-`.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path.filter(|p| is_file(p)) {
        Some(path) => std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Whether `path` names a real file rather than stdin/stdout.
pub(crate) fn is_file(path: &Path) -> bool {
    path != Path::new(STDIO_PATH)
}
