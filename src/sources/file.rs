//! File and stdin input, file output.

use crate::error::{Result, SourceError};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Read a whole file as text.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so any
/// readable file yields a string for the pipeline.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_lossy(bytes))
}

/// Read all of stdin. When stdin is a terminal, tell the user how to finish.
pub fn read_stdin() -> Result<String> {
    let stdin = std::io::stdin();
    if let Some(hint) = stdin_hint(stdin.is_terminal()) {
        log::warn!("{hint}");
    }
    let mut bytes = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .map_err(SourceError::Stdin)?;
    log::info!("Read {} bytes from stdin", bytes.len());
    Ok(decode_lossy(bytes))
}

/// Write `text` to `path`, replacing any existing file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| SourceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

fn stdin_hint(is_terminal: bool) -> Option<&'static str> {
    is_terminal.then_some(
        "No input file given, reading stdin: paste text and end with Ctrl-D (Ctrl-Z on Windows)",
    )
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Input is not valid UTF-8, replacing invalid bytes: {e}");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
