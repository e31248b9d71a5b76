//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use qrforge::GenerateRequest;

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Load a JSON request document, attaching path context to any error.
pub fn load_request(path: &Path) -> Result<GenerateRequest> {
    let raw = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid request in {}", path.display()))
}
