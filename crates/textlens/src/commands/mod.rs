//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod sentences;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read the text to analyze and validate its size against the configured limit.
///
/// `None` or `-` reads standard input; anything else is a file path.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_stdin(max_bytes),
    }
}

/// Read a file, checking its size from metadata before loading it.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let stdin = std::io::stdin().lock();
    let bytes = read_limited(stdin, max_bytes).context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Read at most one byte past `max_bytes`, so oversize input is detectable
/// without decoding a multibyte character cut at the limit.
fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader.take(cap).read_to_end(&mut bytes)?;
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)?;
        }
    }
    Ok(bytes)
}
