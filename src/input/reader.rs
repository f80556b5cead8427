use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Larger tables take hours at one request per second; split them instead.
const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Reads the string table to translate from a file or stdin.
pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&Path>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        check_size(metadata.len() as usize)?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        check_size(buffer.len())?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
             Split the string table into smaller files.",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}
