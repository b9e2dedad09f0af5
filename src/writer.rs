use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::guesses::Guesses;

pub const OUTPUT_FILE: &str = "output.txt";

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Header line plus one `<author> <value>` line per guess, lowest first.
pub fn render_summary(guesses: &Guesses, run_at: &DateTime<Local>) -> String {
    let mut out = format!(
        "# Script run at: {}\n",
        run_at.format("%Y-%m-%d %H:%M:%S%.6f")
    );
    for (author, value) in guesses.sorted() {
        out.push_str(&format!("{} {}\n", author, value));
    }
    out
}

pub struct SummaryWriter {
    directory: PathBuf,
}

impl SummaryWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Write the summary to `output.txt`, replacing whatever was there.
    pub async fn write(
        &self,
        guesses: &Guesses,
        run_at: &DateTime<Local>,
    ) -> Result<PathBuf, WriterError> {
        let full_path = Path::new(&self.directory).join(OUTPUT_FILE);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&full_path, render_summary(guesses, run_at)).await?;
        Ok(full_path)
    }

    pub async fn read(&self) -> Result<String, WriterError> {
        let full_path = Path::new(&self.directory).join(OUTPUT_FILE);
        let content = fs::read_to_string(&full_path).await?;
        Ok(content)
    }
}

impl Default for SummaryWriter {
    fn default() -> Self {
        Self::new(".")
    }
}
