use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::config::Config;
use crate::guesses::Guesses;
use crate::heuristic;
use crate::output;
use crate::prompt::ManualPrompt;
use crate::search::{Reply, SearchClient, SearchCursor, SearchError};
use crate::writer::{SummaryWriter, WriterError};

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),
    #[error(transparent)]
    Writer(#[from] WriterError),
}

/// How a target reply ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Automatic(i64),
    Manual(i64),
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub replies: usize,
    pub automatic: usize,
    pub manual: usize,
    pub skipped: usize,
    pub guessers: usize,
    pub output: PathBuf,
}

/// Reads replies, turns them into guesses and keeps the tally.
pub struct Collector<R, W> {
    prompt: ManualPrompt<R, W>,
    targets: Vec<u64>,
    guesses: Guesses,
    summary: RunSummary,
}

impl<R, W> Collector<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(prompt: ManualPrompt<R, W>, targets: Vec<u64>) -> Self {
        Self {
            prompt,
            targets,
            guesses: Guesses::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn is_target(&self, reply: &Reply) -> bool {
        reply
            .in_reply_to
            .is_some_and(|parent| self.targets.contains(&parent))
    }

    /// Handle one search result. Returns `None` for results that are not
    /// replies to a target post.
    pub async fn consider(&mut self, reply: &Reply) -> io::Result<Option<Resolution>> {
        self.summary.scanned += 1;
        if !self.is_target(reply) {
            return Ok(None);
        }
        self.summary.replies += 1;

        let resolution = match heuristic::parse_guess(&reply.text) {
            Ok(value) => {
                output::success(&format!("Parsed guess from {}: {}", reply.author, value));
                self.summary.automatic += 1;
                Resolution::Automatic(value)
            }
            Err(failure) => {
                match self
                    .prompt
                    .ask(&reply.author, &reply.text, &failure.to_string())
                    .await?
                {
                    Some(value) => {
                        self.summary.manual += 1;
                        Resolution::Manual(value)
                    }
                    None => {
                        self.summary.skipped += 1;
                        Resolution::Skipped
                    }
                }
            }
        };

        if let Resolution::Automatic(value) | Resolution::Manual(value) = resolution {
            if let Some(previous) = self.guesses.record(reply.author.as_str(), value) {
                output::warn(&format!(
                    "{} guessed again: {} replaces {}",
                    reply.author, value, previous
                ));
            }
        }

        Ok(Some(resolution))
    }

    /// Drain the cursor, handling every result as it arrives.
    pub async fn collect(&mut self, cursor: &mut SearchCursor<'_>) -> Result<(), CollectorError> {
        loop {
            let spinner = fetch_spinner();
            let page = cursor.next_page().await;
            spinner.finish_and_clear();

            let Some(page) = page? else {
                break;
            };
            for reply in &page {
                self.consider(reply).await?;
            }
        }
        Ok(())
    }

    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }

    /// Write the sorted tally and report what happened.
    pub async fn finish(mut self, writer: &SummaryWriter) -> Result<RunSummary, CollectorError> {
        output::status("Writing results...");
        self.summary.output = writer.write(&self.guesses, &Local::now()).await?;
        self.summary.guessers = self.guesses.len();
        Ok(self.summary)
    }
}

fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching replies...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run the whole pipeline against the live API, asking on stdin/stdout and
/// writing `output.txt` in the working directory.
pub async fn run(config: &Config) -> Result<RunSummary, CollectorError> {
    let client = SearchClient::from_config(config);
    let mut cursor = client.cursor(&config.search_query, config.search_limit);
    let mut collector = Collector::new(ManualPrompt::stdio(), config.tweet_ids.clone());

    collector.collect(&mut cursor).await?;
    collector.finish(&SummaryWriter::default()).await
}
