use owo_colors::OwoColorize;
use std::io;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

const QUESTION: &str =
    "If the above reply contains a guess, enter it here (otherwise just hit enter): ";

/// Asks an operator to read a reply and type in the guess by hand.
pub struct ManualPrompt<R, W> {
    input: R,
    output: W,
}

impl ManualPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ManualPrompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the reply and keep asking until the operator enters an integer
    /// or leaves the line empty. An empty line and end of input both mean
    /// "no guess". Whitespace around a number is ignored.
    pub async fn ask(
        &mut self,
        author: &str,
        text: &str,
        reason: &str,
    ) -> io::Result<Option<i64>> {
        let header = format!("Reply from {}", author);
        let rule = "-".repeat(header.chars().count());
        self.write(&format!(
            "\n\n{}\n{}\n{}\n{}\n\n",
            header.bold(),
            rule,
            text,
            format!("({})", reason).dimmed()
        ))
        .await?;

        loop {
            self.write(QUESTION).await?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).await?;
            let response = line.trim_end_matches(['\r', '\n']);

            // Only a truly empty line skips; whitespace is just bad input.
            if read == 0 || response.is_empty() {
                self.write("No guess in reply. Skipping.\n").await?;
                return Ok(None);
            }

            match response.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    self.write(&format!("{}\n", "Input not parseable as an integer!".yellow()))
                        .await?
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    async fn write(&mut self, s: &str) -> io::Result<()> {
        self.output.write_all(s.as_bytes()).await?;
        self.output.flush().await
    }
}
