//! Terminal confirmation prompt.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use ladle_core::views::Confirm;
use log::warn;

/// Asks on stderr and reads a `y`/`yes` answer from stdin. Anything else,
/// including end of input, declines.
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            eprint!("{prompt} [y/N] ");
            io::stderr().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok::<_, io::Error>(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                warn!("Could not read confirmation: {e}");
                false
            }
            Err(e) => {
                warn!("Confirmation prompt failed: {e}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
