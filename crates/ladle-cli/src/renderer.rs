//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for inline markdown styling, with a plain text mode for
//! pipes and tests.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so heading depth reads in a terminal
                writeln!(out, "\x1b[32m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
