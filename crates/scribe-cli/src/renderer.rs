//! Terminal output for the end-of-run summaries.
//!
//! Styled output goes through termimad. Plain markdown is printed unchanged
//! when `--no-color` is given, `NO_COLOR` is set or stdout is not a terminal,
//! so scripts and tests see stable text.

use std::io::IsTerminal;

use termimad::{crossterm::style::Color, MadSkin};

/// How run summaries are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Styled,
    Plain,
}

impl OutputStyle {
    /// Picks the style for this process.
    pub fn detect(no_color_flag: bool) -> Self {
        Self::resolve(
            no_color_flag,
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stdout().is_terminal(),
        )
    }

    fn resolve(no_color_flag: bool, no_color_env: bool, is_terminal: bool) -> Self {
        if no_color_flag || no_color_env || !is_terminal {
            OutputStyle::Plain
        } else {
            OutputStyle::Styled
        }
    }
}

/// Prints markdown summaries in the selected [`OutputStyle`].
pub struct TerminalRenderer {
    style: OutputStyle,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(style: OutputStyle) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Green);

        Self { style, skin }
    }

    pub fn render(&self, markdown: &str) {
        match self.style {
            OutputStyle::Styled => self.skin.print_text(markdown),
            OutputStyle::Plain => print!("{markdown}"),
        }
    }
}
