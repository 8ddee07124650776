//! Terminal styling helpers
//!
//! Color is applied with owo-colors and printed through anstream, which
//! strips ANSI codes when stdout is not a terminal.

use owo_colors::{OwoColorize, Stream};

/// Extension trait for styling display values
pub trait Stylize: std::fmt::Display + Sized {
    /// Green, for passing/ready output
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Yellow, for failing/blocked output
    fn warn(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }

    /// Dimmed, for secondary detail
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Bold, for headings
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}
