//! Colored notices

use std::fmt::Display;

use owo_colors::{colors::css, OwoColorize};
use supports_color::Stream;

/// Whether `stream` is a color-capable terminal
fn enabled(stream: Stream) -> bool {
    supports_color::on_cached(stream).is_some()
}

/// Extension trait for colorizing notices
pub trait Colorize {
    /// Green, for completed work on stdout
    fn success(&self) -> String;
    /// Amber, for diagnostics on stderr
    fn warning(&self) -> String;
}

impl<T: Display> Colorize for T {
    fn success(&self) -> String {
        if enabled(Stream::Stdout) {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if enabled(Stream::Stderr) {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }
}
