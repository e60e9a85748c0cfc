//! Styling helpers for terminal output.
//!
//! The [`DirectoryStyle`] trait provides a set of convenience methods for
//! applying ANSI styling via the `colored` crate. Implementations for `&str`
//! and `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to directory output.
pub trait DirectoryStyle {
    fn title_style(&self) -> ColoredString;
    fn space_style(&self) -> ColoredString;
    fn slug_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn meta_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn visited_style(&self) -> ColoredString;
    fn unvisited_style(&self) -> ColoredString;
    fn link_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl DirectoryStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.truecolor(223, 140, 10).underline()
    }
    fn space_style(&self) -> ColoredString {
        self.truecolor(223, 140, 10)
    }
    fn slug_style(&self) -> ColoredString {
        self.truecolor(150, 150, 160)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn meta_style(&self) -> ColoredString {
        self.truecolor(130, 140, 130)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn visited_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn unvisited_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn link_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255).underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(180, 180, 90)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl DirectoryStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn space_style(&self) -> ColoredString {
        self.as_str().space_style()
    }
    fn slug_style(&self) -> ColoredString {
        self.as_str().slug_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn meta_style(&self) -> ColoredString {
        self.as_str().meta_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn visited_style(&self) -> ColoredString {
        self.as_str().visited_style()
    }
    fn unvisited_style(&self) -> ColoredString {
        self.as_str().unvisited_style()
    }
    fn link_style(&self) -> ColoredString {
        self.as_str().link_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
