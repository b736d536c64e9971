//! ANSI color output and level-prefixed helpers
//!
//! Convenience layer over [`Console`] for terminals that understand ANSI
//! escape codes: colored lines plus `INFO:` / `WARN:` / `CRIT:` prefixed
//! messages, with variants that splice a decimal or hex value between two
//! text fragments.

use dbgline_hal::DebugUart;

use crate::console::{Console, ConsoleError};

/// Text colors, mapped to ANSI SGR codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    /// Terminal default foreground
    Default,
}

impl Color {
    /// The escape sequence selecting this color
    pub fn escape(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Default => "\x1b[39m",
        }
    }
}

/// Severity of a level-prefixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Level {
    Info,
    Warn,
    Crit,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Info => "INFO: ",
            Level::Warn => "WARN: ",
            Level::Crit => "CRIT: ",
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Info => Color::Default,
            Level::Warn => Color::Yellow,
            Level::Crit => Color::Red,
        }
    }
}

impl<U: DebugUart> Console<U> {
    /// Write a string in the given color, restoring the default after
    pub fn write_str_colored(
        &mut self,
        text: &str,
        color: Color,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.write_str(color.escape())?;
        self.write_str(text)?;
        self.write_str(Color::Default.escape())
    }

    /// Write a colored string followed by CR + LF
    pub fn write_line_colored(
        &mut self,
        text: &str,
        color: Color,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.write_str_colored(text, color)?;
        self.write_line("")
    }

    /// `INFO: `-prefixed line in the default color
    pub fn info(&mut self, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.level_line(Level::Info, text)
    }

    /// `WARN: `-prefixed line in yellow
    pub fn warn(&mut self, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.level_line(Level::Warn, text)
    }

    /// `CRIT: `-prefixed line in red
    pub fn crit(&mut self, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.level_line(Level::Crit, text)
    }

    /// `INFO:` line with a decimal value between two text fragments
    pub fn info_value(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Info, before, value, after, false)
    }

    /// `WARN:` line with a decimal value between two text fragments
    pub fn warn_value(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Warn, before, value, after, false)
    }

    /// `CRIT:` line with a decimal value between two text fragments
    pub fn crit_value(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Crit, before, value, after, false)
    }

    /// `INFO:` line with a hex value between two text fragments
    pub fn info_value_hex(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Info, before, value, after, true)
    }

    /// `WARN:` line with a hex value between two text fragments
    pub fn warn_value_hex(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Warn, before, value, after, true)
    }

    /// `CRIT:` line with a hex value between two text fragments
    pub fn crit_value_hex(
        &mut self,
        before: &str,
        value: i32,
        after: &str,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.level_value(Level::Crit, before, value, after, true)
    }

    fn level_line(&mut self, level: Level, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.write_str(level.color().escape())?;
        self.write_str(level.prefix())?;
        self.write_str(text)?;
        self.write_str(Color::Default.escape())?;
        self.write_line("")
    }

    fn level_value(
        &mut self,
        level: Level,
        before: &str,
        value: i32,
        after: &str,
        hex: bool,
    ) -> Result<(), ConsoleError<U::Error>> {
        self.write_str(level.color().escape())?;
        self.write_str(level.prefix())?;
        self.write_str(before)?;
        if hex {
            self.write_i32_hex(value, false)?;
        } else {
            self.write_i32(value)?;
        }
        self.write_str(after)?;
        self.write_str(Color::Default.escape())?;
        self.write_line("")
    }
}
