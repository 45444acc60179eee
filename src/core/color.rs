//! Zero-alloc ANSI colour wrapper plus the colour/no-colour decision.

use std::{fmt, str};

use crate::core::term::TermCaps;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[must_use]
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    #[must_use]
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    #[must_use]
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    #[must_use]
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    #[must_use]
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    #[must_use]
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    #[must_use]
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        // at most 19 bytes: 7 prefix + 3x3 digits + 2 separators + 'm'
        #[allow(clippy::cast_possible_truncation)]
        let len = len as u8;
        Self::Inline { buf, len }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    /// Anything that is neither a known name nor six hex digits.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            _ => Self::from_hex(s.trim()),
        }
    }

    /// # Errors
    /// Wrong length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

/// Palette used when the caller supplies none, cycled by series index.
pub const DEFAULT_PALETTE: [AnsiCode; 5] = [
    AnsiCode::cyan(),
    AnsiCode::magenta(),
    AnsiCode::yellow(),
    AnsiCode::green(),
    AnsiCode::blue(),
];

/// Names matching [`DEFAULT_PALETTE`] entry for entry.
pub const DEFAULT_PALETTE_NAMES: [&str; 5] = ["cyan", "magenta", "yellow", "green", "blue"];

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- ColorMode ---

/// Caller preference; the sink and `NO_COLOR` still get a say.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when the sink is an interactive terminal.
    #[default]
    Auto,
    /// Colour even when piped, unless `NO_COLOR` is set.
    Always,
    Never,
}

impl ColorMode {
    /// `NO_COLOR` beats everything, including [`ColorMode::Always`].
    #[must_use]
    pub fn resolve<C: TermCaps + ?Sized>(self, caps: &C) -> bool {
        if caps.no_color() {
            return false;
        }
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => caps.is_interactive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Caps {
        tty: bool,
        no_color: bool,
    }

    impl TermCaps for Caps {
        fn is_interactive(&self) -> bool {
            self.tty
        }
        fn columns(&self) -> Option<usize> {
            None
        }
        fn no_color(&self) -> bool {
            self.no_color
        }
    }

    #[test]
    fn rgb_builds_truecolor_sequence() {
        assert_eq!(AnsiCode::rgb(210, 5, 0).as_str(), "\x1b[38;2;210;5;0m");
        assert_eq!(AnsiCode::rgb(255, 255, 255).as_str(), "\x1b[38;2;255;255;255m");
    }

    #[test]
    fn names_and_hex_parse() {
        assert_eq!(AnsiCode::from_name(" Cyan ").unwrap(), AnsiCode::cyan());
        assert_eq!(
            AnsiCode::from_name("#6048c1").unwrap().as_str(),
            "\x1b[38;2;96;72;193m"
        );
        assert_eq!(AnsiCode::from_hex("#12345"), Err(ColorError::InvalidHexLength));
        assert_eq!(AnsiCode::from_hex("zz0000"), Err(ColorError::InvalidHexDigit));
    }

    #[test]
    fn colorize_appends_reset() {
        assert_eq!(colorize(&AnsiCode::red(), "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn no_color_wins_over_always() {
        let caps = Caps {
            tty: true,
            no_color: true,
        };
        assert!(!ColorMode::Always.resolve(&caps));
        assert!(!ColorMode::Auto.resolve(&caps));
    }

    #[test]
    fn auto_follows_the_sink() {
        let tty = Caps {
            tty: true,
            no_color: false,
        };
        let pipe = Caps {
            tty: false,
            no_color: false,
        };
        assert!(ColorMode::Auto.resolve(&tty));
        assert!(!ColorMode::Auto.resolve(&pipe));
        assert!(ColorMode::Always.resolve(&pipe));
        assert!(!ColorMode::Never.resolve(&tty));
    }
}
