//! ANSI colour codes for tinting chart cells.

use std::{fmt, str};

use crate::core::error::ColorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    /// `ESC[38;2;R;G;Bm` is at most 19 bytes.
    Inline { buf: [u8; 20], len: u8 },
}

/// Every colour accepted by name, in display order.
pub const NAMED_COLORS: [(&str, AnsiCode); 8] = [
    ("black", AnsiCode::black()),
    ("red", AnsiCode::red()),
    ("green", AnsiCode::green()),
    ("yellow", AnsiCode::yellow()),
    ("blue", AnsiCode::blue()),
    ("magenta", AnsiCode::magenta()),
    ("cyan", AnsiCode::cyan()),
    ("white", AnsiCode::white()),
];

impl AnsiCode {
    #[must_use]
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
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
        Self::Inline {
            buf,
            // bounded by the 20-byte buffer
            len: u8::try_from(len).unwrap_or(u8::MAX),
        }
    }

    /// Parse a colour name or `#rrggbb`.
    ///
    /// # Errors
    /// Returns a [`ColorError`] when `s` is neither a known name nor a valid
    /// six-digit hex triple.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map_or_else(|| Self::from_hex(s.trim()), |(_, code)| Ok(*code))
    }

    /// # Errors
    /// Returns a [`ColorError`] for a wrong length or a non-hex digit.
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

    /// Wrap `text` in this colour + reset sequence.
    #[inline]
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        colorize(self, text)
    }
}

impl str::FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
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
