//! Text encodings tried when decoding delimited files.

use std::fmt;

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Candidate text encoding, tried in [`TextEncoding::CANDIDATES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Iso8859_1,
    Windows1252,
}

impl TextEncoding {
    pub const CANDIDATES: [Self; 4] = [Self::Utf8, Self::Latin1, Self::Iso8859_1, Self::Windows1252];

    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Iso8859_1 => "iso-8859-1",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Strictly decode `bytes`, returning `None` on malformed input.
    ///
    /// A leading byte-order mark is removed from the decoded text.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        let text = match self {
            Self::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)?
                .into_owned(),
            // ISO-8859-1 maps every byte to the code point of the same value.
            Self::Latin1 | Self::Iso8859_1 => bytes.iter().map(|&byte| char::from(byte)).collect(),
            Self::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)?
                .into_owned(),
        };
        match text.strip_prefix('\u{feff}') {
            Some(stripped) => Some(stripped.to_string()),
            None => Some(text),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
