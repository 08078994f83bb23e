//! Error types for the color engine.

use thiserror::Error;

/// Errors produced by color parsing and option parsing.
///
/// Every variant is a local, non-fatal condition: callers either handle the
/// `Err` or go through one of the degrading entry points (`hex_to_hsv`,
/// `name_to_hsv`) that substitute a fallback color instead of failing.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Input string does not match the 3- or 6-digit hex pattern.
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),

    /// Color name absent from the static name table.
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),

    /// Format string is not one of "hex", "rgb", "rgb-string", "hsv".
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),

    /// Scheme string is not one of the six scheme families or their synonyms.
    #[error("unrecognized color scheme: {0:?}")]
    UnrecognizedScheme(String),
}
