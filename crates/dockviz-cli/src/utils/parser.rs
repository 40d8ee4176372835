use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE (e.g., 'chart.bins=40').")]
    InvalidSetFormat(String),

    #[error("Invalid delimiter '{0}'. Expected a single ASCII character, '\\t' or 'tab'.")]
    InvalidDelimiter(String),
}

/// Splits a `KEY=VALUE` override. Only the first `=` separates; the value may contain more.
pub fn parse_set_value(input: &str) -> Result<(&str, &str), ParseError> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidSetFormat(input.to_string())),
    }
}

pub fn parse_delimiter(input: &str) -> Result<u8, ParseError> {
    match input {
        "\t" | "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(ParseError::InvalidDelimiter(input.to_string())),
            }
        }
    }
}
