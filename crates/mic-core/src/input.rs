//! Raw input accepted by the validator.

use mic_model::{Mic, format_numeric};

/// One raw element of a batch.
///
/// Numbers are formatted without scientific notation before normalization;
/// already-typed [`Mic`] values pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Missing,
    Text(String),
    Number(f64),
    Mic(Mic),
}

impl RawInput {
    /// Text form used for normalization and diagnostics.
    ///
    /// `None` for missing input and for NaN.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawInput::Missing => None,
            RawInput::Text(text) => Some(text.clone()),
            RawInput::Number(number) if number.is_nan() => None,
            RawInput::Number(number) => Some(format_numeric(*number)),
            RawInput::Mic(mic) => Some(mic.as_str().to_string()),
        }
    }

    /// Missing, NaN, or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        self.to_text().is_none_or(|text| text.trim().is_empty())
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::Text(value.clone())
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<f32> for RawInput {
    fn from(value: f32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<u32> for RawInput {
    fn from(value: u32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<u64> for RawInput {
    fn from(value: u64) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<Mic> for RawInput {
    fn from(value: Mic) -> Self {
        RawInput::Mic(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Missing, Into::into)
    }
}
