//! Error types for reading gallery and configuration files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::LayoutError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {message}")]
    Toml { message: String, span: Option<Span> },

    #[error("invalid layout input: {0}")]
    Invalid(#[from] LayoutError),
}

impl From<toml::de::Error> for InputError {
    fn from(e: toml::de::Error) -> Self {
        InputError::Toml {
            message: e.message().to_string(),
            span: e.span(),
        }
    }
}

impl InputError {
    /// Source location of the error, when the parser reported one
    pub fn span(&self) -> Option<&Span> {
        match self {
            InputError::Toml { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };
        let message = match self {
            InputError::Toml { message, .. } => message.as_str(),
            _ => "invalid input",
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid TOML")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
