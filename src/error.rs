//! Error types for loading and saving board documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::align::LabelKind;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse board TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write board TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {kind} label on footprint '{footprint}': {reason}")]
    InvalidLabel {
        footprint: String,
        kind: LabelKind,
        reason: String,
    },
}

impl BoardError {
    /// Create an invalid label error
    pub fn invalid_label(
        footprint: impl Into<String>,
        kind: LabelKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidLabel {
            footprint: footprint.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Source span of a parse error, if the parser reported one
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Parse(e) => e.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (Self::Parse(err), Some(span)) = (self, self.span()) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid board file")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
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
