use thiserror::Error;

/// Errors that can occur while building or exporting a purchase order.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// The incoming document payload could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// An amount, line total or document total does not fit in a `Decimal`.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// PDF assembly error.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// ZIP packaging error (too many entries, entry too large).
    #[error("archive error: {0}")]
    Archive(String),

    /// The requested export format is not compiled into this build.
    #[error("export format '{0}' is not enabled")]
    UnsupportedFormat(&'static str),

    /// Writing into the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
