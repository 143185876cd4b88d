use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("{format} output holds at most {limit} {what}, molecule has {count}")]
    CapacityExceeded {
        format: Format,
        what: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("the '{0}' format is not supported for this read operation")]
    UnsupportedReadFormat(Format),

    #[error("the '{0}' format is not supported for this write operation")]
    UnsupportedWriteFormat(Format),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
