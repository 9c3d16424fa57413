use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SheetError {
    SourceUnreachable {
        description: String,
        cause: String,
    },
    MalformedPayload {
        description: String,
        cause: String,
    },
    InvalidReference {
        reference: String,
    },
}

impl SheetError {
    pub fn unreachable(description: &str, cause: impl fmt::Display) -> Self {
        SheetError::SourceUnreachable {
            description: description.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn malformed(description: &str, cause: impl fmt::Display) -> Self {
        SheetError::MalformedPayload {
            description: description.to_string(),
            cause: cause.to_string(),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SheetError::SourceUnreachable {
                ref description,
                ref cause,
            } => write!(f, "sheet unreachable, {}: cause {}", description, cause),
            SheetError::MalformedPayload {
                ref description,
                ref cause,
            } => write!(f, "sheet malformed, {}: cause {}", description, cause),
            SheetError::InvalidReference { ref reference } =>
                write!(f, "no document id in sheet reference {}", reference),
        }
    }
}

impl Error for SheetError {}

/// A sheet row left out of the listing because one of its cells could not be coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: u64,
    pub column: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {} value {:?} {}", self.line, self.column, self.value, self.reason)
    }
}

impl Error for RowError {}
