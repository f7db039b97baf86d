//! Error types for the Python frontend

use std::fmt;

/// Errors that can occur while turning Python source into a syntax tree
#[derive(Debug, Clone)]
pub enum FrontendError {
    /// The source text failed to parse
    Parse { path: String, message: String },
    /// Parsed syntax the tree model cannot represent
    Unsupported { construct: String, node: String },
}

impl FrontendError {
    /// Build an unsupported-syntax error from the offending parser node
    pub fn unsupported(construct: &str, node: &impl fmt::Debug) -> Self {
        FrontendError::Unsupported {
            construct: construct.to_string(),
            node: format!("{:?}", node),
        }
    }
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path, message)
            }
            FrontendError::Unsupported { construct, node } => {
                write!(f, "Unsupported {}: {}", construct, node)
            }
        }
    }
}

impl std::error::Error for FrontendError {}
