//! Error types for srcML emission

use std::fmt;

/// The single failure mode of the emission engine
///
/// Raised for every statement or expression kind, and every sub-form,
/// outside the supported mapping set. There is no recovery and no degraded
/// output: the error unwinds the whole translation unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A node kind or sub-form with no defined srcML mapping
    UnsupportedConstruct {
        /// Short human description of the offending construct
        construct: String,
        /// Debug dump of the offending node
        node: String,
    },
}

impl ConvertError {
    /// Build an unsupported-construct error from the offending node
    pub fn unsupported(construct: &str, node: &impl fmt::Debug) -> Self {
        ConvertError::UnsupportedConstruct {
            construct: construct.to_string(),
            node: format!("{:?}", node),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedConstruct { construct, node } => {
                write!(f, "Unsupported {}: {}", construct, node)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
