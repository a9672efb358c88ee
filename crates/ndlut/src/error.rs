//! Transform error types.

use ndlut_core::ElemDepth;

/// Result type for lookup transforms.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur when applying a lookup transform.
///
/// Every variant is raised during validation, before the destination is
/// allocated or any sample is written. A failed call leaves no partial
/// output behind.
#[derive(Debug)]
pub enum LutError {
    /// The source depth cannot address a lookup table.
    ///
    /// Only 8-bit and 16-bit integer sources are supported; wider integer
    /// and float domains have no materialisable table.
    UnsupportedSourceDepth {
        /// Depth of the rejected source array
        depth: ElemDepth,
    },

    /// No kernel is registered for this (source depth, table depth) pair.
    UnsupportedTableDepth {
        /// Depth of the source array
        source: ElemDepth,
        /// Depth of the rejected table
        table: ElemDepth,
    },

    /// The table's shape violates a precondition of the transform.
    BadTable {
        /// Why the table was rejected
        reason: String,
    },

    /// Error from the array layer.
    Core(ndlut_core::Error),
}

impl core::fmt::Display for LutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedSourceDepth { depth } => {
                write!(f, "source depth {depth} is not supported by the lookup engine")
            }
            Self::UnsupportedTableDepth { source, table } => {
                write!(f, "table depth {table} is not supported for {source} sources")
            }
            Self::BadTable { reason } => write!(f, "bad lookup table: {reason}"),
            Self::Core(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for LutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(err) => err.source(),
            _ => None,
        }
    }
}

impl From<ndlut_core::Error> for LutError {
    fn from(source: ndlut_core::Error) -> Self {
        Self::Core(source)
    }
}

impl LutError {
    /// Creates an [`LutError::UnsupportedTableDepth`] error.
    #[inline]
    pub fn unsupported_pair(source: ElemDepth, table: ElemDepth) -> Self {
        Self::UnsupportedTableDepth { source, table }
    }

    /// Table entry count does not match the source's lookup domain.
    #[inline]
    pub fn table_size(expected: usize, got: usize) -> Self {
        Self::BadTable {
            reason: format!("table holds {got} entries, source domain needs {expected}"),
        }
    }

    /// Table storage is not contiguous.
    #[inline]
    pub fn table_not_contiguous() -> Self {
        Self::BadTable {
            reason: "table must be contiguous".into(),
        }
    }

    /// Table channel count is neither 1 nor the source channel count.
    #[inline]
    pub fn table_channels(lutcn: usize, cn: usize) -> Self {
        Self::BadTable {
            reason: format!("table has {lutcn} channels, expected 1 or {cn}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_pair_names_both_depths() {
        let err = LutError::unsupported_pair(ElemDepth::U16, ElemDepth::F16);
        let msg = err.to_string();
        assert!(msg.contains("u16"));
        assert!(msg.contains("f16"));
    }

    #[test]
    fn test_bad_table_messages() {
        assert!(LutError::table_size(256, 255).to_string().contains("255"));
        assert!(LutError::table_channels(2, 3).to_string().contains("expected 1 or 3"));
    }
}
