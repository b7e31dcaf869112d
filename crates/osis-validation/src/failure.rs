//! # Validation Failures
//!
//! The two ways a validator list can reject its input.

use crate::validator::BusinessException;

// ─── Multiple exceptions ─────────────────────────────────────────────

/// Every invariant violation found by one validator list run, in the
/// order the validators were declared. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleBusinessExceptions<E> {
    exceptions: Vec<E>,
}

impl<E> MultipleBusinessExceptions<E> {
    /// Wrap collected exceptions. Returns `None` when nothing was collected.
    pub fn from_vec(exceptions: Vec<E>) -> Option<Self> {
        if exceptions.is_empty() {
            None
        } else {
            Some(Self { exceptions })
        }
    }

    /// Number of collected exceptions (at least one).
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    /// `false` for any value built through `from_vec`.
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }

    /// The exception raised by the earliest declared validator.
    pub fn first(&self) -> Option<&E> {
        self.exceptions.first()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.exceptions.iter()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<E> {
        self.exceptions
    }
}

impl<E: BusinessException> MultipleBusinessExceptions<E> {
    /// Status codes of the collected exceptions, in order.
    pub fn status_codes(&self) -> Vec<&'static str> {
        self.exceptions.iter().map(|e| e.status_code()).collect()
    }
}

impl<E> IntoIterator for MultipleBusinessExceptions<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.exceptions.into_iter()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for MultipleBusinessExceptions<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, exception) in self.exceptions.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{exception}")?;
        }
        Ok(())
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for MultipleBusinessExceptions<E> {}

// ─── Validation failure ──────────────────────────────────────────────

/// Outcome of a rejected validator list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure<E> {
    /// The input was malformed. Only the first data-contract violation is
    /// reported and no invariant was evaluated.
    DataContract(E),
    /// The input was well-formed but broke one or more business rules.
    Invariants(MultipleBusinessExceptions<E>),
}

impl<E> ValidationFailure<E> {
    /// Whether the failure stopped in the data-contract phase.
    pub fn is_data_contract(&self) -> bool {
        matches!(self, Self::DataContract(_))
    }

    /// Every reported exception, in order.
    pub fn exceptions(&self) -> Vec<&E> {
        match self {
            Self::DataContract(e) => vec![e],
            Self::Invariants(all) => all.iter().collect(),
        }
    }

    /// Number of reported exceptions.
    pub fn len(&self) -> usize {
        match self {
            Self::DataContract(_) => 1,
            Self::Invariants(all) => all.len(),
        }
    }

    /// Always `false`: a failure reports at least one exception.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first reported exception.
    pub fn first(&self) -> Option<&E> {
        match self {
            Self::DataContract(e) => Some(e),
            Self::Invariants(all) => all.first(),
        }
    }

    /// Consume into the reported exceptions.
    pub fn into_exceptions(self) -> Vec<E> {
        match self {
            Self::DataContract(e) => vec![e],
            Self::Invariants(all) => all.into_vec(),
        }
    }
}

impl<E: BusinessException> ValidationFailure<E> {
    /// Status codes of every reported exception, in order.
    pub fn status_codes(&self) -> Vec<&'static str> {
        self.exceptions().iter().map(|e| e.status_code()).collect()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for ValidationFailure<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataContract(e) => write!(f, "malformed input: {e}"),
            Self::Invariants(all) => write!(f, "business rules violated: {all}"),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for ValidationFailure<E> {}

impl<E> From<MultipleBusinessExceptions<E>> for ValidationFailure<E> {
    fn from(all: MultipleBusinessExceptions<E>) -> Self {
        Self::Invariants(all)
    }
}
