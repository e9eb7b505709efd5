//! Lag specifications for candidate regressor construction.

use crate::error::BasisError;

/// Which lags of a signal enter the candidate regressor library.
///
/// # Example
///
/// ```
/// use sysid_basis::Lag;
///
/// let all = Lag::from(3);
/// assert_eq!(all.lags(), vec![1, 2, 3]);
///
/// let sparse = Lag::from(vec![1, 4]);
/// assert_eq!(sparse.max(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lag {
    /// All lags `1..=n`.
    Max(usize),
    /// An explicit list of lags, in the given order.
    List(Vec<usize>),
}

impl Lag {
    /// Returns the expanded lag sequence.
    pub fn lags(&self) -> Vec<usize> {
        match self {
            Lag::Max(n) => (1..=*n).collect(),
            Lag::List(lags) => lags.clone(),
        }
    }

    /// Returns the largest lag in the specification.
    ///
    /// A zero return value only occurs for specifications that fail
    /// [`Lag::validate()`].
    pub fn max(&self) -> usize {
        match self {
            Lag::Max(n) => *n,
            Lag::List(lags) => lags.iter().copied().max().unwrap_or(0),
        }
    }

    /// Returns the number of lags in the specification.
    pub fn len(&self) -> usize {
        match self {
            Lag::Max(n) => *n,
            Lag::List(lags) => lags.len(),
        }
    }

    /// Returns `true` if the specification contains no lags.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates this specification.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BasisError::InvalidLag`] | `Max(0)` or a list containing 0 |
    /// | [`BasisError::EmptyLagList`] | an empty lag list |
    pub fn validate(&self) -> Result<(), BasisError> {
        match self {
            Lag::Max(0) => Err(BasisError::InvalidLag { lag: 0 }),
            Lag::Max(_) => Ok(()),
            Lag::List(lags) => {
                if lags.is_empty() {
                    return Err(BasisError::EmptyLagList);
                }
                if let Some(&lag) = lags.iter().find(|&&l| l == 0) {
                    return Err(BasisError::InvalidLag { lag });
                }
                Ok(())
            }
        }
    }
}

impl Default for Lag {
    fn default() -> Self {
        Lag::Max(2)
    }
}

impl From<usize> for Lag {
    fn from(n: usize) -> Self {
        Lag::Max(n)
    }
}

impl From<Vec<usize>> for Lag {
    fn from(lags: Vec<usize>) -> Self {
        Lag::List(lags)
    }
}
