//! Local search configuration.

/// Configuration for [`LocalSearchRunner`](super::LocalSearchRunner).
///
/// # Examples
///
/// ```
/// use u_pairing::local::LocalSearchConfig;
///
/// let polish = LocalSearchConfig::bounded(5);
/// assert_eq!(polish.max_sweeps, Some(5));
/// assert!(LocalSearchConfig::unbounded().max_sweeps.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Upper bound on full sweeps over all index pairs.
    ///
    /// `None` runs until a sweep accepts no swap.
    pub max_sweeps: Option<usize>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl LocalSearchConfig {
    /// Runs to a local optimum.
    pub fn unbounded() -> Self {
        Self { max_sweeps: None }
    }

    /// Stops after at most `sweeps` sweeps.
    pub fn bounded(sweeps: usize) -> Self {
        Self {
            max_sweeps: Some(sweeps),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sweeps == Some(0) {
            return Err("max_sweeps must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(LocalSearchConfig::default(), LocalSearchConfig::unbounded());
    }

    #[test]
    fn test_validate() {
        assert!(LocalSearchConfig::unbounded().validate().is_ok());
        assert!(LocalSearchConfig::bounded(1).validate().is_ok());
        assert!(LocalSearchConfig::bounded(0).validate().is_err());
    }
}
