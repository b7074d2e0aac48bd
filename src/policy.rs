/// What to do with trailing input that does not form a complete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log a warning, drop the orphan lines, keep everything written so far.
    Skip,
    /// Return the first error to the caller (strict).
    Return,
}

#[derive(Debug, Clone)]
pub struct FixOptions {
    pub error_policy: ErrorPolicy,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Skip,
        }
    }
}
