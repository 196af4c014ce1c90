//! Acceptance policies for lines that fail to decode

/// What to do with a data line that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptancePolicy {
    /// Skip the line, record a notice, keep going
    SkipInvalid,

    /// Abort the whole parse at the first bad line
    FailFast,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::SkipInvalid
    }
}
