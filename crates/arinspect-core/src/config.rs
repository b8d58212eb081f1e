//! Scan configuration for archive inspection.

/// How the reader advances past a member's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Advance by exactly the declared member size.
    ///
    /// Archives with an odd-sized member followed by further members will
    /// misparse the next header under this mode.
    #[default]
    None,
    /// Skip the single pad byte that follows an odd-sized payload, as
    /// written by standard `ar` tools.
    Even,
}

/// Configuration for an archive scan.
///
/// # Examples
///
/// ```
/// use arinspect_core::Alignment;
/// use arinspect_core::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.alignment, Alignment::None);
///
/// let custom = ScanConfig {
///     alignment: Alignment::Even,
///     ..Default::default()
/// };
/// assert!(!custom.verify_terminator);
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Payload alignment applied when moving to the next header.
    pub alignment: Alignment,

    /// Reject headers whose last two bytes are not the `` `\n `` marker.
    pub verify_terminator: bool,

    /// Largest member payload that will be buffered for hashing, in bytes.
    ///
    /// Unlimited by default: only a failed allocation stops a scan.
    pub max_member_size: u64,
}

impl Default for ScanConfig {
    /// Default values:
    /// - `alignment`: `Alignment::None`
    /// - `verify_terminator`: false
    /// - `max_member_size`: `u64::MAX` (no limit)
    fn default() -> Self {
        Self {
            alignment: Alignment::None,
            verify_terminator: false,
            max_member_size: u64::MAX,
        }
    }
}

impl ScanConfig {
    /// Creates a configuration that follows the standard `ar` layout
    /// strictly: even alignment and verified header terminators.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            alignment: Alignment::Even,
            verify_terminator: true,
            ..Self::default()
        }
    }
}
