//! Confidence Policy
//!
//! Maps a check's confidence level to warning and prompting defaults.
//! Pure decisions; the toggles come from run settings.

use crate::domain::value_objects::Confidence;

/// Warning and default-answer toggles per confidence level.
///
/// `Required` checks always warn and always default to applying the fix;
/// the toggles only affect `Recommended` and `Experimental`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidencePolicy {
    pub warn_recommended: bool,
    pub warn_experimental: bool,
    pub fix_recommended_by_default: bool,
    pub fix_experimental_by_default: bool,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            warn_recommended: true,
            warn_experimental: true,
            fix_recommended_by_default: true,
            fix_experimental_by_default: false,
        }
    }
}

impl ConfidencePolicy {
    /// Whether a check that is still failing after its last fix attempt merits a warning
    pub fn should_warn(&self, confidence: Confidence) -> bool {
        match confidence {
            Confidence::Required => true,
            Confidence::Recommended => self.warn_recommended,
            Confidence::Experimental => self.warn_experimental,
        }
    }

    /// Suggested answer when asking whether to apply a fix
    pub fn default_apply_fix(&self, confidence: Confidence) -> bool {
        match confidence {
            Confidence::Required => true,
            Confidence::Recommended => self.fix_recommended_by_default,
            Confidence::Experimental => self.fix_experimental_by_default,
        }
    }

    /// Label inserted into the fix prompt
    pub fn descriptor(confidence: Confidence) -> Option<&'static str> {
        match confidence {
            Confidence::Required => None,
            Confidence::Recommended => Some("RECOMMENDED"),
            Confidence::Experimental => Some("EXPERIMENTAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_defaults() {
        let policy = ConfidencePolicy::default();
        assert!(policy.default_apply_fix(Confidence::Required));
        assert!(policy.default_apply_fix(Confidence::Recommended));
        assert!(!policy.default_apply_fix(Confidence::Experimental));
        for confidence in Confidence::ALL {
            assert!(policy.should_warn(confidence));
        }
    }

    #[test]
    fn required_ignores_toggles() {
        let policy = ConfidencePolicy {
            warn_recommended: false,
            warn_experimental: false,
            fix_recommended_by_default: false,
            fix_experimental_by_default: false,
        };
        assert!(policy.should_warn(Confidence::Required));
        assert!(policy.default_apply_fix(Confidence::Required));
        assert!(!policy.should_warn(Confidence::Recommended));
        assert!(!policy.should_warn(Confidence::Experimental));
    }

    #[test]
    fn toggles_are_independent() {
        let policy = ConfidencePolicy {
            warn_recommended: false,
            fix_experimental_by_default: true,
            ..ConfidencePolicy::default()
        };
        assert!(!policy.should_warn(Confidence::Recommended));
        assert!(policy.should_warn(Confidence::Experimental));
        assert!(policy.default_apply_fix(Confidence::Experimental));
        assert!(policy.default_apply_fix(Confidence::Recommended));
    }

    #[test]
    fn descriptor_only_for_weaker_levels() {
        assert_eq!(ConfidencePolicy::descriptor(Confidence::Required), None);
        assert_eq!(
            ConfidencePolicy::descriptor(Confidence::Experimental),
            Some("EXPERIMENTAL")
        );
    }
}
