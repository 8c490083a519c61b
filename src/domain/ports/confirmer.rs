//! Confirmer Port
//!
//! Asks whether a fix should be applied. Implementations can be interactive
//! (prompting the user) or automatic (answering with the default).

/// Yes/no confirmation service
pub trait Confirmer: Send + Sync {
    /// Ask `question`; `default` is the answer used on empty input.
    fn confirm(&self, question: &str, default: bool) -> bool;
}

/// Confirmer that always answers with the suggested default.
///
/// Use this when prompting is suppressed (`--yes`).
pub struct PolicyConfirmer;

impl Confirmer for PolicyConfirmer {
    fn confirm(&self, _question: &str, default: bool) -> bool {
        default
    }
}
