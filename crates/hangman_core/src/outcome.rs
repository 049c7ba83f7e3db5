//! Session outcome classification.

/// Whether the current attempt is still being played.
///
/// Never set directly: [`SessionState`](crate::SessionState) derives it
/// from the guesses recorded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Guesses are still accepted.
    #[default]
    Ongoing,
    /// Every non-space character of the phrase is revealed.
    Won,
    /// The incorrect-guess budget is spent.
    Lost,
}

impl Outcome {
    /// Returns true once no further guesses may be recorded.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
