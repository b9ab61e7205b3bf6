/// Represents the kind of movement proposed for a piece.
/// Selects which geometric rule set applies during validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementType {
    /// A non-capturing advance.
    Move,
    /// A capturing advance onto an enemy-held square.
    Capture,
}
