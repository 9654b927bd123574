use serde::Serialize;

/// Outcome of a successful registration, shown to the user once.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    /// Alternate credential; render it as a scannable code.
    pub recovery_code: String,
}
