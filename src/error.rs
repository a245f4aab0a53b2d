//! Error types for stored effect documents.

/// Errors surfaced while loading a stored effect document.
///
/// The effect constructors themselves never fail: empty groups and
/// out-of-range stagger origins are deliberate no-ops, and keyframes,
/// options, and targets are forwarded to the host uninspected. Loading is
/// the one fallible surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EffectError {
    /// Document is not valid JSON or does not match the schema.
    #[error("document parse error: {reason}")]
    Parse { reason: String },

    /// A leaf's target path did not resolve to a host handle.
    #[error("unresolved target: {path}")]
    UnresolvedTarget { path: String },
}

impl From<serde_json::Error> for EffectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
