//! Grouped animation effects.
//!
//! Composes individual animation descriptions (target handle, keyframes,
//! timing options) into parallel, sequence, and stagger groups and plays
//! the resulting tree against a host platform's native per-element
//! animation primitive. Groups resolve their children's delays once, at
//! construction; playback is a synchronous depth-first fan-out of host
//! `animate` calls, one per leaf.
//!
//! The host engine is an external collaborator behind [`AnimationHost`].
//! This crate performs no timing-curve evaluation, tracks no running
//! animations, and validates nothing it forwards: malformed keyframes and
//! options are the host's to reject, and degenerate group inputs (empty
//! child lists, out-of-range stagger origins) are deliberate no-ops.

pub mod document;
pub mod effect;
pub mod error;
pub mod host;
pub mod keyframe;
pub mod player;
pub mod stagger;
pub mod timing;

// Re-exports for consumers (adapters)
pub use document::parse_effect_document;
pub use effect::{Effect, GroupEffect, GroupKind, LeafEffect};
pub use error::EffectError;
pub use host::{AnimationHost, TargetResolver};
pub use keyframe::Keyframe;
pub use player::Animation;
pub use stagger::StaggerOptions;
pub use timing::TimingOptions;

/// Crate result type.
pub type Result<T> = core::result::Result<T, EffectError>;
