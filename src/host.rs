//! Host engine and target resolution seams.
//!
//! The crate treats both as opaque collaborators; adapters for a concrete
//! platform implement these traits.

use crate::keyframe::Keyframe;
use crate::timing::TimingOptions;

/// The host platform's native per-element animation primitive.
///
/// `animate` must begin a time-driven animation of `target`'s properties
/// according to `keyframes` and `options`, honoring `delay` as a pre-start
/// offset and `duration` as the active phase length, and forwarding any
/// extra fields it recognizes. The returned handle is the caller's to keep;
/// this crate never inspects or awaits it, so pause and cancel go through
/// the host directly.
pub trait AnimationHost {
    /// Opaque host element handle.
    type Target;
    /// Handle to a started animation.
    type Handle;

    fn animate(
        &mut self,
        target: &Self::Target,
        keyframes: &[Keyframe],
        options: &TimingOptions,
    ) -> Self::Handle;
}

/// Resolves canonical target paths from stored documents to host handles.
pub trait TargetResolver {
    /// Opaque host element handle.
    type Handle;

    fn resolve(&mut self, path: &str) -> Option<Self::Handle>;
}
