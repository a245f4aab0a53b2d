//! Timing options forwarded to the host animation engine.

use serde::{Deserialize, Serialize};

/// Timing options for a single leaf effect.
///
/// `duration` is set by the caller and never altered by a group. `delay`
/// and `easing` may be overwritten by an enclosing sequence or stagger
/// group during its construction. Fields this crate does not recognize are
/// carried in `extra` and forwarded to the host unmodified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingOptions {
    /// Active phase length, in host time units.
    #[serde(default)]
    pub duration: f64,
    /// Pre-start offset, in host time units.
    #[serde(default)]
    pub delay: f64,
    /// Timing-curve identifier; `None` leaves the host default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// Host-recognized fields passed through unmodified.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TimingOptions {
    /// Create options with the given duration.
    #[inline]
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Set the pre-start delay.
    #[inline]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing identifier.
    #[inline]
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Attach a host-specific field.
    #[inline]
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
