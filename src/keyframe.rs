//! Keyframe records, opaque to this crate.

use serde::{Deserialize, Serialize};

/// One keyframe: an open mapping of property name to value.
///
/// Property names and values are host-defined. This crate stores and
/// forwards them without inspection; the host engine rejects malformed
/// keyframes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframe {
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Keyframe {
    /// Create an empty keyframe.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value, returning the keyframe for chaining.
    #[inline]
    pub fn with(
        mut self,
        property: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Look up a property value.
    #[inline]
    pub fn get(&self, property: &str) -> Option<&serde_json::Value> {
        self.properties.get(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let frame = Keyframe::new()
            .with("opacity", 0.5)
            .with("transform", "scale(2)");
        assert_eq!(frame.get("opacity"), Some(&serde_json::json!(0.5)));
        assert_eq!(frame.get("transform"), Some(&serde_json::json!("scale(2)")));
        assert_eq!(frame.get("color"), None);
    }

    #[test]
    fn transparent_serde() {
        let frame: Keyframe = serde_json::from_str(r#"{"left":"10px"}"#).unwrap();
        assert_eq!(frame.get("left"), Some(&serde_json::json!("10px")));
        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"left":"10px"}"#
        );
    }
}
