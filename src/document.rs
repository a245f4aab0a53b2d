//! Stored effect documents (JSON).
//!
//! Parses a `type`-tagged JSON description of an effect tree into
//! [`Effect`], resolving leaf target paths to host handles through a
//! [`TargetResolver`]. Group construction goes through the real
//! constructors, so a loaded sequence or stagger carries the same resolved
//! timing as a hand-built one.

use serde::Deserialize;

use crate::effect::{Effect, GroupEffect, LeafEffect};
use crate::error::EffectError;
use crate::host::TargetResolver;
use crate::keyframe::Keyframe;
use crate::stagger::StaggerOptions;
use crate::timing::TimingOptions;

/// Parse a stored effect document into an effect tree.
///
/// Leaf `target` fields are canonical path strings handed to `resolver`;
/// an unresolved path aborts the parse.
pub fn parse_effect_document<R>(
    s: &str,
    resolver: &mut R,
) -> Result<Effect<R::Handle>, EffectError>
where
    R: TargetResolver,
{
    let stored: StoredEffect = serde_json::from_str(s)?;
    build(stored, resolver)
}

fn build<R>(stored: StoredEffect, resolver: &mut R) -> Result<Effect<R::Handle>, EffectError>
where
    R: TargetResolver,
{
    match stored {
        StoredEffect::Leaf {
            target,
            keyframes,
            options,
        } => {
            let handle = resolver
                .resolve(&target)
                .ok_or(EffectError::UnresolvedTarget { path: target })?;
            Ok(LeafEffect::new(handle, keyframes, options).into())
        }
        StoredEffect::Parallel { children } => {
            Ok(GroupEffect::parallel(build_children(children, resolver)?).into())
        }
        StoredEffect::Sequence { children } => {
            Ok(GroupEffect::sequence(build_children(children, resolver)?).into())
        }
        StoredEffect::Stagger { children, stagger } => {
            Ok(GroupEffect::stagger(build_children(children, resolver)?, stagger).into())
        }
    }
}

fn build_children<R>(
    children: Vec<StoredEffect>,
    resolver: &mut R,
) -> Result<Vec<Effect<R::Handle>>, EffectError>
where
    R: TargetResolver,
{
    children
        .into_iter()
        .map(|child| build(child, resolver))
        .collect()
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum StoredEffect {
    Leaf {
        target: String,
        #[serde(default)]
        keyframes: Vec<Keyframe>,
        #[serde(default)]
        options: TimingOptions,
    },
    Parallel {
        #[serde(default)]
        children: Vec<StoredEffect>,
    },
    Sequence {
        #[serde(default)]
        children: Vec<StoredEffect>,
    },
    Stagger {
        #[serde(default)]
        children: Vec<StoredEffect>,
        stagger: StaggerOptions,
    },
}
