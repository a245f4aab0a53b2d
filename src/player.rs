//! Player: owns a root effect and fans it out to the host engine.

use crate::effect::{Effect, GroupEffect};
use crate::host::AnimationHost;

/// Holds one root effect and dispatches its leaves to the host engine.
///
/// The root may be a single leaf, a single group, or a plain list of
/// effects; the list form is normalized to a parallel group the first time
/// [`Animation::play`] runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation<T> {
    root: Root<T>,
}

#[derive(Clone, Debug, PartialEq)]
enum Root<T> {
    Effect(Effect<T>),
    List(Vec<Effect<T>>),
}

impl<T> Animation<T> {
    /// Player over a single effect, leaf or group.
    pub fn new(effect: impl Into<Effect<T>>) -> Self {
        Self {
            root: Root::Effect(effect.into()),
        }
    }

    /// Player over a plain list of effects, treated as an implicit
    /// parallel group.
    pub fn from_effects(effects: Vec<Effect<T>>) -> Self {
        Self {
            root: Root::List(effects),
        }
    }

    /// Issue one host `animate` call per leaf, depth-first in authored
    /// order at every nesting level.
    ///
    /// Call order fixes only the order in which animations are handed to
    /// the host; actual start times are governed by each leaf's resolved
    /// delay, which the host schedules independently. Handles returned by
    /// the host are dropped.
    pub fn play<H>(&mut self, host: &mut H)
    where
        H: AnimationHost<Target = T>,
    {
        if let Root::List(effects) = &mut self.root {
            let effects = std::mem::take(effects);
            self.root = Root::Effect(GroupEffect::parallel(effects).into());
        }
        if let Root::Effect(effect) = &self.root {
            dispatch(effect, host);
        }
    }
}

fn dispatch<H>(effect: &Effect<H::Target>, host: &mut H)
where
    H: AnimationHost,
{
    match effect {
        Effect::Leaf(leaf) => {
            log::trace!(
                "dispatching leaf (delay {}, duration {})",
                leaf.options.delay,
                leaf.options.duration
            );
            host.animate(&leaf.target, &leaf.keyframes, &leaf.options);
        }
        Effect::Group(group) => {
            for child in group.children() {
                dispatch(child, host);
            }
        }
    }
}
