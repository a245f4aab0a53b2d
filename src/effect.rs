//! Effect tree: leaves and timing-policy groups.
//!
//! Groups resolve timing once, at construction. A parallel group stores its
//! children untouched; sequence and stagger groups rewrite their children's
//! `delay` (and, for stagger, `easing`) in place before the group exists.
//! Playback later walks the finished tree without any timing work of its
//! own.

use crate::keyframe::Keyframe;
use crate::stagger::StaggerOptions;
use crate::timing::TimingOptions;

/// A single atomic per-element animation description.
///
/// Stored verbatim; malformed keyframes or options are forwarded to the
/// host engine, which is responsible for rejecting them.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafEffect<T> {
    /// Opaque host element handle.
    pub target: T,
    pub keyframes: Vec<Keyframe>,
    pub options: TimingOptions,
}

impl<T> LeafEffect<T> {
    pub fn new(target: T, keyframes: Vec<Keyframe>, options: TimingOptions) -> Self {
        Self {
            target,
            keyframes,
            options,
        }
    }
}

/// Timing policy of a group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GroupKind {
    Parallel,
    Sequence,
    Stagger,
}

/// A composite node grouping child effects under a timing policy.
///
/// Only [`GroupEffect::parallel`], [`GroupEffect::sequence`], and
/// [`GroupEffect::stagger`] produce groups; there is no uncommitted base
/// state. Constructing a group consumes its children, so the same child
/// (and its timing options) cannot end up in two groups, where the second
/// rewrite would corrupt the first group's schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupEffect<T> {
    kind: GroupKind,
    children: Vec<Effect<T>>,
}

/// A node of the effect tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<T> {
    Leaf(LeafEffect<T>),
    Group(GroupEffect<T>),
}

impl<T> GroupEffect<T> {
    /// Children start together, each offset only by whatever delay it
    /// already carries. No timing rewrite.
    pub fn parallel(children: Vec<Effect<T>>) -> Self {
        Self {
            kind: GroupKind::Parallel,
            children,
        }
    }

    /// Children run back-to-back in list order.
    ///
    /// Child 0 keeps its authored delay as its own leading offset and is
    /// excluded from the running sum; for every later child the resolved
    /// delay is the sum of all prior durations plus the authored delays of
    /// the children after the first, so "wait extra time before this step"
    /// survives sequencing. A child with no timing of its own (a nested
    /// group) contributes zero delay and duration and receives no rewrite.
    pub fn sequence(mut children: Vec<Effect<T>>) -> Self {
        let mut accu = 0.0;
        for i in 1..children.len() {
            accu += children[i].delay();
            accu += children[i - 1].duration();
            if let Some(options) = children[i].timing_mut() {
                options.delay = accu;
            }
        }
        Self {
            kind: GroupKind::Sequence,
            children,
        }
    }

    /// Children are delayed in proportion to their spatial distance from
    /// an origin child, and their easing is replaced uniformly.
    ///
    /// See [`StaggerOptions`] for the distance model and the out-of-range
    /// origin no-op.
    pub fn stagger(mut children: Vec<Effect<T>>, options: StaggerOptions) -> Self {
        options.apply(&mut children);
        Self {
            kind: GroupKind::Stagger,
            children,
        }
    }

    #[inline]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    #[inline]
    pub fn children(&self) -> &[Effect<T>] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Effect<T> {
    /// Authored pre-start delay; a group carries no timing of its own.
    pub(crate) fn delay(&self) -> f64 {
        match self {
            Effect::Leaf(leaf) => leaf.options.delay,
            Effect::Group(_) => 0.0,
        }
    }

    /// Active-phase duration; a group carries no timing of its own.
    pub(crate) fn duration(&self) -> f64 {
        match self {
            Effect::Leaf(leaf) => leaf.options.duration,
            Effect::Group(_) => 0.0,
        }
    }

    pub(crate) fn timing_mut(&mut self) -> Option<&mut TimingOptions> {
        match self {
            Effect::Leaf(leaf) => Some(&mut leaf.options),
            Effect::Group(_) => None,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Effect::Leaf(_) => 1,
            Effect::Group(group) => group.children.iter().map(Effect::leaf_count).sum(),
        }
    }
}

impl<T> From<LeafEffect<T>> for Effect<T> {
    fn from(leaf: LeafEffect<T>) -> Self {
        Effect::Leaf(leaf)
    }
}

impl<T> From<GroupEffect<T>> for Effect<T> {
    fn from(group: GroupEffect<T>) -> Self {
        Effect::Group(group)
    }
}
