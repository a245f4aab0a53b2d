//! Distance-based stagger timing.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// Options controlling a stagger group's timing rewrite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerOptions {
    /// Extra delay per unit of distance from the emanation child.
    pub delay: f64,
    /// Easing applied to every child, replacing whatever was authored.
    pub easing: String,
    /// Index of the origin child distances are measured from. Signed so
    /// that out-of-range values on either side stay representable; any
    /// value outside `0..children.len()` skips the rewrite entirely.
    #[serde(default)]
    pub emanation: isize,
    /// Optional `[rows, cols]` pair reinterpreting the children as a
    /// row-major grid. Without it the children form a single row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<[usize; 2]>,
}

impl StaggerOptions {
    /// Stagger from child 0 of a single row.
    #[inline]
    pub fn new(delay: f64, easing: impl Into<String>) -> Self {
        Self {
            delay,
            easing: easing.into(),
            emanation: 0,
            grid: None,
        }
    }

    /// Set the origin child index.
    #[inline]
    pub fn with_emanation(mut self, emanation: isize) -> Self {
        self.emanation = emanation;
        self
    }

    /// Reinterpret the children as a `rows` x `cols` grid.
    #[inline]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.grid = Some([rows, cols]);
        self
    }

    /// Rewrite each child's delay and easing in place.
    ///
    /// Each child's new delay is its authored delay plus its grid distance
    /// from the emanation child times `self.delay`; the emanation child
    /// itself is at distance zero and keeps its authored delay. Easing is
    /// overwritten unconditionally. Children with no timing of their own
    /// (nested groups) are left untouched.
    ///
    /// An out-of-range emanation or a zero-column grid skips the rewrite
    /// for the whole group. That is a deliberate no-op, not an error, and
    /// it is logged at warn level.
    pub(crate) fn apply<T>(&self, children: &mut [Effect<T>]) {
        if children.is_empty() {
            return;
        }
        if self.emanation < 0 || self.emanation as usize >= children.len() {
            log::warn!(
                "stagger emanation {} outside 0..{}, leaving children untouched",
                self.emanation,
                children.len()
            );
            return;
        }
        let cols = match self.grid {
            Some([_, cols]) => cols,
            None => children.len(),
        };
        if cols == 0 {
            log::warn!("stagger grid has zero columns, leaving children untouched");
            return;
        }

        let emanation = self.emanation as usize;
        for (index, child) in children.iter_mut().enumerate() {
            if let Some(options) = child.timing_mut() {
                options.delay += grid_distance(emanation, index, cols) * self.delay;
                options.easing = Some(self.easing.clone());
            }
        }
    }
}

/// Euclidean distance between two indices of a row-major grid with `cols`
/// columns. Indices past the nominal row count still resolve through the
/// same arithmetic.
fn grid_distance(a: usize, b: usize, cols: usize) -> f64 {
    let (ax, ay) = ((a % cols) as f64, (a / cols) as f64);
    let (bx, by) = ((b % cols) as f64, (b / cols) as f64);
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}
