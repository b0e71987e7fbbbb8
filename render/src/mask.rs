//! Activity Masks
//!
//! Every evaluation in this crate is batched: a call carries one interaction
//! record per lane plus a [`Mask`] saying which lanes are live. Inactive
//! lanes receive the output type's zero value and must never influence an
//! active lane's result. The [`masked_map`]/[`masked_map2`] helpers give
//! implementations that guarantee for free by only ever touching active
//! lanes.

use std::ops::Index;

/// Per-lane boolean vector gating which elements of a batched evaluation are
/// meaningful. A scalar call is a 1-lane batch with a fully active mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Lane activity flags.
    lanes: Vec<bool>,
}

impl Mask {
    /// Create a fully active mask.
    ///
    /// * `n` - Number of lanes.
    pub fn all(n: usize) -> Self {
        Self {
            lanes: vec![true; n],
        }
    }

    /// Create a fully inactive mask.
    ///
    /// * `n` - Number of lanes.
    pub fn none(n: usize) -> Self {
        Self {
            lanes: vec![false; n],
        }
    }

    /// Returns the number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Returns true if the mask has no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Returns the activity of a lane.
    ///
    /// * `lane` - The lane index.
    pub fn test(&self, lane: usize) -> bool {
        self.lanes[lane]
    }

    /// Sets the activity of a lane.
    ///
    /// * `lane`   - The lane index.
    /// * `active` - The new activity.
    pub fn set(&mut self, lane: usize, active: bool) {
        self.lanes[lane] = active;
    }

    /// Returns true if any lane is active.
    pub fn any(&self) -> bool {
        self.lanes.iter().any(|l| *l)
    }

    /// Returns true if every lane is active.
    pub fn all_active(&self) -> bool {
        self.lanes.iter().all(|l| *l)
    }

    /// Returns an iterator over the indices of the active lanes.
    pub fn active_lanes(&self) -> impl Iterator<Item = usize> + '_ {
        self.lanes
            .iter()
            .enumerate()
            .filter(|(_, l)| **l)
            .map(|(i, _)| i)
    }
}

impl From<Vec<bool>> for Mask {
    /// Create a mask from per-lane activity flags.
    ///
    /// * `lanes` - The activity flags.
    fn from(lanes: Vec<bool>) -> Self {
        Self { lanes }
    }
}

impl From<&[bool]> for Mask {
    /// Create a mask from per-lane activity flags.
    ///
    /// * `lanes` - The activity flags.
    fn from(lanes: &[bool]) -> Self {
        Self {
            lanes: lanes.to_vec(),
        }
    }
}

impl Index<usize> for Mask {
    type Output = bool;

    /// Returns the activity of a lane.
    ///
    /// * `lane` - The lane index.
    fn index(&self, lane: usize) -> &Self::Output {
        &self.lanes[lane]
    }
}

/// Evaluates a per-lane function on every active lane and fills inactive
/// lanes with the output type's default (zero) value. The per-lane function
/// is never called for an inactive lane, so active lanes are bit-identical
/// to a call made with only those lanes present.
///
/// * `items`  - One input record per lane.
/// * `active` - The activity mask; must have one flag per lane.
/// * `f`      - The per-lane function.
pub fn masked_map<I, T, F>(items: &[I], active: &Mask, f: F) -> Vec<T>
where
    T: Default,
    F: Fn(&I) -> T,
{
    debug_assert_eq!(items.len(), active.len());
    items
        .iter()
        .enumerate()
        .map(|(lane, item)| {
            if active.test(lane) {
                f(item)
            } else {
                T::default()
            }
        })
        .collect()
}

/// Two-input variant of `masked_map` for operations that consume a second
/// per-lane record such as a sample.
///
/// * `items`   - One input record per lane.
/// * `samples` - One secondary record per lane.
/// * `active`  - The activity mask; must have one flag per lane.
/// * `f`       - The per-lane function.
pub fn masked_map2<I, S, T, F>(items: &[I], samples: &[S], active: &Mask, f: F) -> Vec<T>
where
    T: Default,
    F: Fn(&I, &S) -> T,
{
    debug_assert_eq!(items.len(), active.len());
    debug_assert_eq!(samples.len(), active.len());
    items
        .iter()
        .zip(samples.iter())
        .enumerate()
        .map(|(lane, (item, sample))| {
            if active.test(lane) {
                f(item, sample)
            } else {
                T::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_none_set_every_lane() {
        assert!(Mask::all(4).all_active());
        assert!(!Mask::none(4).any());
        assert_eq!(Mask::all(4).len(), 4);
    }

    #[test]
    fn active_lanes_yields_only_live_indices() {
        let m = Mask::from(vec![true, false, true, false]);
        let lanes: Vec<usize> = m.active_lanes().collect();
        assert_eq!(lanes, vec![0, 2]);
    }

    #[test]
    fn masked_map_zero_fills_inactive_lanes() {
        let items = [1.0f32, 2.0, 3.0];
        let m = Mask::from(vec![true, false, true]);
        let out = masked_map(&items, &m, |v| v * 2.0);
        assert_eq!(out, vec![2.0, 0.0, 6.0]);
    }

    #[test]
    fn masked_map_never_calls_inactive_lanes() {
        let items = [0.0f32, 1.0];
        let m = Mask::from(vec![false, true]);
        // A lane function that would blow up on the inactive lane's input.
        let out = masked_map(&items, &m, |v| 1.0 / v);
        assert_eq!(out, vec![0.0, 1.0]);
    }

    #[test]
    fn masked_map2_pairs_lanes_positionally() {
        let items = [1.0f32, 2.0];
        let samples = [10.0f32, 20.0];
        let m = Mask::all(2);
        let out = masked_map2(&items, &samples, &m, |a, b| a + b);
        assert_eq!(out, vec![11.0, 22.0]);
    }
}
