//! Cartesian product over option groups.
//!
//! Enumeration is an explicit odometer over per-group cursors, so depth does
//! not grow the call stack with the number of groups.

use variantgen_core::OptionId;

/// One option id per group, in group order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination(Vec<OptionId>);

impl Combination {
    pub fn option_ids(&self) -> &[OptionId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, option_id: &OptionId) -> bool {
        self.0.contains(option_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionId> {
        self.0.iter()
    }
}

impl From<Vec<OptionId>> for Combination {
    fn from(ids: Vec<OptionId>) -> Self {
        Self(ids)
    }
}

/// Lazy iterator over all combinations; the last group varies fastest.
#[derive(Debug, Clone)]
pub struct Combinations<'a, A> {
    axes: &'a [A],
    cursor: Option<Vec<usize>>,
}

impl<'a, A> Combinations<'a, A>
where
    A: AsRef<[OptionId]>,
{
    pub fn new(axes: &'a [A]) -> Self {
        let cursor = if axes.iter().any(|axis| axis.as_ref().is_empty()) {
            None
        } else {
            Some(vec![0; axes.len()])
        };
        Self { axes, cursor }
    }
}

impl<A> Iterator for Combinations<'_, A>
where
    A: AsRef<[OptionId]>,
{
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;

        let current: Vec<OptionId> = cursor
            .iter()
            .zip(self.axes)
            .map(|(&pos, axis)| axis.as_ref()[pos])
            .collect();

        let mut advanced = false;
        for slot in (0..cursor.len()).rev() {
            cursor[slot] += 1;
            if cursor[slot] < self.axes[slot].as_ref().len() {
                advanced = true;
                break;
            }
            cursor[slot] = 0;
        }
        if !advanced {
            self.cursor = None;
        }

        Some(Combination(current))
    }
}

/// All combinations in enumeration order.
pub fn enumerate<A: AsRef<[OptionId]>>(axes: &[A]) -> Vec<Combination> {
    Combinations::new(axes).collect()
}

/// `∏ |axis|`, saturating at `usize::MAX`. An empty axis makes it zero.
pub fn count_combinations<A: AsRef<[OptionId]>>(axes: &[A]) -> usize {
    axes.iter()
        .fold(1usize, |acc, axis| acc.saturating_mul(axis.as_ref().len()))
}
