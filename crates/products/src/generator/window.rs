/// Optional `[offset, offset + limit)` window over the enumerated combinations.
///
/// The window only narrows when both bounds are given. Out-of-range bounds are
/// clamped, never rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Window {
    offset: Option<usize>,
    limit: Option<usize>,
}

impl Window {
    pub fn new(offset: Option<usize>, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    /// Pass everything through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(offset: usize, limit: usize) -> Self {
        Self::new(Some(offset), Some(limit))
    }

    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.offset.zip(self.limit)
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.bounds() {
            Some((offset, limit)) => items.into_iter().skip(offset).take(limit).collect(),
            None => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_takes_contiguous_slice() {
        assert_eq!(Window::page(1, 2).apply(vec![1, 2, 3, 4]), vec![2, 3]);
    }

    #[test]
    fn missing_bound_passes_everything_through() {
        let items = vec![1, 2, 3];
        assert_eq!(Window::new(Some(1), None).apply(items.clone()), items);
        assert_eq!(Window::new(None, Some(1)).apply(items.clone()), items);
        assert_eq!(Window::all().apply(items.clone()), items);
    }

    #[test]
    fn out_of_range_bounds_are_clamped() {
        assert_eq!(Window::page(3, 10).apply(vec![1, 2, 3, 4]), vec![4]);
        assert!(Window::page(10, 2).apply(vec![1, 2, 3, 4]).is_empty());
        assert!(Window::page(0, 0).apply(vec![1, 2]).is_empty());
        assert_eq!(Window::page(usize::MAX, usize::MAX).apply(vec![1]), Vec::<i32>::new());
    }
}
