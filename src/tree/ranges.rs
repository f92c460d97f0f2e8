//! Finding and replacing runs of consecutive matching elements.

/// Half-open index range, with the same meaning as a slice range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Inclusive.
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find maximal runs of elements satisfying `predicate`, left to right.
///
/// Returned ranges are ordered, non-empty, and never overlap or touch.
pub fn find_runs<T, P>(items: &[T], predicate: P) -> Vec<Range>
where
    P: Fn(&T) -> bool,
{
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, item) in items.iter().enumerate() {
        if predicate(item) {
            if run_start.is_none() {
                run_start = Some(idx);
            }
        } else if let Some(start) = run_start.take() {
            ranges.push(Range::new(start, idx));
        }
    }
    // Trailing run
    if let Some(start) = run_start {
        ranges.push(Range::new(start, items.len()));
    }

    ranges
}

/// Rebuild `items` with every range replaced by `replace(slice)`.
///
/// `ranges` must be ordered by `start` and must not overlap; this is not
/// checked. The replacement may be empty or longer than the slice.
pub fn replace_runs<T, F>(items: Vec<T>, ranges: &[Range], mut replace: F) -> Vec<T>
where
    F: FnMut(Vec<T>) -> Vec<T>,
{
    if ranges.is_empty() {
        return items;
    }

    let mut result = Vec::with_capacity(items.len());
    let mut rest = items.into_iter();
    let mut last = 0;

    for range in ranges {
        result.extend(rest.by_ref().take(range.start - last));
        let slice: Vec<T> = rest.by_ref().take(range.len()).collect();
        result.extend(replace(slice));
        last = range.end;
    }
    result.extend(rest);

    result
}
