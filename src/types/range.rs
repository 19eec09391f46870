//! Resolution of `slice` bounds
//!
//! Negative offsets count back from the end, and every offset is clamped
//! into `[0, len]`. A start past the end yields an empty range.

/// Resolve a single possibly-negative offset against `len`
#[inline]
pub(crate) fn resolve_index(index: i64, len: u64) -> u64 {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as u64).min(len)
    }
}

/// Resolve optional `start`/`end` into an effective `(begin, end)` with `begin <= end`
#[inline]
pub(crate) fn resolve_range(start: Option<i64>, end: Option<i64>, len: u64) -> (u64, u64) {
    let begin = start.map_or(0, |s| resolve_index(s, len));
    let end = end.map_or(len, |e| resolve_index(e, len));
    (begin, end.max(begin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let cases: &[(Option<i64>, Option<i64>, (u64, u64))] = &[
            (None, None, (0, 10)),
            (Some(2), None, (2, 10)),
            (Some(-2), None, (8, 10)),
            (Some(2), Some(6), (2, 6)),
            (Some(2), Some(-2), (2, 8)),
            (Some(20), None, (10, 10)),
            (Some(-100), None, (0, 10)),
            (Some(0), Some(-100), (0, 0)),
            (Some(-4), Some(-2), (6, 8)),
        ];
        for &(start, end, expected) in cases {
            assert_eq!(resolve_range(start, end, 10), expected, "{start:?}..{end:?}");
        }
    }

    #[test]
    fn inverted_range_is_empty() {
        let (b, e) = resolve_range(Some(7), Some(3), 10);
        assert_eq!(e - b, 0);
    }

    #[test]
    fn extreme_offsets() {
        assert_eq!(resolve_index(i64::MIN, 10), 0);
        assert_eq!(resolve_index(i64::MAX, 10), 10);
        assert_eq!(resolve_index(-1, 0), 0);
    }
}
