/// A contiguous sub-range assigned to one worker, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRange {
    pub index: usize,
    pub low: u64,
    pub high: u64,
}

impl SubRange {
    /// Number of candidates in this sub-range. Never zero: zero-length
    /// sub-ranges are not constructed.
    pub fn count(&self) -> u64 {
        self.high - self.low + 1
    }
}

/// Split the inclusive range [low, high] into at most `workers` contiguous
/// sub-ranges.
///
/// Sizes are floor(span/workers) or floor(span/workers)+1; the first
/// span % workers sub-ranges get the extra element. When workers exceeds the
/// span, the trailing zero-length sub-ranges are omitted entirely, so the
/// caller may launch fewer threads than configured.
pub fn split_range(low: u64, high: u64, workers: usize) -> Vec<SubRange> {
    let workers = workers.max(1);
    let span = if high >= low { high - low + 1 } else { 0 };
    let chunk = span / workers as u64;
    let rem = span % workers as u64;

    let mut parts = Vec::with_capacity(workers);
    let mut start = low;
    for index in 0..workers {
        let len = chunk + if (index as u64) < rem { 1 } else { 0 };
        if len == 0 {
            break;
        }
        parts.push(SubRange {
            index,
            low: start,
            high: start + len - 1,
        });
        start += len;
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition_properties(low: u64, high: u64, workers: usize) {
        let parts = split_range(low, high, workers);
        let span = high - low + 1;

        // Union is exactly [low, high] with no gaps or overlaps
        let mut expected_next = low;
        for part in &parts {
            assert_eq!(part.low, expected_next);
            assert!(part.high >= part.low);
            expected_next = part.high + 1;
        }
        assert_eq!(expected_next, high + 1);

        // Sizes differ by at most 1
        let min_count = parts.iter().map(|p| p.count()).min().unwrap();
        let max_count = parts.iter().map(|p| p.count()).max().unwrap();
        assert!(max_count - min_count <= 1);

        assert_eq!(parts.iter().map(|p| p.count()).sum::<u64>(), span);
        assert!(parts.len() <= workers);
    }

    #[test]
    fn test_partition_properties() {
        for workers in [1, 2, 3, 4, 7, 8, 16] {
            assert_partition_properties(2, 100_000, workers);
            assert_partition_properties(2, 20, workers);
            assert_partition_properties(0, 0, workers);
        }
    }

    #[test]
    fn test_concrete_two_worker_split() {
        // span=19, chunk=9, rem=1: first worker gets [2,11], second [12,20]
        let parts = split_range(2, 20, 2);
        assert_eq!(
            parts,
            vec![
                SubRange { index: 0, low: 2, high: 11 },
                SubRange { index: 1, low: 12, high: 20 },
            ]
        );
    }

    #[test]
    fn test_more_workers_than_span() {
        let parts = split_range(2, 4, 8);
        assert_eq!(parts.len(), 3);
        assert_eq!(
            parts,
            vec![
                SubRange { index: 0, low: 2, high: 2 },
                SubRange { index: 1, low: 3, high: 3 },
                SubRange { index: 2, low: 4, high: 4 },
            ]
        );
    }

    #[test]
    fn test_empty_range() {
        assert!(split_range(10, 5, 4).is_empty());
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        let parts = split_range(2, 10, 0);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].low, 2);
        assert_eq!(parts[0].high, 10);
    }
}
