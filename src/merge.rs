use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A prime in the merged output, tagged with the bucket (worker) that found
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedPrime {
    pub value: u64,
    pub bucket: usize,
}

/// K-way merge of per-worker prime buckets into one ascending sequence.
///
/// Each bucket is already sorted ascending because its worker scanned a
/// contiguous sub-range monotonically. The heap is seeded with the head of
/// every non-empty bucket; popping the minimum and pushing that bucket's
/// next element yields the full sorted sequence in O(N log K).
pub fn kway_merge(buckets: &[Vec<u64>]) -> Vec<MergedPrime> {
    // Min-heap over (value, bucket, position) via Reverse
    let mut heap = BinaryHeap::with_capacity(buckets.len());
    for (bucket, primes) in buckets.iter().enumerate() {
        if let Some(&head) = primes.first() {
            heap.push(Reverse((head, bucket, 0usize)));
        }
    }

    let total: usize = buckets.iter().map(|b| b.len()).sum();
    let mut merged = Vec::with_capacity(total);
    while let Some(Reverse((value, bucket, pos))) = heap.pop() {
        merged.push(MergedPrime { value, bucket });
        let next = pos + 1;
        if let Some(&v) = buckets[bucket].get(next) {
            heap.push(Reverse((v, bucket, next)));
        }
    }
    merged
}
