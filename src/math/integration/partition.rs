/// A contiguous run of node indices handed to one worker.
///
/// `start` and `end` are both even. Neighbouring chunks share their boundary
/// node; it belongs to the chunk on its right, except for the final node,
/// which belongs to the last chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    /// Number of Simpson panels (node pairs) covered.
    pub fn pairs(&self) -> u64 {
        (self.end - self.start) / 2
    }
}

/// Splits the nodes `0..=subdivisions` into at most `parallelism` chunks.
///
/// Work is distributed in node pairs, so every boundary lands on an even
/// index. Earlier chunks take the remainder one pair each. When there are
/// fewer pairs than workers, one chunk per pair is produced. The output is
/// ordered by `index` and depends only on the two arguments.
pub fn partition(subdivisions: u64, parallelism: usize) -> Vec<Chunk> {
    debug_assert!(subdivisions >= 2 && subdivisions % 2 == 0);
    debug_assert!(parallelism >= 1);

    let pairs = subdivisions / 2;
    let count = (parallelism as u64).min(pairs).max(1);
    let base = pairs / count;
    let remainder = pairs % count;

    let mut chunks = Vec::with_capacity(count as usize);
    let mut start = 0;
    for index in 0..count {
        let len = base + u64::from(index < remainder);
        let end = start + 2 * len;
        chunks.push(Chunk {
            index: index as usize,
            start,
            end,
        });
        start = end;
    }
    chunks
}
