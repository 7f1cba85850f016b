//! Queue shuffle
//!
//! Uniform Fisher-Yates shuffle that can keep the current entry anchored at
//! its index so enabling shuffle never changes what is playing.

use rand::seq::SliceRandom;
use rand::thread_rng;
use verse_core::QueueEntry;

/// Shuffle `entries` uniformly, keeping the entry at `anchor` at its index
///
/// With an anchor, the anchored entry is taken out, the rest are permuted,
/// and the anchor is reinserted where it was. Without one the whole queue
/// is permuted.
pub(crate) fn shuffle_keeping_anchor(entries: &mut Vec<QueueEntry>, anchor: Option<usize>) {
    let mut rng = thread_rng();

    match anchor {
        Some(index) if index < entries.len() => {
            let current = entries.remove(index);
            entries.shuffle(&mut rng);
            entries.insert(index, current);
        }
        _ => entries.shuffle(&mut rng),
    }
}
