//! Podium layout for the top finishers.
//!
//! Each podium column is a stack of two-block layers that fall into place
//! one after another. Column height follows the score relative to the best
//! score on the podium, with the winner always tallest.

use crate::standings::LeaderboardEntry;

/// Number of entries shown on the podium.
pub const PODIUM_SIZE: usize = 4;

/// Layers in the shortest column.
pub const MIN_BLOCKS: u32 = 4;

/// Layers in the winner's column.
pub const MAX_BLOCKS: u32 = 15;

/// Seconds between two layers of one column landing.
const LAYER_DELAY_SECS: f64 = 0.2;

/// Extra delay per rank so lower columns start later.
const RANK_DELAY_SECS: f64 = 0.1;

/// Largest tilt, in degrees, either way.
const MAX_TILT_DEG: f64 = 4.0;

/// One falling layer of a podium column.
#[derive(Debug, Clone, PartialEq)]
pub struct PodiumLayer {
    delay_secs: f64,
    rotation_deg: f64,
}

impl PodiumLayer {
    /// Animation delay before the layer falls.
    pub fn delay_secs(&self) -> f64 {
        self.delay_secs
    }

    /// Slight tilt of the layer while falling.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }
}

/// Podium column for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PodiumColumn<'a> {
    entry: &'a LeaderboardEntry,
    layers: Vec<PodiumLayer>,
}

impl<'a> PodiumColumn<'a> {
    /// Entry shown in this column.
    pub fn entry(&self) -> &'a LeaderboardEntry {
        self.entry
    }

    /// Number of layers stacked in the column.
    pub fn block_count(&self) -> u32 {
        self.layers.len() as u32
    }

    /// Layers from top to bottom.
    pub fn layers(&self) -> &[PodiumLayer] {
        &self.layers
    }

    /// Whether the column belongs to the winner.
    pub fn is_winner(&self) -> bool {
        self.entry.rank() == 1
    }

    /// GitHub avatar for the participant.
    pub fn avatar_url(&self) -> String {
        format!("https://github.com/{}.png?size=64", self.entry.name())
    }

    /// Identicon used when the participant has no GitHub avatar.
    pub fn fallback_avatar_url(&self) -> String {
        format!(
            "https://github.com/identicons/{}.png",
            encode_path_segment(self.entry.name())
        )
    }
}

/// Builds podium columns for the first [`PODIUM_SIZE`] entries.
///
/// # Arguments
///
/// * `entries`: Entries sorted by rank, as returned by the standings parser
///
/// # Returns
///
/// Up to four columns in rank order
pub fn build_podium(entries: &[LeaderboardEntry]) -> Vec<PodiumColumn<'_>> {
    let top = &entries[..entries.len().min(PODIUM_SIZE)];
    let max_score = top.iter().map(LeaderboardEntry::score).max().unwrap_or(0);

    top.iter()
        .map(|entry| {
            let count = block_count(entry, max_score);
            let layers = (0..count)
                .map(|i| PodiumLayer {
                    delay_secs: f64::from(count - i - 1) * LAYER_DELAY_SECS
                        + f64::from(entry.rank()) * RANK_DELAY_SECS,
                    rotation_deg: tilt(entry.name(), i),
                })
                .collect();
            PodiumColumn { entry, layers }
        })
        .collect()
}

/// Column height for an entry given the best score on the podium.
pub fn block_count(entry: &LeaderboardEntry, max_score: u64) -> u32 {
    if entry.rank() == 1 {
        return MAX_BLOCKS;
    }
    if max_score == 0 {
        return MIN_BLOCKS;
    }

    let relative = entry.score() as f64 / max_score as f64;
    let scaled = (relative * f64::from(MAX_BLOCKS)).floor() as u32;
    scaled.clamp(MIN_BLOCKS, MAX_BLOCKS)
}

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Stable pseudo random tilt in `[-MAX_TILT_DEG, MAX_TILT_DEG]`.
fn tilt(name: &str, layer: u32) -> f64 {
    let h = hash(&format!("{}#{}", name, layer));
    let unit = (h % 10_001) as f64 / 10_000.0;
    let degrees = (unit - 0.5) * 2.0 * MAX_TILT_DEG;
    (degrees * 100.0).round() / 100.0
}

/// Percent-encodes everything except unreserved URL characters.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for b in segment.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            encoded.push(b as char);
        } else {
            encoded.push_str(&format!("%{:02X}", b));
        }
    }
    encoded
}
