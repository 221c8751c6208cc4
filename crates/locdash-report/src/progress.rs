//! Fixed-width glyph progress bars.

use serde::{Deserialize, Serialize};

/// Default bar width, in glyphs.
pub const DEFAULT_BAR_SIZE: usize = 20;

const DONE_GLYPH: &str = "🟪";
const OUTDATED_GLYPH: &str = "🟧";
const MISSING_GLYPH: &str = "⬜";

/// How to render a bar when the content set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTotalPolicy {
    /// An empty content set renders as fully translated.
    #[default]
    AllDone,
    /// An empty content set renders as entirely missing.
    Empty,
}

/// Split `size` blocks between the done, outdated, and missing counts.
///
/// The three results are non-negative and always sum to exactly `size`.
/// Rounding can push `outdated + missing` above the bar width; the larger
/// of the two absorbs the excess so the bar is never malformed.
pub fn block_counts(
    total: usize,
    outdated: usize,
    missing: usize,
    size: usize,
    zero_total: ZeroTotalPolicy,
) -> (usize, usize, usize) {
    if size == 0 {
        return (0, 0, 0);
    }
    if total == 0 {
        return match zero_total {
            ZeroTotalPolicy::AllDone => (size, 0, 0),
            ZeroTotalPolicy::Empty => (0, 0, size),
        };
    }

    let scale = |count: usize| -> i64 {
        let blocks = (count as f64 / total as f64) * size as f64;
        (blocks.round() as i64).clamp(0, size as i64)
    };

    let mut outdated_blocks = scale(outdated);
    let mut missing_blocks = scale(missing);
    let mut done_blocks = size as i64 - outdated_blocks - missing_blocks;

    if done_blocks < 0 {
        let excess = -done_blocks;
        if outdated_blocks >= missing_blocks {
            outdated_blocks -= excess;
        } else {
            missing_blocks -= excess;
        }
        done_blocks = 0;
    }

    (
        done_blocks as usize,
        outdated_blocks as usize,
        missing_blocks as usize,
    )
}

/// Render the progress bar span for one locale, `size` glyphs wide, in
/// done, outdated, missing order.
pub fn progress_bar(
    total: usize,
    outdated: usize,
    missing: usize,
    size: usize,
    zero_total: ZeroTotalPolicy,
) -> String {
    let (done_blocks, outdated_blocks, missing_blocks) =
        block_counts(total, outdated, missing, size, zero_total);

    let mut blocks = String::new();
    blocks.push_str(&DONE_GLYPH.repeat(done_blocks));
    blocks.push_str(&OUTDATED_GLYPH.repeat(outdated_blocks));
    blocks.push_str(&MISSING_GLYPH.repeat(missing_blocks));

    format!(r#"<span class="progress-bar" aria-hidden="true">{blocks}</span>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_count(bar: &str) -> usize {
        bar.chars()
            .filter(|c| matches!(c, '🟪' | '🟧' | '⬜'))
            .count()
    }

    #[test]
    fn test_blocks_sum_to_size() {
        for (total, outdated, missing) in [(3, 1, 1), (7, 2, 3), (10, 0, 0), (100, 33, 66)] {
            let (done, out, miss) =
                block_counts(total, outdated, missing, 20, ZeroTotalPolicy::default());
            assert_eq!(done + out + miss, 20, "total={total}");
        }
    }

    #[test]
    fn test_zero_total_does_not_divide() {
        assert_eq!(
            block_counts(0, 0, 0, 20, ZeroTotalPolicy::AllDone),
            (20, 0, 0)
        );
        assert_eq!(block_counts(0, 0, 0, 20, ZeroTotalPolicy::Empty), (0, 0, 20));
    }

    #[test]
    fn test_rounding_excess_absorbed_by_largest() {
        // 7/8 and 1/8 of 20 both round up, overshooting the bar width by one.
        let (done, outdated, missing) = block_counts(8, 7, 1, 20, ZeroTotalPolicy::default());
        assert_eq!(done, 0);
        assert_eq!(outdated, 17);
        assert_eq!(missing, 3);
        assert_eq!(done + outdated + missing, 20);
    }

    #[test]
    fn test_one_of_each_in_fixed_order() {
        let bar = progress_bar(3, 1, 1, 3, ZeroTotalPolicy::default());
        assert!(bar.contains("🟪🟧⬜"));
        assert_eq!(glyph_count(&bar), 3);
    }

    #[test]
    fn test_bar_length_matches_size() {
        let bar = progress_bar(7, 2, 3, 20, ZeroTotalPolicy::default());
        assert_eq!(glyph_count(&bar), 20);
    }

    #[test]
    fn test_zero_total_bar_is_well_formed() {
        let bar = progress_bar(0, 0, 0, 20, ZeroTotalPolicy::AllDone);
        assert_eq!(glyph_count(&bar), 20);
        assert!(!bar.contains('⬜'));
    }
}
