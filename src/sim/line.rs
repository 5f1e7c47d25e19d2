//! Line resolution: compact one row or column and merge equal neighbours

use super::cell::{Cell, TileIds};
use crate::consts::GRID_SIZE;

/// A row or column, ordered left-to-right or top-to-bottom
pub type Line = [Cell; GRID_SIZE];

/// Result of resolving one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLine {
    pub cells: Line,
    /// Number of pairwise merges performed
    pub merges: usize,
}

/// Compact the non-empty cells of `line` toward one end, merging equal pairs
///
/// The line is oriented so the target end is scanned first (reversed when
/// `toward_end` is set) and a single pending cell is carried along the scan.
/// A merged cell is emitted immediately and clears the pending slot, so a tile
/// takes part in at most one merge per pass: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
///
/// Cells that only slide keep their identity; merged cells get a fresh one
/// from `ids`.
pub fn resolve_line(line: Line, toward_end: bool, ids: &mut TileIds) -> ResolvedLine {
    let mut oriented = line;
    if toward_end {
        oriented.reverse();
    }

    let last = GRID_SIZE - 1;
    let mut emitted: Vec<Cell> = Vec::with_capacity(GRID_SIZE);
    let mut pending: Option<Cell> = None;
    let mut merges = 0;

    for (i, cell) in oriented.into_iter().enumerate() {
        match pending {
            // Pending is never empty, so an empty cell can't match here
            Some(held) if held.value == cell.value => {
                emitted.push(Cell::tile(held.value * 2, ids.next_id()));
                pending = None;
                merges += 1;
            }
            _ if !cell.is_empty() && i != last => {
                if let Some(held) = pending.replace(cell) {
                    emitted.push(held);
                }
            }
            _ if i == last => {
                if let Some(held) = pending.take() {
                    emitted.push(held);
                }
                if !cell.is_empty() {
                    emitted.push(cell);
                }
            }
            _ => {}
        }
    }

    // Pad away from the target end, then undo the orientation
    let mut cells = [Cell::EMPTY; GRID_SIZE];
    cells[..emitted.len()].copy_from_slice(&emitted);
    if toward_end {
        cells.reverse();
    }

    ResolvedLine { cells, merges }
}

/// Values of a line, for comparisons that ignore identity
pub fn line_values(line: &Line) -> [u32; GRID_SIZE] {
    line.map(|c| c.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::cell::TileId;
    use proptest::prelude::*;

    fn make_line(values: [u32; GRID_SIZE], ids: &mut TileIds) -> Line {
        values.map(|v| {
            if v == 0 {
                Cell::EMPTY
            } else {
                Cell::tile(v, ids.next_id())
            }
        })
    }

    fn resolve_values(values: [u32; GRID_SIZE], toward_end: bool) -> [u32; GRID_SIZE] {
        let mut ids = TileIds::default();
        let line = make_line(values, &mut ids);
        line_values(&resolve_line(line, toward_end, &mut ids).cells)
    }

    #[test]
    fn test_padding_side() {
        assert_eq!(resolve_values([2, 0, 0, 2], false), [4, 0, 0, 0]);
        assert_eq!(resolve_values([2, 0, 0, 2], true), [0, 0, 0, 4]);
    }

    #[test]
    fn test_merge_pairs() {
        assert_eq!(resolve_values([2, 2, 4, 4], false), [4, 8, 0, 0]);
        assert_eq!(resolve_values([2, 2, 4, 4], true), [0, 0, 4, 8]);
    }

    #[test]
    fn test_no_merge_compaction() {
        assert_eq!(resolve_values([0, 2, 0, 4], false), [2, 4, 0, 0]);
        assert_eq!(resolve_values([2, 0, 4, 0], true), [0, 0, 2, 4]);
    }

    #[test]
    fn test_single_merge_per_pass() {
        assert_eq!(resolve_values([2, 2, 2, 2], false), [4, 4, 0, 0]);
        assert_eq!(resolve_values([4, 2, 2, 0], false), [4, 4, 0, 0]);
        assert_eq!(resolve_values([4, 4, 8, 0], false), [8, 8, 0, 0]);
    }

    #[test]
    fn test_odd_run_merges_nearest_target() {
        // Toward the end, the pair nearest the end merges first
        assert_eq!(resolve_values([2, 2, 2, 0], true), [0, 0, 2, 4]);
        assert_eq!(resolve_values([2, 2, 2, 0], false), [4, 2, 0, 0]);
    }

    #[test]
    fn test_empty_line_stays_empty() {
        let mut ids = TileIds::default();
        let resolved = resolve_line([Cell::EMPTY; GRID_SIZE], false, &mut ids);
        assert_eq!(resolved.cells, [Cell::EMPTY; GRID_SIZE]);
        assert_eq!(resolved.merges, 0);
    }

    #[test]
    fn test_identity_kept_on_slide_and_fresh_on_merge() {
        let mut ids = TileIds::default();
        let line = make_line([0, 8, 2, 2], &mut ids);
        let eight = line[1].id;
        let pair = [line[2].id, line[3].id];

        let resolved = resolve_line(line, false, &mut ids);
        assert_eq!(line_values(&resolved.cells), [8, 4, 0, 0]);
        assert_eq!(resolved.merges, 1);
        assert_eq!(resolved.cells[0].id, eight);

        let merged = resolved.cells[1].id.unwrap();
        assert!(!pair.contains(&Some(merged)));
        assert!(merged > TileId(3));
        assert_eq!(resolved.cells[2].id, None);
        assert_eq!(resolved.cells[3].id, None);
    }

    fn arb_value() -> impl Strategy<Value = u32> {
        prop_oneof![Just(0u32), (1u32..8).prop_map(|exp| 1u32 << exp)]
    }

    fn arb_values() -> impl Strategy<Value = [u32; GRID_SIZE]> {
        prop::array::uniform4(arb_value())
    }

    proptest! {
        #[test]
        fn prop_sum_conserved_and_count_non_increasing(
            values in arb_values(),
            toward_end in any::<bool>(),
        ) {
            let out = resolve_values(values, toward_end);
            let sum = |v: &[u32; GRID_SIZE]| v.iter().sum::<u32>();
            let count = |v: &[u32; GRID_SIZE]| v.iter().filter(|&&x| x != 0).count();
            prop_assert_eq!(sum(&out), sum(&values));
            prop_assert!(count(&out) <= count(&values));
        }

        #[test]
        fn prop_no_chain_merges(values in arb_values(), toward_end in any::<bool>()) {
            let out = resolve_values(values, toward_end);
            let max_in = values.iter().copied().max().unwrap_or(0);
            for v in out {
                prop_assert!(v <= max_in * 2);
            }
        }

        #[test]
        fn prop_compacted_toward_target(values in arb_values(), toward_end in any::<bool>()) {
            let mut out = resolve_values(values, toward_end);
            if toward_end {
                out.reverse();
            }
            let filled = out.iter().take_while(|&&v| v != 0).count();
            prop_assert!(out[filled..].iter().all(|&v| v == 0));
        }

        #[test]
        fn prop_stable_line_is_fixed_point(values in arb_values(), toward_end in any::<bool>()) {
            let mut ids = TileIds::default();
            let first = resolve_line(make_line(values, &mut ids), toward_end, &mut ids).cells;
            let stable = first
                .windows(2)
                .all(|w| w[0].is_empty() || w[0].value != w[1].value);
            if stable {
                let second = resolve_line(first, toward_end, &mut ids);
                prop_assert_eq!(second.cells, first);
                prop_assert_eq!(second.merges, 0);
            }
        }
    }
}
