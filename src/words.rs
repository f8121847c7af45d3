//! Word extraction: derive the numbered across/down slot lists from a grid.
//!
//! A single linear scan per direction with a two-state run machine. Across
//! slots are numbered by scan rank; down slots reuse the across number when
//! they share a start cell and take fresh numbers otherwise, then the down
//! list is sorted by number. The whole result is recomputed on every grid
//! change; clue text is carried across recomputations by `merge_clues`.

use crate::types::{Direction, Grid, WordSlot};

/// Derive both slot lists from a grid. Pure and total: a 0-size grid yields
/// two empty lists.
pub fn extract(grid: &Grid) -> (Vec<WordSlot>, Vec<WordSlot>) {
    let across = scan(grid, Direction::Across);
    let mut down = scan(grid, Direction::Down);
    number_down(&across, &mut down);
    (across, down)
}

/// Scan one direction and collect un-numbered runs of open cells
/// (across slots come out already numbered by rank).
fn scan(grid: &Grid, dir: Direction) -> Vec<WordSlot> {
    let mut slots: Vec<WordSlot> = Vec::new();

    for line in 0..grid.size {
        let mut current: Option<WordSlot> = None;

        for pos in 0..grid.size {
            // Across walks a row left to right, down walks a column top to
            // bottom; a word never wraps past the end of its line.
            let (row, col) = match dir {
                Direction::Across => (line, pos),
                Direction::Down => (pos, line),
            };
            let cell = grid.get(row, col);

            if cell.enabled {
                let slot = current.get_or_insert_with(|| WordSlot {
                    row,
                    col,
                    pattern: String::new(),
                    number: 0,
                    clue: String::new(),
                });
                slot.pattern.push(cell.to_char());
            } else if let Some(slot) = current.take() {
                finish(&mut slots, slot);
            }
        }

        if let Some(slot) = current.take() {
            finish(&mut slots, slot);
        }
    }

    if dir == Direction::Across {
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.number = i as u32 + 1;
        }
    }
    slots
}

/// Emit a finished run. Length-1 slots are kept; the zero-length guard can't
/// trigger given the scan transitions but stays as a safety net.
fn finish(slots: &mut Vec<WordSlot>, slot: WordSlot) {
    if !slot.is_empty() {
        slots.push(slot);
    }
}

/// Number the down list against an already-numbered across list, then sort
/// it by number.
///
/// A down slot starting on an across slot's start cell shares that number;
/// every other down slot takes the next unused integer counting up from
/// `across.len() + 1`. Shared numbers follow across's row-major order while
/// down slots are discovered column-major, so the list can come out of
/// numeric order and needs the final sort.
fn number_down(across: &[WordSlot], down: &mut [WordSlot]) {
    let mut next = across.len() as u32 + 1;
    for slot in down.iter_mut() {
        match across.iter().find(|a| a.start() == slot.start()) {
            Some(shared) => slot.number = shared.number,
            None => {
                slot.number = next;
                next += 1;
            }
        }
    }
    down.sort_by_key(|s| s.number);
}

/// Carry clue text from the previous slot list into a freshly derived one,
/// matching by list index: new slot `i` inherits old slot `i`'s clue. Extra
/// new slots keep their empty clue.
pub fn merge_clues(old: &[WordSlot], new: &mut [WordSlot]) {
    for (slot, prev) in new.iter_mut().zip(old) {
        slot.clue = prev.clue.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(size: usize) -> Grid {
        Grid::new(size).unwrap()
    }

    fn starts(slots: &[WordSlot]) -> Vec<(usize, usize)> {
        slots.iter().map(|s| s.start()).collect()
    }

    fn numbers(slots: &[WordSlot]) -> Vec<u32> {
        slots.iter().map(|s| s.number).collect()
    }

    #[test]
    fn test_open_3x3_across() {
        let (across, _) = extract(&open_grid(3));
        assert_eq!(starts(&across), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(numbers(&across), vec![1, 2, 3]);
        assert!(across.iter().all(|s| s.pattern == "???"));
    }

    #[test]
    fn test_open_3x3_down_numbering() {
        // Only the (0,0) down slot shares a start with an across slot;
        // the other two take fresh numbers after across's 1..=3.
        let (_, down) = extract(&open_grid(3));
        assert_eq!(starts(&down), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(numbers(&down), vec![1, 4, 5]);
    }

    #[test]
    fn test_letters_appear_in_pattern() {
        let mut g = open_grid(3);
        g.set_value(0, 0, "c").unwrap();
        g.set_value(0, 2, "t").unwrap();

        let (across, down) = extract(&g);
        assert_eq!(across[0].pattern, "C?T");
        assert_eq!(down[0].pattern, "C??");
    }

    #[test]
    fn test_blocked_cell_splits_runs() {
        // Blocking the center of an open 3x3 splits the middle row and the
        // middle column into length-1 slots on each side.
        let mut g = open_grid(3);
        g.toggle_enabled(1, 1);

        let (across, down) = extract(&g);
        assert_eq!(across.len(), 4);
        assert_eq!(starts(&across), vec![(0, 0), (1, 0), (1, 2), (2, 0)]);
        assert_eq!(across[1].pattern, "?");
        assert_eq!(across[2].pattern, "?");

        assert_eq!(down.len(), 4);
        let mid: Vec<_> = down.iter().filter(|s| s.col == 1).collect();
        assert_eq!(mid.len(), 2);
        assert!(mid.iter().all(|s| s.pattern == "?"));
    }

    #[test]
    fn test_single_cell_slots_emitted() {
        // One open cell in a corner, everything else blocked.
        let mut g = open_grid(2);
        g.toggle_enabled(0, 1);
        g.toggle_enabled(1, 0);
        g.toggle_enabled(1, 1);

        let (across, down) = extract(&g);
        assert_eq!(across.len(), 1);
        assert_eq!(down.len(), 1);
        assert_eq!(across[0].pattern, "?");
        assert_eq!(across[0].number, 1);
        assert_eq!(down[0].number, 1);
    }

    #[test]
    fn test_fully_blocked_grid_yields_nothing() {
        let mut g = open_grid(3);
        for row in 0..3 {
            for col in 0..3 {
                g.toggle_enabled(row, col);
            }
        }
        let (across, down) = extract(&g);
        assert!(across.is_empty());
        assert!(down.is_empty());
    }

    #[test]
    fn test_no_wrap_across_rows() {
        // Adjacent fully open rows must still produce one slot per row.
        let (across, _) = extract(&open_grid(4));
        assert_eq!(across.len(), 4);
        assert!(across.iter().all(|s| s.len() == 4));
        assert!(across.iter().all(|s| s.col == 0));
    }

    #[test]
    fn test_no_wrap_down_columns() {
        let (_, down) = extract(&open_grid(4));
        assert_eq!(down.len(), 4);
        assert!(down.iter().all(|s| s.len() == 4));
        assert!(down.iter().all(|s| s.row == 0));
    }

    #[test]
    fn test_across_numbers_are_contiguous_ranks() {
        let mut g = open_grid(5);
        g.toggle_enabled(0, 2);
        g.toggle_enabled(2, 0);
        g.toggle_enabled(3, 3);

        let (across, _) = extract(&g);
        let expect: Vec<u32> = (1..=across.len() as u32).collect();
        assert_eq!(numbers(&across), expect);
    }

    #[test]
    fn test_down_sorted_and_shares_start_numbers() {
        let mut g = open_grid(5);
        g.toggle_enabled(0, 2);
        g.toggle_enabled(2, 0);
        g.toggle_enabled(3, 3);

        let (across, down) = extract(&g);
        let nums = numbers(&down);
        let mut sorted = nums.clone();
        sorted.sort();
        assert_eq!(nums, sorted);

        // Any down slot sharing a start cell with an across slot shares its
        // number; all other numbers lie past the across range.
        for slot in &down {
            match across.iter().find(|a| a.start() == slot.start()) {
                Some(a) => assert_eq!(slot.number, a.number),
                None => assert!(slot.number > across.len() as u32),
            }
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut g = open_grid(5);
        g.toggle_enabled(1, 1);
        g.toggle_enabled(3, 2);
        g.set_value(0, 0, "s").unwrap();

        let first = extract(&g);
        let second = extract(&g);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_size_grid_is_empty() {
        let g = Grid { size: 0, cells: Vec::new() };
        let (across, down) = extract(&g);
        assert!(across.is_empty());
        assert!(down.is_empty());
    }

    #[test]
    fn test_merge_clues_by_index() {
        let g = open_grid(3);
        let (mut old, _) = extract(&g);
        old[0].clue = "alpha".into();
        old[2].clue = "gamma".into();

        let (mut new, _) = extract(&g);
        merge_clues(&old, &mut new);
        assert_eq!(new[0].clue, "alpha");
        assert_eq!(new[1].clue, "");
        assert_eq!(new[2].clue, "gamma");
    }

    #[test]
    fn test_merge_clues_shrunk_list() {
        let g = open_grid(3);
        let (mut old, _) = extract(&g);
        for (i, slot) in old.iter_mut().enumerate() {
            slot.clue = format!("clue {i}");
        }

        // A structural edit that removes slots: clues past the new length
        // are dropped, the rest stay aligned by index.
        let mut edited = g.clone();
        edited.toggle_enabled(2, 0);
        edited.toggle_enabled(2, 1);
        edited.toggle_enabled(2, 2);

        let (mut new, _) = extract(&edited);
        merge_clues(&old, &mut new);
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].clue, "clue 0");
        assert_eq!(new[1].clue, "clue 1");
    }

    #[test]
    fn test_all_blocked_but_one_column() {
        let mut g = open_grid(3);
        for row in 0..3 {
            g.toggle_enabled(row, 0);
            g.toggle_enabled(row, 2);
        }

        let (across, down) = extract(&g);
        // Three length-1 across slots in the middle column, one down slot
        // spanning it; the down slot shares across slot 1's start.
        assert_eq!(across.len(), 3);
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].start(), (0, 1));
        assert_eq!(down[0].number, 1);
        assert_eq!(down[0].pattern, "???");
    }
}
