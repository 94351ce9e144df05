//! Puzzle generation for the endless Sudoku board.
//!
//! Generation runs in phases. The shared corner blocks are fixed first, one
//! block at a time by a small depth-first search that validates every digit
//! against both boxes owning the block. With all corners pinned, the boxes
//! decouple: each box is then completed independently (forced cells first,
//! then a per-box depth-first search over the remaining empties). A dead end
//! anywhere restarts the whole attempt with fresh randomness. Finally,
//! roughly half of the digits are removed to leave the clues. Uniqueness of
//! the solution is not a goal; the board is endless and played casually, not
//! competitively.

use infinidoku_core::{BoardLayout, Block, validate};
use rand::prelude::*;
use rand_pcg::Pcg64Mcg;

/// Seed for the non-randomized board (the menu's backdrop).
const FIXED_SEED: u64 = 0x1d1a_60d0;

/// Probability that a filled cell survives clue removal.
const CLUE_KEEP_PROBABILITY: f64 = 0.5;

/// The corner blocks a box stores itself; the other two corners belong to
/// neighbors and are filled when those boxes are visited.
const STORED_CORNERS: [Block; 2] = [Block::BottomLeft, Block::BottomRight];

/// Generates an `n × m` puzzle board in packed storage order.
///
/// With `randomize` set, every call produces a fresh board; without it, the
/// board is the same every time (used for the placeholder behind the menu).
#[must_use]
pub fn generate(n: usize, m: usize, randomize: bool) -> Box<[u8]> {
    let seed = if randomize { rand::random() } else { FIXED_SEED };
    generate_seeded(n, m, seed)
}

/// Generates the puzzle board for a specific seed. Deterministic: the same
/// seed and dimensions always produce the same board.
#[must_use]
pub fn generate_seeded(n: usize, m: usize, seed: u64) -> Box<[u8]> {
    let layout = BoardLayout::new(n, m);
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut cells = fill_board(&layout, &mut rng);

    for byte in &mut cells {
        if !rng.random_bool(CLUE_KEEP_PROBABILITY) {
            *byte = 0;
        }
    }
    cells
}

/// Fills a whole board, restarting on dead ends. Dead ends are rare and an
/// attempt is cheap, so this converges quickly.
fn fill_board(layout: &BoardLayout, rng: &mut Pcg64Mcg) -> Box<[u8]> {
    loop {
        if let Some(cells) = try_fill(layout, rng) {
            return cells;
        }
    }
}

fn placement_ok(cells: &[u8], layout: &BoardLayout, index: usize) -> bool {
    layout
        .owning_boxes(index)
        .all(|(x, y)| !validate::cell_is_problematic(cells, layout, x, y, index))
}

/// One whole-board fill attempt: corner blocks first, then every box on its
/// own. `None` on any dead end; the caller retries with new randomness.
fn try_fill(layout: &BoardLayout, rng: &mut Pcg64Mcg) -> Option<Box<[u8]>> {
    let mut cells = vec![0_u8; layout.cell_count()].into_boxed_slice();

    for y in 0..layout.m {
        for x in 0..layout.n {
            for block in STORED_CORNERS {
                if !fill_corner_block(&mut cells, layout, layout.block_indices(x, y, block), rng) {
                    return None;
                }
            }
        }
    }

    for y in 0..layout.m {
        for x in 0..layout.n {
            solve_trivial_regions(&mut cells, layout, x, y);
            if !solve_box(&mut cells, layout, x, y) {
                return None;
            }
        }
    }

    // The per-box passes only validate the cells they place; a clash seeded
    // across aliased corner positions surfaces here instead.
    if !validate::is_solved(&cells, layout) {
        return None;
    }
    Some(cells)
}

/// Fills one shared corner block by depth-first search with chronological
/// backtracking, digits tried in a shuffled per-block order. Every placement
/// must satisfy the constraints of both boxes owning the block.
fn fill_corner_block(
    cells: &mut [u8],
    layout: &BoardLayout,
    indices: [usize; 9],
    rng: &mut Pcg64Mcg,
) -> bool {
    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);

    let mut tried = [0_usize; 9];
    let mut i = 0;
    while i < 9 {
        let index = indices[i];
        let mut placed = false;
        while tried[i] < 9 {
            cells[index] = digits[tried[i]];
            tried[i] += 1;
            if placement_ok(cells, layout, index) {
                placed = true;
                break;
            }
        }

        if placed {
            i += 1;
        } else {
            cells[index] = 0;
            tried[i] = 0;
            if i == 0 {
                return false;
            }
            i -= 1;
        }
    }
    true
}

/// Fills every region of box `(x, y)` that is one cell short of complete,
/// repeating until nothing changes. The forced value is not validated here;
/// an inconsistent region leaves the box unsolvable and the attempt restarts.
fn solve_trivial_regions(cells: &mut [u8], layout: &BoardLayout, x: usize, y: usize) {
    let mut regions: Vec<[usize; 9]> = (0..9)
        .flat_map(|i| {
            [
                layout.row_indices(x, y, i),
                layout.column_indices(x, y, i),
                layout.block_indices(x, y, Block::ALL[i]),
            ]
        })
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        regions.retain(|&region| {
            let mut seen: u16 = 0;
            let mut empties = 0;
            for i in region {
                seen |= 1 << cells[i];
                if cells[i] == 0 {
                    empties += 1;
                }
            }

            if empties == 1
                && let Some(missing) = (1..=9).find(|&v| seen & (1 << v) == 0)
            {
                for i in region {
                    if cells[i] == 0 {
                        cells[i] = missing;
                        changed = true;
                        break;
                    }
                }
                return false;
            }
            empties > 0
        });
    }
}

/// Completes the empty cells of box `(x, y)` by depth-first search, digits
/// tried in ascending order (randomness comes from the corner blocks).
/// Interior cells belong to exactly one box, so validating against this
/// box's regions alone is complete.
fn solve_box(cells: &mut [u8], layout: &BoardLayout, x: usize, y: usize) -> bool {
    let empties: Vec<usize> = Block::ALL
        .into_iter()
        .flat_map(|block| layout.block_indices(x, y, block))
        .filter(|&i| cells[i] == 0)
        .collect();

    let mut guesses: Vec<usize> = Vec::new();
    let mut i = 0;
    while i < empties.len() {
        let index = empties[i];
        cells[index] += 1;
        while cells[index] < 9 && validate::cell_is_problematic(cells, layout, x, y, index) {
            cells[index] += 1;
        }

        if validate::cell_is_problematic(cells, layout, x, y, index) {
            // No digit fits; unwind to the most recent guess with room left.
            while cells[empties[i]] == 9 {
                cells[empties[i]] = 0;
                let Some(previous) = guesses.pop() else {
                    return false;
                };
                i = previous;
            }
        } else {
            guesses.push(i);
            i += 1;
        }
    }
    true
}
