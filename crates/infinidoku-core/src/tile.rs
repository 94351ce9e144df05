//! The tile coordinate mapper: continuous world-space point to cell address.
//!
//! World space is tiled by a 12×12 repeating unit containing one full box
//! plus the padding the diamond arrangement leaves around it. A point's
//! position within its tile decides which of the surrounding boxes it
//! belongs to (the tile's own box, or a diagonal neighbor reached through a
//! shared corner block), and two 3×3 quadrants of every tile are dead space
//! between boxes and map to no cell at all.
//!
//! The quadrant of the point (each tile splits into 4×4 quadrants of 3×3
//! world units) drives three corrections:
//!
//! - the left edge (`qx = 0`, upper half) belongs to the box one step down
//!   the skew lattice,
//! - the right half (`qx >= 2`, upper half) to the box one step right,
//! - the bottom-right corner (`qx = 3`, `qy = 3`) to the box one step up.
//!
//! Each correction moves the box coordinate by one lattice step and the
//! in-box cell coordinate by half a box (±6, wrapped in the tile). The
//! vertical cell coordinate is additionally offset by 3: the diamond lattice
//! shifts boxes half a block against the tile grid.

use crate::layout::BoardLayout;

/// World-space edge length of the repeating tile.
pub const TILE_SIZE: f64 = 12.0;

/// A discrete cell address: box coordinates on the wrapped lattice plus cell
/// coordinates within the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    /// Box column, `0..n`.
    pub sx: usize,
    /// Box row, `0..m`.
    pub sy: usize,
    /// Cell column within the box, `0..9`.
    pub scx: u8,
    /// Cell row within the box (0 = top), `0..9`.
    pub scy: u8,
}

fn wrap_lattice(value: f64, modulus: usize) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let wrapped = rounded.rem_euclid(modulus as i64) as usize;
    wrapped
}

/// Resolves a world-space point to the cell it covers on an `n × m` board.
///
/// Returns `None` for non-finite input (the "no selection" sentinel), for
/// points in the dead zones between boxes, and for the padding fringe of the
/// tile.
#[must_use]
pub fn resolve(bx: f64, by: f64, n: usize, m: usize) -> Option<CellAddress> {
    if !bx.is_finite() || !by.is_finite() {
        return None;
    }

    let mut fx = (bx / TILE_SIZE).floor();
    let mut fy = (by / TILE_SIZE).floor();
    let mut lx = bx.rem_euclid(TILE_SIZE);
    let mut ly = by.rem_euclid(TILE_SIZE);
    // For a point a sub-ulp below a tile seam, rem_euclid rounds up to the
    // modulus itself; fold that onto the start of the next tile.
    if lx >= TILE_SIZE {
        lx = 0.0;
        fx += 1.0;
    }
    if ly >= TILE_SIZE {
        ly = 0.0;
        fy += 1.0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (qx, qy) = ((lx / 3.0) as u8, (ly / 3.0) as u8);
    if (qx, qy) == (1, 0) || (qx, qy) == (3, 2) {
        return None;
    }
    let top_left = qx == 0 && qy < 2;
    let top_right = qx >= 2 && qy < 2;
    let bottom_right = qx == 3 && qy == 3;

    // Box coordinates on the skew lattice, from the tile index plus the
    // quadrant correction, wrapped onto the torus.
    let mut sx = fx - fy;
    let mut sy = -fx - fy;
    if top_left {
        sy += 1.0;
    }
    if top_right {
        sx += 1.0;
    }
    if bottom_right {
        sy -= 1.0;
    }
    let sx = wrap_lattice(sx, n);
    let sy = wrap_lattice(sy, m);

    // Cell coordinates within the box: tile-local position, shifted half a
    // box per correction, vertical axis offset half a block.
    #[allow(clippy::cast_possible_truncation)]
    let (mut scx, mut scy) = (lx as i8, ly as i8 - 3);
    if top_left {
        scx += 6;
        scy += 6;
    }
    if top_right {
        scx -= 6;
        scy += 6;
    }
    if bottom_right {
        scx -= 6;
        scy -= 6;
    }
    let scx = scx.rem_euclid(12);
    let scy = scy.rem_euclid(12);
    if scx >= 9 || scy >= 9 {
        // Padding fringe of the tile, outside every box.
        return None;
    }

    #[allow(clippy::cast_sign_loss)]
    Some(CellAddress {
        sx,
        sy,
        scx: scx as u8,
        scy: scy as u8,
    })
}

/// Resolves a world-space point straight to a buffer offset.
#[must_use]
pub fn resolve_index(bx: f64, by: f64, layout: &BoardLayout) -> Option<usize> {
    let addr = resolve(bx, by, layout.n, layout.m)?;
    layout
        .cell_index(addr.sx, addr.sy, usize::from(addr.scx), usize::from(addr.scy))
        .ok()
}
