use crate::grid::{Grid, NeighborBounds};

// Moore neighbourhood, clockwise from the top: (dx, dy)
const NEIGHBOURS: [(isize, isize); 8] = [
    (0, 1),   // top
    (1, 1),   // top right
    (1, 0),   // right
    (1, -1),  // bottom right
    (0, -1),  // bottom
    (-1, -1), // bottom left
    (-1, 0),  // left
    (-1, 1),  // top left
];

#[inline]
fn offset(coord: usize, delta: isize, size: usize, bounds: NeighborBounds) -> Option<usize> {
    match delta {
        -1 => {
            let lower = coord.checked_sub(1)?;
            match bounds {
                NeighborBounds::Inclusive => Some(lower),
                NeighborBounds::SkipLowEdge => (lower > 0).then_some(lower),
            }
        }
        0 => (coord < size).then_some(coord),
        _ => {
            let upper = coord + 1;
            (upper < size).then_some(upper)
        }
    }
}

/// Live cells among the eight around `(x, y)`. Neighbours past the edge never count.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for (dx, dy) in NEIGHBOURS {
        let neighbour = offset(x, dx, grid.size, grid.bounds)
            .zip(offset(y, dy, grid.size, grid.bounds));
        if let Some((nx, ny)) = neighbour {
            if grid.cells[nx][ny] {
                count += 1;
            }
        }
    }
    count
}

/// Computes the next generation into a freshly allocated grid.
///
/// * Any live cell with fewer than two live neighbours dies (underpopulation)
/// * Any live cell with two or three live neighbours survives
/// * Any live cell with more than three live neighbours dies (overpopulation)
/// * Any dead cell with exactly three live neighbours becomes alive (reproduction)
pub fn advance(grid: &Grid) -> Grid {
    let mut next = Grid::with_bounds(grid.size, grid.bounds);
    next.generation = grid.generation + 1;

    for x in 0..grid.size {
        for y in 0..grid.size {
            let live_neighbors = count_live_neighbors(grid, x, y);
            next.cells[x][y] = match (grid.cells[x][y], live_neighbors) {
                (true, n) if n < 2 => false,
                (true, 2) | (true, 3) => true,
                (true, _) => false,
                (false, 3) => true,
                (false, _) => false,
            };
        }
    }
    next
}
