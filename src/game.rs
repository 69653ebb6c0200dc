use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::engine;
use crate::grid::Grid;

/// Seed derived from the wall clock, used when no fixed seed is configured.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// The running game, handed to the per-frame callback by the event loop.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Fresh board with roughly one in `config.alive_chance` cells alive.
    pub fn seeded<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let mut grid = Grid::with_bounds(config.grid_size, config.bounds);
        grid.randomize(rng, config.alive_chance);
        log::info!(
            "Seeded {}x{} board with {} live cells",
            grid.size(),
            grid.size(),
            grid.population()
        );
        Self::new(grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs one frame and returns whether the board advanced (and should be drawn).
    ///
    /// `pointer` is the cell under the cursor while the primary button is held.
    /// Injection happens before the skip check, so a held button still paints
    /// on frames that are not drawn; those frames never advance the board.
    pub fn frame(&mut self, pointer: Option<(isize, isize)>, skip_draw: bool) -> bool {
        if let Some((x, y)) = pointer {
            log::debug!("Activating cluster at ({}, {})", x, y);
            self.grid.activate_cluster(x, y);
        }

        if skip_draw {
            return false;
        }

        self.grid = engine::advance(&self.grid);
        log::trace!(
            "Generation {}: {} live cells",
            self.grid.generation(),
            self.grid.population()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::NeighborBounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> Config {
        Config {
            grid_size: 24,
            ..Config::default()
        }
    }

    #[test]
    fn seeded_game_uses_config() {
        let config = Config {
            bounds: NeighborBounds::SkipLowEdge,
            alive_chance: 1,
            ..small_config()
        };
        let game = Game::seeded(&config, &mut StdRng::seed_from_u64(3));
        assert_eq!(game.grid().size(), 24);
        assert_eq!(game.grid().generation(), 1);
        assert_eq!(game.grid().bounds(), NeighborBounds::SkipLowEdge);
        assert_eq!(game.grid().population(), 24 * 24);
    }

    #[test]
    fn same_seed_same_board() {
        let a = Game::seeded(&small_config(), &mut StdRng::seed_from_u64(99));
        let b = Game::seeded(&small_config(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn frame_advances_one_generation() {
        let mut game = Game::new(Grid::new(10));
        assert!(game.frame(None, false));
        assert_eq!(game.grid().generation(), 2);
        assert!(game.frame(None, false));
        assert_eq!(game.grid().generation(), 3);
    }

    #[test]
    fn skipped_frame_does_not_advance() {
        let mut game = Game::new(Grid::new(10));
        assert!(!game.frame(None, true));
        assert_eq!(game.grid().generation(), 1);
    }

    #[test]
    fn skipped_frame_still_injects() {
        let mut game = Game::new(Grid::new(10));
        assert!(!game.frame(Some((5, 5)), true));
        assert_eq!(game.grid().population(), 5);
        assert_eq!(game.grid().generation(), 1);
    }

    #[test]
    fn injection_happens_before_advance() {
        let mut game = Game::new(Grid::new(10));
        assert!(game.frame(Some((5, 5)), false));
        // The plus evolves: centre has four neighbours and dies, arms survive,
        // and the four diagonal gaps see three live cells each.
        let grid = game.grid();
        assert_eq!(grid.generation(), 2);
        assert!(!grid.is_alive(5, 5));
        for (x, y) in [(4, 4), (4, 6), (6, 4), (6, 6), (4, 5), (6, 5), (5, 4), (5, 6)] {
            assert!(grid.is_alive(x, y), "({x}, {y}) should be alive");
        }
        assert_eq!(grid.population(), 8);
    }

    #[test]
    fn clock_seed_changes_over_time() {
        let first = clock_seed();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_ne!(first, clock_seed());
    }
}
