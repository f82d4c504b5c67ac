//! The engine: owner of the cell arena and the generation counter.

use crate::automaton::grid::Grid;
use crate::cell::Cell;
use crate::config::{DeathClock, SimulationConfig};
use crate::error::{EngineError, Result};
use crate::picker::{CellPicker, SeededPicker};

/// A running simulation.
///
/// Only the engine writes to cells. Collaborators read through
/// [`Engine::cell_at`], [`Engine::cell`] and [`Engine::cells`], and may
/// flip cells with [`Engine::toggle_cell`] until the first step.
pub struct Engine {
    pub(crate) grid: Grid,
    pub(crate) cells: Vec<Cell>,
    pub(crate) generation: u64,
    pub(crate) started: bool,
    pub(crate) death_clock: DeathClock,
    pub(crate) picker: Box<dyn CellPicker>,
    pub(crate) thread_pool: rayon::ThreadPool,
}

impl Engine {
    /// Create an engine with an entropy-seeded picker and one worker thread.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::build(rows, columns, 1, Box::new(SeededPicker::from_entropy()))
    }

    /// Create an engine whose random revivals follow `seed`.
    pub fn seeded(rows: usize, columns: usize, seed: u64) -> Result<Self> {
        Self::build(rows, columns, 1, Box::new(SeededPicker::new(seed)))
    }

    /// Create an engine from a validated config.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let picker: Box<dyn CellPicker> = match config.seed {
            Some(seed) => Box::new(SeededPicker::new(seed)),
            None => Box::new(SeededPicker::from_entropy()),
        };
        let engine = Self::build(config.rows, config.columns, config.threads, picker)?;
        Ok(engine.with_death_clock(config.death_clock))
    }

    fn build(
        rows: usize,
        columns: usize,
        num_threads: u8,
        picker: Box<dyn CellPicker>,
    ) -> Result<Self> {
        let grid = Grid::new(rows, columns)?;
        let num_threads = if num_threads == 0 {
            1
        } else {
            num_threads as usize
        };
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;

        tracing::debug!(rows, columns, num_threads, "created hex grid engine");

        Ok(Engine {
            grid,
            cells: (0..grid.len()).map(Cell::new).collect(),
            generation: 0,
            started: false,
            death_clock: DeathClock::default(),
            picker,
            thread_pool,
        })
    }

    /// Replace the random revival picker.
    pub fn with_picker(mut self, picker: impl CellPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Choose whether deaths are stamped with their generation.
    pub fn with_death_clock(mut self, death_clock: DeathClock) -> Self {
        self.death_clock = death_clock;
        self
    }

    /// The grid topology.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of cells per row.
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Generations completed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current death stamping policy.
    pub fn death_clock(&self) -> DeathClock {
        self.death_clock
    }

    /// True once `step` has been called.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// All cells in id order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a grid coordinate.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<&Cell> {
        let id = self.grid.checked_index(row, column)?;
        Ok(&self.cells[id])
    }

    /// Get a cell by id.
    pub fn cell(&self, id: usize) -> Result<&Cell> {
        self.cells.get(id).ok_or(EngineError::UnknownCell {
            id,
            len: self.cells.len(),
        })
    }

    /// Neighbors of `cell`, for highlighting around a cursor.
    pub fn neighbors_of(&self, cell: &Cell) -> Result<Vec<&Cell>> {
        let id = self.cell(cell.id())?.id();
        Ok(self
            .grid
            .neighbors_of(id)
            .into_iter()
            .map(|n| &self.cells[n])
            .collect())
    }

    /// Count alive neighbors of the cell with the given id.
    pub fn count_live_neighbors(&self, id: usize) -> Result<usize> {
        let id = self.cell(id)?.id();
        Ok(self
            .grid
            .neighbors_of(id)
            .into_iter()
            .filter(|&n| self.cells[n].is_alive())
            .count())
    }

    /// Flip a cell between alive and dead before the simulation starts.
    pub fn toggle_cell(&mut self, id: usize) -> Result<()> {
        if self.started {
            return Err(EngineError::SimulationStarted);
        }
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(id)
            .ok_or(EngineError::UnknownCell { id, len })?;
        cell.toggle();
        Ok(())
    }

    /// Number of alive cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of dead cells.
    pub fn dead_count(&self) -> usize {
        self.cells.len() - self.live_count()
    }

    /// Whether no cell is left awaiting revival.
    pub fn is_converged(&self) -> bool {
        !self.cells.iter().any(Cell::awaits_revival)
    }

    /// Advance one generation. Returns true once the simulation has
    /// converged; a converged engine is left untouched.
    pub fn step(&mut self) -> bool {
        crate::automaton::step_automaton(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn test_new_engine() {
        let engine = Engine::new(3, 4).unwrap();
        assert_eq!(engine.rows(), 3);
        assert_eq!(engine.columns(), 4);
        assert_eq!(engine.cells().len(), 12);
        assert_eq!(engine.grid().len(), 12);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.has_started());
        assert!(engine.cells().iter().all(|c| c.is_dead()));
        for (i, cell) in engine.cells().iter().enumerate() {
            assert_eq!(cell.id(), i);
        }
    }

    #[test]
    fn test_empty_engine_rejected() {
        assert!(matches!(
            Engine::new(0, 0),
            Err(EngineError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Engine::seeded(2, 0, 1),
            Err(EngineError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Engine::new(usize::MAX, 2),
            Err(EngineError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            rows: 4,
            columns: 6,
            seed: Some(3),
            threads: 0,
            death_clock: DeathClock::Recorded,
            ..SimulationConfig::default()
        };
        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.cells().len(), 24);
        assert_eq!(engine.death_clock(), DeathClock::Recorded);
    }

    #[test]
    fn test_cell_at() {
        let mut engine = Engine::seeded(3, 3, 0).unwrap();
        engine.toggle_cell(5).unwrap();

        let cell = engine.cell_at(1, 2).unwrap();
        assert_eq!(cell.id(), 5);
        assert_eq!(cell.state(), CellState::Alive);

        assert!(matches!(
            engine.cell_at(3, 0),
            Err(EngineError::OutOfRange { .. })
        ));
        assert!(matches!(
            engine.cell(9),
            Err(EngineError::UnknownCell { id: 9, len: 9 })
        ));
    }

    #[test]
    fn test_neighbors_of_cell() {
        let engine = Engine::seeded(3, 3, 0).unwrap();
        let center = engine.cell_at(1, 1).unwrap();
        let mut ids: Vec<usize> = engine
            .neighbors_of(center)
            .unwrap()
            .iter()
            .map(|c| c.id())
            .collect();
        ids.sort_unstable();
        // Odd row: diagonals lean right
        assert_eq!(ids, vec![1, 2, 3, 5, 7, 8]);
    }

    #[test]
    fn test_neighbors_of_unknown_cell() {
        let engine = Engine::seeded(3, 3, 0).unwrap();
        assert!(matches!(
            engine.neighbors_of(&Cell::new(20)),
            Err(EngineError::UnknownCell { id: 20, len: 9 })
        ));
        assert!(matches!(
            engine.count_live_neighbors(9),
            Err(EngineError::UnknownCell { id: 9, len: 9 })
        ));
    }

    #[test]
    fn test_count_live_neighbors() {
        let mut engine = Engine::seeded(3, 3, 0).unwrap();
        engine.toggle_cell(1).unwrap();
        engine.toggle_cell(0).unwrap();
        engine.toggle_cell(8).unwrap();
        // 0 is not adjacent to the odd-row center
        assert_eq!(engine.count_live_neighbors(4).unwrap(), 2);
        assert_eq!(engine.live_count(), 3);
        assert_eq!(engine.dead_count(), 6);
    }

    #[test]
    fn test_toggle_after_start_rejected() {
        let mut engine = Engine::seeded(2, 2, 0).unwrap();
        engine.toggle_cell(0).unwrap();
        engine.step();
        assert!(matches!(
            engine.toggle_cell(0),
            Err(EngineError::SimulationStarted)
        ));
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut engine = Engine::seeded(2, 2, 0).unwrap();
        assert!(matches!(
            engine.toggle_cell(4),
            Err(EngineError::UnknownCell { id: 4, len: 4 })
        ));
    }
}
