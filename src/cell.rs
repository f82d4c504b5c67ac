//! Cell entity and the transitions that can be applied to it.

/// Whether a cell is currently alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    /// Display glyph for renderers.
    pub fn symbol(self) -> char {
        match self {
            CellState::Alive => '⬢',
            CellState::Dead => '⬡',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Underpopulation,
    Overpopulation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResurrectionCause {
    Reproduction,
    SixGenTimeout,
    Random,
}

/// A state change decided for one cell during a generation. The target
/// state is implied by the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Kill(DeathCause),
    Resurrect(ResurrectionCause),
    NoOp,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        matches!(self, Transition::NoOp)
    }
}

/// One grid position. Only the cause of the most recent death and the most
/// recent resurrection are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    id: usize,
    state: CellState,
    cause_of_death: Option<DeathCause>,
    cause_of_resurrection: Option<ResurrectionCause>,
    death_timestamp: Option<u64>,
}

impl Cell {
    /// A fresh dead cell with no history.
    pub fn new(id: usize) -> Self {
        Cell {
            id,
            state: CellState::Dead,
            cause_of_death: None,
            cause_of_resurrection: None,
            death_timestamp: None,
        }
    }

    /// Linear id, also the grid position.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current state.
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Display glyph for the current state.
    pub fn symbol(&self) -> char {
        self.state.symbol()
    }

    /// Is this cell alive.
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }

    /// Is this cell dead.
    pub fn is_dead(&self) -> bool {
        self.state == CellState::Dead
    }

    /// Cause of the most recent rule-driven death.
    pub fn cause_of_death(&self) -> Option<DeathCause> {
        self.cause_of_death
    }

    /// Cause of the most recent rule-driven resurrection.
    pub fn cause_of_resurrection(&self) -> Option<ResurrectionCause> {
        self.cause_of_resurrection
    }

    /// Generation of the most recent stamped death.
    pub fn death_timestamp(&self) -> Option<u64> {
        self.death_timestamp
    }

    /// Flip between alive and dead without recording a cause.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        };
    }

    /// Apply a decided transition. Returns true if the cell changed state.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let before = self.state;
        match transition {
            Transition::Kill(cause) => {
                self.state = CellState::Dead;
                self.cause_of_death = Some(cause);
            }
            Transition::Resurrect(cause) => {
                self.state = CellState::Alive;
                self.cause_of_resurrection = Some(cause);
            }
            Transition::NoOp => {}
        }
        before != self.state
    }

    /// Stamp the generation of the most recent death.
    pub(crate) fn record_death(&mut self, generation: u64) {
        self.death_timestamp = Some(generation);
    }

    /// Whether the termination check still counts this cell as revivable:
    /// dead, and either never stamped or last killed by overpopulation.
    pub fn awaits_revival(&self) -> bool {
        self.is_dead()
            && match self.death_timestamp {
                Some(_) => self.cause_of_death == Some(DeathCause::Overpopulation),
                None => true,
            }
    }

    /// Generations elapsed since the stamped death, if any.
    pub fn dormancy(&self, generation: u64) -> Option<u64> {
        self.death_timestamp
            .map(|stamp| generation.saturating_sub(stamp))
    }
}
