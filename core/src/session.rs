use serde::{Deserialize, Serialize};

use crate::*;

/// Presentation-only pointer state carried between frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerState {
    pub hovered: Option<Target>,
    /// The primary button went down over the restart button or a closed cell and is still held.
    pub held: bool,
}

/// What a single frame did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Reset,
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Idle => false,
            Self::Reset => true,
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

/// One board and its game state, owned together and replaced together on reset.
#[derive(Clone, Debug)]
pub struct Session<G = DensityGenerator> {
    config: GameConfig,
    policy: RevealPolicy,
    layout: BoardLayout,
    generator: G,
    grid: Grid,
    state: GameState,
    triggered_mine: Option<Coord2>,
    pointer: PointerState,
}

impl Session<DensityGenerator> {
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, DensityGenerator::new(seed))
    }
}

impl<G: MineGenerator> Session<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let grid = Grid::generate(&config, &mut generator)?;
        let mut state = GameState::new(grid.mine_count());
        state.evaluate_win();
        log::debug!(
            "New {}x{} game with {} mines",
            config.size.0,
            config.size.1,
            state.mine_count()
        );
        Ok(Self {
            config,
            policy: RevealPolicy::default(),
            layout: BoardLayout::new(config.size, BoardLayout::DEFAULT_CELL_SIZE),
            generator,
            grid,
            state,
            triggered_mine: None,
            pointer: PointerState::default(),
        })
    }

    /// Throws the board away and deals a new one from the same generator.
    pub fn on_reset(&mut self) -> Result<()> {
        let grid = Grid::generate(&self.config, &mut self.generator)?;
        self.state = GameState::new(grid.mine_count());
        self.state.evaluate_win();
        self.grid = grid;
        self.triggered_mine = None;
        log::debug!("Game reset with {} mines", self.state.mine_count());
        Ok(())
    }

    /// Applies one frame of pointer input.
    pub fn tick(&mut self, input: &FrameInput) -> TickOutcome {
        let target = self.layout.hit_test(input.pointer);
        self.pointer.hovered = target;
        if !input.down.contains(PointerButtons::PRIMARY) {
            self.pointer.held = false;
        }

        match target {
            Some(Target::Restart) => {
                if input.down.contains(PointerButtons::PRIMARY) {
                    self.pointer.held = true;
                }
                if input.released.contains(PointerButtons::PRIMARY) {
                    return match self.on_reset() {
                        Ok(()) => TickOutcome::Reset,
                        Err(err) => {
                            log::error!("Failed to reset the board: {}", err);
                            TickOutcome::Idle
                        }
                    };
                }
                TickOutcome::Idle
            }
            Some(Target::Cell(coords)) if self.state.status().is_playing() => {
                if input.down.contains(PointerButtons::PRIMARY) && !self.grid[coords].is_revealed
                {
                    self.pointer.held = true;
                }
                if input.released.contains(PointerButtons::PRIMARY) {
                    TickOutcome::Reveal(self.on_primary_release(coords))
                } else if input.released.contains(PointerButtons::SECONDARY) {
                    TickOutcome::Flag(self.on_secondary_release(coords))
                } else {
                    TickOutcome::Idle
                }
            }
            _ => TickOutcome::Idle,
        }
    }
}

impl<G> Session<G> {
    pub fn with_policy(mut self, policy: RevealPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u16) -> Self {
        self.layout = BoardLayout::new(self.config.size, cell_size);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Reveals `coords`, cascading from it when it has no mined neighbor.
    ///
    /// Ignored when the game is over, the coordinates are off the board, or the cell is flagged
    /// or already open.
    pub fn on_primary_release(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.status().is_playing() {
            return RevealOutcome::NoChange;
        }
        let Some(cell) = self.grid.cell_mut(coords) else {
            return RevealOutcome::NoChange;
        };
        if cell.is_flagged || cell.is_revealed {
            return RevealOutcome::NoChange;
        }

        cell.is_revealed = true;
        let Cell { value, is_mine, .. } = *cell;

        if is_mine {
            log::debug!("Revealed mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.state.mark_lost();
            return RevealOutcome::HitMine;
        }

        log::debug!("Revealed cell at {:?}, value: {}", coords, value);
        if value == 0 {
            self.policy.cascade(&mut self.grid, coords);
        }

        if self.state.evaluate_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Toggles the flag on a closed cell and re-checks the win condition.
    pub fn on_secondary_release(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.state.status().is_playing() {
            return FlagOutcome::NoChange;
        }
        let Some(cell) = self.grid.cell_mut(coords) else {
            return FlagOutcome::NoChange;
        };
        if cell.is_revealed {
            return FlagOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        let on_mine = cell.is_mine;
        let outcome = if cell.is_flagged {
            self.state.record_flag(on_mine);
            FlagOutcome::Flagged
        } else {
            self.state.record_unflag(on_mine);
            FlagOutcome::Unflagged
        };
        log::debug!(
            "{:?} cell at {:?}, flags remaining: {}",
            outcome,
            coords,
            self.state.flags_remaining()
        );

        if self.state.evaluate_win() {
            FlagOutcome::Won
        } else {
            outcome
        }
    }
}
