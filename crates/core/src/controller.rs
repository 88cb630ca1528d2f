//! Link controller - gesture handling and link resolution
//!
//! The controller owns the model side of one level: the grid, the sprite
//! handle per cell, the path being drawn, the game state and the animation
//! timeline. Hosts translate pointer positions to grid coordinates and call:
//!
//! - [`LinkController::press`] to start a link on a chip
//! - [`LinkController::drag`] to extend the link (or back up one step)
//! - [`LinkController::release`] to resolve or discard it
//! - [`LinkController::tick`] once per frame to play animations
//!
//! A valid release resolves in a fixed order: clear the linked cells, spend a
//! move and score one point per chip, gravity-fill, then reshuffle if the new
//! board has no move. The model is final before `release` returns; the board
//! stays busy (and ignores input) until the queued animations finish.

use tracing::{debug, info, instrument};

use crate::animation::{Timeline, Timing};
use crate::config::LevelConfig;
use crate::error::ConfigError;
use crate::events::{EventBus, EventSink, GameEvent, SubscriptionId};
use crate::fill::{FillStrategy, GravityFill};
use crate::game_state::GameStateManager;
use crate::grid::Grid;
use crate::path::{LinkPathValidator, PathValidator};
use crate::rng::{ChipPicker, SimpleRng};
use crate::shuffle::{shuffle_until_playable, ShuffleReport, ShuffleStrategy, SimpleShuffle};
use crate::snapshot::BoardSnapshot;
use crate::types::{ChipType, Coord, GridPoint, ViewHandle};
use crate::view::{BoardView, ViewGrid};

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The link was cleared and scored.
    Resolved { removed: usize, points: u32 },
    /// The link was too short; nothing changed.
    Rejected,
    /// No gesture was in progress.
    Idle,
}

/// One playable level.
pub struct LinkController {
    config: LevelConfig,
    seed: u32,
    grid: Grid,
    views: ViewGrid,
    path: Vec<Coord>,
    validator: Box<dyn PathValidator>,
    fill: Box<dyn FillStrategy>,
    shuffle: Box<dyn ShuffleStrategy>,
    rng: SimpleRng,
    picker: ChipPicker,
    state: GameStateManager,
    bus: EventBus,
    timeline: Timeline,
    busy: bool,
}

impl LinkController {
    /// Build a level with the default strategies.
    ///
    /// `seed` is used unless the level file fixes one.
    pub fn new(
        config: LevelConfig,
        seed: u32,
        view: &mut dyn BoardView,
    ) -> Result<Self, ConfigError> {
        let validator = LinkPathValidator::new(config.min_link_length, config.adjacency);
        let shuffle = SimpleShuffle::new(config.min_link_length);
        Self::with_strategies(
            config,
            seed,
            Box::new(validator),
            Box::new(GravityFill),
            Box::new(shuffle),
            view,
        )
    }

    pub fn with_strategies(
        config: LevelConfig,
        seed: u32,
        validator: Box<dyn PathValidator>,
        fill: Box<dyn FillStrategy>,
        shuffle: Box<dyn ShuffleStrategy>,
        view: &mut dyn BoardView,
    ) -> Result<Self, ConfigError> {
        let mut controller = Self::assemble(config, seed, validator, fill, shuffle)?;
        controller.deal(view);
        info!(
            rows = controller.config.rows,
            cols = controller.config.cols,
            seed = controller.seed,
            "level started"
        );
        Ok(controller)
    }

    /// Build a level around a fixed board instead of a random deal.
    ///
    /// The board is used as given, even if it has no move. `config.rows` and
    /// `config.cols` are replaced by the board's shape.
    pub fn from_grid(
        config: LevelConfig,
        seed: u32,
        grid: Grid,
        view: &mut dyn BoardView,
    ) -> Result<Self, ConfigError> {
        let validator = LinkPathValidator::new(config.min_link_length, config.adjacency);
        let shuffle = SimpleShuffle::new(config.min_link_length);
        Self::from_grid_with_strategies(
            config,
            seed,
            grid,
            Box::new(validator),
            Box::new(GravityFill),
            Box::new(shuffle),
            view,
        )
    }

    /// [`LinkController::from_grid`] with injected strategies.
    pub fn from_grid_with_strategies(
        mut config: LevelConfig,
        seed: u32,
        grid: Grid,
        validator: Box<dyn PathValidator>,
        fill: Box<dyn FillStrategy>,
        shuffle: Box<dyn ShuffleStrategy>,
        view: &mut dyn BoardView,
    ) -> Result<Self, ConfigError> {
        config.rows = grid.rows();
        config.cols = grid.cols();
        let mut controller = Self::assemble(config, seed, validator, fill, shuffle)?;
        controller.grid = grid;
        controller.spawn_all(view);
        info!(
            rows = controller.config.rows,
            cols = controller.config.cols,
            seed = controller.seed,
            "level started from a fixed board"
        );
        Ok(controller)
    }

    /// Validated level with an empty board and no sprites.
    fn assemble(
        config: LevelConfig,
        seed: u32,
        validator: Box<dyn PathValidator>,
        fill: Box<dyn FillStrategy>,
        shuffle: Box<dyn ShuffleStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or(seed);
        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            views: ViewGrid::new(config.rows, config.cols),
            path: Vec::new(),
            validator,
            fill,
            shuffle,
            rng: SimpleRng::new(seed),
            picker: ChipPicker::new(&config.enabled_types),
            state: GameStateManager::new(config.target_score, config.initial_moves, None),
            bus: EventBus::new(),
            timeline: Timeline::default(),
            busy: false,
            seed,
            config,
        })
    }

    /// Replace the animation timing. Pending steps are completed first.
    pub fn set_timing(&mut self, timing: Timing, view: &mut dyn BoardView) {
        self.timeline.finish(view);
        self.timeline = Timeline::new(timing);
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn views(&self) -> &ViewGrid {
        &self.views
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn game_state(&self) -> &GameStateManager {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Start a link at `at`. `None` means the pointer is off the board.
    pub fn press(&mut self, at: Option<Coord>, view: &mut dyn BoardView) {
        if self.busy || self.state.is_game_over() || !self.path.is_empty() {
            return;
        }
        let Some(at) = at else { return };
        match self.grid.checked_get(at) {
            Some(chip) if self.validator.can_start(chip) => {}
            _ => return,
        }

        self.path.push(at);
        self.select(at, true, view);
    }

    /// Extend the link to `at`, or back up one step when `at` is the
    /// second-to-last cell of the link.
    pub fn drag(&mut self, at: Option<Coord>, view: &mut dyn BoardView) {
        if self.path.is_empty() {
            return;
        }
        let Some(at) = at else { return };

        let len = self.path.len();
        if self.path[len - 1] == at {
            return;
        }
        if len >= 2 && self.path[len - 2] == at {
            if let Some(last) = self.path.pop() {
                self.select(last, false, view);
            }
            return;
        }
        if self.validator.can_append(&self.path, at, &self.grid) {
            self.path.push(at);
            self.select(at, true, view);
        }
    }

    /// End the gesture and resolve the link if it is long enough.
    #[instrument(skip_all, fields(len = self.path.len()))]
    pub fn release(&mut self, view: &mut dyn BoardView) -> Release {
        if self.path.is_empty() {
            return Release::Idle;
        }
        let path = std::mem::take(&mut self.path);

        if !self.validator.is_valid_on_release(&path) {
            for &c in &path {
                self.select(c, false, view);
            }
            debug!("link too short");
            return Release::Rejected;
        }

        let removed = path.len();
        let points = removed as u32;
        self.resolve(&path, points, view);
        Release::Resolved { removed, points }
    }

    /// Drop the current link without resolving it, e.g. when another input
    /// device takes over mid-gesture. Returns whether a link was dropped.
    pub fn cancel(&mut self, view: &mut dyn BoardView) -> bool {
        if self.path.is_empty() {
            return false;
        }
        for c in std::mem::take(&mut self.path) {
            self.select(c, false, view);
        }
        debug!("link cancelled");
        true
    }

    /// Advance animations by `dt_ms`. Input unlocks once they are done.
    pub fn tick(&mut self, dt_ms: u32, view: &mut dyn BoardView) {
        if self.timeline.tick(dt_ms, view) {
            return;
        }
        if self.busy {
            self.busy = false;
            self.bus.emit(GameEvent::BoardBusy(false));
        }
    }

    /// Skip every pending animation.
    pub fn finish_animations(&mut self, view: &mut dyn BoardView) {
        self.timeline.finish(view);
        self.tick(0, view);
    }

    /// Deal a fresh board and reset the score and moves.
    ///
    /// `moves_override` replaces the level's move budget when positive.
    pub fn restart(&mut self, view: &mut dyn BoardView, moves_override: Option<u32>) {
        self.bus.emit(GameEvent::ResetRequested);
        self.timeline.finish(view);
        self.path.clear();
        for h in self.views.drain() {
            view.despawn(h);
        }

        self.deal(view);
        self.state.reset(moves_override);
        self.flush_state_events();
        if self.busy {
            self.busy = false;
            self.bus.emit(GameEvent::BoardBusy(false));
        }
        info!(moves = self.state.moves_left(), "level restarted");
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells: self.grid.cells().to_vec(),
            path: self.path.clone(),
            score: self.state.score(),
            moves_left: self.state.moves_left(),
            target_score: self.state.target_score(),
            busy: self.busy,
            outcome: self.state.outcome(),
        }
    }

    fn resolve(&mut self, path: &[Coord], points: u32, view: &mut dyn BoardView) {
        // Clear
        let mut popped = Vec::with_capacity(path.len());
        for &c in path {
            self.grid.set(c, ChipType::Empty);
            if let Some(h) = self.views.take(c) {
                view.set_selected(h, false);
                popped.push(h);
            }
        }
        self.timeline.push_pops(popped);

        // Score
        self.state.try_consume_move(points);

        // Fill
        let picker = &self.picker;
        let rng = &mut self.rng;
        let mut next_chip = || picker.pick(&mut *rng);
        let motions = self
            .fill
            .fill(&mut self.grid, &mut self.views, &mut next_chip, view);
        self.timeline.push_falls(motions);

        // Shuffle check
        let report = shuffle_until_playable(
            self.shuffle.as_ref(),
            &mut self.grid,
            &mut self.rng,
            self.config.shuffle_retry_limit,
        );
        if report.shuffled() {
            self.rebuild_after_shuffle(report, view);
        }

        self.busy = true;
        self.bus.emit(GameEvent::BoardBusy(true));
        self.flush_state_events();
    }

    /// Sprites carry their chip color, so a reshuffled board gets fresh
    /// sprites. Pending pops and falls are completed first.
    fn rebuild_after_shuffle(&mut self, report: ShuffleReport, view: &mut dyn BoardView) {
        self.bus.emit(GameEvent::Shuffled {
            attempts: report.attempts,
            playable: report.playable,
        });
        self.timeline.finish(view);
        for h in self.views.drain() {
            view.despawn(h);
        }
        self.spawn_all(view);
        let handles: Vec<ViewHandle> = self.views.handles().collect();
        self.timeline.push_pulse(handles);
    }

    /// Random deal, reshuffled until playable, with a sprite per cell.
    fn deal(&mut self, view: &mut dyn BoardView) {
        self.grid.fill_random(&self.picker, &mut self.rng);
        let report = shuffle_until_playable(
            self.shuffle.as_ref(),
            &mut self.grid,
            &mut self.rng,
            self.config.shuffle_retry_limit,
        );
        if report.shuffled() {
            debug!(attempts = report.attempts, "initial deal reshuffled");
        }
        self.spawn_all(view);
    }

    fn spawn_all(&mut self, view: &mut dyn BoardView) {
        for (c, chip) in self.grid.iter() {
            if chip.is_empty() {
                continue;
            }
            let handle = view.spawn(chip, GridPoint::from(c));
            self.views.set(c, Some(handle));
        }
    }

    fn select(&mut self, c: Coord, selected: bool, view: &mut dyn BoardView) {
        if let Some(h) = self.views.get(c) {
            view.set_selected(h, selected);
        }
    }

    fn flush_state_events(&mut self) {
        for event in self.state.drain_events() {
            self.bus.emit(event);
        }
    }
}

impl std::fmt::Debug for LinkController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkController")
            .field("seed", &self.seed)
            .field("grid", &self.grid)
            .field("path", &self.path)
            .field("state", &self.state)
            .field("busy", &self.busy)
            .finish_non_exhaustive()
    }
}
