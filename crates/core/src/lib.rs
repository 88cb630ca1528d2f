//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the link puzzle: the chip grid, link
//! validation, gravity fill, dead-board detection and reshuffling, scoring
//! and the win/lose condition. It draws nothing and reads no input devices;
//! front-ends implement [`view::BoardView`] and feed grid coordinates to the
//! [`LinkController`].
//!
//! - **Deterministic**: the same seed deals and refills identically
//! - **Testable**: every strategy is a small trait with a default implementation
//! - **Portable**: runs headless with [`view::NullView`]
//!
//! # Module Structure
//!
//! - [`grid`]: row-major chip grid with neighbor queries
//! - [`path`]: rules for starting, extending and releasing a link
//! - [`connectivity`]: "is there any move left" via same-color regions
//! - [`shuffle`]: dead-board reshuffling with a retry bound
//! - [`fill`]: column gravity and refill from above
//! - [`game_state`]: score, moves and outcome
//! - [`controller`]: gesture handling and link resolution
//! - [`animation`]: tick-driven playback of pops, falls and pulses
//! - [`events`]: outbound notifications and subscriptions
//! - [`config`]: level parameters loaded from JSON
//! - [`rng`]: seedable random source and chip picker
//!
//! # Example
//!
//! ```
//! use link_match_core::{LevelConfig, LinkController, Release};
//! use link_match_core::view::NullView;
//! use link_match_core::types::Coord;
//!
//! let mut view = NullView::new();
//! let mut game = LinkController::new(LevelConfig::default(), 12345, &mut view).unwrap();
//!
//! game.press(Some(Coord::new(0, 0)), &mut view);
//! game.drag(Some(Coord::new(1, 0)), &mut view);
//! match game.release(&mut view) {
//!     Release::Resolved { points, .. } => assert!(points >= 3),
//!     Release::Rejected | Release::Idle => assert_eq!(game.game_state().score(), 0),
//! }
//! ```
//!
//! # Timing
//!
//! Resolution is instantaneous in the model. Call
//! [`LinkController::tick`] every frame with elapsed milliseconds to play
//! the queued animations; input is ignored until they finish.

pub mod animation;
pub mod config;
pub mod connectivity;
pub mod controller;
pub mod error;
pub mod events;
pub mod fill;
pub mod game_state;
pub mod grid;
pub mod path;
pub mod rng;
pub mod shuffle;
pub mod snapshot;
pub mod view;

pub use link_match_types as types;

// Re-export commonly used types for convenience
pub use animation::{Timeline, Timing};
pub use config::LevelConfig;
pub use connectivity::{has_any_move, region_at};
pub use controller::{LinkController, Release};
pub use error::{ConfigError, GridError};
pub use events::{EventBus, EventSink, GameEvent, SubscriptionId};
pub use fill::{FillStrategy, GravityFill, Motion};
pub use game_state::GameStateManager;
pub use grid::Grid;
pub use path::{LinkPathValidator, PathValidator};
pub use rng::{ChipPicker, RandomSource, SimpleRng};
pub use shuffle::{shuffle_until_playable, ShuffleReport, ShuffleStrategy, SimpleShuffle};
pub use snapshot::BoardSnapshot;
pub use view::{BoardView, NullView, ViewGrid};
