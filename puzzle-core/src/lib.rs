//! Sliding tile puzzle over a captured map image.
//!
//! The engine cuts an [`Image`] into a [`Board`] of tiles, shuffles it, and
//! tracks swaps until every tile is back in its canonical slot. Everything
//! browser-specific (the map, capturing it, the DOM) lives behind the
//! [`SurfaceCapture`] and [`Viewport`] capabilities.

pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod image;
pub mod markers;
pub mod rng;
pub mod session;
pub mod tile;
pub mod view;

pub use board::{Board, partition};
pub use capture::{CaptureCallback, GridSize, SurfaceCapture, Viewport, request_puzzle};
pub use config::PuzzleConfig;
pub use error::{CaptureError, ConfigError, PuzzleError};
pub use image::Image;
pub use rng::SplitMix64;
pub use session::{Completion, PuzzleSession, SwapOutcome};
pub use tile::{ImageOffset, Tile};
pub use view::{TileView, tile_views};
