//! # Maverick
//!
//! A side-scrolling shooter built on `sprite_engine`. The player ship holds
//! the left side of the screen while enemies spawn at the right edge and
//! march left, firing as they come. Destroying enemies scores points; the
//! spawn rate ramps with a time-driven difficulty value until the ship runs
//! out of lives.
//!
//! The crate is a library plus a thin binary: scenes ([`session`],
//! [`menu`]) run against any [`sprite_engine::platform::Platform`] backend.

pub mod assets;
pub mod bullet;
pub mod config;
pub mod enemy;
pub mod menu;
pub mod player;
pub mod session;
