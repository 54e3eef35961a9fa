//! Deterministic tick engine for a grid-based Pac-Man.
//!
//! The crate covers the simulation core only: maze topology and pickups, movement legality
//! on a wrap-around grid, the Pac-Man and ghost state machines, the feeding window, scoring,
//! lives and level progression. Rendering, input capture and scheduling belong to the host,
//! which drives [`game::Game`] at a fixed period and reads back a [`game::snapshot::GameSnapshot`].

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod highscore;
pub mod logging;
pub mod map;
