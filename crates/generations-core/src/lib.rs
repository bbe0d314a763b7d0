//! Board evolution, history tracking, and termination detection for the
//! Generations life engine.
//!
//! One tick is one [`evolution::step_with`] followed by one
//! [`history::evaluate`]. [`simulation::Simulation`] threads the board and
//! the history window between ticks; [`runner`] drives it until a verdict.
//!
//! # Modules
//!
//! - [`board`] -- Rectangular grid of cells with bounds-checked access.
//! - [`census`] -- Population counts broken down by survivor tier.
//! - [`config`] -- Configuration loading from `generations-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Board construction and access errors.
//! - [`evolution`] -- Birth, survival, death, and aging rules.
//! - [`factory`] -- Random and empty board construction.
//! - [`history`] -- Rolling two-generation window and the termination
//!   detector.
//! - [`neighbors`] -- Moore-neighborhood counting without wrap-around.
//! - [`runner`] -- [`TickCallback`] trait and the headless run loop.
//! - [`simulation`] -- Cross-tick state and the per-tick summary.
//!
//! [`TickCallback`]: runner::TickCallback

pub mod board;
pub mod census;
pub mod config;
pub mod error;
pub mod evolution;
pub mod factory;
pub mod history;
pub mod neighbors;
pub mod runner;
pub mod simulation;
