//! CLI infrastructure for the oxo binary
//!
//! This module provides the command-line interface for playing
//! interactive games and running batch self-play series.

pub mod commands;
pub mod output;
