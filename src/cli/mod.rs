//! CLI infrastructure for the goalie toolkit
//!
//! This module provides the command-line interface for simulating and
//! playing rounds against the learning goalkeeper.

pub mod commands;
pub mod output;
