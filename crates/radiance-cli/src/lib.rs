//! Radiance CLI library.
//!
//! This crate provides the core functionality for the Radiance CLI:
//! config loading and the `generate` and `inspect` commands.

pub mod commands;
pub mod input;
