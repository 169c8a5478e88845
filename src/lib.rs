//! Wizard / warrior / brigand: a turn-based text duel game.
//!
//! The pure modules (`entities`, `compute`, `mode`, `commands`) hold the rules;
//! `session` and `app` drive them from any reader/writer pair so the whole
//! game can be played from tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod compute;
pub mod display;
pub mod entities;
pub mod error;
pub mod mode;
pub mod scores;
pub mod session;
