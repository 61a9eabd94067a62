//! Voxmark - target resolution core for spoken text-editing commands
//!
//! The command parser produces partially specified targets: "take funk air
//! and bat" says nothing about which modifiers apply to "bat". This crate
//! fills out every attribute the utterance omitted, pulling from earlier
//! targets in the same command, so the executor only ever sees fully
//! specified targets.

pub mod core;
pub mod target;
