extern crate alloc;

pub mod battle;
pub mod common;
pub mod config;
pub mod error;
pub mod items;
pub mod log;
pub mod moves;
pub mod rng;
