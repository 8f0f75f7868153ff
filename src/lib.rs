//! Rampart - Tower Defense Balance Compiler & Offline Wave Simulator
//!
//! Compiles named difficulty presets (scalar tuning knobs) into fully
//! resolved numeric balance profiles, then forward-simulates how each
//! profile plays out across a 60-wave horizon without running the game.
//! Live gameplay systems read leaf fields of the active profile as an
//! opaque read-only config; they never call the compiler themselves.

pub mod analytics;
pub mod balance;
pub mod build_info;
pub mod lanes;
pub mod registry;
