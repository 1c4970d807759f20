//! Terminal host for the NOVA state machines.
pub mod cli;
pub mod platform;
