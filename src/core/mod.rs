//! Core functionality of the gateway
//!
//! The generation proxy, the headless comparison slider and the client-side
//! flows built on top of them.

pub mod catalog;
pub mod generation;
pub mod session;
pub mod slider;
pub mod views;
