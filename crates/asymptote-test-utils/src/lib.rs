//! Shared test fixtures for the Asymptote workspace.

pub mod fixtures;
