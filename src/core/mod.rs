//! Core engine modules
//!
//! This module contains all headless engine functionality:
//! - Configuration management
//! - Models (asset, plan, results)
//! - External process I/O (runner, tool discovery)
//! - Duration probing
//! - Segment planning
//! - Segment extraction
//! - Pipeline orchestration

pub mod config;
pub mod models;
pub mod io;

// Duration probing
pub mod probe;

// Segment planning
pub mod planner;

// Extraction
pub mod extraction;

// Pipeline orchestration
pub mod orchestrator;
