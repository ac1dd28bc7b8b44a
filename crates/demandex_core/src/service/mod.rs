//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into feature-level APIs, one service per
//!   page area.
//! - Generate identity and timestamps on creation paths so callers only
//!   supply domain input.

pub mod goal_service;
pub mod habit_service;
pub mod ledger_service;
pub mod notification_service;
pub mod task_service;
