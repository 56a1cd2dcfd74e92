// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Spotmark - Ad Placement Planner
//!
//! Library interface so integration tests can drive the wizard without a UI.

pub mod app;
pub mod io;
pub mod models;
pub mod playback;
pub mod ui;
pub mod util;
pub mod wizard;

// Re-export commonly used types
pub use io::api::{ApiError, HttpApi, SubmissionApi, TokenStore};
pub use models::plan::PlacementPlan;
pub use wizard::{WizardSession, WizardState};
