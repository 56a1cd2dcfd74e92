// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Spotmark - Ad Placement Planner
//!
//! A cross-platform desktop application for planning ad insertions in
//! videos: mark timestamps, outline insertion regions, and submit the plan
//! to the processing backend.

use std::sync::Arc;

use anyhow::Result;
use spotmark::app::SpotmarkApp;
use spotmark::io::api::{EnvTokenStore, HttpApi};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Backend endpoint and credential source
    let base_url = std::env::var("SPOTMARK_API_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    log::info!("Using backend at {}", base_url);
    let tokens = Arc::new(EnvTokenStore::new("SPOTMARK_BEARER_TOKEN"));
    let api = Arc::new(HttpApi::new(base_url, tokens)?);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Spotmark - Ad Placement Planner"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Spotmark",
        options,
        Box::new(move |_cc| Ok(Box::new(SpotmarkApp::new(api)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
