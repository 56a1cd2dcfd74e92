// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video timeline scrubber control.
//!
//! This module provides the timestamp-selection step: scrub the playback
//! position and mark the frames that should receive an ad insertion.

use crate::playback::{Playback, ScrubPlayback};
use crate::util::timecode;
use crate::wizard::WizardSession;

/// Result of timeline interaction.
pub enum TimelineAction {
    None,
    MarkCurrent,
    Finalize,
}

/// Display the timestamp-selection step.
pub fn show(
    ui: &mut egui::Ui,
    playback: &mut ScrubPlayback,
    session: &WizardSession,
) -> TimelineAction {
    let mut action = TimelineAction::None;

    ui.heading("Select Timestamps");
    ui.add_space(8.0);

    if let Some(video) = session.draft().video() {
        ui.label(egui::RichText::new(video.file_name()).weak());
        ui.add_space(4.0);
    }

    // Scrub controls stand in for the player transport
    ui.horizontal(|ui| {
        if ui.button("-10s").clicked() {
            playback.step(-10.0);
        }
        if ui.button("-1s").clicked() {
            playback.step(-1.0);
        }

        let mut position = playback.position();
        let response = ui.add(
            egui::DragValue::new(&mut position)
                .speed(0.5)
                .suffix(" s"),
        );
        if response.changed() {
            playback.seek(position);
        }

        if ui.button("+1s").clicked() {
            playback.step(1.0);
        }
        if ui.button("+10s").clicked() {
            playback.step(10.0);
        }

        ui.separator();
        ui.label(egui::RichText::new(timecode::format(playback.position())).monospace());
    });

    ui.add_space(8.0);
    if ui.button("Mark Timestamp").clicked() {
        action = TimelineAction::MarkCurrent;
    }

    ui.add_space(8.0);
    ui.separator();
    if session.plan().is_empty() {
        ui.label(egui::RichText::new("No timestamps marked yet").weak());
    } else {
        for mark in session.plan().marks() {
            ui.label(egui::RichText::new(&mark.label).monospace());
        }
    }
    ui.separator();

    ui.add_space(8.0);
    if ui.button("Finalize Timestamps").clicked() {
        action = TimelineAction::Finalize;
    }

    action
}
