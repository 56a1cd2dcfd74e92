// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point-selection canvas.
//!
//! This module renders the paused video frame area and captures clicks as
//! insertion-region points for the selected timestamp.

use crate::models::plan::MAX_POINTS_PER_MARK;
use crate::playback::{Playback, ScrubPlayback};
use crate::util::geometry::{percent_to_pointer, FrameRect};
use crate::util::timecode;
use crate::wizard::{RequestKind, WizardSession, WizardState};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    SelectMark(String),
    PlacePoint { pointer: egui::Pos2, frame: FrameRect },
    Submit,
}

/// Display the point-selection step.
pub fn show(
    ui: &mut egui::Ui,
    session: &WizardSession,
    playback: &ScrubPlayback,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    ui.heading("Select Points for Each Timestamp");
    ui.add_space(8.0);

    if let WizardState::Failed {
        phase: RequestKind::ProcessVideo,
        reason,
    } = session.state()
    {
        let message = format!("Failed to process video. Please try again. ({reason})");
        ui.colored_label(egui::Color32::LIGHT_RED, message);
        ui.add_space(8.0);
    }

    if session.plan().is_empty() {
        ui.label(egui::RichText::new("No timestamps were marked; the plan will be empty").weak());
    } else {
        ui.label("Select a timestamp to place points:");
        ui.horizontal_wrapped(|ui| {
            for mark in session.plan().marks() {
                let selected = session.plan().active_label() == Some(mark.label.as_str());
                let text = format!(
                    "{} ({}/{})",
                    mark.label,
                    mark.points.len(),
                    MAX_POINTS_PER_MARK
                );
                if ui.selectable_label(selected, text).clicked() {
                    action = CanvasAction::SelectMark(mark.label.clone());
                }
            }
        });
    }

    ui.add_space(8.0);
    if let Some(label) = session.plan().active_label() {
        ui.label(format!("Current Timestamp: {}", label));
    }

    // Paused frame area; a 16:9 surface standing in for the video element
    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let available = ui.available_width();
        let size = egui::vec2(available, available * 9.0 / 16.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(40));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("Frame at {}", timecode::format(playback.position())),
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(150),
        );

        let frame = FrameRect::new(
            f64::from(rect.min.x),
            f64::from(rect.min.y),
            f64::from(rect.width()),
            f64::from(rect.height()),
        );

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                action = CanvasAction::PlacePoint { pointer, frame };
            }
        }

        // Draw the recorded points for the active mark
        if let Some(label) = session.plan().active_label() {
            for point in session.plan().points_for(label) {
                let (px, py) = percent_to_pointer(point.x, point.y, frame);
                let center = egui::pos2(px as f32, py as f32);
                painter.circle_filled(center, 4.0, egui::Color32::YELLOW);
                painter.circle_stroke(center, 4.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
            }
        }
    });

    if let Some(label) = session.plan().active_label() {
        let points = session.plan().points_for(label);
        for (i, point) in points.iter().enumerate() {
            ui.label(format!("Point {}: ({:.2}, {:.2})", i + 1, point.x, point.y));
        }
        if points.len() < MAX_POINTS_PER_MARK {
            ui.label(
                egui::RichText::new(format!(
                    "Click on the frame to select up to {} points for the current timestamp",
                    MAX_POINTS_PER_MARK
                ))
                .weak(),
            );
        }
    }

    ui.add_space(8.0);
    let can_submit = !session.is_busy() && session.server_filename().is_some();
    if ui
        .add_enabled(can_submit, egui::Button::new("Finalize and Send"))
        .clicked()
    {
        action = CanvasAction::Submit;
    }

    action
}
