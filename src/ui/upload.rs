// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload step form.
//!
//! This module renders the project-creation form: name, description, and
//! the video file picker.

use crate::wizard::{RequestKind, WizardSession, WizardState};

/// Result of upload form interaction.
pub enum UploadAction {
    None,
    ChooseVideo,
    Submit,
}

/// Display the project-creation form.
pub fn show(ui: &mut egui::Ui, session: &mut WizardSession) -> UploadAction {
    let mut action = UploadAction::None;

    ui.heading("Create New Project");
    ui.add_space(8.0);

    if let WizardState::Failed {
        phase: RequestKind::CreateProject,
        reason,
    } = session.state()
    {
        let message = format!("Failed to create project. Please try again. ({reason})");
        ui.colored_label(egui::Color32::LIGHT_RED, message);
        ui.add_space(8.0);
    }

    egui::Grid::new("project_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Project Name");
            ui.text_edit_singleline(&mut session.draft_mut().name);
            ui.end_row();

            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut session.draft_mut().description)
                    .desired_rows(3),
            );
            ui.end_row();

            ui.label("Upload Video");
            ui.horizontal(|ui| {
                if ui.button("Choose Video...").clicked() {
                    action = UploadAction::ChooseVideo;
                }
                match session.draft().video() {
                    Some(video) => ui.label(video.file_name()),
                    None => ui.label(egui::RichText::new("no file selected").weak()),
                };
            });
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(session.can_submit_project(), egui::Button::new("Create Project"))
            .clicked()
        {
            action = UploadAction::Submit;
        }
        if session.is_busy() {
            ui.spinner();
            ui.label("Creating project...");
        }
    });

    action
}
