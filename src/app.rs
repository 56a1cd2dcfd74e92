// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module hosts the wizard session and renders the step the session
//! is on. All business state lives in [`WizardSession`]; this layer only
//! draws it and forwards user actions.

use std::sync::Arc;

use crate::io::api::SubmissionApi;
use crate::io::serialization::{self, PlanExport};
use crate::playback::ScrubPlayback;
use crate::ui::{canvas, timeline, upload};
use crate::wizard::{RequestKind, WizardSession, WizardState};

/// Main application state.
pub struct SpotmarkApp {
    /// Wizard session owning the draft, the plan, and the step machine
    session: WizardSession,

    /// Playback position adapter driven by the timeline controls
    playback: ScrubPlayback,
}

impl SpotmarkApp {
    /// Create a new Spotmark application instance.
    pub fn new(api: Arc<dyn SubmissionApi>) -> Self {
        Self {
            session: WizardSession::new(api),
            playback: ScrubPlayback::new(),
        }
    }

    /// Abandon the current session and start over.
    fn new_session(&mut self) {
        self.session.reset();
        self.playback.rewind();
    }

    /// Export a local copy of the current plan.
    fn export_plan(&self, path: std::path::PathBuf) {
        let export = PlanExport {
            video_filename: self.session.server_filename().map(str::to_string),
            timestamps: serialization::plan_entries(self.session.plan()),
        };

        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => serialization::export_yaml(&export, &path),
            Some("json") => serialization::export_json(&export, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Exported plan to {}", path.display()),
            Err(e) => log::error!("Failed to export plan: {}", e),
        }
    }

    fn show_done(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Video processed successfully");
            if let Some(outcome) = self.session.outcome() {
                if let Ok(pretty) = serde_json::to_string_pretty(&outcome.body) {
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(pretty).monospace());
                }
            }
            ui.add_space(20.0);
            if ui.button("Start New Project").clicked() {
                self.new_session();
            }
        });
    }

    fn show_submitting(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Sending plan to backend...")
                        .size(16.0)
                        .color(egui::Color32::from_gray(200)),
                );
            });
        });
    }
}

impl eframe::App for SpotmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Resume the session if a network request completed
        self.session.poll();

        // Keep polling while a request is outstanding
        if self.session.is_busy() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Project").clicked() {
                        self.new_session();
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_plan = !self.session.plan().is_empty();
                    ui.add_enabled_ui(has_plan, |ui| {
                        ui.menu_button("Export Plan", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("plan.yaml")
                                    .save_file()
                                {
                                    self.export_plan(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("plan.json")
                                    .save_file()
                                {
                                    self.export_plan(path);
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });

        // Current step (center)
        let state = self.session.state().clone();
        match state {
            WizardState::Uploading
            | WizardState::Failed {
                phase: RequestKind::CreateProject,
                ..
            } => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| upload::show(ui, &mut self.session))
                    .inner;
                match action {
                    upload::UploadAction::ChooseVideo => {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Videos", &["mp4", "mov", "mkv", "webm", "avi"])
                            .pick_file()
                        {
                            self.session.draft_mut().attach_video(path);
                            self.playback.rewind();
                        }
                    }
                    upload::UploadAction::Submit => {
                        self.session.submit_project();
                    }
                    upload::UploadAction::None => {}
                }
            }

            WizardState::TimestampSelection => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| timeline::show(ui, &mut self.playback, &self.session))
                    .inner;
                match action {
                    timeline::TimelineAction::MarkCurrent => {
                        self.session.capture_mark(&self.playback);
                    }
                    timeline::TimelineAction::Finalize => {
                        self.session.finalize_timestamps();
                    }
                    timeline::TimelineAction::None => {}
                }
            }

            WizardState::PointSelection
            | WizardState::Failed {
                phase: RequestKind::ProcessVideo,
                ..
            } => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| canvas::show(ui, &self.session, &self.playback))
                    .inner;
                match action {
                    canvas::CanvasAction::SelectMark(label) => {
                        self.session.select_mark(&label, &mut self.playback);
                    }
                    canvas::CanvasAction::PlacePoint { pointer, frame } => {
                        self.session.place_point(
                            f64::from(pointer.x),
                            f64::from(pointer.y),
                            frame,
                        );
                    }
                    canvas::CanvasAction::Submit => {
                        self.session.submit_plan();
                    }
                    canvas::CanvasAction::None => {}
                }
            }

            WizardState::Submitting => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_submitting(ui));
            }

            WizardState::Done => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_done(ui));
            }
        }
    }
}
