// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Wizard session driving the ad-placement workflow.
//!
//! This module owns the business state of the multi-step flow: upload the
//! video, capture timestamps, place insertion points, submit the plan. The
//! UI layer only renders this state and forwards user actions; network
//! requests run on a worker thread and resume the session through [`poll`],
//! so the session has a single writer at all times.
//!
//! [`poll`]: WizardSession::poll

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::io::api::{
    ApiError, CreateProjectRequest, CreatedProject, ProcessOutcome, SubmissionApi,
};
use crate::io::serialization::plan_entries;
use crate::models::plan::PlacementPlan;
use crate::models::project::ProjectDraft;
use crate::playback::Playback;
use crate::util::geometry::{pointer_to_percent, FrameRect};

/// Which backend request a pending or failed transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    CreateProject,
    ProcessVideo,
}

/// The step the wizard is currently on.
///
/// `Failed` keeps the wizard on the step whose request failed: the reason is
/// shown there and the same submission can be retried without losing the
/// plan.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    Uploading,
    TimestampSelection,
    PointSelection,
    Submitting,
    Done,
    Failed { phase: RequestKind, reason: String },
}

enum Completion {
    Created(CreatedProject),
    Processed(ProcessOutcome),
}

/// The one outstanding request; holding it locks step-advancing actions.
struct Pending {
    kind: RequestKind,
    rx: Receiver<Result<Completion, ApiError>>,
}

/// State and transitions for one pass through the wizard.
pub struct WizardSession {
    api: Arc<dyn SubmissionApi>,
    state: WizardState,
    draft: ProjectDraft,
    plan: PlacementPlan,
    server_filename: Option<String>,
    outcome: Option<ProcessOutcome>,
    pending: Option<Pending>,
}

impl WizardSession {
    pub fn new(api: Arc<dyn SubmissionApi>) -> Self {
        Self {
            api,
            state: WizardState::Uploading,
            draft: ProjectDraft::new(),
            plan: PlacementPlan::new(),
            server_filename: None,
            outcome: None,
            pending: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.draft
    }

    pub fn plan(&self) -> &PlacementPlan {
        &self.plan
    }

    /// Server-side identifier of the uploaded video, once known.
    pub fn server_filename(&self) -> Option<&str> {
        self.server_filename.as_deref()
    }

    /// Result body of a successful processing call.
    pub fn outcome(&self) -> Option<&ProcessOutcome> {
        self.outcome.as_ref()
    }

    /// Whether a request is outstanding; while true, step-advancing actions
    /// are ignored.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn in_upload_step(&self) -> bool {
        matches!(
            self.state,
            WizardState::Uploading
                | WizardState::Failed {
                    phase: RequestKind::CreateProject,
                    ..
                }
        )
    }

    fn in_point_step(&self) -> bool {
        matches!(
            self.state,
            WizardState::PointSelection
                | WizardState::Failed {
                    phase: RequestKind::ProcessVideo,
                    ..
                }
        )
    }

    /// Whether the upload form can be submitted right now.
    pub fn can_submit_project(&self) -> bool {
        self.in_upload_step() && !self.is_busy() && self.draft.is_submittable()
    }

    /// Submit the upload form: issues the create-project request.
    ///
    /// Ignored while a request is outstanding, outside the upload step, or
    /// when the draft is incomplete. Returns whether the request was issued.
    pub fn submit_project(&mut self) -> bool {
        if !self.can_submit_project() {
            return false;
        }

        let Some(video) = self.draft.video() else {
            return false;
        };
        let request = CreateProjectRequest {
            name: self.draft.name.trim().to_string(),
            description: self.draft.description.clone(),
            video_path: video.path().to_path_buf(),
        };

        log::info!("Creating project {:?}", request.name);
        let (tx, rx) = channel();
        let api = Arc::clone(&self.api);
        thread::spawn(move || {
            let result = api.create_project(&request).map(Completion::Created);
            let _ = tx.send(result);
        });
        self.pending = Some(Pending {
            kind: RequestKind::CreateProject,
            rx,
        });
        true
    }

    /// Record the current playback position as a mark.
    ///
    /// Duplicate positions (by formatted label) are ignored, so the capture
    /// button is idempotent under rapid repeated clicks.
    pub fn capture_mark(&mut self, playback: &dyn Playback) -> bool {
        if self.state != WizardState::TimestampSelection {
            return false;
        }
        let seconds = playback.position();
        let added = self.plan.add_mark(seconds);
        if added {
            log::info!("Marked timestamp at {}s, total: {}", seconds, self.plan.marks().len());
        }
        added
    }

    /// Close out timestamp selection. Zero marks is allowed and simply
    /// yields an empty plan.
    pub fn finalize_timestamps(&mut self) -> bool {
        if self.state != WizardState::TimestampSelection || self.is_busy() {
            return false;
        }
        log::info!("Finalized {} timestamps", self.plan.marks().len());
        self.state = WizardState::PointSelection;
        true
    }

    /// Choose the mark to place points on, seeking playback to its frame.
    pub fn select_mark(&mut self, label: &str, playback: &mut dyn Playback) {
        if !self.in_point_step() {
            return;
        }
        if let Some(mark) = self.plan.mark(label) {
            let seconds = mark.seconds;
            self.plan.select(label);
            playback.seek(seconds);
        }
    }

    /// Place a point on the active mark from a pointer position.
    ///
    /// Returns whether the point was recorded (false once the mark already
    /// holds its four points, or when no mark is active).
    pub fn place_point(&mut self, pointer_x: f64, pointer_y: f64, frame: FrameRect) -> bool {
        if !self.in_point_step() {
            return false;
        }
        let Some(label) = self.plan.active_label().map(str::to_string) else {
            return false;
        };
        let (x, y) = pointer_to_percent(pointer_x, pointer_y, frame);
        let added = self.plan.add_point(&label, x, y);
        if added {
            log::info!(
                "Added point ({:.2}, {:.2}) to {}, total: {}",
                x,
                y,
                label,
                self.plan.points_for(&label).len()
            );
        }
        added
    }

    /// Finalize and send: issues the process-video request.
    ///
    /// Also the retry path after a processing failure; the plan is reused
    /// as-is. Returns whether the request was issued.
    pub fn submit_plan(&mut self) -> bool {
        if !self.in_point_step() || self.is_busy() {
            return false;
        }
        let Some(filename) = self.server_filename.clone() else {
            log::error!("No server filename recorded, cannot submit plan");
            return false;
        };

        let entries = plan_entries(&self.plan);
        log::info!("Submitting plan for {} ({} timestamps)", filename, entries.len());

        let (tx, rx) = channel();
        let api = Arc::clone(&self.api);
        thread::spawn(move || {
            let result = api
                .process_video(&filename, &entries)
                .map(Completion::Processed);
            let _ = tx.send(result);
        });
        self.pending = Some(Pending {
            kind: RequestKind::ProcessVideo,
            rx,
        });
        self.state = WizardState::Submitting;
        true
    }

    /// Drain at most one network completion and apply its transition.
    ///
    /// This is the only resumption point: call it from the event loop.
    /// Returns whether a completion was processed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };

        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                let reason = "request worker terminated unexpectedly".to_string();
                Err(match pending.kind {
                    RequestKind::CreateProject => ApiError::ProjectCreation { reason },
                    RequestKind::ProcessVideo => ApiError::Processing { reason },
                })
            }
        };

        let kind = pending.kind;
        self.pending = None;
        self.finish(kind, result);
        true
    }

    fn finish(&mut self, kind: RequestKind, result: Result<Completion, ApiError>) {
        match (kind, result) {
            (RequestKind::CreateProject, Ok(Completion::Created(created))) => {
                log::info!("Project created, moving to timestamp selection");
                self.server_filename = Some(created.filename);
                self.draft.clear_metadata();
                self.state = WizardState::TimestampSelection;
            }
            (RequestKind::ProcessVideo, Ok(Completion::Processed(outcome))) => {
                log::info!("Plan accepted by backend");
                self.outcome = Some(outcome);
                self.state = WizardState::Done;
            }
            (kind, Ok(_)) => {
                // A worker can only send the completion for its own request.
                log::error!("Mismatched completion for {:?}", kind);
            }
            (kind, Err(e)) => {
                let reason = e.to_string();
                log::error!("Request failed on {:?}: {}", kind, reason);
                self.state = WizardState::Failed { phase: kind, reason };
            }
        }
    }

    /// Abandon the session: discards the plan, the draft, and the preview
    /// source, returning to a fresh upload step.
    pub fn reset(&mut self) {
        log::info!("Resetting wizard session");
        self.state = WizardState::Uploading;
        self.draft = ProjectDraft::new();
        self.plan.clear();
        self.server_filename = None;
        self.outcome = None;
        // A still-running worker finds the channel closed and exits.
        self.pending = None;
    }
}
