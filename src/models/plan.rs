// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Placement plan data structures.
//!
//! This module defines the in-memory model for the ad-placement plan: the
//! ordered set of chosen timestamps and, per timestamp, the list of
//! insertion-region points.

use serde::{Deserialize, Serialize};

use crate::util::timecode;

/// Maximum number of points per timestamp (one insertion quadrilateral).
pub const MAX_POINTS_PER_MARK: usize = 4;

/// A 2D point in percentage-of-frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoint {
    pub x: f64,
    pub y: f64,
}

impl PlacementPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A user-selected timestamp retained for point annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampMark {
    /// Formatted `HH:MM:SS` label, unique within the plan
    pub label: String,
    /// Playback offset in seconds
    pub seconds: f64,
    /// Insertion-region points, at most [`MAX_POINTS_PER_MARK`]
    pub points: Vec<PlacementPoint>,
}

impl TimestampMark {
    fn new(label: String, seconds: f64) -> Self {
        Self {
            label,
            seconds,
            points: Vec::new(),
        }
    }
}

/// The full mapping of marks to their points, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPlan {
    marks: Vec<TimestampMark>,
    active: Option<usize>,
}

impl PlacementPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mark at the given playback position.
    ///
    /// The position is truncated to its `HH:MM:SS` label; a label already in
    /// the plan is left untouched so repeated captures at the same position
    /// stay idempotent. Marks keep selection order, not numeric order.
    /// Returns whether a mark was added.
    pub fn add_mark(&mut self, seconds: f64) -> bool {
        let label = timecode::format(seconds);
        if self.marks.iter().any(|m| m.label == label) {
            log::debug!("Timestamp {} already marked, ignoring", label);
            return false;
        }
        self.marks.push(TimestampMark::new(label, seconds.trunc()));
        true
    }

    /// Set the active mark for point entry. Unknown labels are ignored.
    pub fn select(&mut self, label: &str) {
        if let Some(idx) = self.marks.iter().position(|m| m.label == label) {
            self.active = Some(idx);
        }
    }

    /// Label of the mark currently receiving points, if any.
    pub fn active_label(&self) -> Option<&str> {
        self.active.map(|idx| self.marks[idx].label.as_str())
    }

    /// Append a point to the given mark's list.
    ///
    /// The 5th and later points are silently rejected, never truncating the
    /// existing list. Coordinates are taken as computed by the caller from a
    /// bounded pointer position and are not range-checked here.
    /// Returns whether the point was added.
    pub fn add_point(&mut self, label: &str, x: f64, y: f64) -> bool {
        let Some(mark) = self.marks.iter_mut().find(|m| m.label == label) else {
            return false;
        };
        if mark.points.len() >= MAX_POINTS_PER_MARK {
            log::debug!("Mark {} already has {} points, ignoring", label, MAX_POINTS_PER_MARK);
            return false;
        }
        mark.points.push(PlacementPoint::new(x, y));
        true
    }

    /// Points recorded for the given mark; empty for unknown labels.
    pub fn points_for(&self, label: &str) -> &[PlacementPoint] {
        self.marks
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.points.as_slice())
            .unwrap_or(&[])
    }

    /// All marks in selection order.
    pub fn marks(&self) -> &[TimestampMark] {
        &self.marks
    }

    /// Look up a mark by its label.
    pub fn mark(&self, label: &str) -> Option<&TimestampMark> {
        self.marks.iter().find(|m| m.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Discard all marks and the active selection.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.active = None;
    }
}
