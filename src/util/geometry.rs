// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate transform between pointer positions
//! in screen space and percentage-of-frame coordinates, so recorded points
//! stay resolution-independent.

/// Screen-space bounding rectangle of the displayed video frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Convert a pointer position to percentage-of-frame coordinates.
///
/// The result is not clamped: a click outside the frame rectangle yields
/// values outside [0, 100] and is accepted input.
pub fn pointer_to_percent(pointer_x: f64, pointer_y: f64, frame: FrameRect) -> (f64, f64) {
    (
        100.0 * (pointer_x - frame.left) / frame.width,
        100.0 * (pointer_y - frame.top) / frame.height,
    )
}

/// Convert percentage-of-frame coordinates back to a screen position.
pub fn percent_to_pointer(x: f64, y: f64, frame: FrameRect) -> (f64, f64) {
    (
        frame.left + x / 100.0 * frame.width,
        frame.top + y / 100.0 * frame.height,
    )
}
