// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project draft state.
//!
//! This module holds the metadata the user enters on the upload step and
//! the handle to the locally selected video used for previewing.

use std::path::{Path, PathBuf};

/// Handle to the locally selected video backing the preview.
///
/// The wizard session owns exactly one of these; dropping it (on replacement
/// or session reset) releases the preview source.
#[derive(Debug)]
pub struct VideoSource {
    path: PathBuf,
}

impl VideoSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the selected video, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl Drop for VideoSource {
    fn drop(&mut self) {
        log::debug!("Released preview source {}", self.path.display());
    }
}

/// Metadata and file selection for a project being created.
#[derive(Debug, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    video: Option<VideoSource>,
}

impl ProjectDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a video file, replacing (and releasing) any previous preview.
    pub fn attach_video(&mut self, path: PathBuf) {
        log::info!("Selected video {}", path.display());
        self.video = Some(VideoSource::new(path));
    }

    pub fn video(&self) -> Option<&VideoSource> {
        self.video.as_ref()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// Whether the draft satisfies the upload-step requirements.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && self.video.is_some()
    }

    /// Clear the metadata fields once the server has acknowledged creation.
    /// The video handle stays attached so the preview keeps working.
    pub fn clear_metadata(&mut self) {
        self.name.clear();
        self.description.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submittable_requires_name_and_video() {
        let mut draft = ProjectDraft::new();
        assert!(!draft.is_submittable());

        draft.name = "Demo".to_string();
        assert!(!draft.is_submittable());

        draft.attach_video(PathBuf::from("/tmp/demo.mp4"));
        assert!(draft.is_submittable());

        draft.name = "   ".to_string();
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_clear_metadata_keeps_video() {
        let mut draft = ProjectDraft::new();
        draft.name = "Demo".to_string();
        draft.description = "desc".to_string();
        draft.attach_video(PathBuf::from("/tmp/demo.mp4"));

        draft.clear_metadata();
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.has_video());
    }

    #[test]
    fn test_video_file_name() {
        let source = VideoSource::new(PathBuf::from("/videos/clip.mp4"));
        assert_eq!(source.file_name(), "clip.mp4");
    }
}
