// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Spotmark application.

pub mod canvas;
pub mod timeline;
pub mod upload;
