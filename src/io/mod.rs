// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: backend API and plan serialization.

pub mod api;
pub mod serialization;
