// ABOUTME: Re-exports the unified error types from calplan-core
// ABOUTME: Keeps `crate::errors` as the single import path inside the library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types re-exported from `calplan-core`.

pub use calplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
