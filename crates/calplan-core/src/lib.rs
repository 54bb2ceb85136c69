// ABOUTME: Core types and constants for the calplan nutrition planner
// ABOUTME: Foundation crate with unified error handling and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calplan Core
//!
//! Foundation crate shared by the calplan library and CLI. It is designed to
//! change infrequently so the main crate can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Energy conversion factors, legacy storage keys and fallback values

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
