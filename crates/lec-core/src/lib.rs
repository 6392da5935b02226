//! # lec-core
//!
//! Core types shared across all Lectern crates:
//! - Entity records returned by the remote course API (courses, modules,
//!   lessons, enrollments, reviews, announcements, users)
//! - Status enums reported by the server (enrollment, module progress,
//!   review moderation)
//! - Request payloads for the mutating endpoints
//! - The server's response envelope
//! - The validation error raised by payloads and enum parsing

pub mod entities;
pub mod enums;
pub mod errors;
pub mod payloads;
pub mod responses;
