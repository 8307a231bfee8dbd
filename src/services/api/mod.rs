//! Typed wrappers over the backend routes, grouped by area.
//!
//! Each file adds an `impl ApiClient` block. Methods take the bearer token
//! explicitly; the page layer decides where it comes from.

mod admin;
mod ai;
mod applications;
mod auth;
mod jobs;
mod recruiter;
