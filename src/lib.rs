//! Finboard - presentation/orchestration layer for a personal-finance dashboard
//!
//! This library provides the uniform request/response cycle against a remote
//! analysis service, the widget lifecycle discipline for chart mount points,
//! and the shared rendering transforms used by every analysis panel.

pub mod chat;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod panels;
pub mod render;
