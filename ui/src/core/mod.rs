//! Platform-agnostic state and data for the shell and its pages.

pub mod contact;
pub mod data;
pub mod disclosure;
pub mod format;
pub mod platform;
pub mod routes;
pub mod storage;
pub mod theme;
