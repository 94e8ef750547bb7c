// SPDX-License-Identifier: MPL-2.0
//! `chantier` is a construction-site operations desk built with the Iced GUI
//! framework.
//!
//! Its centerpiece is a toast notification system where destructive actions
//! are deferred: deleting a site shows an undo toast, and the deletion is only
//! committed once the undo window elapses.

pub mod app;
pub mod config;
pub mod error;
pub mod sites;
pub mod ui;
