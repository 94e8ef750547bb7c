// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`notifications`] - Toast notifications with deferred undo
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod theming;
