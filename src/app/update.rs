// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Deleting a site is optimistic: the site leaves the list at once and a
//! deferred notification decides its fate. Undo puts it back; once the undo
//! window elapses the list is written to disk, and a failed write rolls the
//! deletion back.

use super::{persistence, Message};
use crate::error::Result;
use crate::sites::{RemovedSite, SiteId, SiteRegistry, SiteStatus};
use crate::ui::notifications::{Manager, NotificationMessage, NotificationRequest};
use iced::Task;
use std::path::Path;
use std::time::Instant;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub sites: &'a mut SiteRegistry,
    pub sites_path: Option<&'a Path>,
    pub notifications: &'a mut Manager<Message>,
    pub now: &'a mut Instant,
}

/// Turns callback outputs from the notification manager into follow-up messages.
fn dispatch(outputs: Vec<Message>) -> Task<Message> {
    if outputs.is_empty() {
        Task::none()
    } else {
        Task::batch(outputs.into_iter().map(Task::done))
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) -> Task<Message> {
    dispatch(ctx.notifications.handle_message(message))
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    dispatch(ctx.notifications.tick(now))
}

pub fn handle_delete_site(ctx: &mut UpdateContext<'_>, id: SiteId) -> Task<Message> {
    let Some(removed) = ctx.sites.take(id) else {
        tracing::debug!(site = %id, "delete requested for unknown site");
        return Task::none();
    };

    let text = format!("Site \"{}\" deleted", removed.site.name);
    let for_undo = removed.clone();
    let window = ctx.notifications.settings().undo_window;

    let scheduled = ctx.notifications.schedule_deferred(
        text,
        move || Message::RestoreSite(for_undo),
        move || Message::PersistDeletion(removed),
        window,
    );

    dispatch(scheduled.confirmed.into_iter().collect())
}

pub fn handle_restore_site(ctx: &mut UpdateContext<'_>, removed: RemovedSite) -> Task<Message> {
    let id = removed.site.id;
    if ctx.sites.restore(removed) {
        tracing::info!(site = %id, "site restored");
    } else {
        tracing::warn!(site = %id, "site already present, restore skipped");
    }
    Task::none()
}

pub fn handle_persist_deletion(ctx: &mut UpdateContext<'_>, removed: RemovedSite) -> Task<Message> {
    ctx.sites.commit_removal(removed.site.id);
    persistence::persist_sites(ctx.sites_path, ctx.sites.snapshot(), move |result| {
        Message::DeletionPersisted { removed, result }
    })
}

pub fn handle_deletion_persisted(
    ctx: &mut UpdateContext<'_>,
    removed: RemovedSite,
    result: Result<()>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!(site = %removed.site.id, "site deletion saved");
        }
        Err(error) => {
            tracing::error!(site = %removed.site.id, %error, "failed to save site deletion");
            let name = removed.site.name.clone();
            ctx.sites.restore(removed);
            ctx.notifications.add(NotificationRequest::error(format!(
                "Could not delete \"{name}\": {error}"
            )));
        }
    }
    Task::none()
}

pub fn handle_advance_status(ctx: &mut UpdateContext<'_>, id: SiteId) -> Task<Message> {
    let Some(status) = ctx.sites.advance_status(id) else {
        return Task::none();
    };
    tracing::debug!(site = %id, status = status.label(), "status advanced");

    persistence::persist_sites(ctx.sites_path, ctx.sites.snapshot(), move |result| {
        Message::StatusPersisted { id, status, result }
    })
}

pub fn handle_status_persisted(
    ctx: &mut UpdateContext<'_>,
    id: SiteId,
    status: SiteStatus,
    result: Result<()>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications.add(NotificationRequest::success("Saved"));
        }
        Err(error) => {
            tracing::error!(site = %id, %error, "failed to save site status");
            ctx.notifications.add(NotificationRequest::error(format!(
                "Could not save status \"{}\": {error}",
                status.label()
            )));
        }
    }
    Task::none()
}
