// SPDX-License-Identifier: MPL-2.0
use chantier::config::{self, Config, NotificationsConfig};
use chantier::sites::{Site, SiteId, SiteRegistry, SiteStatus};
use chantier::ui::notifications::{
    Manager, NotificationMessage, NotificationRequest, NotificationSettings, Severity,
};
use chantier::ui::theming::ThemeMode;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Counts how often the undo and confirm callbacks ran.
#[derive(Default, Clone)]
struct Calls {
    undo: Rc<Cell<u32>>,
    confirm: Rc<Cell<u32>>,
}

impl Calls {
    fn schedule(
        &self,
        manager: &mut Manager,
        message: &str,
        window: Duration,
        now: Instant,
    ) -> chantier::ui::notifications::NotificationId {
        let undo = Rc::clone(&self.undo);
        let confirm = Rc::clone(&self.confirm);
        manager.schedule_deferred_at(
            message,
            move || undo.set(undo.get() + 1),
            move || confirm.set(confirm.get() + 1),
            window,
            now,
        )
        .id
    }

    fn counts(&self) -> (u32, u32) {
        (self.undo.get(), self.confirm.get())
    }
}

#[test]
fn immediate_undo_runs_undo_once_and_never_confirms() {
    let mut manager = Manager::new();
    let calls = Calls::default();
    let t0 = Instant::now();

    let id = calls.schedule(&mut manager, "Item deleted", Duration::from_millis(5000), t0);
    manager.handle_message(&NotificationMessage::Undo(id));
    manager.handle_message(&NotificationMessage::Undo(id));
    manager.tick(t0 + Duration::from_secs(60));

    assert_eq!(calls.counts(), (1, 0));
    assert!(manager.is_empty());
    assert!(!manager.has_timers());
}

#[test]
fn elapsed_window_confirms_once() {
    let mut manager = Manager::new();
    let calls = Calls::default();
    let t0 = Instant::now();

    let id = calls.schedule(&mut manager, "Item deleted", Duration::from_millis(1000), t0);
    manager.tick(t0 + Duration::from_millis(1100));

    assert_eq!(calls.counts(), (0, 1));
    assert!(manager.get(id).is_none());

    // The button of a vanished toast and a late removal are both no-ops.
    assert!(manager.undo(id).is_none());
    assert!(!manager.remove(id));
    manager.tick(t0 + Duration::from_millis(5000));
    assert_eq!(calls.counts(), (0, 1));
}

#[test]
fn confirm_fires_exactly_at_the_deadline() {
    let mut manager = Manager::new();
    let calls = Calls::default();
    let t0 = Instant::now();

    calls.schedule(&mut manager, "Site deleted", Duration::from_millis(1000), t0);

    manager.tick(t0 + Duration::from_millis(999));
    assert_eq!(calls.counts(), (0, 0));
    assert_eq!(manager.len(), 1);

    manager.tick(t0 + Duration::from_millis(1000));
    assert_eq!(calls.counts(), (0, 1));
    assert!(manager.is_empty());
}

#[test]
fn external_removal_runs_neither_callback() {
    let mut manager = Manager::new();
    let calls = Calls::default();
    let t0 = Instant::now();

    let id = calls.schedule(&mut manager, "Site deleted", Duration::from_millis(1000), t0);
    manager.handle_message(&NotificationMessage::Dismiss(id));
    manager.tick(t0 + Duration::from_secs(2));

    assert_eq!(calls.counts(), (0, 0));
    assert_eq!(manager.pending_count(), 0);
}

#[test]
fn success_notification_auto_dismisses_silently() {
    let mut manager: Manager = Manager::new();
    let t0 = Instant::now();

    manager.add_at(
        NotificationRequest::success("Saved").auto_dismiss(Duration::from_millis(5000)),
        t0,
    );
    assert!(manager.tick(t0 + Duration::from_millis(4999)).is_empty());
    assert_eq!(manager.len(), 1);

    assert!(manager.tick(t0 + Duration::from_millis(5000)).is_empty());
    assert!(manager.is_empty());
}

#[test]
fn notifications_keep_insertion_order() {
    let mut manager: Manager = Manager::new();
    let a = manager.add(NotificationRequest::info("A"));
    let b = manager.add(NotificationRequest::error("B"));

    let order: Vec<_> = manager.notifications().map(|n| n.id()).collect();
    assert_eq!(order, vec![a, b]);

    manager.remove(a);
    let order: Vec<_> = manager.notifications().map(|n| n.id()).collect();
    assert_eq!(order, vec![b]);
}

#[test]
fn settings_from_config_file_drive_the_manager() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        notifications: NotificationsConfig {
            info_ms: Some(1500),
            undo_window_ms: Some(8000),
            undo_label: Some("Annuler".to_string()),
            ..NotificationsConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, config);

    let settings = NotificationSettings::from_config(&loaded.notifications);
    let mut manager: Manager = Manager::with_settings(settings);
    let t0 = Instant::now();

    let info = manager.add_at(NotificationRequest::info("Synced"), t0);
    assert_eq!(manager.deadline(info), Some(t0 + Duration::from_millis(1500)));

    let window = manager.settings().undo_window;
    let deferred = manager
        .schedule_deferred_at("Site deleted", || (), || (), window, t0)
        .id;
    assert_eq!(manager.deadline(deferred), Some(t0 + Duration::from_millis(8000)));
    let action = manager
        .get(deferred)
        .and_then(|n| n.deferred_action())
        .expect("deferred toast carries an action");
    assert_eq!(action.label(), "Annuler");
}

#[test]
fn config_falls_back_to_defaults_on_garbage() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
    assert_eq!(config.general.theme_mode, ThemeMode::System);
}

#[test]
fn error_toasts_stay_until_dismissed() {
    let mut manager: Manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.add_at(NotificationRequest::error("Could not save"), t0);

    manager.tick(t0 + Duration::from_secs(3600));
    assert_eq!(
        manager.get(id).map(|n| n.severity()),
        Some(Severity::Error)
    );
}

#[test]
fn site_list_survives_delete_and_restore_across_saves() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("sites.toml");

    let mut registry = SiteRegistry::new(vec![
        Site::new(SiteId::new(10), "Résidence Les Tilleuls")
            .with_city("Lyon")
            .with_status(SiteStatus::Active),
        Site::new(SiteId::new(11), "Groupe scolaire Jean Moulin").with_city("Grenoble"),
    ])
    .expect("ids are unique");
    registry.save_to_path(&path).expect("initial save");

    let removed = registry.take(SiteId::new(10)).expect("site exists");
    registry.save_to_path(&path).expect("save while undo is possible");
    let reloaded = SiteRegistry::load_from_path(&path).expect("reload");
    assert_eq!(reloaded.len(), 2);

    assert!(registry.restore(removed));
    registry.save_to_path(&path).expect("save after restore");
    let reloaded = SiteRegistry::load_from_path(&path).expect("reload");
    let names: Vec<_> = reloaded.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Résidence Les Tilleuls", "Groupe scolaire Jean Moulin"]
    );

    registry.take(SiteId::new(10)).expect("site exists");
    assert!(registry.commit_removal(SiteId::new(10)));
    registry.save_to_path(&path).expect("save after committed delete");
    let reloaded = SiteRegistry::load_from_path(&path).expect("reload");
    assert_eq!(reloaded.len(), 1);
}
