//! Unit tests for settings_watcher module.

use mouse_manager::{ManagerConfig, SettingsEvent, SettingsWatcher};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("mouse-manager.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_watcher_on_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("absent").join("mouse-manager.json");

    assert!(SettingsWatcher::new(settings_path).is_err());
}

/// Ignored because file system notifications are timing-dependent and
/// platform-specific; run manually with `--ignored`.
#[test]
#[ignore]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("mouse-manager.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let config = ManagerConfig {
        threshold: 11.0,
        ..ManagerConfig::default()
    };
    config.save(&settings_path).unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    let mut seen = None;
    while Instant::now() < deadline {
        if let Some(event) = watcher.poll() {
            seen = Some(event);
            break;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    assert!(matches!(
        seen,
        Some(SettingsEvent::Modified | SettingsEvent::Created)
    ));
}
