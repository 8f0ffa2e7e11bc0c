//! Integration tests for the config store functionality.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;
use wallclock::{ClockConfiguration, ConfigStore};

fn write_config(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join("config.json");
    fs::write(&path, content).unwrap();
    path
}

mod loading {
    use super::*;

    #[test]
    fn loads_configuration_from_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"{ "sizePercent": 35.0, "position": { "xPercent": 80.0 } }"#,
        );

        let store = ConfigStore::load_from(&path);
        let config = store.get_current();

        assert_eq!(config.size_percent, 35.0);
        assert_eq!(config.position.x_percent, 80.0);
        assert_eq!(config.position.y_percent, 50.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::load_from(&temp.path().join("does-not-exist.json"));

        assert_eq!(store.get_current(), ClockConfiguration::default());
    }

    #[test]
    fn invalid_document_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "this is not json");

        let store = ConfigStore::load_from(&path);

        assert_eq!(store.get_current(), ClockConfiguration::default());
    }

    #[test]
    fn non_object_document_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#""a bare string""#);

        let store = ConfigStore::load_from(&path);

        assert_eq!(store.get_current(), ClockConfiguration::default());
    }
}

mod reloading {
    use super::*;

    #[test]
    fn reload_replaces_the_whole_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{ "sizePercent": 35.0, "backgroundBlur": 2.0 }"#);

        let store = ConfigStore::load_from(&path);
        assert_eq!(store.get_current().background_blur, 2.0);

        store.reload_from_slice(br#"{ "sizePercent": 70.0 }"#);
        let config = store.get_current();

        assert_eq!(config.size_percent, 70.0);
        // Whole-document replacement: the old blur override is gone.
        assert_eq!(
            config.background_blur,
            ClockConfiguration::default().background_blur
        );
    }

    #[test]
    fn reload_failure_installs_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{ "sizePercent": 35.0 }"#);

        let store = ConfigStore::load_from(&path);
        store.reload_from_slice(b"{ truncated");

        assert_eq!(store.get_current(), ClockConfiguration::default());
    }

    #[test]
    fn generation_tracks_replacements() {
        let store = ConfigStore::with_defaults();
        let before = store.generation();

        store.reload_from_slice(br#"{ "sizePercent": 10.0 }"#);
        store.reload_from_slice(br#"{ "sizePercent": 11.0 }"#);

        assert_eq!(store.generation(), before + 2);
    }
}

mod concurrency {
    use super::*;
    use std::thread;

    #[test]
    fn readers_always_observe_complete_configurations() {
        let store = ConfigStore::with_defaults();
        let writer = store.clone();

        let handle = thread::spawn(move || {
            for i in 0..100u32 {
                let doc = format!(r#"{{ "sizePercent": {}.0 }}"#, i);
                writer.reload_from_slice(doc.as_bytes());
            }
        });

        for _ in 0..100 {
            let config = store.get_current();
            // A size override never disturbs the rest of the snapshot.
            assert_eq!(config.disc, ClockConfiguration::default().disc);
        }

        handle.join().unwrap();
        assert_eq!(store.generation(), 100);
    }
}
