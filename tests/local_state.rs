//! Integration tests for durable client-local state: search history and
//! observer settings over a file-backed store.

use tempfile::TempDir;
use wildtrack_core::{
    HomeArea, JsonFileStore, ObserverRole, ObserverSettings, SearchHistory, Sighting,
    SightingSession,
};

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::open(dir.path().join("wildtrack").join("local_store.json")).unwrap()
}

#[test]
fn history_survives_a_session_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut session = SightingSession::open(store_in(&dir)).unwrap();
        session.replace_sightings(vec![Sighting {
            id: 1,
            species: Some("Hawk".to_string()),
            ..Sighting::default()
        }]);
        session.submit_search("Hawk").unwrap();
        session.submit_search("Owl").unwrap();
        session.submit_search("Hawk").unwrap();
    }

    // A new session over the same file sees the deduplicated, recency-first
    // list.
    let session = SightingSession::open(store_in(&dir)).unwrap();
    assert_eq!(session.history().entries(), ["Hawk", "Owl"]);
}

#[test]
fn history_cap_holds_across_restarts() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = store_in(&dir);
        let mut history = SearchHistory::load(&store).unwrap();
        for i in 0..11 {
            history.add(&format!("query {i}"), &mut store).unwrap();
        }
    }

    let reloaded = SearchHistory::load(&store_in(&dir)).unwrap();
    assert_eq!(reloaded.entries().len(), 10);
    assert_eq!(reloaded.entries()[0], "query 10");
    assert!(!reloaded.entries().iter().any(|e| e == "query 0"));
}

#[test]
fn forget_search_persists_the_removal() {
    let dir = TempDir::new().unwrap();

    {
        let mut session = SightingSession::open(store_in(&dir)).unwrap();
        session.submit_search("Coyote").unwrap();
        session.submit_search("Crow").unwrap();
        session.forget_search("Coyote").unwrap();
    }

    let session = SightingSession::open(store_in(&dir)).unwrap();
    assert_eq!(session.history().entries(), ["Crow"]);
}

#[test]
fn settings_and_history_share_the_store_file() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = store_in(&dir);
        let mut history = SearchHistory::load(&store).unwrap();
        history.add("Hawk", &mut store).unwrap();

        let settings = ObserverSettings {
            name: "Riley".to_string(),
            bio: String::new(),
            role: ObserverRole::Tourist,
            home_area: HomeArea::OutsideCalifornia,
        };
        settings.save(&mut store).unwrap();
    }

    let store = store_in(&dir);
    let history = SearchHistory::load(&store).unwrap();
    let settings = ObserverSettings::load(&store).unwrap();
    assert_eq!(history.entries(), ["Hawk"]);
    assert_eq!(settings.name, "Riley");
    assert_eq!(settings.role, ObserverRole::Tourist);
    assert_eq!(settings.home_area, HomeArea::OutsideCalifornia);
}

#[test]
fn fresh_store_starts_empty_with_default_settings() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(SearchHistory::load(&store).unwrap().is_empty());
    assert_eq!(
        ObserverSettings::load(&store).unwrap(),
        ObserverSettings::default()
    );
}
