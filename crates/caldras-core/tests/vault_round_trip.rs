use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use caldras_core::{CaldrasError, LoadStatus, SearchScope, Vault};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.vault", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_vault_round_trip_preserves_order_and_bodies() {
    let temp = TempFile::new("caldras_round_trip");

    let notes = [
        ("Shopping", "eggs\nmilk", None),
        ("Diary", "# Monday\nrained all day", Some("diary-pw")),
        ("Ideas", "- **fast** notes", None),
        ("Keys", "wifi: hunter2", Some("keys-pw")),
    ];

    let mut vault = Vault::open(&temp.path);
    for (title, body, password) in notes {
        vault.create(title, body, password).expect("create should succeed");
    }
    vault.close().expect("close should succeed");

    let reloaded = Vault::open(&temp.path);
    assert_eq!(reloaded.status(), &LoadStatus::Loaded { notes: 4 });

    let list = reloaded.list();
    for (summary, (title, body, password)) in list.iter().zip(notes) {
        assert_eq!(summary.title, title);
        assert_eq!(summary.is_protected, password.is_some());
        assert_eq!(
            reloaded.read(summary.index, password).expect("read should succeed"),
            body
        );
    }
}

#[test]
fn test_protected_body_is_not_stored_in_clear() {
    let temp = TempFile::new("caldras_ciphertext");

    let mut vault = Vault::open(&temp.path);
    vault
        .create("Secret", "launch code 0000", Some("pw"))
        .expect("create should succeed");

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert!(on_disk.contains("Secret"));
    assert!(!on_disk.contains("launch code"));
}

#[test]
fn test_delete_then_reload_shifts_indices() {
    let temp = TempFile::new("caldras_delete");

    let mut vault = Vault::open(&temp.path);
    for title in ["zero", "one", "two", "three"] {
        vault.create(title, title, None).expect("create should succeed");
    }
    vault.delete(1).expect("delete should succeed");

    let reloaded = Vault::open(&temp.path);
    let titles: Vec<String> = reloaded.list().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["zero", "two", "three"]);
    assert_eq!(reloaded.read(1, None).expect("read should succeed"), "two");
}

#[test]
fn test_corrupt_file_loads_empty_then_saves_over() {
    let temp = TempFile::new("caldras_corrupt");
    fs::write(&temp.path, b"\x00\x01garbage").expect("write should succeed");

    let mut vault = Vault::open(&temp.path);
    assert!(matches!(vault.status(), LoadStatus::Corrupt { .. }));
    assert!(vault.is_empty());

    vault.create("Fresh", "start", None).expect("create should succeed");
    let reloaded = Vault::open(&temp.path);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_search_respects_scope_after_reload() {
    let temp = TempFile::new("caldras_search");

    let mut vault = Vault::open(&temp.path);
    vault.create("Plans", "visit the observatory", None).unwrap();
    vault.create("Locked", "observatory password", Some("pw")).unwrap();

    let reloaded = Vault::open(&temp.path);
    let hits = reloaded.search("OBSERVATORY", &SearchScope::new());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Plans");

    let scope = SearchScope::new().with_password(1, "pw");
    let hits = reloaded.search("observatory", &scope);
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_wrong_password_is_rejected_after_reload() {
    let temp = TempFile::new("caldras_wrong_pw");

    let mut vault = Vault::open(&temp.path);
    vault.create("Locked", "body", Some("right")).unwrap();

    let mut reloaded = Vault::open(&temp.path);
    assert!(matches!(
        reloaded.read(0, Some("wrong")),
        Err(CaldrasError::WrongPassword)
    ));
    assert!(matches!(
        reloaded.update(0, "new", Some("wrong")),
        Err(CaldrasError::WrongPassword)
    ));
    assert_eq!(reloaded.read(0, Some("right")).unwrap(), "body");
}
