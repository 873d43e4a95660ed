// Store Tests
// Tests for the sled-backed versioned state store

use drugchain::storage::{SledStore, StateStore};
use tempfile::TempDir;

// ============================================================================
// STORE CREATION AND BASIC OPERATIONS
// ============================================================================

#[test]
fn test_store_open_new() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    assert!(store.is_empty());
}

#[test]
fn test_store_open_existing() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = SledStore::open(temp_dir.path()).unwrap();
        store.put("test_key", b"test_value").unwrap();
        store.flush().unwrap();
    }

    {
        let store = SledStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.get("test_key").unwrap(), Some(b"test_value".to_vec()));
    }
}

#[test]
fn test_store_get_nonexistent() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    assert_eq!(store.get("nonexistent").unwrap(), None);
}

#[test]
fn test_store_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("key", b"value1").unwrap();
    store.put("key", b"value2").unwrap();

    assert_eq!(store.get("key").unwrap(), Some(b"value2".to_vec()));
}

// ============================================================================
// REVISION LOG
// ============================================================================

#[test]
fn test_every_write_adds_one_revision() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("key", b"a").unwrap();
    store.put("key", b"b").unwrap();
    store.put("key", b"c").unwrap();

    let revisions: Vec<_> = store
        .history_of("key")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(revisions.len(), 3);
    let values: Vec<_> = revisions.iter().map(|r| r.value().unwrap().to_vec()).collect();
    assert_eq!(values, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
}

#[test]
fn test_revisions_in_strict_commit_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    for i in 0..20u32 {
        store.put("key", &i.to_be_bytes()).unwrap();
    }

    let revisions: Vec<_> = store
        .history_of("key")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    for pair in revisions.windows(2) {
        assert!(pair[0].sequence() < pair[1].sequence());
        assert!(pair[0].timestamp() <= pair[1].timestamp());
    }
    assert_eq!(revisions.first().unwrap().sequence(), 1);
    assert_eq!(revisions.last().unwrap().sequence(), 20);
}

#[test]
fn test_tx_ids_are_unique() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    let first = store.put("key", b"same").unwrap();
    let second = store.put("key", b"same").unwrap();

    assert_ne!(first.tx_id(), second.tx_id());
}

#[test]
fn test_put_returns_committed_revision() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    let written = store.put("key", b"value").unwrap();
    let logged = store.history_of("key").unwrap().next().unwrap().unwrap();

    assert_eq!(written, logged);
}

#[test]
fn test_history_of_unknown_key_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    assert_eq!(store.history_of("missing").unwrap().count(), 0);
}

#[test]
fn test_history_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = SledStore::open(temp_dir.path()).unwrap();
        store.put("key", b"one").unwrap();
        store.put("key", b"two").unwrap();
        store.flush().unwrap();
    }

    let store = SledStore::open(temp_dir.path()).unwrap();
    store.put("key", b"three").unwrap();

    let sequences: Vec<u64> = store
        .history_of("key")
        .unwrap()
        .map(|r| r.unwrap().sequence())
        .collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}

// ============================================================================
// DELETES AND CONDITIONAL WRITES
// ============================================================================

#[test]
fn test_delete_writes_tombstone() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("key", b"value").unwrap();
    let tombstone = store.delete("key").unwrap();

    assert!(tombstone.is_delete());
    assert_eq!(store.get("key").unwrap(), None);

    let revisions: Vec<_> = store.history_of("key").unwrap().map(|r| r.unwrap()).collect();
    assert_eq!(revisions.len(), 2);
    assert!(revisions[1].is_delete());
}

#[test]
fn test_put_if_absent_on_fresh_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    let revision = store.put_if_absent("key", b"value").unwrap();

    assert!(revision.is_some());
    assert_eq!(store.get("key").unwrap(), Some(b"value".to_vec()));
}

#[test]
fn test_put_if_absent_leaves_existing_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("key", b"first").unwrap();
    let revision = store.put_if_absent("key", b"second").unwrap();

    assert!(revision.is_none());
    assert_eq!(store.get("key").unwrap(), Some(b"first".to_vec()));
    assert_eq!(store.history_of("key").unwrap().count(), 1);
}

#[test]
fn test_put_if_absent_after_delete() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("key", b"first").unwrap();
    store.delete("key").unwrap();

    assert!(store.put_if_absent("key", b"again").unwrap().is_some());
    assert_eq!(store.history_of("key").unwrap().count(), 3);
}

// ============================================================================
// STATISTICS
// ============================================================================

#[test]
fn test_stats_count_keys_and_revisions() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();

    store.put("a", b"1").unwrap();
    store.put("a", b"2").unwrap();
    store.put("b", b"1").unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.key_count, 2);
    assert_eq!(stats.revision_count, 3);
}

#[test]
fn test_flush_every_write() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path())
        .unwrap()
        .with_flush_every_write(true);

    store.put("key", b"value").unwrap();

    assert_eq!(store.get("key").unwrap(), Some(b"value".to_vec()));
}
