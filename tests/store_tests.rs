use chatpad::MessageStore;

// ── append: rejection of empty input ──────────────────────────────────────────

#[test]
fn append_empty_string_is_a_no_op() {
    let mut store = MessageStore::new();
    assert!(store.append("").is_none());
    assert_eq!(store.len(), 0);
}

#[test]
fn append_whitespace_only_is_a_no_op() {
    let mut store = MessageStore::new();
    for s in ["   ", "\t", "\n", " \t \n ", "\r\n"] {
        assert!(store.append(s).is_none(), "{s:?} should be rejected");
    }
    assert!(store.is_empty());
}

#[test]
fn rejected_append_does_not_bump_revision() {
    let mut store = MessageStore::new();
    store.append("  ");
    assert_eq!(store.revision(), 0);
}

// ── append: accepted input ────────────────────────────────────────────────────

#[test]
fn append_grows_log_by_one() {
    let mut store = MessageStore::new();
    store.append("hello");
    assert_eq!(store.len(), 1);
    store.append("world");
    assert_eq!(store.len(), 2);
}

#[test]
fn append_stores_trimmed_text() {
    let mut store = MessageStore::new();
    let msg = store.append("  padded text \n").unwrap();
    assert_eq!(msg.text, "padded text");
}

#[test]
fn append_returns_the_stored_message() {
    let mut store = MessageStore::new();
    let msg = store.append("hi").unwrap().clone();
    assert_eq!(store.messages().last(), Some(&msg));
}

#[test]
fn append_bumps_revision_once_per_success() {
    let mut store = MessageStore::new();
    store.append("one");
    assert_eq!(store.revision(), 1);
    store.append("  ");
    assert_eq!(store.revision(), 1);
    store.append("two");
    assert_eq!(store.revision(), 2);
}

// ── ordering ──────────────────────────────────────────────────────────────────

#[test]
fn messages_preserve_insertion_order() {
    let mut store = MessageStore::new();
    store.append("m1");
    store.append("m2");
    store.append("m3");
    let texts: Vec<&str> = store.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["m1", "m2", "m3"]);
}

#[test]
fn snapshot_reflects_every_append_exactly_once() {
    let mut store = MessageStore::new();
    for i in 0..50 {
        store.append(&format!("msg-{i}"));
    }
    assert_eq!(store.len(), 50);
    for (i, msg) in store.messages().iter().enumerate() {
        assert_eq!(msg.text, format!("msg-{i}"));
    }
}

// ── timestamps ────────────────────────────────────────────────────────────────

#[test]
fn timestamps_are_non_decreasing_in_insertion_order() {
    let mut store = MessageStore::new();
    for i in 0..10 {
        store.append(&format!("msg-{i}"));
    }
    // %H:%M:%S compares correctly as a string within a session.
    for pair in store.messages().windows(2) {
        assert!(
            pair[0].timestamp <= pair[1].timestamp,
            "{} appended before {}",
            pair[0].timestamp,
            pair[1].timestamp
        );
    }
}

#[test]
fn timestamp_is_a_time_of_day_string() {
    let mut store = MessageStore::new();
    let msg = store.append("tick").unwrap();
    let ts = msg.timestamp.as_bytes();
    assert_eq!(ts.len(), 8, "expected HH:MM:SS, got {:?}", msg.timestamp);
    assert_eq!(ts[2], b':');
    assert_eq!(ts[5], b':');
}

// ── scenario from the contract ────────────────────────────────────────────────

#[test]
fn hello_blank_world_scenario() {
    let mut store = MessageStore::new();
    store.append("Hello");
    assert_eq!(store.len(), 1);
    assert_eq!(store.messages()[0].text, "Hello");

    store.append("  ");
    assert_eq!(store.len(), 1, "blank submission must leave the log unchanged");

    store.append("World");
    assert_eq!(store.len(), 2);
    assert_eq!(store.messages()[1].text, "World");
    assert!(!store.messages()[0].timestamp.is_empty());
    assert!(!store.messages()[1].timestamp.is_empty());
    assert!(store.messages()[0].timestamp <= store.messages()[1].timestamp);
}
