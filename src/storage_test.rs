use super::*;

#[test]
fn memory_store_round_trips_a_value() {
    let store = MemoryStore::new();
    assert_eq!(store.load("k"), Ok(None));
    store.store("k", "light").expect("store should accept");
    assert_eq!(store.load("k"), Ok(Some("light".to_owned())));
}

#[test]
fn unavailable_store_fails_every_call() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.load("k"), Err(StorageError::Unavailable));
    assert_eq!(store.store("k", "dark"), Err(StorageError::Unavailable));
    assert_eq!(store.peek("k"), None);
}

#[test]
fn shared_store_sees_writes_through_rc() {
    let store = std::rc::Rc::new(MemoryStore::new());
    let handle = std::rc::Rc::clone(&store);
    handle.store("theme", "dark").expect("store should accept");
    assert_eq!(store.peek("theme").as_deref(), Some("dark"));
}
