use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use super::*;

struct Widget {
    label: String,
}

fn widget(label: &str) -> Arc<Widget> {
    Arc::new(Widget {
        label: label.to_string(),
    })
}

#[test]
fn test_get_or_create_returns_identical_instance() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    let first = registry.get_or_create("a", || widget("a"));
    let second = registry.get_or_create("a", || widget("other"));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.label, "a");
}

#[test]
fn test_get_or_create_factory_runs_once_under_contention() {
    let registry: Arc<KeyedRegistry<Widget>> = Arc::new(KeyedRegistry::new());
    let creations = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            let creations = creations.clone();
            thread::spawn(move || {
                registry.get_or_create("shared", || {
                    creations.fetch_add(1, Ordering::SeqCst);
                    widget("shared")
                })
            })
        })
        .collect();

    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(creations.load(Ordering::SeqCst), 1);
    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }
}

#[test]
fn test_find_absent() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    assert!(registry.find("missing").is_none());
}

#[test]
fn test_insert_then_find() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    registry.insert("a", widget("a")).unwrap();
    let found = registry.find("a").unwrap();
    assert_eq!(found.label, "a");
}

#[test]
fn test_insert_occupied_key_fails() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    registry.insert("a", widget("a")).unwrap();
    let result = registry.insert("a", widget("b"));
    assert!(result.is_err());
    // original entry untouched
    assert_eq!(registry.find("a").unwrap().label, "a");
}

#[test]
fn test_remove_returns_entry() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    let inserted = widget("a");
    registry.insert("a", inserted.clone()).unwrap();

    let removed = registry.remove("a").unwrap();
    assert!(Arc::ptr_eq(&inserted, &removed));
    assert!(registry.find("a").is_none());
    assert!(registry.remove("a").is_none());
}

#[test]
fn test_contains() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    assert!(!registry.contains("a"));
    registry.insert("a", widget("a")).unwrap();
    assert!(registry.contains("a"));
}

#[test]
fn test_keys_and_values() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    registry.insert("a", widget("a")).unwrap();
    registry.insert("b", widget("b")).unwrap();

    let mut keys = registry.keys();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(registry.values().len(), 2);
}

#[test]
fn test_for_each_visits_all_entries() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::new();
    registry.insert("a", widget("a")).unwrap();
    registry.insert("b", widget("b")).unwrap();

    let mut seen = Vec::new();
    registry.for_each(|key, value| {
        assert_eq!(key, value.label);
        seen.push(key.to_string());
    });
    seen.sort();
    assert_eq!(seen, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_len_and_is_empty() {
    let registry: KeyedRegistry<Widget> = KeyedRegistry::default();
    assert!(registry.is_empty());
    registry.insert("a", widget("a")).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn test_trait_object_entries() {
    trait Named: Send + Sync {
        fn name(&self) -> &str;
    }
    struct A;
    impl Named for A {
        fn name(&self) -> &str {
            "a"
        }
    }

    let registry: KeyedRegistry<dyn Named> = KeyedRegistry::new();
    registry.insert("a", Arc::new(A)).unwrap();
    assert_eq!(registry.find("a").unwrap().name(), "a");
}
