use std::sync::atomic::{AtomicBool, Ordering};

use corebus_protocols::Notification;

use super::*;

struct NullNotifier;

impl Notifier for NullNotifier {
    fn send_notification(&self, _note: Notification) {}

    fn key(&self) -> &str {
        "test"
    }
}

struct RecordingProxy {
    name: String,
    registered: AtomicBool,
    removed: AtomicBool,
}

impl RecordingProxy {
    fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            registered: AtomicBool::new(false),
            removed: AtomicBool::new(false),
        })
    }
}

impl Proxy for RecordingProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_register(&self, notifier: Weak<dyn Notifier>) {
        self.registered
            .store(notifier.upgrade().is_some(), Ordering::SeqCst);
    }

    fn on_remove(&self) {
        self.removed.store(true, Ordering::SeqCst);
    }
}

fn test_model() -> (Model, Arc<dyn Notifier>) {
    let notifier: Arc<dyn Notifier> = Arc::new(NullNotifier);
    (Model::new("test", Arc::downgrade(&notifier)), notifier)
}

#[test]
fn test_register_and_retrieve_round_trip() {
    let (model, _notifier) = test_model();
    let proxy = RecordingProxy::new("data");

    model.register_proxy(proxy.clone());
    assert!(proxy.registered.load(Ordering::SeqCst));

    let retrieved = model.retrieve_proxy("data").unwrap();
    assert!(Arc::ptr_eq(&retrieved, &(proxy as Arc<dyn Proxy>)));
}

#[test]
fn test_retrieve_absent_proxy_fails() {
    let (model, _notifier) = test_model();
    let err = model.retrieve_proxy("ghost").unwrap_err();
    assert!(matches!(err, CoreError::ProxyNotFound(_)));
}

#[test]
fn test_remove_returns_handle_and_fires_hook() {
    let (model, _notifier) = test_model();
    let proxy = RecordingProxy::new("data");

    model.register_proxy(proxy.clone());
    let removed = model.remove_proxy("data").unwrap();
    assert!(Arc::ptr_eq(&removed, &(proxy.clone() as Arc<dyn Proxy>)));
    assert!(proxy.removed.load(Ordering::SeqCst));

    assert!(model.retrieve_proxy("data").is_err());
    assert!(model.remove_proxy("data").is_none());
}

#[test]
fn test_name_collision_is_silently_rejected() {
    let (model, _notifier) = test_model();
    let first = RecordingProxy::new("data");
    let second = RecordingProxy::new("data");

    model.register_proxy(first.clone());
    model.register_proxy(second.clone());

    assert!(!second.registered.load(Ordering::SeqCst));
    let retrieved = model.retrieve_proxy("data").unwrap();
    assert!(Arc::ptr_eq(&retrieved, &(first as Arc<dyn Proxy>)));
}

#[test]
fn test_reregistration_after_removal() {
    let (model, _notifier) = test_model();
    let first = RecordingProxy::new("data");
    let second = RecordingProxy::new("data");

    model.register_proxy(first);
    model.remove_proxy("data").unwrap();
    model.register_proxy(second.clone());

    assert!(second.registered.load(Ordering::SeqCst));
}

#[test]
fn test_has_proxy_and_names() {
    let (model, _notifier) = test_model();
    model.register_proxy(RecordingProxy::new("a"));
    model.register_proxy(RecordingProxy::new("b"));

    assert!(model.has_proxy("a"));
    assert!(!model.has_proxy("c"));

    let mut names = model.proxy_names();
    names.sort();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_clear_drops_without_hooks() {
    let (model, _notifier) = test_model();
    let proxy = RecordingProxy::new("data");

    model.register_proxy(proxy.clone());
    model.clear();

    assert!(!model.has_proxy("data"));
    assert!(!proxy.removed.load(Ordering::SeqCst));
}
