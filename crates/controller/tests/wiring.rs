//! End-to-end wiring: surfaces → renderers → bus → coordinator → store → renderers.

use std::sync::{Arc, Mutex};

use mailboard_controller::Coordinator;
use mailboard_core::Renderer;
use mailboard_events::{infallible, topics, EventBus, InMemoryEventBus};
use mailboard_model::Store;
use mailboard_view::{
    ChartRenderer, CompositeRenderer, FormRenderer, ListRenderer, MemoryChartSurface,
    MemoryFormSurface, MemoryListSurface,
};

struct Page {
    bus: Arc<dyn EventBus<String>>,
    store: Arc<Store<String>>,
    form: Arc<MemoryFormSurface<String>>,
    list: Arc<MemoryListSurface<String>>,
    chart: Arc<MemoryChartSurface<String>>,
    coordinator: Coordinator<String>,
}

fn s(v: &str) -> String {
    v.to_string()
}

fn page(seed: &[&str]) -> Page {
    let bus: Arc<dyn EventBus<String>> = Arc::new(InMemoryEventBus::new());
    let store = Arc::new(Store::with_records(
        bus.clone(),
        seed.iter().map(|r| r.to_string()),
    ));

    let form = Arc::new(MemoryFormSurface::new());
    let list = Arc::new(MemoryListSurface::new());
    let chart = Arc::new(MemoryChartSurface::new());

    let children: Vec<Arc<dyn Renderer<String>>> = vec![
        Arc::new(FormRenderer::new(form.clone(), bus.clone())),
        Arc::new(ListRenderer::new(list.clone(), bus.clone())),
        Arc::new(ChartRenderer::new(chart.clone(), bus.clone())),
    ];
    let view = Arc::new(CompositeRenderer::new(children));

    let coordinator = Coordinator::new(store.clone(), view, bus.clone());

    Page {
        bus,
        store,
        form,
        list,
        chart,
        coordinator,
    }
}

#[test]
fn initialize_draws_every_part_of_the_page() {
    let p = page(&["daniele@marcopoloni.com", "dg2@marcopoloni.com", "dg22@marcopoloni.com"]);

    p.coordinator.initialize();

    let expected = vec![
        s("daniele@marcopoloni.com"),
        s("dg2@marcopoloni.com"),
        s("dg22@marcopoloni.com"),
    ];
    assert_eq!(p.form.mount_count(), 1);
    assert_eq!(p.list.entries(), expected);
    assert_eq!(p.chart.frames(), vec![expected]);
}

#[test]
fn submitting_the_form_adds_everywhere_and_clears_the_input() {
    let p = page(&["a@x.com"]);
    p.coordinator.initialize();

    p.form.submit(s("b@x.com"));

    assert_eq!(p.store.get_all(), vec![s("b@x.com"), s("a@x.com")]);
    assert_eq!(p.list.entries(), vec![s("b@x.com"), s("a@x.com")]);
    assert_eq!(p.chart.last_frame(), Some(vec![s("b@x.com"), s("a@x.com")]));
    assert_eq!(p.form.input(), None);
}

#[test]
fn clicking_remove_removes_from_store_and_list() {
    let p = page(&["b@x.com", "a@x.com"]);
    p.coordinator.initialize();

    p.list.click_remove(&s("a@x.com"));

    assert_eq!(p.store.get_all(), vec![s("b@x.com")]);
    assert_eq!(p.list.entries(), vec![s("b@x.com")]);
    assert_eq!(p.chart.last_frame(), Some(vec![s("b@x.com")]));
}

#[test]
fn removing_an_unknown_record_changes_nothing() {
    let p = page(&["a@x.com"]);
    p.coordinator.initialize();

    let removed = Arc::new(Mutex::new(0usize));
    let counter = removed.clone();
    p.bus.subscribe(
        &topics::MODEL_RECORD_REMOVED,
        infallible(move |_: &String| *counter.lock().unwrap() += 1),
    );

    p.list.click_remove(&s("nonexistent"));

    assert_eq!(p.store.get_all(), vec![s("a@x.com")]);
    assert_eq!(p.list.entries(), vec![s("a@x.com")]);
    assert_eq!(*removed.lock().unwrap(), 0);
}

#[test]
fn empty_submission_reaches_nobody() {
    let p = page(&["a@x.com"]);
    p.coordinator.initialize();

    p.form.submit(s(""));

    assert_eq!(p.store.get_all(), vec![s("a@x.com")]);
    assert_eq!(p.form.input(), Some(s("")));
}

#[test]
fn whitespace_submission_is_stored_as_typed() {
    let p = page(&[]);
    p.coordinator.initialize();

    p.form.submit(s(" "));

    assert_eq!(p.store.get_all(), vec![s(" ")]);
    assert_eq!(p.list.entries(), vec![s(" ")]);
    assert_eq!(p.form.input(), None);
}

#[test]
fn duplicate_submissions_are_kept() {
    let p = page(&[]);
    p.coordinator.initialize();

    p.form.submit(s("a@x.com"));
    p.form.submit(s("a@x.com"));
    p.list.click_remove(&s("a@x.com"));

    assert_eq!(p.store.get_all(), vec![s("a@x.com")]);
    assert_eq!(p.list.entries(), vec![s("a@x.com")]);
}

#[test]
fn model_announcement_arrives_inside_the_intent_dispatch() {
    let p = page(&[]);
    p.coordinator.initialize();

    let order = Arc::new(Mutex::new(Vec::new()));
    let on_added = order.clone();
    p.bus.subscribe(
        &topics::MODEL_RECORD_ADDED,
        infallible(move |r: &String| on_added.lock().unwrap().push(format!("added:{r}"))),
    );
    // Registered after the coordinator, so it runs once the coordinator's
    // handler (and everything it triggered) has returned.
    let on_intent = order.clone();
    p.bus.subscribe(
        &topics::VIEW_INTENT_ADD,
        infallible(move |r: &String| on_intent.lock().unwrap().push(format!("intent:{r}"))),
    );

    p.form.submit(s("x@x.com"));

    assert_eq!(
        *order.lock().unwrap(),
        vec![s("added:x@x.com"), s("intent:x@x.com")]
    );
}

#[test]
fn a_failing_subscriber_does_not_break_the_page() {
    let p = page(&[]);
    p.coordinator.initialize();

    p.bus.subscribe(
        &topics::MODEL_RECORD_ADDED,
        infallible(|_: &String| panic!("third-party widget crashed")),
    );

    p.form.submit(s("a@x.com"));
    p.form.submit(s("b@x.com"));

    assert_eq!(p.store.get_all(), vec![s("b@x.com"), s("a@x.com")]);
    assert_eq!(p.list.entries(), vec![s("b@x.com"), s("a@x.com")]);
}
