use std::cell::RefCell;
use std::rc::Rc;

use chart_box::api::{BoxChart, BoxChartConfig};
use chart_box::core::{PlotGeometry, Record, Series};
use chart_box::extensions::{ChartContext, ChartEvent, ChartEventKind, ChartObserver};
use chart_box::render::NullRenderer;

struct RecordingObserver {
    id: String,
    kinds: Vec<ChartEventKind>,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl RecordingObserver {
    fn boxed(
        id: &str,
        kinds: &[ChartEventKind],
        events: Rc<RefCell<Vec<ChartEvent>>>,
    ) -> Box<dyn ChartObserver> {
        Box::new(Self {
            id: id.to_owned(),
            kinds: kinds.to_vec(),
            events,
        })
    }
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn observes(&self, kind: ChartEventKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn on_event(&mut self, event: &ChartEvent, _context: ChartContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn scenario_chart() -> BoxChart<NullRenderer> {
    let series = Series::new(vec![
        Record::new().with_number("x", 0.0).with_number("y", 1.0),
        Record::new().with_number("x", 10.0).with_number("y", 5.0),
        Record::new().with_number("x", 20.0).with_number("y", 3.0),
    ]);
    BoxChart::new(
        NullRenderer::default(),
        BoxChartConfig::new(PlotGeometry::new(100.0, 100.0)),
        series,
    )
    .expect("chart")
}

#[test]
fn hover_reports_point_and_index() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "rec",
            &[ChartEventKind::Hover],
            events.clone(),
        ))
        .expect("register");

    chart.pointer_move(50.0);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ChartEvent::Hover { index, point } => {
            assert_eq!(*index, 1);
            assert_eq!(point.number("y"), Some(5.0));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn hover_at_first_point_is_emitted() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "rec",
            &[ChartEventKind::Hover],
            events.clone(),
        ))
        .expect("register");

    chart.pointer_move(0.0);

    assert!(matches!(
        events.borrow().as_slice(),
        [ChartEvent::Hover { index: 0, .. }]
    ));
}

#[test]
fn hover_beyond_last_point_is_not_emitted() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "rec",
            &[ChartEventKind::Hover],
            events.clone(),
        ))
        .expect("register");

    chart.pointer_move(110.0);
    chart.pointer_move(-10.0);

    assert!(events.borrow().is_empty());
}

#[test]
fn leave_is_emitted_to_leave_observers() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "rec",
            &[ChartEventKind::Leave],
            events.clone(),
        ))
        .expect("register");

    chart.pointer_move(50.0);
    chart.pointer_leave();

    assert_eq!(events.borrow().as_slice(), &[ChartEvent::Leave]);
}

#[test]
fn events_are_only_routed_to_subscribed_kinds() {
    let mut chart = scenario_chart();
    let hovers = Rc::new(RefCell::new(Vec::new()));
    let clicks = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "hover",
            &[ChartEventKind::Hover],
            hovers.clone(),
        ))
        .expect("register hover");
    chart
        .register_observer(RecordingObserver::boxed(
            "click",
            &[ChartEventKind::Click],
            clicks.clone(),
        ))
        .expect("register click");

    chart.pointer_move(50.0);
    chart.pointer_click(100.0);

    assert!(matches!(hovers.borrow().as_slice(), [ChartEvent::Hover { index: 1, .. }]));
    assert!(matches!(clicks.borrow().as_slice(), [ChartEvent::Click { index: 2, .. }]));
}

#[test]
fn unsubscribed_kinds_emit_nothing() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed(
            "rec",
            &[ChartEventKind::Leave],
            events.clone(),
        ))
        .expect("register");

    assert!(!chart.has_observer(ChartEventKind::Hover));
    chart.pointer_move(50.0);
    chart.pointer_click(50.0);

    assert!(events.borrow().is_empty());
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let mut chart = scenario_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_observer(RecordingObserver::boxed("rec", &[], events.clone()))
        .expect("register");

    assert!(chart
        .register_observer(RecordingObserver::boxed("rec", &[], events.clone()))
        .is_err());
    assert!(chart
        .register_observer(RecordingObserver::boxed("", &[], events))
        .is_err());
    assert_eq!(chart.observer_count(), 1);
    assert!(chart.unregister_observer("rec"));
    assert!(!chart.unregister_observer("rec"));
    assert_eq!(chart.observer_count(), 0);
}
