//! Replays a recorded drag scenario and prints every selection change as a
//! JSON line.
//!
//! ```sh
//! RUST_LOG=rubberband=debug rubberband-replay scenario.json [settings.json]
//! ```
//!
//! Scenario format:
//!
//! ```json
//! {
//!   "target": { "rect": { "left": 0, "top": 0, "width": 100, "height": 100 },
//!               "scroll": { "x": 0, "y": 0 } },
//!   "items": [ { "id": "a", "rect": { "left": 0, "top": 0, "width": 10, "height": 10 } } ],
//!   "events": [ { "kind": "down", "page": { "x": 1, "y": 1 } },
//!               { "kind": "move", "page": { "x": 9, "y": 9 } },
//!               { "kind": "up", "page": { "x": 9, "y": 9 } } ]
//! }
//! ```
//!
//! `buttons` defaults to the primary button, so a recorded drag only needs
//! `"buttons": 0` on a move whose release was missed.

use anyhow::{Context, Result, bail};
use rubberband::constants::{PRIMARY_BUTTON, SETTINGS_FILE_NAME};
use rubberband::{
    LayoutSource, LoggingObserver, Point, PointerEvent, Rect, RubberBand, SelectionChange,
    SelectorSettings, Trackable,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Scenario {
    target: TargetLayout,
    #[serde(default)]
    items: Vec<ScenarioItem>,
    #[serde(default)]
    events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Deserialize)]
struct TargetLayout {
    rect: Option<Rect>,
    #[serde(default)]
    scroll: Point,
}

impl LayoutSource for TargetLayout {
    fn target_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ScenarioItem {
    id: String,
    rect: Option<Rect>,
}

impl Trackable for ScenarioItem {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.rect
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EventKind {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Deserialize)]
struct ScenarioEvent {
    kind: EventKind,
    page: Point,
    #[serde(default)]
    client: Point,
    #[serde(default = "primary_buttons")]
    buttons: u16,
}

fn primary_buttons() -> u16 {
    PRIMARY_BUTTON
}

impl ScenarioEvent {
    fn pointer(&self) -> PointerEvent {
        PointerEvent {
            page: self.page,
            client: self.client,
            buttons: self.buttons,
        }
    }
}

fn load_settings(explicit: Option<&Path>) -> Result<SelectorSettings> {
    if let Some(path) = explicit {
        return SelectorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }
    let fallback = PathBuf::from(SETTINGS_FILE_NAME);
    if fallback.exists() {
        return SelectorSettings::load(&fallback)
            .with_context(|| format!("Failed to load settings from {}", fallback.display()));
    }
    Ok(SelectorSettings::default())
}

fn print_change(event_index: usize, ids: &[String], change: &SelectionChange<'_>) {
    let names = |indices: &mut dyn Iterator<Item = usize>| -> Vec<String> {
        indices.filter_map(|i| ids.get(i).cloned()).collect()
    };
    let line = serde_json::json!({
        "event": event_index,
        "reason": format!("{:?}", change.reason),
        "selected": names(&mut change.selected.iter()),
        "added": names(&mut change.diff.added.iter().copied()),
        "removed": names(&mut change.diff.removed.iter().copied()),
    });
    println!("{}", line);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(scenario_path) = args.next().map(PathBuf::from) else {
        bail!("usage: rubberband-replay <scenario.json> [settings.json]");
    };
    let settings_path = args.next().map(PathBuf::from);

    let settings = load_settings(settings_path.as_deref())?;
    let raw = std::fs::read_to_string(&scenario_path)
        .with_context(|| format!("Failed to read scenario {}", scenario_path.display()))?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario {}", scenario_path.display()))?;

    let mut selector: RubberBand<ScenarioItem> =
        RubberBand::with_observer_factory(settings, LoggingObserver::factory());
    selector.attach_target(scenario.target.clone());
    for item in scenario.items {
        selector.add_item(item);
    }
    info!(
        items = selector.registry().len(),
        events = scenario.events.len(),
        "Replaying scenario"
    );

    let ids: Vec<String> = selector.registry().all().iter().map(|item| item.id.clone()).collect();
    let current_event = std::rc::Rc::new(std::cell::Cell::new(0usize));
    let event_counter = current_event.clone();
    selector.on_selection_change(move |change| print_change(event_counter.get(), &ids, change));

    for (index, event) in scenario.events.iter().enumerate() {
        current_event.set(index);
        let pointer = event.pointer();
        match event.kind {
            EventKind::Down => {
                selector.handle_pointer_down(&pointer);
            }
            EventKind::Move => selector.handle_pointer_move(&pointer),
            EventKind::Up => selector.handle_pointer_up(&pointer),
        }
    }

    info!(selected = selector.selected().len(), "Replay finished");
    #[cfg(feature = "profiling")]
    report_reconcile_stats();
    Ok(())
}

#[cfg(feature = "profiling")]
fn report_reconcile_stats() {
    match rubberband::perf::operation_stats("reconcile") {
        Some(stats) => info!(
            passes = stats.count(),
            mean_ms = format!("{:.3}", stats.mean()),
            p95_ms = format!("{:.3}", stats.percentile(95.0)),
            worst_ms = format!("{:.3}", stats.worst()),
            "Reconcile timings"
        ),
        None => info!("No reconcile passes recorded"),
    }
}
