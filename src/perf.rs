//! Timing instrumentation for the selection hot path.
//!
//! Pointer moves arrive at hardware polling rate and every accepted move runs
//! a reconcile pass over the whole registry, so that pass is the one place
//! worth timing.
//!
//! ## Usage
//!
//! Enable with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! rubberband = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn reconcile() {
//!     profile_scope!("reconcile");
//!     // ... work ...
//! }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;

/// Budget for one reconcile pass at 120Hz pointer polling.
pub const DEFAULT_THRESHOLD_MS: f64 = 8.0;

/// Number of samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

thread_local! {
    static OPERATION_STATS: RefCell<HashMap<&'static str, OperationStats>> =
        RefCell::new(HashMap::new());
}

/// Time a scope. Compiles to nothing without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Enable or disable recording at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Timings for one named operation: a total pass count plus the most recent
/// [`STATS_SAMPLE_COUNT`] durations, which every summary is computed from.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    recent: VecDeque<f64>,
    passes: u64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.recent.len() == STATS_SAMPLE_COUNT {
            self.recent.pop_front();
        }
        self.recent.push_back(ms);
        self.passes += 1;
    }

    /// Passes recorded since the last reset, evicted ones included.
    pub fn count(&self) -> u64 {
        self.passes
    }

    pub fn mean(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    /// Nearest-rank percentile of the recent window; `pct` in `0..=100`.
    pub fn percentile(&self, pct: f64) -> f64 {
        let mut window: Vec<f64> = self.recent.iter().copied().collect();
        if window.is_empty() {
            return 0.0;
        }
        let rank = (pct.clamp(0.0, 100.0) / 100.0 * window.len() as f64).ceil() as usize;
        let index = rank.saturating_sub(1);
        let (_, nth, _) = window.select_nth_unstable_by(index, f64::total_cmp);
        *nth
    }

    /// Slowest pass in the recent window.
    pub fn worst(&self) -> f64 {
        self.recent.iter().copied().fold(0.0, f64::max)
    }
}

/// Snapshot of this thread's statistics for `name`.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    OPERATION_STATS.with(|stats| stats.borrow().get(name).cloned())
}

/// Forget all statistics recorded on this thread.
pub fn reset_stats() {
    OPERATION_STATS.with(|stats| stats.borrow_mut().clear());
}

/// Records its lifetime on drop and warns when it exceeds the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        OPERATION_STATS.with(|stats| stats.borrow_mut().entry(self.name).or_default().record(ms));
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
