//! Memoizing report proxy
//!
//! [`ReportGeneratorProxy`] stands in front of an expensive
//! [`ReportGenerator`]. The real generator is built on first use, and each
//! user's report is computed at most once; later requests are answered from
//! the proxy's own cache.
//!
//! The cache lock is held across the check and the computation, so two
//! callers racing on the same key still trigger a single computation.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use patterns_core::SharedConsole;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Produces a report for a user
pub trait ReportGenerator: Send + Sync {
    fn generate_report(&self, user_id: &str) -> String;
}

/// The expensive generator: pretends to query a database
pub struct RealReportGenerator {
    console: SharedConsole,
    delay: Duration,
}

impl RealReportGenerator {
    pub fn new(console: SharedConsole, delay: Duration) -> Self {
        Self { console, delay }
    }
}

impl ReportGenerator for RealReportGenerator {
    fn generate_report(&self, user_id: &str) -> String {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.console
            .print_line(&format!("Fetching report from DB for user: {user_id}"));
        format!("Report Data for {user_id}")
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Default)]
struct CacheState {
    reports: HashMap<String, String>,
    hits: u64,
    misses: u64,
}

type GeneratorFactory<G> = Box<dyn Fn() -> G + Send + Sync>;

/// Caching stand-in for a [`ReportGenerator`]
pub struct ReportGeneratorProxy<G = RealReportGenerator> {
    factory: GeneratorFactory<G>,
    real: OnceCell<G>,
    state: Mutex<CacheState>,
    console: SharedConsole,
}

impl ReportGeneratorProxy<RealReportGenerator> {
    /// Proxy over a [`RealReportGenerator`] with the given simulated cost
    pub fn new(console: SharedConsole, delay: Duration) -> Self {
        let generator_console = console.clone();
        Self::with_factory(console, move || {
            RealReportGenerator::new(generator_console.clone(), delay)
        })
    }
}

impl<G: ReportGenerator> ReportGeneratorProxy<G> {
    /// Proxy that builds its generator with `factory` on first cache miss
    pub fn with_factory<F>(console: SharedConsole, factory: F) -> Self
    where
        F: Fn() -> G + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            real: OnceCell::new(),
            state: Mutex::new(CacheState::default()),
            console,
        }
    }

    /// Whether the real generator has been built yet
    pub fn is_initialized(&self) -> bool {
        self.real.get().is_some()
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.reports.len(),
        }
    }

    /// Drop one user's cached report. Returns whether one was cached.
    pub fn invalidate(&self, user_id: &str) -> bool {
        self.state.lock().reports.remove(user_id).is_some()
    }

    /// Drop every cached report. Hit and miss counters are kept.
    pub fn clear(&self) {
        self.state.lock().reports.clear();
    }

    fn real(&self) -> &G {
        self.real.get_or_init(|| {
            debug!("initialising real report generator");
            (self.factory)()
        })
    }
}

impl<G: ReportGenerator> ReportGenerator for ReportGeneratorProxy<G> {
    fn generate_report(&self, user_id: &str) -> String {
        let mut state = self.state.lock();

        if let Some(report) = state.reports.get(user_id).cloned() {
            state.hits += 1;
            debug!(user_id, "report cache hit");
            self.console
                .print_line(&format!("Returning cached report for user: {user_id}"));
            return report;
        }

        debug!(user_id, "report cache miss");
        let report = self.real().generate_report(user_id);
        state.reports.insert(user_id.to_string(), report.clone());
        state.misses += 1;
        report
    }
}
