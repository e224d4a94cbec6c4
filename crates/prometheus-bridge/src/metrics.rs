use dose_guards::Verdict;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use route_guards::Navigation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metric registration failed: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("encoded metrics are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Counters for verdicts and route decisions, kept on their own registry so
/// several instances can coexist in one process.
pub struct ComplianceMetrics {
    registry: Registry,
    pub dose_verdicts_total: IntCounterVec,
    pub route_decisions_total: IntCounterVec,
}

impl ComplianceMetrics {
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let dose_verdicts_total = IntCounterVec::new(
            Opts::new(
                "solinfor_dose_verdicts_total",
                "Activities evaluated, by dose verdict",
            ),
            &["verdict"],
        )?;
        registry.register(Box::new(dose_verdicts_total.clone()))?;

        let route_decisions_total = IntCounterVec::new(
            Opts::new(
                "solinfor_route_decisions_total",
                "Navigations resolved, by target view and decision",
            ),
            &["view", "decision"],
        )?;
        registry.register(Box::new(route_decisions_total.clone()))?;

        Ok(Self {
            registry,
            dose_verdicts_total,
            route_decisions_total,
        })
    }

    pub fn observe_verdict(&self, verdict: Verdict) {
        self.dose_verdicts_total
            .with_label_values(&[verdict.as_str()])
            .inc();
    }

    pub fn observe_navigation(&self, navigation: &Navigation) {
        let (view, decision) = decision_labels(navigation);
        self.route_decisions_total
            .with_label_values(&[view, decision])
            .inc();
    }

    pub fn verdict_count(&self, verdict: Verdict) -> u64 {
        self.dose_verdicts_total
            .with_label_values(&[verdict.as_str()])
            .get()
    }

    /// Prometheus text exposition of everything on this registry.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn decision_labels(navigation: &Navigation) -> (&'static str, &'static str) {
    match navigation {
        Navigation::Render { view, .. } => (view.as_str(), "render"),
        Navigation::Loading { view } => (view.as_str(), "loading"),
        Navigation::Redirect { view, .. } => (view.as_str(), "redirect"),
        Navigation::Unauthorized { view, .. } => (view.as_str(), "unauthorized"),
        Navigation::RedirectToSignIn => ("none", "redirect_to_sign_in"),
        Navigation::NotFound => ("none", "not_found"),
    }
}
