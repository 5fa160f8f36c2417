use std::fmt;
use std::sync::Arc;

use supplydash_aggregate::DashboardView;
use supplydash_client::Endpoint;
use supplydash_model::Dataset;

/// One completed load: raw collections plus the views derived from them.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Increases by one with every completed load of the same dashboard.
    pub generation: u64,
    pub dataset: Dataset,
    pub view: DashboardView,
    /// Endpoints that failed every attempt and were loaded as empty.
    pub degraded: Vec<Endpoint>,
}

/// Load state of a dashboard.
///
/// ```text
/// Idle ──► Loading ──► Ready
///             ▲  └───► Failed
///             └── refresh / retry from Ready or Failed
/// ```
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Arc<Snapshot>),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Error message of the last failed load.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }

    /// Whether `self -> next` is one of the defined transitions.
    pub fn can_transition_to(&self, next: &LoadState) -> bool {
        matches!(
            (self, next),
            (LoadState::Idle | LoadState::Ready(_) | LoadState::Failed(_), LoadState::Loading)
                | (LoadState::Loading, LoadState::Ready(_) | LoadState::Failed(_))
        )
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> LoadState {
        LoadState::Ready(Arc::new(Snapshot {
            generation: 1,
            dataset: Dataset::default(),
            view: DashboardView::build(&Dataset::default(), 20),
            degraded: Vec::new(),
        }))
    }

    #[test]
    fn defined_transitions() {
        let failed = LoadState::Failed("x".into());
        assert!(LoadState::Idle.can_transition_to(&LoadState::Loading));
        assert!(LoadState::Loading.can_transition_to(&ready()));
        assert!(LoadState::Loading.can_transition_to(&failed));
        assert!(failed.can_transition_to(&LoadState::Loading));
        assert!(ready().can_transition_to(&LoadState::Loading));
    }

    #[test]
    fn rejected_transitions() {
        assert!(!LoadState::Idle.can_transition_to(&ready()));
        assert!(!LoadState::Loading.can_transition_to(&LoadState::Loading));
        assert!(!ready().can_transition_to(&LoadState::Failed("x".into())));
        assert!(!LoadState::Failed("x".into()).can_transition_to(&LoadState::Idle));
    }

    #[test]
    fn accessors() {
        assert_eq!(LoadState::default().name(), "idle");
        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::Failed("down".into()).error(), Some("down"));
        assert_eq!(ready().snapshot().map(|s| s.generation), Some(1));
        assert!(LoadState::Idle.snapshot().is_none());
    }
}
