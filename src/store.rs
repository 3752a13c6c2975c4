use std::sync::{Arc, Mutex, RwLock, Weak};

use strum_macros::Display;

use crate::environment::Environment;
use crate::features::cases::{self, CasesAction, CasesState};
use crate::features::dashboard::{self, DashboardAction, DashboardState};
use crate::features::processes::{self, ProcessesAction, ProcessesState};
use crate::features::shift::{self, ShiftAction, ShiftState};
use crate::features::tasks::{self, TasksAction, TasksState};

/// Routing tag for the feature a given action belongs to.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Feature {
    Shift,
    Dashboard,
    Cases,
    Processes,
    Tasks,
}

#[derive(Clone, Debug)]
pub enum Action {
    Shift(ShiftAction),
    Dashboard(DashboardAction),
    Cases(CasesAction),
    Processes(ProcessesAction),
    Tasks(TasksAction),
}

impl Action {
    pub fn feature(&self) -> Feature {
        match self {
            Action::Shift(_) => Feature::Shift,
            Action::Dashboard(_) => Feature::Dashboard,
            Action::Cases(_) => Feature::Cases,
            Action::Processes(_) => Feature::Processes,
            Action::Tasks(_) => Feature::Tasks,
        }
    }
}

impl From<ShiftAction> for Action {
    fn from(action: ShiftAction) -> Self {
        Action::Shift(action)
    }
}

impl From<DashboardAction> for Action {
    fn from(action: DashboardAction) -> Self {
        Action::Dashboard(action)
    }
}

impl From<CasesAction> for Action {
    fn from(action: CasesAction) -> Self {
        Action::Cases(action)
    }
}

impl From<ProcessesAction> for Action {
    fn from(action: ProcessesAction) -> Self {
        Action::Processes(action)
    }
}

impl From<TasksAction> for Action {
    fn from(action: TasksAction) -> Self {
        Action::Tasks(action)
    }
}

/// One record per feature. Reducers never mutate a previous snapshot; every
/// dispatch replaces the affected record with a freshly built one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub shift: ShiftState,
    pub dashboard: DashboardState,
    pub cases: CasesState,
    pub processes: ProcessesState,
    pub tasks: TasksState,
}

fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Shift(action) => next.shift = shift::reduce(&state.shift, action),
        Action::Dashboard(action) => next.dashboard = dashboard::reduce(&state.dashboard, action),
        Action::Cases(action) => next.cases = cases::reduce(&state.cases, action),
        Action::Processes(action) => next.processes = processes::reduce(&state.processes, action),
        Action::Tasks(action) => next.tasks = tasks::reduce(&state.tasks, action),
    }
    next
}

struct Inner {
    state: RwLock<AppState>,
    pipelines: Mutex<Vec<flume::Sender<Action>>>,
    subscribers: Mutex<Vec<flume::Sender<Action>>>,
}

impl Inner {
    fn dispatch(&self, action: Action) {
        log::trace!("dispatch [{}] {action:?}", action.feature());
        if let Ok(mut state) = self.state.write() {
            *state = reduce(&state, &action);
        }
        if let Ok(mut pipelines) = self.pipelines.lock() {
            pipelines.retain(|tx| tx.send(action.clone()).is_ok());
        }
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(action.clone()).is_ok());
        }
    }
}

/// Dispatch handle held by pipelines. Weak, so a dropped store tears its
/// pipelines down instead of being kept alive by them.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Weak<Inner>,
}

impl Dispatcher {
    pub fn dispatch(&self, action: impl Into<Action>) {
        let Some(inner) = self.inner.upgrade() else {
            log::trace!("store is gone, dropping action");
            return;
        };
        inner.dispatch(action.into());
    }
}

/// The single shared state container. Reducers run synchronously inside
/// `dispatch`, serialized by the state lock; pipelines observe the action
/// afterwards and feed their follow-up actions back through their
/// `Dispatcher`.
///
/// There is no cancellation: a pipeline that is mid-poll keeps going until
/// its own bound is exhausted, even if nobody is looking at the state
/// anymore. Duplicate dispatches of the same request tag run concurrently;
/// deduplication is the caller's concern.
///
/// Construct one store per process (or per test); it must be created inside
/// a tokio runtime, which the pipeline tasks run on.
pub struct Store {
    inner: Arc<Inner>,
    environment: Environment,
}

impl Store {
    pub fn new(environment: Environment) -> Self {
        let inner = Arc::new(Inner {
            state: RwLock::new(AppState::default()),
            pipelines: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
        });
        let dispatcher = Dispatcher {
            inner: Arc::downgrade(&inner),
        };
        let pipelines = vec![
            shift::spawn(environment.clone(), dispatcher.clone()),
            dashboard::spawn(environment.clone(), dispatcher),
        ];
        if let Ok(mut slot) = inner.pipelines.lock() {
            *slot = pipelines;
        }
        Self { inner, environment }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.inner.dispatch(action.into());
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// A snapshot of the current state. Later dispatches never alias into it.
    pub fn state(&self) -> AppState {
        self.inner
            .state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    /// Receives every action after its reducer ran, in dispatch order.
    pub fn subscribe(&self) -> flume::Receiver<Action> {
        let (tx, rx) = flume::unbounded();
        if let Ok(mut subscribers) = self.inner.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::client::mock::MockClient;
    use crate::environment::{AppConfig, Session};

    fn store() -> Store {
        let environment = Environment::new(
            MockClient::new(),
            AppConfig::new("http://wf", "http://od", "http://tr"),
            Session::new("token-1", "officer@example.com"),
        );
        Store::new(environment)
    }

    #[tokio::test]
    async fn snapshots_do_not_alias_later_dispatches() {
        let store = store();
        let before = store.state();
        store.dispatch(CasesAction::FindCasesByKey("BF-2024".to_string()));
        assert!(!before.cases.searching);
        assert!(store.state().cases.searching);
    }

    #[tokio::test]
    async fn subscribers_observe_actions_in_dispatch_order() {
        let store = store();
        let actions = store.subscribe();
        store.dispatch(TasksAction::SetFilterValue("border".to_string()));
        store.dispatch(TasksAction::SetSortValue("sort=due,asc".to_string()));
        assert!(matches!(
            actions.recv().expect("first action"),
            Action::Tasks(TasksAction::SetFilterValue(_))
        ));
        assert!(matches!(
            actions.recv().expect("second action"),
            Action::Tasks(TasksAction::SetSortValue(_))
        ));
    }
}
