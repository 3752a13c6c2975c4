use crate::environment::{CallError, Environment, Request, Response};
use crate::retry::{self, RetryPolicy};
use crate::store::{Action, Dispatcher};

use super::action::DashboardAction;

pub(crate) fn spawn(environment: Environment, dispatcher: Dispatcher) -> flume::Sender<Action> {
    let (tx, rx) = flume::unbounded();
    tokio::spawn(run(rx, environment, dispatcher));
    tx
}

async fn run(actions: flume::Receiver<Action>, environment: Environment, dispatcher: Dispatcher) {
    while let Ok(action) = actions.recv_async().await {
        let Action::Dashboard(action) = action else {
            continue;
        };
        let environment = environment.clone();
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            match action {
                DashboardAction::FetchTaskCounts => {
                    fetch_task_counts(&environment, &dispatcher).await
                }
                DashboardAction::FetchNotificationsCount => {
                    fetch_notifications_count(&environment, &dispatcher).await
                }
                _ => {}
            }
        });
    }
}

async fn fetch(environment: &Environment, path: String) -> Result<Response, CallError> {
    retry::with_retry(RetryPolicy::transient(), || {
        let client = environment.client.clone();
        let request = Request::get(path.clone(), environment.session.token());
        async move { client.send(request).await }
    })
    .await
}

async fn fetch_task_counts(environment: &Environment, dispatcher: &Dispatcher) {
    let path = format!(
        "{}/api/workflow/tasks/_task-counts",
        environment.config.workflow_service_url
    );
    match fetch(environment, path).await {
        Ok(payload) => dispatcher.dispatch(DashboardAction::FetchTaskCountsSuccess(payload)),
        Err(error) => {
            log::error!("failed to fetch task counts: {error}");
            dispatcher.dispatch(DashboardAction::FetchTaskCountsFailure(error.to_string()));
        }
    }
}

async fn fetch_notifications_count(environment: &Environment, dispatcher: &Dispatcher) {
    let path = format!(
        "{}/api/workflow/notifications?countOnly=true",
        environment.config.workflow_service_url
    );
    match fetch(environment, path).await {
        Ok(payload) => {
            dispatcher.dispatch(DashboardAction::FetchNotificationsCountSuccess(payload))
        }
        Err(error) => {
            log::error!("failed to fetch notification counts: {error}");
            dispatcher.dispatch(DashboardAction::FetchNotificationsCountFailure(
                error.to_string(),
            ));
        }
    }
}
