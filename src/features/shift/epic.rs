use std::time::Duration;

use serde_json::{json, Value};

use crate::environment::{AppEvent, CallError, Environment, Request};
use crate::retry::{self, RetryPolicy};
use crate::store::{Action, Dispatcher};

use super::action::ShiftAction;

/// Shift creation is asynchronous on the workflow side: after a successful
/// create we poll the operational data service until the record shows up,
/// up to `POLL_RETRIES` retries spaced `POLL_DELAY` apart.
const POLL_RETRIES: u32 = 10;
const POLL_DELAY: Duration = Duration::from_millis(1000);

pub(crate) fn spawn(environment: Environment, dispatcher: Dispatcher) -> flume::Sender<Action> {
    let (tx, rx) = flume::unbounded();
    tokio::spawn(run(rx, environment, dispatcher));
    tx
}

async fn run(actions: flume::Receiver<Action>, environment: Environment, dispatcher: Dispatcher) {
    while let Ok(action) = actions.recv_async().await {
        let Action::Shift(action) = action else {
            continue;
        };
        // Merge semantics: every triggering action gets its own task, even
        // repeats of the same tag.
        let environment = environment.clone();
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            handle(action, &environment, &dispatcher).await;
        });
    }
}

async fn handle(action: ShiftAction, environment: &Environment, dispatcher: &Dispatcher) {
    match action {
        ShiftAction::FetchActiveShift => fetch_active_shift(environment, dispatcher).await,
        ShiftAction::SubmitValidation(submission) => {
            submit(submission, environment, dispatcher).await
        }
        ShiftAction::FetchActiveShiftAfterCreate => {
            fetch_active_shift_after_creation(environment, dispatcher).await
        }
        ShiftAction::EndShift => end_shift(environment, dispatcher).await,
        ShiftAction::FetchStaffDetails => fetch_staff_details(environment, dispatcher).await,
        ShiftAction::FetchShiftForm => fetch_shift_form(environment, dispatcher).await,
        _ => {}
    }
}

fn shift_request(environment: &Environment) -> Request {
    let email = environment.session.email();
    log::trace!("requesting shift details for {email}");
    Request::get(
        format!(
            "{}/v1/shift?email=eq.{}",
            environment.config.operational_data_url,
            urlencoding::encode(&email)
        ),
        environment.session.token(),
    )
}

async fn send_with_retry(
    environment: &Environment,
    build: impl Fn(&Environment) -> Request,
) -> Result<crate::environment::Response, CallError> {
    retry::with_retry(RetryPolicy::transient(), || {
        let client = environment.client.clone();
        let request = build(environment);
        async move { client.send(request).await }
    })
    .await
}

/// Page-load check. An empty result here is a genuine "no active shift" and
/// is passed through as a success with zero retries; the reducer records the
/// absence silently.
async fn fetch_active_shift(environment: &Environment, dispatcher: &Dispatcher) {
    match send_with_retry(environment, shift_request).await {
        Ok(payload) => dispatcher.dispatch(ShiftAction::FetchActiveShiftSuccess(payload)),
        Err(error) => {
            log::error!("failed to fetch active shift: {error}");
            dispatcher.dispatch(ShiftAction::FetchActiveShiftFailure(error.to_string()));
        }
    }
}

async fn submit(submission: Value, environment: &Environment, dispatcher: &Dispatcher) {
    let result = send_with_retry(environment, |environment| {
        Request::post(
            format!(
                "{}/api/workflow/shift",
                environment.config.workflow_service_url
            ),
            environment.session.token(),
            submission.clone(),
        )
    })
    .await;
    match result {
        Ok(_) => dispatcher.dispatch(ShiftAction::FetchActiveShiftAfterCreate),
        Err(error) => {
            log::error!("shift submission failed: {error}");
            dispatcher.dispatch(ShiftAction::SubmitFailure(error.to_string()));
        }
    }
}

/// Post-creation poll. The same fetch as `fetch_active_shift`, but an empty
/// result means "not visible yet" and is retried on the poll schedule. On
/// the first non-empty result the creation success and the fetched shift are
/// dispatched in that order, and the submission toast goes out on the bus.
async fn fetch_active_shift_after_creation(environment: &Environment, dispatcher: &Dispatcher) {
    let mut retries = 0;
    loop {
        let payload = match send_with_retry(environment, shift_request).await {
            Ok(payload) => payload,
            Err(error) => {
                log::error!("failed to create shift information: {error}");
                dispatcher.dispatch(ShiftAction::CreateActiveShiftFailure(error.to_string()));
                return;
            }
        };
        if payload.is_empty_collection() {
            if retries == POLL_RETRIES {
                let error = CallError::NotReady;
                log::error!("failed to create shift information: {error}");
                dispatcher.dispatch(ShiftAction::CreateActiveShiftFailure(error.to_string()));
                return;
            }
            retries += 1;
            log::debug!(
                "empty shift details returned, retrying as shift creation is asynchronous ({retries}/{POLL_RETRIES})"
            );
            tokio::time::sleep(POLL_DELAY).await;
            continue;
        }
        log::debug!("shift details located");
        environment.bus.publish(AppEvent::Submission {
            submission: true,
            auto_dismiss: true,
            message: "Shift successfully started".to_string(),
        });
        dispatcher.dispatch(ShiftAction::CreateActiveShiftSuccess);
        dispatcher.dispatch(ShiftAction::FetchActiveShiftSuccess(payload));
        return;
    }
}

async fn end_shift(environment: &Environment, dispatcher: &Dispatcher) {
    let result = send_with_retry(environment, |environment| {
        Request::delete(
            format!(
                "{}/api/workflow/shift/{}?deletedReason=finished",
                environment.config.workflow_service_url,
                urlencoding::encode(&environment.session.email())
            ),
            environment.session.token(),
        )
    })
    .await;
    match result {
        Ok(payload) => dispatcher.dispatch(ShiftAction::EndShiftSuccess(payload)),
        Err(error) => {
            log::error!("failed to end shift: {error}");
            dispatcher.dispatch(ShiftAction::EndShiftFailure(error.to_string()));
        }
    }
}

async fn fetch_staff_details(environment: &Environment, dispatcher: &Dispatcher) {
    let result = send_with_retry(environment, |environment| {
        Request::post(
            format!(
                "{}/v1/rpc/staffdetails",
                environment.config.operational_data_url
            ),
            environment.session.token(),
            json!({ "argstaffemail": environment.session.email() }),
        )
    })
    .await;
    match result {
        Ok(payload) => dispatcher.dispatch(ShiftAction::FetchStaffDetailsSuccess(payload)),
        Err(error) => {
            log::error!("failed to fetch staff details: {error}");
            dispatcher.dispatch(ShiftAction::FetchStaffDetailsFailure(error.to_string()));
        }
    }
}

async fn fetch_shift_form(environment: &Environment, dispatcher: &Dispatcher) {
    let result = send_with_retry(environment, |environment| {
        Request::get(
            format!(
                "{}/api/translation/form/startShift",
                environment.config.translation_service_url
            ),
            environment.session.token(),
        )
    })
    .await;
    match result {
        Ok(payload) => dispatcher.dispatch(ShiftAction::FetchShiftFormSuccess(payload)),
        Err(error) => {
            log::error!("failed to fetch the shift form: {error}");
            dispatcher.dispatch(ShiftAction::FetchShiftFormFailure(error.to_string()));
        }
    }
}
