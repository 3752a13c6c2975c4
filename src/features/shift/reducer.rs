use crate::environment::Response;

use super::action::ShiftAction;
use super::state::{ShiftRecord, ShiftState};

pub fn reduce(state: &ShiftState, action: &ShiftAction) -> ShiftState {
    let mut next = state.clone();
    match action {
        ShiftAction::FetchActiveShift => {
            next.is_fetching_active_shift = true;
            next.active_shift_error = None;
        }
        ShiftAction::FetchActiveShiftSuccess(payload) => {
            next.is_fetching_active_shift = false;
            next.shift = decode_shift(payload);
            next.has_active_shift = next.shift.is_some();
        }
        ShiftAction::FetchActiveShiftFailure(message) => {
            next.is_fetching_active_shift = false;
            next.active_shift_error = Some(message.clone());
        }
        ShiftAction::SubmitValidation(_) => {
            next.submitting_active_shift = true;
            next.active_shift_success = false;
            next.submission_error = None;
        }
        // Still submitting while the poll runs; the flag clears on the
        // creation success/failure, not here.
        ShiftAction::FetchActiveShiftAfterCreate => {}
        ShiftAction::CreateActiveShiftSuccess => {
            next.submitting_active_shift = false;
            next.active_shift_success = true;
        }
        ShiftAction::SubmitFailure(message) | ShiftAction::CreateActiveShiftFailure(message) => {
            next.submitting_active_shift = false;
            next.submission_error = Some(message.clone());
        }
        ShiftAction::EndShift => {
            next.ending_shift = true;
            next.end_shift_success = false;
            next.end_shift_error = None;
        }
        ShiftAction::EndShiftSuccess(_) => {
            next.ending_shift = false;
            next.end_shift_success = true;
            next.shift = None;
            next.has_active_shift = false;
            next.active_shift_success = false;
        }
        ShiftAction::EndShiftFailure(message) => {
            next.ending_shift = false;
            next.end_shift_error = Some(message.clone());
        }
        ShiftAction::FetchStaffDetails => next.loading_staff_details = true,
        ShiftAction::FetchStaffDetailsSuccess(payload) => {
            next.loading_staff_details = false;
            next.staff_details = Some(payload.entity.clone());
        }
        ShiftAction::FetchStaffDetailsFailure(_) => next.loading_staff_details = false,
        ShiftAction::FetchShiftForm => next.loading_shift_form = true,
        ShiftAction::FetchShiftFormSuccess(payload) => {
            next.loading_shift_form = false;
            next.shift_form = Some(payload.entity.clone());
        }
        ShiftAction::FetchShiftFormFailure(_) => next.loading_shift_form = false,
        ShiftAction::Reset => next = ShiftState::default(),
    }
    next
}

/// The service answers with a collection; an active shift is its first entry.
/// An empty collection decodes to `None` silently.
fn decode_shift(payload: &Response) -> Option<ShiftRecord> {
    let first = payload.entity.as_array()?.first()?.clone();
    match serde_json::from_value(first) {
        Ok(record) => Some(record),
        Err(error) => {
            log::error!("undecodable shift record: {error}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn populated() -> Response {
        Response {
            status: 200,
            entity: json!([{
                "shiftminutes": 30,
                "shifthours": 8,
                "startdatetime": "2024-05-01T08:00:00Z",
                "teamid": "team-1",
                "locationid": "loc-1",
                "phone": "07700900000"
            }]),
        }
    }

    fn empty() -> Response {
        Response {
            status: 200,
            entity: json!([]),
        }
    }

    #[test]
    fn fetch_sets_and_clears_the_loading_flag() {
        let loading = reduce(&ShiftState::default(), &ShiftAction::FetchActiveShift);
        assert!(loading.is_fetching_active_shift);

        let loaded = reduce(&loading, &ShiftAction::FetchActiveShiftSuccess(populated()));
        assert!(!loaded.is_fetching_active_shift);

        let failed = reduce(
            &loading,
            &ShiftAction::FetchActiveShiftFailure("The service responded with status 502".into()),
        );
        assert!(!failed.is_fetching_active_shift);
    }

    #[test]
    fn success_decodes_the_first_record() {
        let state = reduce(
            &ShiftState::default(),
            &ShiftAction::FetchActiveShiftSuccess(populated()),
        );
        let shift = state.shift.expect("decoded shift");
        assert_eq!(shift.teamid, "team-1");
        assert_eq!(shift.shifthours, 8);
        assert!(state.has_active_shift);
    }

    #[test]
    fn empty_result_is_a_silent_no_shift() {
        let state = reduce(
            &ShiftState::default(),
            &ShiftAction::FetchActiveShiftSuccess(empty()),
        );
        assert!(state.shift.is_none());
        assert!(!state.has_active_shift);
        assert!(state.active_shift_error.is_none());
    }

    #[test]
    fn reducing_the_same_success_twice_is_idempotent() {
        let action = ShiftAction::FetchActiveShiftSuccess(populated());
        let once = reduce(&ShiftState::default(), &action);
        let twice = reduce(&once, &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn failure_leaves_prior_data_untouched() {
        let loaded = reduce(
            &ShiftState::default(),
            &ShiftAction::FetchActiveShiftSuccess(populated()),
        );
        let failed = reduce(
            &loaded,
            &ShiftAction::FetchActiveShiftFailure("The service could not be reached".into()),
        );
        assert!(failed.shift.is_some());
        assert!(failed.active_shift_error.is_some());
    }

    #[test]
    fn ending_a_shift_clears_it() {
        let loaded = reduce(
            &ShiftState::default(),
            &ShiftAction::FetchActiveShiftSuccess(populated()),
        );
        let ending = reduce(&loaded, &ShiftAction::EndShift);
        assert!(ending.ending_shift);
        let ended = reduce(
            &ending,
            &ShiftAction::EndShiftSuccess(Response {
                status: 200,
                entity: json!({}),
            }),
        );
        assert!(ended.end_shift_success);
        assert!(ended.shift.is_none());
        assert!(!ended.has_active_shift);
    }

    #[test]
    fn reset_restores_the_default_record() {
        let loaded = reduce(
            &ShiftState::default(),
            &ShiftAction::FetchActiveShiftSuccess(populated()),
        );
        assert_eq!(
            reduce(&loaded, &ShiftAction::Reset),
            ShiftState::default()
        );
    }
}
