use serde_json::Value;

use crate::store::AppState;

use super::state::ShiftRecord;

pub fn is_fetching_active_shift(state: &AppState) -> bool {
    state.shift.is_fetching_active_shift
}

pub fn active_shift(state: &AppState) -> Option<&ShiftRecord> {
    state.shift.shift.as_ref()
}

pub fn has_active_shift(state: &AppState) -> bool {
    state.shift.has_active_shift
}

pub fn active_shift_error(state: &AppState) -> Option<&str> {
    state.shift.active_shift_error.as_deref()
}

pub fn submitting_active_shift(state: &AppState) -> bool {
    state.shift.submitting_active_shift
}

pub fn active_shift_success(state: &AppState) -> bool {
    state.shift.active_shift_success
}

pub fn submission_error(state: &AppState) -> Option<&str> {
    state.shift.submission_error.as_deref()
}

pub fn ending_shift(state: &AppState) -> bool {
    state.shift.ending_shift
}

pub fn end_shift_success(state: &AppState) -> bool {
    state.shift.end_shift_success
}

pub fn loading_shift_form(state: &AppState) -> bool {
    state.shift.loading_shift_form
}

pub fn shift_form(state: &AppState) -> Option<&Value> {
    state.shift.shift_form.as_ref()
}

pub fn loading_staff_details(state: &AppState) -> bool {
    state.shift.loading_staff_details
}

pub fn staff_details(state: &AppState) -> Option<&Value> {
    state.shift.staff_details.as_ref()
}
