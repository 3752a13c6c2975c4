use serde_json::Value;

use crate::store::AppState;

pub fn searching(state: &AppState) -> bool {
    state.cases.searching
}

pub fn business_key_query(state: &AppState) -> Option<&str> {
    state.cases.business_key_query.as_deref()
}

pub fn case_search_results(state: &AppState) -> Option<&im::Vector<Value>> {
    state.cases.case_search_results.as_ref()
}

pub fn loading_case_details(state: &AppState) -> bool {
    state.cases.loading_case_details
}

pub fn case_details(state: &AppState) -> Option<&Value> {
    state.cases.case_details.as_ref()
}

pub fn business_key(state: &AppState) -> Option<&str> {
    state.cases.business_key.as_deref()
}

pub fn loading_form_version(state: &AppState) -> bool {
    state.cases.loading_form_version
}

pub fn form_version_details(state: &AppState) -> Option<&Value> {
    state.cases.form_version_details.as_ref()
}

pub fn selected_form_reference(state: &AppState) -> Option<&Value> {
    state.cases.selected_form_reference.as_ref()
}

pub fn loading_form_submission_data(state: &AppState) -> bool {
    state.cases.loading_form_submission_data
}

pub fn form_submission_data(state: &AppState) -> Option<&Value> {
    state.cases.form_submission_data.as_ref()
}
