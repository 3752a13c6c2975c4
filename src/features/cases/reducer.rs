use serde_json::Value;

use super::action::CasesAction;
use super::state::CasesState;

pub fn reduce(state: &CasesState, action: &CasesAction) -> CasesState {
    let mut next = state.clone();
    match action {
        CasesAction::FindCasesByKey(key) => {
            next.business_key_query = Some(key.clone());
            next.searching = true;
            next.case_details = None;
            next.business_key = None;
        }
        CasesAction::FindCasesByKeySuccess(payload) => {
            next.searching = false;
            next.case_search_results = decode_results(&payload.entity);
        }
        CasesAction::FindCasesByKeyFailure(_) => next.searching = false,
        CasesAction::GetCaseByKey(key) => {
            next.business_key = Some(key.clone());
            next.loading_case_details = true;
        }
        CasesAction::GetCaseByKeySuccess(payload) => {
            next.case_details = Some(payload.entity.clone());
            next.loading_case_details = false;
        }
        CasesAction::GetCaseByKeyFailure(_) => next.loading_case_details = false,
        CasesAction::GetFormVersion => next.loading_form_version = true,
        CasesAction::GetFormVersionSuccess(payload) => {
            next.loading_form_version = false;
            next.form_version_details = Some(payload.entity.clone());
        }
        CasesAction::GetFormVersionFailure(_) => next.loading_form_version = false,
        CasesAction::SetSelectedFormReference(reference) => {
            next.selected_form_reference = Some(reference.clone());
        }
        CasesAction::GetFormSubmissionData => next.loading_form_submission_data = true,
        CasesAction::GetFormSubmissionDataSuccess(payload) => {
            next.loading_form_submission_data = false;
            next.form_submission_data = Some(payload.entity.clone());
        }
        CasesAction::GetFormSubmissionDataFailure(_) => {
            next.loading_form_submission_data = false;
        }
        CasesAction::ResetForm => {
            next.form_submission_data = None;
            next.form_version_details = None;
        }
        CasesAction::Reset => next = CasesState::default(),
    }
    next
}

fn decode_results(entity: &Value) -> Option<im::Vector<Value>> {
    entity
        .as_array()
        .map(|items| items.iter().cloned().collect())
}
