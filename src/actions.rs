use crate::api::AdminApi;
use crate::errors::ClientError;
use crate::models::AnswerRecord;
use crate::page::StatsPage;
use crate::ui::Ui;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    User(String),
    All,
}

impl DeleteTarget {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::User(_) => "Delete all statistics for this student?",
            Self::All => "Delete statistics for every student? This cannot be undone.",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::User(_) => "Statistics deleted.",
            Self::All => "All statistics deleted.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        "An error occurred while deleting statistics."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Reloaded,
    Failed,
}

/// Confirm, hit the delete endpoint, then reload on success or alert on
/// failure. Every delete entry point, standalone or console-bound, goes
/// through here so the two can never drift apart.
pub async fn run_delete(
    api: &AdminApi,
    page: &mut StatsPage,
    ui: &mut dyn Ui,
    target: &DeleteTarget,
) -> DeleteOutcome {
    if !ui.confirm(target.confirm_message()) {
        return DeleteOutcome::Cancelled;
    }

    let result = match target {
        DeleteTarget::User(user_id) => api.delete_user_stats(user_id).await,
        DeleteTarget::All => api.delete_all_stats().await,
    };

    match result {
        Ok(deleted) if deleted.success => {
            ui.alert(target.success_message());
            if let Err(err) = page.reload().await {
                error!("reload after delete failed: {err}");
            }
            DeleteOutcome::Reloaded
        }
        Ok(_) => {
            ui.alert(target.failure_message());
            DeleteOutcome::Failed
        }
        Err(err) => {
            error!("delete request failed: {err}");
            ui.alert(target.failure_message());
            DeleteOutcome::Failed
        }
    }
}

pub async fn delete_user_statistics(
    api: &AdminApi,
    page: &mut StatsPage,
    ui: &mut dyn Ui,
    user_id: &str,
) -> DeleteOutcome {
    run_delete(api, page, ui, &DeleteTarget::User(user_id.to_string())).await
}

pub async fn delete_all_statistics(
    api: &AdminApi,
    page: &mut StatsPage,
    ui: &mut dyn Ui,
) -> DeleteOutcome {
    run_delete(api, page, ui, &DeleteTarget::All).await
}

/// Fire-and-forget: the response only ever reaches the diagnostic log, and a
/// failed submission never interrupts the operator.
pub async fn submit_answer(api: &AdminApi, user_id: &str, is_correct: bool, unit: &str) {
    let record = AnswerRecord {
        user_id: user_id.to_string(),
        is_correct,
        unit: unit.to_string(),
    };
    match api.save_answer(&record).await {
        Ok(body) => debug!("answer saved: {body}"),
        Err(err) => error!("failed to save answer: {err}"),
    }
}

/// Rewrites the `student_id` parameter on the current page and fetches the
/// resulting view. No request is made beyond the navigation itself.
pub async fn update_unit_filter(page: &mut StatsPage, student_id: Option<&str>) {
    page.set_student_filter(student_id);
    if let Err(err) = page.reload().await {
        error!("failed to load filtered statistics view: {err}");
    }
}

pub async fn download_statistics(page: &StatsPage) -> Result<Vec<u8>, ClientError> {
    page.download().await
}
