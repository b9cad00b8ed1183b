use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Activity;
use crate::services::activities_service::{self, Confirmation};
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailParams {
    pub email: Option<String>,
}

// `email` normally arrives in the query string. Clients that post an
// urlencoded form body are accepted too; the query wins when both carry it.
// The value is passed through as given, empty string included.
fn resolve_email(query: EmailParams, form: Option<EmailParams>) -> Result<String, AppError> {
    query
        .email
        .or_else(|| form.and_then(|f| f.email))
        .ok_or(AppError::MissingEmail)
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&state.store).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailParams>,
    form: Option<Form<EmailParams>>,
) -> Result<Json<Confirmation>, AppError> {
    let email = resolve_email(query, form.map(|Form(f)| f))?;
    activities_service::signup(&state.store, state.capacity_policy, &activity_name, &email)
        .await
        .map(Json)
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailParams>,
    form: Option<Form<EmailParams>>,
) -> Result<Json<Confirmation>, AppError> {
    let email = resolve_email(query, form.map(|Form(f)| f))?;
    activities_service::unregister(&state.store, &activity_name, &email)
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(email: Option<&str>) -> EmailParams {
        EmailParams {
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn query_email_wins_over_form() {
        let email = resolve_email(
            params(Some("query@mergington.edu")),
            Some(params(Some("form@mergington.edu"))),
        );
        assert_eq!(email.unwrap(), "query@mergington.edu");
    }

    #[test]
    fn falls_back_to_form_untouched() {
        let email = resolve_email(params(None), Some(params(Some(" form@mergington.edu "))));
        assert_eq!(email.unwrap(), " form@mergington.edu ");
    }

    #[test]
    fn empty_email_is_still_an_email() {
        assert_eq!(resolve_email(params(Some("")), None).unwrap(), "");
        assert_eq!(resolve_email(params(Some("   ")), None).unwrap(), "   ");
    }

    #[test]
    fn absent_email_is_missing() {
        assert_eq!(resolve_email(params(None), None), Err(AppError::MissingEmail));
        assert_eq!(
            resolve_email(params(None), Some(params(None))),
            Err(AppError::MissingEmail)
        );
    }
}
