//! HTTP handlers for the pages and the JSON API.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::page;
use super::state::AppState;
use crate::application::{Answer, QueryFailure};
use crate::domain::{Question, Value};
use crate::error::{ErrorKind, ValidationError};

/// Body of `POST /query` (form) and `POST /api/query` (JSON).
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    status: &'static str,
    sql: &'a str,
    columns: &'a [String],
    rows: &'a [Vec<Value>],
    row_count: usize,
    took_ms: u64,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sql: Option<&'a str>,
    error: ErrorDetail,
    took_ms: u64,
}

#[derive(Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: String,
}

/// HTTP status reported for each failure category.
#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Generation => StatusCode::BAD_GATEWAY,
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Execution => StatusCode::BAD_REQUEST,
        ErrorKind::Config | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    html(page::home(&state.model))
}

pub async fn about(state: web::Data<AppState>) -> HttpResponse {
    html(page::about(&state.model))
}

pub async fn query_form() -> HttpResponse {
    html(page::query_form(""))
}

/// Form submission. A blank question just redisplays the form.
pub async fn query_submit(
    state: web::Data<AppState>,
    form: web::Form<QueryRequest>,
) -> HttpResponse {
    let question = Question::new(form.into_inner().question);
    if question.is_blank() {
        return html(page::query_form(question.as_str()));
    }

    let body = match state.pipeline.run(&question).await {
        Ok(answer) => page::query_answer(question.as_str(), &answer),
        Err(failure) => page::query_failure(question.as_str(), &failure),
    };
    html(body)
}

pub async fn api_query(
    state: web::Data<AppState>,
    request: web::Json<QueryRequest>,
) -> HttpResponse {
    let question = Question::new(request.into_inner().question);
    if question.is_blank() {
        return HttpResponse::UnprocessableEntity().json(ErrorBody {
            status: "error",
            sql: None,
            error: ErrorDetail {
                kind: ErrorKind::Validation.as_str(),
                message: ValidationError::EmptyQuestion.to_string(),
            },
            took_ms: 0,
        });
    }

    match state.pipeline.run(&question).await {
        Ok(answer) => answer_response(&answer),
        Err(failure) => failure_response(&failure),
    }
}

fn answer_response(answer: &Answer) -> HttpResponse {
    HttpResponse::Ok().json(SuccessBody {
        status: "success",
        sql: answer.sql.as_str(),
        columns: &answer.result.columns,
        rows: &answer.result.rows,
        row_count: answer.result.row_count(),
        took_ms: millis(answer.elapsed),
    })
}

fn failure_response(failure: &QueryFailure) -> HttpResponse {
    let kind = failure.kind();
    HttpResponse::build(status_for(kind)).json(ErrorBody {
        status: "error",
        sql: failure.sql.as_ref().map(|sql| sql.as_str()),
        error: ErrorDetail {
            kind: kind.as_str(),
            message: failure.error.to_string(),
        },
        took_ms: millis(failure.elapsed),
    })
}

fn millis(elapsed: std::time::Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
