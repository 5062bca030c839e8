//! HTTP surface tests using actix-web's in-process test service.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use intellisql::adapter::inbound::web::{routes, AppState};
use intellisql::infrastructure::config::settings::Config;
use intellisql::infrastructure::factory::pipeline::build_pipeline_with;
use intellisql::port::outbound::llm::Llm;

use support::llm::{ScriptedLlm, UnavailableLlm};
use support::temp_db::TempDb;

fn state(db: &TempDb, llm: Arc<dyn Llm>) -> web::Data<AppState> {
    let mut config = Config::default();
    config.database = db.path().to_path_buf();
    web::Data::new(AppState::new(
        build_pipeline_with(&config, llm),
        "gemini-2.5-flash",
    ))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state).configure(routes::configure)).await
    };
}

#[actix_web::test]
async fn pages_render_with_sidebar() {
    let db = TempDb::students();
    let app = app!(state(&db, Arc::new(ScriptedLlm::always("SELECT 1"))));

    for (path, needle) in [
        ("/", "Welcome to IntelliSQL"),
        ("/about", "About IntelliSQL"),
        ("/query", "Get Answer"),
    ] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{path}");

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(needle), "{path} missing {needle}");
        assert!(html.contains("Navigation"));
        assert!(html.contains("gemini-2.5-flash") || path == "/query");
    }
}

#[actix_web::test]
async fn form_submission_shows_sql_and_table() {
    let db = TempDb::students();
    let app = app!(state(
        &db,
        Arc::new(ScriptedLlm::always(
            "```sql\nSELECT name FROM Students WHERE marks > 80;\n```"
        ))
    ));

    let req = test::TestRequest::post()
        .uri("/query")
        .set_form([("question", "List all students with marks above 80")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains("Generated SQL Query:"));
    assert!(html.contains("SELECT name FROM Students WHERE marks &gt; 80;"));
    assert!(html.contains("<th>name</th>"));
    assert!(html.contains("<td>Alice</td>"));
    assert!(!html.contains("<td>Bob</td>"));
}

#[actix_web::test]
async fn blank_form_question_does_not_call_model() {
    let db = TempDb::students();
    let llm = Arc::new(ScriptedLlm::always("SELECT 1"));
    let app = app!(state(&db, llm.clone()));

    let req = test::TestRequest::post()
        .uri("/query")
        .set_form([("question", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(llm.prompts().is_empty());
}

#[actix_web::test]
async fn form_failure_shows_error_after_sql() {
    let db = TempDb::students();
    let app = app!(state(&db, Arc::new(ScriptedLlm::always("SELECT * FROM Teachers"))));

    let req = test::TestRequest::post()
        .uri("/query")
        .set_form([("question", "<script>teachers</script>")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains("SELECT * FROM Teachers"));
    assert!(html.contains("An error occurred: execution failed"));
    assert!(html.contains("&lt;script&gt;teachers&lt;/script&gt;"));
    assert!(!html.contains("<script>teachers"));
}

#[actix_web::test]
async fn api_success_body() {
    let db = TempDb::students();
    let app = app!(state(
        &db,
        Arc::new(ScriptedLlm::always("SELECT name, marks FROM Students ORDER BY marks DESC"))
    ));

    let req = test::TestRequest::post()
        .uri("/api/query")
        .set_json(json!({ "question": "rank students" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["sql"], "SELECT name, marks FROM Students ORDER BY marks DESC");
    assert_eq!(body["columns"], json!(["name", "marks"]));
    assert_eq!(body["rows"], json!([["Alice", 90], ["Bob", 70]]));
    assert_eq!(body["row_count"], 2);
    assert!(body["took_ms"].is_u64());
}

#[actix_web::test]
async fn api_error_statuses_follow_failure_kind() {
    let db = TempDb::students();

    let cases: [(Arc<dyn Llm>, StatusCode, &str, bool); 3] = [
        (Arc::new(UnavailableLlm), StatusCode::BAD_GATEWAY, "generation", false),
        (
            Arc::new(ScriptedLlm::always("DROP TABLE Students")),
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation",
            true,
        ),
        (
            Arc::new(ScriptedLlm::always("SELECT * FROM Teachers")),
            StatusCode::BAD_REQUEST,
            "execution",
            true,
        ),
    ];

    for (llm, status, kind, has_sql) in cases {
        let app = app!(state(&db, llm));
        let req = test::TestRequest::post()
            .uri("/api/query")
            .set_json(json!({ "question": "anything" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{kind}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["kind"], kind);
        assert!(body["error"]["message"].is_string());
        assert_eq!(body.get("sql").is_some(), has_sql, "{kind}");
    }

    assert_eq!(db.count_students(), 2);
}

#[actix_web::test]
async fn api_rejects_blank_question() {
    let db = TempDb::students();
    let llm = Arc::new(ScriptedLlm::always("SELECT 1"));
    let app = app!(state(&db, llm.clone()));

    let req = test::TestRequest::post()
        .uri("/api/query")
        .set_json(json!({ "question": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(llm.prompts().is_empty());
}

#[actix_web::test]
async fn healthcheck_reports_version() {
    let db = TempDb::students();
    let app = app!(state(&db, Arc::new(ScriptedLlm::always("SELECT 1"))));

    let req = test::TestRequest::get().uri("/healthcheck").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
