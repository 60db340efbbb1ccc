use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestContext, call, create, create_app, get, post, put};
use tracked::models::ErrorCode;

#[actix_web::test]
async fn test_department_without_year_levels_lists_empty() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;

    let department_id = create(
        &app,
        post(
            "/api/v1/departments",
            &ctx.admin_token,
            json!({"name": "BS Information Technology", "code": "IT"}),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        get(
            &format!("/api/v1/year-levels?department_id={department_id}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_unknown_parent_filter_yields_empty_list() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    ctx.seed_hierarchy("IT").await;

    for uri in [
        "/api/v1/year-levels?department_id=999",
        "/api/v1/sections?department_id=999&year_level_id=999",
        "/api/v1/subjects?department_id=999",
        "/api/v1/students?section_id=999",
    ] {
        let (status, body) = call(&app, get(uri, &ctx.student_token).to_request()).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["data"], json!([]), "{uri}");
    }
}

#[actix_web::test]
async fn test_section_is_listed_once_after_create() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let (status, created) = call(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({
                "name": "Section B",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = call(
        &app,
        get(
            &format!(
                "/api/v1/sections?department_id={}&year_level_id={}",
                h.department_id, h.year_level_id
            ),
            &ctx.teacher_token,
        )
        .to_request(),
    )
    .await;

    let matches: Vec<_> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["id"] == created["data"]["id"])
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0], created["data"]);
}

#[actix_web::test]
async fn test_year_levels_are_sorted_by_level() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    for (name, level) in [("4th Year", 4), ("2nd Year", 2), ("3rd Year", 3)] {
        create(
            &app,
            post(
                "/api/v1/year-levels",
                &ctx.admin_token,
                json!({"department_id": h.department_id, "name": name, "level": level}),
            )
            .to_request(),
        )
        .await;
    }

    let (_, body) = call(
        &app,
        get(
            &format!("/api/v1/year-levels?department_id={}", h.department_id),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;

    let levels: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y["level"].as_i64().unwrap())
        .collect();
    assert_eq!(levels, vec![1, 2, 3, 4]);
}

#[actix_web::test]
async fn test_end_to_end_subject_listing() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;

    let department_id = create(
        &app,
        post(
            "/api/v1/departments",
            &ctx.admin_token,
            json!({"name": "BSIT", "code": "IT"}),
        )
        .to_request(),
    )
    .await;
    let year_level_id = create(
        &app,
        post(
            "/api/v1/year-levels",
            &ctx.admin_token,
            json!({"department_id": department_id, "name": "1st Year", "level": 1}),
        )
        .to_request(),
    )
    .await;
    create(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({
                "name": "Section A",
                "department_id": department_id,
                "year_level_id": year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": department_id,
                "year_level_id": year_level_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        get(
            &format!("/api/v1/subjects?department_id={department_id}&year_level_id={year_level_id}"),
            &ctx.student_token,
        )
        .to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let subjects = body["data"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["code"], "IT101");
    assert_eq!(subjects[0]["year_level_name"], "1st Year");
    assert!(subjects[0]["teacher_name"].is_null());
}

#[actix_web::test]
async fn test_duplicate_subject_code_is_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let first = json!({
        "code": "IT101",
        "title": "Intro to IT",
        "department_id": h.department_id,
        "year_level_id": h.year_level_id,
        "units": 3,
        "semester": "1st"
    });
    let first_id = create(
        &app,
        post("/api/v1/subjects", &ctx.admin_token, first).to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Another title",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SubjectCodeAlreadyExists as i32);
    assert!(body["message"].is_string());
    assert!(body.get("data").is_none());

    let (_, listed) = call(&app, get("/api/v1/subjects", &ctx.admin_token).to_request()).await;
    let subjects = listed["data"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["id"], first_id);
    assert_eq!(subjects[0]["title"], "Intro to IT");
    assert_eq!(subjects[0]["semester"], "1st");
}

#[actix_web::test]
async fn test_subject_code_change_rechecks_uniqueness() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    for code in ["IT101", "IT102"] {
        create(
            &app,
            post(
                "/api/v1/subjects",
                &ctx.admin_token,
                json!({
                    "code": code,
                    "title": format!("Subject {code}"),
                    "department_id": h.department_id,
                    "year_level_id": h.year_level_id
                }),
            )
            .to_request(),
        )
        .await;
    }

    let (_, listed) = call(&app, get("/api/v1/subjects", &ctx.admin_token).to_request()).await;
    let second_id = listed["data"][1]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{second_id}"),
            &ctx.admin_token,
            json!({"code": "IT101"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SubjectCodeAlreadyExists as i32);

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{second_id}"),
            &ctx.admin_token,
            json!({"title": "Data Structures", "semester": "Summer"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "IT102");
    assert_eq!(body["data"]["semester"], "Summer");
}

#[actix_web::test]
async fn test_get_unknown_ids_return_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;

    for uri in [
        "/api/v1/departments/42",
        "/api/v1/year-levels/42",
        "/api/v1/sections/42",
        "/api/v1/sections/42/students",
        "/api/v1/subjects/42",
        "/api/v1/students/42",
        "/api/v1/teachers/42",
    ] {
        let (status, body) = call(&app, get(uri, &ctx.admin_token).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }
}

#[actix_web::test]
async fn test_section_requires_year_level_of_department() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;

    let (status, body) = call(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({
                "name": "Mixed",
                "department_id": it.department_id,
                "year_level_id": cs.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::YearLevelDepartmentMismatch as i32);

    let (status, body) = call(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({"name": "Orphan", "department_id": 999, "year_level_id": it.year_level_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::DepartmentNotFound as i32);
}

#[actix_web::test]
async fn test_missing_required_fields_are_validation_errors() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let (status, _) = call(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({"department_id": h.department_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(
        &app,
        post(
            "/api/v1/sections",
            &ctx.admin_token,
            json!({
                "name": "   ",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "semester": "3rd"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
