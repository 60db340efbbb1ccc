use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestContext, call, create, create_app, delete, get, post};
use tracked::models::ErrorCode;

#[actix_web::test]
async fn test_delete_section_cascades_subjects_and_keeps_students() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let sectioned = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "section_id": h.section_id
            }),
        )
        .to_request(),
    )
    .await;
    let unsectioned = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT102",
                "title": "Programming 1",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    create(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": unsectioned, "section_id": h.section_id, "day": "Mon"}),
        )
        .to_request(),
    )
    .await;
    let student_id = create(
        &app,
        post(
            "/api/v1/students",
            &ctx.admin_token,
            json!({
                "first_name": "Ana",
                "last_name": "Cruz",
                "email": "ana@school.edu",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "section_id": h.section_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        delete(&format!("/api/v1/sections/{}", h.section_id), &ctx.admin_token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, subjects) = call(&app, get("/api/v1/subjects", &ctx.admin_token).to_request()).await;
    let ids: Vec<i64> = subjects["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&sectioned));
    assert_eq!(ids, vec![unsectioned]);

    let (_, assignments) = call(
        &app,
        get("/api/v1/subject-assignments", &ctx.admin_token).to_request(),
    )
    .await;
    assert_eq!(assignments["data"], json!([]));

    let (status, student) = call(
        &app,
        get(&format!("/api/v1/students/{student_id}"), &ctx.admin_token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(student["data"]["section_id"].is_null());
}

#[actix_web::test]
async fn test_delete_department_removes_whole_subtree() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;
    ctx.seed_teacher(it.department_id, None).await;

    create(
        &app,
        post(
            "/api/v1/students",
            &ctx.admin_token,
            json!({
                "first_name": "Ana",
                "last_name": "Cruz",
                "email": "ana@school.edu",
                "department_id": it.department_id,
                "year_level_id": it.year_level_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, _) = call(
        &app,
        delete(
            &format!("/api/v1/departments/{}", it.department_id),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (uri, remaining) in [
        ("/api/v1/departments", cs.department_id),
        ("/api/v1/year-levels", cs.year_level_id),
        ("/api/v1/sections", cs.section_id),
    ] {
        let (_, body) = call(&app, get(uri, &ctx.admin_token).to_request()).await;
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1, "{uri}");
        assert_eq!(rows[0]["id"], remaining, "{uri}");
    }

    for uri in ["/api/v1/students", "/api/v1/teachers"] {
        let (_, body) = call(&app, get(uri, &ctx.admin_token).to_request()).await;
        assert_eq!(body["data"], json!([]), "{uri}");
    }
}

#[actix_web::test]
async fn test_delete_teacher_clears_subject_teacher() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;
    let teacher_id = ctx.seed_teacher(h.department_id, None).await;

    let subject_id = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "teacher_id": teacher_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, _) = call(
        &app,
        delete(&format!("/api/v1/teachers/{teacher_id}"), &ctx.admin_token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(
        &app,
        get(&format!("/api/v1/subjects/{subject_id}"), &ctx.admin_token).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["teacher_id"].is_null());
}

#[actix_web::test]
async fn test_delete_unknown_rows_return_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;

    let cases = [
        ("/api/v1/departments/77", ErrorCode::DepartmentNotFound),
        ("/api/v1/year-levels/77", ErrorCode::YearLevelNotFound),
        ("/api/v1/sections/77", ErrorCode::SectionNotFound),
        ("/api/v1/subjects/77", ErrorCode::SubjectNotFound),
        ("/api/v1/students/77", ErrorCode::StudentNotFound),
        ("/api/v1/teachers/77", ErrorCode::TeacherNotFound),
        (
            "/api/v1/subject-assignments/77",
            ErrorCode::SubjectAssignmentNotFound,
        ),
    ];

    for (uri, code) in cases {
        let (status, body) = call(&app, delete(uri, &ctx.admin_token).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["code"], code as i32, "{uri}");
    }
}

#[actix_web::test]
async fn test_section_with_students_cannot_move() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let second_year = create(
        &app,
        post(
            "/api/v1/year-levels",
            &ctx.admin_token,
            json!({"department_id": h.department_id, "name": "2nd Year", "level": 2}),
        )
        .to_request(),
    )
    .await;
    create(
        &app,
        post(
            "/api/v1/students",
            &ctx.admin_token,
            json!({
                "first_name": "Ana",
                "last_name": "Cruz",
                "email": "ana@school.edu",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "section_id": h.section_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, _) = call(
        &app,
        common::put(
            &format!("/api/v1/sections/{}", h.section_id),
            &ctx.admin_token,
            json!({"year_level_id": second_year}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // 只改名不受影响
    let (status, body) = call(
        &app,
        common::put(
            &format!("/api/v1/sections/{}", h.section_id),
            &ctx.admin_token,
            json!({"name": "Section Alpha"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Section Alpha");
}
