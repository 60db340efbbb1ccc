use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestContext, call, create, create_app, get, post, put};
use tracked::models::ErrorCode;

#[actix_web::test]
async fn test_clearing_student_section_keeps_student_listed() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let student_id = create(
        &app,
        post(
            "/api/v1/students",
            &ctx.admin_token,
            json!({
                "first_name": "Ana",
                "last_name": "Cruz",
                "email": "Ana.Cruz@School.edu",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "section_id": h.section_id
            }),
        )
        .to_request(),
    )
    .await;

    let (_, before) = call(
        &app,
        get(
            &format!("/api/v1/sections/{}/students", h.section_id),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(before["data"].as_array().unwrap().len(), 1);
    assert_eq!(before["data"][0]["email"], "ana.cruz@school.edu");

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/students/{student_id}"),
            &ctx.admin_token,
            json!({"section_id": null}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["section_id"].is_null());

    let (_, filtered) = call(
        &app,
        get(
            &format!("/api/v1/students?section_id={}", h.section_id),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(filtered["data"], json!([]));

    let (_, all) = call(&app, get("/api/v1/students", &ctx.admin_token).to_request()).await;
    let all = all["data"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], student_id);
    assert!(all[0]["section_id"].is_null());
}

#[actix_web::test]
async fn test_student_section_must_match_hierarchy() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;

    let student_id = create(
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

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/students/{student_id}"),
            &ctx.admin_token,
            json!({"section_id": cs.section_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SectionHierarchyMismatch as i32);

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/students/{student_id}"),
            &ctx.admin_token,
            json!({"section_id": 999}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SectionNotFound as i32);

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/students/{student_id}"),
            &ctx.admin_token,
            json!({"section_id": it.section_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["section_id"], it.section_id);

    let (status, _) = call(
        &app,
        put(
            "/api/v1/students/999",
            &ctx.admin_token,
            json!({"section_id": null}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_duplicate_student_email_is_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;

    let student = json!({
        "first_name": "Ana",
        "last_name": "Cruz",
        "email": "ana@school.edu",
        "department_id": h.department_id,
        "year_level_id": h.year_level_id
    });
    create(
        &app,
        post("/api/v1/students", &ctx.admin_token, student.clone()).to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        post("/api/v1/students", &ctx.admin_token, student).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::StudentEmailAlreadyExists as i32);
}

#[actix_web::test]
async fn test_subject_teacher_must_belong_to_department() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;
    let cs_teacher = ctx.seed_teacher(cs.department_id, None).await;
    let it_teacher = ctx.seed_teacher(it.department_id, None).await;

    let (status, body) = call(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": it.department_id,
                "year_level_id": it.year_level_id,
                "teacher_id": cs_teacher
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::TeacherDepartmentMismatch as i32);

    create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": it.department_id,
                "year_level_id": it.year_level_id,
                "teacher_id": it_teacher,
                "section_id": it.section_id
            }),
        )
        .to_request(),
    )
    .await;

    let (_, body) = call(
        &app,
        get(
            &format!("/api/v1/subjects?teacher_id={it_teacher}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(body["data"][0]["teacher_name"], "Maria Santos");
    assert_eq!(body["data"][0]["section_id"], it.section_id);
}

#[actix_web::test]
async fn test_update_subject_assignment_partial() {
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
                "day": "Mon",
                "room": "R-101"
            }),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{subject_id}/assignment"),
            &ctx.admin_token,
            json!({"teacher_id": teacher_id, "time": "08:00-09:30"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["teacher_id"], teacher_id);
    assert_eq!(body["data"]["time"], "08:00-09:30");
    // 未提交的字段保持不变
    assert_eq!(body["data"]["day"], "Mon");
    assert_eq!(body["data"]["room"], "R-101");

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{subject_id}/assignment"),
            &ctx.admin_token,
            json!({"room": null}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["room"].is_null());
    assert_eq!(body["data"]["teacher_id"], teacher_id);

    let (status, body) = call(
        &app,
        put(
            "/api/v1/subjects/999/assignment",
            &ctx.admin_token,
            json!({"day": "Tue"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::SubjectNotFound as i32);
}

#[actix_web::test]
async fn test_teacher_updates_only_own_subject_assignment() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let h = ctx.seed_hierarchy("IT").await;
    let own_teacher = ctx.seed_teacher(h.department_id, Some(ctx.teacher_user.id)).await;
    let other_teacher = ctx.seed_teacher(h.department_id, None).await;

    let own_subject = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "teacher_id": own_teacher
            }),
        )
        .to_request(),
    )
    .await;
    let other_subject = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT102",
                "title": "Programming 1",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id,
                "teacher_id": other_teacher
            }),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{own_subject}/assignment"),
            &ctx.teacher_token,
            json!({"day": "Fri", "room": "Lab 2"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["room"], "Lab 2");

    // 不能改派教师
    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{own_subject}/assignment"),
            &ctx.teacher_token,
            json!({"teacher_id": other_teacher}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], ErrorCode::SubjectPermissionDenied as i32);

    let (status, _) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{other_subject}/assignment"),
            &ctx.teacher_token,
            json!({"day": "Sat"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{own_subject}/assignment"),
            &ctx.student_token,
            json!({"day": "Sun"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 教师不能走完整的科目更新接口
    let (status, _) = call(
        &app,
        put(
            &format!("/api/v1/subjects/{own_subject}"),
            &ctx.teacher_token,
            json!({"title": "Renamed"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_subject_assignment_section_must_match_subject() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;

    let subject_id = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": it.department_id,
                "year_level_id": it.year_level_id
            }),
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": subject_id, "section_id": cs.section_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SectionHierarchyMismatch as i32);

    let (status, body) = call(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": 999, "section_id": it.section_id}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SubjectNotFound as i32);

    let assignment_id = create(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({
                "subject_id": subject_id,
                "section_id": it.section_id,
                "day": " Wed ",
                "time": "10:00",
                "room": "",
                "remark": "lecture"
            }),
        )
        .to_request(),
    )
    .await;

    let (_, body) = call(
        &app,
        get(
            &format!("/api/v1/subject-assignments?subject_id={subject_id}"),
            &ctx.teacher_token,
        )
        .to_request(),
    )
    .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], assignment_id);
    assert_eq!(rows[0]["day"], "Wed");
    assert!(rows[0]["room"].is_null());
}
