use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestContext, call, create, create_app, delete, post, put};
use tracked::models::ErrorCode;

#[actix_web::test]
async fn test_empty_section_can_move_to_another_year_level() {
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

    let (status, body) = call(
        &app,
        put(
            &format!("/api/v1/sections/{}", h.section_id),
            &ctx.admin_token,
            json!({"year_level_id": second_year}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["year_level_id"], second_year);
}

#[actix_web::test]
async fn test_section_with_schedule_cannot_move() {
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
    let subject_id = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    let assignment_id = create(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": subject_id, "section_id": h.section_id, "day": "Mon"}),
        )
        .to_request(),
    )
    .await;

    let section_uri = format!("/api/v1/sections/{}", h.section_id);
    let (status, body) = call(
        &app,
        put(&section_uri, &ctx.admin_token, json!({"year_level_id": second_year})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SectionHierarchyMismatch as i32);

    let (_, body) = call(&app, common::get(&section_uri, &ctx.admin_token).to_request()).await;
    assert_eq!(body["data"]["year_level_id"], h.year_level_id);

    let (status, _) = call(
        &app,
        delete(
            &format!("/api/v1/subject-assignments/{assignment_id}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        put(&section_uri, &ctx.admin_token, json!({"year_level_id": second_year})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_subject_with_schedule_cannot_move() {
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
    let subject_id = create(
        &app,
        post(
            "/api/v1/subjects",
            &ctx.admin_token,
            json!({
                "code": "IT101",
                "title": "Intro to IT",
                "department_id": h.department_id,
                "year_level_id": h.year_level_id
            }),
        )
        .to_request(),
    )
    .await;
    let assignment_id = create(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": subject_id, "section_id": h.section_id}),
        )
        .to_request(),
    )
    .await;

    let subject_uri = format!("/api/v1/subjects/{subject_id}");
    let (status, body) = call(
        &app,
        put(&subject_uri, &ctx.admin_token, json!({"year_level_id": second_year})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::SectionHierarchyMismatch as i32);

    // 不改层级的字段照常更新
    let (status, body) = call(
        &app,
        put(&subject_uri, &ctx.admin_token, json!({"title": "Introduction to IT"})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Introduction to IT");

    call(
        &app,
        delete(
            &format!("/api/v1/subject-assignments/{assignment_id}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        put(&subject_uri, &ctx.admin_token, json!({"year_level_id": second_year})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["year_level_id"], second_year);
}

#[actix_web::test]
async fn test_scheduled_teacher_cannot_change_department() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;
    let teacher_id = ctx.seed_teacher(it.department_id, None).await;

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
    // 只在排课里出现，科目本身没有指定教师
    let assignment_id = create(
        &app,
        post(
            "/api/v1/subject-assignments",
            &ctx.admin_token,
            json!({"subject_id": subject_id, "section_id": it.section_id, "teacher_id": teacher_id}),
        )
        .to_request(),
    )
    .await;

    let (_, body) = call(
        &app,
        common::get(
            &format!("/api/v1/subject-assignments?teacher_id={teacher_id}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], assignment_id);

    let teacher_uri = format!("/api/v1/teachers/{teacher_id}");
    let (status, body) = call(
        &app,
        put(&teacher_uri, &ctx.admin_token, json!({"department_id": cs.department_id}))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::TeacherDepartmentMismatch as i32);

    call(
        &app,
        delete(
            &format!("/api/v1/subject-assignments/{assignment_id}"),
            &ctx.admin_token,
        )
        .to_request(),
    )
    .await;

    let (status, body) = call(
        &app,
        put(&teacher_uri, &ctx.admin_token, json!({"department_id": cs.department_id}))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["department_id"], cs.department_id);
}

#[actix_web::test]
async fn test_subject_teacher_cannot_change_department() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let it = ctx.seed_hierarchy("IT").await;
    let cs = ctx.seed_hierarchy("CS").await;
    let teacher_id = ctx.seed_teacher(it.department_id, None).await;

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
                "teacher_id": teacher_id
            }),
        )
        .to_request(),
    )
    .await;

    let teacher_uri = format!("/api/v1/teachers/{teacher_id}");
    let (status, body) = call(
        &app,
        put(&teacher_uri, &ctx.admin_token, json!({"department_id": cs.department_id}))
            .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::TeacherDepartmentMismatch as i32);

    // 改名不涉及院系
    let (status, body) = call(
        &app,
        put(&teacher_uri, &ctx.admin_token, json!({"first_name": "Mariana"})).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "Mariana");
    assert_eq!(body["data"]["department_id"], it.department_id);
}
