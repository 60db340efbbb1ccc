use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestContext, call, create_app, get, post};
use tracked::models::ErrorCode;
use tracked::models::students::requests::CreateStudentRequest;
use tracked::models::subjects::requests::CreateSubjectRequest;

struct Roster {
    subject_id: i64,
    student_id: i64,
    outsider_id: i64,
}

/// 一个指定班级的科目，班内一名学生，同年级但未分班的一名学生
async fn seed_roster(ctx: &TestContext) -> Roster {
    let h = ctx.seed_hierarchy("IT").await;

    let subject = ctx
        .storage
        .create_subject(CreateSubjectRequest {
            code: "IT101".into(),
            title: "Intro to IT".into(),
            department_id: h.department_id,
            year_level_id: h.year_level_id,
            units: Some(3),
            semester: None,
            curriculum_year: None,
            teacher_id: None,
            section_id: Some(h.section_id),
            day: None,
            time: None,
            room: None,
        })
        .await
        .expect("create subject");

    let mut students = Vec::new();
    for (name, section_id) in [("ana", Some(h.section_id)), ("ben", None)] {
        let student = ctx
            .storage
            .create_student(CreateStudentRequest {
                user_id: None,
                first_name: name.into(),
                last_name: "Cruz".into(),
                email: format!("{name}@school.edu"),
                department_id: h.department_id,
                year_level_id: h.year_level_id,
                section_id,
            })
            .await
            .expect("create student");
        students.push(student.id);
    }

    Roster {
        subject_id: subject.id,
        student_id: students[0],
        outsider_id: students[1],
    }
}

#[actix_web::test]
async fn test_attendance_is_upserted_per_day() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let roster = seed_roster(&ctx).await;

    let (status, first) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": roster.student_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "present"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["data"]["status"], "present");

    let (status, second) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": roster.student_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "late",
                "remark": "  bus delay  "
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["status"], "late");
    assert_eq!(second["data"]["remark"], "bus delay");

    let (status, _) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": roster.student_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-04",
                "status": "absent"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/v1/attendance?subject_id={}", roster.subject_id);
    let (_, body) = call(&app, get(&uri, &ctx.teacher_token).to_request()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let uri = format!(
        "/api/v1/attendance?subject_id={}&date=2025-03-03",
        roster.subject_id
    );
    let (_, body) = call(&app, get(&uri, &ctx.teacher_token).to_request()).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "late");
    assert_eq!(rows[0]["date"], "2025-03-03");
}

#[actix_web::test]
async fn test_attendance_requires_enrolled_student() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let roster = seed_roster(&ctx).await;

    let (status, body) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": roster.outsider_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "present"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::StudentNotEnrolled as i32);

    let (status, body) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": 999,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "present"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::StudentNotFound as i32);

    let (status, _) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.admin_token,
            json!({
                "student_id": roster.student_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "sleeping"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(
        &app,
        post(
            "/api/v1/attendance",
            &ctx.teacher_token,
            json!({
                "student_id": roster.student_id,
                "subject_id": roster.subject_id,
                "date": "2025-03-03",
                "status": "present"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_grades_are_upserted_per_period() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let roster = seed_roster(&ctx).await;

    let mut ids = Vec::new();
    for (period, score) in [("prelim", 85.0), ("prelim", 92.5), ("midterm", 100.0)] {
        let (status, body) = call(
            &app,
            post(
                "/api/v1/grades",
                &ctx.admin_token,
                json!({
                    "student_id": roster.student_id,
                    "subject_id": roster.subject_id,
                    "period": period,
                    "score": score
                }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["score"], score);
        ids.push(body["data"]["id"].as_i64().unwrap());
    }
    assert_eq!(ids[0], ids[1]);
    assert_ne!(ids[0], ids[2]);

    let uri = format!("/api/v1/grades?student_id={}", roster.student_id);
    let (status, body) = call(&app, get(&uri, &ctx.student_token).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|g| g["period"] == "prelim" && g["score"] == 92.5));

    let uri = format!("/api/v1/grades?student_id={}", roster.outsider_id);
    let (_, body) = call(&app, get(&uri, &ctx.admin_token).to_request()).await;
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_grade_score_must_be_in_range() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.storage.clone(), ctx.cache.clone())).await;
    let roster = seed_roster(&ctx).await;

    for score in [-0.5, 100.5] {
        let (status, body) = call(
            &app,
            post(
                "/api/v1/grades",
                &ctx.admin_token,
                json!({
                    "student_id": roster.student_id,
                    "subject_id": roster.subject_id,
                    "period": "finals",
                    "score": score
                }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], ErrorCode::GradeScoreOutOfRange as i32);
    }

    let (status, body) = call(
        &app,
        post(
            "/api/v1/grades",
            &ctx.admin_token,
            json!({
                "student_id": roster.outsider_id,
                "subject_id": roster.subject_id,
                "period": "finals",
                "score": 75.0
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], ErrorCode::StudentNotEnrolled as i32);

    let (_, body) = call(&app, get("/api/v1/grades", &ctx.admin_token).to_request()).await;
    assert_eq!(body["data"], json!([]));
}
