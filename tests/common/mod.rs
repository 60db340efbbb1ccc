#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

use tracked::cache::{MokaCacheWrapper, ObjectCache};
use tracked::models::departments::requests::CreateDepartmentRequest;
use tracked::models::sections::requests::CreateSectionRequest;
use tracked::models::teachers::requests::CreateTeacherRequest;
use tracked::models::users::entities::{User, UserRole};
use tracked::models::year_levels::requests::CreateYearLevelRequest;
use tracked::models::users::requests::CreateUserRequest;
use tracked::routes;
use tracked::storage::Storage;
use tracked::storage::sea_orm_storage::SeaOrmStorage;
use tracked::utils::password::hash_password;
use tracked::utils::{json_error_handler, query_error_handler};

pub const TEST_PASSWORD: &str = "Secret123x";

// argon2 较慢，所有测试用户共用一个哈希
static PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| hash_password(TEST_PASSWORD).expect("Failed to hash test password"));

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub admin: User,
    pub teacher_user: User,
    pub student_user: User,
    pub admin_token: String,
    pub teacher_token: String,
    pub student_token: String,
}

impl TestContext {
    /// 独立的内存数据库，预置 admin / teacher / student 三个账号
    pub async fn new() -> TestContext {
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::new_in_memory()
                .await
                .expect("Failed to create in-memory storage"),
        );
        let cache: Arc<dyn ObjectCache> =
            Arc::new(MokaCacheWrapper::new().expect("Failed to create cache"));

        let admin = create_user(&storage, "admin", UserRole::Admin).await;
        let teacher_user = create_user(&storage, "teacher1", UserRole::Teacher).await;
        let student_user = create_user(&storage, "student1", UserRole::Student).await;

        TestContext {
            admin_token: admin.generate_access_token().expect("token"),
            teacher_token: teacher_user.generate_access_token().expect("token"),
            student_token: student_user.generate_access_token().expect("token"),
            storage,
            cache,
            admin,
            teacher_user,
            student_user,
        }
    }
}

/// 按生产环境的方式装配路由，存储与缓存由调用方提供
pub fn create_app(
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(storage))
        .app_data(web::Data::new(cache))
        .configure(routes::configure_api_routes)
}

pub async fn create_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            password: PASSWORD_HASH.clone(),
            role,
        })
        .await
        .expect("Failed to create test user")
}

pub fn get(uri: &str, token: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

pub fn post(uri: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

pub fn put(uri: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::put()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

pub fn delete(uri: &str, token: &str) -> test::TestRequest {
    test::TestRequest::delete()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

/// 发送请求并把响应体解析为 JSON
pub async fn call<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, body)
}

/// 创建成功并返回 data.id
pub async fn create<S, R, B>(app: &S, req: R) -> i64
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = call(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected response: {body}");
    body["data"]["id"].as_i64().expect("created row has an id")
}

/// 院系 → 年级 → 班级 的最小层级
pub struct Hierarchy {
    pub department_id: i64,
    pub year_level_id: i64,
    pub section_id: i64,
}

impl TestContext {
    /// 绕过 HTTP 直接写入存储
    pub async fn seed_hierarchy(&self, code: &str) -> Hierarchy {
        let department = self
            .storage
            .create_department(CreateDepartmentRequest {
                name: format!("Department {code}"),
                code: code.to_string(),
            })
            .await
            .expect("Failed to seed department");

        let year_level = self
            .storage
            .create_year_level(CreateYearLevelRequest {
                department_id: department.id,
                name: "1st Year".to_string(),
                level: 1,
            })
            .await
            .expect("Failed to seed year level");

        let section = self
            .storage
            .create_section(CreateSectionRequest {
                name: "Section A".to_string(),
                department_id: department.id,
                year_level_id: year_level.id,
            })
            .await
            .expect("Failed to seed section");

        Hierarchy {
            department_id: department.id,
            year_level_id: year_level.id,
            section_id: section.id,
        }
    }

    pub async fn seed_teacher(&self, department_id: i64, user_id: Option<i64>) -> i64 {
        self.storage
            .create_teacher(CreateTeacherRequest {
                user_id,
                first_name: "Maria".to_string(),
                last_name: "Santos".to_string(),
                email: format!("teacher{department_id}-{}@school.edu", user_id.unwrap_or(0)),
                department_id,
            })
            .await
            .expect("Failed to seed teacher")
            .id
    }
}
