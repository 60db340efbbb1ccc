use std::sync::Arc;

use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, RecordAttendanceRequest},
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
    },
    grades::{
        entities::Grade,
        requests::{GradeListQuery, RecordGradeRequest},
    },
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    subject_assignments::{
        entities::SubjectAssignment,
        requests::{CreateSubjectAssignmentRequest, SubjectAssignmentListQuery},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectDetail,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
    },
    users::{
        entities::{LinkedProfiles, User},
        requests::CreateUserRequest,
    },
    year_levels::{
        entities::YearLevel,
        requests::{CreateYearLevelRequest, UpdateYearLevelRequest, YearLevelListQuery},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段需已是哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 账号关联的教师与学生档案
    async fn get_linked_profiles(&self, user_id: i64) -> Result<LinkedProfiles>;

    /// 院系管理方法
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 年级管理方法
    async fn create_year_level(&self, req: CreateYearLevelRequest) -> Result<YearLevel>;
    async fn get_year_level_by_id(&self, id: i64) -> Result<Option<YearLevel>>;
    // 按 level 升序
    async fn list_year_levels(&self, query: YearLevelListQuery) -> Result<Vec<YearLevel>>;
    async fn update_year_level(
        &self,
        id: i64,
        update: UpdateYearLevelRequest,
    ) -> Result<Option<YearLevel>>;
    async fn delete_year_level(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    async fn list_teachers(&self, query: TeacherListQuery) -> Result<Vec<Teacher>>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_section(&self, req: CreateSectionRequest) -> Result<Section>;
    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list_sections(&self, query: SectionListQuery) -> Result<Vec<Section>>;
    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>>;
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    // 附带教师姓名与年级名称
    async fn list_subjects(&self, query: SubjectListQuery) -> Result<Vec<SubjectDetail>>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 排课管理方法
    async fn create_subject_assignment(
        &self,
        req: CreateSubjectAssignmentRequest,
    ) -> Result<SubjectAssignment>;
    async fn list_subject_assignments(
        &self,
        query: SubjectAssignmentListQuery,
    ) -> Result<Vec<SubjectAssignment>>;
    async fn delete_subject_assignment(&self, id: i64) -> Result<bool>;

    /// 考勤方法
    // 同一学生、科目、日期已存在时覆盖
    async fn record_attendance(&self, req: RecordAttendanceRequest) -> Result<AttendanceRecord>;
    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceRecord>>;

    /// 成绩方法
    // 同一学生、科目、阶段已存在时覆盖
    async fn record_grade(&self, req: RecordGradeRequest) -> Result<Grade>;
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
