//! 院系 → 年级 → 班级 层级一致性校验
//!
//! 写操作在落库前调用这些函数。请求体中引用的行不存在或层级不一致时返回 422，
//! 查询存储失败时返回 500。

use std::sync::Arc;

use actix_web::HttpResponse;

use super::common::{storage_error, validation_error};
use crate::models::{
    ErrorCode, departments::entities::Department, sections::entities::Section,
    students::entities::Student, subjects::entities::Subject, teachers::entities::Teacher,
    users::entities::User, year_levels::entities::YearLevel,
};
use crate::storage::Storage;

/// 班级是否属于给定院系与年级
pub(crate) fn section_matches(section: &Section, department_id: i64, year_level_id: i64) -> bool {
    section.department_id == department_id && section.year_level_id == year_level_id
}

pub(crate) async fn require_department(
    storage: &Arc<dyn Storage>,
    department_id: i64,
) -> Result<Department, HttpResponse> {
    match storage.get_department_by_id(department_id).await {
        Ok(Some(department)) => Ok(department),
        Ok(None) => Err(validation_error(
            ErrorCode::DepartmentNotFound,
            format!("Department {department_id} does not exist"),
        )),
        Err(e) => Err(storage_error("load department", e)),
    }
}

/// 年级必须存在且属于给定院系
pub(crate) async fn require_year_level_in_department(
    storage: &Arc<dyn Storage>,
    department_id: i64,
    year_level_id: i64,
) -> Result<YearLevel, HttpResponse> {
    require_department(storage, department_id).await?;

    let year_level = match storage.get_year_level_by_id(year_level_id).await {
        Ok(Some(year_level)) => year_level,
        Ok(None) => {
            return Err(validation_error(
                ErrorCode::YearLevelNotFound,
                format!("Year level {year_level_id} does not exist"),
            ));
        }
        Err(e) => return Err(storage_error("load year level", e)),
    };

    if year_level.department_id != department_id {
        return Err(validation_error(
            ErrorCode::YearLevelDepartmentMismatch,
            format!("Year level {year_level_id} does not belong to department {department_id}"),
        ));
    }

    Ok(year_level)
}

/// 班级必须存在且与给定院系、年级一致
pub(crate) async fn require_section_in_hierarchy(
    storage: &Arc<dyn Storage>,
    section_id: i64,
    department_id: i64,
    year_level_id: i64,
) -> Result<Section, HttpResponse> {
    let section = match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => section,
        Ok(None) => {
            return Err(validation_error(
                ErrorCode::SectionNotFound,
                format!("Section {section_id} does not exist"),
            ));
        }
        Err(e) => return Err(storage_error("load section", e)),
    };

    if !section_matches(&section, department_id, year_level_id) {
        return Err(validation_error(
            ErrorCode::SectionHierarchyMismatch,
            format!(
                "Section {section_id} does not belong to department {department_id} and year level {year_level_id}"
            ),
        ));
    }

    Ok(section)
}

/// 教师必须存在且属于给定院系
pub(crate) async fn require_teacher_in_department(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    department_id: i64,
) -> Result<Teacher, HttpResponse> {
    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Err(validation_error(
                ErrorCode::TeacherNotFound,
                format!("Teacher {teacher_id} does not exist"),
            ));
        }
        Err(e) => return Err(storage_error("load teacher", e)),
    };

    if teacher.department_id != department_id {
        return Err(validation_error(
            ErrorCode::TeacherDepartmentMismatch,
            format!("Teacher {teacher_id} does not belong to department {department_id}"),
        ));
    }

    Ok(teacher)
}

pub(crate) async fn require_user(
    storage: &Arc<dyn Storage>,
    user_id: i64,
) -> Result<User, HttpResponse> {
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(validation_error(
            ErrorCode::UserNotFound,
            format!("User {user_id} does not exist"),
        )),
        Err(e) => Err(storage_error("load user", e)),
    }
}

pub(crate) async fn require_student(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> Result<Student, HttpResponse> {
    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(validation_error(
            ErrorCode::StudentNotFound,
            format!("Student {student_id} does not exist"),
        )),
        Err(e) => Err(storage_error("load student", e)),
    }
}

pub(crate) async fn require_subject(
    storage: &Arc<dyn Storage>,
    subject_id: i64,
) -> Result<Subject, HttpResponse> {
    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(subject),
        Ok(None) => Err(validation_error(
            ErrorCode::SubjectNotFound,
            format!("Subject {subject_id} does not exist"),
        )),
        Err(e) => Err(storage_error("load subject", e)),
    }
}

/// 科目指定了班级时，只有该班级的学生可以登记考勤与成绩
pub(crate) fn require_student_enrolled(
    student: &Student,
    subject: &Subject,
) -> Result<(), HttpResponse> {
    let enrolled = match subject.section_id {
        Some(section_id) => student.section_id == Some(section_id),
        None => {
            student.department_id == subject.department_id
                && student.year_level_id == subject.year_level_id
        }
    };

    if enrolled {
        Ok(())
    } else {
        Err(validation_error(
            ErrorCode::StudentNotEnrolled,
            format!(
                "Student {} is not enrolled in subject {}",
                student.id, subject.code
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(department_id: i64, year_level_id: i64) -> Section {
        Section {
            id: 1,
            name: "Section A".into(),
            department_id,
            year_level_id,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn student(section_id: Option<i64>) -> Student {
        Student {
            id: 7,
            user_id: None,
            first_name: "Ana".into(),
            last_name: "Cruz".into(),
            email: "ana@school.edu".into(),
            department_id: 1,
            year_level_id: 2,
            section_id,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn subject(section_id: Option<i64>) -> Subject {
        Subject {
            id: 3,
            code: "IT101".into(),
            title: "Intro to IT".into(),
            units: Some(3),
            semester: None,
            curriculum_year: None,
            department_id: 1,
            year_level_id: 2,
            teacher_id: None,
            section_id,
            day: None,
            time: None,
            room: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_section_matches_requires_both_ids() {
        assert!(section_matches(&section(1, 2), 1, 2));
        assert!(!section_matches(&section(1, 2), 1, 3));
        assert!(!section_matches(&section(1, 2), 4, 2));
    }

    #[test]
    fn test_enrollment_follows_subject_section() {
        assert!(require_student_enrolled(&student(Some(5)), &subject(Some(5))).is_ok());
        assert!(require_student_enrolled(&student(Some(6)), &subject(Some(5))).is_err());
        assert!(require_student_enrolled(&student(None), &subject(Some(5))).is_err());
    }

    #[test]
    fn test_enrollment_without_section_uses_year_level() {
        assert!(require_student_enrolled(&student(None), &subject(None)).is_ok());

        let mut other = student(None);
        other.year_level_id = 9;
        assert!(require_student_enrolled(&other, &subject(None)).is_err());
    }
}
