/// 业务错误码
///
/// 与 HTTP 状态码配合使用：状态码表达错误类别（403/404/422），
/// 错误码定位到具体原因，前端据此展示提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 认证与用户 2xxx
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserNameInvalid = 2003,
    UserEmailInvalid = 2004,
    UserPasswordInvalid = 2005,
    UserCreationFailed = 2006,

    // 院系与年级 3xxx
    DepartmentNotFound = 3000,
    DepartmentCodeAlreadyExists = 3001,
    YearLevelNotFound = 3002,
    YearLevelDepartmentMismatch = 3003,

    // 班级 4xxx
    SectionNotFound = 4000,
    SectionHierarchyMismatch = 4001,

    // 科目与排课 5xxx
    SubjectNotFound = 5000,
    SubjectCodeAlreadyExists = 5001,
    SubjectAssignmentNotFound = 5002,
    SubjectPermissionDenied = 5003,

    // 学生与教师 6xxx
    StudentNotFound = 6000,
    StudentEmailAlreadyExists = 6001,
    TeacherNotFound = 6002,
    TeacherEmailAlreadyExists = 6003,
    TeacherDepartmentMismatch = 6004,

    // 考勤与成绩 7xxx
    StudentNotEnrolled = 7000,
    GradeScoreOutOfRange = 7001,
}
