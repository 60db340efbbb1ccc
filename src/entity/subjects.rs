//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    pub units: Option<i32>,
    pub semester: Option<String>,
    pub curriculum_year: Option<String>,
    pub department_id: i64,
    pub year_level_id: i64,
    pub teacher_id: Option<i64>,
    pub section_id: Option<i64>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id",
        on_delete = "Cascade"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::subject_assignments::Entity")]
    SubjectAssignments,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subject_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::subjects::entities::Subject;

        Subject {
            id: self.id,
            code: self.code,
            title: self.title,
            units: self.units,
            // 数据库中只会写入合法学期值
            semester: self.semester.and_then(|s| s.parse().ok()),
            curriculum_year: self.curriculum_year,
            department_id: self.department_id,
            year_level_id: self.year_level_id,
            teacher_id: self.teacher_id,
            section_id: self.section_id,
            day: self.day,
            time: self.time,
            room: self.room,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
