//! 科目排课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subject_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub section_id: i64,
    pub teacher_id: Option<i64>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub remark: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject_assignment(
        self,
    ) -> crate::models::subject_assignments::entities::SubjectAssignment {
        use crate::models::subject_assignments::entities::SubjectAssignment;

        SubjectAssignment {
            id: self.id,
            subject_id: self.subject_id,
            section_id: self.section_id,
            teacher_id: self.teacher_id,
            day: self.day,
            time: self.time,
            room: self.room,
            remark: self.remark,
            created_at: super::timestamp_to_datetime(self.created_at),
            updated_at: super::timestamp_to_datetime(self.updated_at),
        }
    }
}
