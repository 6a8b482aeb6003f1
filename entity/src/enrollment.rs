use sea_orm::entity::prelude::*;

/// One roster entry: student `student_id` is enrolled in subject `subject_id`.
///
/// The auto-increment primary key preserves enrollment order. There is no
/// unique constraint on (subject_id, student_id): enrolling the same student
/// twice appends a second row, which is the documented roster behavior.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject_id: i32,
    pub student_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
