//! Student data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::student::{CreateStudentParam, Student, UpdateStudentParam};

/// Repository providing database operations for the student directory.
///
/// Generic over the connection so it works on the pooled connection and
/// inside transactions alike.
pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student record.
    ///
    /// No uniqueness check is applied to the email; two students may share
    /// an address.
    ///
    /// # Arguments
    /// - `param` - Name, age, and email for the new student
    ///
    /// # Returns
    /// - `Ok(Student)` - The persisted student with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(param.age),
            email: ActiveValue::Set(param.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Gets all students in natural storage order.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find().all(self.db).await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Applies a partial update, changing only the supplied fields.
    ///
    /// # Arguments
    /// - `param` - Student id plus optional name, age, and email
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that id; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = student.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = param.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Student::from_entity(updated)))
    }

    /// Deletes a student record.
    ///
    /// Idempotent: deleting an id that does not exist is still a success.
    /// Enrollment and grade rows referencing the student are left in place.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds students for a set of ids, returned as a lookup-friendly list.
    ///
    /// Used by the join logic that resolves roster and grade references;
    /// ids that no longer resolve are simply absent from the result.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Student>, DbErr> {
        use sea_orm::{ColumnTrait, QueryFilter};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }
}
