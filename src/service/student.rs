//! Student service for business logic.
//!
//! The student directory has no rules beyond direct CRUD, so this service
//! is a thin orchestration layer converting repository results to the
//! application error type.

use sea_orm::DatabaseConnection;

use crate::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

/// Service providing business logic for the student directory.
pub struct StudentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student record.
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(param).await?;
        Ok(student)
    }

    /// Retrieves all students.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;
        Ok(students)
    }

    /// Retrieves one student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - Id does not resolve; the endpoint surfaces this as a
    ///   null body, not an error
    pub async fn get(&self, id: i32) -> Result<Option<Student>, AppError> {
        let student = StudentRepository::new(self.db).find_by_id(id).await?;
        Ok(student)
    }

    /// Applies a partial update; unsupplied fields are left unchanged.
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Option<Student>, AppError> {
        let student = StudentRepository::new(self.db).update(param).await?;
        Ok(student)
    }

    /// Deletes a student. Idempotent; dangling roster and grade references
    /// are intentionally left behind.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        StudentRepository::new(self.db).delete(id).await?;
        Ok(())
    }
}
