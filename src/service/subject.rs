//! Subject catalog service for business logic.
//!
//! Owns roster semantics: read-time population of student references,
//! append-only enrollment, and wholesale roster replacement.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};

use crate::{
    data::{enrollment::EnrollmentRepository, student::StudentRepository, subject::SubjectRepository},
    error::AppError,
    model::{
        student::Student,
        subject::{ReplaceEnrollmentParam, Subject, SubjectWithStudents},
    },
};

/// Service providing business logic for the subject catalog.
pub struct SubjectService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    /// Creates a new SubjectService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new subject with an empty roster.
    pub async fn create(&self, name: String) -> Result<SubjectWithStudents, AppError> {
        let subject = SubjectRepository::new(self.db).create(name).await?;

        Ok(SubjectWithStudents {
            id: subject.id,
            name: subject.name,
            students: Vec::new(),
        })
    }

    /// Retrieves all subjects with their rosters resolved to full student
    /// records.
    ///
    /// Loads subjects, roster rows, and referenced students in three
    /// queries, then assembles the populated rosters in memory. Roster order
    /// is enrollment order; duplicate entries are retained. Roster entries
    /// whose student has been deleted are dropped from the populated list.
    pub async fn get_all(&self) -> Result<Vec<SubjectWithStudents>, AppError> {
        let subjects = SubjectRepository::new(self.db).get_all().await?;
        self.populate_many(subjects).await
    }

    /// Appends a student to a subject's roster.
    ///
    /// Append-only set semantics without deduplication: enrolling a student
    /// who is already on the roster adds a second entry.
    ///
    /// # Returns
    /// - `Ok(SubjectWithStudents)` - The subject with its updated roster
    /// - `Err(AppError::NotFound)` - Subject id does not resolve
    pub async fn enroll(
        &self,
        subject_id: i32,
        student_id: i32,
    ) -> Result<SubjectWithStudents, AppError> {
        let Some(subject) = SubjectRepository::new(self.db).find_by_id(subject_id).await? else {
            return Err(AppError::NotFound("Subject not found".to_string()));
        };

        EnrollmentRepository::new(self.db)
            .create(subject_id, student_id)
            .await?;

        self.populate(subject).await
    }

    /// Replaces a subject's name and entire roster.
    ///
    /// Unlike enroll this is a full overwrite: the existing roster rows are
    /// removed and the supplied student ids become the new roster, in the
    /// given order. The rename and the roster rewrite run in one
    /// transaction, so a failure partway through leaves the previous name
    /// and roster intact.
    ///
    /// # Returns
    /// - `Ok(SubjectWithStudents)` - The subject with its replaced roster
    /// - `Err(AppError::NotFound)` - Subject id does not resolve; nothing is
    ///   created or modified
    pub async fn replace_enrollment(
        &self,
        param: ReplaceEnrollmentParam,
    ) -> Result<SubjectWithStudents, AppError> {
        let subject = self
            .db
            .transaction::<_, Subject, AppError>(move |txn| {
                Box::pin(async move {
                    let Some(subject) = SubjectRepository::new(txn)
                        .update_name(param.subject_id, param.name)
                        .await?
                    else {
                        return Err(AppError::NotFound("Subject not found".to_string()));
                    };

                    let enrollment_repo = EnrollmentRepository::new(txn);
                    enrollment_repo.delete_by_subject(param.subject_id).await?;
                    for student_id in param.students {
                        enrollment_repo.create(param.subject_id, student_id).await?;
                    }

                    Ok(subject)
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(db_err) => AppError::DbErr(db_err),
                TransactionError::Transaction(app_err) => app_err,
            })?;

        self.populate(subject).await
    }

    /// Deletes a subject and its roster rows.
    ///
    /// Idempotent. Grades referencing the subject are left in place.
    pub async fn delete(&self, subject_id: i32) -> Result<(), AppError> {
        EnrollmentRepository::new(self.db)
            .delete_by_subject(subject_id)
            .await?;
        SubjectRepository::new(self.db).delete(subject_id).await?;
        Ok(())
    }

    /// Resolves the roster of one subject to full student records.
    ///
    /// Loads only that subject's roster rows, unlike `populate_many` which
    /// reads the whole enrollment table for the catalog listing.
    pub async fn populate(&self, subject: Subject) -> Result<SubjectWithStudents, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_subject(subject.id)
            .await?;

        let student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        let students: HashMap<i32, Student> = StudentRepository::new(self.db)
            .find_by_ids(student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let roster = enrollments
            .iter()
            .filter_map(|e| students.get(&e.student_id).cloned())
            .collect();

        Ok(SubjectWithStudents {
            id: subject.id,
            name: subject.name,
            students: roster,
        })
    }

    /// Resolves the rosters of a batch of subjects.
    pub async fn populate_many(
        &self,
        subjects: Vec<Subject>,
    ) -> Result<Vec<SubjectWithStudents>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db).get_all().await?;

        let student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        let students: HashMap<i32, Student> = StudentRepository::new(self.db)
            .find_by_ids(student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let populated = subjects
            .into_iter()
            .map(|subject| {
                let roster = enrollments
                    .iter()
                    .filter(|e| e.subject_id == subject.id)
                    .filter_map(|e| students.get(&e.student_id).cloned())
                    .collect();

                SubjectWithStudents {
                    id: subject.id,
                    name: subject.name,
                    students: roster,
                }
            })
            .collect();

        Ok(populated)
    }
}
