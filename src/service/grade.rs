//! Grade book service for business logic.
//!
//! Owns the one real business rule of the system: at most one grade per
//! (student, subject) pair. Also resolves grade references for joined reads
//! and computes the ungraded-subjects set difference.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{
        enrollment::EnrollmentRepository, grade::GradeRepository, student::StudentRepository,
        subject::SubjectRepository,
    },
    error::{grade::GradeError, AppError},
    model::{
        grade::{Grade, GradeWithRefs, RecordGradeParam},
        student::Student,
        subject::{Subject, SubjectWithStudents},
    },
    service::subject::SubjectService,
};

/// Service providing business logic for the grade book.
pub struct GradeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    /// Creates a new GradeService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a grade for a (student, subject) pair.
    ///
    /// The pre-insert lookup catches the common duplicate case before
    /// writing anything. Two concurrent calls can both pass that check, so
    /// the unique index on (student_id, subject_id) is the real arbiter:
    /// a racing insert fails with a unique constraint violation, which is
    /// mapped to the same duplicate error. Either way state is mutated at
    /// most once per pair.
    ///
    /// # Returns
    /// - `Ok(Grade)` - The recorded grade
    /// - `Err(AppError::GradeErr(Duplicate))` - A grade already exists for
    ///   this pair
    pub async fn record(&self, param: RecordGradeParam) -> Result<Grade, AppError> {
        let grade_repo = GradeRepository::new(self.db);

        let existing = grade_repo
            .find_by_pair(param.student_id, param.subject_id)
            .await?;
        if existing.is_some() {
            return Err(GradeError::Duplicate.into());
        }

        match grade_repo.create(param).await {
            Ok(grade) => Ok(grade),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(GradeError::Duplicate.into()),
                _ => Err(err.into()),
            },
        }
    }

    /// Retrieves all grades with student and subject references resolved.
    pub async fn get_all_joined(&self) -> Result<Vec<GradeWithRefs>, AppError> {
        let grades = GradeRepository::new(self.db).get_all().await?;
        self.join(grades).await
    }

    /// Retrieves the joined grades of one student.
    pub async fn filter_by_student(&self, student_id: i32) -> Result<Vec<GradeWithRefs>, AppError> {
        let grades = GradeRepository::new(self.db)
            .get_by_student(student_id)
            .await?;
        self.join(grades).await
    }

    /// Updates the score of an existing grade.
    ///
    /// # Returns
    /// - `Ok(Some(Grade))` - The updated grade
    /// - `Ok(None)` - Grade id does not resolve; surfaced as a null body
    pub async fn update_score(&self, id: i32, score: f64) -> Result<Option<Grade>, AppError> {
        let grade = GradeRepository::new(self.db).update_score(id, score).await?;
        Ok(grade)
    }

    /// Deletes a grade. Idempotent.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        GradeRepository::new(self.db).delete(id).await?;
        Ok(())
    }

    /// Computes the subjects a student is enrolled in but has no grade for.
    ///
    /// Set difference on subject identity: the student's enrolled subjects
    /// minus the subjects of their existing grades. Enrollment duplicates
    /// collapse to one entry; the result keeps first-enrollment order and is
    /// returned with rosters populated.
    pub async fn ungraded_subjects(
        &self,
        student_id: i32,
    ) -> Result<Vec<SubjectWithStudents>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        let mut enrolled_ids: Vec<i32> = Vec::new();
        for enrollment in &enrollments {
            if !enrolled_ids.contains(&enrollment.subject_id) {
                enrolled_ids.push(enrollment.subject_id);
            }
        }

        let graded_ids: HashSet<i32> = GradeRepository::new(self.db)
            .get_by_student(student_id)
            .await?
            .into_iter()
            .map(|g| g.subject_id)
            .collect();

        let ungraded_ids: Vec<i32> = enrolled_ids
            .into_iter()
            .filter(|id| !graded_ids.contains(id))
            .collect();

        let subjects_by_id: HashMap<i32, Subject> = SubjectRepository::new(self.db)
            .find_by_ids(ungraded_ids.clone())
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        // Keep first-enrollment order; dangling subject references drop out.
        let ungraded: Vec<Subject> = ungraded_ids
            .into_iter()
            .filter_map(|id| subjects_by_id.get(&id).cloned())
            .collect();

        SubjectService::new(self.db).populate_many(ungraded).await
    }

    /// Resolves student and subject references for a batch of grades.
    ///
    /// References are stored as plain ids without integrity enforcement, so
    /// a grade may point at a deleted student or subject; those resolve to
    /// `None` in the joined model.
    async fn join(&self, grades: Vec<Grade>) -> Result<Vec<GradeWithRefs>, AppError> {
        let student_ids: Vec<i32> = grades.iter().map(|g| g.student_id).collect();
        let subject_ids: Vec<i32> = grades.iter().map(|g| g.subject_id).collect();

        let students: HashMap<i32, Student> = StudentRepository::new(self.db)
            .find_by_ids(student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let subjects: HashMap<i32, Subject> = SubjectRepository::new(self.db)
            .find_by_ids(subject_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let joined = grades
            .into_iter()
            .map(|grade| GradeWithRefs {
                id: grade.id,
                student: students.get(&grade.student_id).cloned(),
                subject: subjects.get(&grade.subject_id).cloned(),
                score: grade.score,
            })
            .collect();

        Ok(joined)
    }
}
