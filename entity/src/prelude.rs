pub use super::credential::Entity as Credential;
pub use super::enrollment::Entity as Enrollment;
pub use super::grade::Entity as Grade;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
