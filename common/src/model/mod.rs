pub mod attachment;
pub mod course;
pub mod student;
