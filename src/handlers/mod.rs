pub mod home;
pub mod rubric;
