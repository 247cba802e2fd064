pub mod grading;
