pub mod home;
pub mod layout;
pub mod navbar;
pub mod rubric;

pub use layout::{page, render, titled};
