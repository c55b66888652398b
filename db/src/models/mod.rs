pub mod essay;
pub mod review;
pub mod user;
