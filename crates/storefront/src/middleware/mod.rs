pub mod jwt;
pub mod role;
pub mod session;
pub mod submission;
pub mod validate;
