pub mod auth;
pub mod meal;
pub mod order;
pub mod profile;
pub mod review;
