pub mod auth;
pub mod hobbies;
