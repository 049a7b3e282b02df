pub mod auth;
pub mod browse;
pub mod favorites;
pub mod home;
pub mod provider;
pub mod season;
