pub mod api;
pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod notify;
