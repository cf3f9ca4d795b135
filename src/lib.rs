pub mod application;
pub mod asset;
pub mod commands;
pub mod config;
pub mod github;
pub mod http;
pub mod release;
pub mod site_info;
pub mod view;
