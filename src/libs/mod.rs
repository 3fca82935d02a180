//! Core domain types and application plumbing.

pub mod board;
pub mod config;
pub mod data_storage;
pub mod envelope;
pub mod messages;
pub mod notice;
pub mod summary;
pub mod todo;
pub mod view;
