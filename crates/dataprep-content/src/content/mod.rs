//! Folder and document preparation.

pub mod service;
