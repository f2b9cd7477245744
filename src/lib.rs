//! PocketReader — a minimal mobile-style reading browser.
//!
//! Core library: SQLite-backed bookmark and history storage, page metadata
//! fetching, screen state holders for the home, bookmarks, and webview
//! screens, and an engine adapter carrying ad blocking, reader mode, and the
//! Medium-to-Freedium rewrite.

pub mod app;
pub mod database;
pub mod engine;
pub mod repository;
pub mod screens;
pub mod services;
pub mod types;
