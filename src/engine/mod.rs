//! Browser engine boundary.
//!
//! The platform engine is modeled behind one-way messages: lifecycle
//! callbacks come in as [`adapter::EngineEvent`] values, and everything the
//! adapter wants the engine to do goes out as [`adapter::EngineCommand`]
//! values. No engine callback touches screen state directly.

pub mod adapter;
