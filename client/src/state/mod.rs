//! Component-local UI state models.
//!
//! DESIGN
//! ======
//! Each model here is plain data with its transitions as methods. Components
//! wrap a model in an `RwSignal` they create themselves, so state never
//! outlives the component instance that owns it.

pub mod disclosure;
pub mod filter;
