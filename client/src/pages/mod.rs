//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `layout` owns the three-region frame; `feed` supplies the content of the
//! main region. Both delegate rendering details to `components`.

pub mod feed;
pub mod layout;
