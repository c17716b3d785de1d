//! Domain logic for the wall content service.
//!
//! Pure functions and shared types only. No I/O and no framework types
//! live here; persistence is in `wall-db`, HTTP in `wall-api`.

pub mod cover;
pub mod device;
pub mod error;
pub mod excerpt;
pub mod html;
pub mod project;
pub mod slug;
pub mod types;
