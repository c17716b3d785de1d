//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all fields `Option`) for patches

pub mod project;
