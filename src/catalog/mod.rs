//! Static content catalog
//!
//! Personas, funnel configurations, and the image-variable tables. This is
//! the editorial data the generators are parameterized with; none of it is
//! persisted, it ships with the binary.

pub mod funnels;
pub mod image_variables;
pub mod personas;

pub use funnels::{funnel_config, FunnelConfig};
pub use image_variables::{image_groups, random_variable, random_variables, roll_combo, ImageGroup};
pub use personas::{all_personas, persona_by_id, weighted_random_persona};
