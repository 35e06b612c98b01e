//! Transformations from raw observation frames to renderable chart
//! payloads: per-variable series extraction, depth profile regridding,
//! panel layout, and selection tracking.

pub mod layout;
pub mod payload;
pub mod regrid;
pub mod run;
pub mod selection;
pub mod series;
