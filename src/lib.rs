//! rayshade ray caster
//!
//! Casts one ray per pixel through a pinhole camera into a scene of spheres and
//! shades each pixel by surface normal or a sky gradient. Outputs ASCII PPM,
//! PNG and EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vec3;
pub mod ray;
pub mod interval;
pub mod hittable;
pub mod sphere;
pub mod shading;
pub mod camera;
pub mod output;
pub mod scene;
