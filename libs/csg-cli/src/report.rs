//! Build reports: one entry per placed volume.

use std::fmt::Write as _;

use csg_geometry::VolumeStore;
use csg_solid::{Shape, Solid};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Cells per axis used for sampled volumes.
    pub grid: u32,
    pub volumes: Vec<VolumeReport>,
}

#[derive(Debug, Serialize)]
pub struct VolumeReport {
    pub name: String,
    pub parent: Option<String>,
    pub material: String,
    pub solid: String,
    /// Analytic for primitives, sampled for composites (mm³).
    pub cubic_volume: f64,
    pub sampled: bool,
    pub extent_min: [f64; 3],
    pub extent_max: [f64; 3],
}

impl BuildReport {
    pub fn new(store: &VolumeStore, grid: u32) -> Self {
        let volumes = store
            .physical_volumes()
            .filter_map(|(handle, physical)| {
                let logical = store.logical(physical.logical)?;
                let solid = store.solid_of(handle)?;
                let parent = physical
                    .parent
                    .and_then(|p| store.physical(p))
                    .map(|p| p.name.clone());
                let extent = solid.extent();
                Some(VolumeReport {
                    name: physical.name.clone(),
                    parent,
                    material: logical.material.clone(),
                    solid: describe(solid),
                    cubic_volume: solid.cubic_volume_with_grid(grid),
                    sampled: solid.is_boolean(),
                    extent_min: extent.min.to_array(),
                    extent_max: extent.max.to_array(),
                })
            })
            .collect();
        Self { grid, volumes }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for v in &self.volumes {
            let _ = writeln!(
                out,
                "{:<16} parent={:<12} material={:<10} solid={:<24} volume={:.3} mm3{}",
                v.name,
                v.parent.as_deref().unwrap_or("-"),
                v.material,
                v.solid,
                v.cubic_volume,
                if v.sampled { " (sampled)" } else { "" },
            );
            let _ = writeln!(
                out,
                "{:<16} extent=[{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
                "",
                v.extent_min[0],
                v.extent_min[1],
                v.extent_min[2],
                v.extent_max[0],
                v.extent_max[1],
                v.extent_max[2],
            );
        }
        out
    }
}

fn describe(solid: &Solid) -> String {
    match solid {
        Solid::Primitive(p) => p.kind().to_string(),
        Solid::Boolean(b) => format!(
            "{}({}, {})",
            b.operation().as_str().to_lowercase(),
            b.mother().kind(),
            b.daughter().kind()
        ),
    }
}
