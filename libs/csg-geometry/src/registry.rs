//! # Volume Store
//!
//! Owns every solid, logical volume and physical volume of a build pass.
//!
//! Entries are addressed by typed index handles and never removed. Names are
//! unique within each of the three categories.

use std::collections::HashMap;

use csg_solid::{Placement, Shape, Solid};
use serde::Serialize;

use crate::error::GeometryError;

// =============================================================================
// HANDLES
// =============================================================================

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(usize);

        impl $name {
            /// Position in the store.
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

handle!(
    /// Handle of a registered solid.
    SolidHandle
);
handle!(
    /// Handle of a registered logical volume.
    LogicalVolumeHandle
);
handle!(
    /// Handle of a placed physical volume.
    PhysicalVolumeHandle
);

// =============================================================================
// VOLUMES
// =============================================================================

/// Solid bound to a material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicalVolume {
    pub name: String,
    pub solid: SolidHandle,
    pub material: String,
}

/// Logical volume placed inside a parent physical volume.
///
/// The root volume has no parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicalVolume {
    pub name: String,
    pub logical: LogicalVolumeHandle,
    pub parent: Option<PhysicalVolumeHandle>,
    pub placement: Placement,
}

// =============================================================================
// STORE
// =============================================================================

/// Exclusive owner of everything registered during one build pass.
#[derive(Debug, Default)]
pub struct VolumeStore {
    solids: Vec<Solid>,
    logical: Vec<LogicalVolume>,
    physical: Vec<PhysicalVolume>,
    solid_names: HashMap<String, SolidHandle>,
    logical_names: HashMap<String, LogicalVolumeHandle>,
    physical_names: HashMap<String, PhysicalVolumeHandle>,
}

impl VolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `solid`.
    pub fn add_solid(&mut self, solid: Solid) -> Result<SolidHandle, GeometryError> {
        let name = solid.name().to_string();
        if self.solid_names.contains_key(&name) {
            return Err(GeometryError::duplicate("solid", name));
        }
        let handle = SolidHandle(self.solids.len());
        self.solids.push(solid);
        self.solid_names.insert(name, handle);
        Ok(handle)
    }

    pub fn add_logical(
        &mut self,
        volume: LogicalVolume,
    ) -> Result<LogicalVolumeHandle, GeometryError> {
        if self.logical_names.contains_key(&volume.name) {
            return Err(GeometryError::duplicate("logical volume", volume.name));
        }
        let handle = LogicalVolumeHandle(self.logical.len());
        self.logical_names.insert(volume.name.clone(), handle);
        self.logical.push(volume);
        Ok(handle)
    }

    pub fn add_physical(
        &mut self,
        volume: PhysicalVolume,
    ) -> Result<PhysicalVolumeHandle, GeometryError> {
        if self.physical_names.contains_key(&volume.name) {
            return Err(GeometryError::duplicate("physical volume", volume.name));
        }
        let handle = PhysicalVolumeHandle(self.physical.len());
        self.physical_names.insert(volume.name.clone(), handle);
        self.physical.push(volume);
        Ok(handle)
    }

    pub fn solid(&self, handle: SolidHandle) -> Option<&Solid> {
        self.solids.get(handle.0)
    }

    pub fn logical(&self, handle: LogicalVolumeHandle) -> Option<&LogicalVolume> {
        self.logical.get(handle.0)
    }

    pub fn physical(&self, handle: PhysicalVolumeHandle) -> Option<&PhysicalVolume> {
        self.physical.get(handle.0)
    }

    pub fn find_solid(&self, name: &str) -> Option<SolidHandle> {
        self.solid_names.get(name).copied()
    }

    pub fn find_physical(&self, name: &str) -> Option<PhysicalVolumeHandle> {
        self.physical_names.get(name).copied()
    }

    /// Solid behind a physical volume.
    pub fn solid_of(&self, handle: PhysicalVolumeHandle) -> Option<&Solid> {
        let logical = self.logical(self.physical(handle)?.logical)?;
        self.solid(logical.solid)
    }

    /// Physical volumes in registration order.
    pub fn physical_volumes(
        &self,
    ) -> impl Iterator<Item = (PhysicalVolumeHandle, &PhysicalVolume)> + '_ {
        self.physical
            .iter()
            .enumerate()
            .map(|(i, v)| (PhysicalVolumeHandle(i), v))
    }

    /// Physical volumes placed directly inside `parent`.
    pub fn children(&self, parent: PhysicalVolumeHandle) -> Vec<PhysicalVolumeHandle> {
        self.physical_volumes()
            .filter(|(_, v)| v.parent == Some(parent))
            .map(|(h, _)| h)
            .collect()
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    pub fn physical_count(&self) -> usize {
        self.physical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.physical.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
