//! # Construction Context
//!
//! Shared scaffolding every component uses while constructing itself:
//! parameter access, volume registration and child instantiation.
//!
//! ## Per-Volume Keys
//!
//! | Key                  | Type   | Default  |
//! |----------------------|--------|----------|
//! | `Material`           | string | required |
//! | `TransX/Y/Z`         | length | 0        |
//! | `RotX/Y/Z`           | angle  | 0        |
//! | `Parent`             | string | none for the root |

use csg_params::{ParameterResolver, ParameterScope};
use csg_solid::Solid;

use crate::component::create_component;
use crate::error::GeometryError;
use crate::registry::{LogicalVolume, PhysicalVolume, PhysicalVolumeHandle, VolumeStore};
use crate::transform::RelativeTransform;

/// State of one build pass.
pub struct ConstructionContext<'a> {
    resolver: &'a dyn ParameterResolver,
    store: VolumeStore,
}

impl<'a> ConstructionContext<'a> {
    /// Creates a context with an empty volume store.
    pub fn new(resolver: &'a dyn ParameterResolver) -> Self {
        Self {
            resolver,
            store: VolumeStore::new(),
        }
    }

    pub fn resolver(&self) -> &'a dyn ParameterResolver {
        self.resolver
    }

    pub fn store(&self) -> &VolumeStore {
        &self.store
    }

    /// Ends the pass and hands over the store.
    pub fn into_store(self) -> VolumeStore {
        self.store
    }

    /// Registers `solid` as a logical volume of `component` and places it.
    ///
    /// ## Parameters
    ///
    /// - `component`: instance name; names the logical and physical volume
    /// - `solid`: ownership passes to the store
    /// - `parent`: enclosing physical volume, `None` for the root
    ///
    /// ## Returns
    ///
    /// Handle of the new physical volume.
    pub fn register_volume(
        &mut self,
        component: &str,
        solid: Solid,
        parent: Option<PhysicalVolumeHandle>,
    ) -> Result<PhysicalVolumeHandle, GeometryError> {
        let scope = ParameterScope::new(component);
        let material = self
            .resolver
            .get_string(&scope.key("Material"))
            .map_err(|e| GeometryError::parameter(component, e))?;
        let placement = RelativeTransform::resolve(self.resolver, &scope, "Rot", "Trans", false)
            .map_err(|e| GeometryError::parameter(component, e))?
            .placement();

        let solid = self.store.add_solid(solid)?;
        let logical = self.store.add_logical(LogicalVolume {
            name: component.to_string(),
            solid,
            material: material.clone(),
        })?;
        let physical = self.store.add_physical(PhysicalVolume {
            name: component.to_string(),
            logical,
            parent,
            placement,
        })?;

        let parent_name = parent
            .and_then(|h| self.store.physical(h))
            .map(|v| v.name.as_str())
            .unwrap_or("-");
        tracing::info!(
            component = %component,
            material = %material,
            parent = %parent_name,
            "Volume registered"
        );
        Ok(physical)
    }

    /// Names of every component whose `Parent` is `parent_name`, sorted.
    pub fn child_names(&self, parent_name: &str) -> Result<Vec<String>, GeometryError> {
        let mut children = Vec::new();
        for key in self.resolver.parameter_names() {
            let Some((instance, "Parent")) = ParameterScope::split_key(&key) else {
                continue;
            };
            let parent = self
                .resolver
                .get_string(&key)
                .map_err(|e| GeometryError::parameter(instance, e))?;
            if parent == parent_name {
                children.push(instance.to_string());
            }
        }
        children.sort();
        children.dedup();
        Ok(children)
    }

    /// Constructs every child of `parent_name` inside `parent`.
    ///
    /// Children are built depth first in sorted name order; the first
    /// failure aborts the pass.
    pub fn instantiate_children(
        &mut self,
        parent_name: &str,
        parent: PhysicalVolumeHandle,
    ) -> Result<Vec<PhysicalVolumeHandle>, GeometryError> {
        let mut handles = Vec::new();
        for child in self.child_names(parent_name)? {
            let component = create_component(self.resolver, &child, Some(parent))?;
            handles.push(component.construct(self)?);
        }
        Ok(handles)
    }
}

// =============================================================================
// TESTS
// =============================================================================
