//! # Geometry Builder
//!
//! Runs one build pass: checks the `Parent` links, constructs the root
//! component and, through it, the whole tree.
//!
//! A parameter update is handled by building again from the updated
//! resolver; nothing is carried over between passes.

use std::collections::BTreeMap;

use config::constants::WORLD_NAME;
use csg_params::{ParameterResolver, ParameterScope};

use crate::component::create_component;
use crate::context::ConstructionContext;
use crate::error::GeometryError;
use crate::registry::VolumeStore;

/// Builds the volume tree below a root component.
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    root: String,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryBuilder {
    /// Builder rooted at `World`.
    pub fn new() -> Self {
        Self::with_root(WORLD_NAME)
    }

    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Constructs every component reachable from the root.
    ///
    /// ## Returns
    ///
    /// The populated store, or the first error. A failed pass returns no
    /// partial store.
    pub fn build(&self, resolver: &dyn ParameterResolver) -> Result<VolumeStore, GeometryError> {
        let parents = self.parent_links(resolver)?;

        let mut context = ConstructionContext::new(resolver);
        let root = create_component(resolver, &self.root, None)?;
        root.construct(&mut context)?;
        let store = context.into_store();

        // Components in a Parent cycle never hang below the root.
        if let Some((component, parent)) = parents
            .iter()
            .find(|(component, _)| store.find_physical(component).is_none())
        {
            return Err(GeometryError::invalid_configuration(
                component.as_str(),
                "Parent",
                parent.as_str(),
                "a component placed below the root",
            ));
        }

        tracing::info!(
            root = %self.root,
            volumes = store.physical_count(),
            "Geometry built"
        );
        Ok(store)
    }

    /// Maps every component with a `Parent` to that parent, after checking
    /// that each parent is defined and the root has none.
    fn parent_links(
        &self,
        resolver: &dyn ParameterResolver,
    ) -> Result<BTreeMap<String, String>, GeometryError> {
        let mut links = BTreeMap::new();
        for key in resolver.parameter_names() {
            let Some((component, "Parent")) = ParameterScope::split_key(&key) else {
                continue;
            };
            let parent = resolver
                .get_string(&key)
                .map_err(|e| GeometryError::parameter(component, e))?;
            if component == self.root {
                return Err(GeometryError::invalid_configuration(
                    component,
                    "Parent",
                    parent,
                    "no parent for the root component",
                ));
            }
            if !resolver.has_parameter(&ParameterScope::new(&parent).key("Type")) {
                return Err(GeometryError::UnknownParent {
                    component: component.to_string(),
                    parent,
                });
            }
            links.insert(component.to_string(), parent);
        }
        Ok(links)
    }
}
