//! # Geometry Components
//!
//! Components are selected by `s:Ge/<name>/Type`:
//!
//! | Type                                    | Component               |
//! |-----------------------------------------|-------------------------|
//! | `LogicalOperatorVolume`                 | [`LogicalOperatorVolume`] |
//! | `TsBox`, `TsCylinder`, `TsSphere`       | [`PrimitiveVolume`]     |
//!
//! Each component builds its solid, registers it through the
//! [`ConstructionContext`] and then instantiates its children.

use csg_params::{ParameterResolver, ParameterScope};
use csg_solid::Solid;

use crate::combinator::{CombinatorConfig, CsgCombinator};
use crate::context::ConstructionContext;
use crate::error::GeometryError;
use crate::kind::ShapeKind;
use crate::primitive::build_primitive;
use crate::registry::PhysicalVolumeHandle;

/// Type name of the two-primitive boolean component.
pub const LOGICAL_OPERATOR_TYPE: &str = "LogicalOperatorVolume";

/// A node of the geometry tree that can construct itself.
pub trait GeometryComponent {
    /// Instance name.
    fn name(&self) -> &str;

    /// Builds, registers and places the component, then its children.
    fn construct(
        &self,
        context: &mut ConstructionContext<'_>,
    ) -> Result<PhysicalVolumeHandle, GeometryError>;
}

// =============================================================================
// LOGICAL OPERATOR VOLUME
// =============================================================================

/// Composite of two primitives combined by a boolean operation.
#[derive(Debug, Clone)]
pub struct LogicalOperatorVolume {
    name: String,
    parent: Option<PhysicalVolumeHandle>,
}

impl LogicalOperatorVolume {
    pub fn new(name: impl Into<String>, parent: Option<PhysicalVolumeHandle>) -> Self {
        Self {
            name: name.into(),
            parent,
        }
    }
}

impl GeometryComponent for LogicalOperatorVolume {
    fn name(&self) -> &str {
        &self.name
    }

    fn construct(
        &self,
        context: &mut ConstructionContext<'_>,
    ) -> Result<PhysicalVolumeHandle, GeometryError> {
        let config = CombinatorConfig::resolve(context.resolver(), &self.name)?;
        let composite = CsgCombinator::new().execute(config)?;
        let physical = context.register_volume(&self.name, composite.into_solid(), self.parent)?;
        context.instantiate_children(&self.name, physical)?;
        Ok(physical)
    }
}

// =============================================================================
// PRIMITIVE VOLUME
// =============================================================================

/// Single box, cylinder or sphere section.
#[derive(Debug, Clone)]
pub struct PrimitiveVolume {
    name: String,
    kind: ShapeKind,
    parent: Option<PhysicalVolumeHandle>,
}

impl PrimitiveVolume {
    pub fn new(
        name: impl Into<String>,
        kind: ShapeKind,
        parent: Option<PhysicalVolumeHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            parent,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}

impl GeometryComponent for PrimitiveVolume {
    fn name(&self) -> &str {
        &self.name
    }

    fn construct(
        &self,
        context: &mut ConstructionContext<'_>,
    ) -> Result<PhysicalVolumeHandle, GeometryError> {
        let scope = ParameterScope::new(&self.name);
        let spec = build_primitive(context.resolver(), &scope, self.kind, "")
            .map_err(|e| GeometryError::parameter(&self.name, e))?;
        let solid = spec
            .build_solid(&self.name)
            .map_err(|e| GeometryError::solid(&self.name, e))?;
        let physical = context.register_volume(&self.name, Solid::Primitive(solid), self.parent)?;
        context.instantiate_children(&self.name, physical)?;
        Ok(physical)
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Creates the component configured for `name`.
///
/// ## Returns
///
/// The component, a `Parameter` error if `Type` is missing, or
/// `UnknownComponentType` for an unsupported type.
pub fn create_component(
    resolver: &dyn ParameterResolver,
    name: &str,
    parent: Option<PhysicalVolumeHandle>,
) -> Result<Box<dyn GeometryComponent>, GeometryError> {
    let type_name = resolver
        .get_string(&ParameterScope::new(name).key("Type"))
        .map_err(|e| GeometryError::parameter(name, e))?;

    if type_name == LOGICAL_OPERATOR_TYPE {
        return Ok(Box::new(LogicalOperatorVolume::new(name, parent)));
    }
    match ShapeKind::from_literal(&type_name) {
        Some(kind) => Ok(Box::new(PrimitiveVolume::new(name, kind, parent))),
        None => Err(GeometryError::UnknownComponentType {
            component: name.to_string(),
            type_name,
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use csg_params::ParameterStore;

    #[test]
    fn test_factory_dispatch() {
        let mut params = ParameterStore::new();
        params
            .set_string("Ge/Shape/Type", "LogicalOperatorVolume")
            .set_string("Ge/Ball/Type", "TsSphere")
            .set_string("Ge/Cone/Type", "TsCone");

        let shape = create_component(&params, "Shape", None).unwrap();
        assert_eq!(shape.name(), "Shape");
        assert!(create_component(&params, "Ball", None).is_ok());

        let err = create_component(&params, "Cone", None).err().unwrap();
        assert!(matches!(err, GeometryError::UnknownComponentType { .. }));
        assert!(err.is_configuration_error());

        let err = create_component(&params, "Missing", None).err().unwrap();
        assert!(matches!(err, GeometryError::Parameter { .. }));
    }
}
