//! # CSG Combinator
//!
//! Builds one composite solid from a mother primitive, a daughter primitive,
//! a relative transform and a boolean operation.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle → ValidatingInputs → BuildingMother → BuildingDaughter
//!      → BuildingTransform → Combining → Done
//!
//! any validating or building step ──failure──→ Error
//! ```
//!
//! A combinator executes once. Partially built primitives are dropped on
//! failure; nothing is returned but the error.
//!
//! ## Keys
//!
//! | Key                               | Type   |
//! |-----------------------------------|--------|
//! | `Operation`                       | string |
//! | `Type_mother`, `Type_daughter`    | string |
//! | `RelRotX/Y/Z`                     | angle  |
//! | `RelTransX/Y/Z`                   | length |
//! | shape fields with `_mother` / `_daughter` suffix | length / angle |

use std::fmt;

use csg_params::{ParameterResolver, ParameterScope};
use csg_solid::{BooleanSolid, Extent, Placement, PrimitiveSolid, Shape, Solid};
use serde::Serialize;

use crate::error::GeometryError;
use crate::kind::{OperationKind, ShapeKind};
use crate::primitive::{build_primitive, PrimitiveSpec};
use crate::transform::RelativeTransform;


/// Suffix of mother shape fields.
pub const MOTHER_SUFFIX: &str = "_mother";
/// Suffix of daughter shape fields.
pub const DAUGHTER_SUFFIX: &str = "_daughter";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Fully resolved, immutable input of one combinator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinatorConfig {
    /// Owning component instance; names the composite solid.
    pub instance: String,
    pub operation: OperationKind,
    pub mother: PrimitiveSpec,
    pub daughter: PrimitiveSpec,
    pub transform: RelativeTransform,
}

impl CombinatorConfig {
    /// Resolves every parameter of `instance` once.
    ///
    /// Kind literals are checked before any dimension is read, so an unknown
    /// operation or shape is reported even when its dimensions are absent.
    pub fn resolve(
        resolver: &dyn ParameterResolver,
        instance: &str,
    ) -> Result<Self, GeometryError> {
        let scope = ParameterScope::new(instance);
        let param = |e| GeometryError::parameter(instance, e);
        let literal = |field: &str| resolver.get_string(&scope.key(field)).map_err(param);

        let operation = OperationKind::resolve(instance, "Operation", &literal("Operation")?)?;
        let mother_kind = ShapeKind::resolve(instance, "Type_mother", &literal("Type_mother")?)?;
        let daughter_kind =
            ShapeKind::resolve(instance, "Type_daughter", &literal("Type_daughter")?)?;

        let transform = RelativeTransform::resolve(resolver, &scope, "RelRot", "RelTrans", true)
            .map_err(param)?;
        let mother = build_primitive(resolver, &scope, mother_kind, MOTHER_SUFFIX).map_err(param)?;
        let daughter =
            build_primitive(resolver, &scope, daughter_kind, DAUGHTER_SUFFIX).map_err(param)?;

        Ok(Self {
            instance: instance.to_string(),
            operation,
            mother,
            daughter,
            transform,
        })
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Step a combinator has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CombinatorState {
    Idle,
    ValidatingInputs,
    BuildingMother,
    BuildingDaughter,
    BuildingTransform,
    Combining,
    Done,
    Error,
}

impl CombinatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            CombinatorState::Idle => "Idle",
            CombinatorState::ValidatingInputs => "ValidatingInputs",
            CombinatorState::BuildingMother => "BuildingMother",
            CombinatorState::BuildingDaughter => "BuildingDaughter",
            CombinatorState::BuildingTransform => "BuildingTransform",
            CombinatorState::Combining => "Combining",
            CombinatorState::Done => "Done",
            CombinatorState::Error => "Error",
        }
    }

    /// Returns true once no further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, CombinatorState::Done | CombinatorState::Error)
    }
}

impl fmt::Display for CombinatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COMBINATOR
// =============================================================================

/// Single-shot builder of one composite solid.
#[derive(Debug)]
pub struct CsgCombinator {
    state: CombinatorState,
}

impl Default for CsgCombinator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsgCombinator {
    pub fn new() -> Self {
        Self {
            state: CombinatorState::Idle,
        }
    }

    pub fn state(&self) -> CombinatorState {
        self.state
    }

    /// Validates `config`, builds both primitives and the transform, and
    /// combines them into a composite named after the instance.
    ///
    /// ## Returns
    ///
    /// The composite solid; ownership passes to the caller. On failure the
    /// combinator ends in `Error` and no solid is produced.
    pub fn execute(&mut self, config: CombinatorConfig) -> Result<CompositeSolid, GeometryError> {
        if self.state != CombinatorState::Idle {
            return Err(GeometryError::InvalidState {
                component: config.instance,
                state: self.state.as_str(),
            });
        }
        let result = self.run(config);
        if result.is_err() {
            self.state = CombinatorState::Error;
        }
        result
    }

    fn run(&mut self, config: CombinatorConfig) -> Result<CompositeSolid, GeometryError> {
        let instance = config.instance.as_str();

        self.transition(instance, CombinatorState::ValidatingInputs);
        validate(&config)?;

        self.transition(instance, CombinatorState::BuildingMother);
        let mother = build_operand(instance, &config.mother, MOTHER_SUFFIX)?;

        self.transition(instance, CombinatorState::BuildingDaughter);
        let daughter = build_operand(instance, &config.daughter, DAUGHTER_SUFFIX)?;

        self.transition(instance, CombinatorState::BuildingTransform);
        let placement = config.transform.placement();

        self.transition(instance, CombinatorState::Combining);
        let solid = BooleanSolid::new(
            instance,
            config.operation.into(),
            mother,
            daughter,
            placement,
        );

        self.transition(instance, CombinatorState::Done);
        tracing::debug!(
            component = %instance,
            operation = %config.operation,
            mother = %config.mother.kind(),
            daughter = %config.daughter.kind(),
            "Composite solid built"
        );
        Ok(CompositeSolid {
            operation: config.operation,
            mother: config.mother,
            daughter: config.daughter,
            transform: config.transform,
            solid,
        })
    }

    fn transition(&mut self, instance: &str, next: CombinatorState) {
        tracing::debug!(component = %instance, from = %self.state, to = %next, "Combinator state");
        self.state = next;
    }
}

fn validate(config: &CombinatorConfig) -> Result<(), GeometryError> {
    if config.instance.is_empty() {
        return Err(GeometryError::invalid_configuration(
            "",
            "name",
            "",
            "a non-empty instance name",
        ));
    }
    let t = &config.transform;
    let fields = [
        ("RelRotX", t.rotation.x),
        ("RelRotY", t.rotation.y),
        ("RelRotZ", t.rotation.z),
        ("RelTransX", t.translation.x),
        ("RelTransY", t.translation.y),
        ("RelTransZ", t.translation.z),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(GeometryError::invalid_configuration(
                &config.instance,
                field,
                value.to_string(),
                "a finite value",
            ));
        }
    }
    Ok(())
}

fn build_operand(
    instance: &str,
    spec: &PrimitiveSpec,
    suffix: &str,
) -> Result<PrimitiveSolid, GeometryError> {
    spec.build_solid(format!("{instance}{suffix}"))
        .map_err(|e| GeometryError::solid(instance, e))
}

// =============================================================================
// COMPOSITE SOLID
// =============================================================================

/// Result of one combinator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeSolid {
    operation: OperationKind,
    mother: PrimitiveSpec,
    daughter: PrimitiveSpec,
    transform: RelativeTransform,
    solid: BooleanSolid,
}

impl CompositeSolid {
    /// Instance name the composite carries.
    pub fn name(&self) -> &str {
        self.solid.name()
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn mother(&self) -> &PrimitiveSpec {
        &self.mother
    }

    pub fn daughter(&self) -> &PrimitiveSpec {
        &self.daughter
    }

    pub fn transform(&self) -> &RelativeTransform {
        &self.transform
    }

    pub fn placement(&self) -> &Placement {
        self.solid.placement()
    }

    pub fn boolean(&self) -> &BooleanSolid {
        &self.solid
    }

    pub fn extent(&self) -> Extent {
        self.solid.extent()
    }

    /// Sampled cubic volume on a `grid³` midpoint grid.
    pub fn estimate_cubic_volume(&self, grid: u32) -> f64 {
        self.solid.estimate_cubic_volume(grid)
    }

    /// Hands the kernel solid over for registration.
    pub fn into_solid(self) -> Solid {
        Solid::Boolean(self.solid)
    }
}
