//! # CSG Geometry
//!
//! Geometry components that turn resolved parameters into registered,
//! placed volumes.
//!
//! ## Architecture
//!
//! ```text
//! ParameterResolver → CombinatorConfig ─→ CsgCombinator ─→ CompositeSolid
//!                      ├ PrimitiveSpec ×2   (build_primitive)
//!                      └ RelativeTransform  (build_transform)
//!
//! GeometryBuilder → GeometryComponent::construct → ConstructionContext
//!                                                  ├ register_volume → VolumeStore
//!                                                  └ instantiate_children
//! ```
//!
//! ## Example
//!
//! ```rust
//! use csg_geometry::GeometryBuilder;
//! use csg_params::ParameterStore;
//!
//! let store = ParameterStore::parse(r#"
//!     s:Ge/World/Type     = "TsBox"
//!     s:Ge/World/Material = "G4_AIR"
//!     d:Ge/World/HLX      = 1 m
//!     d:Ge/World/HLY      = 1 m
//!     d:Ge/World/HLZ      = 1 m
//! "#).unwrap();
//!
//! let volumes = GeometryBuilder::new().build(&store).unwrap();
//! assert_eq!(volumes.physical_count(), 1);
//! ```

pub mod builder;
pub mod combinator;
pub mod component;
pub mod context;
pub mod error;
pub mod kind;
pub mod primitive;
pub mod registry;
pub mod transform;

pub use builder::GeometryBuilder;
pub use combinator::{CombinatorConfig, CombinatorState, CompositeSolid, CsgCombinator};
pub use component::{create_component, GeometryComponent, LogicalOperatorVolume, PrimitiveVolume};
pub use context::ConstructionContext;
pub use error::GeometryError;
pub use kind::{OperationKind, ShapeKind};
pub use primitive::{build_primitive, PrimitiveSpec};
pub use registry::{
    LogicalVolume, LogicalVolumeHandle, PhysicalVolume, PhysicalVolumeHandle, SolidHandle,
    VolumeStore,
};
pub use transform::{build_transform, RelativeTransform};
