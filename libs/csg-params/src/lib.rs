//! # CSG Params
//!
//! Typed, unit-tagged parameter resolution for geometry components.
//!
//! ## Architecture
//!
//! ```text
//! parameter file → parser (definitions) → ParameterStore → ParameterResolver → components
//! ```
//!
//! Lengths are converted to millimeters and angles to radians when a file is
//! parsed, so every consumer reads internal units.
//!
//! ## Example
//!
//! ```rust
//! use csg_params::{ParameterResolver, ParameterStore, UnitCategory};
//!
//! let store = ParameterStore::parse(r#"
//!     s:Ge/Shape/Operation = "Union"
//!     d:Ge/Shape/HLX_mother = 1 cm
//! "#).unwrap();
//!
//! assert_eq!(store.get_string("Ge/Shape/Operation").unwrap(), "Union");
//! assert_eq!(store.get_double("Ge/Shape/HLX_mother", UnitCategory::Length).unwrap(), 10.0);
//! ```

pub mod error;
pub mod parser;
pub mod resolver;
pub mod scope;
pub mod store;
pub mod unit;
pub mod value;

pub use error::ParameterError;
pub use parser::{parse_parameters, ParameterDefinition};
pub use resolver::ParameterResolver;
pub use scope::ParameterScope;
pub use store::ParameterStore;
pub use unit::{Unit, UnitCategory};
pub use value::ParameterValue;
