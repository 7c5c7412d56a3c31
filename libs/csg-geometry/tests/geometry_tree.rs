//! Building whole volume trees from parameter files.

use approx::assert_relative_eq;
use csg_geometry::{GeometryBuilder, GeometryError};
use csg_params::ParameterStore;
use csg_solid::{Containment, Shape};
use glam::DVec3;

const TREE: &str = r#"
# World
s:Ge/World/Type     = "TsBox"
s:Ge/World/Material = "G4_AIR"
d:Ge/World/HLX      = 1 m
d:Ge/World/HLY      = 1 m
d:Ge/World/HLZ      = 1 m

# Hollow box
s:Ge/Phantom/Type          = "LogicalOperatorVolume"
s:Ge/Phantom/Parent        = "World"
s:Ge/Phantom/Material      = "G4_WATER"
d:Ge/Phantom/TransZ        = 20 cm
s:Ge/Phantom/Operation     = "Subtraction"
s:Ge/Phantom/Type_mother   = "TsBox"
s:Ge/Phantom/Type_daughter = "TsSphere"
d:Ge/Phantom/HLX_mother    = 10 cm
d:Ge/Phantom/HLY_mother    = 10 cm
d:Ge/Phantom/HLZ_mother    = 10 cm
d:Ge/Phantom/RMax_daughter   = 5 cm
d:Ge/Phantom/SPhi_daughter   = 0 deg
d:Ge/Phantom/DPhi_daughter   = 360 deg
d:Ge/Phantom/STheta_daughter = 0 deg
d:Ge/Phantom/DTheta_daughter = 180 deg
d:Ge/Phantom/RelRotX   = 0 deg
d:Ge/Phantom/RelRotY   = 0 deg
d:Ge/Phantom/RelRotZ   = 0 deg
d:Ge/Phantom/RelTransX = 0 mm
d:Ge/Phantom/RelTransY = 0 mm
d:Ge/Phantom/RelTransZ = 0 mm

# Detector inside the hollow box wall
s:Ge/Detector/Type     = "TsCylinder"
s:Ge/Detector/Parent   = "Phantom"
s:Ge/Detector/Material = "G4_Si"
d:Ge/Detector/TransX   = 8 cm
d:Ge/Detector/RMax     = 5 mm
d:Ge/Detector/HL       = 1 cm
d:Ge/Detector/SPhi     = 0 deg
d:Ge/Detector/DPhi     = 360 deg

# Second top-level volume, sorted before Phantom
s:Ge/Collimator/Type     = "Box"
s:Ge/Collimator/Parent   = "World"
s:Ge/Collimator/Material = "G4_Pb"
d:Ge/Collimator/TransZ   = -50 cm
d:Ge/Collimator/HLX      = 20 cm
d:Ge/Collimator/HLY      = 20 cm
d:Ge/Collimator/HLZ      = 1 cm
"#;

fn tree() -> ParameterStore {
    ParameterStore::parse(TREE).unwrap()
}

#[test]
fn builds_full_tree() {
    let store = GeometryBuilder::new().build(&tree()).unwrap();
    assert_eq!(store.physical_count(), 4);
    assert_eq!(store.solid_count(), 4);

    let world = store.find_physical("World").unwrap();
    let phantom = store.find_physical("Phantom").unwrap();
    let detector = store.find_physical("Detector").unwrap();
    let collimator = store.find_physical("Collimator").unwrap();

    assert_eq!(store.physical(world).unwrap().parent, None);
    assert_eq!(store.children(world), vec![collimator, phantom]);
    assert_eq!(store.children(phantom), vec![detector]);

    let placed = store.physical(phantom).unwrap();
    assert_eq!(placed.placement.translation(), DVec3::new(0.0, 0.0, 200.0));
    assert_eq!(store.logical(placed.logical).unwrap().material, "G4_WATER");
}

#[test]
fn composite_is_registered_under_instance_name() {
    let store = GeometryBuilder::new().build(&tree()).unwrap();
    let phantom = store.find_physical("Phantom").unwrap();
    let solid = store.solid_of(phantom).unwrap();

    assert!(solid.is_boolean());
    assert_eq!(solid.name(), "Phantom");
    assert_eq!(solid.inside(DVec3::ZERO), Containment::Outside);
    assert_eq!(solid.inside(DVec3::new(80.0, 0.0, 0.0)), Containment::Inside);
    assert_eq!(solid.extent().max, DVec3::splat(100.0));

    let expected = 200.0_f64.powi(3) - 4.0 / 3.0 * std::f64::consts::PI * 50.0_f64.powi(3);
    assert_relative_eq!(solid.cubic_volume(), expected, max_relative = 0.01);
}

#[test]
fn bad_child_aborts_pass() {
    let mut params = tree();
    params.set_string("Ge/Phantom/Operation", "Xor");
    let err = GeometryBuilder::new().build(&params).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err.component(), Some("Phantom"));
}

#[test]
fn unknown_parent_is_rejected() {
    let mut params = tree();
    params.set_string("Ge/Detector/Parent", "Gantry");
    let err = GeometryBuilder::new().build(&params).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::UnknownParent { ref component, ref parent }
            if component == "Detector" && parent == "Gantry"
    ));
}

#[test]
fn root_with_parent_is_rejected() {
    let mut params = tree();
    params.set_string("Ge/World/Parent", "Phantom");
    let err = GeometryBuilder::new().build(&params).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::InvalidConfiguration { ref field, .. } if field == "Parent"
    ));
}

#[test]
fn parent_cycle_is_rejected() {
    let mut params = tree();
    params
        .set_string("Ge/Loop/Type", "TsBox")
        .set_string("Ge/Loop/Parent", "Detector2")
        .set_string("Ge/Detector2/Type", "TsBox")
        .set_string("Ge/Detector2/Parent", "Loop");
    let err = GeometryBuilder::new().build(&params).unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn invalid_dimension_is_construction_error() {
    let mut params = tree();
    params.set_double("Ge/Detector/RMax", -1.0, csg_params::Unit::Millimeter);
    let err = GeometryBuilder::new().build(&params).unwrap_err();
    assert!(!err.is_configuration_error());
    assert!(matches!(err, GeometryError::Solid { .. }));
}

#[test]
fn rebuild_reflects_updated_parameters() {
    let mut params = tree();
    let first = GeometryBuilder::new().build(&params).unwrap();

    params.set_string("Ge/Phantom/Operation", "Intersection");
    let second = GeometryBuilder::new().build(&params).unwrap();

    let inside = |store: &csg_geometry::VolumeStore| {
        let phantom = store.find_physical("Phantom").unwrap();
        store.solid_of(phantom).unwrap().inside(DVec3::ZERO)
    };
    assert_eq!(inside(&first), Containment::Outside);
    assert_eq!(inside(&second), Containment::Inside);
}
