use approx::assert_relative_eq;
use csg_params::{ParameterError, ParameterResolver, ParameterScope, ParameterStore, UnitCategory};

const COMPOSITE: &str = r#"
# Composite phantom: box with a cylindrical bore
s:Ge/Phantom/Type          = "LogicalOperatorVolume"
s:Ge/Phantom/Parent        = "World"
s:Ge/Phantom/Material      = "G4_WATER"
s:Ge/Phantom/Operation     = "Subtraction"
s:Ge/Phantom/Type_mother   = "TsBox"
s:Ge/Phantom/Type_daughter = "TsCylinder"

d:Ge/Phantom/RelRotX   = 90 deg
d:Ge/Phantom/RelRotY   = 0 deg
d:Ge/Phantom/RelRotZ   = 0 deg
d:Ge/Phantom/RelTransX = 0 cm
d:Ge/Phantom/RelTransY = 0 cm
d:Ge/Phantom/RelTransZ = 1 cm

d:Ge/Phantom/HLX_mother = 10 cm
d:Ge/Phantom/HLY_mother = 10 cm
d:Ge/Phantom/HLZ_mother = 10 cm

d:Ge/Phantom/RMax_daughter = 2 cm
d:Ge/Phantom/SPhi_daughter = 0 deg
d:Ge/Phantom/DPhi_daughter = 360 deg
d:Ge/Phantom/HL_daughter   = 12 cm
"#;

#[test]
fn resolves_scoped_keys_in_internal_units() {
    let store = ParameterStore::parse(COMPOSITE).unwrap();
    let scope = ParameterScope::new("Phantom");

    assert_eq!(store.get_string(&scope.key("Operation")).unwrap(), "Subtraction");
    assert_relative_eq!(
        store.get_double(&scope.suffixed("HLX", "_mother"), UnitCategory::Length).unwrap(),
        100.0
    );
    assert_relative_eq!(
        store.get_double(&scope.key("RelRotX"), UnitCategory::Angle).unwrap(),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        store.get_double(&scope.key("RelTransZ"), UnitCategory::Length).unwrap(),
        10.0
    );
}

#[test]
fn reports_missing_and_malformed_keys() {
    let store = ParameterStore::parse(COMPOSITE).unwrap();
    let scope = ParameterScope::new("Phantom");

    let missing = store
        .get_double(&scope.suffixed("STheta", "_daughter"), UnitCategory::Angle)
        .unwrap_err();
    assert_eq!(missing, ParameterError::missing("Ge/Phantom/STheta_daughter"));

    let malformed = store
        .get_double(&scope.key("RelTransX"), UnitCategory::Angle)
        .unwrap_err();
    assert!(matches!(malformed, ParameterError::Malformed { .. }));
}

#[test]
fn discovers_children_by_parent_key() {
    let store = ParameterStore::parse(COMPOSITE).unwrap();
    let children: Vec<String> = store
        .parameter_names()
        .into_iter()
        .filter(|key| matches!(ParameterScope::split_key(key), Some((_, "Parent"))))
        .filter(|key| store.get_string(key).map(|p| p == "World").unwrap_or(false))
        .collect();
    assert_eq!(children, vec!["Ge/Phantom/Parent"]);
}

#[test]
fn syntax_errors_report_line_numbers() {
    let source = "s:Ge/A/Type = \"TsBox\"\nd:Ge/A/HLX = ten mm\n";
    match ParameterStore::parse(source).unwrap_err() {
        ParameterError::Syntax { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("ten"));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}
