use crate::catalog;
use crate::{DimgenError, Generator, GeneratorLimits, GeneratorOptions, UnitSystemDefinition};

fn meter_second() -> UnitSystemDefinition {
    UnitSystemDefinition::new("MS")
        .with_units(["Meter", "Second"])
        .with_symbols(["m", "s"])
        .with_constants(["meter", "second"])
}

fn impl_blocks(source: &str) -> usize {
    source.lines().filter(|line| line.starts_with("impl<")).count()
}

fn position(source: &str, needle: &str) -> usize {
    source
        .find(needle)
        .unwrap_or_else(|| panic!("generated source is missing {:?}", needle))
}

#[test]
fn test_single_unit_system() {
    let definition = UnitSystemDefinition::new("Length")
        .with_units(["Meter"])
        .with_symbols(["m"])
        .with_constants(["meter"]);
    let source = Generator::new().generate(&definition).unwrap();

    assert!(source.contains("pub type Unitless = Length<Zero>;\n"));
    assert!(source.contains("impl Dimensionless for Unitless {}\n"));
    assert!(source.contains("pub type Meter = Length<Succ<Zero>>;\n"));
    assert!(source.contains("pub const one: Dim<Unitless, f64> = Dim(1.0, PhantomData);\n"));
    assert!(source.contains("pub const meter: Dim<Meter, f64> = Dim(1.0, PhantomData);\n"));

    assert!(source.contains("            0 => {}\n"));
    assert!(source.contains("            1 => text.push_str(\"m\"),\n"));
    assert!(source.contains(
        "            n => text.push_str(&format!(\"{}^{}\", \"m\", n as f64 / 1.0)),\n"
    ));
}

#[test]
fn test_two_unit_combination_blocks() {
    let source = Generator::new().generate(&meter_second()).unwrap();

    assert!(source.contains(
        "impl<Meter1, Second1, Meter2, Second2> AddDim<MS<Meter2, Second2>> for MS<Meter1, Second1>\n"
    ));
    assert!(source.contains("    Meter1: Peano + AddPeano<Meter2>,\n"));
    assert!(source.contains("    Second1: Peano + AddPeano<Second2>,\n"));
    assert!(source.contains("    Meter2: Peano,\n"));
    assert!(source.contains("    <Second1 as AddPeano<Second2>>::Output: Peano,\n"));
    assert!(source.contains(
        "    type Output = MS<<Meter1 as AddPeano<Meter2>>::Output, <Second1 as AddPeano<Second2>>::Output>;\n"
    ));

    assert!(source.contains(
        "impl<Meter1, Second1, Meter2, Second2> KeepDim<MS<Meter2, Second2>> for MS<Meter1, Second1>\n"
    ));
    assert!(source.contains(
        "impl<Meter1, Second1, Meter2, Second2> SubDim<MS<Meter2, Second2>> for MS<Meter1, Second1>\n"
    ));
}

#[test]
fn test_two_unit_scalar_blocks() {
    let source = Generator::new().generate(&meter_second()).unwrap();

    assert!(source.contains("impl<Meter, Second, RHS> MulDim<RHS> for MS<Meter, Second>\n"));
    assert!(source.contains("impl<Meter, Second, RHS> DivDim<RHS> for MS<Meter, Second>\n"));
    assert!(source.contains("    Meter: Peano + DivPeano<RHS>,\n"));
    assert!(source.contains("    RHS: Peano,\n"));
    assert!(source.contains(
        "    type Output = MS<<Meter as MulPeano<RHS>>::Output, <Second as MulPeano<RHS>>::Output>;\n"
    ));
}

#[test]
fn test_unit_aliases_place_one_whole_unit() {
    let source = Generator::new().generate(&meter_second()).unwrap();
    assert!(source.contains("pub type Unitless = MS<Zero, Zero>;\n"));
    assert!(source.contains("pub type Meter = MS<Succ<Zero>, Zero>;\n"));
    assert!(source.contains("pub type Second = MS<Zero, Succ<Zero>>;\n"));
}

#[test]
fn test_root_two_system() {
    let definition = UnitSystemDefinition::new("Len")
        .with_units(["Centimeter"])
        .with_symbols(["cm"])
        .with_constants(["centimeter"])
        .with_allowed_root(2);
    let source = Generator::new().generate(&definition).unwrap();

    assert!(source.contains("pub type Centimeter = Len<Succ<Succ<Zero>>>;\n"));
    assert!(source.contains("            2 => text.push_str(\"cm\"),\n"));
    assert!(source.contains("\"cm\", n as f64 / 2.0)),\n"));
}

#[test]
fn test_mismatched_lists_fail() {
    let definition = UnitSystemDefinition::new("Bad")
        .with_units(["Meter", "Kilogram", "Second"])
        .with_symbols(["m", "kg"])
        .with_constants(["meter", "kilogram", "second"]);

    match Generator::new().generate(&definition) {
        Err(DimgenError::Specification(msg)) => {
            assert!(msg.contains("3 units, 2 symbols and 3 constants"), "{}", msg);
        }
        other => panic!("Expected Specification error, got {:?}", other),
    }
}

#[test]
fn test_mismatched_lists_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let definition = UnitSystemDefinition::new("Bad")
        .with_units(["Meter", "Kilogram", "Second"])
        .with_symbols(["m", "kg"])
        .with_constants(["meter", "kilogram", "second"]);

    let result = Generator::new().generate_to_dir(&definition, dir.path());
    assert!(result.is_err());
    assert!(!dir.path().join("bad.rs").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generation_is_deterministic() {
    let generator = Generator::new();
    for definition in catalog::all() {
        let first = generator.generate(&definition).unwrap();
        let second = generator.generate(&definition).unwrap();
        assert_eq!(first, second, "{} differs between runs", definition.name);
    }
}

#[test]
fn test_block_count_independent_of_arity() {
    for arity in [1usize, 3, 7] {
        let units: Vec<String> = (0..arity).map(|i| format!("Unit{}", i)).collect();
        let symbols: Vec<String> = (0..arity).map(|i| format!("u{}", i)).collect();
        let constants: Vec<String> = (0..arity).map(|i| format!("unit{}", i)).collect();
        let definition = UnitSystemDefinition::new("Wide")
            .with_units(units)
            .with_symbols(symbols)
            .with_constants(constants);

        let source = Generator::new().generate(&definition).unwrap();
        // Dimension marker, three combination, two scalar, one formatter
        assert_eq!(impl_blocks(&source), 7, "arity {}", arity);
        assert_eq!(source.matches("KeepDim<").count(), 1);
        assert_eq!(source.matches("MulDim<").count(), 1);
        assert_eq!(source.matches("pub const ").count(), arity + 1);
        assert_eq!(source.matches("pub type ").count(), arity + 1);
    }
}

#[test]
fn test_sections_in_order() {
    let source = Generator::new().generate(&catalog::si()).unwrap();

    let order = [
        "// This file was generated by dimgen from the `SI` unit system. Do not edit.",
        "#![allow(non_snake_case)]",
        "pub struct SI<",
        "KeepDim<",
        "AddDim<",
        "SubDim<",
        "MulDim<",
        "DivDim<",
        "DimToString for",
        "pub type Unitless",
        "pub type Meter",
        "pub const one",
        "pub const meter",
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(&source, needle)).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(source.starts_with("// This file was generated by dimgen"));
}

#[test]
fn test_header_markers_named_by_constants() {
    let source = Generator::new().generate(&meter_second()).unwrap();
    assert!(source.contains("pub struct MS<Meter: Peano, Second: Peano> {\n"));
    assert!(source.contains("    meter: PhantomData<Meter>,\n"));
    assert!(source.contains("    second: PhantomData<Second>,\n"));
    assert!(source.contains("impl<Meter: Peano, Second: Peano> Dimension for MS<Meter, Second> {}\n"));
    assert!(source.contains("use dimensioned::{AddDim, "));
}

#[test]
fn test_custom_scalar_and_unitless_constant() {
    let definition = meter_second()
        .with_scalar("f32", "1.0f32")
        .with_unitless_constant("ONE");
    let source = Generator::new().generate(&definition).unwrap();
    assert!(source.contains("pub const ONE: Dim<Unitless, f32> = Dim(1.0f32, PhantomData);\n"));
    assert!(source.contains("pub const second: Dim<Second, f32> = Dim(1.0f32, PhantomData);\n"));
}

#[test]
fn test_options_change_runtime_path_and_docs() {
    let options = GeneratorOptions {
        runtime_crate: "crate::runtime".to_string(),
        emit_unit_table: true,
    };
    let source = Generator::with_options(options)
        .generate(&meter_second())
        .unwrap();

    assert!(source.contains("use crate::runtime::{AddDim, "));
    assert!(source.contains("//! Constant | Unit | Print Token\n"));
    assert!(source.contains("//! one | Unitless | -\n"));
    assert!(source.contains("//! meter | Meter | m\n"));
    assert!(source.starts_with("// This file was generated by dimgen"));
}

#[test]
fn test_extra_constants_are_not_emitted() {
    let source = Generator::new().generate(&catalog::si()).unwrap();
    assert!(!source.contains("MIN"));
    assert!(!source.contains("60.0"));
}

#[test]
fn test_write_to_output_target() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::new();

    let path = generator
        .generate_to_dir(&meter_second(), dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("ms.rs"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, generator.generate(&meter_second()).unwrap());
}

#[test]
fn test_write_creates_nested_output() {
    let dir = tempfile::tempdir().unwrap();
    let definition = meter_second().with_output("units/generated/ms_units.rs");

    let path = Generator::new()
        .generate_to_dir(&definition, dir.path())
        .unwrap();
    assert!(path.ends_with("units/generated/ms_units.rs"));
    assert!(path.exists());
}

#[test]
fn test_base_unit_limit() {
    let limits = GeneratorLimits {
        max_base_units: 2,
        ..GeneratorLimits::default()
    };
    let generator = Generator::new().with_limits(limits);

    assert!(generator.generate(&meter_second()).is_ok());
    match generator.generate(&catalog::si()) {
        Err(DimgenError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_base_units");
        }
        other => panic!("Expected ResourceLimitExceeded error, got {:?}", other),
    }
}
