//! Unit systems that ship with dimgen
//!
//! | System | Base units | Root |
//! |---|---|---|
//! | `SI` | meter, kilogram, second, ampere, kelvin, candela, mole | 1 |
//! | `CGS` | centimeter, gram, second | 2 |
//! | `MKS` | meter, kilogram, second | 2 |
//! | `FPS` | foot, pound, second | 2 |
//! | `UCUM` | meter, second, gram, radian, kelvin, coulomb, candela | 1 |
//! | `U` | unit | 1 |
//!
//! In the root-2 systems one whole unit is the exponent 2, so half powers of
//! a base unit are expressible.

use crate::system::UnitSystemDefinition;

/// Names accepted by [`builtin`], in catalog order
pub const BUILTIN_SYSTEMS: &[&str] = &["SI", "CGS", "MKS", "FPS", "UCUM", "U"];

/// Look up a built-in system by name, ignoring case
pub fn builtin(name: &str) -> Option<UnitSystemDefinition> {
    let definition = match name.to_ascii_uppercase().as_str() {
        "SI" => si(),
        "CGS" => cgs(),
        "MKS" => mks(),
        "FPS" => fps(),
        "UCUM" => ucum(),
        "U" => unit(),
        _ => return None,
    };
    Some(definition.with_source("<builtin>"))
}

/// Every built-in system, in catalog order
pub fn all() -> Vec<UnitSystemDefinition> {
    BUILTIN_SYSTEMS
        .iter()
        .copied()
        .filter_map(builtin)
        .collect()
}

pub fn si() -> UnitSystemDefinition {
    UnitSystemDefinition::new("SI")
        .with_units([
            "Meter", "Kilogram", "Second", "Ampere", "Kelvin", "Candela", "Mole",
        ])
        .with_symbols(["m", "kg", "s", "A", "K", "cd", "mol"])
        .with_constants([
            "meter", "kilogram", "second", "ampere", "kelvin", "candela", "mole",
        ])
        .add_extra_constant("MIN", "60.0 * second")
        .add_extra_constant("HR", "60.0 * MIN")
        .add_extra_constant("DAY", "24.0 * HR")
}

pub fn cgs() -> UnitSystemDefinition {
    UnitSystemDefinition::new("CGS")
        .with_units(["Centimeter", "Gram", "Second"])
        .with_symbols(["cm", "g", "s"])
        .with_constants(["centimeter", "gram", "second"])
        .with_allowed_root(2)
}

pub fn mks() -> UnitSystemDefinition {
    UnitSystemDefinition::new("MKS")
        .with_units(["Meter", "Kilogram", "Second"])
        .with_symbols(["m", "kg", "s"])
        .with_constants(["meter", "kilogram", "second"])
        .with_allowed_root(2)
}

pub fn fps() -> UnitSystemDefinition {
    UnitSystemDefinition::new("FPS")
        .with_units(["Foot", "Pound", "Second"])
        .with_symbols(["ft", "lb", "s"])
        .with_constants(["foot", "pound", "second"])
        .with_allowed_root(2)
}

pub fn ucum() -> UnitSystemDefinition {
    UnitSystemDefinition::new("UCUM")
        .with_units([
            "Meter", "Second", "Gram", "Radian", "Kelvin", "Coulomb", "Candela",
        ])
        .with_symbols(["m", "s", "g", "rad", "K", "C", "cd"])
        .with_constants([
            "meter", "second", "gram", "radian", "kelvin", "coulomb", "candela",
        ])
}

/// A single abstract unit, handy for exercising consumers
pub fn unit() -> UnitSystemDefinition {
    UnitSystemDefinition::new("U")
        .with_units(["Unit"])
        .with_symbols(["u"])
        .with_constants(["unit"])
}
