use super::{dimension_type, join, unit_params, EXPONENT_BOUND};
use crate::generator::GeneratorOptions;
use crate::system::{UnitSystemSpec, UNITLESS_ALIAS};
use std::fmt::{self, Write};

/// Consumer items the generated file refers to
const RUNTIME_IMPORTS: &[&str] = &[
    "AddDim",
    "AddPeano",
    "Dim",
    "DimToString",
    "Dimension",
    "Dimensionless",
    "DivDim",
    "DivPeano",
    "KeepDim",
    "KeepPeano",
    "MulDim",
    "MulPeano",
    "Peano",
    "Pred",
    "SubDim",
    "SubPeano",
    "Succ",
    "ToInt",
    "Zero",
];

/// Provenance comment, optional unit table, lint suppression, imports and
/// the dimension type with one zero-sized marker per base unit.
pub fn emit(spec: &UnitSystemSpec, options: &GeneratorOptions, out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "// This file was generated by dimgen from the `{}` unit system. Do not edit.",
        spec.system_name()
    )?;

    if options.emit_unit_table {
        emit_unit_table(spec, out)?;
    }

    writeln!(out, "#![allow(non_snake_case)]")?;
    writeln!(out, "#![allow(non_upper_case_globals)]")?;
    writeln!(out, "#![allow(dead_code)]")?;
    writeln!(out, "#![allow(unused_imports)]")?;
    writeln!(out)?;
    writeln!(out, "use {}::{{{}}};", options.runtime_crate, join(RUNTIME_IMPORTS))?;
    writeln!(out, "use std::marker::PhantomData;")?;
    writeln!(out)?;

    let params = unit_params(spec);
    let bounded: Vec<String> = params
        .iter()
        .map(|param| format!("{}: {}", param, EXPONENT_BOUND))
        .collect();

    writeln!(
        out,
        "/// Dimension in the {} unit system: one type-level exponent per base unit.",
        spec.system_name()
    )?;
    writeln!(out, "#[derive(Copy, Clone)]")?;
    writeln!(out, "pub struct {}<{}> {{", spec.system_name(), join(&bounded))?;
    for unit in spec.base_units() {
        writeln!(out, "    {}: PhantomData<{}>,", unit.constant, unit.identifier)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "impl<{}> Dimension for {} {{}}",
        join(&bounded),
        dimension_type(spec, &params)
    )?;
    writeln!(out)
}

fn emit_unit_table(spec: &UnitSystemSpec, out: &mut String) -> fmt::Result {
    writeln!(out, "//! Base units of the {} unit system.", spec.system_name())?;
    writeln!(out, "//!")?;
    writeln!(out, "//! Constant | Unit | Print Token")?;
    writeln!(out, "//! ---|---|---")?;
    writeln!(out, "//! {} | {} | -", spec.unitless_constant(), UNITLESS_ALIAS)?;
    for unit in spec.base_units() {
        writeln!(out, "//! {} | {} | {}", unit.constant, unit.identifier, unit.symbol)?;
    }
    writeln!(out)
}
