use super::{dimension_type, join, unit_params, EXPONENT_BOUND};
use crate::system::UnitSystemSpec;
use std::fmt::{self, Write};

/// `DimToString`, matching [`crate::format::format_exponent`] position by
/// position.
pub fn emit(spec: &UnitSystemSpec, out: &mut String) -> fmt::Result {
    let params = unit_params(spec);
    let root = spec.allowed_root();

    writeln!(
        out,
        "impl<{}> DimToString for {}",
        join(&params),
        dimension_type(spec, &params)
    )?;
    writeln!(out, "where")?;
    for param in &params {
        writeln!(out, "    {}: {} + ToInt,", param, EXPONENT_BOUND)?;
    }
    writeln!(out, "{{")?;
    writeln!(out, "    fn to_string() -> String {{")?;
    writeln!(out, "        let mut text = String::new();")?;
    for unit in spec.base_units() {
        writeln!(out, "        match <{} as ToInt>::to_int() {{", unit.identifier)?;
        writeln!(out, "            0 => {{}}")?;
        writeln!(out, "            {} => text.push_str({:?}),", root, unit.symbol)?;
        writeln!(
            out,
            "            n => text.push_str(&format!(\"{{}}^{{}}\", {:?}, n as f64 / {}.0)),",
            unit.symbol, root
        )?;
        writeln!(out, "        }}")?;
    }
    writeln!(out, "        text")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}
