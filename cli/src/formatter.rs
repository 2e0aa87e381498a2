use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use dimgen::{DimensionVector, UnitSystemDefinition, UnitSystemSpec};
use std::path::PathBuf;

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_generated(&self, written: &[(String, PathBuf)]) -> String {
        let mut output = String::new();
        for (system, path) in written {
            output.push_str(&format!("Generated {} -> {}\n", system, path.display()));
        }
        output
    }

    pub fn format_workspace_summary(
        &self,
        file_count: usize,
        systems: &[UnitSystemDefinition],
        builtins: &[UnitSystemDefinition],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Workspace contains {} files, {} unit systems\n\n",
            file_count,
            systems.len()
        ));

        if !systems.is_empty() {
            output.push_str(&self.format_systems_table(systems));
            output.push_str("\n\n");
        }

        output.push_str("Built-in systems:\n");
        output.push_str(&self.format_systems_table(builtins));
        output.push('\n');
        output
    }

    fn format_systems_table(&self, systems: &[UnitSystemDefinition]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("System").set_alignment(CellAlignment::Left),
            Cell::new("Base units").set_alignment(CellAlignment::Right),
            Cell::new("Root").set_alignment(CellAlignment::Right),
            Cell::new("Output").set_alignment(CellAlignment::Left),
            Cell::new("Source").set_alignment(CellAlignment::Left),
        ]));

        for system in systems {
            table.add_row(Row::from(vec![
                Cell::new(&system.name),
                Cell::new(system.units.len()).set_alignment(CellAlignment::Right),
                Cell::new(system.allowed_root).set_alignment(CellAlignment::Right),
                Cell::new(system.output_target()),
                Cell::new(system.source.as_deref().unwrap_or("-")),
            ]));
        }

        table.to_string()
    }

    /// Base units side by side. A definition whose lists disagree in length
    /// shows `?` where an entry is missing.
    pub fn format_system(&self, system: &UnitSystemDefinition) -> String {
        let mut output = String::new();
        output.push_str(&format!("System: {}\n", system.name));
        output.push_str(&format!("Output: {}\n", system.output_target()));
        output.push_str(&format!(
            "Scalar: {} = {}\n",
            system.scalar_type, system.identity_literal
        ));
        output.push_str(&format!("Root: {}\n\n", system.allowed_root));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["#", "Unit", "Symbol", "Constant"]));

        table.add_row(Row::from(vec![
            "-",
            dimgen::system::UNITLESS_ALIAS,
            "",
            system.unitless_constant.as_str(),
        ]));

        let rows = system
            .units
            .len()
            .max(system.symbols.len())
            .max(system.constants.len());
        for i in 0..rows {
            let entry = |list: &[String]| list.get(i).cloned().unwrap_or_else(|| "?".to_string());
            table.add_row(Row::from(vec![
                (i + 1).to_string(),
                entry(&system.units),
                entry(&system.symbols),
                entry(&system.constants),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        if !system.extra_constants.is_empty() {
            output.push_str(&format!(
                "\nextra constants ({}):\n",
                system.extra_constants.len()
            ));
            for extra in &system.extra_constants {
                output.push_str(&format!("  - {} = {}\n", extra.name, extra.expression));
            }
        }

        output
    }

    pub fn format_dimension(
        &self,
        spec: &UnitSystemSpec,
        expression: &str,
        dimension: &DimensionVector,
        display: &str,
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}: {}\n", spec.system_name(), expression));
        output.push_str(&format!("  vector:  {}\n", dimension));
        if dimension.is_dimensionless() {
            output.push_str("  display: (dimensionless)\n");
        } else {
            output.push_str(&format!("  display: {}\n", display));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimgen::catalog;

    #[test]
    fn test_generated_lines() {
        let formatter = Formatter::new();
        let output = formatter.format_generated(&[
            ("SI".to_string(), PathBuf::from("out/si.rs")),
            ("CGS".to_string(), PathBuf::from("out/cgs.rs")),
        ]);
        assert_eq!(output, "Generated SI -> out/si.rs\nGenerated CGS -> out/cgs.rs\n");
    }

    #[test]
    fn test_system_table_lists_units_in_order() {
        let formatter = Formatter::new();
        let output = formatter.format_system(&catalog::si());

        assert!(output.starts_with("System: SI\n"));
        assert!(output.contains("Root: 1"));
        assert!(output.contains("Unitless"));
        let meter = output.find("Meter").unwrap();
        let kilogram = output.find("Kilogram").unwrap();
        assert!(meter < kilogram);
        assert!(output.contains("extra constants (3):"));
        assert!(output.contains("  - HR = 60.0 * MIN\n"));
    }

    #[test]
    fn test_system_table_marks_missing_entries() {
        let formatter = Formatter::new();
        let definition = UnitSystemDefinition::new("Bad")
            .with_units(["Meter", "Second"])
            .with_symbols(["m"])
            .with_constants(["meter", "second"]);
        let output = formatter.format_system(&definition);
        assert!(output.contains('?'));
    }

    #[test]
    fn test_workspace_summary_includes_builtins() {
        let formatter = Formatter::new();
        let output = formatter.format_workspace_summary(0, &[], &catalog::all());
        assert!(output.starts_with("Workspace contains 0 files, 0 unit systems\n"));
        assert!(output.contains("Built-in systems:"));
        assert!(output.contains("UCUM"));
        assert!(output.contains("<builtin>"));
    }

    #[test]
    fn test_dimensionless_display() {
        let formatter = Formatter::new();
        let spec = dimgen::Generator::new().validate(&catalog::unit()).unwrap();
        let output = formatter.format_dimension(&spec, "1", &spec.dimensionless(), "");
        assert_eq!(output, "U: 1\n  vector:  [0]\n  display: (dimensionless)\n");
    }
}
