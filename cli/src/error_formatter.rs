use ariadne::{Color, Label, Report, ReportKind, Source};
use dimgen::catalog::BUILTIN_SYSTEMS;
use dimgen::DimgenError;

/// Format a DimgenError with fancy terminal output using Ariadne
pub fn format_error(error: &DimgenError) -> String {
    match error {
        DimgenError::Parse(details) => {
            let mut output = Vec::new();

            let message = format!(
                "Parse error: {} (at {}:{})",
                details.message, details.source_id, details.span
            );

            let mut report = Report::build(ReportKind::Error, &details.source_id, details.span.start)
                .with_message(message)
                .with_label(
                    Label::new((&details.source_id, details.span.start..details.span.end))
                        .with_message("")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        DimgenError::Specification(msg) => format!("Specification error: {}", msg),
        DimgenError::Dimension(err) => format!("Dimension error: {}", err),
        DimgenError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        DimgenError::Io { path, message } => format!("I/O error on {}: {}", path, message),
        DimgenError::UnknownSystem(name) => format!(
            "Unknown unit system: {}\n  Built-in systems: {}",
            name,
            BUILTIN_SYSTEMS.join(", ")
        ),
        DimgenError::MultipleErrors(errors) => {
            let mut result = String::from("Multiple errors occurred:\n\n");
            for error in errors {
                result.push_str(&format_error(error));
                result.push_str("\n\n");
            }
            result
        }
    }
}
