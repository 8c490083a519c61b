use std::path::Path;

use sysaudit::AuditError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_audit_error(err: &AuditError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        AuditError::DefinitionsNotFound { path } => ErrorBlock::new("check definitions not found")
            .with_file(path)
            .with_fix("Create the file or pass another one with --checks <file>."),
        AuditError::UnsupportedFormat { file, .. } => ErrorBlock::new(err.to_string())
            .with_file(file)
            .with_fix("Use a .json or .toml definition file."),
        AuditError::MissingField { field, file, .. } => ErrorBlock::new(err.to_string())
            .with_file(file)
            .with_fix(format!("Add '{field}' to the entry.")),
        AuditError::InvalidValue { field, file, .. } if field.ends_with("type") => {
            ErrorBlock::new(err.to_string())
                .with_file(file)
                .with_fix("Use \"exact match\" or \"regex match\".")
        }
        AuditError::InvalidValue { field, file, .. } if field == "confidence" => {
            ErrorBlock::new(err.to_string())
                .with_file(file)
                .with_fix("Use \"required\", \"recommended\" or \"experimental\".")
        }
        AuditError::InvalidSettings { file, .. } => ErrorBlock::new(err.to_string())
            .with_file(file)
            .with_fix("Fix the TOML syntax or pass another file with --settings <file>."),
        other => {
            let block = ErrorBlock::new(other.to_string());
            match error_file(other) {
                Some(file) => block.with_file(file),
                None => block,
            }
        }
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(audit) = err.downcast_ref::<AuditError>() {
        return format_audit_error(audit, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "file": err
                .downcast_ref::<AuditError>()
                .and_then(error_file)
                .map(|p| p.display().to_string()),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}

fn error_file(err: &AuditError) -> Option<&Path> {
    match err {
        AuditError::Io(_) => None,
        AuditError::DefinitionsNotFound { path } => Some(path.as_path()),
        AuditError::UnsupportedFormat { file, .. }
        | AuditError::Malformed { file, .. }
        | AuditError::MissingField { file, .. }
        | AuditError::InvalidValue { file, .. }
        | AuditError::InvalidCheck { file, .. }
        | AuditError::InvalidSettings { file, .. } => Some(file.as_path()),
    }
}
