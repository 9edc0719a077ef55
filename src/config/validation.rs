use std::path::Path;

use crate::error::AppError;

/// Validates the configuration settings
///
/// # Arguments
/// * `contacts_file` - Optional default contacts JSON file to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - If a contacts file is configured, it cannot be empty and must
///   have a `.json` extension
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    contacts_file: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(contacts_path) = contacts_file {
        if contacts_path.is_empty() {
            return Err(AppError::config_error("Contacts file path cannot be empty"));
        }

        let is_json = Path::new(contacts_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(AppError::config_error(
                "Contacts file must be a .json file",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
