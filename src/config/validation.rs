use crate::error::AppError;
use std::path::Path;

fn looks_like_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must be a URL or domain name
/// - International innings URL, if set, must be an absolute URL
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_domain: &str,
    innings_url: &Option<String>,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !looks_like_url(api_domain) && !api_domain.contains('.') && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if let Some(url) = innings_url
        && !looks_like_url(url)
    {
        return Err(AppError::config_error(
            "International innings URL must be an absolute http(s) URL",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
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
