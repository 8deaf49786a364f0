use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_dev_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_dev_port() -> u16 {
    3000
}

pub(crate) fn default_lint_config_file() -> PathBuf {
    PathBuf::from(".stylelintrc")
}

pub(crate) fn default_lint_files() -> Vec<String> {
    vec!["**/*.css".to_string()]
}

