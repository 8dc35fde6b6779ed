use std::env;
use std::path::PathBuf;

pub const SAVE_FOLDER_VAR: &str = "SAVE_FOLDER";
const DEFAULT_SAVE_FOLDER: &str = "job-descriptions";

/// Destination folder for saved postings: CLI override, then `SAVE_FOLDER`
/// from the environment (a `.env` file is loaded at startup), then a local
/// default.
pub fn save_folder(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    env::var(SAVE_FOLDER_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SAVE_FOLDER))
}
