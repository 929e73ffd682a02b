use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use snap_config::Config;

/// Per-user config root, e.g. `~/.config/SentenSnap` on Linux
fn snap_root() -> anyhow::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("SentenSnap"))
        .context("No user config directory on this platform")
}

pub fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(snap_root()?.join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<PathBuf> {
    init_user_config_in(&profiles_dir()?)
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    load_user_profile_in(&profiles_dir()?, name)
}

/// Add a new profile cloned from main (or environment defaults if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    add_profile_from_default_in(&profiles_dir()?, new_name)
}

pub(crate) fn init_user_config_in(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let main_profile = dir.join("main.json");

    if !main_profile.exists() {
        // Seed from the environment so an exported GEMINI_API_KEY is kept
        write_profile(&main_profile, "main", Config::new())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

pub(crate) fn load_user_profile_in(dir: &Path, name: &str) -> anyhow::Result<Config> {
    validate_name(name)?;
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        // First run, nothing on disk yet
        Ok(Config::new())
    }
}

pub(crate) fn add_profile_from_default_in(dir: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    validate_name(new_name)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let file = dir.join(format!("{new_name}.json"));
    if file.exists() {
        anyhow::bail!("Profile {new_name} already exists at {}", file.display());
    }

    let default_config = load_user_profile_in(dir, "main")?;
    write_profile(&file, new_name, default_config)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, value: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write profile {}", path.display()))?;
    Ok(())
}

fn validate_name(name: &str) -> anyhow::Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        anyhow::bail!("Profile names may only use letters, digits, '-' and '_': {name:?}");
    }
    Ok(())
}
