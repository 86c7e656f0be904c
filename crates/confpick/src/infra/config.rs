//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::model::CandidateOrder;

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".confpick/config.toml";
const DEFAULT_ROOT: &str = "conf";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: Selector,
}

/// Where candidates live and how they are numbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selector {
    #[serde(default)]
    root: Option<PathBuf>,
    #[serde(default)]
    order: Option<CandidateOrder>,
}

impl Selector {
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    pub fn order(&self) -> CandidateOrder {
        self.order.unwrap_or_default()
    }

    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = Some(root.into());
    }

    pub fn set_order(&mut self, order: CandidateOrder) {
        self.order = Some(order);
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    root: Option<String>,
    order: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            root: env::var("CONFPICK_ROOT").ok(),
            order: env::var("CONFPICK_ORDER").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(root: &str, order: &str) -> Self {
        Self {
            root: Some(root.to_owned()),
            order: Some(order.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            tracing::debug!(path = %global_path.display(), "loading user config");
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            tracing::debug!(path = %workspace_path.display(), "loading workspace config");
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        apply_env_overrides(merged, env_overrides)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            selector: merge_selector(self.selector, other.selector),
        }
    }
}

fn merge_selector(mut base: Selector, overlay: Selector) -> Selector {
    if let Some(root) = overlay.root {
        base.root = Some(root);
    }
    if let Some(order) = overlay.order {
        base.order = Some(order);
    }
    base
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("confpick/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Result<Config> {
    if let Some(root) = env.root.filter(|value| !value.trim().is_empty()) {
        config.selector.set_root(root);
    }
    if let Some(order) = env.order.filter(|value| !value.trim().is_empty()) {
        let order = order
            .parse::<CandidateOrder>()
            .map_err(|err| anyhow!("CONFPICK_ORDER: {err}"))?;
        config.selector.set_order(order);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.selector.root(), PathBuf::from("conf"));
        assert_eq!(config.selector.order(), CandidateOrder::Filesystem);
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[selector]
root = "/srv/agents/conf"
order = "name"
"#,
        )?;

        let workspace_dir = temp.path().join("repo");
        fs::create_dir_all(workspace_dir.join(".confpick"))?;
        fs::create_dir_all(workspace_dir.join(".git"))?;
        fs::write(
            workspace_dir.join(".confpick/config.toml"),
            r#"
[selector]
root = "scenarios"
"#,
        )?;

        let global_path = Some(global);
        let workspace_path = Some(workspace_dir.join(".confpick/config.toml"));

        let config =
            Config::load_with_layers(global_path, workspace_path, EnvOverrides::default())?;

        assert_eq!(config.selector.root(), PathBuf::from("scenarios"));
        assert_eq!(config.selector.order(), CandidateOrder::Name);

        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let overrides = EnvOverrides::for_tests("profiles", "name");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.selector.root(), PathBuf::from("profiles"));
        assert_eq!(config.selector.order(), CandidateOrder::Name);
        Ok(())
    }

    #[test]
    fn blank_env_values_are_ignored() -> Result<()> {
        let overrides = EnvOverrides::for_tests("  ", "");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.selector.root(), PathBuf::from("conf"));
        assert_eq!(config.selector.order(), CandidateOrder::Filesystem);
        Ok(())
    }

    #[test]
    fn unknown_env_order_is_rejected() {
        let overrides = EnvOverrides::for_tests("conf", "shuffled");
        assert!(Config::load_with_layers(None, None, overrides).is_err());
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = Config::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn finds_repo_root_from_nested_dir() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let repo = temp.path().join("repo");
        let nested = repo.join("agents/team");
        fs::create_dir_all(&nested)?;
        fs::create_dir_all(repo.join(".git"))?;

        assert_eq!(find_repo_root(&nested), Some(repo));
        Ok(())
    }
}
