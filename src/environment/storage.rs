use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_string_pretty};
use std::path::{Path, PathBuf};

use super::types::SessionUser;

const FORMCONFIG_PATH: &str = "formconfig.json";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title_max_length: usize,
    /// Where to go after a successful submission
    pub listing_path: String,
    /// The listing page that is refreshed after a submission
    pub refresh_page: usize,
    pub page_size: usize,
    /// Lowercase file extensions that count as images
    pub image_extensions: Vec<String>,
    /// Start the app with this user signed in
    pub session: Option<SessionConfig>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title_max_length: 60,
            listing_path: "/posts".to_string(),
            refresh_page: 1,
            page_size: 8,
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp", "bmp"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            session: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "default_ttl")]
    pub ttl_minutes: i64,
}

fn default_ttl() -> i64 {
    60
}

impl SessionConfig {
    pub fn user(&self) -> SessionUser {
        SessionUser::new(self.id.clone(), self.name.clone())
    }
}

impl FormConfig {
    /// Read the config from the platform config folder, falling back to the
    /// defaults if there is none or it can't be parsed.
    pub fn load() -> Self {
        match data_directory() {
            Some(dir) => Self::load_from(&dir.join(FORMCONFIG_PATH)),
            None => Self::default(),
        }
    }

    /// A missing file is created with the defaults so they can be edited.
    /// A broken file is left alone.
    pub fn load_from(path: &Path) -> Self {
        match read(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = Self::default();
                match config.write_to(path) {
                    Ok(()) => log::info!("Wrote default config to {}", path.display()),
                    Err(e) => log::error!("{e}"),
                }
                config
            }
            Err(e) => {
                log::error!("{e}");
                Self::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> Result<Option<Self>, String> {
        read(path)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        write(path, self)
    }
}

fn read<T: DeserializeOwned>(data_path: &Path) -> Result<Option<T>, String> {
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(data_path: &Path, value: &T) -> Result<(), String> {
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Option<PathBuf> {
    use directories_next::ProjectDirs;
    let proj_dirs = ProjectDirs::from("com", "logbook", "logbook")?;
    let dirs = proj_dirs.config_dir().to_path_buf();
    if !dirs.exists() {
        if let Err(e) = std::fs::create_dir_all(&dirs) {
            log::error!("Could not create directory {}: {e:?}", dirs.display());
            return None;
        }
    }
    Some(dirs)
}
