//! Asset manifest loading
//!
//! `manifest.json` maps every image and sound key to a file relative to the
//! manifest. All of them are read up front; any missing, unreadable, empty or
//! unknown entry is fatal.
//!
//! The headless build only validates: `main` drops the loaded [`Assets`]
//! after the check. Platform renderers and audio sinks look files up with
//! [`Assets::image`] and [`Assets::sound`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::audio::Sound;
use crate::renderer::Visual;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Manifest file name inside the asset directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Raw bytes of one asset file, decoded later by the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetData {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Every image and sound the game needs, loaded once at startup
#[derive(Debug)]
pub struct Assets {
    images: HashMap<Visual, AssetData>,
    sounds: HashMap<Sound, AssetData>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    version: u32,
    images: HashMap<String, String>,
    sounds: HashMap<String, String>,
}

impl Assets {
    /// Load the manifest in `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_manifest_path(dir.as_ref().join(MANIFEST_FILE))
    }

    pub fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_manifest_with_loader(path, default_loader)
    }

    pub fn image(&self, visual: Visual) -> Option<&AssetData> {
        self.images.get(&visual)
    }

    pub fn sound(&self, sound: Sound) -> Option<&AssetData> {
        self.sounds.get(&sound)
    }

    /// Total number of loaded files
    pub fn len(&self) -> usize {
        self.images.len() + self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn from_manifest_with_loader(
        path: impl AsRef<Path>,
        mut loader: impl FnMut(&Path) -> Result<Vec<u8>>,
    ) -> Result<Self> {
        let manifest_path = path.as_ref();
        let contents = fs::read_to_string(manifest_path).with_context(|| {
            format!("failed to read asset manifest at {}", manifest_path.display())
        })?;
        let base = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let manifest = parse_manifest(&contents)?;

        let images = resolve(manifest.images, &Visual::ALL, Visual::name, &base, "image")?;
        let sounds = resolve(manifest.sounds, &Sound::ALL, Sound::name, &base, "sound")?;

        let mut assets = Self {
            images: HashMap::with_capacity(images.len()),
            sounds: HashMap::with_capacity(sounds.len()),
        };
        for (visual, path) in images {
            let data = load_one(&mut loader, path, visual.name())?;
            assets.images.insert(visual, data);
        }
        for (sound, path) in sounds {
            let data = load_one(&mut loader, path, sound.name())?;
            assets.sounds.insert(sound, data);
        }

        log::info!(
            "Loaded {} assets from {}",
            assets.len(),
            manifest_path.display()
        );
        Ok(assets)
    }
}

fn default_loader(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read asset at {}", path.display()))
}

fn load_one(
    loader: &mut impl FnMut(&Path) -> Result<Vec<u8>>,
    path: PathBuf,
    name: &str,
) -> Result<AssetData> {
    let bytes = loader(&path)
        .with_context(|| format!("failed to load asset `{name}` from {}", path.display()))?;
    if bytes.is_empty() {
        bail!("asset `{name}` at {} is empty", path.display());
    }
    log::debug!("asset `{}`: {} bytes", name, bytes.len());
    Ok(AssetData { path, bytes })
}

fn parse_manifest(contents: &str) -> Result<Manifest> {
    let manifest: Manifest =
        serde_json::from_str(contents).context("failed to parse asset manifest json")?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported asset manifest version {}; expected {}",
            manifest.version,
            SUPPORTED_MANIFEST_VERSION
        );
    }
    Ok(manifest)
}

/// Match manifest entries to the known keys, in key order
fn resolve<K: Copy + std::fmt::Debug>(
    mut entries: HashMap<String, String>,
    keys: &[K],
    name: fn(&K) -> &'static str,
    base: &Path,
    kind: &str,
) -> Result<Vec<(K, PathBuf)>> {
    let mut ordered = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(relative) = entries.remove(name(key)) else {
            bail!("asset manifest missing {kind} entry `{}`", name(key));
        };
        ordered.push((*key, base.join(relative)));
    }

    if !entries.is_empty() {
        let mut unexpected = entries.into_keys().collect::<Vec<_>>();
        unexpected.sort();
        bail!(
            "asset manifest contains unexpected {kind} keys: {}",
            unexpected.join(", ")
        );
    }

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const FULL_MANIFEST: &str = r#"{
        "version": 1,
        "images": {
            "background": "nebula_blue.f2014.png",
            "debris": "debris2_blue.png",
            "ship": "double_ship.png",
            "missile": "shot2.png",
            "rock": "asteroid_blue.png",
            "explosion": "explosion_alpha.png",
            "splash": "splash.png"
        },
        "sounds": {
            "soundtrack": "soundtrack.mp3",
            "missile": "missile.mp3",
            "thrust": "thrust.mp3",
            "explosion": "explosion.mp3"
        }
    }"#;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rice-rocks-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("temp dir created");
        dir
    }

    #[test]
    fn test_loads_every_key_in_order() {
        let dir = temp_dir("order");
        let manifest = dir.join(MANIFEST_FILE);
        fs::write(&manifest, FULL_MANIFEST).expect("manifest written");

        let loaded = RefCell::new(Vec::new());
        let assets = Assets::from_manifest_with_loader(&manifest, |path| {
            loaded.borrow_mut().push(path.to_path_buf());
            Ok(vec![1, 2, 3])
        })
        .expect("assets load");

        assert_eq!(assets.len(), Visual::ALL.len() + Sound::ALL.len());
        assert_eq!(loaded.borrow()[0], dir.join("nebula_blue.f2014.png"));
        for visual in Visual::ALL {
            let image = assets.image(visual).expect("every image is loaded");
            assert_eq!(image.bytes, vec![1, 2, 3]);
        }
        assert_eq!(
            assets.sound(Sound::Thrust).map(|a| a.path.clone()),
            Some(dir.join("thrust.mp3"))
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let manifest = r#"{ "version": 1, "images": {}, "sounds": {} }"#;
        let err = parse_manifest(manifest)
            .and_then(|m| resolve(m.images, &Visual::ALL, Visual::name, Path::new("."), "image"))
            .expect_err("empty manifest must fail");
        assert!(err.to_string().contains("background"));
    }

    #[test]
    fn test_unknown_key_is_fatal() {
        let mut entries: HashMap<String, String> = Sound::ALL
            .iter()
            .map(|s| (s.name().to_string(), format!("{}.mp3", s.name())))
            .collect();
        entries.insert("laser".to_string(), "laser.mp3".to_string());
        let err = resolve(entries, &Sound::ALL, Sound::name, Path::new("."), "sound")
            .expect_err("unknown key must fail");
        assert!(err.to_string().contains("laser"));
    }

    #[test]
    fn test_wrong_version_is_fatal() {
        let manifest = r#"{ "version": 2, "images": {}, "sounds": {} }"#;
        assert!(parse_manifest(manifest).is_err());
    }

    #[test]
    fn test_missing_file_names_the_asset() {
        let dir = temp_dir("missing");
        let manifest = dir.join(MANIFEST_FILE);
        fs::write(&manifest, FULL_MANIFEST).expect("manifest written");

        let err = Assets::from_manifest_path(&manifest).expect_err("no asset files exist");
        let message = format!("{:#}", err);
        assert!(message.contains("background"), "{message}");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = temp_dir("empty");
        let manifest = dir.join(MANIFEST_FILE);
        fs::write(&manifest, FULL_MANIFEST).expect("manifest written");

        let err = Assets::from_manifest_with_loader(&manifest, |_| Ok(Vec::new()))
            .expect_err("empty asset must fail");
        assert!(err.to_string().contains("empty"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_manifest() {
        let err = Assets::from_dir("/definitely/not/here").expect_err("no manifest");
        assert!(err.to_string().contains("manifest"));
    }
}
