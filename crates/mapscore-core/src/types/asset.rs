//! Asset locators: the file a map id's beatmap lives in.

use std::fmt;
use std::path::Path;

/// Default directory holding one `.osu` file per map.
pub const DEFAULT_ASSET_DIR: &str = "maps";
/// Default asset file extension.
pub const DEFAULT_ASSET_EXTENSION: &str = "osu";

/// Path of the beatmap asset for one map id.
///
/// Always rendered with `/` separators and the unpadded decimal id,
/// e.g. `maps/42.osu`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLocator {
    map_id: i64,
    path: String,
}

impl AssetLocator {
    /// Locator under the default `maps/` directory with the `.osu` extension.
    pub fn for_map(map_id: i64) -> Self {
        Self::under(DEFAULT_ASSET_DIR, DEFAULT_ASSET_EXTENSION, map_id)
    }

    /// Locator under an arbitrary directory and extension.
    pub fn under(dir: &str, extension: &str, map_id: i64) -> Self {
        let dir = dir.trim_end_matches('/');
        let path = if dir.is_empty() {
            format!("{map_id}.{extension}")
        } else {
            format!("{dir}/{map_id}.{extension}")
        };
        Self { map_id, path }
    }

    pub fn map_id(&self) -> i64 {
        self.map_id
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
