use std::io;
use std::path::{Path, PathBuf};

/// Logos wider than this are downscaled (height follows the aspect ratio)
pub const MAX_WIDTH: u32 = 500;

/// Where the converter reads and writes logo files, and how big they may get
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding both the original logos and the converted PNGs
    asset_dir: PathBuf,
    /// Maximum output width in pixels
    max_width: u32,
}

impl Config {
    /// Build a config for the given asset directory with the default width limit
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            max_width: MAX_WIDTH,
        }
    }

    /// The converter runs from inside the brand-logo folder
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Resolve a filename from the mapping table against the asset directory
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.asset_dir.join(filename)
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_width() {
        let config = Config::new("/srv/site/public/brands");
        assert_eq!(config.max_width(), 500);
        assert_eq!(config.asset_dir(), Path::new("/srv/site/public/brands"));
    }

    #[test]
    fn test_resolve_joins_filename() {
        let config = Config::new("/srv/brands");
        assert_eq!(
            config.resolve("La Roche-Posay.png"),
            PathBuf::from("/srv/brands/La Roche-Posay.png")
        );
    }
}
