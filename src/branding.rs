//! Header banner: the optional logo asset, or a plain label when it cannot be shown.

use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
/// What the header displays.
pub enum Banner {
    /// Lines of the logo art, as read from the asset.
    Logo(Vec<String>),
    /// Fallback text label.
    Label(String),
}

impl Banner {
    #[must_use]
    /// Load the logo at `path`, degrading to `fallback` if it is absent or unusable.
    pub fn load(path: &Path, fallback: &str) -> Self {
        let label = || Self::Label(fallback.to_string());

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no logo, using label");
                return label();
            }
        };
        let Ok(text) = String::from_utf8(bytes) else {
            tracing::warn!(path = %path.display(), "logo is not text, using label");
            return label();
        };
        if text.trim().is_empty() || text.chars().any(|c| c.is_control() && c != '\n' && c != '\r')
        {
            tracing::warn!(path = %path.display(), "logo is empty or has control characters");
            return label();
        }

        Self::Logo(text.trim_end().lines().map(str::to_string).collect())
    }

    #[must_use]
    /// Rows the banner occupies.
    pub fn height(&self) -> usize {
        match self {
            Self::Logo(lines) => lines.len(),
            Self::Label(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Banner;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_logo_uses_label() {
        let dir = TempDir::new().unwrap();
        let banner = Banner::load(&dir.path().join("logo.txt"), "Cafe Nogales");
        assert_eq!(banner, Banner::Label("Cafe Nogales".to_string()));
        assert_eq!(banner.height(), 1);
    }

    #[test]
    fn test_binary_logo_uses_label() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0xff]).unwrap();

        assert_eq!(
            Banner::load(&path, "Cafe Nogales"),
            Banner::Label("Cafe Nogales".to_string())
        );
    }

    #[test]
    fn test_text_logo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.txt");
        fs::write(&path, " _  _ \n| \\| |\n\n").unwrap();

        let banner = Banner::load(&path, "Cafe Nogales");
        assert_eq!(
            banner,
            Banner::Logo(vec![" _  _ ".to_string(), "| \\| |".to_string()])
        );
        assert_eq!(banner.height(), 2);
    }
}
