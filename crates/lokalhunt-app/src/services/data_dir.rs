// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop data directory resolution. On Android the activity's files dir is
// used instead (see `lokalhunt_bridge::android`).

use std::path::{Path, PathBuf};

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> PathBuf {
    let dir = resolve(
        std::env::var_os("XDG_DATA_HOME").as_deref().map(Path::new),
        std::env::var_os("HOME").as_deref().map(Path::new),
    );
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data dir");
    }
    dir
}

fn resolve(xdg_data_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    let base = match (xdg_data_home, home) {
        (Some(xdg), _) => xdg.to_path_buf(),
        (None, Some(home)) => home.join(".local").join("share"),
        // Last resort
        (None, None) => PathBuf::from("/tmp"),
    };
    base.join("lokalhunt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_takes_precedence() {
        assert_eq!(
            resolve(Some(Path::new("/data")), Some(Path::new("/home/u"))),
            PathBuf::from("/data/lokalhunt")
        );
    }

    #[test]
    fn home_fallback() {
        assert_eq!(
            resolve(None, Some(Path::new("/home/u"))),
            PathBuf::from("/home/u/.local/share/lokalhunt")
        );
        assert_eq!(resolve(None, None), PathBuf::from("/tmp/lokalhunt"));
    }
}
