// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use axum::body::Body;
use axum::extract::Path as UrlPath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::cmd::serve::state::ServerState;

/// Errors that can occur when validating an asset path.
#[derive(Debug, PartialEq)]
pub enum AssetPathError {
    /// Path is the empty string.
    Empty,
    /// Path is a symbolic link.
    Symlink,
    /// Path contains ".." or is absolute.
    InvalidPath,
    /// File does not exist or cannot be accessed.
    NotFound,
    /// Path resolves outside the asset directory.
    OutsideDirectory,
}

/// Validates a requested path and returns a canonicalized path that is
/// guaranteed to be within the asset directory.
pub fn validate_asset_path(base_dir: &Path, user_path: &str) -> Result<PathBuf, AssetPathError> {
    if user_path.trim().is_empty() {
        return Err(AssetPathError::Empty);
    }

    let requested_path = PathBuf::from(user_path);
    if user_path.contains("..") || requested_path.is_absolute() {
        return Err(AssetPathError::InvalidPath);
    }

    let full_path = base_dir.join(&requested_path);
    if full_path.is_symlink() {
        return Err(AssetPathError::Symlink);
    }

    let canonical_full = full_path
        .canonicalize()
        .map_err(|_| AssetPathError::NotFound)?;
    let canonical_dir = base_dir
        .canonicalize()
        .map_err(|_| AssetPathError::NotFound)?;

    // Should be caught by the symlink check, but nevertheless.
    if !canonical_full.starts_with(&canonical_dir) {
        return Err(AssetPathError::OutsideDirectory);
    }
    if !canonical_full.is_file() {
        return Err(AssetPathError::NotFound);
    }

    Ok(canonical_full)
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub async fn asset_handler(
    State(state): State<ServerState>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    let Some(dir) = &state.asset_dir else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let full_path = match validate_asset_path(dir, &path) {
        Ok(p) => p,
        Err(e) => {
            log::debug!("Rejected asset path {path:?}: {e:?}");
            return (StatusCode::NOT_FOUND, "Not Found").into_response();
        }
    };
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, content_type(&full_path)),
                (CACHE_CONTROL, "public, max-age=3600"),
            ],
            Body::from(bytes),
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to read asset {}: {e}", full_path.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::fs::create_dir;
    use std::os::unix::fs::symlink;

    use super::*;
    use crate::error::Fallible;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_validate_asset_path_valid() -> Fallible<()> {
        let dir: PathBuf = create_tmp_directory()?;
        let audio = dir.join("flip.mp3");
        File::create(&audio)?;

        let result = validate_asset_path(&dir, "flip.mp3");
        assert_eq!(result, Ok(audio.canonicalize()?));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_in_subdirectory() -> Fallible<()> {
        let dir: PathBuf = create_tmp_directory()?;
        let sub_dir: PathBuf = dir.join("images");
        create_dir(&sub_dir)?;
        let image_path = sub_dir.join("paris.jpg");
        File::create(&image_path)?;

        let result = validate_asset_path(&dir, "images/paris.jpg");
        assert_eq!(result, Ok(image_path.canonicalize()?));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_not_found() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let result = validate_asset_path(&dir, "nonexistent.mp3");
        assert_eq!(result, Err(AssetPathError::NotFound));
        Ok(())
    }

    #[test]
    fn test_directory_is_not_an_asset() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        create_dir(dir.join("images"))?;
        let result = validate_asset_path(&dir, "images");
        assert_eq!(result, Err(AssetPathError::NotFound));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_with_dot_dot() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let result = validate_asset_path(&dir, "images/../../../etc/passwd");
        assert_eq!(result, Err(AssetPathError::InvalidPath));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_absolute() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let result = validate_asset_path(&dir, "/etc/passwd");
        assert_eq!(result, Err(AssetPathError::InvalidPath));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_symlink() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let target = dir.join("target.mp3");
        File::create(&target)?;
        let link = dir.join("link.mp3");
        symlink(&target, &link)?;

        let result = validate_asset_path(&dir, "link.mp3");
        assert_eq!(result, Err(AssetPathError::Symlink));
        Ok(())
    }

    #[test]
    fn test_validate_asset_path_empty_string() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let result = validate_asset_path(&dir, "");
        assert_eq!(result, Err(AssetPathError::Empty));
        Ok(())
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("flip.mp3")), "audio/mpeg");
        assert_eq!(content_type(Path::new("Paris-HD.JPG")), "image/jpeg");
        assert_eq!(content_type(Path::new("notes.txt")), "application/octet-stream");
    }
}
