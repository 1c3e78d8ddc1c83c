//! 答题卡图片查找 - 业务能力层
//!
//! 只负责列出文件夹下的图片文件，不检查图片内容是否有效

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 支持的图片扩展名（不区分大小写）
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff"];

/// 判断路径的扩展名是否为支持的图片格式
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// 列出文件夹（不递归）中的所有图片，按文件名排序
///
/// # 错误
/// 路径不存在或不是文件夹时返回 `AppError::DirectoryNotFound`
pub async fn locate_images(folder: &Path) -> AppResult<Vec<PathBuf>> {
    let is_dir = fs::metadata(folder)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(AppError::DirectoryNotFound {
            path: folder.to_path_buf(),
        });
    }

    let read_err = |source| AppError::DirectoryRead {
        path: folder.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    let mut entries = fs::read_dir(folder).await.map_err(read_err)?;

    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let path = entry.path();
        if !is_supported_image(&path) {
            continue;
        }
        // 跟随符号链接，只保留普通文件
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => images.push(path),
            _ => debug!("跳过非文件条目: {}", path.display()),
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("b.JPEG")));
        assert!(is_supported_image(Path::new("c.Tiff")));
        assert!(is_supported_image(Path::new("dir/d.bmp")));
        assert!(!is_supported_image(Path::new("e.txt")));
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new("f.jpg.bak")));
    }

    #[tokio::test]
    async fn test_locate_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.gif", "scan.pdf"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("d.jpg"), b"x").unwrap();

        let images = locate_images(dir.path()).await.unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.PNG", "c.gif"]);
    }

    #[tokio::test]
    async fn test_directory_named_like_image_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder.jpg")).unwrap();
        std::fs::write(dir.path().join("real.jpg"), b"x").unwrap();

        let images = locate_images(dir.path()).await.unwrap();
        assert_eq!(images, vec![dir.path().join("real.jpg")]);
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = locate_images(&missing).await.unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        std::fs::write(&file, b"x").unwrap();
        let err = locate_images(&file).await.unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound { .. }));
    }
}
