//! 图片编码 - 业务能力层

use crate::error::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::debug;

/// 读取整张图片并编码为 Base64 字符串（标准字母表，不换行）
pub async fn encode_image(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| AppError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("读取图片 {} ({} 字节)", path.display(), bytes.len());
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encode_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        let bytes: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        std::fs::write(&path, &bytes).unwrap();

        let encoded = encode_image(&path).await.unwrap();
        assert!(!encoded.contains('\n'));
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        let encoded = encode_image(&path).await.unwrap();
        assert_eq!(encoded, "");
        assert!(STANDARD.decode(encoded).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_image(&dir.path().join("gone.jpg")).await.unwrap_err();
        assert!(matches!(err, AppError::ImageRead { .. }));
    }
}
