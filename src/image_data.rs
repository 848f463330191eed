// Copyright 2023 Remi Bernotavicius

use crate::inventory::models::ItemImage;
use derive_more::{Display, Error};
use std::hash::{DefaultHasher, Hash as _, Hasher as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Display, Error)]
pub enum ImageError {
    #[display("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("{name} is not an image file")]
    NotAnImage { name: String },
}

/// Checks that `bytes` hold a known image format and wraps them up to be shown in the UI. The URI
/// is derived from the contents so the same picture always maps to the same texture.
pub fn ingest_bytes(name: &str, bytes: impl Into<Arc<[u8]>>) -> Result<ItemImage, ImageError> {
    let bytes = bytes.into();
    let Ok(format) = image::guess_format(&bytes) else {
        log::warn!("rejected {name}, not an image");
        return Err(ImageError::NotAnImage { name: name.into() });
    };

    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    let extension = format.extensions_str().first().copied().unwrap_or("img");
    let uri = format!("bytes://item-images/{:016x}.{extension}", hasher.finish());

    log::info!("ingested {name} as {uri}");
    Ok(ItemImage::Embedded { uri, bytes })
}

pub fn ingest_file(path: &Path) -> Result<ItemImage, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_owned(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ingest_bytes(&name, bytes)
}

#[cfg(test)]
const PNG_PIXEL: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4,
    0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0xf8, 0xcf, 0xc0, 0xf0,
    0x1f, 0x00, 0x05, 0x00, 0x01, 0xff, 0x89, 0x99, 0x3d, 0x1d, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
    0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

#[test]
fn accepts_png() {
    let image = ingest_bytes("pixel.png", PNG_PIXEL.to_vec()).unwrap();
    let ItemImage::Embedded { uri, bytes } = image else {
        panic!("expected embedded image");
    };
    assert!(uri.starts_with("bytes://item-images/"));
    assert!(uri.ends_with(".png"));
    assert_eq!(&bytes[..], PNG_PIXEL);
}

#[test]
fn same_bytes_same_uri() {
    let uri = |image: ItemImage| match image {
        ItemImage::Embedded { uri, .. } => uri,
        _ => panic!("expected embedded image"),
    };
    let a = uri(ingest_bytes("a.png", PNG_PIXEL.to_vec()).unwrap());
    let b = uri(ingest_bytes("b.png", PNG_PIXEL.to_vec()).unwrap());
    assert_eq!(a, b);
}

#[test]
fn rejects_non_images() {
    let err = ingest_bytes("notes.txt", b"just some text".to_vec()).unwrap_err();
    assert!(matches!(err, ImageError::NotAnImage { .. }));
    assert_eq!(err.to_string(), "notes.txt is not an image file");
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("my-fridge-no-such-image.png");
    let err = ingest_file(&path).unwrap_err();
    assert!(matches!(err, ImageError::Io { .. }));
}

#[test]
fn reads_file_from_disk() {
    let path = std::env::temp_dir().join("my-fridge-test-pixel.png");
    std::fs::write(&path, PNG_PIXEL).unwrap();
    let image = ingest_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(image, ItemImage::Embedded { .. }));
}
