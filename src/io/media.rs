// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (images and video poster frames).
//!
//! This module decodes media referenced by the portfolio into RGBA pixels
//! on background threads. The UI thread polls for results and turns them
//! into textures.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Decoded RGBA8 image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Kind of decode a media reference needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

/// Whether video poster frames can be decoded in this build.
pub const VIDEO_DECODING: bool = cfg!(feature = "video-opencv");

/// Result of one background load, tagged with the reference it was asked for.
pub struct MediaResult {
    pub reference: String,
    pub result: Result<LoadedImage, String>,
}

/// Remote media is never fetched.
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolve a media reference against the portfolio file's directory.
pub fn resolve(base_dir: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference.trim_start_matches('/'));
    if Path::new(reference).is_absolute() && Path::new(reference).exists() {
        PathBuf::from(reference)
    } else {
        base_dir.join(path)
    }
}

/// Absolute directory holding a portfolio file; media references resolve against it.
pub fn base_dir(portfolio_path: &Path) -> PathBuf {
    let path = std::path::absolute(portfolio_path).unwrap_or_else(|_| portfolio_path.to_path_buf());
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// URL for opening a media reference outside the viewer.
pub fn external_url(base_dir: &Path, reference: &str) -> String {
    if is_remote(reference) {
        return reference.to_string();
    }
    let path = resolve(base_dir, reference);
    let path = std::path::absolute(&path).unwrap_or(path);
    match url::Url::from_file_path(&path) {
        Ok(url) => url.to_string(),
        Err(()) => {
            log::warn!("No file URL for {}", path.display());
            path.display().to_string()
        }
    }
}

/// Load an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Grab the first frame of a video as a poster image.
#[cfg(feature = "video-opencv")]
pub fn load_poster_frame(path: &Path) -> Result<LoadedImage> {
    use opencv::{core::Mat, imgproc, prelude::*, videoio};

    let path_str = path.to_str().context("Video path is not valid UTF-8")?;
    let mut capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
    if !capture.is_opened()? {
        bail!("Failed to open video {}", path.display());
    }

    let mut frame = Mat::default();
    if !capture.read(&mut frame)? || frame.empty() {
        bail!("Video has no frames: {}", path.display());
    }

    let mut rgba = Mat::default();
    imgproc::cvt_color(&frame, &mut rgba, imgproc::COLOR_BGR2RGBA, 0)?;

    Ok(LoadedImage {
        width: rgba.cols() as u32,
        height: rgba.rows() as u32,
        pixels: rgba.data_bytes()?.to_vec(),
    })
}

/// Without a decoder, videos have no poster frame.
#[cfg(not(feature = "video-opencv"))]
pub fn load_poster_frame(path: &Path) -> Result<LoadedImage> {
    bail!("Video decoding disabled, no poster for {}", path.display())
}

/// Spawns background decodes and hands back their results.
pub struct MediaLoader {
    base_dir: PathBuf,
    sender: Sender<MediaResult>,
    receiver: Receiver<MediaResult>,
}

impl MediaLoader {
    pub fn new(base_dir: PathBuf) -> Self {
        let (sender, receiver) = channel();
        Self {
            base_dir,
            sender,
            receiver,
        }
    }

    /// Start decoding `reference` on a background thread.
    pub fn request(&self, reference: &str, kind: MediaKind) {
        let reference = reference.to_string();

        if kind == MediaKind::Video && !VIDEO_DECODING {
            log::debug!("No video decoder, placeholder for {}", reference);
            let result = Err("video decoding disabled".to_string());
            let _ = self.sender.send(MediaResult { reference, result });
            return;
        }

        let path = resolve(&self.base_dir, &reference);
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = match kind {
                MediaKind::Photo => load_image(&path),
                MediaKind::Video => load_poster_frame(&path),
            }
            .map_err(|e| format!("{:#}", e));

            match &result {
                Ok(img) => log::info!("Loaded media: {} ({}x{})", path.display(), img.width, img.height),
                Err(e) => log::error!("Failed to load media: {}", e),
            }

            let _ = sender.send(MediaResult { reference, result });
        });
    }

    pub fn external_url(&self, reference: &str) -> String {
        external_url(&self.base_dir, reference)
    }

    /// Results finished since the last poll.
    pub fn poll(&self) -> Vec<MediaResult> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("https://cdn.example/a.png"));
        assert!(is_remote("http://cdn.example/a.png"));
        assert!(!is_remote("images/a.png"));
        assert!(!is_remote("/images/a.png"));
    }

    #[test]
    fn test_resolve_relative_and_site_root_paths() {
        let base = Path::new("/srv/portfolio");
        assert_eq!(resolve(base, "images/a.png"), PathBuf::from("/srv/portfolio/images/a.png"));
        // Site-root references that do not exist on disk resolve under the base.
        assert_eq!(
            resolve(base, "/no-such-root-dir/a.png"),
            PathBuf::from("/srv/portfolio/no-such-root-dir/a.png")
        );
    }

    #[test]
    fn test_external_url() {
        let base = Path::new("/srv/portfolio");
        assert_eq!(external_url(base, "https://v.example/a.mp4"), "https://v.example/a.mp4");
        assert_eq!(external_url(base, "media/a.mp4"), "file:///srv/portfolio/media/a.mp4");
    }

    #[test]
    fn test_external_url_from_relative_base() {
        let base = base_dir(Path::new("demos/portfolio.yaml"));
        assert!(base.is_absolute());
        assert!(base.ends_with("demos"));

        let url = external_url(&base, "media/tracer.mp4");
        assert!(url.starts_with("file:///"), "{url}");
        assert!(url.ends_with("/demos/media/tracer.mp4"), "{url}");

        let url = external_url(Path::new("demos"), "media/my clip.mp4");
        assert!(url.starts_with("file:///"), "{url}");
        assert!(url.ends_with("/demos/media/my%20clip.mp4"), "{url}");
    }

    #[test]
    fn test_base_dir_of_bare_file_name() {
        let base = base_dir(Path::new("portfolio.yaml"));
        assert!(base.is_absolute());
    }

    #[cfg(not(feature = "video-opencv"))]
    #[test]
    fn test_video_without_decoder_fails_fast() {
        let loader = MediaLoader::new(PathBuf::from("/srv/portfolio"));
        loader.request("clip.mp4", MediaKind::Video);

        let results = loader.poll();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].reference, "clip.mp4");
        assert!(results[0].result.is_err());
    }

    #[test]
    fn test_missing_image_reports_error() {
        let loader = MediaLoader::new(PathBuf::from("/no-such-dir"));
        loader.request("missing.png", MediaKind::Photo);

        let result = loader
            .receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        assert_eq!(result.reference, "missing.png");
        assert!(result.result.is_err());
    }
}
