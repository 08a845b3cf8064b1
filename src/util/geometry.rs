// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides aspect-preserving fitting of media into the space
//! available in a carousel or the fullscreen overlay.

/// Largest size with the media's aspect ratio that fits in `max_width` x `max_height`.
pub fn fit_within(media_width: u32, media_height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    if media_width == 0 || media_height == 0 || max_width <= 0.0 || max_height <= 0.0 {
        return (0.0, 0.0);
    }

    let media_aspect = media_width as f32 / media_height as f32;
    let available_aspect = max_width / max_height;

    if media_aspect > available_aspect {
        // Media is wider - fit to width
        (max_width, max_width / media_aspect)
    } else {
        // Media is taller - fit to height
        (max_height * media_aspect, max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_media() {
        let (w, h) = fit_within(1920, 1080, 960.0, 960.0);
        assert!((w - 960.0).abs() < 0.001);
        assert!((h - 540.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_tall_media() {
        let (w, h) = fit_within(1080, 1920, 800.0, 300.0);
        assert!((h - 300.0).abs() < 0.001);
        assert!((w - 168.75).abs() < 0.001);
    }

    #[test]
    fn test_fit_degenerate_sizes() {
        assert_eq!(fit_within(0, 100, 300.0, 300.0), (0.0, 0.0));
        assert_eq!(fit_within(100, 100, 0.0, 300.0), (0.0, 0.0));
    }
}
