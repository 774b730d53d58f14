// src/gui/actions/capture.rs
//
// Whole-summary capture. The summary is taller than the window, so it is
// scrolled through one viewport at a time, screenshotted at each stop and
// stitched back into a single image of the full content.

use eframe::egui;
use image::{ imageops, Rgba, RgbaImage };

use crate::file::ExportError;

use super::pdf::crop_region;

/// Where the scrolled summary sat on screen in one laid-out frame (points).
/// `content` is the full, unclipped content rect; `viewport` is what is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    pub content: egui::Rect,
    pub viewport: egui::Rect,
}

impl ScrollView {
    pub fn offset(&self) -> f32 {
        (self.viewport.min.y - self.content.min.y).max(0.0)
    }
}

/// One screenshot's share of the summary, placed `top_px` below the content top.
#[derive(Clone, Debug)]
pub struct Strip {
    pub image: RgbaImage,
    pub top_px: u32,
}

/// Scroll offsets that together show every row of the content.
/// The last stop is pinned to the bottom, so it may overlap the one before.
pub fn scroll_offsets(content_h: f32, viewport_h: f32) -> Vec<f32> {
    let max = (content_h - viewport_h).max(0.0);
    if viewport_h <= 0.0 || max == 0.0 {
        return vec![0.0];
    }
    let mut out = Vec::new();
    let mut o = 0.0;
    while o < max {
        out.push(o);
        o += viewport_h;
    }
    out.push(max);
    out
}

/// Cut the visible part of the summary out of a screenshot taken with `view` on screen.
pub fn capture_strip(shot: &egui::ColorImage, view: ScrollView, pixels_per_point: f32) -> Result<Strip, ExportError> {
    let visible = view.content.intersect(view.viewport);
    if !visible.is_positive() {
        return Err(ExportError::EmptyCapture);
    }
    let image = crop_region(shot, visible, pixels_per_point)?;
    let top_px = ((visible.min.y - view.content.min.y) * pixels_per_point).round().max(0.0) as u32;
    Ok(Strip { image, top_px })
}

/// Paste strips onto a white canvas `height_px` tall. Later strips win where they overlap.
pub fn stitch(strips: &[Strip], height_px: u32) -> Result<RgbaImage, ExportError> {
    let width_px = strips.iter().map(|s| s.image.width()).max().unwrap_or(0);
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyCapture);
    }
    let mut canvas = RgbaImage::from_pixel(width_px, height_px, Rgba([255, 255, 255, 255]));
    for strip in strips {
        imageops::replace(&mut canvas, &strip.image, 0, strip.top_px as i64);
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_needs_one_stop() {
        assert_eq!(scroll_offsets(500.0, 700.0), [0.0]);
        assert_eq!(scroll_offsets(700.0, 700.0), [0.0]);
    }

    #[test]
    fn last_stop_is_pinned_to_the_bottom() {
        assert_eq!(scroll_offsets(2000.0, 700.0), [0.0, 700.0, 1300.0]);
        assert_eq!(scroll_offsets(1400.0, 700.0), [0.0, 700.0]);
    }

    #[test]
    fn zero_viewport_falls_back_to_top() {
        assert_eq!(scroll_offsets(2000.0, 0.0), [0.0]);
    }

    #[test]
    fn nothing_to_stitch_is_an_error() {
        assert!(matches!(stitch(&[], 100), Err(ExportError::EmptyCapture)));
    }
}
