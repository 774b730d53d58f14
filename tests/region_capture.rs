// tests/region_capture.rs
//
// Screenshot cropping for the PDF export (no window needed).

use eframe::egui::{ ColorImage, Pos2, Rect, Vec2 };

use pcda_presenter::file::ExportError;
use pcda_presenter::gui::actions::{ capture_strip, crop_region, scroll_offsets, stitch, ScrollView };
use pcda_presenter::pdf::{ render_pdf, PageFormat };

fn screenshot(w: usize, h: usize) -> ColorImage {
    // Red channel = x, green channel = y, so crops can be checked by pixel.
    let mut rgba = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            rgba.extend_from_slice(&[x as u8, y as u8, 0, 255]);
        }
    }
    ColorImage::from_rgba_unmultiplied([w, h], &rgba)
}

#[test]
fn crop_scales_points_to_pixels() {
    let img = screenshot(200, 100);
    let rect = Rect::from_min_max(Pos2::new(10.0, 5.0), Pos2::new(60.0, 30.0));

    let out = crop_region(&img, rect, 2.0).unwrap();
    assert_eq!(out.dimensions(), (100, 50));
    assert_eq!(out.get_pixel(0, 0).0, [20, 10, 0, 255]);
}

#[test]
fn crop_is_clamped_to_the_screenshot() {
    let img = screenshot(50, 40);
    let rect = Rect::from_min_max(Pos2::new(-10.0, 20.0), Pos2::new(500.0, 500.0));

    let out = crop_region(&img, rect, 1.0).unwrap();
    assert_eq!(out.dimensions(), (50, 20));
}

#[test]
fn offscreen_region_is_empty() {
    let img = screenshot(50, 40);
    let rect = Rect::from_min_max(Pos2::new(60.0, 0.0), Pos2::new(80.0, 10.0));
    assert!(matches!(crop_region(&img, rect, 1.0), Err(ExportError::EmptyCapture)));
}

// Window 100×140 pt with a 20 pt header; the summary scrolls below it.
const HEADER: f32 = 20.0;
const WINDOW_H: usize = 140;

/// Screenshot of the window with the summary scrolled to `view`.
/// Content row r is painted as green = r % 256, blue = r / 256; the header is solid red.
fn scrolled_screenshot(view: ScrollView) -> ColorImage {
    let w = view.viewport.width() as usize;
    let mut rgba = Vec::with_capacity(w * WINDOW_H * 4);
    for y in 0..WINDOW_H {
        let row = y as f32 - view.content.min.y;
        let px = if (y as f32) < HEADER || row < 0.0 || row >= view.content.height() {
            [255, 0, 0, 255]
        } else {
            let r = row as u32;
            [0, (r % 256) as u8, (r / 256) as u8, 255]
        };
        for _ in 0..w {
            rgba.extend_from_slice(&px);
        }
    }
    ColorImage::from_rgba_unmultiplied([w, WINDOW_H], &rgba)
}

fn view_at(offset: f32, content_h: f32) -> ScrollView {
    ScrollView {
        content: Rect::from_min_size(Pos2::new(0.0, HEADER - offset), Vec2::new(100.0, content_h)),
        viewport: Rect::from_min_max(Pos2::new(0.0, HEADER), Pos2::new(100.0, WINDOW_H as f32)),
    }
}

#[test]
fn summary_taller_than_the_window_is_captured_whole() {
    let content_h = 400.0;
    let offsets = scroll_offsets(content_h, 120.0);
    assert_eq!(offsets, [0.0, 120.0, 240.0, 280.0]);

    let strips = offsets
        .iter()
        .map(|&o| {
            let view = view_at(o, content_h);
            capture_strip(&scrolled_screenshot(view), view, 1.0).unwrap()
        })
        .collect::<Vec<_>>();
    let whole = stitch(&strips, content_h as u32).unwrap();

    assert_eq!(whole.dimensions(), (100, 400));
    for r in [0u32, 119, 120, 250, 399] {
        assert_eq!(whole.get_pixel(50, r).0, [0, (r % 256) as u8, (r / 256) as u8, 255], "row {r}");
    }

    // 100 px wide fits 141 px per A4 page.
    let bytes = render_pdf(&whole, PageFormat::A4, 80, None).unwrap();
    let pages = bytes.windows(19).filter(|w| *w == b"/Type /Page /Parent").count();
    assert_eq!(pages, 3);
}

#[test]
fn header_never_leaks_into_a_strip() {
    let view = view_at(50.0, 400.0);
    let strip = capture_strip(&scrolled_screenshot(view), view, 1.0).unwrap();
    assert_eq!(strip.top_px, 50);
    assert_eq!(strip.image.dimensions(), (100, 120));
    assert_eq!(strip.image.get_pixel(0, 0).0, [0, 50, 0, 255]);
}
