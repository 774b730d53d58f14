// tests/pdf_pages.rs
use image::{ Rgba, RgbaImage };

use pcda_presenter::file::ExportError;
use pcda_presenter::pdf::{ plan_pages, render_pdf, PageFormat, PageSlice };
use pcda_presenter::progress::Progress;

#[derive(Default)]
struct Counting {
    total: usize,
    done: usize,
    finished: bool,
}

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, _index: usize) { self.done += 1; }
    fn finish(&mut self) { self.finished = true; }
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

#[test]
fn tall_capture_is_sliced_into_page_heights() {
    let plan = plan_pages(100, 400, PageFormat::A4);
    assert_eq!(
        plan,
        [
            PageSlice { top_px: 0, height_px: 141 },
            PageSlice { top_px: 141, height_px: 141 },
            PageSlice { top_px: 282, height_px: 118 },
        ]
    );
}

#[test]
fn short_capture_fits_one_page() {
    assert_eq!(plan_pages(600, 300, PageFormat::A4), [PageSlice { top_px: 0, height_px: 300 }]);
}

#[test]
fn rendered_document_has_one_page_per_slice() {
    let img = RgbaImage::from_pixel(100, 400, Rgba([38, 168, 224, 255]));
    let mut progress = Counting::default();
    let bytes = render_pdf(&img, PageFormat::A4, 80, Some(&mut progress)).unwrap();

    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert_eq!(count(&bytes, b"/Type /Page /Parent"), 3);
    assert_eq!(count(&bytes, b"/Filter /DCTDecode"), 3);
    assert_eq!(count(&bytes, b"/Count 3"), 1);

    assert_eq!(progress.total, 3);
    assert_eq!(progress.done, 3);
    assert!(progress.finished);
}

#[test]
fn empty_capture_is_an_error() {
    let img = RgbaImage::new(0, 0);
    assert!(matches!(
        render_pdf(&img, PageFormat::A4, 80, None),
        Err(ExportError::EmptyCapture)
    ));
}
