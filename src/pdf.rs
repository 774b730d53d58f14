// src/pdf.rs
//
// Image-only PDF export.
//
// A captured screen region is scaled to the page width and cut into
// page-height slices; each slice becomes one page holding a single JPEG.
// Slices are placed at the top of the page with their aspect ratio kept,
// so the last (shorter) slice leaves blank space below it.

use std::io::{ self, Write };

use image::{ codecs::jpeg::JpegEncoder, imageops, ExtendedColorType, RgbaImage };

use crate::file::ExportError;
use crate::progress::Progress;

/// Page size in PDF points (1/72 in).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFormat {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageFormat {
    /// A4 portrait.
    pub const A4: PageFormat = PageFormat { width_pt: 595.28, height_pt: 841.89 };
}

/// One page's cut of the source image, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlice {
    pub top_px: u32,
    pub height_px: u32,
}

/// Height (px) of a full page when the image is fit to page width. At least 1.
pub fn page_height_px(width_px: u32, format: PageFormat) -> u32 {
    let h = (width_px as f64 * format.height_pt / format.width_pt).floor();
    (h as u32).max(1)
}

/// Cut plan for an image of the given size. Empty when either dimension is 0.
pub fn plan_pages(width_px: u32, height_px: u32, format: PageFormat) -> Vec<PageSlice> {
    if width_px == 0 || height_px == 0 {
        return Vec::new();
    }
    let page_h = page_height_px(width_px, format);
    (0..height_px)
        .step_by(page_h as usize)
        .map(|top_px| PageSlice {
            top_px,
            height_px: page_h.min(height_px - top_px),
        })
        .collect()
}

struct EncodedPage {
    jpeg: Vec<u8>,
    width_px: u32,
    height_px: u32,
}

/// Encode `capture` into a paginated image-only PDF.
pub fn render_pdf(
    capture: &RgbaImage,
    format: PageFormat,
    quality: u8,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<u8>, ExportError> {
    let (w, h) = capture.dimensions();
    let plan = plan_pages(w, h, format);
    if plan.is_empty() {
        return Err(ExportError::EmptyCapture);
    }

    if let Some(p) = progress.as_deref_mut() { p.begin(plan.len()); }
    logd!("PDF: {}x{} px → {} page(s)", w, h, plan.len());

    let mut pages = Vec::with_capacity(plan.len());
    for (i, slice) in plan.iter().enumerate() {
        let cut = imageops::crop_imm(capture, 0, slice.top_px, w, slice.height_px).to_image();
        let rgb = image::DynamicImage::ImageRgba8(cut).to_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, quality)
            .encode(rgb.as_raw(), w, slice.height_px, ExtendedColorType::Rgb8)?;

        pages.push(EncodedPage { jpeg, width_px: w, height_px: slice.height_px });
        if let Some(p) = progress.as_deref_mut() { p.item_done(i); }
    }

    if let Some(p) = progress.as_deref_mut() { p.log("Assembling PDF"); }
    let mut out = Vec::new();
    write_pdf(&mut out, &pages, format)?;
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(out)
}

/// Byte-counting writer; the xref table needs object offsets.
struct Counted<W> {
    inner: W,
    pos: usize,
}

impl<W: Write> Write for Counted<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.pos += n;
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> { self.inner.flush() }
}

// Object layout: 1 = catalog, 2 = page tree, then per page i:
// 3+3i = page, 4+3i = content stream, 5+3i = image XObject.
fn write_pdf<W: Write>(w: W, pages: &[EncodedPage], format: PageFormat) -> io::Result<()> {
    let mut w = Counted { inner: w, pos: 0 };
    let obj_count = 2 + 3 * pages.len();
    let mut offsets = vec![0usize; obj_count + 1];

    w.write_all(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;

    offsets[1] = w.pos;
    w.write_all(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n")?;

    offsets[2] = w.pos;
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 3 + 3 * i))
        .collect::<Vec<_>>()
        .join(" ");
    write!(w, "2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {} >>\nendobj\n", pages.len())?;

    let (pw, ph) = (format.width_pt, format.height_pt);
    for (i, page) in pages.iter().enumerate() {
        let (page_id, content_id, image_id) = (3 + 3 * i, 4 + 3 * i, 5 + 3 * i);

        offsets[page_id] = w.pos;
        write!(
            w,
            "{page_id} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {pw:.2} {ph:.2}] \
             /Resources << /XObject << /Im0 {image_id} 0 R >> >> /Contents {content_id} 0 R >>\nendobj\n"
        )?;

        // Fit to width, pinned to the top edge.
        let draw_h = page.height_px as f64 * pw / page.width_px as f64;
        let content = format!("q {pw:.2} 0 0 {draw_h:.2} 0 {:.2} cm /Im0 Do Q", ph - draw_h);
        offsets[content_id] = w.pos;
        write!(w, "{content_id} 0 obj\n<< /Length {} >>\nstream\n{content}\nendstream\nendobj\n", content.len())?;

        offsets[image_id] = w.pos;
        write!(
            w,
            "{image_id} 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            page.width_px, page.height_px, page.jpeg.len()
        )?;
        w.write_all(&page.jpeg)?;
        w.write_all(b"\nendstream\nendobj\n")?;
    }

    let xref_at = w.pos;
    write!(w, "xref\n0 {}\n0000000000 65535 f \n", obj_count + 1)?;
    for off in &offsets[1..] {
        write!(w, "{off:010} 00000 n \n")?;
    }
    write!(w, "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n", obj_count + 1)?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_height_follows_a4_ratio() {
        assert_eq!(page_height_px(100, PageFormat::A4), 141);
        assert_eq!(page_height_px(595, PageFormat::A4), 841);
    }

    #[test]
    fn zero_sized_capture_has_no_pages() {
        assert!(plan_pages(0, 100, PageFormat::A4).is_empty());
        assert!(plan_pages(100, 0, PageFormat::A4).is_empty());
    }
}
