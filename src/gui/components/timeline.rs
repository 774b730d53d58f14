// src/gui/components/timeline.rs
//
// Five-year eligibility strip. Drawn in a 600x70 virtual canvas scaled to the
// available width; the first year is tinted by the eligibility window.

use eframe::egui::{ self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2 };

use crate::session::EligibilityWindow;

const VIEW_W: f32 = 600.0;
const VIEW_H: f32 = 70.0;

const TRACK: Color32 = Color32::from_rgb(0xd4, 0xd4, 0xd8);
const YEAR: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
const GAP_FILL: Color32 = Color32::from_rgb(0xc7, 0xd2, 0xfe);
const GAP_TEXT: Color32 = Color32::from_rgb(0x0b, 0x5c, 0xab);
const REDSHIRT_FILL: Color32 = Color32::from_rgb(0xfe, 0xca, 0xca);
const REDSHIRT_TEXT: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d);
const CAPTION: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b);

pub fn draw(ui: &mut egui::Ui, window: EligibilityWindow) {
    let width = ui.available_width().max(200.0);
    let scale = width / VIEW_W;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, VIEW_H * scale), Sense::hover());
    let painter = ui.painter_at(rect);

    let at = |x: f32, y: f32| Pos2::new(rect.min.x + x * scale, rect.min.y + y * scale);
    let year = |i: usize| Rect::from_min_size(at(30.0 + i as f32 * 110.0, 20.0), Vec2::new(100.0, 30.0) * scale);
    let font = FontId::proportional((12.0 * scale).max(9.0));

    painter.line_segment([at(20.0, 35.0), at(580.0, 35.0)], Stroke::new(6.0 * scale, TRACK));
    for i in 0..5 {
        painter.rect_filled(year(i), 6.0 * scale, YEAR);
    }

    // Both tints can apply at once with edited thresholds; redshirt paints last.
    if window.gap_year_usable {
        painter.rect_filled(year(0), 6.0 * scale, GAP_FILL);
        painter.text(at(80.0, 12.0), Align2::CENTER_CENTER, "GAP Year Utilizable", font.clone(), GAP_TEXT);
    }
    if window.redshirt_triggered {
        painter.rect_filled(year(0), 6.0 * scale, REDSHIRT_FILL);
        painter.text(at(80.0, 12.0), Align2::CENTER_CENTER, "Redshirt Year Utilized", font.clone(), REDSHIRT_TEXT);
    }

    painter.text(at(300.0, 62.0), Align2::CENTER_CENTER, "Five-Year Eligibility Window", font, CAPTION);
}
