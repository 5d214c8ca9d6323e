// src/gui/components/chart_view.rs
//
// Paints a Chart with plain egui shapes. One exhaustive match, one painter
// routine per variant. All geometry is in screen space (y grows downwards).

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use eframe::egui::{
    self, epaint::TextShape, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke,
    StrokeKind, Vec2,
};

use crate::{
    chart::{Chart, FunnelChart, HeatmapChart, PieChart, RadarChart, SeriesChart},
    gui::palette,
};

const CHART_H: f32 = 440.0;
const LABEL_FONT: f32 = 12.0;
const Y_TICKS: u64 = 5;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SeriesStyle { Bar, Line, Scatter }

pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
    let size = Vec2::new(ui.available_width().max(320.0), CHART_H);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;
    let ink = ui.visuals().text_color();
    let faint = ui.visuals().weak_text_color();

    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let hover = match chart {
        Chart::Bar(c)     => draw_series(&painter, rect, c, SeriesStyle::Bar, ink, faint, resp.hover_pos()),
        Chart::Line(c)    => draw_series(&painter, rect, c, SeriesStyle::Line, ink, faint, resp.hover_pos()),
        Chart::Scatter(c) => draw_series(&painter, rect, c, SeriesStyle::Scatter, ink, faint, resp.hover_pos()),
        Chart::Pie(c)     => { draw_pie(&painter, rect, c, ink); None }
        Chart::Radar(c)   => { draw_radar(&painter, rect, c, ink, faint); None }
        Chart::Funnel(c)  => { draw_funnel(&painter, rect, c); None }
        Chart::Heatmap(c) => { draw_heatmap(&painter, rect, c, ink); None }
    };

    if let Some(text) = hover {
        resp.on_hover_text(text);
    }
}

fn font() -> FontId { FontId::proportional(LABEL_FONT) }

/* ---------- bar / line / scatter ---------- */

fn draw_series(
    painter: &Painter,
    rect: Rect,
    c: &SeriesChart,
    style: SeriesStyle,
    ink: Color32,
    faint: Color32,
    hover: Option<Pos2>,
) -> Option<String> {
    let plot = Rect::from_min_max(rect.min + Vec2::new(52.0, 20.0), rect.max - Vec2::new(20.0, 80.0));
    let n = c.values.len().max(1);
    let max = c.max_value().max(1) as f32;
    let slot = plot.width() / n as f32;

    let x_at = |i: usize| plot.left() + slot * (i as f32 + 0.5);
    let y_at = |v: u64| plot.bottom() - v as f32 / max * plot.height();

    // y grid + tick labels
    for t in 0..=Y_TICKS {
        let v = (max * t as f32 / Y_TICKS as f32).round() as u64;
        let y = y_at(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], Stroke::new(0.5, faint));
        painter.text(Pos2::new(plot.left() - 6.0, y), Align2::RIGHT_CENTER, v.to_string(), font(), ink);
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, ink));
    painter.text(plot.left_top() - Vec2::new(0.0, 14.0), Align2::LEFT_CENTER, &c.series_name, font(), faint);

    let color = palette::series(0);
    let points: Vec<Pos2> = c.values.iter().enumerate().map(|(i, v)| Pos2::new(x_at(i), y_at(*v))).collect();

    match style {
        SeriesStyle::Bar => {
            for p in &points {
                let bar = Rect::from_min_max(
                    Pos2::new(p.x - slot * 0.35, p.y),
                    Pos2::new(p.x + slot * 0.35, plot.bottom()),
                );
                painter.rect_filled(bar, 0.0, color);
            }
        }
        SeriesStyle::Line => {
            painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
            for p in &points {
                painter.circle_filled(*p, 3.5, color);
            }
        }
        SeriesStyle::Scatter => {
            for p in &points {
                painter.circle_filled(*p, 6.0, color);
            }
        }
    }

    // category labels, slanted so long words don't collide
    for (i, cat) in c.categories.iter().enumerate() {
        let galley = painter.layout_no_wrap(cat.clone(), font(), ink);
        let anchor = Pos2::new(x_at(i), plot.bottom() + 6.0);
        painter.add(TextShape::new(anchor, galley, ink).with_angle(FRAC_PI_4));
    }

    let p = hover.filter(|p| plot.contains(*p))?;
    let i = (((p.x - plot.left()) / slot) as usize).min(n - 1);
    let cat = c.categories.get(i)?;
    let v = c.values.get(i)?;
    Some(format!("{cat}: {v}"))
}

/* ---------- pie ---------- */

fn draw_pie(painter: &Painter, rect: Rect, c: &PieChart, ink: Color32) {
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) / 2.0 - 60.0).max(20.0);
    let on_circle = |a: f32, r: f32| center + Vec2::angled(a) * r;

    let mut start = -FRAC_PI_2;
    for (i, s) in c.slices.iter().enumerate() {
        let sweep = (s.percent as f32 / 100.0) * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let color = palette::series(i);

        // fan of thin triangles keeps each piece convex
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![center, on_circle(a0, radius), on_circle(a1, radius)],
                color,
                Stroke::NONE,
            ));
        }

        let mid = start + sweep / 2.0;
        let label_at = on_circle(mid, radius + 12.0);
        let align = if mid.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
        painter.text(label_at, align, format!("{} {:.1}%", s.label, s.percent), font(), ink);

        start += sweep;
    }
}

/* ---------- radar ---------- */

fn draw_radar(painter: &Painter, rect: Rect, c: &RadarChart, ink: Color32, faint: Color32) {
    let n = c.indicators.len();
    if n == 0 {
        return;
    }
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) / 2.0 - 50.0).max(20.0);
    let angle = |i: usize| -FRAC_PI_2 + TAU * i as f32 / n as f32;
    let at = |i: usize, frac: f32| center + Vec2::angled(angle(i)) * radius * frac;

    // rings and spokes
    for ring in 1..=4 {
        let frac = ring as f32 / 4.0;
        let pts: Vec<Pos2> = (0..n).map(|i| at(i, frac)).collect();
        painter.add(Shape::closed_line(pts, Stroke::new(0.5, faint)));
    }
    for (i, ind) in c.indicators.iter().enumerate() {
        painter.line_segment([center, at(i, 1.0)], Stroke::new(0.5, faint));
        let a = angle(i);
        let align = if a.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
        painter.text(at(i, 1.08), align, &ind.name, font(), ink);
    }

    // each axis is scaled to its own max
    let color = palette::series(0);
    let pts: Vec<Pos2> = c
        .indicators
        .iter()
        .zip(&c.values)
        .enumerate()
        .map(|(i, (ind, v))| {
            let frac = if ind.max == 0 { 0.0 } else { (*v as f32 / ind.max as f32).min(1.0) };
            at(i, frac)
        })
        .collect();
    painter.add(Shape::closed_line(pts.clone(), Stroke::new(2.0, color)));
    for p in pts {
        painter.circle_filled(p, 3.0, color);
    }
}

/* ---------- funnel ---------- */

fn draw_funnel(painter: &Painter, rect: Rect, c: &FunnelChart) {
    let m = c.stages.len();
    if m == 0 {
        return;
    }
    let plot = rect.shrink(24.0);
    let max = c.stages.iter().map(|s| s.value).max().unwrap_or(0).max(1) as f32;
    let h = plot.height() / m as f32;
    let cx = plot.center().x;
    let half = |v: u64| v as f32 / max * plot.width() / 2.0;

    for (i, s) in c.stages.iter().enumerate() {
        let top = plot.top() + h * i as f32;
        let bottom = top + h - 2.0;
        let w_top = half(s.value);
        let w_bottom = c.stages.get(i + 1).map(|n| half(n.value)).unwrap_or(0.0);

        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(cx - w_top, top),
                Pos2::new(cx + w_top, top),
                Pos2::new(cx + w_bottom, bottom),
                Pos2::new(cx - w_bottom, bottom),
            ],
            palette::series(i),
            Stroke::NONE,
        ));
        painter.text(
            Pos2::new(cx, (top + bottom) / 2.0),
            Align2::CENTER_CENTER,
            format!("{} {}", s.name, s.value),
            font(),
            Color32::WHITE,
        );
    }
}

/* ---------- heatmap ---------- */

fn draw_heatmap(painter: &Painter, rect: Rect, c: &HeatmapChart, ink: Color32) {
    let size = c.size();
    if size == 0 {
        return;
    }
    let side = (rect.width().min(rect.height()) - 60.0).max(40.0);
    let cell = side / size as f32;
    let origin = Pos2::new(rect.center().x - side / 2.0, rect.top() + 20.0);
    let max = c.max_value();

    for (row_ix, row) in c.cells.iter().enumerate() {
        for (col_ix, v) in row.iter().enumerate() {
            let t = if max == 0 { 0.0 } else { *v as f32 / max as f32 };
            let min = origin + Vec2::new(col_ix as f32 * cell, row_ix as f32 * cell);
            let r = Rect::from_min_size(min, Vec2::splat(cell));
            painter.rect_filled(r, 0.0, palette::mix(palette::HEAT_LOW, palette::HEAT_HIGH, t));
        }
    }
    let frame = Rect::from_min_size(origin, Vec2::splat(side));
    painter.rect_stroke(frame, 0.0, Stroke::new(1.0, ink), StrokeKind::Outside);

    // index labels every 5 cells
    for i in (0..size).step_by(5) {
        let mid = i as f32 * cell + cell / 2.0;
        painter.text(origin + Vec2::new(mid, side + 4.0), Align2::CENTER_TOP, i.to_string(), font(), ink);
        painter.text(origin + Vec2::new(-4.0, mid), Align2::RIGHT_CENTER, i.to_string(), font(), ink);
    }
}
