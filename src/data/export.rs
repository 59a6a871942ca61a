//! Headless export of the score plot: SVG document, rasterized to PNG.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::ScorePlotConfig;
use crate::data::axis::{format_tick, fraction, ticks, PlotBounds};
use crate::data::scores::Scores;
use crate::error::{ScorePlotError, ScorePlotResult};

// Plot-area margins in pixels: left, right, top, bottom.
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 58.0;
const TICK_LEN: f64 = 4.0;
const TICK_TARGET: usize = 6;

static FONTS: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
});

/// Maps data coordinates into the pixel rectangle of the plot area.
struct Frame {
    bounds: PlotBounds,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(bounds: PlotBounds, image_size: (u32, u32)) -> Self {
        let (w, h) = (image_size.0 as f64, image_size.1 as f64);
        Self {
            bounds,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn px(&self, x: f64) -> f64 {
        let (x0, x1) = self.bounds.x;
        self.left + fraction(x, x0, x1) * self.width
    }

    fn py(&self, y: f64) -> f64 {
        let (y0, y1) = self.bounds.y;
        self.top + (1.0 - fraction(y, y0, y1)) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn hex_color(c: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Render the scatter plot as a standalone SVG document.
///
/// Only finite points inside the configured x range are drawn.
pub fn render_svg(scores: &Scores, cfg: &ScorePlotConfig) -> String {
    let (w, h) = cfg.image_size;
    let bounds = PlotBounds::for_scores(scores, cfg);
    let frame = Frame::new(bounds, cfg.image_size);
    let mut s = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    );
    let _ = writeln!(s, r#"<rect width="{w}" height="{h}" fill="white"/>"#);
    let _ = writeln!(
        s,
        r#"<text class="title" x="{:.1}" y="{:.1}" font-size="15" text-anchor="middle">{}</text>"#,
        frame.left + frame.width / 2.0,
        frame.top - 16.0,
        escape_xml(&cfg.title)
    );

    let (xt, xstep) = ticks(bounds.x.0, bounds.x.1, TICK_TARGET);
    for t in xt {
        let x = frame.px(t);
        let _ = writeln!(
            s,
            r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="black"/><text x="{x:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            frame.bottom(),
            frame.bottom() + TICK_LEN,
            frame.bottom() + TICK_LEN + 13.0,
            format_tick(t, xstep)
        );
    }
    let (yt, ystep) = ticks(bounds.y.0, bounds.y.1, TICK_TARGET);
    for t in yt {
        let y = frame.py(t);
        let _ = writeln!(
            s,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="black"/><text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            frame.left - TICK_LEN,
            frame.left,
            frame.left - TICK_LEN - 3.0,
            y + 4.0,
            format_tick(t, ystep)
        );
    }

    let _ = writeln!(
        s,
        r#"<text class="x-label" x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{}</text>"#,
        frame.left + frame.width / 2.0,
        h as f64 - 14.0,
        escape_xml(&cfg.x_label)
    );
    let ylx = 20.0;
    let yly = frame.top + frame.height / 2.0;
    let _ = writeln!(
        s,
        r#"<text class="y-label" x="{ylx:.1}" y="{yly:.1}" font-size="12" text-anchor="middle" transform="rotate(-90 {ylx:.1} {yly:.1})">{}</text>"#,
        escape_xml(&cfg.y_label)
    );

    let _ = writeln!(s, r#"<g class="markers" fill="{}">"#, hex_color(cfg.marker_color));
    for p in scores.points() {
        if !(p[1].is_finite() && bounds.contains(p)) {
            continue;
        }
        let _ = writeln!(
            s,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
            frame.px(p[0]),
            frame.py(p[1]),
            cfg.marker_radius
        );
    }
    let _ = writeln!(s, "</g>");

    let _ = writeln!(
        s,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        frame.left, frame.top, frame.width, frame.height
    );
    s.push_str("</svg>\n");
    s
}

/// Render the plot and write it to `path` as PNG, replacing any existing file.
pub fn render_png<P: AsRef<Path>>(
    scores: &Scores,
    cfg: &ScorePlotConfig,
    path: P,
) -> ScorePlotResult<()> {
    let path = path.as_ref();
    let svg = render_svg(scores, cfg);

    let mut opt = usvg::Options::default();
    opt.fontdb = FONTS.clone();
    let tree = usvg::Tree::from_str(&svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ScorePlotError::Render(format!("invalid image size {size:?}")))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| ScorePlotError::Render("pixel buffer size mismatch".to_string()))?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), points = scores.len(), "saved plot");
    Ok(())
}
