//! SVG generation

use glam::dvec2;
use svg::Document;
use svg::Node;
use svg::node::element::{Circle as SvgCircle, Path as SvgPath, Rectangle, Text};

use super::Canvas;
use super::defaults;
use crate::path::PathSegment;
use crate::scene::{Scene, StyledPath};
use crate::types::{BBox, Point};

/// Output settings for [`SvgCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Pixels per drawing unit.
    pub scale: f64,
    /// Blank border in drawing units.
    pub margin: f64,
    pub stroke: String,
    pub dot_fill: String,
    /// `None` leaves the background transparent.
    pub background: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: defaults::SCALE,
            margin: defaults::MARGIN,
            stroke: defaults::STROKE.to_string(),
            dot_fill: defaults::DOT_FILL.to_string(),
            background: Some(defaults::BACKGROUND.to_string()),
        }
    }
}

/// Builds a standalone SVG document. Drawing Y points up; SVG Y points
/// down, so every point is flipped against the top of the bounds.
#[derive(Debug)]
pub struct SvgCanvas {
    options: SvgOptions,
    min_x: f64,
    max_y: f64,
    /// Pixels reserved above the drawing for the title.
    title_band: f64,
    document: Document,
}

impl SvgCanvas {
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            min_x: 0.0,
            max_y: 0.0,
            title_band: 0.0,
            document: Document::new(),
        }
    }

    fn to_px(&self, p: Point) -> Point {
        let s = self.options.scale;
        dvec2((p.x - self.min_x) * s, (self.max_y - p.y) * s + self.title_band)
    }

    fn coord(&self, p: Point) -> String {
        let p = self.to_px(p);
        format!("{},{}", fmt_num(p.x), fmt_num(p.y))
    }

    /// Path data with [`fmt_num`] precision. `svg::node::element::path::Data`
    /// stores `f32`, which would print long tails on every coordinate.
    fn path_data(&self, styled: &StyledPath) -> String {
        let mut parts = Vec::with_capacity(styled.path.len() + 1);
        for seg in styled.path.segments() {
            parts.push(match *seg {
                PathSegment::MoveTo(p) => format!("M {}", self.coord(p)),
                PathSegment::LineTo(p) => format!("L {}", self.coord(p)),
                PathSegment::CurveTo(c1, c2, p) => format!(
                    "C {} {} {}",
                    self.coord(c1),
                    self.coord(c2),
                    self.coord(p)
                ),
            });
        }
        if styled.style.closed {
            parts.push("Z".to_string());
        }
        parts.join(" ")
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new(SvgOptions::default())
    }
}

impl Canvas for SvgCanvas {
    type Output = String;

    fn begin(&mut self, bounds: BBox, title: Option<&str>) {
        let bounds = if bounds.is_empty() {
            BBox {
                min: Point::ZERO,
                max: Point::ZERO,
            }
        } else {
            bounds
        };
        let bounds = bounds.inflate(self.options.margin);
        self.min_x = bounds.min.x;
        self.max_y = bounds.max.y;
        self.title_band = if title.is_some() {
            defaults::FONT_SIZE * 2.0
        } else {
            0.0
        };

        let width = fmt_num(bounds.width() * self.options.scale);
        let height = fmt_num(bounds.height() * self.options.scale + self.title_band);
        self.document.assign("viewBox", format!("0 0 {width} {height}"));
        self.document.assign("width", width);
        self.document.assign("height", height);

        if let Some(bg) = &self.options.background {
            self.document.append(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", xml_chars(bg)),
            );
        }
        if let Some(title) = title {
            self.document.append(
                Text::new(xml_chars(title))
                    .set("x", "50%")
                    .set("y", fmt_num(defaults::FONT_SIZE * 1.25))
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", fmt_num(defaults::FONT_SIZE)),
            );
        }
    }

    fn path(&mut self, path: &StyledPath) {
        let node = SvgPath::new()
            .set("d", self.path_data(path))
            .set("fill", "none")
            .set("stroke", xml_chars(&self.options.stroke))
            .set("stroke-width", fmt_num(path.style.stroke_width))
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round");
        self.document.append(node);
    }

    fn dot(&mut self, center: Point, radius: f64) {
        let c = self.to_px(center);
        let node = SvgCircle::new()
            .set("cx", fmt_num(c.x))
            .set("cy", fmt_num(c.y))
            .set("r", fmt_num(radius * self.options.scale))
            .set("fill", xml_chars(&self.options.dot_fill));
        self.document.append(node);
    }

    fn finish(self) -> String {
        format!("{}\n", self.document)
    }
}

/// Render `scene` as an SVG document.
pub fn render_svg(scene: &Scene, options: SvgOptions) -> String {
    let svg = super::draw_scene(scene, SvgCanvas::new(options));
    crate::log::info!(
        paths = scene.paths.len(),
        dots = scene.dots.len(),
        bytes = svg.len(),
        "rendered svg"
    );
    svg
}

/// Format a coordinate with at most [`defaults::PRECISION`] decimals,
/// trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{:.prec$}", value, prec = defaults::PRECISION);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Drop characters XML 1.0 cannot carry at all, escaped or not. Markup
/// escaping is left to the `svg` serializer.
fn xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::scene::PathStyle;
    use crate::types::pt;

    fn small_scene() -> Scene {
        Scene {
            dots: vec![pt(0.0, 0.0)],
            dot_radius: 0.1,
            paths: vec![StyledPath::new(
                Path::new(pt(0.0, 0.0)).line_to(pt(1.0, 1.0)),
                PathStyle::default(),
            )],
            title: None,
        }
    }

    fn plain() -> SvgOptions {
        SvgOptions {
            scale: 10.0,
            background: None,
            ..SvgOptions::default()
        }
    }

    /// Text content of every `<text>` element, via the `svg` parser.
    fn text_contents(document: &str) -> Vec<String> {
        use svg::parser::Event;
        let mut texts = Vec::new();
        for event in svg::read(document).unwrap() {
            match event {
                Event::Text(t) if !t.trim().is_empty() => texts.push(t.trim().to_string()),
                Event::Error(err) => panic!("unparseable SVG: {err}"),
                _ => {}
            }
        }
        texts
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(2.0 / 3.0), "0.667");
        assert_eq!(fmt_num(-12.25), "-12.25");
    }

    #[test]
    fn small_document() {
        let svg = render_svg(&small_scene(), plain());
        insta::assert_snapshot!(svg, @r#"
        <svg height="21" viewBox="0 0 21 21" width="21" xmlns="http://www.w3.org/2000/svg">
        <path d="M 6,15 L 16,5" fill="none" stroke="black" stroke-linecap="round" stroke-linejoin="round" stroke-width="2"/>
        <circle cx="6" cy="15" fill="orange" r="1"/>
        </svg>
        "#);
    }

    #[test]
    fn y_axis_is_flipped() {
        let svg = render_svg(&small_scene(), plain());
        // (1, 1) is up and to the right, so it lands nearer the top
        assert!(svg.contains("L 16,5"));
    }

    #[test]
    fn closed_paths_end_with_z() {
        let mut scene = small_scene();
        scene.paths[0].style = PathStyle::closed(2.0);
        let svg = render_svg(&scene, plain());
        assert!(svg.contains("d=\"M 6,15 L 16,5 Z\""));
    }

    #[test]
    fn dots_follow_paths() {
        let svg = render_svg(&small_scene(), SvgOptions::default());
        let path_at = svg.find("<path").unwrap();
        let dot_at = svg.find("<circle").unwrap();
        assert!(path_at < dot_at);
        assert!(svg.contains("fill=\"white\""));
    }

    #[test]
    fn title_is_escaped_and_reserves_space() {
        let mut scene = small_scene();
        scene.title = Some("Kolam <1> & co".to_string());
        let svg = render_svg(&scene, plain());
        assert!(svg.contains(">\nKolam &lt;1&gt; &amp; co\n</text>"));
        assert!(svg.contains("height=\"53\""));
        assert!(svg.contains("M 6,47"));
    }

    #[test]
    fn control_characters_never_reach_the_document() {
        let mut scene = small_scene();
        scene.title = Some("Kolam\u{1}\u{8} grid\u{FFFF}".to_string());
        let options = SvgOptions {
            stroke: "bl\u{0}ack".to_string(),
            ..plain()
        };
        let svg = render_svg(&scene, options);
        assert!(!svg.chars().any(|c| c < ' ' && c != '\n'));
        assert!(svg.contains(">\nKolam grid\n</text>"));
        assert!(!svg.contains('\u{FFFF}'));
        assert!(svg.contains("stroke=\"black\""));
        assert_eq!(text_contents(&svg), vec!["Kolam grid".to_string()]);
    }

    #[test]
    fn keeps_tabs_and_newlines() {
        assert_eq!(xml_chars("a\tb\nc\rd\u{7f}é"), "a\tb\nc\rd\u{7f}é");
        assert_eq!(xml_chars("\u{1b}[1m"), "[1m");
    }

    #[test]
    fn empty_scene_is_still_a_document() {
        let svg = render_svg(&Scene::default(), plain());
        assert_eq!(
            svg,
            "<svg height=\"10\" viewBox=\"0 0 10 10\" width=\"10\" \
             xmlns=\"http://www.w3.org/2000/svg\"/>\n"
        );
    }
}
