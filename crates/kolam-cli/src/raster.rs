//! PNG output via resvg.

use anyhow::{Context, Result};
use tiny_skia::{Color, Pixmap};

/// Rasterize `svg` scaled to `width` pixels, keeping its aspect ratio.
///
/// `backdrop` is painted under the drawing; `None` keeps the pixels
/// the SVG leaves uncovered fully transparent.
pub fn rasterize(svg: &str, width: u32, backdrop: Option<Color>) -> Result<Pixmap> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("failed to parse generated SVG")?;

    let size = tree.size();
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate a {width}x{height} image"))?;
    if let Some(color) = backdrop {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// [`rasterize`], encoded as PNG bytes.
pub fn svg_to_png(svg: &str, width: u32, backdrop: Option<Color>) -> Result<Vec<u8>> {
    let pixmap = rasterize(svg, width, backdrop)?;
    let png = pixmap.encode_png().context("failed to encode PNG")?;
    tracing::debug!(width, height = pixmap.height(), bytes = png.len(), "encoded png");
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolamru::render::svg::render_svg;
    use kolamru::{GridConfig, SvgOptions, grid_kolam};

    fn bare_grid() -> String {
        let scene = grid_kolam(&GridConfig::default()).unwrap();
        render_svg(
            &scene,
            SvgOptions {
                background: None,
                ..SvgOptions::default()
            },
        )
    }

    #[test]
    fn renders_png_at_requested_width() {
        let svg = kolamru::grid_kolam_svg(&GridConfig::default()).unwrap();
        let png = svg_to_png(&svg, 200, Some(Color::WHITE)).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        // the default grid is square, up to f32 rounding
        let pixmap = rasterize(&svg, 200, None).unwrap();
        assert_eq!(pixmap.width(), 200);
        assert!(pixmap.height().abs_diff(200) <= 1);
    }

    #[test]
    fn backdrop_fills_uncovered_pixels() {
        let svg = bare_grid();
        let clear = rasterize(&svg, 100, None).unwrap();
        assert_eq!(clear.pixel(0, 0).unwrap().alpha(), 0);

        let white = rasterize(&svg, 100, Some(Color::WHITE)).unwrap();
        let corner = white.pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.alpha()), (255, 255));
    }

    #[test]
    fn titles_with_control_characters_still_rasterize() {
        let config = GridConfig {
            title: Some("Kolam\u{1} \u{1b}[31mred".to_string()),
            ..GridConfig::default()
        };
        let svg = kolamru::grid_kolam_svg(&config).unwrap();
        assert!(svg_to_png(&svg, 120, Some(Color::WHITE)).is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(svg_to_png("not svg", 100, None).is_err());
    }
}
