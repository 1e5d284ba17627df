use image::Rgb;

/// Parse a CSS color string into an RGB pixel.
///
/// Accepts everything CSS does: hex (`#rgb`, `#rrggbb`, `#rrggbbaa`), `rgb()`, `hsl()`, `hsv()`,
/// `hwb()` and the named colors. Any alpha is discarded, the canvas has no alpha channel.
pub fn parse_color(input: &str) -> Option<Rgb<u8>> {
    let color = csscolorparser::parse(&input.trim().to_lowercase()).ok()?;
    let [r, g, b, _a] = color.to_rgba8();
    Some(Rgb([r, g, b]))
}
