//! Utility functions

use std::path::PathBuf;
use tracing::warn;

// Target glyph over three rising bars, used for header logo and window icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><rect x="14" y="70" width="22" height="44" rx="3" fill="#5eead4"/><rect x="53" y="46" width="22" height="68" rx="3" fill="#2dd4bf"/><rect x="92" y="22" width="22" height="92" rx="3" fill="#14b8a6"/><circle cx="30" cy="30" r="20" fill="none" stroke="#a78bfa" stroke-width="6"/><circle cx="30" cy="30" r="7" fill="#a78bfa"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image (straight alpha).
pub fn rasterize_logo(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = match resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, "Failed to parse logo SVG");
            return None;
        }
    };
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Churn Dashboard")
}

/// Format a whole count with thousands separators, e.g. `10,000`
pub fn format_count(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(500.0), "500");
        assert_eq!(format_count(2500.0), "2,500");
        assert_eq!(format_count(10_000.0), "10,000");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
        assert_eq!(format_count(-3200.0), "-3,200");
    }

    #[test]
    fn test_rasterize_logo() {
        let (pixels, w, h) = rasterize_logo(64).expect("logo should rasterize");
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        assert!(pixels.chunks(4).any(|p| p[3] == 255));
    }
}
