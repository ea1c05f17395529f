use std::path::Path;

use crate::foundation::error::{PlotError, PlotResult};
use crate::render::backend::FrameRGBA;

/// Write `frame` as an RGBA PNG.
///
/// Plot frames are opaque, so premultiplied and straight alpha coincide; translucent pixels are
/// un-premultiplied before encoding.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> PlotResult<()> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(PlotError::encode(format!(
            "frame.data has {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let straight;
    let bytes = if frame.premultiplied && frame.data.chunks_exact(4).any(|p| p[3] != 255) {
        straight = unpremultiply(&frame.data);
        &straight
    } else {
        &frame.data
    };

    image::save_buffer_with_format(
        path,
        bytes,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PlotError::encode(format!("write png '{}': {e}", path.display())))
}

fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = premul.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}
