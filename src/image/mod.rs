//! Time-of-day gradient bitmaps.
//!
//! Renders an uncompressed 24-bit BMP whose corner colors track how far
//! the given hour is from midday, blended across the image with eased
//! gradients. The output is a complete bitmap file: any standard image
//! viewer can decode it.

use anyhow::ensure;

/// BITMAPFILEHEADER is 14 bytes, BITMAPINFOHEADER is 40.
const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;

/// Offset of the pixel array from the start of the file.
pub const PIXEL_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// Renders a `width` x `height` bitmap for the given hour of day (0-23).
///
/// Pure function of its inputs; the caller supplies the wall-clock hour.
/// Rows are stored top-down (negative height in the info header) with
/// the stride padded to a 4-byte boundary, pixels in BGR order.
pub fn render(width: u32, height: u32, hour: u32) -> anyhow::Result<Vec<u8>> {
    ensure!(width > 0 && height > 0, "zero image dimension");
    ensure!(hour < 24, "hour {} out of range", hour);

    let stride = (width as usize * 3 + 3) & !3;
    let total = PIXEL_OFFSET + stride * height as usize;

    let mut data = Vec::with_capacity(total);

    // BITMAPFILEHEADER
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&(total as u32).to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes()); // bfReserved1
    data.extend_from_slice(&0u16.to_le_bytes()); // bfReserved2
    data.extend_from_slice(&(PIXEL_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER, negative height = top-down rows
    data.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    data.extend_from_slice(&(width as i32).to_le_bytes());
    data.extend_from_slice(&(-(height as i32)).to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // biPlanes
    data.extend_from_slice(&24u16.to_le_bytes()); // biBitCount
    data.extend_from_slice(&[0u8; 24]); // biCompression (BI_RGB) through biClrImportant

    let pad = stride - width as usize * 3;

    for i in 0..height {
        let y = fraction(i, height);

        for j in 0..width {
            let x = fraction(j, width);
            let [r, g, b] = pixel_color(x, y, hour);

            data.push(b);
            data.push(g);
            data.push(r);
        }

        data.extend(std::iter::repeat_n(0u8, pad));
    }

    Ok(data)
}

/// Position of index `i` within `0..n` as a 0.0..=1.0 fraction.
fn fraction(i: u32, n: u32) -> f64 {
    if n > 1 {
        f64::from(i) / f64::from(n - 1)
    } else {
        0.0
    }
}

/// Color at eased position (x, y) for the given hour.
///
/// The hour folds to its distance from midday, so 11:00 and 12:00 give
/// the brightest palette and 23:00 matches 0:00. Corner colors are
/// blended toward their night variants first, then across x and y.
fn pixel_color(x: f64, y: f64, hour: u32) -> [u8; 3] {
    let x = 1.0 - (1.0 - x).powi(3);
    let y = y.powi(3);

    let hr = if hour >= 12 { 23 - hour } else { hour };
    let z = 1.0 - f64::from(hr) / 11.0;

    let mut color = blend([255, 255, 64], [96, 96, 96], z);

    let right = blend([179, 212, 252], [16, 16, 16], z);
    color = blend(color, right, x);

    let ground = blend([83, 238, 87], [32, 96, 32], z);
    blend(color, ground, y)
}

fn blend(from: [u8; 3], to: [u8; 3], k: f64) -> [u8; 3] {
    let mix = |a: u8, b: u8| ((1.0 - k) * f64::from(a) + k * f64::from(b)) as u8;

    [
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
    ]
}
