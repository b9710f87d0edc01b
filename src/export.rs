//! Export of a detected cell grid to interchange formats.
//!
//! - Text: one line per row, `1` = punched, newline-terminated.
//! - PNG: one pixel per cell, punched black on white.
//! - BMP: 24-bit uncompressed bottom-up with a BITMAPINFOHEADER, rows
//!   padded to 4-byte boundaries, BGR pixel order, 2835 pixels per meter.

use ::image::{GrayImage, Luma};
use std::fs;
use std::path::Path;

use crate::image::io::ensure_parent_dir;
use crate::types::CellGrid;

/// Render the grid as `0`/`1` characters, one newline-terminated line per
/// row.
pub fn grid_to_text(grid: &CellGrid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in grid.row_iter() {
        for &cell in row {
            out.push(if cell { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Encode the grid as a BMP file image, one pixel per cell.
pub fn grid_to_bmp(grid: &CellGrid) -> Vec<u8> {
    let w = grid.cols();
    let h = grid.rows();
    let stride = (3 * w + 3) / 4 * 4;
    let pixel_bytes = stride * h;
    let file_size = 54 + pixel_bytes;

    let mut out = Vec::with_capacity(file_size);
    // File header.
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&54u32.to_le_bytes());
    // BITMAPINFOHEADER.
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(pixel_bytes as u32).to_le_bytes());
    // 2835 pixels per meter, roughly 72 DPI.
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    // Pixel rows, bottom-up, BGR.
    for row_idx in (0..h).rev() {
        let mut written = 0;
        for col in 0..w {
            let v = if grid.get(row_idx, col) { 0u8 } else { 255u8 };
            out.extend_from_slice(&[v, v, v]);
            written += 3;
        }
        while written < stride {
            out.push(0);
            written += 1;
        }
    }
    out
}

/// Write the text rendition to `path`.
pub fn save_grid_text(grid: &CellGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, grid_to_text(grid))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Write a one-pixel-per-cell PNG, punched black on white.
pub fn save_grid_png(grid: &CellGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.cols().max(1) as u32, grid.rows().max(1) as u32);
    for (y, row) in grid.row_iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let v = if cell { 0u8 } else { 255u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write the BMP rendition to `path`.
pub fn save_grid_bmp(grid: &CellGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, grid_to_bmp(grid))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
