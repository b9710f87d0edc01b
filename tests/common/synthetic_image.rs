/// Generates a white card image as a flat grayscale buffer.
pub fn white_card(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![255u8; width * height]
}

/// Paints an axis-aligned square of side `side` centered at `(cx, cy)` with
/// the given gray value. The square is clipped to the image.
pub fn paint_square(
    img: &mut [u8],
    width: usize,
    height: usize,
    cx: usize,
    cy: usize,
    side: usize,
    value: u8,
) {
    assert!(side > 0, "square side must be positive");
    let half = side / 2;
    let x0 = cx.saturating_sub(half);
    let y0 = cy.saturating_sub(half);
    let x1 = (x0 + side - 1).min(width - 1);
    let y1 = (y0 + side - 1).min(height - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            img[y * width + x] = value;
        }
    }
}

/// Paints an axis-aligned rectangle over inclusive pixel bounds.
pub fn paint_rect(
    img: &mut [u8],
    width: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    value: u8,
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img[y * width + x] = value;
        }
    }
}

/// White card with black squares at each of the given centers.
pub fn card_with_marks(
    width: usize,
    height: usize,
    centers: &[(usize, usize)],
    side: usize,
) -> Vec<u8> {
    let mut img = white_card(width, height);
    for &(cx, cy) in centers {
        paint_square(&mut img, width, height, cx, cy, side, 0);
    }
    img
}
