/// Output size of an aspect-preserving fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSize {
    pub width: f32,
    pub height: f32,
}

/// Scale an image of natural size `natural_width × natural_height` to fit
/// inside `max_width × max_height` keeping its aspect ratio.
///
/// Landscape images are sized by width first and portrait (or square) by
/// height first; the other dimension is then capped. Unknown (zero)
/// dimensions fill the whole box.
pub fn fit_within(natural_width: f32, natural_height: f32, max_width: f32, max_height: f32) -> FittedSize {
    if natural_width <= 0.0 || natural_height <= 0.0 {
        return FittedSize {
            width: max_width,
            height: max_height,
        };
    }

    let aspect = natural_width / natural_height;
    let (mut width, mut height);

    if aspect > 1.0 {
        width = max_width;
        height = max_width / aspect;
        if height > max_height {
            height = max_height;
            width = max_height * aspect;
        }
    } else {
        height = max_height;
        width = max_height * aspect;
        if width > max_width {
            width = max_width;
            height = max_width / aspect;
        }
    }

    FittedSize { width, height }
}
