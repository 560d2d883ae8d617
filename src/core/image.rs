//! Image width conversion to `\linewidth` fractions

/// Default image width, in percent of the line width.
pub const DEFAULT_IMAGE_WIDTH: f64 = 70.0;

/// Page width assumed when converting pixel widths.
pub const DEFAULT_PAGE_WIDTH_PIXELS: f64 = 800.0;

/// Width as written on an image node
#[derive(Debug, Clone, PartialEq)]
pub enum ImageWidth {
    /// Percent of the line width, or a fraction when below 1
    Number(f64),
    /// `"50%"`, `"400px"`
    Text(String),
}

impl From<f64> for ImageWidth {
    fn from(value: f64) -> Self {
        ImageWidth::Number(value)
    }
}

impl From<&str> for ImageWidth {
    fn from(value: &str) -> Self {
        ImageWidth::Text(value.to_string())
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn percent_of_line(width: f64) -> f64 {
    if width.is_nan() {
        return DEFAULT_IMAGE_WIDTH;
    }
    if width < 1.0 {
        width * 100.0
    } else {
        width
    }
}

/// Convert an image width to a LaTeX length such as `0.7\linewidth`.
///
/// Unknown units fall back to [`DEFAULT_IMAGE_WIDTH`] with a warning.
pub fn latex_image_width(width: Option<&ImageWidth>) -> String {
    let percent = match width {
        None => DEFAULT_IMAGE_WIDTH,
        Some(ImageWidth::Number(n)) => percent_of_line(*n),
        Some(ImageWidth::Text(text)) => {
            if let Some(raw) = text.strip_suffix('%') {
                percent_of_line(parse_number(raw))
            } else if let Some(raw) = text.strip_suffix("px") {
                percent_of_line(parse_number(raw) / DEFAULT_PAGE_WIDTH_PIXELS)
            } else {
                log::warn!("Unknown width {} in latex_image_width", text);
                DEFAULT_IMAGE_WIDTH
            }
        }
    };
    format!("{}\\linewidth", percent / 100.0)
}
