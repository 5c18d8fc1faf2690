//! Pointer input handling

/// Convert a pointer's viewport y into playfield y
///
/// The canvas may be displayed at a CSS size different from its backing
/// size, so the offset is rescaled by `field_height / rect_height`.
pub fn pointer_to_field_y(client_y: f64, rect_top: f64, rect_height: f64, field_height: f32) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        (offset * field_height as f64 / rect_height) as f32
    } else {
        offset as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_canvas_top() {
        assert_eq!(pointer_to_field_y(350.0, 100.0, 500.0, 500.0), 250.0);
    }

    #[test]
    fn test_scaled_canvas() {
        // Canvas backing height 500 shown at 250 CSS pixels
        assert_eq!(pointer_to_field_y(150.0, 50.0, 250.0, 500.0), 200.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        assert_eq!(pointer_to_field_y(40.0, 100.0, 500.0, 500.0), -60.0);
    }

    #[test]
    fn test_collapsed_rect_falls_back_to_raw_offset() {
        assert_eq!(pointer_to_field_y(120.0, 20.0, 0.0, 500.0), 100.0);
    }
}
