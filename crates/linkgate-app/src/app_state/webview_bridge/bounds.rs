//! Coordinate conversion between the window size and wry rects.

use winit::dpi::PhysicalSize;

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// A wry `Rect` covering the whole client area of a window.
pub fn fill_window_rect(size: PhysicalSize<u32>, scale_factor: f64) -> wry::Rect {
    let logical = size.to_logical::<f64>(scale_factor);
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(logical.width, logical.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_window_at_origin() {
        let rect = fill_window_rect(PhysicalSize::new(1024, 768), 1.0);

        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1024.0).abs() < f64::EPSILON);
                assert!((size.height - 768.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn divides_by_scale_factor() {
        let rect = fill_window_rect(PhysicalSize::new(2048, 1536), 2.0);

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1024.0).abs() < f64::EPSILON);
                assert!((size.height - 768.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn zero_size_converts_correctly() {
        let rect = fill_window_rect(PhysicalSize::new(0, 0), 1.5);

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!(size.width.abs() < f64::EPSILON);
                assert!(size.height.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
