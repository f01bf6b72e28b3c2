/// Fraction of the scroll offset the background layer follows.
const FACTOR: f64 = 0.30;

pub fn offset(scroll_y: f64) -> f64 {
    scroll_y * FACTOR
}

/// Inline style for the fixed background layer. Cosmetic only; the data
/// core never reads scroll state.
pub fn background_style(scroll_y: f64) -> String {
    format!(
        "background-image: url('/images/planet.png'); \
         background-size: 100% auto; \
         background-repeat: no-repeat; \
         background-position: center calc(50% + {:.1}px); \
         opacity: 0.8;",
        offset(scroll_y)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_linear_in_scroll_position() {
        assert_eq!(offset(0.0), 0.0);
        assert_eq!(offset(100.0), 30.0);
        assert_eq!(offset(1000.0), 300.0);
    }

    #[test]
    fn style_embeds_the_scaled_offset() {
        assert!(background_style(200.0).contains("calc(50% + 60.0px)"));
    }
}
