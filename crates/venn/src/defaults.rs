//! The six regions a session starts with when no configuration lists any.

use venn_core::{ellipse::Ellipse, geometry::Point};

/// Returns the built-in regions in display order.
pub fn default_ellipses() -> Vec<Ellipse> {
    [
        (
            "cultural",
            (200.0, 160.0),
            (80.0, 60.0),
            "rgba(192, 80, 77, 0.4)",
            "Cultural resilience &\nEE buy-in",
        ),
        (
            "leadership",
            (200.0, 400.0),
            (100.0, 80.0),
            "rgba(237, 125, 49, 0.4)",
            "Leadership alignment\nand buy-in",
        ),
        (
            "agile",
            (300.0, 280.0),
            (130.0, 100.0),
            "rgba(91, 155, 213, 0.4)",
            "Agile, Data-driven decision\nmaking",
        ),
        (
            "change",
            (350.0, 80.0),
            (150.0, 80.0),
            "rgba(155, 187, 89, 0.4)",
            "Change sustainability",
        ),
        (
            "robust",
            (500.0, 280.0),
            (170.0, 120.0),
            "rgba(165, 165, 165, 0.3)",
            "Robust activation\nframework",
        ),
        (
            "intent",
            (450.0, 450.0),
            (150.0, 80.0),
            "rgba(201, 218, 248, 0.5)",
            "Clear Strategic Intent",
        ),
    ]
    .into_iter()
    .map(|(id, (x, y), (rx, ry), fill, label)| {
        Ellipse::new(id, Point::new(x, y), rx, ry)
            .with_fill_style(fill)
            .with_label(label)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions() {
        let ellipses = default_ellipses();
        assert_eq!(ellipses.len(), 6);
        assert_eq!(ellipses[2].id(), "agile");
        assert_eq!(ellipses[2].flat_label(), "Agile, Data-driven decision making");
        assert!(ellipses.iter().all(|e| e.fill_style().is_some()));
    }
}
