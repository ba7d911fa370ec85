use framekit::{
    Alignment, Border, BorderSide, BorderStyle, Brush, Color, Edge, Error, Fill, FillKind, Gradient,
    Image, Radius,
};

fn red() -> Brush {
    Brush::solid(Color::rgb(255, 0, 0))
}

// ============================================================================
// Fragment Tests
// ============================================================================

#[test]
fn test_fragment_with_brush_and_radius() {
    let side = BorderSide::new(2.0, red())
        .style(BorderStyle::Solid)
        .radius(5.0);

    assert_eq!(
        side.style_fragment(),
        &[
            "width: 2".to_string(),
            "style: Solid".to_string(),
            "color: rgb(255, 0, 0)".to_string(),
            "radius: 5".to_string(),
        ]
    );
}

#[test]
fn test_side_edges_omit_radius() {
    let mut side = BorderSide::new(2.0, red())
        .style(BorderStyle::Solid)
        .radius(5.0);
    assert!(side.stylesheet().contains("radius: 5"));

    side.set_is_side(true);
    assert!(
        side.style_fragment().iter().all(|line| !line.contains("radius")),
        "left/right edges carry no radius"
    );
}

#[test]
fn test_pair_radius_emits_left_and_right() {
    let side = BorderSide::new(1.0, red()).radius([3.0, 4.0]);
    let fragment = side.style_fragment();
    assert!(fragment.contains(&"left-radius: 3".to_string()));
    assert!(fragment.contains(&"right-radius: 4".to_string()));
    assert!(!fragment.iter().any(|line| line.starts_with("radius")));
    assert!(side.radius_value().is_pair());
}

#[test]
fn test_default_style_and_radius() {
    let side = BorderSide::new(1.0, red());
    assert_eq!(side.border_style(), BorderStyle::None);
    assert_eq!(side.radius_value(), Radius::Uniform(0.0));
    assert_eq!(side.stylesheet(), "width: 1; style: None; color: rgb(255, 0, 0); radius: 0");
}

#[test]
fn test_image_fragment() {
    let side = BorderSide::new(3.0, Image::new("url(:/edge.png)").alignment(Alignment::TopLeft))
        .side(true);

    assert_eq!(
        side.style_fragment(),
        &[
            "width: 3".to_string(),
            "style: None".to_string(),
            "image: url(:/edge.png)".to_string(),
            "image-position: top left".to_string(),
        ]
    );
}

#[test]
fn test_gradient_brush_fragment() {
    let brush = Brush::gradient(Gradient::linear(0.0, 0.0, 1.0, 0.0).stop(0.0, "red"));
    let side = BorderSide::new(1.0, brush).side(true);
    assert!(side
        .style_fragment()
        .contains(&"color: qlineargradient(x1:0, y1:0, x2:1, y2:0, stop:0 red)".to_string()));
}

// ============================================================================
// Fill Exclusivity Tests
// ============================================================================

#[test]
fn test_image_clears_brush() {
    let mut side = BorderSide::new(1.0, red());
    side.set_image(Image::new("a.png")).unwrap();
    assert!(side.brush().is_none());
    assert_eq!(side.image().map(|i| i.url.as_str()), Some("a.png"));
}

#[test]
fn test_brush_clears_image() {
    let mut side = BorderSide::new(1.0, Image::new("a.png"));
    side.set_brush(red()).unwrap();
    assert!(side.image().is_none());
    assert!(side.brush().is_some());
    assert_eq!(side.fill().map(|f| f.kind()), Some(FillKind::Brush));
}

#[test]
fn test_wrong_fill_kind_is_rejected() {
    let mut side = BorderSide::new(1.0, red());
    let err = side.set_brush(Image::new("a.png")).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(side.brush().is_some(), "brush kept after rejection");

    let err = side.set_image(red()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(side.image().is_none());
}

// ============================================================================
// Setter / Cache Tests
// ============================================================================

#[test]
fn test_invalid_style_name_keeps_style() {
    let mut side = BorderSide::new(1.0, red()).style(BorderStyle::Dashed);
    let err = side.set_style_name("Wavy").unwrap_err();
    assert!(matches!(err, Error::InvalidEnum { kind: "BorderStyle", .. }));
    assert_eq!(side.border_style(), BorderStyle::Dashed);

    side.set_style_name("Groove").unwrap();
    assert_eq!(side.border_style(), BorderStyle::Groove);
}

#[test]
fn test_setters_invalidate_fragment() {
    let mut side = BorderSide::new(1.0, red());
    assert!(side.stylesheet().starts_with("width: 1;"));

    side.set_width(4.0);
    assert!(side.stylesheet().starts_with("width: 4;"));

    side.set_style(BorderStyle::Double);
    assert!(side.stylesheet().contains("style: Double"));

    side.set_radius((1.0, 2.0));
    assert!(side.stylesheet().contains("left-radius: 1"));

    side.set_fill(Image::new("b.png"));
    assert!(side.stylesheet().contains("image: b.png"));
}

#[test]
fn test_fragment_is_cached() {
    let side = BorderSide::new(1.0, red());
    let first = side.style_fragment().as_ptr();
    assert_eq!(first, side.style_fragment().as_ptr());
}

// ============================================================================
// Border Tests
// ============================================================================

#[test]
fn test_border_marks_sides() {
    let border = Border::uniform(BorderSide::new(1.0, red()).radius(2.0));
    assert!(!border.side(Edge::Top).is_side());
    assert!(border.side(Edge::Right).is_side());
    assert!(!border.side(Edge::Bottom).is_side());
    assert!(border.side(Edge::Left).is_side());
}

#[test]
fn test_border_stylesheet() {
    let border = Border::uniform(BorderSide::new(1.0, red()).style(BorderStyle::Solid));
    let stylesheet = border.stylesheet();
    let lines: Vec<_> = stylesheet.lines().collect();

    assert_eq!(lines[0], "border-top-width: 1;");
    assert_eq!(lines[1], "border-top-style: Solid;");
    assert_eq!(lines[2], "border-top-color: rgb(255, 0, 0);");
    assert_eq!(lines[3], "border-top-radius: 0;");
    assert_eq!(lines[4], "border-right-width: 1;");
    assert!(!stylesheet.contains("border-left-radius"));
    assert!(!stylesheet.contains("border-right-radius"));
    assert_eq!(lines.len(), 4 + 3 + 4 + 3);
}

#[test]
fn test_border_side_mut_recomposes() {
    let mut border = Border::uniform(BorderSide::new(1.0, red()));
    border.side_mut(Edge::Bottom).set_width(6.0);
    assert!(border.stylesheet().contains("border-bottom-width: 6;"));
    assert!(border.stylesheet().contains("border-top-width: 1;"));
}

#[test]
fn test_border_keeps_side_flag_per_edge() {
    let mut border = Border::uniform(BorderSide::new(1.0, red()).radius(4.0));
    border.side_mut(Edge::Left).set_is_side(false);
    border.side_mut(Edge::Top).set_is_side(true);

    let stylesheet = border.stylesheet();
    assert!(!stylesheet.contains("border-left-radius"), "left edge never has a radius");
    assert!(stylesheet.contains("border-top-radius: 4;"), "top edge keeps its radius");
}

// ============================================================================
// Fill Tests
// ============================================================================

#[test]
fn test_fill_stylesheet_per_kind() {
    let image = Image::new("url(:/bg.png)").alignment(Alignment::BottomRight);
    assert_eq!(
        image.stylesheet(),
        "image: url(:/bg.png); image-position: bottom right"
    );
    assert_eq!(Fill::from(image).stylesheet(), "image: url(:/bg.png); image-position: bottom right");
    assert_eq!(Fill::from(red()).stylesheet(), "color: rgb(255, 0, 0)");
}
