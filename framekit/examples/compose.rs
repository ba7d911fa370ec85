use framekit::{
    Border, BorderSide, BorderStyle, BoxLayout, BoxMode, Brush, Color, Frame, FrameTree, Gradient,
};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn main() -> framekit::Result<()> {
    SimpleLogger::init(LevelFilter::Trace, Config::default()).expect("Failed to initialize logger");

    let mut tree = FrameTree::new();
    let panels: Vec<_> = ["inbox", "preview", "details", "status"]
        .into_iter()
        .map(|name| tree.insert(Frame::new(name)))
        .collect();

    let mut layout = BoxLayout::builder("workspace")
        .size(1.0, 0.9)
        .children(panels.clone())
        .build(&mut tree)?;
    layout.set_mode(&mut tree, BoxMode::Grid);

    for id in &panels {
        let frame = &tree[*id];
        println!(
            "{:<8} x={:.2} y={:.2} w={:.2} h={:.2}",
            frame.name, frame.position.x, frame.position.y, frame.size.width, frame.size.height
        );
    }

    let accent = Gradient::linear(0.0, 0.0, 1.0, 0.0)
        .stop(0.0, Color::oklch(0.7, 0.15, 250.0))
        .stop(1.0, Color::named("palette(highlight)"));
    let border = Border::uniform(
        BorderSide::new(2.0, Brush::gradient(accent))
            .style(BorderStyle::Solid)
            .radius([4.0, 4.0]),
    );

    println!("{}", border.stylesheet());
    Ok(())
}
