use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Look up an embedded SVG icon by name.
pub fn icon(name: &str) -> Svg<'static> {
    let file = ICONS
        .get_file(format!("{name}.svg"))
        .unwrap_or_else(|| panic!("missing icon: {name}"));

    Svg::new(svg::Handle::from_memory(file.contents()))
        .width(16)
        .height(16)
}
