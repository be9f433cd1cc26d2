//! SVG rendering of layouts
//!
//! Output is a pure function of the layout: the same rooms always produce the
//! same bytes, so stored drawings can be compared or regenerated at will.

use crate::models::layout::{DEFAULT_SITE_LENGTH, DEFAULT_SITE_WIDTH};
use crate::models::{Layout, RoomGeometry};

/// Pixels per meter
pub const SCALE: f64 = 40.0;

/// Total padding added to each canvas dimension
pub const MARGIN: f64 = 100.0;

/// Offset of the drawing origin from the canvas edge
pub const OFFSET: f64 = MARGIN / 2.0;

/// Room fill colours, cycled by room position
pub const PALETTE: [&str; 7] = [
    "#e3f2fd", "#f3e5f5", "#e8f5e9", "#fff3e0", "#fce4ec", "#e0f2f1", "#f1f8e9",
];

/// Canvas width and height in pixels for a set of rooms
pub fn canvas_size(rooms: &[RoomGeometry]) -> (f64, f64) {
    let (max_x, max_y) = if rooms.is_empty() {
        (DEFAULT_SITE_WIDTH, DEFAULT_SITE_LENGTH)
    } else {
        rooms.iter().fold((f64::NEG_INFINITY, f64::NEG_INFINITY), |(mx, my), room| {
            (mx.max(room.max_x()), my.max(room.max_y()))
        })
    };

    (max_x * SCALE + MARGIN, max_y * SCALE + MARGIN)
}

/// Fill colour for the room at `index`
pub fn room_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Render a layout's rooms as an SVG document
pub fn render_layout(layout: &Layout) -> String {
    let (width, height) = canvas_size(&layout.rooms);

    let mut svg = String::with_capacity(512 + layout.rooms.len() * 384);
    svg.push_str(&format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        width, height
    ));
    svg.push_str("<defs>");
    svg.push_str(r#"<pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">"#);
    svg.push_str(r##"<path d="M 40 0 L 0 0 0 40" fill="none" stroke="#e0e0e0" stroke-width="0.5"/>"##);
    svg.push_str("</pattern>");
    svg.push_str("</defs>");
    svg.push_str(&format!(r#"<rect width="{}" height="{}" fill="url(#grid)"/>"#, width, height));

    for (idx, room) in layout.rooms.iter().enumerate() {
        render_room(&mut svg, idx, room);
    }

    svg.push_str("</svg>");
    svg
}

/// Render every layout in place, filling `svg_content`
pub fn render_layouts(layouts: &mut [Layout]) {
    for layout in layouts.iter_mut() {
        layout.svg_content = render_layout(layout);
    }
}

fn render_room(svg: &mut String, idx: usize, room: &RoomGeometry) {
    let x = room.x * SCALE + OFFSET;
    let y = room.y * SCALE + OFFSET;
    let width = room.width * SCALE;
    let height = room.height * SCALE;

    svg.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="#424242" stroke-width="2" rx="2"/>"##,
        x,
        y,
        width,
        height,
        room_color(idx)
    ));

    let text_x = x + width / 2.0;
    let text_y = y + height / 2.0;
    svg.push_str(&format!(
        r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial" font-size="12" font-weight="bold" fill="#212121">{}</text>"##,
        text_x,
        text_y,
        escape_xml(&room.name)
    ));
    svg.push_str(&format!(
        r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial" font-size="10" fill="#616161">{:.1} m²</text>"##,
        text_x,
        text_y + 15.0,
        room.area
    ));
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
