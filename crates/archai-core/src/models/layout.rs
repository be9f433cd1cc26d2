use serde::{Deserialize, Serialize};

use super::SiteConstraints;

/// Site width used when the project has no boundary information
pub const DEFAULT_SITE_WIDTH: f64 = 20.0;

/// Site length used when the project has no boundary information
pub const DEFAULT_SITE_LENGTH: f64 = 15.0;

/// A single room placed within a layout, in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    /// Area as supplied by the model. Not reconciled with `width * height`.
    #[serde(default)]
    pub area: f64,
}

impl RoomGeometry {
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            area: width * height,
        }
    }

    /// Override the stored area
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// Far x edge of the room
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Far y edge of the room
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Site dimensions attached to a generated layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SITE_WIDTH,
            length: DEFAULT_SITE_LENGTH,
        }
    }
}

impl Dimensions {
    /// Take site width/length, falling back to the 20 x 15 default per axis
    pub fn from_site(site: &SiteConstraints) -> Self {
        Self {
            width: site.width.unwrap_or(DEFAULT_SITE_WIDTH),
            length: site.length.unwrap_or(DEFAULT_SITE_LENGTH),
        }
    }
}

/// One candidate floor-plan solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Total built-up area in square meters
    pub total_area: f64,

    pub rooms: Vec<RoomGeometry>,

    /// Rendered SVG drawing, empty until the layout has been rendered
    #[serde(default)]
    pub svg_content: String,

    #[serde(default)]
    pub dimensions: Dimensions,
}

impl Layout {
    pub fn new(name: impl Into<String>, total_area: f64, rooms: Vec<RoomGeometry>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            total_area,
            rooms,
            svg_content: String::new(),
            dimensions: Dimensions::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_rendered(&self) -> bool {
        !self.svg_content.is_empty()
    }
}
