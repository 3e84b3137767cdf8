//! Screen-space geometry for hit-testing the settings panel

/// Width of the slide-out panel in logical pixels
pub const PANEL_WIDTH: f32 = 616.0;

/// Side length of the square toggle control
pub const TOGGLE_SIZE: f32 = 48.0;

/// Gap between the toggle control and its surroundings
pub const TOGGLE_MARGIN: f32 = 12.0;

/// Horizontal room the toggle gutter takes to the right of the panel
pub const TOGGLE_GUTTER: f32 = TOGGLE_SIZE + 2.0 * TOGGLE_MARGIN;

/// Smallest window the shell allows, leaving article space beside the panel
pub const MIN_WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Where the open panel and its toggle control sit in the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel: Bounds,
    pub toggle: Bounds,
}

impl PanelLayout {
    /// Layout for a window of the given size
    ///
    /// The panel is anchored to the left edge at full height; the toggle
    /// sits just to its right. In windows narrower than the panel plus the
    /// toggle gutter the panel shrinks so the toggle stays on screen.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let panel_width = PANEL_WIDTH.min((width - TOGGLE_GUTTER).max(0.0));
        let panel = Bounds::new(0.0, 0.0, panel_width, height.max(0.0));
        let toggle = Bounds::new(
            panel.width + TOGGLE_MARGIN,
            TOGGLE_MARGIN,
            TOGGLE_SIZE,
            TOGGLE_SIZE,
        );
        Self { panel, toggle }
    }

    /// True when the point is on the panel or on its toggle control
    pub fn is_inside(&self, point: Point) -> bool {
        self.panel.contains(point) || self.toggle.contains(point)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::for_viewport(1200.0, 800.0)
    }
}
