// Grid layout engine shared by the preview and the SVG export.
// Pure functions only; nothing here touches the fragment cache.

pub mod grid;

