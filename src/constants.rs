/// DOM wiring constants for the web frontend.
///
/// Names and style fragments used when the surface is inserted into its
/// container, kept here so the DOM code reads as plain steps.
pub const WRAPPER_CLASS: &str = "shadedSurfaceWrapper";
pub const WRAPPER_STYLE: &str =
    "position:absolute;overflow:hidden;top:0px;bottom:0px;left:0px;right:0px";

// Container background before the lights come up
pub const CONTAINER_BACKGROUND: &str = "#000";

pub const RESIZE_EVENT: &str = "resize";

// WebGL vertex layout: vec2 position + vec4 color
pub const GL_POSITION_COMPONENTS: i32 = 2;
pub const GL_COLOR_COMPONENTS: i32 = 4;
