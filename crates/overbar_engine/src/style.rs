//! Overlay stylesheet
//!
//! Class names and the one-time stylesheet hiding native scrollbars on
//! tracked regions and styling overlay widgets. The track and arrows rest
//! at half width and expand under the pointer; arrows are only visible
//! while the widget is hovered.

use overbar_core::config::{Color, OverlayConfig};

/// Marker class suppressing a tracked region's native scrollbar
pub const CLASS_NATIVE_OFF: &str = "ob-native-off";
/// Overlay container
pub const CLASS_WIDGET: &str = "ob-sb";
pub const CLASS_ARROW: &str = "ob-sb-arrow";
pub const CLASS_TRACK: &str = "ob-sb-track";
pub const CLASS_THUMB: &str = "ob-sb-thumb";
/// Applied to the thumb while a drag session is live
pub const CLASS_THUMB_ACTIVE: &str = "active";

/// Render a color as a CSS `rgba()` value
fn rgba(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({},{},{},{})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

/// Render the overlay stylesheet for a config
pub fn stylesheet(config: &OverlayConfig) -> String {
    format!(
        r#".{native_off} {{ scrollbar-width: none !important; }}
.{native_off}::-webkit-scrollbar {{ display: none !important; }}

.{widget} {{
    position: fixed;
    width: {width}px;
    z-index: {z_index};
    display: flex;
    flex-direction: column;
    user-select: none;
    touch-action: none;
    background: transparent;
    pointer-events: none;
    box-sizing: border-box;
}}
.{widget} .{arrow}, .{widget} .{track} {{ pointer-events: auto; }}
.{widget} .{track}:hover {{ background: {hover_bg}; }}
.{widget}:hover .{track}, .{widget}:hover .{arrow} {{ width: {width}px; }}

.{arrow} {{
    height: {arrow_height}px;
    display: flex; visibility: hidden;
    align-items: center; justify-content: center;
    color: {idle}; cursor: default;
    width: {half_width}px;
    margin-left: auto;
    transition: width .2s;
}}
.{widget}:hover .{arrow} {{ visibility: visible; }}

.{track} {{
    flex: 1; position: relative;
    width: {half_width}px;
    margin-left: auto;
    transition: width .2s;
}}

.{thumb} {{
    position: absolute; width: 100%;
    background: {idle};
    border-radius: 10px;
}}
.{thumb}.{active} {{ background: {active_color}; }}
"#,
        native_off = CLASS_NATIVE_OFF,
        widget = CLASS_WIDGET,
        arrow = CLASS_ARROW,
        track = CLASS_TRACK,
        thumb = CLASS_THUMB,
        active = CLASS_THUMB_ACTIVE,
        width = config.width,
        half_width = config.width / 2.0,
        arrow_height = config.arrow_height,
        z_index = config.z_index,
        idle = rgba(config.idle_color),
        hover_bg = rgba(config.hover_background),
        active_color = rgba(config.active_color),
    )
}
