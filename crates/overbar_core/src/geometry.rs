//! Scroll geometry
//!
//! Pure math shared by the geometry synchronizer and the interaction
//! controller. Everything here is free of host state so the formulas can be
//! tested directly.

/// Width and height of the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Clamp the vertical span to `0..viewport_height`, keeping x/width.
    ///
    /// The result can have a non-positive height when the rectangle lies
    /// entirely outside the viewport.
    pub fn clamp_vertical(&self, viewport_height: f32) -> Rect {
        let top = self.y.max(0.0);
        let bottom = self.bottom().min(viewport_height);
        Rect {
            x: self.x,
            y: top,
            width: self.width,
            height: bottom - top,
        }
    }
}

/// Scroll metrics of a region at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset
    pub offset: f32,
    /// Content extent (scrollHeight equivalent)
    pub content: f32,
    /// Visible extent (clientHeight equivalent)
    pub viewport: f32,
}

impl ScrollMetrics {
    /// Maximum reachable scroll offset, never negative
    pub fn max_scroll(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    /// Whether there is anything to scroll
    pub fn is_scrollable(&self) -> bool {
        self.content > self.viewport
    }

    /// Scroll progress in `0.0..=1.0`; 0 when the range is degenerate
    pub fn ratio(&self) -> f32 {
        let max = self.max_scroll();
        if max > 0.0 {
            (self.offset / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Clamp a prospective offset into the valid scroll range
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }
}

/// Thumb geometry computed for one frame, relative to the track top
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    pub height: f32,
    pub offset: f32,
}

/// Compute the thumb for a track of `track` pixels.
///
/// The height is the visible proportion of the content, floored at
/// `min_thumb` and capped at the track itself; the offset distributes the
/// remaining travel by scroll progress.
pub fn thumb_geometry(metrics: &ScrollMetrics, track: f32, min_thumb: f32) -> ThumbGeometry {
    let track = track.max(0.0);
    let height = if metrics.content > 0.0 {
        ((metrics.viewport / metrics.content) * track)
            .max(min_thumb)
            .min(track)
    } else {
        track
    };
    let travel = (track - height).max(0.0);
    ThumbGeometry {
        height,
        offset: travel * metrics.ratio(),
    }
}

/// Translate a thumb drag into a target scroll offset.
///
/// `movable` is the thumb's travel range (track minus thumb height) and
/// `max_scroll` the region's scroll range. Returns `None` when either range
/// is degenerate, in which case the drag has no effect.
pub fn drag_target(
    anchor_offset: f32,
    pointer_delta: f32,
    movable: f32,
    max_scroll: f32,
) -> Option<f32> {
    if movable <= 0.0 || max_scroll <= 0.0 {
        return None;
    }
    let target = anchor_offset + (pointer_delta / movable) * max_scroll;
    Some(target.clamp(0.0, max_scroll))
}

/// Which way a track press pages: positive when the press is below the
/// thumb's bottom edge, negative otherwise
pub fn page_direction(pointer_y: f32, thumb_bottom: f32) -> f32 {
    if pointer_y > thumb_bottom {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_is_proportional_to_visible_share() {
        let metrics = ScrollMetrics {
            offset: 0.0,
            content: 2000.0,
            viewport: 500.0,
        };
        let thumb = thumb_geometry(&metrics, 300.0, 20.0);
        assert_eq!(thumb.height, 75.0);
        assert_eq!(thumb.offset, 0.0);
    }

    #[test]
    fn thumb_offset_tracks_scroll_ratio() {
        let metrics = ScrollMetrics {
            offset: 750.0,
            content: 2000.0,
            viewport: 500.0,
        };
        let thumb = thumb_geometry(&metrics, 300.0, 20.0);
        assert_eq!(thumb.offset, 112.5);
    }

    #[test]
    fn thumb_reaches_track_end_at_max_offset() {
        let metrics = ScrollMetrics {
            offset: 1500.0,
            content: 2000.0,
            viewport: 500.0,
        };
        let thumb = thumb_geometry(&metrics, 300.0, 20.0);
        assert_eq!(thumb.offset, 300.0 - thumb.height);
    }

    #[test]
    fn thumb_height_is_floored_and_capped() {
        let tiny_share = ScrollMetrics {
            offset: 0.0,
            content: 100_000.0,
            viewport: 100.0,
        };
        assert_eq!(thumb_geometry(&tiny_share, 300.0, 20.0).height, 20.0);

        // min_thumb larger than the track collapses onto the track
        let thumb = thumb_geometry(&tiny_share, 10.0, 20.0);
        assert_eq!(thumb.height, 10.0);
        assert_eq!(thumb.offset, 0.0);
    }

    #[test]
    fn drag_scales_delta_by_range_ratio() {
        // movable 225, range 1500: 30px of thumb travel is 200px of scroll
        let target = drag_target(0.0, 30.0, 225.0, 1500.0).unwrap();
        assert!((target - 200.0).abs() < 1e-3);
    }

    #[test]
    fn drag_clamps_to_scroll_range() {
        assert_eq!(drag_target(1400.0, 100.0, 225.0, 1500.0), Some(1500.0));
        assert_eq!(drag_target(50.0, -100.0, 225.0, 1500.0), Some(0.0));
    }

    #[test]
    fn degenerate_ranges_disable_dragging() {
        assert_eq!(drag_target(0.0, 10.0, 0.0, 1500.0), None);
        assert_eq!(drag_target(0.0, 10.0, -5.0, 1500.0), None);
        assert_eq!(drag_target(0.0, 10.0, 225.0, 0.0), None);
    }

    #[test]
    fn ratio_is_zero_without_scroll_range() {
        let metrics = ScrollMetrics {
            offset: 0.0,
            content: 500.0,
            viewport: 500.0,
        };
        assert_eq!(metrics.ratio(), 0.0);
        assert!(!metrics.is_scrollable());
    }

    #[test]
    fn clamp_vertical_trims_to_viewport() {
        let rect = Rect::new(10.0, -50.0, 400.0, 800.0);
        let clamped = rect.clamp_vertical(600.0);
        assert_eq!(clamped.y, 0.0);
        assert_eq!(clamped.height, 600.0);

        let offscreen = Rect::new(0.0, 700.0, 400.0, 100.0);
        assert!(offscreen.clamp_vertical(600.0).height <= 0.0);
    }

    #[test]
    fn track_press_pages_away_from_thumb() {
        assert_eq!(page_direction(250.0, 200.0), 1.0);
        assert_eq!(page_direction(150.0, 200.0), -1.0);
    }
}
