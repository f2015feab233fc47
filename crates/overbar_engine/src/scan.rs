//! Scrollable-region discovery

use overbar_core::region::Region;
use overbar_platform::{HostDocument, Result};

use crate::engine::Engine;
use crate::registry::OverlayWidget;

impl<H: HostDocument> Engine<H> {
    /// Walk the document for scrollable regions and attach overlay widgets
    /// to unseen ones.
    ///
    /// Idempotent: processed regions are skipped in O(1). The full-tree
    /// walk is the cost model; the observer bridge keeps invocations to one
    /// per mutation quiet period.
    pub fn scan(&mut self, host: &mut H) -> Result<()> {
        // The window always gets its widget; it stays hidden while the
        // document does not overflow.
        self.attach(host, Region::Window)?;

        for node in host.nodes() {
            let region = Region::Element(node);
            if self.registry.is_processed(region) {
                continue;
            }

            // Structural rule-outs hold until a navigation reset.
            if host.is_document_root(node)
                || host.has_overlay_marker(node)
                || host.has_foreign_scrollbar(node)
            {
                self.registry.mark_processed(region);
                continue;
            }

            // Non-qualification is not marked: content growth or late
            // styling can still qualify the node on a later rescan.
            if !host.overflow(node).either_scrollable() {
                continue;
            }
            let metrics = host.metrics(region);
            if !metrics.is_scrollable() {
                continue;
            }
            if metrics.viewport < self.config.min_region_extent {
                continue;
            }

            self.attach(host, region)?;
        }
        Ok(())
    }

    fn attach(&mut self, host: &mut H, region: Region<H::NodeId>) -> Result<()> {
        if self.registry.is_processed(region) {
            return Ok(());
        }
        let host_widget = host.create_widget(region)?;
        host.suppress_native_scrollbar(region);
        host.observe_scroll(region);
        host.observe_resize(region);
        self.registry.insert(OverlayWidget::new(region, host_widget));
        self.registry.mark_processed(region);
        tracing::debug!(region = ?region, "attached overlay widget");
        Ok(())
    }
}
