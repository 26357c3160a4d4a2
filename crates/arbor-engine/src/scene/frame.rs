use crate::paint::Rgba;

use super::{Bounds, EdgeInstance, NodeInstance};

/// Recorded node and edge instances for one draw call.
///
/// Paint order is insertion order. Edges are stored as a line list: every two
/// consecutive endpoints form one segment.
///
/// Performance characteristics:
/// - `push_*()` is O(1)
/// - `clear()` keeps allocated capacity, so a warmed frame does not allocate
#[derive(Debug, Default, Clone)]
pub struct GraphFrame {
    nodes: Vec<NodeInstance>,
    edges: Vec<EdgeInstance>,
}

impl GraphFrame {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded instances. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Nodes in paint order.
    #[inline]
    pub fn nodes(&self) -> &[NodeInstance] {
        &self.nodes
    }

    /// Edge endpoints in paint order (line list).
    #[inline]
    pub fn edges(&self) -> &[EdgeInstance] {
        &self.edges
    }

    /// Iterates `(start, end)` segments.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = (&EdgeInstance, &EdgeInstance)> {
        self.edges.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Records a node and returns its index for [`push_edge_between`](Self::push_edge_between).
    #[inline]
    pub fn push_node(&mut self, node: NodeInstance) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Records one segment.
    #[inline]
    pub fn push_edge(&mut self, start: EdgeInstance, end: EdgeInstance) {
        self.edges.push(start);
        self.edges.push(end);
    }

    /// Records a rich segment between two previously pushed nodes.
    ///
    /// Returns `false` (and records nothing) if either index is out of range.
    pub fn push_edge_between(&mut self, a: usize, b: usize, color: Rgba, line_width: f32) -> bool {
        let (Some(na), Some(nb)) = (self.nodes.get(a), self.nodes.get(b)) else {
            log::warn!(
                "edge {a}->{b} skipped: frame has {} nodes",
                self.nodes.len()
            );
            return false;
        };

        let start = EdgeInstance::rich(na.position, color, na.background, na.radius, line_width);
        let end = EdgeInstance::rich(nb.position, color, nb.background, nb.radius, line_width);
        self.push_edge(start, end);
        true
    }

    /// Remaps every node and edge position from its XY bounding box into
    /// `[-1, 1]²` (Y flipped). Returns the bounds used, or `None` if empty.
    pub fn fit_to_clip_space(&mut self) -> Option<Bounds> {
        let bounds = Bounds::of_points(
            self.nodes
                .iter()
                .map(|n| n.position)
                .chain(self.edges.iter().map(|e| e.position)),
        )?;

        for n in &mut self.nodes {
            n.position = bounds.to_clip(n.position);
        }
        for e in &mut self.edges {
            e.position = bounds.to_clip(e.position);
        }

        log::debug!(
            "fitted {} nodes / {} segments from bounds {:?}..{:?}",
            self.nodes.len(),
            self.segment_count(),
            bounds.min,
            bounds.max
        );
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::scene::NodeStyle;
    use super::*;

    fn node_at(x: f32, y: f32) -> NodeInstance {
        NodeInstance::new(Vec3::new(x, y, 0.0), &NodeStyle::default())
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn push_node_returns_sequential_indices() {
        let mut f = GraphFrame::new();
        assert_eq!(f.push_node(node_at(0.0, 0.0)), 0);
        assert_eq!(f.push_node(node_at(1.0, 0.0)), 1);
        assert_eq!(f.nodes().len(), 2);
    }

    #[test]
    fn edges_form_line_list_segments() {
        let mut f = GraphFrame::new();
        let a = EdgeInstance::simple(0.0, 0.0, 1.0, Rgba::black());
        let b = EdgeInstance::simple(1.0, 1.0, 1.0, Rgba::black());
        f.push_edge(a, b);
        f.push_edge(b, a);
        assert_eq!(f.segment_count(), 2);
        let segs: Vec<_> = f.segments().collect();
        assert_eq!(*segs[1].0, b);
        assert_eq!(*segs[1].1, a);
    }

    #[test]
    fn edge_between_copies_node_positions() {
        let mut f = GraphFrame::new();
        let a = f.push_node(node_at(0.0, 0.0));
        let b = f.push_node(node_at(4.0, 2.0));
        assert!(f.push_edge_between(a, b, Rgba::new(0.0, 1.0, 0.0, 1.0), 1.0));
        assert_eq!(f.edges()[1].position, Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(f.edges()[0].foreground, Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn edge_between_out_of_range_is_skipped() {
        let mut f = GraphFrame::new();
        f.push_node(node_at(0.0, 0.0));
        assert!(!f.push_edge_between(0, 7, Rgba::black(), 1.0));
        assert_eq!(f.segment_count(), 0);
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut f = GraphFrame::new();
        f.push_node(node_at(0.0, 0.0));
        f.clear();
        assert!(f.is_empty());
    }

    // ── fitting ───────────────────────────────────────────────────────────

    #[test]
    fn fit_maps_layout_into_clip_square() {
        let mut f = GraphFrame::new();
        let root = f.push_node(node_at(50.0, 0.0));
        let left = f.push_node(node_at(0.0, 10.0));
        let right = f.push_node(node_at(100.0, 10.0));
        f.push_edge_between(root, left, Rgba::black(), 1.0);
        f.push_edge_between(root, right, Rgba::black(), 1.0);

        let bounds = f.fit_to_clip_space().unwrap();
        assert_eq!(bounds.min, glam::Vec2::new(0.0, 0.0));
        assert_eq!(f.nodes()[root].position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(f.nodes()[left].position, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(f.nodes()[right].position, Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(f.edges()[3].position, f.nodes()[right].position);
    }

    #[test]
    fn fit_of_empty_frame_is_none() {
        assert!(GraphFrame::new().fit_to_clip_space().is_none());
    }
}
