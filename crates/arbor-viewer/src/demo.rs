//! Synthetic search tree used by the viewer.
//!
//! Nodes alternate between two players below a neutral root and carry a
//! visit count. Layout is a tidy layered one: leaves take consecutive
//! columns, parents sit midway over their first and last child.

use arbor_engine::paint::Rgba;
use arbor_engine::scene::{GraphFrame, NodeInstance, NodeStyle};
use glam::Vec3;

/// Visit fractions below this are lifted by the same amount so weak
/// branches stay visible.
const MIN_VISIBLE_FRACTION: f32 = 0.3;

const ROOT_FILL: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl Player {
    fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    fn fill(self) -> Rgba {
        match self {
            Player::First => Rgba::white(),
            Player::Second => Rgba::black(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Player who made the move into this node; `None` for the root.
    pub player: Option<Player>,
    pub visits: u32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Largest visit count below the root.
    fn max_child_visits(&self) -> u32 {
        self.children
            .iter()
            .map(|c| c.visits.max(c.max_child_visits()))
            .max()
            .unwrap_or(0)
    }
}

/// Builds a deterministic tree of the given depth.
///
/// Branching shrinks with depth (3, 3, 2, 2, ...) and visits are split
/// unevenly between siblings the way a search concentrates on one line.
pub fn sample_tree(depth: u32) -> TreeNode {
    fn grow(player: Option<Player>, visits: u32, depth: u32, level: u32) -> TreeNode {
        let mut node = TreeNode {
            player,
            visits,
            children: Vec::new(),
        };
        if level >= depth || visits < 2 {
            return node;
        }

        let branching = if level < 2 { 3 } else { 2 };
        let next = player.map_or(Player::First, Player::other);
        let mut remaining = visits - 1;
        for i in 0..branching {
            let share = if i + 1 == branching { remaining } else { remaining / 2 };
            remaining -= share;
            node.children.push(grow(Some(next), share, depth, level + 1));
        }
        node
    }

    grow(None, 200, depth, 0)
}

/// Edge color for a child with `visits` out of `max_visits`: red for rarely
/// visited, green for the most visited.
pub fn edge_color(visits: u32, max_visits: u32) -> Rgba {
    let mut fraction = if max_visits == 0 {
        0.0
    } else {
        visits as f32 / max_visits as f32
    };
    if fraction < MIN_VISIBLE_FRACTION {
        fraction += MIN_VISIBLE_FRACTION;
    }
    Rgba::new(1.0 - fraction, fraction, 0.0, 1.0)
}

/// Lays `tree` out and records it into a new frame in layout coordinates
/// (x = column, y = depth). Call `GraphFrame::fit_to_clip_space` before drawing.
pub fn build_frame(tree: &TreeNode, style: &NodeStyle) -> GraphFrame {
    struct Builder<'a> {
        frame: GraphFrame,
        style: &'a NodeStyle,
        next_leaf: f32,
        max_visits: u32,
    }

    impl Builder<'_> {
        /// Pushes `node` and its subtree; returns the node's index and column.
        fn visit(&mut self, node: &TreeNode, depth: f32) -> (usize, f32) {
            let children: Vec<(usize, f32, u32)> = node
                .children
                .iter()
                .map(|c| {
                    let (idx, x) = self.visit(c, depth + 1.0);
                    (idx, x, c.visits)
                })
                .collect();

            let x = match (children.first(), children.last()) {
                (Some(first), Some(last)) => (first.1 + last.1) * 0.5,
                _ => {
                    let x = self.next_leaf;
                    self.next_leaf += 1.0;
                    x
                }
            };

            let fill = node.player.map_or(ROOT_FILL, Player::fill);
            let position = Vec3::new(x, depth, 0.0);
            let node = NodeInstance::new(position, self.style)
                .with_background(fill);
            let idx = self.frame.push_node(node);

            for (child, _, visits) in children {
                let color = edge_color(visits, self.max_visits);
                self.frame.push_edge_between(idx, child, color, 1.0);
            }
            (idx, x)
        }
    }

    let mut builder = Builder {
        frame: GraphFrame::new(),
        style,
        next_leaf: 0.0,
        max_visits: tree.max_child_visits(),
    };
    builder.visit(tree, 0.0);

    log::debug!(
        "demo tree: {} nodes, {} edges, max visits {}",
        tree.len(),
        builder.frame.segment_count(),
        builder.max_visits
    );
    builder.frame
}
