use super::BorderSide;
use crate::types::Edge;

/// The four sides of a panel border.
#[derive(Debug, Clone)]
pub struct Border {
    top: BorderSide,
    right: BorderSide,
    bottom: BorderSide,
    left: BorderSide,
}

impl Border {
    /// Left and right are marked as sides, top and bottom are not.
    pub fn new(top: BorderSide, right: BorderSide, bottom: BorderSide, left: BorderSide) -> Self {
        Self {
            top: fit(Edge::Top, top),
            right: fit(Edge::Right, right),
            bottom: fit(Edge::Bottom, bottom),
            left: fit(Edge::Left, left),
        }
    }

    /// The same side on all four edges.
    pub fn uniform(side: BorderSide) -> Self {
        Self::new(side.clone(), side.clone(), side.clone(), side)
    }

    pub fn side(&self, edge: Edge) -> &BorderSide {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    pub fn side_mut(&mut self, edge: Edge) -> &mut BorderSide {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// Full border declarations, e.g. `border-top-width: 2;`, one per line.
    ///
    /// Each side is rendered with the side flag of its edge, whatever was
    /// set through [`side_mut`](Self::side_mut).
    pub fn stylesheet(&self) -> String {
        let mut lines = Vec::new();
        for edge in Edge::ALL {
            let side = self.side(edge);
            let refit;
            let side = if side.is_side() == edge.is_side() {
                side
            } else {
                refit = fit(edge, side.clone());
                &refit
            };
            for line in side.style_fragment() {
                lines.push(format!("border-{}-{line};", edge.as_str()));
            }
        }
        lines.join("\n")
    }
}

fn fit(edge: Edge, side: BorderSide) -> BorderSide {
    side.side(edge.is_side())
}
