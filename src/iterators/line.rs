use glam::{IVec2, UVec2};

/// Iterator over every grid cell the segment between two cell centers passes
/// through, in order from `start` to `end`.
///
/// Integer-only Bresenham stepping with a single running error term covering
/// all eight octants; both endpoints are included and each cell is visited
/// exactly once. Long segments cannot drift since no floating point is
/// accumulated.
#[derive(Debug, Clone)]
pub struct LineIterator {
    cell: IVec2,
    end: IVec2,
    step: IVec2,
    /// `|x1 - x0|`.
    dx: i32,
    /// `-|y1 - y0|`.
    dy: i32,
    err: i32,
    /// Ties (the ideal line passing exactly through a cell corner) must pick
    /// the same cell regardless of traversal direction, so the comparison is
    /// tightened by one when stepping in -x.
    bias: i32,
    done: bool,
}

impl LineIterator {
    pub fn new(start: UVec2, end: UVec2) -> Self {
        let start = start.as_ivec2();
        let end = end.as_ivec2();
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let step = IVec2::new(
            if start.x <= end.x { 1 } else { -1 },
            if start.y <= end.y { 1 } else { -1 },
        );
        let bias = i32::from(start.x > end.x);

        Self {
            cell: start,
            end,
            step,
            dx,
            dy,
            err: dx + dy,
            bias,
            done: false,
        }
    }
}

impl Iterator for LineIterator {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cell = self.cell.as_uvec2();
        if self.cell == self.end {
            self.done = true;
            return Some(cell);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy + self.bias {
            self.err += self.dy;
            self.cell.x += self.step.x;
        }
        if e2 <= self.dx - self.bias {
            self.err += self.dx;
            self.cell.y += self.step.y;
        }

        Some(cell)
    }
}
