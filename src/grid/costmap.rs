use glam::{UVec2, Vec2};

use crate::types::{GridError, MapInfo};

/// Dense 2D cost grid with a world-to-cell coordinate mapping.
///
/// The grid is read-only for the lifetime of one scoring query; refreshing it
/// is the map provider's job, so no mutation API is exposed here.
#[derive(Debug, Clone)]
pub struct Costmap {
    info: MapInfo,
    data: Vec<u8>,
}

impl Costmap {
    pub fn new(info: MapInfo, data: Vec<u8>) -> Result<Self, GridError> {
        let expected_len = (info.width as usize) * (info.height as usize);
        if data.len() != expected_len {
            return Err(GridError::InvalidDimensions(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid of uniform cost, mostly useful as a test and bench base map.
    pub fn filled(info: MapInfo, value: u8) -> Self {
        let len = (info.width as usize) * (info.height as usize);
        Self {
            info,
            data: vec![value; len],
        }
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Cost at a cell, or `None` when the cell is out of bounds.
    pub fn cost(&self, cell: &UVec2) -> Option<u8> {
        if cell.x >= self.info.width || cell.y >= self.info.height {
            return None;
        }
        Some(self.data[self.index(cell)])
    }

    fn index(&self, cell: &UVec2) -> usize {
        (cell.y as usize) * (self.info.width as usize) + (cell.x as usize)
    }

    /// Center of a cell in world coordinates.
    pub fn map_to_world(&self, cell: &UVec2) -> Vec2 {
        self.info.origin + (cell.as_vec2() + 0.5) * self.info.resolution
    }

    /// Cell containing a world point, or `None` when the point falls outside
    /// the covered area.
    pub fn world_to_map(&self, pos: &Vec2) -> Option<UVec2> {
        let mx = (pos.x - self.info.origin.x) / self.info.resolution;
        let my = (pos.y - self.info.origin.y) / self.info.resolution;
        if mx < 0.0 || my < 0.0 || mx >= self.info.width as f32 || my >= self.info.height as f32 {
            return None;
        }
        Some(UVec2::new(mx as u32, my as u32))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
