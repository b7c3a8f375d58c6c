use bevy::math::{UVec2, Vec3};

use crate::{ar_error::ArError, GridConfig};

pub const MAX_HIT_TARGETS: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub struct HitTargetGridCell {
    pub cell: UVec2,
    pub position: Vec3,
}

pub fn validate_grid(config: &GridConfig) -> Result<(), ArError> {
    let cells = (config.width as usize).checked_mul(config.height as usize);
    if cells.map_or(true, |cells| cells > MAX_HIT_TARGETS) {
        return Err(ArError::GridTooLarge {
            width: config.width,
            height: config.height,
            max: MAX_HIT_TARGETS,
        });
    }
    Ok(())
}

/// Positions of a grid of targets in marker space, columns first so that
/// the index of cell (x, y) is `x * height + y`.
pub fn hit_target_grid(config: &GridConfig) -> Vec<HitTargetGridCell> {
    let GridConfig {
        width,
        height,
        size,
        space,
    } = *config;

    let mut cells = Vec::with_capacity(
        (width as usize)
            .saturating_mul(height as usize)
            .min(MAX_HIT_TARGETS),
    );
    for x in 0..width {
        for y in 0..height {
            cells.push(HitTargetGridCell {
                cell: UVec2::new(x, y),
                position: Vec3::new(
                    -(width as f32 * space * 0.5) + x as f32 * space,
                    -(height as f32 * space * 0.5) + y as f32 * space,
                    size * 0.5,
                ),
            });
        }
    }
    cells
}
