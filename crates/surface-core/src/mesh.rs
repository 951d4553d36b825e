use crate::config::SurfaceConfig;
use crate::constants::MAX_GRID_CELLS;
use crate::error::{Result, SurfaceError};
use crate::geometry::{Material, Mesh, Plane};

/// Grid cell counts for a container of `width × height`:
/// `floor(width / cellsize)` columns and `floor(height / cellsize)` rows.
/// Grids over [`MAX_GRID_CELLS`] cells are a configuration error.
pub fn grid_counts(config: &SurfaceConfig, width: f64, height: f64) -> Result<(u32, u32)> {
    if !config.cellsize.is_finite() || config.cellsize <= 0.0 {
        return Err(SurfaceError::Configuration(format!(
            "cellsize must be a positive number, got {}",
            config.cellsize
        )));
    }
    let columns = (width.max(0.0) / config.cellsize).floor();
    let rows = (height.max(0.0) / config.cellsize).floor();
    if columns.max(1.0) * rows.max(1.0) > MAX_GRID_CELLS as f64 {
        return Err(SurfaceError::Configuration(format!(
            "cellsize {} gives a {columns}x{rows} grid for {width}x{height}; at most {MAX_GRID_CELLS} cells are allowed",
            config.cellsize
        )));
    }
    Ok((columns as u32, rows as u32))
}

pub fn make_material(config: &SurfaceConfig) -> Material {
    Material::new(
        config.material_ambient,
        config.material_diffuse,
        config.fill_opacity,
        config.stroke_opacity,
        config.stroke_width,
    )
}

/// Build the undistorted mesh for a container of `width × height`, padded by
/// `distortion` on every edge. Pure: identical inputs give identical meshes.
pub fn generate_mesh(config: &SurfaceConfig, width: f64, height: f64) -> Result<Mesh> {
    let (columns, rows) = grid_counts(config, width, height)?;
    let pad = 2.0 * config.distortion;
    let geometry = Plane::new(width + pad, height + pad, columns, rows);
    log::debug!(
        "[mesh] {}x{} container -> {:.0}x{:.0} plane, {}x{} cells",
        width,
        height,
        geometry.width,
        geometry.height,
        geometry.columns,
        geometry.rows
    );
    Ok(Mesh::new(geometry, make_material(config)))
}
