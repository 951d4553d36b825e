use crate::config::SurfaceConfig;
use crate::error::Result;
use crate::geometry::Mesh;
use rand::Rng;

/// Uniform sample in `[min, max)`; degenerate or reversed ranges are fine.
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Jitter every vertex by up to `distortion` px on x and y (rounded to whole
/// pixels) and assign its depth, then mark the geometry dirty.
///
/// Depth comes from `config.depth_transform` when set, called with the
/// already-distorted x/y; otherwise it is drawn from `[-depth, depth]`. A
/// failing transform aborts the pass and its error is returned as-is.
pub fn distort_mesh<R: Rng + ?Sized>(
    mesh: &mut Mesh,
    config: &SurfaceConfig,
    rng: &mut R,
) -> Result<()> {
    let distortion = config.distortion;
    let depth = config.depth;
    for vertex in mesh.geometry.vertices.iter_mut().rev() {
        let p = &mut vertex.position;
        p.x = (p.x + random_in_range(rng, -distortion, distortion)).round();
        p.y = (p.y + random_in_range(rng, -distortion, distortion)).round();
        p.z = match &config.depth_transform {
            Some(transform) => transform(p.x, p.y, depth)?,
            None => random_in_range(rng, -depth, depth),
        };
    }
    mesh.geometry.dirty = true;
    Ok(())
}
