//! Time-sliced, resumable image rendering.
//!
//! A [`RenderJob`] remembers which row comes next. Each call to
//! [`Raytracer::render`] continues from there until the image is finished or
//! the time budget runs out, so a caller can spread one image over many short
//! slices (e.g. between UI frames). Rows are written exactly once, bottom row
//! first.

use std::time::{Duration, Instant};

use crate::camera::PrimaryRays;
use crate::hittable::TraceLimits;
use crate::shader::trace;
use lumen_core::{Color, Scene, SceneError};
use lumen_math::Interval;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a light's attenuation coefficients turn into a divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttenuationModel {
    /// `constant + linear·d + quadratic·d²`
    #[default]
    Quadratic,
    /// `constant + linear·d + constant·d²`, reproducing scenes tuned against
    /// the older formula
    ConstantAsQuadratic,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum reflection depth
    pub max_depth: u32,
    /// Hits at or below this distance are ignored (self-intersection guard)
    pub slop: f32,
    /// Largest local hit distance accepted for triangles and models
    pub max_local_distance: f32,
    pub attenuation: AttenuationModel,
    /// Trace the pixels of each row on the rayon pool
    pub parallel: bool,
    /// Log progress every this many rows (0 disables)
    pub progress_interval: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            slop: 1e-6,
            max_local_distance: 100.0,
            attenuation: AttenuationModel::Quadratic,
            parallel: false,
            progress_interval: 64,
        }
    }
}

impl RenderConfig {
    pub fn limits(&self) -> TraceLimits {
        TraceLimits {
            slop: self.slop,
            max_local_distance: self.max_local_distance,
        }
    }
}

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("output buffer too small: need {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Progress of one image through the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    width: u32,
    height: u32,
    /// Next row to render; equals `height` once done
    current_row: u32,
}

impl RenderJob {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn current_row(&self) -> u32 {
        self.current_row
    }

    pub fn is_complete(&self) -> bool {
        self.current_row >= self.height
    }

    /// Fraction of rows rendered, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.current_row as f32 / self.height as f32
    }

    /// Size in bytes of the RGBA8 output buffer.
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// A zeroed buffer of the right size.
    pub fn allocate_buffer(&self) -> Vec<u8> {
        vec![0; self.buffer_len()]
    }
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1] and scaled linearly; alpha is always opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b, 255]
}

/// Whitted ray tracer over a borrowed scene.
#[derive(Debug, Clone)]
pub struct Raytracer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
}

impl<'a> Raytracer<'a> {
    /// Create a raytracer, validating the scene first.
    pub fn new(scene: &'a Scene, config: RenderConfig) -> RenderResult<Self> {
        scene.validate()?;
        Ok(Self { scene, config })
    }

    /// Start a new image.
    pub fn initialize(&self, width: u32, height: u32) -> RenderResult<RenderJob> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }

        log::info!(
            "Rendering '{}' at {}x{} (max depth {})",
            self.scene.name,
            width,
            height,
            self.config.max_depth
        );

        Ok(RenderJob {
            width,
            height,
            current_row: 0,
        })
    }

    /// Render rows of `job` into `buffer` until the image is done or `budget`
    /// has elapsed.
    ///
    /// `buffer` is row-major RGBA8 with row 0 at the bottom of the image. The
    /// budget is checked before each row, so a row in progress always
    /// finishes. `None` renders everything that is left. Returns whether the
    /// image is complete.
    pub fn render(
        &self,
        job: &mut RenderJob,
        buffer: &mut [u8],
        budget: Option<Duration>,
    ) -> RenderResult<bool> {
        // An unrepresentable deadline is as good as none
        let deadline = budget.and_then(|budget| Instant::now().checked_add(budget));
        self.render_slice(job, buffer, deadline, u32::MAX)
    }

    /// Render at most `max_rows` rows of `job`, ignoring time.
    ///
    /// The row-count counterpart of [`render`](Self::render), for callers
    /// that pace work by rows rather than by the clock.
    pub fn render_rows(
        &self,
        job: &mut RenderJob,
        buffer: &mut [u8],
        max_rows: u32,
    ) -> RenderResult<bool> {
        self.render_slice(job, buffer, None, max_rows)
    }

    fn render_slice(
        &self,
        job: &mut RenderJob,
        buffer: &mut [u8],
        deadline: Option<Instant>,
        max_rows: u32,
    ) -> RenderResult<bool> {
        let expected = job.buffer_len();
        if buffer.len() < expected {
            return Err(RenderError::BufferTooSmall {
                expected,
                actual: buffer.len(),
            });
        }

        let start = Instant::now();
        let first_row = job.current_row;

        let rays = PrimaryRays::new(&self.scene.camera, job.width, job.height);
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(&mut buffer[..expected]);
        let width = job.width as usize;

        loop {
            if job.is_complete() {
                if job.current_row > first_row {
                    log::info!("Render complete ({} rows)", job.height);
                }
                break;
            }
            if job.current_row - first_row >= max_rows {
                break;
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }

            let row = job.current_row;
            let offset = row as usize * width;
            self.render_row(&rays, row, &mut pixels[offset..offset + width]);
            job.current_row += 1;

            let interval = self.config.progress_interval;
            if interval > 0 && job.current_row % interval == 0 && !job.is_complete() {
                log::info!(
                    "Rendered {}/{} rows ({:.0}%)",
                    job.current_row,
                    job.height,
                    job.progress() * 100.0
                );
            }
        }

        log::debug!(
            "Slice rendered rows {}..{} in {:.2?}",
            first_row,
            job.current_row,
            start.elapsed()
        );

        Ok(job.is_complete())
    }

    /// Trace every pixel of one row.
    fn render_row(&self, rays: &PrimaryRays, row: u32, pixels: &mut [[u8; 4]]) {
        if self.config.parallel {
            pixels.par_iter_mut().enumerate().for_each(|(x, pixel)| {
                *pixel = self.trace_pixel(rays, x as u32, row);
            });
        } else {
            for (x, pixel) in pixels.iter_mut().enumerate() {
                *pixel = self.trace_pixel(rays, x as u32, row);
            }
        }
    }

    /// Final color of pixel `(x, y)`.
    pub fn trace_pixel(&self, rays: &PrimaryRays, x: u32, y: u32) -> [u8; 4] {
        let ray = rays.ray(x, y);
        color_to_rgba(trace(&ray, self.scene, self.config.max_depth, None, &self.config))
    }
}
