//! Pinhole camera for ray generation and scene rendering

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::shading::ray_color;
use crate::vec3::{Point3, Vec3};

/// Linear f32 RGB image produced by [`Camera::render`].
pub type RenderedImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Viewport geometry shared by the camera and scene files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Viewport width over viewport height
    pub aspect_ratio: f32,
    /// Height of the viewport in world units
    pub viewport_height: f32,
    /// Distance from the eye to the viewport plane
    pub focal_length: f32,
    /// Eye position; rays start here
    pub origin: Point3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            viewport_height: 2.0,
            focal_length: 1.0,
            origin: Point3::ZERO,
        }
    }
}

impl CameraSettings {
    /// Image height matching `image_width` at this aspect ratio (at least 1).
    pub fn image_height_for(&self, image_width: u32) -> u32 {
        ((image_width as f32 / self.aspect_ratio) as u32).max(1)
    }
}

/// Fixed pinhole camera looking down -Z.
///
/// One ray per pixel, no sampling or defocus. The viewport is centered on the
/// -Z axis `focal_length` units in front of `origin`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Viewport geometry
    pub settings: CameraSettings,
    /// Draw a scanline progress bar on stderr while rendering
    pub show_progress: bool,

    /// Vector spanning the full viewport width
    horizontal: Vec3,
    /// Vector spanning the full viewport height
    vertical: Vec3,
    /// World position of the viewport's lower-left corner
    lower_left_corner: Point3,
}

impl Camera {
    /// Creates a camera for a `image_width` x `image_height` image.
    pub fn new(image_width: u32, image_height: u32, settings: CameraSettings) -> Self {
        let mut camera = Self {
            image_width,
            image_height,
            settings,
            show_progress: true,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            lower_left_corner: Point3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Recompute the viewport from the current settings.
    ///
    /// Called by [`Camera::new`] and [`Camera::render`]; call it again before
    /// [`Camera::get_ray`] after editing public fields.
    pub fn initialize(&mut self) {
        self.image_width = self.image_width.max(1);
        self.image_height = self.image_height.max(1);

        let s = &self.settings;
        let viewport_width = s.aspect_ratio * s.viewport_height;

        self.horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        self.vertical = Vec3::new(0.0, s.viewport_height, 0.0);
        self.lower_left_corner = s.origin
            - self.horizontal / 2.0
            - self.vertical / 2.0
            - Vec3::new(0.0, 0.0, s.focal_length);
    }

    /// Ray through viewport coordinates (u, v).
    ///
    /// (0, 0) is the lower-left corner and (1, 1) the upper-right.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let origin = self.settings.origin;
        Ray::new(
            origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - origin,
        )
    }

    /// Renders the scene, one primary ray per pixel.
    ///
    /// Image row 0 is the top scanline. Returns linear f32 RGB values.
    pub fn render(&mut self, world: &dyn Hittable) -> RenderedImage {
        self.initialize();

        let (width, height) = (self.image_width, self.image_height);
        let mut image: RenderedImage = ImageBuffer::new(width, height);

        info!("Casting {} rays ({}x{})...", width as u64 * height as u64, width, height);
        debug!(
            "Viewport: lower-left {:?}, horizontal {:?}, vertical {:?}",
            self.lower_left_corner, self.horizontal, self.vertical
        );
        let generation_start = std::time::Instant::now();

        let pb = if self.show_progress {
            ProgressBar::new(height as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("Scanlines {bar:40} {pos}/{len} ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        // Single-pixel dimensions would divide by zero
        let u_span = (width - 1).max(1) as f32;
        let v_span = (height - 1).max(1) as f32;

        for y in 0..height {
            let j = height - 1 - y;
            for i in 0..width {
                let r = self.get_ray(i as f32 / u_span, j as f32 / v_span);
                let pixel_color = ray_color(&r, world);
                image.put_pixel(i, y, Rgb(pixel_color.to_array()));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}
