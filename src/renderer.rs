use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pbr::ProgressBar;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::film::Film;
use crate::math::{Point3, RGBColor};
use crate::scene::{Falloff, Scene};

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Samples per world unit along each axis.
    pub resolution: usize,
    /// Viewport extent in world units.
    pub width: usize,
    pub height: usize,
    pub eye: Point3,
    /// Reference point for the inverse square falloff, on the `depth = 0` plane.
    pub screen_center: Point3,
    pub normalize: bool,
    pub falloff: bool,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            resolution: 10,
            width: 100,
            height: 100,
            eye: Point3::new(0.0, 0.0, -200.0),
            screen_center: Point3::ORIGIN,
            normalize: true,
            falloff: true,
            show_progress: false,
        }
    }
}

impl RenderSettings {
    /// Film dimensions as (cols, rows).
    pub fn film_size(&self) -> (usize, usize) {
        (self.width * self.resolution, self.height * self.resolution)
    }

    pub fn falloff(&self) -> Falloff {
        if self.falloff {
            Falloff::InverseSquare {
                reference_distance: self.screen_center.distance(self.eye),
            }
        } else {
            Falloff::None
        }
    }

    /// World space point on the `depth = 0` plane that pixel (row, col) looks through.
    pub fn pixel_to_world(&self, row: usize, col: usize) -> Point3 {
        let resolution = self.resolution as f64;
        Point3::new(
            col as f64 / resolution - self.width as f64 / 2.0,
            row as f64 / resolution - self.height as f64 / 2.0,
            0.0,
        )
    }
}

/// Traces one ray per pixel from the eye through the viewport, optionally normalizing the result.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Film<RGBColor> {
    let (width, height) = settings.film_size();
    info!(
        "starting render with film resolution {}x{}, {} primitives",
        width,
        height,
        scene.len()
    );
    if scene.is_empty() {
        warn!("rendering an empty scene, every pixel will be black");
    }

    let now = Instant::now();
    let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::BLACK);
    let falloff = settings.falloff();
    let total_pixels = film.total_pixels();

    let pixel_count = Arc::new(AtomicUsize::new(0));
    let progress_thread = if settings.show_progress {
        let clone = pixel_count.clone();
        Some(thread::spawn(move || {
            let mut pb = ProgressBar::new(total_pixels as u64);
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_increment = clone.load(Ordering::Relaxed) - local_index;
                pb.add(pixels_to_increment as u64);
                local_index += pixels_to_increment;

                thread::sleep(Duration::from_millis(250));
            }
            pb.finish();
        }))
    } else {
        None
    };

    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(pixel_index, pixel_ref)| {
            let row = pixel_index / width;
            let col = pixel_index - width * row;
            let target = settings.pixel_to_world(row, col);
            *pixel_ref = scene.shoot_ray(settings.eye, target, falloff);
            pixel_count.fetch_add(1, Ordering::Relaxed);
        });

    if let Some(handle) = progress_thread {
        if let Err(panic) = handle.join() {
            warn!("progress bar thread panicked: {:?}", panic);
        }
    }
    info!("took {:.3}s", now.elapsed().as_secs_f32());

    if settings.normalize {
        film.normalize();
    }
    film
}
