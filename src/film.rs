use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::errors::Result;
use crate::math::RGBColor;

/// Largest channel value written to a PPM file.
pub const PPM_MAX_VALUE: u32 = 255;

/// Row-major grid of pixels, `height` rows of `width` columns, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for {}x{} film",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.buffer[self.index(row, col)]
    }

    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.buffer[row * self.width + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> &mut Self {
        let index = self.index(row, col);
        self.buffer[index] = value;
        self
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl Film<RGBColor> {
    /// Per channel minimum and maximum over every pixel.
    pub fn bounds(&self) -> (RGBColor, RGBColor) {
        let lowest = RGBColor::from(f64::INFINITY);
        let highest = RGBColor::from(f64::NEG_INFINITY);
        self.buffer
            .par_iter()
            .fold(
                || (lowest, highest),
                |(lo, hi), &c| (lo.zip_with(c, f64::min), hi.zip_with(c, f64::max)),
            )
            .reduce(
                || (lowest, highest),
                |(lo_a, hi_a), (lo_b, hi_b)| {
                    (lo_a.zip_with(lo_b, f64::min), hi_a.zip_with(hi_b, f64::max))
                },
            )
    }

    /// Linearly remaps each channel from its observed `[min, max]` onto `[0, 1]`.
    ///
    /// A channel with no spread (all pixels equal) uses a spread of 1, so it ends up at 0.
    pub fn normalize(&mut self) -> &mut Self {
        if self.buffer.is_empty() {
            return self;
        }
        let (lowest, highest) = self.bounds();
        let spread = highest.zip_with(lowest, |hi, lo| if hi - lo <= 0.0 { 1.0 } else { hi - lo });
        info!(?lowest, ?highest, "normalizing film");

        self.buffer.par_iter_mut().for_each(|pixel| {
            *pixel = pixel
                .zip_with(lowest, |value, lo| value - lo)
                .zip_with(spread, |value, s| value / s);
        });
        self
    }

    /// Writes the film as an ASCII PPM (`P3`) image, one pixel per line.
    ///
    /// Channels are multiplied by 255, truncated toward zero and clamped into `[0, 255]`.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "{}", PPM_MAX_VALUE)?;
        for pixel in self.buffer.iter() {
            let [r, g, b] = pixel.as_array().map(to_ppm_channel);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
        writer.flush()
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("saving ppm to {}", path.display());
        let file = File::create(path)?;
        self.write_ppm(BufWriter::new(file))?;
        Ok(())
    }

    /// 8 bit image with every channel clamped into `[0, 255]`.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let pixel = self.get(y as usize, x as usize);
            image::Rgb(pixel.as_array().map(to_ppm_channel))
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("saving png to {}", path.display());
        self.to_rgb_image().save(path)?;
        Ok(())
    }

    /// Writes the raw linear values, which keeps the range an unnormalized film carries.
    pub fn save_exr<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("saving exr to {}", path.display());
        exr::prelude::write_rgb_file(path, self.width, self.height, |x, y| {
            let pixel = self.get(y, x);
            (pixel.r as f32, pixel.g as f32, pixel.b as f32)
        })?;
        Ok(())
    }
}

fn to_ppm_channel(value: f64) -> u8 {
    ((value * PPM_MAX_VALUE as f64) as i64).clamp(0, PPM_MAX_VALUE as i64) as u8
}
