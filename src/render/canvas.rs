use std::{fmt::Display, fs::File, io::Write, path::Path};

use clap::ValueEnum;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::color::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major pixel grid; row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = color;
    }

    /// Fills every pixel from `fun(x, y)` in parallel. Each pixel is
    /// written exactly once, so rows need no synchronization.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        let iter = self.pixels.par_iter_mut().enumerate();

        match progressbar {
            Some(pb) => iter.progress_with(pb).for_each(|(id, pixel)| {
                *pixel = fun(id % width, id / width);
            }),
            None => iter.for_each(|(id, pixel)| {
                *pixel = fun(id % width, id / width);
            }),
        }
    }

    pub fn as_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.to_bytes())
            .collect()
    }

    pub fn save_to_file(&self, path: &Path, format: ImageFormat) -> std::io::Result<()> {
        let file = File::create(path)?;
        match format {
            ImageFormat::Ppm => self.save_to_ppm(file),
            ImageFormat::Png => self.save_to_png(file),
        }
    }

    fn ppm_data(&self) -> String {
        let mut data = format!("P3\n{} {}\n255\n", self.width, self.height);

        for row in self.pixels.chunks(self.width) {
            let line = row
                .iter()
                .flat_map(|color| color.to_bytes())
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            data.push_str(&line);
            data.push('\n');
        }
        data
    }

    pub fn save_to_ppm(&self, mut file: File) -> std::io::Result<()> {
        file.write_all(self.ppm_data().as_bytes())
    }

    pub fn save_to_png(&self, file: File) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(file, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer
            .write_image_data(&self.as_rgb_bytes())
            .map_err(|e| e.into())
    }
}
