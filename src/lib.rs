// Copyright 2026 the vibrancy authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract and classify prominent color swatches from an image.
//!
//! Given an RGBA pixel buffer, the crate reduces it to a bounded set of
//! representative colors with population counts, then matches those against six
//! built-in saturation/lightness profiles (vibrant, muted and their light/dark
//! variants) to produce a [`Palette`] suitable for theming UI around image
//! content. Every swatch carries readable title and body text colors chosen by
//! WCAG contrast.
//!
//! ```no_run
//! use vibrancy::PaletteBuilder;
//!
//! let img = image::open("cover.jpg").unwrap().to_rgba8();
//! let palette = PaletteBuilder::from_image(img).generate();
//!
//! if let Some(vibrant) = palette.vibrant_swatch() {
//!     println!("vibrant: {:?} over {:?}", vibrant.rgb(), vibrant.title_text_color());
//! }
//! ```
//!
//! Two quantization strategies are available: the default bucketed histogram
//! with nearest-pair merging, and a fixed-iteration k-means clustering path
//! ([`KmeansQuantizer`]) that classifies cluster centers by thresholding. The
//! histogram path is fully deterministic; the k-means path is deterministic
//! once seeded.

mod color;
mod error;
mod filter;
mod kmeans;
mod quantizer;
mod region;
mod swatch;
mod target;

pub const DEFAULT_MAXIMUM_COLOR_COUNT: usize = 16;
pub const DEFAULT_RESIZE_IMAGE_AREA: u32 = 112 * 112;

pub use crate::{
    color::{
        contrast_ratio, distance, luminance, rgb_to_hsl, text_color_for, MIN_CONTRAST_BODY_TEXT,
        MIN_CONTRAST_TITLE_TEXT,
    },
    error::ConfigError,
    filter::{DefaultFilter, Filter},
    kmeans::KmeansQuantizer,
    quantizer::HistogramQuantizer,
    region::Region,
    swatch::Swatch,
    target::{NamedTarget, TargetProfile},
};
pub use image;
pub use palette;

use image::GenericImageView;
use kmeans::KmeansExtraction;
use tracing::debug;

/// The quantization strategy a [`PaletteBuilder`] runs.
#[derive(Debug, Clone, Copy)]
pub enum Quantizer {
    /// Bucketed histogram with nearest-pair merging. Deterministic.
    Histogram,
    /// Fixed-iteration k-means clustering with threshold classification.
    Kmeans(KmeansQuantizer),
}

impl Default for Quantizer {
    fn default() -> Self {
        Quantizer::Histogram
    }
}

/// The set of swatches extracted from an image, along with the best-matching
/// swatch for each configured target profile and the dominant swatch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
    targets: Vec<TargetProfile>,
    selections: Vec<(TargetProfile, Swatch)>,
    dominant: Option<Swatch>,
}

/// Configures and runs palette generation over an RGBA image.
///
/// Every configuration method consumes the builder and validates its argument on
/// the spot, returning [`ConfigError`] for invalid values; [`generate`] itself
/// cannot fail. Degenerate inputs (a fully transparent or fully filtered image)
/// produce an empty palette.
///
/// [`generate`]: PaletteBuilder::generate
pub struct PaletteBuilder {
    image: image::RgbaImage,
    targets: Vec<TargetProfile>,
    maximum_color_count: usize,
    resize_area: u32,
    region: Option<Region>,
    filters: Vec<Box<dyn Filter>>,
    quantizer: Quantizer,
}

impl Palette {
    pub fn from_image(image: image::RgbaImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    /// The quantizer's output, in its original order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn targets(&self) -> &[TargetProfile] {
        &self.targets
    }

    pub fn vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::Vibrant)
    }

    pub fn light_vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::LightVibrant)
    }

    pub fn dark_vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::DarkVibrant)
    }

    pub fn muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::Muted)
    }

    pub fn light_muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::LightMuted)
    }

    pub fn dark_muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(NamedTarget::DarkMuted)
    }

    pub fn vibrant_color(&self) -> Option<(u8, u8, u8)> {
        self.vibrant_swatch().map(|swatch| swatch.rgb())
    }

    pub fn light_vibrant_color(&self) -> Option<(u8, u8, u8)> {
        self.light_vibrant_swatch().map(|swatch| swatch.rgb())
    }

    pub fn dark_vibrant_color(&self) -> Option<(u8, u8, u8)> {
        self.dark_vibrant_swatch().map(|swatch| swatch.rgb())
    }

    pub fn muted_color(&self) -> Option<(u8, u8, u8)> {
        self.muted_swatch().map(|swatch| swatch.rgb())
    }

    pub fn light_muted_color(&self) -> Option<(u8, u8, u8)> {
        self.light_muted_swatch().map(|swatch| swatch.rgb())
    }

    pub fn dark_muted_color(&self) -> Option<(u8, u8, u8)> {
        self.dark_muted_swatch().map(|swatch| swatch.rgb())
    }

    /// The best-matching swatch for a named category, if any swatch matched it.
    pub fn swatch_for(&self, named: NamedTarget) -> Option<Swatch> {
        self.swatch_for_target(&named.profile())
    }

    /// The best-matching swatch for an arbitrary target profile, compared by
    /// value against the profiles this palette was generated with.
    pub fn swatch_for_target(&self, target: &TargetProfile) -> Option<Swatch> {
        self.selections
            .iter()
            .find(|(selected, _)| selected == target)
            .map(|(_, swatch)| *swatch)
    }

    /// The swatch with the largest population, if any swatches exist.
    pub fn dominant_swatch(&self) -> Option<Swatch> {
        self.dominant
    }

    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.dominant.map(|swatch| swatch.rgb())
    }

    fn from_scored(swatches: Vec<Swatch>, targets: Vec<TargetProfile>) -> Palette {
        let selections = targets
            .iter()
            .filter_map(|target| best_swatch_for_target(&swatches, *target).map(|swatch| (*target, swatch)))
            .collect();

        Self {
            dominant: most_populous_swatch(&swatches),
            swatches,
            targets,
            selections,
        }
    }

    fn from_extraction(extraction: KmeansExtraction, targets: Vec<TargetProfile>) -> Palette {
        let swatches = extraction.swatches.iter().map(|(_, swatch)| *swatch).collect();
        let selections = extraction
            .swatches
            .into_iter()
            .map(|(named, swatch)| (named.profile(), swatch))
            .collect();

        Self {
            swatches,
            targets,
            selections,
            dominant: extraction.dominant,
        }
    }
}

impl PaletteBuilder {
    /// Start building a palette over the given image, with the default maximum
    /// color count (16), resize area (112x112), filter and the six built-in
    /// targets.
    pub fn from_image(image: image::RgbaImage) -> Self {
        Self {
            image,
            targets: TargetProfile::default_targets(),
            maximum_color_count: DEFAULT_MAXIMUM_COLOR_COUNT,
            resize_area: DEFAULT_RESIZE_IMAGE_AREA,
            region: None,
            filters: vec![Box::new(DefaultFilter)],
            quantizer: Quantizer::Histogram,
        }
    }

    /// Set the maximum number of colors the quantizer may return. Must be at
    /// least 1.
    pub fn maximum_color_count(self, count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::InvalidMaximumColorCount(count));
        }

        Ok(Self {
            maximum_color_count: count,
            ..self
        })
    }

    /// Set the pixel area above which the image is downsampled before
    /// quantization. Must be greater than zero.
    pub fn resize_bitmap_area(self, area: u32) -> Result<Self, ConfigError> {
        if area == 0 {
            return Err(ConfigError::InvalidResizeArea);
        }

        Ok(Self {
            resize_area: area,
            ..self
        })
    }

    /// Restrict quantization to the sub-rectangle `left..right` by
    /// `top..bottom`, validated against the image dimensions.
    pub fn set_region(self, left: u32, top: u32, right: u32, bottom: u32) -> Result<Self, ConfigError> {
        let region = Region::new(left, top, right, bottom, self.image.width(), self.image.height())?;

        Ok(Self {
            region: Some(region),
            ..self
        })
    }

    pub fn clear_region(self) -> Self {
        Self { region: None, ..self }
    }

    /// Add a target profile to match swatches against. Profiles are valid by
    /// construction; duplicates are ignored.
    pub fn add_target(mut self, target: TargetProfile) -> Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }

        self
    }

    pub fn clear_targets(self) -> Self {
        Self {
            targets: Vec::new(),
            ..self
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    /// Choose the quantization strategy. The default is [`Quantizer::Histogram`].
    pub fn quantizer(self, quantizer: Quantizer) -> Self {
        Self { quantizer, ..self }
    }

    /// Run the configured quantization and target matching synchronously.
    ///
    /// Deterministic for the histogram path and for a seeded k-means path.
    pub fn generate(mut self) -> Palette {
        if let Some(factor) = self.scale_image_down() {
            if let Some(region) = self.region {
                self.region = Some(region.scaled(factor, self.image.width(), self.image.height()));
            }
        }

        let view = if let Some(region) = self.region {
            self.image
                .view(region.left(), region.top(), region.width(), region.height())
        } else {
            self.image.view(0, 0, self.image.width(), self.image.height())
        };

        let pixels = view.pixels().map(|(_, _, pixel)| pixel).collect::<Vec<_>>();
        debug!(pixels = pixels.len(), "quantizing region");

        match self.quantizer {
            Quantizer::Histogram => {
                let quantizer = HistogramQuantizer::new(pixels, self.maximum_color_count, self.filters);
                Palette::from_scored(quantizer.quantized_colors(), self.targets)
            }
            Quantizer::Kmeans(quantizer) => {
                Palette::from_extraction(quantizer.extract(&pixels), self.targets)
            }
        }
    }

    /// Run [`generate`](Self::generate) on a spawned thread and hand back its
    /// join handle. A scheduling convenience only: the computation and its
    /// result are identical to the synchronous call, and it cannot be cancelled
    /// once started.
    pub fn generate_deferred(self) -> std::thread::JoinHandle<Palette> {
        std::thread::spawn(move || self.generate())
    }

    fn scale_image_down(&mut self) -> Option<f32> {
        let (width, height) = self.image.dimensions();
        let area = width as u64 * height as u64;

        if area <= self.resize_area as u64 {
            return None;
        }

        let ratio = (self.resize_area as f32 / area as f32).sqrt();
        self.image = image::imageops::resize(
            &self.image,
            ((width as f32 * ratio).ceil() as u32).max(1),
            ((height as f32 * ratio).ceil() as u32).max(1),
            image::imageops::FilterType::Nearest,
        );

        Some(ratio)
    }
}

fn best_swatch_for_target(swatches: &[Swatch], target: TargetProfile) -> Option<Swatch> {
    let mut max_score = f32::NEG_INFINITY;
    let mut best = None;

    for swatch in swatches.iter().copied() {
        let score = score_swatch(swatch, target);

        if best.is_none() || score > max_score {
            best = Some(swatch);
            max_score = score;
        }
    }

    best
}

/// Score a swatch against a target: closeness of its saturation and lightness to
/// the target values, equally weighted, scaled by the profile weight. Hue and
/// population do not participate.
fn score_swatch(swatch: Swatch, target: TargetProfile) -> f32 {
    let (_, saturation, lightness) = swatch.hsl();

    let saturation_score = 0.5 * (1.0 - (saturation - target.target_saturation()).abs());
    let lightness_score = 0.5 * (1.0 - (lightness - target.target_lightness()).abs());

    target.weight() * (saturation_score + lightness_score)
}

fn most_populous_swatch(swatches: &[Swatch]) -> Option<Swatch> {
    let mut best: Option<Swatch> = None;

    for swatch in swatches.iter().copied() {
        // strict comparison keeps the first swatch on ties
        if best.map_or(true, |current| swatch.population() > current.population()) {
            best = Some(swatch);
        }
    }

    best
}
