use crate::{color, swatch::Swatch, target::NamedTarget, ConfigError};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::warn;

const ITERATIONS: usize = 10;
const ALPHA_THRESHOLD: u8 = 128;

/// Clusters raw pixels into `clusters` average colors with a fixed number of
/// k-means iterations, then classifies each cluster center into one of the six
/// named categories by thresholding its saturation and lightness.
///
/// The iteration count is fixed rather than convergence-checked, so the cost is
/// predictable. Initialization samples pixels uniformly at random; pass a seed
/// through [`KmeansQuantizer::with_seed`] for reproducible results.
#[derive(Debug, Clone, Copy)]
pub struct KmeansQuantizer {
    clusters: usize,
    seed: Option<u64>,
}

/// The classified output of a k-means run: at most one swatch per named
/// category, plus the dominant color computed over the raw cluster centers.
#[derive(Debug, Default)]
pub(crate) struct KmeansExtraction {
    pub swatches: Vec<(NamedTarget, Swatch)>,
    pub dominant: Option<Swatch>,
}

impl KmeansQuantizer {
    pub fn new(clusters: usize) -> Result<KmeansQuantizer, ConfigError> {
        if clusters == 0 {
            return Err(ConfigError::InvalidClusterCount(clusters));
        }

        Ok(Self { clusters, seed: None })
    }

    /// Seed the center initialization for reproducible extraction.
    pub fn with_seed(self, seed: u64) -> KmeansQuantizer {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub(crate) fn extract(&self, pixels: &[image::Rgba<u8>]) -> KmeansExtraction {
        // pixels that are mostly transparent carry no usable color
        let pixels = pixels
            .iter()
            .filter(|pixel| pixel.0[3] >= ALPHA_THRESHOLD)
            .map(|pixel| (pixel.0[0], pixel.0[1], pixel.0[2]))
            .collect::<Vec<_>>();

        if pixels.is_empty() {
            warn!("no opaque pixels to cluster");
            return KmeansExtraction::default();
        }

        let centers = self.cluster(&pixels);
        let candidates = classify_centers(&centers);
        let populations = estimate_populations(&pixels, &candidates);

        let swatches = NamedTarget::ALL
            .into_iter()
            .filter_map(|named| {
                candidates[named as usize].map(|rgb| (named, Swatch::new(rgb, populations[named as usize])))
            })
            .collect();

        KmeansExtraction {
            swatches,
            dominant: dominant_center(&pixels, &centers),
        }
    }

    fn cluster(&self, pixels: &[(u8, u8, u8)]) -> Vec<(u8, u8, u8)> {
        let mut rng = StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random));

        // initial centers are drawn uniformly with replacement
        let mut centers = (0..self.clusters)
            .map(|_| pixels[rng.gen_range(0..pixels.len())])
            .collect::<Vec<_>>();

        for _ in 0..ITERATIONS {
            let mut sums = vec![(0u64, 0u64, 0u64, 0u64); centers.len()];

            for &pixel in pixels {
                let (sum_r, sum_g, sum_b, count) = &mut sums[nearest(pixel, &centers)];
                *sum_r += pixel.0 as u64;
                *sum_g += pixel.1 as u64;
                *sum_b += pixel.2 as u64;
                *count += 1;
            }

            for (center, (sum_r, sum_g, sum_b, count)) in centers.iter_mut().zip(sums) {
                // a center that attracted no pixels keeps its previous value
                if count > 0 {
                    *center = (
                        mean_channel(sum_r, count),
                        mean_channel(sum_g, count),
                        mean_channel(sum_b, count),
                    );
                }
            }
        }

        centers
    }
}

fn mean_channel(sum: u64, count: u64) -> u8 {
    ((sum as f64 / count as f64).round() as u64).min(255) as u8
}

/// Index of the nearest center by Euclidean RGB distance; the earliest center
/// wins ties.
fn nearest(pixel: (u8, u8, u8), centers: &[(u8, u8, u8)]) -> usize {
    let mut best = 0;
    let mut min_distance = f32::INFINITY;

    for (i, &center) in centers.iter().enumerate() {
        let distance = color::distance(pixel, center);

        if distance < min_distance {
            min_distance = distance;
            best = i;
        }
    }

    best
}

/// Map each center into its named category. When two centers land in the same
/// category the later one overwrites the earlier, matching the behavior this
/// extraction scheme has always had.
fn classify_centers(centers: &[(u8, u8, u8)]) -> [Option<(u8, u8, u8)>; 6] {
    let mut candidates = [None; 6];

    for &center in centers {
        let (_, s, l) = color::rgb_to_hsl(center);
        candidates[NamedTarget::from_hsl(s, l) as usize] = Some(center);
    }

    candidates
}

/// Estimate how many pixels each classified candidate represents by assigning
/// every pixel to its nearest candidate.
fn estimate_populations(pixels: &[(u8, u8, u8)], candidates: &[Option<(u8, u8, u8)>; 6]) -> [u32; 6] {
    let mut populations = [0u32; 6];

    for &pixel in pixels {
        let mut best = None;
        let mut min_distance = f32::INFINITY;

        for (i, candidate) in candidates.iter().enumerate() {
            if let Some(rgb) = candidate {
                let distance = color::distance(pixel, *rgb);

                if distance < min_distance {
                    min_distance = distance;
                    best = Some(i);
                }
            }
        }

        if let Some(i) = best {
            populations[i] += 1;
        }
    }

    populations
}

/// The most frequent cluster center over all pixels, counted independently of
/// the category classification.
fn dominant_center(pixels: &[(u8, u8, u8)], centers: &[(u8, u8, u8)]) -> Option<Swatch> {
    if centers.is_empty() {
        return None;
    }

    let mut counts = vec![0u32; centers.len()];
    for &pixel in pixels {
        counts[nearest(pixel, centers)] += 1;
    }

    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }

    Some(Swatch::new(centers[best], counts[best]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> image::Rgba<u8> {
        image::Rgba([r, g, b, a])
    }

    #[test]
    fn zero_clusters_is_rejected() {
        assert!(matches!(KmeansQuantizer::new(0), Err(ConfigError::InvalidClusterCount(0))));
        assert!(KmeansQuantizer::new(1).is_ok());
    }

    #[test]
    fn transparent_pixels_are_dropped() {
        let pixels = vec![rgba(200, 30, 30, 0); 32];

        let extraction = KmeansQuantizer::new(4).unwrap().with_seed(0).extract(&pixels);
        assert!(extraction.swatches.is_empty());
        assert!(extraction.dominant.is_none());
    }

    #[test]
    fn single_color_image_yields_that_color() {
        let pixels = vec![rgba(200, 30, 30, 255); 64];

        let extraction = KmeansQuantizer::new(4).unwrap().with_seed(0).extract(&pixels);
        let dominant = extraction.dominant.unwrap();

        assert_eq!(dominant.rgb(), (200, 30, 30));
        assert_eq!(dominant.population(), 64);

        // every candidate collapses onto the single color
        for (_, swatch) in &extraction.swatches {
            assert_eq!(swatch.rgb(), (200, 30, 30));
        }
    }

    #[test]
    fn seeded_extraction_is_deterministic() {
        let pixels: Vec<_> = (0..256u32)
            .map(|i| rgba((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255))
            .collect();

        let quantizer = KmeansQuantizer::new(8).unwrap().with_seed(42);
        let first = quantizer.extract(&pixels);
        let second = quantizer.extract(&pixels);

        assert_eq!(first.swatches, second.swatches);
        assert_eq!(first.dominant, second.dominant);
    }

    #[test]
    fn bucket_populations_cover_all_pixels() {
        let mut pixels = vec![rgba(200, 30, 30, 255); 48];
        pixels.extend(vec![rgba(120, 120, 120, 255); 16]);

        let extraction = KmeansQuantizer::new(4).unwrap().with_seed(7).extract(&pixels);
        let total: u32 = extraction.swatches.iter().map(|(_, swatch)| swatch.population()).sum();

        assert_eq!(total, 64);
    }

    #[test]
    fn classification_sends_saturated_midtones_to_vibrant() {
        // pure-ish red pixels: high saturation, mid lightness
        let pixels = vec![rgba(220, 20, 20, 255); 64];

        let extraction = KmeansQuantizer::new(2).unwrap().with_seed(3).extract(&pixels);
        assert!(extraction
            .swatches
            .iter()
            .any(|(named, _)| *named == NamedTarget::Vibrant));
    }
}
