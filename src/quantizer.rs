use crate::{color, filter::Filter, swatch::Swatch};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const CHANNEL_BUCKET: u32 = 8;

/// Reduces a pixel buffer to at most `max_colors` representative colors by
/// bucketing each channel into multiples of 8, counting the surviving distinct
/// colors and merging the closest pairs until the bound holds.
///
/// The top colors by population are kept before any merging happens, so the
/// result is bounded and deterministic but not a minimum-variance quantization.
pub struct HistogramQuantizer {
    pixels: Vec<image::Rgba<u8>>,
    max_colors: usize,
    filters: Vec<Box<dyn Filter>>,
}

impl HistogramQuantizer {
    pub fn new(pixels: Vec<image::Rgba<u8>>, max_colors: usize, filters: Vec<Box<dyn Filter>>) -> Self {
        Self {
            pixels,
            max_colors,
            filters,
        }
    }

    pub fn quantized_colors(self) -> Vec<Swatch> {
        // histogram of bucketed colors, keyed in channel order so iteration is
        // deterministic regardless of pixel order
        let mut hist: BTreeMap<(u8, u8, u8), u32> = BTreeMap::new();
        for pixel in &self.pixels {
            let [r, g, b, _] = pixel.0;
            let bucketed = (bucket_channel(r), bucket_channel(g), bucket_channel(b));
            *hist.entry(bucketed).or_insert(0) += 1;
        }

        let mut colors = hist
            .into_iter()
            .filter(|(rgb, _)| !self.should_ignore_color(*rgb))
            .collect::<Vec<_>>();

        if colors.is_empty() {
            warn!("no colors survived filtering");
            return Vec::new();
        }

        // order by descending population; the sort is stable so equal populations
        // keep their channel order from the histogram
        colors.sort_by(|(_, lhs), (_, rhs)| rhs.cmp(lhs));
        colors.truncate(self.max_colors);

        // normally a no-op after the truncation above, but keeps the bound
        // correct if it ever leaves more colors than requested
        while colors.len() > self.max_colors {
            let Some((i, j)) = closest_pair(&colors) else {
                break;
            };

            let merged = merge(colors[i], colors[j]);
            colors.remove(j);
            colors.remove(i);
            colors.push(merged);
        }

        debug!(colors = colors.len(), "quantization finished");

        colors
            .into_iter()
            .map(|(rgb, population)| Swatch::new(rgb, population))
            .collect()
    }

    fn should_ignore_color(&self, rgb: (u8, u8, u8)) -> bool {
        let hsl = color::rgb_to_hsl(rgb);
        self.filters.iter().any(|filter| !filter.is_allowed(rgb, hsl))
    }
}

/// Round a channel value to the nearest multiple of 8, clamped to 255.
fn bucket_channel(value: u8) -> u8 {
    (((value as u32 + CHANNEL_BUCKET / 2) / CHANNEL_BUCKET) * CHANNEL_BUCKET).min(255) as u8
}

/// Find the pair of colors with the smallest Euclidean distance, scanning in
/// order so equal distances resolve to the first pair encountered. NaN distances
/// never compare smaller and are skipped.
fn closest_pair(colors: &[((u8, u8, u8), u32)]) -> Option<(usize, usize)> {
    let mut min_distance = f32::INFINITY;
    let mut pair = None;

    for i in 0..colors.len() {
        for j in i + 1..colors.len() {
            let distance = color::distance(colors[i].0, colors[j].0);

            if distance < min_distance {
                min_distance = distance;
                pair = Some((i, j));
            }
        }
    }

    pair
}

/// Merge two counted colors into their population-weighted centroid. A zero total
/// population falls back to the first color to avoid dividing by zero.
fn merge(
    ((r1, g1, b1), pop1): ((u8, u8, u8), u32),
    ((r2, g2, b2), pop2): ((u8, u8, u8), u32),
) -> ((u8, u8, u8), u32) {
    let total = pop1 + pop2;

    if total == 0 {
        warn!("merging colors with zero total population");
        return ((r1, g1, b1), 0);
    }

    let weigh = |a: u8, b: u8| {
        let mean = (a as f32 * pop1 as f32 + b as f32 * pop2 as f32) / total as f32;
        mean.round().clamp(0.0, 255.0) as u8
    };

    ((weigh(r1, r2), weigh(g1, g2), weigh(b1, b2)), total)
}
