use alloc::format;

use embedded_graphics::geometry::Point;
use log::trace;

use crate::coordinate_mapper::AxisMapper;
use crate::error::Result;
use crate::palette::{self, BLACK, WHITE};
use crate::primitive::{Anchor, FontClass, Primitive, ShapeStyle};
use crate::resolve::resolve_band;
use crate::scene::{Scene, SceneBuilder, Viewport};
use crate::types::{Band, LightSource, Strength};

/// Wavelength axis, in meters.
pub const WAVELENGTH_MIN_M: f64 = 1e-14;
pub const WAVELENGTH_MAX_M: f64 = 1e3;
pub const FIRST_DECADE: i32 = -14;
pub const LAST_DECADE: i32 = 3;

pub const EM_BANDS: [Band; 7] = [
    Band::new("Radio", 1e0, 1e3, palette::GRAY),
    Band::new("Microwave", 1e-3, 1e0, palette::PURPLE),
    Band::new("Infrared", 7e-7, 1e-3, palette::DARK_RED),
    Band::new("Visible", 4e-7, 7e-7, palette::WHITE),
    Band::new("Ultraviolet", 1e-8, 4e-7, palette::BLUE),
    Band::new("X-Rays", 1e-11, 1e-8, palette::SKY_BLUE),
    Band::new("Gamma Rays", 1e-14, 1e-11, palette::CYAN),
];

pub const SUN_EMISSION: [Strength; 7] = [
    Strength::new("Radio", "Low", 25),
    Strength::new("Microwave", "Low", 25),
    Strength::new("Infrared", "High", 80),
    Strength::new("Visible", "Very High", 120),
    Strength::new("Ultraviolet", "Moderate", 50),
    Strength::new("X-Rays", "Low", 25),
    Strength::new("Gamma Rays", "Very Low", 10),
];

pub const LIGHT_SOURCES: [LightSource; 7] = [
    LightSource {
        name: "Incandescent",
        regions: &["Visible", "Infrared"],
        color: palette::ORANGE,
    },
    LightSource {
        name: "Halogen",
        regions: &["Visible", "Infrared"],
        color: palette::GOLD,
    },
    LightSource {
        name: "Fluorescent",
        regions: &["Ultraviolet", "Visible"],
        color: palette::LIME,
    },
    LightSource {
        name: "LED",
        regions: &["Visible"],
        color: palette::YELLOW,
    },
    LightSource {
        name: "Laser",
        regions: &["Visible"],
        color: palette::RED,
    },
    LightSource {
        name: "Microwave",
        regions: &["Microwave"],
        color: palette::VIOLET,
    },
    LightSource {
        name: "UV Lamp",
        regions: &["Ultraviolet"],
        color: palette::DEEP_SKY_BLUE,
    },
];

const BAND_HALF_HEIGHT: i32 = 40;
const SUN_BASE_OFFSET: i32 = 60;
const SUN_BAR_HALF_WIDTH: i32 = 10;
const SOURCE_ROW_HEIGHT: i32 = 25;
const SOURCE_ROW_GAP: i32 = 5;
const SOURCE_LABEL_X: i32 = 10;

/// Vertical positions of the chart sections for a given canvas height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumLayout {
    /// Center line of the band strip.
    pub spectrum_mid: i32,
    /// Bottom of the sun emission bars.
    pub sun_base: i32,
    /// Top of the first light-source row.
    pub synthetic_base: i32,
}

impl SpectrumLayout {
    pub fn for_height(height: u32) -> Self {
        let spectrum_mid = (height as f64 * 0.3) as i32;
        Self {
            spectrum_mid,
            sun_base: spectrum_mid - SUN_BASE_OFFSET,
            synthetic_base: (height as f64 * 0.55) as i32,
        }
    }
}

/// Electromagnetic spectrum on a log wavelength axis, with sun emission
/// strengths above the bands and synthetic light sources below.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumChart {
    bands: &'static [Band],
    emission: &'static [Strength],
    sources: &'static [LightSource],
}

impl Default for SpectrumChart {
    fn default() -> Self {
        Self::new(&EM_BANDS, &SUN_EMISSION, &LIGHT_SOURCES)
    }
}

impl SpectrumChart {
    pub fn new(
        bands: &'static [Band],
        emission: &'static [Strength],
        sources: &'static [LightSource],
    ) -> Self {
        Self {
            bands,
            emission,
            sources,
        }
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    /// Horizontal pixel span `(x_short, x_long)` of a band; longer
    /// wavelengths sit further right.
    pub fn band_span(axis: &AxisMapper, band: &Band) -> Result<(i32, i32)> {
        band.validate()?;
        Ok((axis.map(band.min)?, axis.map(band.max)?))
    }

    fn push_bands(
        &self,
        axis: &AxisMapper,
        layout: &SpectrumLayout,
        scene: &mut Scene,
    ) -> Result<()> {
        let mid = layout.spectrum_mid;
        for band in self.bands {
            let (x_short, x_long) = Self::band_span(axis, band)?;
            let cx = (x_short + x_long).div_euclid(2);

            scene.push(Primitive::rectangle(
                Point::new(x_long, mid - BAND_HALF_HEIGHT),
                Point::new(x_short, mid + BAND_HALF_HEIGHT),
                ShapeStyle::outlined(band.color, WHITE),
            ));
            scene.push(Primitive::text(
                Point::new(cx, mid),
                band.name,
                BLACK,
                FontClass::LabelBold,
                Anchor::Center,
            ));

            let Some(strength) = self.emission.iter().find(|s| s.band == band.name) else {
                trace!("no sun emission entry for {}", band.name);
                continue;
            };
            let top = layout.sun_base - strength.height;
            scene.push(Primitive::rectangle(
                Point::new(cx - SUN_BAR_HALF_WIDTH, top),
                Point::new(cx + SUN_BAR_HALF_WIDTH, layout.sun_base),
                ShapeStyle::outlined(palette::ORANGE, palette::GOLD),
            ));
            scene.push(Primitive::text(
                Point::new(cx, top - 10),
                strength.label,
                WHITE,
                FontClass::Italic,
                Anchor::Center,
            ));
        }
        Ok(())
    }

    fn push_light_sources(
        &self,
        axis: &AxisMapper,
        layout: &SpectrumLayout,
        scene: &mut Scene,
    ) -> Result<()> {
        for (i, source) in self.sources.iter().enumerate() {
            let y = layout.synthetic_base + i as i32 * (SOURCE_ROW_HEIGHT + SOURCE_ROW_GAP);

            for region in source.regions {
                let Some(band) = resolve_band(region, self.bands) else {
                    trace!("{}: region {:?} matches no band", source.name, region);
                    continue;
                };
                let (x_short, x_long) = Self::band_span(axis, band)?;
                scene.push(Primitive::rectangle(
                    Point::new(x_long, y),
                    Point::new(x_short, y + SOURCE_ROW_HEIGHT),
                    ShapeStyle::outlined(source.color, WHITE),
                ));
            }

            scene.push(Primitive::text(
                Point::new(SOURCE_LABEL_X, y + SOURCE_ROW_HEIGHT / 2),
                source.name,
                WHITE,
                FontClass::LabelBold,
                Anchor::West,
            ));
        }
        Ok(())
    }

    fn push_axis(
        &self,
        axis: &AxisMapper,
        layout: &SpectrumLayout,
        viewport: &Viewport,
        scene: &mut Scene,
    ) -> Result<()> {
        let mid = layout.spectrum_mid;
        for exp in FIRST_DECADE..=LAST_DECADE {
            let x = axis.map(libm::pow(10.0, exp as f64))?;
            scene.push(Primitive::line(
                Point::new(x, mid + 45),
                Point::new(x, mid + 55),
                WHITE,
                1,
            ));
            scene.push(Primitive::text(
                Point::new(x, mid + 70),
                format!("1e{exp} m"),
                WHITE,
                FontClass::Caption,
                Anchor::Center,
            ));
        }
        scene.push(Primitive::text(
            Point::new(viewport.width as i32 / 2, mid + 95),
            "Wavelength (log scale, meters)",
            WHITE,
            FontClass::Italic,
            Anchor::Center,
        ));
        Ok(())
    }
}

impl SceneBuilder for SpectrumChart {
    fn build(&self, viewport: &Viewport, scene: &mut Scene) -> Result<()> {
        let axis = AxisMapper::logarithmic(WAVELENGTH_MIN_M, WAVELENGTH_MAX_M, viewport.width)?;
        let layout = SpectrumLayout::for_height(viewport.height);

        self.push_bands(&axis, &layout, scene)?;
        self.push_light_sources(&axis, &layout, scene)?;
        self.push_axis(&axis, &layout, viewport, scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizError;
    use alloc::vec::Vec;
    use embedded_graphics::pixelcolor::Rgb888;

    fn build(chart: &SpectrumChart, width: u32, height: u32) -> Result<Scene> {
        let mut scene = Scene::new();
        chart.build(&Viewport::new(width, height), &mut scene)?;
        Ok(scene)
    }

    fn rectangles_filled_with(scene: &Scene, color: Rgb888) -> usize {
        scene
            .iter()
            .filter(|p| matches!(p, Primitive::Rectangle { style, .. } if style.fill == Some(color)))
            .count()
    }

    #[test]
    fn test_layout_fractions() {
        assert_eq!(
            SpectrumLayout::for_height(700),
            SpectrumLayout {
                spectrum_mid: 210,
                sun_base: 150,
                synthetic_base: 385,
            }
        );
    }

    #[test]
    fn test_default_scene_counts() {
        let scene = build(&SpectrumChart::default(), 1200, 700).unwrap();
        // Per band: rect, label, sun bar, sun label.
        let bands = EM_BANDS.len() * 4;
        // One rect per resolved region plus a name label per source.
        let regions: usize = LIGHT_SOURCES.iter().map(|s| s.regions.len()).sum();
        let sources = regions + LIGHT_SOURCES.len();
        // Tick line and label per decade, plus the axis title.
        let axis = 18 * 2 + 1;
        assert_eq!(scene.len(), bands + sources + axis);
    }

    #[test]
    fn test_bands_are_painted_before_their_labels() {
        let scene = build(&SpectrumChart::default(), 1200, 700).unwrap();
        let first_rect = scene
            .iter()
            .position(|p| matches!(p, Primitive::Rectangle { .. }))
            .unwrap();
        let first_text = scene
            .iter()
            .position(|p| matches!(p, Primitive::Text { .. }))
            .unwrap();
        assert!(first_rect < first_text);
    }

    #[test]
    fn test_visible_band_span() {
        let axis = AxisMapper::logarithmic(WAVELENGTH_MIN_M, WAVELENGTH_MAX_M, 1200).unwrap();
        let (x_short, x_long) = SpectrumChart::band_span(&axis, &EM_BANDS[3]).unwrap();
        assert!((535..=537).contains(&x_short), "x_short = {x_short}");
        assert!((552..=554).contains(&x_long), "x_long = {x_long}");
    }

    static SPARSE_EMISSION: [Strength; 1] = [Strength::new("Visible", "Very High", 120)];
    static UNRESOLVED_SOURCES: [LightSource; 1] = [LightSource {
        name: "Mystery",
        regions: &["Terahertz", "visible"],
        color: palette::LIME,
    }];

    #[test]
    fn test_missing_annotations_are_skipped() {
        let chart = SpectrumChart::new(&EM_BANDS, &SPARSE_EMISSION, &UNRESOLVED_SOURCES);
        let scene = build(&chart, 1200, 700).unwrap();
        assert_eq!(rectangles_filled_with(&scene, palette::ORANGE), 1);
        // "Terahertz" resolves to nothing, "visible" to the Visible band.
        assert_eq!(rectangles_filled_with(&scene, palette::LIME), 1);
    }

    static BROKEN_BANDS: [Band; 1] = [Band::new("Backwards", 1e-3, 1e-6, palette::GRAY)];
    static NEGATIVE_BANDS: [Band; 1] = [Band::new("Negative", -1.0, 1.0, palette::GRAY)];

    #[test]
    fn test_bad_table_entries_fail_loudly() {
        let backwards = SpectrumChart::new(&BROKEN_BANDS, &[], &[]);
        assert_eq!(
            build(&backwards, 1200, 700).map(|s| s.len()),
            Err(VizError::InvalidRange { lo: 1e-3, hi: 1e-6 })
        );

        let negative = SpectrumChart::new(&NEGATIVE_BANDS, &[], &[]);
        assert_eq!(
            build(&negative, 1200, 700).map(|s| s.len()),
            Err(VizError::NonPositiveLogValue(-1.0))
        );
    }

    #[test]
    fn test_tick_labels() {
        let scene = build(&SpectrumChart::default(), 1200, 700).unwrap();
        let labels: Vec<&str> = scene
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, font, .. } if *font == FontClass::Caption => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 18);
        assert_eq!(labels[0], "1e-14 m");
        assert_eq!(labels[14], "1e0 m");
        assert_eq!(labels[17], "1e3 m");
    }
}
