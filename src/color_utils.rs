// File: src/color_utils.rs
use crate::model::{Event, Signature};
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_u24(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn to_u24(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }

    fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Rgb(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Determines if text on top of this color should be white.
    pub fn is_dark(self) -> bool {
        is_dark(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Uniformly samples one of the 2^24 colors.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::from_u24(rng.random_range(0..=0x00FF_FFFF))
}

/// Generates a deterministic color based on the input string.
/// Focuses on Pastel tones (High Lightness, Medium+ Saturation) so that
/// many keys stay distinguishable.
pub fn generate_color(key: &str) -> Rgb {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    let hash = hasher.finish();

    // Hue: 0-360 degrees (Primary differentiator)
    let h = (hash % 360) as f32;

    // Different bits of the hash for S and L to avoid correlation with Hue
    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation: 40% - 90%
    let s = 0.40 + ((hash_s % 51) as f32 / 100.0);

    // Lightness: 65% - 90%
    let l = 0.65 + ((hash_l % 26) as f32 / 100.0);

    let (r, g, b) = hsl_to_rgb(h, s, l);
    Rgb::from_unit(r, g, b)
}

/// Helper: HSL to RGB conversion
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Fresh random color per signature on every rebuild. Colors of existing
    /// events change whenever the store changes.
    #[default]
    Random,
    /// Pastel color derived from the signature text; survives rebuilds.
    Stable,
}

/// Signature -> color, rebuilt in full from the event list.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    colors: HashMap<Signature, Rgb>,
}

impl ColorMap {
    pub fn rebuild<'a, R, I>(events: I, mode: ColorMode, rng: &mut R) -> Self
    where
        R: Rng,
        I: IntoIterator<Item = &'a Event>,
    {
        let mut colors = HashMap::new();
        for ev in events {
            let sig = ev.signature();
            let color = match mode {
                ColorMode::Random => random_color(rng),
                ColorMode::Stable => generate_color(&sig.to_string()),
            };
            // Duplicates share one entry; the last sample wins.
            colors.insert(sig, color);
        }
        Self { colors }
    }

    pub fn color_of(&self, event: &Event) -> Option<Rgb> {
        self.colors.get(&event.signature()).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn event(title: &str) -> Event {
        Event {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::from_u24(0x0A_FF_10).to_string(), "#0AFF10");
        assert_eq!(Rgb(1, 2, 3).to_u24(), 0x01_02_03);
    }

    #[test]
    fn generated_colors_are_light_and_deterministic() {
        let a = generate_color("2024-03-15-09:00-10:00-Standup");
        assert_eq!(a, generate_color("2024-03-15-09:00-10:00-Standup"));
        let (r, g, b) = (a.0 as u16, a.1 as u16, a.2 as u16);
        // Lightness floor of 65% keeps the brightest channel well up.
        assert!(r.max(g).max(b) >= 165);
    }

    #[test]
    fn contrast_check() {
        assert!(Rgb(0, 0, 0x80).is_dark());
        assert!(!Rgb(0xFF, 0xF0, 0xC0).is_dark());
    }

    #[test]
    fn one_entry_per_signature() {
        let events = vec![event("A"), event("A"), event("B")];
        let mut rng = StdRng::seed_from_u64(7);
        let map = ColorMap::rebuild(&events, ColorMode::Random, &mut rng);
        assert_eq!(map.len(), 2);
        assert!(events.iter().all(|e| map.color_of(e).is_some()));
        assert_eq!(map.color_of(&events[0]), map.color_of(&events[1]));
    }

    #[test]
    fn stable_mode_survives_rebuild() {
        let mut events = vec![event("A")];
        let mut rng = StdRng::seed_from_u64(1);
        let before = ColorMap::rebuild(&events, ColorMode::Stable, &mut rng);
        events.push(event("B"));
        let after = ColorMap::rebuild(&events, ColorMode::Stable, &mut rng);
        assert_eq!(before.color_of(&events[0]), after.color_of(&events[0]));
    }

    #[test]
    fn unknown_event_has_no_color() {
        let map = ColorMap::default();
        assert!(map.is_empty());
        assert_eq!(map.color_of(&event("missing")), None);
    }
}
