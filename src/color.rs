use anyhow::{Result, bail};
use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Color token parsing
// ---------------------------------------------------------------------------

/// Parse a color token: a matplotlib single-letter name or `#rrggbb` hex.
pub fn parse_color(token: &str) -> Result<Color32> {
    let color = match token {
        "r" => Color32::RED,
        "g" => Color32::GREEN,
        "b" => Color32::BLUE,
        "c" => Color32::from_rgb(0, 255, 255),
        "m" => Color32::from_rgb(255, 0, 255),
        "y" => Color32::YELLOW,
        "k" => Color32::BLACK,
        "w" => Color32::WHITE,
        hex if hex.len() == 7 && hex.starts_with('#') => {
            let channel = |range| {
                hex.get(range)
                    .and_then(|s| u8::from_str_radix(s, 16).ok())
            };
            match (channel(1..3), channel(3..5), channel(5..7)) {
                (Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
                _ => bail!("invalid hex color '{token}'"),
            }
        }
        other => bail!("unknown color token '{other}'"),
    };
    Ok(color)
}

/// Serde adapter so a [`crate::config::SeriesSpec`] color field holds a
/// parsed `Color32` straight out of deserialization.
pub fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<Color32>, D::Error>
where
    D: Deserializer<'de>,
{
    let token: Option<String> = Option::deserialize(deserializer)?;
    token
        .map(|t| parse_color(&t).map_err(serde::de::Error::custom))
        .transpose()
}

// ---------------------------------------------------------------------------
// Fallback palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues. Used
/// for series whose spec carries no color token and for files opened at
/// runtime.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_tokens_parse() {
        assert_eq!(parse_color("r").unwrap(), Color32::RED);
        assert_eq!(parse_color("c").unwrap(), Color32::from_rgb(0, 255, 255));
        assert_eq!(parse_color("k").unwrap(), Color32::BLACK);
    }

    #[test]
    fn hex_tokens_parse() {
        assert_eq!(
            parse_color("#40a0ff").unwrap(),
            Color32::from_rgb(0x40, 0xa0, 0xff)
        );
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(parse_color("q").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
    }

    #[test]
    fn palette_has_distinct_entries() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette_is_fine() {
        assert!(generate_palette(0).is_empty());
    }
}
