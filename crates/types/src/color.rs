use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Parse a hex color string in strict #RRGGBB format.
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(format!("Color must start with #, got: {}", s));
        }
        let hex = &s[1..];

        if hex.len() != 6 {
            return Err(format!(
                "Invalid hex color length: expected 6 digits, got {}",
                hex.len()
            ));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| format!("Invalid red component: {}", e))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| format!("Invalid green component: {}", e))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| format!("Invalid blue component: {}", e))?;
        Ok(Color { r, g, b })
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#FF8000"), Ok(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("#000000"), Ok(Color::BLACK));
    }

    #[test]
    fn rejects_short_and_malformed_hex() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("FFFFFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let c: Color = serde_json::from_str("\"#102030\"").unwrap();
        assert_eq!(c, Color::new(16, 32, 48));
        let c: Color = serde_json::from_str("{\"r\":1,\"g\":2,\"b\":3}").unwrap();
        assert_eq!(c, Color::new(1, 2, 3));
    }
}
