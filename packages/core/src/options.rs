//! Fixed option sets for the five presentation fields
//!
//! Every field is a closed enum, so a value outside its option set cannot be
//! constructed. Strings coming from outside the process (the preferences
//! file) pass through [`OptionSet::from_value`].

use crate::{ReaderError, ReaderResult};
use serde::{Deserialize, Serialize};

/// A fixed, enumerated list of label/value pairs for one settings field
pub trait OptionSet: Copy + PartialEq + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Every option, in display order
    fn all() -> &'static [Self];

    /// Human-readable label shown in the panel
    fn label(&self) -> &'static str;

    /// Underlying value projected onto the style variables
    fn value(&self) -> &'static str;

    /// Optional style class for the option
    fn class_name(&self) -> Option<&'static str> {
        None
    }

    /// Look up an option by its underlying value
    fn from_value(value: &str) -> ReaderResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|option| option.value() == value)
            .ok_or_else(|| ReaderError::unknown_option(Self::FIELD, value))
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Font family options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FontFamily {
    #[default]
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    Merriweather,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::OpenSans,
        FontFamily::Ubuntu,
        FontFamily::CormorantGaramond,
        FontFamily::DaysOne,
        FontFamily::Merriweather,
    ];
}

impl OptionSet for FontFamily {
    const FIELD: &'static str = "font family";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Ubuntu => "Ubuntu",
            FontFamily::CormorantGaramond => "Cormorant Garamond",
            FontFamily::DaysOne => "Days One",
            FontFamily::Merriweather => "Merriweather",
        }
    }

    fn value(&self) -> &'static str {
        // Family names double as the lookup key for the font system
        self.label()
    }

    fn class_name(&self) -> Option<&'static str> {
        Some(match self {
            FontFamily::OpenSans => "open-sans",
            FontFamily::Ubuntu => "ubuntu",
            FontFamily::CormorantGaramond => "cormorant-garamond",
            FontFamily::DaysOne => "days-one",
            FontFamily::Merriweather => "merriweather",
        })
    }
}

/// Font size options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FontSize {
    #[default]
    Regular,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Regular, FontSize::Large, FontSize::ExtraLarge];

    /// Size in logical pixels
    pub fn px(self) -> f32 {
        match self {
            FontSize::Regular => 18.0,
            FontSize::Large => 24.0,
            FontSize::ExtraLarge => 38.0,
        }
    }
}

impl OptionSet for FontSize {
    const FIELD: &'static str = "font size";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        self.value()
    }

    fn value(&self) -> &'static str {
        match self {
            FontSize::Regular => "18px",
            FontSize::Large => "24px",
            FontSize::ExtraLarge => "38px",
        }
    }

    fn class_name(&self) -> Option<&'static str> {
        Some(match self {
            FontSize::Regular => "font-size-18",
            FontSize::Large => "font-size-24",
            FontSize::ExtraLarge => "font-size-38",
        })
    }
}

/// Palette shared by the font and background color option sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Swatch {
    Black,
    White,
    Gray,
    Pink,
    HotPink,
    Yellow,
    Green,
    SkyBlue,
    Violet,
}

impl Swatch {
    fn label(self) -> &'static str {
        match self {
            Swatch::Black => "Black",
            Swatch::White => "White",
            Swatch::Gray => "Gray",
            Swatch::Pink => "Pink",
            Swatch::HotPink => "Hot pink",
            Swatch::Yellow => "Yellow",
            Swatch::Green => "Green",
            Swatch::SkyBlue => "Sky blue",
            Swatch::Violet => "Violet",
        }
    }

    fn value(self) -> &'static str {
        match self {
            Swatch::Black => "#000000",
            Swatch::White => "#FFFFFF",
            Swatch::Gray => "#C4C4C4",
            Swatch::Pink => "#FEAFE8",
            Swatch::HotPink => "#FD24AF",
            Swatch::Yellow => "#FFC802",
            Swatch::Green => "#80D994",
            Swatch::SkyBlue => "#6FC1FD",
            Swatch::Violet => "#5F00FF",
        }
    }

    fn rgb(self) -> Rgb {
        match self {
            Swatch::Black => Rgb::new(0x00, 0x00, 0x00),
            Swatch::White => Rgb::new(0xFF, 0xFF, 0xFF),
            Swatch::Gray => Rgb::new(0xC4, 0xC4, 0xC4),
            Swatch::Pink => Rgb::new(0xFE, 0xAF, 0xE8),
            Swatch::HotPink => Rgb::new(0xFD, 0x24, 0xAF),
            Swatch::Yellow => Rgb::new(0xFF, 0xC8, 0x02),
            Swatch::Green => Rgb::new(0x80, 0xD9, 0x94),
            Swatch::SkyBlue => Rgb::new(0x6F, 0xC1, 0xFD),
            Swatch::Violet => Rgb::new(0x5F, 0x00, 0xFF),
        }
    }
}

/// Article text color options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub struct FontColor(Swatch);

impl FontColor {
    pub const BLACK: FontColor = FontColor(Swatch::Black);
    pub const WHITE: FontColor = FontColor(Swatch::White);
    pub const GRAY: FontColor = FontColor(Swatch::Gray);
    pub const PINK: FontColor = FontColor(Swatch::Pink);
    pub const HOT_PINK: FontColor = FontColor(Swatch::HotPink);
    pub const YELLOW: FontColor = FontColor(Swatch::Yellow);
    pub const GREEN: FontColor = FontColor(Swatch::Green);
    pub const SKY_BLUE: FontColor = FontColor(Swatch::SkyBlue);
    pub const VIOLET: FontColor = FontColor(Swatch::Violet);

    pub const ALL: [FontColor; 9] = [
        FontColor::BLACK,
        FontColor::WHITE,
        FontColor::GRAY,
        FontColor::PINK,
        FontColor::HOT_PINK,
        FontColor::YELLOW,
        FontColor::GREEN,
        FontColor::SKY_BLUE,
        FontColor::VIOLET,
    ];

    pub fn rgb(self) -> Rgb {
        self.0.rgb()
    }
}

impl Default for FontColor {
    fn default() -> Self {
        FontColor::BLACK
    }
}

impl OptionSet for FontColor {
    const FIELD: &'static str = "font color";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        self.0.label()
    }

    fn value(&self) -> &'static str {
        self.0.value()
    }
}

/// Page background color options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub struct BackgroundColor(Swatch);

impl BackgroundColor {
    pub const WHITE: BackgroundColor = BackgroundColor(Swatch::White);
    pub const BLACK: BackgroundColor = BackgroundColor(Swatch::Black);
    pub const GRAY: BackgroundColor = BackgroundColor(Swatch::Gray);
    pub const PINK: BackgroundColor = BackgroundColor(Swatch::Pink);
    pub const HOT_PINK: BackgroundColor = BackgroundColor(Swatch::HotPink);
    pub const YELLOW: BackgroundColor = BackgroundColor(Swatch::Yellow);
    pub const GREEN: BackgroundColor = BackgroundColor(Swatch::Green);
    pub const SKY_BLUE: BackgroundColor = BackgroundColor(Swatch::SkyBlue);
    pub const VIOLET: BackgroundColor = BackgroundColor(Swatch::Violet);

    pub const ALL: [BackgroundColor; 9] = [
        BackgroundColor::WHITE,
        BackgroundColor::BLACK,
        BackgroundColor::GRAY,
        BackgroundColor::PINK,
        BackgroundColor::HOT_PINK,
        BackgroundColor::YELLOW,
        BackgroundColor::GREEN,
        BackgroundColor::SKY_BLUE,
        BackgroundColor::VIOLET,
    ];

    pub fn rgb(self) -> Rgb {
        self.0.rgb()
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        BackgroundColor::WHITE
    }
}

impl OptionSet for BackgroundColor {
    const FIELD: &'static str = "background color";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        self.0.label()
    }

    fn value(&self) -> &'static str {
        self.0.value()
    }
}

/// Article column width options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ContentWidth {
    #[default]
    Wide,
    Narrow,
}

impl ContentWidth {
    pub const ALL: [ContentWidth; 2] = [ContentWidth::Wide, ContentWidth::Narrow];

    /// Maximum article width in logical pixels
    pub fn px(self) -> f32 {
        match self {
            ContentWidth::Wide => 1394.0,
            ContentWidth::Narrow => 948.0,
        }
    }
}

impl OptionSet for ContentWidth {
    const FIELD: &'static str = "content width";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "Wide",
            ContentWidth::Narrow => "Narrow",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "1394px",
            ContentWidth::Narrow => "948px",
        }
    }
}

macro_rules! impl_option_glue {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.label())
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ReaderError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    <$ty as OptionSet>::from_value(&value)
                }
            }

            impl From<$ty> for &'static str {
                fn from(option: $ty) -> Self {
                    option.value()
                }
            }
        )+
    };
}

impl_option_glue!(FontFamily, FontSize, FontColor, BackgroundColor, ContentWidth);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_values_resolve<T: OptionSet + std::fmt::Debug>() {
        for option in T::all() {
            assert_eq!(T::from_value(option.value()).unwrap(), *option);
        }
    }

    #[test]
    fn test_every_value_resolves_to_its_option() {
        assert_values_resolve::<FontFamily>();
        assert_values_resolve::<FontSize>();
        assert_values_resolve::<FontColor>();
        assert_values_resolve::<BackgroundColor>();
        assert_values_resolve::<ContentWidth>();
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = FontSize::from_value("99px").unwrap_err();
        assert!(matches!(
            err,
            ReaderError::UnknownOption { field: "font size", .. }
        ));
        assert!(BackgroundColor::from_value("#123456").is_err());
        assert!(FontFamily::from_value("open-sans").is_err());
    }

    #[test]
    fn test_rgb_matches_hex_value() {
        for color in FontColor::ALL {
            assert_eq!(color.rgb().to_hex(), color.value());
        }
        for color in BackgroundColor::ALL {
            assert_eq!(color.rgb().to_hex(), color.value());
        }
    }

    #[test]
    fn test_pixel_sizes() {
        assert_eq!(FontSize::Regular.px(), 18.0);
        assert_eq!(FontSize::Large.px(), 24.0);
        assert_eq!(ContentWidth::Narrow.px(), 948.0);
        assert_eq!(ContentWidth::Wide.value(), "1394px");
    }

    #[test]
    fn test_font_options_carry_class_names() {
        assert_eq!(FontFamily::DaysOne.class_name(), Some("days-one"));
        assert_eq!(FontSize::Large.class_name(), Some("font-size-24"));
        assert_eq!(ContentWidth::Wide.class_name(), None);
    }

    #[test]
    fn test_serde_uses_option_values() {
        let json = serde_json::to_string(&FontColor::HOT_PINK).unwrap();
        assert_eq!(json, "\"#FD24AF\"");

        let width: ContentWidth = serde_json::from_str("\"948px\"").unwrap();
        assert_eq!(width, ContentWidth::Narrow);

        assert!(serde_json::from_str::<FontSize>("\"12px\"").is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(BackgroundColor::SKY_BLUE.to_string(), "Sky blue");
        assert_eq!(ContentWidth::Narrow.to_string(), "Narrow");
    }
}
