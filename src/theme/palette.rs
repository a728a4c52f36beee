// Palette table
//
// Every display section derives its colors from one `ThemePalette`. The table
// is indexed by `Weather` with an exhaustive match, so adding a mode without a
// palette does not compile. Raw names coming from outside the type system go
// through `palette_for_name`, which degrades to the default palette.

use ratatui::style::Color;

use super::Weather;

/// RGB triple, kept as a tuple so it can feed `interpolate_color` directly
pub type Rgb = (u8, u8, u8);

/// Three-stop gradient (from / via / to)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub stops: [Rgb; 3],
}

impl Gradient {
    pub const fn new(from: Rgb, via: Rgb, to: Rgb) -> Self {
        Self {
            stops: [from, via, to],
        }
    }

    /// Color at `ratio` (0.0 = from, 0.5 = via, 1.0 = to)
    pub fn at(&self, ratio: f32) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        if ratio <= 0.5 {
            interpolate_color(self.stops[0], self.stops[1], ratio * 2.0)
        } else {
            interpolate_color(self.stops[1], self.stops[2], (ratio - 0.5) * 2.0)
        }
    }
}

/// Translucent color (rgba) that has to be composited onto a background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Tint {
    pub const fn new(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    /// Composite over an opaque background
    pub fn over(&self, base: Rgb) -> Color {
        interpolate_color(base, self.rgb, self.alpha)
    }

    /// Composite with an extra falloff factor (0.0 = invisible)
    pub fn over_scaled(&self, base: Rgb, factor: f32) -> Color {
        interpolate_color(base, self.rgb, self.alpha * factor.clamp(0.0, 1.0))
    }
}

/// Presentation values derived from a weather mode
///
/// Read-only. Nothing mutates a palette; changing the weather swaps which
/// table entry consumers read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub weather: Weather,

    /// Headline color
    pub primary: Color,
    /// Secondary headline / emphasis color
    pub secondary: Color,
    /// Borders, bullets, small accents
    pub accent: Color,

    /// Page background, top to bottom
    pub background: Gradient,
    /// Gradient text (name, section titles)
    pub text_gradient: Gradient,
    /// Per-section background band
    pub section_background: Gradient,
    /// Vertical timeline line in About / Experience
    pub timeline: Gradient,
    /// Pointer-following glow, composited onto the background
    pub cursor_glow: [Tint; 3],

    /// Soft glow around cards
    pub glow: Tint,
    /// Glass panel tint
    pub glass: Tint,

    /// Active nav item / highlighted heading foreground
    pub highlight: Color,
    /// Active nav item background
    pub highlight_bg: Tint,
    /// Focus ring of form inputs
    pub focus: Color,
    /// Call-to-action button gradient
    pub button: (Color, Color),
}

const fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

// Tailwind tokens used by the table
const WHITE: Rgb = (255, 255, 255);
const BLACK: Rgb = (0, 0, 0);
const SLATE_50: Rgb = (248, 250, 252);
const SLATE_200: Rgb = (226, 232, 240);
const SLATE_300: Rgb = (203, 213, 225);
const SLATE_400: Rgb = (148, 163, 184);
const SLATE_500: Rgb = (100, 116, 139);
const SLATE_600: Rgb = (71, 85, 105);
const SLATE_900: Rgb = (15, 23, 42);
const SLATE_950: Rgb = (2, 6, 23);
const GRAY_100: Rgb = (243, 244, 246);
const GRAY_200: Rgb = (229, 231, 235);
const GRAY_300: Rgb = (209, 213, 219);
const GRAY_950: Rgb = (3, 7, 18);
const AMBER_50: Rgb = (254, 243, 199);
const AMBER_200: Rgb = (253, 230, 138);
const AMBER_400: Rgb = (251, 191, 36);
const AMBER_500: Rgb = (245, 158, 11);
const AMBER_950: Rgb = (69, 26, 3);
const ORANGE_300: Rgb = (253, 186, 116);
const ORANGE_500: Rgb = (249, 115, 22);
const ORANGE_600: Rgb = (234, 88, 12);
const ORANGE_950: Rgb = (67, 20, 7);
const YELLOW_200: Rgb = (254, 240, 138);
const YELLOW_300: Rgb = (253, 224, 71);
const YELLOW_400: Rgb = (250, 204, 21);
const YELLOW_500: Rgb = (234, 179, 8);
const YELLOW_600: Rgb = (202, 138, 4);
const YELLOW_950: Rgb = (66, 32, 6);
const BLUE_300: Rgb = (147, 197, 253);
const BLUE_400: Rgb = (96, 165, 250);
const BLUE_500: Rgb = (59, 130, 246);
const BLUE_600: Rgb = (37, 99, 235);
const BLUE_950: Rgb = (23, 37, 84);

// orange-900/10 and slate-900/10 pre-composited over black
const ORANGE_900_FAINT: Rgb = (12, 4, 2);
const SLATE_900_FAINT: Rgb = (2, 2, 4);
// white/30 and gray-100/30 pre-composited over slate-950
const WHITE_FROST: Rgb = (78, 81, 93);
const GRAY_100_FROST: Rgb = (74, 77, 90);

static WINTER: ThemePalette = ThemePalette {
    weather: Weather::Winter,
    primary: rgb(WHITE),
    secondary: rgb(SLATE_50),
    accent: rgb(SLATE_200),
    background: Gradient::new(SLATE_950, SLATE_900, SLATE_950),
    text_gradient: Gradient::new(WHITE, GRAY_100, GRAY_200),
    section_background: Gradient::new(SLATE_950, SLATE_900, SLATE_950),
    timeline: Gradient::new(WHITE, GRAY_200, GRAY_300),
    cursor_glow: [
        Tint::new(WHITE, 0.3),
        Tint::new(SLATE_50, 0.2),
        Tint::new(SLATE_200, 0.1),
    ],
    glow: Tint::new(WHITE, 0.4),
    glass: Tint::new(WHITE, 0.08),
    highlight: rgb(WHITE),
    highlight_bg: Tint::new(WHITE, 0.2),
    focus: rgb(WHITE),
    button: (rgb(WHITE_FROST), rgb(GRAY_100_FROST)),
};

static SUMMER: ThemePalette = ThemePalette {
    weather: Weather::Summer,
    primary: rgb(AMBER_50),
    secondary: rgb(AMBER_200),
    accent: rgb(AMBER_500),
    background: Gradient::new(ORANGE_950, AMBER_950, YELLOW_950),
    text_gradient: Gradient::new(YELLOW_300, ORANGE_300, AMBER_400),
    section_background: Gradient::new(BLACK, ORANGE_900_FAINT, YELLOW_950),
    timeline: Gradient::new(YELLOW_500, ORANGE_500, AMBER_500),
    cursor_glow: [
        Tint::new(AMBER_500, 0.4),
        Tint::new(AMBER_400, 0.2),
        Tint::new(YELLOW_200, 0.1),
    ],
    glow: Tint::new(AMBER_500, 0.4),
    glass: Tint::new(AMBER_50, 0.05),
    highlight: rgb(YELLOW_400),
    highlight_bg: Tint::new(YELLOW_500, 0.2),
    focus: rgb(YELLOW_500),
    button: (rgb(YELLOW_600), rgb(ORANGE_600)),
};

static RAIN: ThemePalette = ThemePalette {
    weather: Weather::Rain,
    primary: rgb(SLATE_300),
    secondary: rgb(SLATE_400),
    accent: rgb(SLATE_500),
    background: Gradient::new(SLATE_950, GRAY_950, BLUE_950),
    text_gradient: Gradient::new(SLATE_300, GRAY_300, BLUE_300),
    section_background: Gradient::new(BLACK, SLATE_900_FAINT, BLUE_950),
    timeline: Gradient::new(BLUE_400, SLATE_400, BLUE_500),
    cursor_glow: [
        Tint::new(SLATE_500, 0.4),
        Tint::new(SLATE_400, 0.2),
        Tint::new(SLATE_300, 0.1),
    ],
    glow: Tint::new(SLATE_500, 0.4),
    glass: Tint::new(SLATE_300, 0.05),
    highlight: rgb(BLUE_400),
    highlight_bg: Tint::new(BLUE_500, 0.2),
    focus: rgb(BLUE_500),
    button: (rgb(BLUE_600), rgb(SLATE_600)),
};

/// Palette for a weather mode
///
/// Pure lookup into a static table: the same mode always yields the same
/// palette, by value and by address.
pub fn palette_for(weather: Weather) -> &'static ThemePalette {
    match weather {
        Weather::Winter => &WINTER,
        Weather::Summer => &SUMMER,
        Weather::Rain => &RAIN,
    }
}

/// Palette for a raw mode name
///
/// Names outside the closed set fall back to the default mode's palette.
/// Rendering never fails on bad theme data.
#[cfg(test)]
pub fn palette_for_name(name: &str) -> &'static ThemePalette {
    match name.parse::<Weather>() {
        Ok(weather) => palette_for(weather),
        Err(e) => {
            tracing::warn!(error = %e, fallback = %Weather::default(), "Unknown weather name, using default palette");
            palette_for(Weather::default())
        }
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: Rgb, color2: Rgb, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Extract the RGB triple of a `Color::Rgb`, or `fallback` for indexed colors
pub fn rgb_of(color: Color, fallback: Rgb) -> Rgb {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_weather() -> impl Strategy<Value = Weather> {
        prop_oneof![
            Just(Weather::Winter),
            Just(Weather::Summer),
            Just(Weather::Rain),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Lookup is pure: two calls with the same mode give equal palettes
        #[test]
        fn prop_palette_lookup_is_pure(weather in any_weather()) {
            let first = *palette_for(weather);
            let second = *palette_for(weather);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.weather, weather);
        }

        /// Any name outside the closed set resolves to the default palette
        #[test]
        fn prop_unknown_names_fall_back(name in "[a-z]{1,12}") {
            prop_assume!(name.parse::<Weather>().is_err());
            prop_assert_eq!(palette_for_name(&name), palette_for(Weather::Winter));
        }

        #[test]
        fn prop_gradient_endpoints(weather in any_weather()) {
            let bg = palette_for(weather).background;
            prop_assert_eq!(bg.at(0.0), rgb(bg.stops[0]));
            prop_assert_eq!(bg.at(0.5), rgb(bg.stops[1]));
            prop_assert_eq!(bg.at(1.0), rgb(bg.stops[2]));
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(palette_for(Weather::Winter), palette_for(Weather::Summer));
        assert_ne!(palette_for(Weather::Summer), palette_for(Weather::Rain));
        assert_ne!(palette_for(Weather::Winter), palette_for(Weather::Rain));
    }

    #[test]
    fn test_palette_for_known_names() {
        assert_eq!(palette_for_name("summer").weather, Weather::Summer);
        assert_eq!(palette_for_name("Rain").weather, Weather::Rain);
    }

    #[test]
    fn test_corrupted_name_does_not_panic() {
        assert_eq!(palette_for_name("").weather, Weather::Winter);
        assert_eq!(palette_for_name("☀☀☀").weather, Weather::Winter);
        assert_eq!(palette_for_name("winter\0").weather, Weather::Winter);
    }

    #[test]
    fn test_interpolate_color_clamps() {
        assert_eq!(interpolate_color(BLACK, WHITE, -1.0), Color::Rgb(0, 0, 0));
        assert_eq!(interpolate_color(BLACK, WHITE, 2.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_tint_over() {
        let opaque = Tint::new(WHITE, 1.0);
        assert_eq!(opaque.over(BLACK), Color::Rgb(255, 255, 255));
        let clear = Tint::new(WHITE, 0.0);
        assert_eq!(clear.over(SLATE_950), rgb(SLATE_950));
        assert_eq!(opaque.over_scaled(BLACK, 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_rgb_of() {
        assert_eq!(rgb_of(Color::Rgb(1, 2, 3), BLACK), (1, 2, 3));
        assert_eq!(rgb_of(Color::Red, WHITE), WHITE);
    }
}
