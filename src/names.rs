//! Static table of CSS extended color keywords.
//!
//! Read-only, built once on first use, case-insensitive on lookup. This is
//! the name side of the `base_color` option: anything that does not look
//! like a hex string is resolved here.

use crate::color::{hex_to_hsv, Hsv, Rgb};
use crate::error::ColorError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// All 148 CSS extended color keywords (including the gray/grey and
/// aqua/cyan style aliases), mapped to lowercase `#rrggbb` strings.
static COLOR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from(COLOR_DATA));

#[rustfmt::skip]
const COLOR_DATA: [(&str, &str); 148] = [
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aqua", "#00ffff"),
    ("aquamarine", "#7fffd4"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("bisque", "#ffe4c4"),
    ("black", "#000000"),
    ("blanchedalmond", "#ffebcd"),
    ("blue", "#0000ff"),
    ("blueviolet", "#8a2be2"),
    ("brown", "#a52a2a"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkorchid", "#9932cc"),
    ("darkred", "#8b0000"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("goldenrod", "#daa520"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("greenyellow", "#adff2f"),
    ("grey", "#808080"),
    ("honeydew", "#f0fff0"),
    ("hotpink", "#ff69b4"),
    ("indianred", "#cd5c5c"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("linen", "#faf0e6"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("navy", "#000080"),
    ("oldlace", "#fdf5e6"),
    ("olive", "#808000"),
    ("olivedrab", "#6b8e23"),
    ("orange", "#ffa500"),
    ("orangered", "#ff4500"),
    ("orchid", "#da70d6"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("peru", "#cd853f"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("powderblue", "#b0e0e6"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#ff0000"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("salmon", "#fa8072"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("sienna", "#a0522d"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#fffafa"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("thistle", "#d8bfd8"),
    ("tomato", "#ff6347"),
    ("turquoise", "#40e0d0"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
    ("yellowgreen", "#9acd32"),
];

/// Looks up a color name, case-insensitively.
///
/// Returns `ColorError::UnknownColorName` when the name is not in the table.
pub fn name_to_hex(name: &str) -> Result<&'static str, ColorError> {
    COLOR_TABLE
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
}

/// Looks up a color name and parses it to RGB.
pub fn name_to_rgb(name: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(name_to_hex(name)?)
}

/// Looks up a color name and converts it to HSV.
///
/// Never fails: an unknown name degrades exactly like an empty hex string,
/// logging a warning and returning the [`crate::color::FALLBACK_RGB`]
/// sentinel in HSV form.
pub fn name_to_hsv(name: &str) -> Hsv {
    match name_to_hex(name) {
        Ok(hex) => hex_to_hsv(hex),
        Err(err) => {
            log::warn!("{err}, using fallback color");
            hex_to_hsv("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb_to_hsv, FALLBACK_RGB};

    #[test]
    fn name_to_hex_known_color() {
        assert_eq!(name_to_hex("rebeccapurple").unwrap(), "#663399");
    }

    #[test]
    fn name_to_hex_is_case_insensitive() {
        assert_eq!(name_to_hex("CornflowerBlue").unwrap(), "#6495ed");
        assert_eq!(name_to_hex("RED").unwrap(), "#ff0000");
    }

    #[test]
    fn name_to_hex_unknown_name_errors() {
        let err = name_to_hex("blurple").unwrap_err();
        assert!(matches!(err, ColorError::UnknownColorName(_)));
    }

    #[test]
    fn spelling_aliases_agree() {
        assert_eq!(name_to_hex("gray").unwrap(), name_to_hex("grey").unwrap());
        assert_eq!(name_to_hex("aqua").unwrap(), name_to_hex("cyan").unwrap());
        assert_eq!(
            name_to_hex("fuchsia").unwrap(),
            name_to_hex("magenta").unwrap()
        );
    }

    #[test]
    fn name_to_rgb_known_color() {
        assert_eq!(
            name_to_rgb("tomato").unwrap(),
            Rgb {
                r: 255,
                g: 99,
                b: 71
            }
        );
    }

    #[test]
    fn name_to_hsv_known_color() {
        // lime is pure green
        let hsv = name_to_hsv("lime");
        assert!((hsv.h - 120.0).abs() < 1e-9, "h: {}", hsv.h);
        assert!((hsv.s - 1.0).abs() < 1e-9, "s: {}", hsv.s);
        assert!((hsv.v - 1.0).abs() < 1e-9, "v: {}", hsv.v);
    }

    #[test]
    fn name_to_hsv_unknown_name_uses_fallback() {
        assert_eq!(name_to_hsv("blurple"), rgb_to_hsv(FALLBACK_RGB));
    }

    #[test]
    fn every_table_entry_is_valid_hex() {
        for (name, hex) in COLOR_DATA {
            assert!(
                Rgb::from_hex(hex).is_ok(),
                "table entry {name} has invalid hex {hex}"
            );
        }
    }

    #[test]
    fn every_table_key_is_lowercase() {
        for (name, _) in COLOR_DATA {
            assert_eq!(name, name.to_lowercase(), "table key {name} not lowercase");
        }
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        assert_eq!(COLOR_TABLE.len(), COLOR_DATA.len());
    }
}
