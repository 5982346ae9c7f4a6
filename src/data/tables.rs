//! Static name tables exposed to callers and used by the adapter to turn
//! names into enumerated values.

use crate::state::attributes::{Attribute, MarkerShape, PlotType, SeriesColor};

/// Named colors accepted in a `Colors` attribute.
pub const COLOR_TABLE: [(&str, SeriesColor); 113] = [
    ("Background", SeriesColor::rgb(204, 204, 204)),
    ("LightGray", SeriesColor::rgb(204, 204, 204)),
    ("Gray", SeriesColor::rgb(128, 128, 128)),
    ("Indigo", SeriesColor::rgb(75, 0, 130)),
    ("BlueViolet", SeriesColor::rgb(138, 43, 226)),
    ("DarkestBlue", SeriesColor::rgb(0, 0, 128)),
    ("DarkBlue", SeriesColor::rgb(0, 0, 191)),
    ("Blue", SeriesColor::rgb(0, 0, 255)),
    ("LightBlue", SeriesColor::rgb(89, 89, 255)),
    ("DodgerBlue", SeriesColor::rgb(30, 144, 255)),
    ("Cyan", SeriesColor::rgb(0, 255, 255)),
    ("DarkCyan", SeriesColor::rgb(0, 153, 153)),
    ("Lime", SeriesColor::rgb(0, 255, 0)),
    ("Green", SeriesColor::rgb(0, 204, 0)),
    ("LightGreen", SeriesColor::rgb(0, 255, 0)),
    ("DarkGreen", SeriesColor::rgb(0, 153, 0)),
    ("Yellow", SeriesColor::rgb(255, 255, 0)),
    ("DarkYellow", SeriesColor::rgb(178, 178, 0)),
    ("Orange", SeriesColor::rgb(255, 165, 0)),
    ("Red", SeriesColor::rgb(255, 0, 0)),
    ("DarkRed", SeriesColor::rgb(178, 0, 0)),
    ("Brown", SeriesColor::rgb(139, 0, 0)),
    ("Magenta", SeriesColor::rgb(255, 0, 255)),
    ("DarkMagenta", SeriesColor::rgb(153, 0, 153)),
    ("Black", SeriesColor::rgb(0, 0, 0)),
    ("White", SeriesColor::rgb(255, 255, 255)),
    ("IndianRed", SeriesColor::rgb(204, 92, 92)),
    ("MediumVioletRed", SeriesColor::rgb(199, 21, 133)),
    ("OrangeRed", SeriesColor::rgb(255, 69, 0)),
    ("VioletRed", SeriesColor::rgb(247, 84, 148)),
    ("DarkOliveGreen", SeriesColor::rgb(84, 107, 46)),
    ("ForestGreen", SeriesColor::rgb(35, 142, 35)),
    ("GreenYellow", SeriesColor::rgb(173, 255, 46)),
    ("LimeGreen", SeriesColor::rgb(50, 204, 50)),
    ("OliveDrab", SeriesColor::rgb(107, 142, 35)),
    ("MediumSeaGreen", SeriesColor::rgb(61, 178, 112)),
    ("MediumSpringGreen", SeriesColor::rgb(0, 250, 153)),
    ("PaleGreen", SeriesColor::rgb(153, 250, 153)),
    ("SeaGreen", SeriesColor::rgb(46, 140, 87)),
    ("SpringGreen", SeriesColor::rgb(0, 255, 127)),
    ("YellowGreen", SeriesColor::rgb(153, 204, 50)),
    ("GreenCopper", SeriesColor::rgb(82, 125, 117)),
    ("DarkGreenCopper", SeriesColor::rgb(74, 117, 110)),
    ("HuntersGreen", SeriesColor::rgb(54, 94, 59)),
    ("CadetBlue", SeriesColor::rgb(95, 159, 159)),
    ("CornflowerBlue", SeriesColor::rgb(99, 148, 237)),
    ("DarkSlateBlue", SeriesColor::rgb(71, 61, 140)),
    ("LightSteelBlue", SeriesColor::rgb(69, 130, 181)),
    ("MediumBlue", SeriesColor::rgb(0, 0, 204)),
    ("MediumSlateBlue", SeriesColor::rgb(122, 105, 237)),
    ("MidnightBlue", SeriesColor::rgb(26, 26, 112)),
    ("NavyBlue", SeriesColor::rgb(0, 0, 128)),
    ("SkyBlue", SeriesColor::rgb(135, 207, 235)),
    ("SlateBlue", SeriesColor::rgb(107, 89, 204)),
    ("SteelBlue", SeriesColor::rgb(69, 130, 181)),
    ("RichBlue", SeriesColor::rgb(89, 89, 171)),
    ("NeonBlue", SeriesColor::rgb(69, 102, 255)),
    ("NewMidnightBlue", SeriesColor::rgb(0, 0, 156)),
    ("DimGray", SeriesColor::rgb(105, 105, 105)),
    ("VLightGray", SeriesColor::rgb(212, 212, 212)),
    ("DarkSlateGray", SeriesColor::rgb(47, 79, 79)),
    ("MandarinOrange", SeriesColor::rgb(245, 153, 5)),
    ("Aquamarine", SeriesColor::rgb(128, 255, 212)),
    ("Coral", SeriesColor::rgb(255, 127, 79)),
    ("DarkOrchid", SeriesColor::rgb(153, 50, 204)),
    ("DarkTurquoise", SeriesColor::rgb(0, 207, 209)),
    ("Firebrick", SeriesColor::rgb(178, 33, 33)),
    ("Gold", SeriesColor::rgb(255, 214, 0)),
    ("Goldenrod", SeriesColor::rgb(217, 166, 33)),
    ("Khaki", SeriesColor::rgb(240, 230, 140)),
    ("Maroon", SeriesColor::rgb(128, 0, 0)),
    ("MediumAquamarine", SeriesColor::rgb(102, 204, 171)),
    ("MediumGoldenrod", SeriesColor::rgb(234, 234, 173)),
    ("MediumOrchid", SeriesColor::rgb(186, 84, 212)),
    ("MediumTurquoise", SeriesColor::rgb(71, 209, 204)),
    ("Orchid", SeriesColor::rgb(219, 112, 219)),
    ("Pink", SeriesColor::rgb(255, 191, 204)),
    ("Plum", SeriesColor::rgb(222, 161, 222)),
    ("Salmon", SeriesColor::rgb(250, 128, 115)),
    ("Sienna", SeriesColor::rgb(161, 82, 46)),
    ("Tan", SeriesColor::rgb(209, 181, 140)),
    ("Thistle", SeriesColor::rgb(216, 191, 216)),
    ("Turquoise", SeriesColor::rgb(64, 224, 209)),
    ("Violet", SeriesColor::rgb(237, 130, 237)),
    ("Wheat", SeriesColor::rgb(245, 222, 178)),
    ("SummerSky", SeriesColor::rgb(56, 176, 222)),
    ("Brass", SeriesColor::rgb(181, 166, 66)),
    ("Copper", SeriesColor::rgb(184, 115, 51)),
    ("Bronze", SeriesColor::rgb(204, 128, 51)),
    ("Silver", SeriesColor::rgb(191, 191, 191)),
    ("BrightGold", SeriesColor::rgb(209, 161, 74)),
    ("OldGold", SeriesColor::rgb(207, 181, 59)),
    ("Feldspar", SeriesColor::rgb(209, 145, 117)),
    ("Quartz", SeriesColor::rgb(82, 71, 79)),
    ("NeonPink", SeriesColor::rgb(255, 110, 199)),
    ("DarkPurple", SeriesColor::rgb(48, 26, 51)),
    ("CoolCopper", SeriesColor::rgb(217, 135, 26)),
    ("LightWood", SeriesColor::rgb(232, 194, 166)),
    ("MediumWood", SeriesColor::rgb(166, 128, 99)),
    ("DarkWood", SeriesColor::rgb(133, 94, 66)),
    ("SpicyPink", SeriesColor::rgb(255, 28, 173)),
    ("SemiSweetChocolate", SeriesColor::rgb(107, 66, 38)),
    ("BakersChocolate", SeriesColor::rgb(92, 51, 23)),
    ("Flesh", SeriesColor::rgb(245, 204, 176)),
    ("NewTan", SeriesColor::rgb(235, 199, 158)),
    ("VeryDarkBrown", SeriesColor::rgb(89, 41, 36)),
    ("DarkBrown", SeriesColor::rgb(92, 64, 51)),
    ("DarkTan", SeriesColor::rgb(150, 105, 79)),
    ("DustyRose", SeriesColor::rgb(133, 99, 99)),
    ("Scarlet", SeriesColor::rgb(255, 36, 0)),
    ("MediumPurple", SeriesColor::rgb(148, 112, 219)),
    ("LightPurple", SeriesColor::rgb(222, 148, 250)),
    ("VeryLightPurple", SeriesColor::rgb(240, 207, 252)),];

pub fn attribute_names() -> Vec<&'static str> {
    Attribute::ALL.iter().map(Attribute::name).collect()
}

pub fn plot_type_names() -> Vec<&'static str> {
    PlotType::ALL.iter().map(PlotType::name).collect()
}

pub fn color_table() -> &'static [(&'static str, SeriesColor)] {
    &COLOR_TABLE
}

/// (glyph, long name, shape) for every supported marker.
pub fn marker_table() -> Vec<(&'static str, &'static str, MarkerShape)> {
    MarkerShape::ALL
        .iter()
        .map(|m| (m.glyph(), m.long_name(), *m))
        .collect()
}

/// Case-insensitive color lookup.
pub fn lookup_color(name: &str) -> Option<SeriesColor> {
    let name = name.trim();
    COLOR_TABLE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}
