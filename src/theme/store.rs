use ratatui::style::Color;

use super::types::Theme;

/// Dark palette (Catppuccin Mocha).
const DARK: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    mantle: Color::Rgb(24, 24, 37),      // #181825
    crust: Color::Rgb(17, 17, 27),       // #11111b
    surface1: Color::Rgb(69, 71, 90),    // #45475a
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    overlay2: Color::Rgb(147, 153, 178), // #9399b2
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    subtext1: Color::Rgb(186, 194, 222), // #bac2de
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    green: Color::Rgb(166, 227, 161),    // #a6e3a1
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
    lavender: Color::Rgb(180, 190, 254), // #b4befe
};

/// Light palette.
const LIGHT: Theme = Theme {
    base: Color::Rgb(245, 245, 247),     // #f5f5f7
    mantle: Color::Rgb(234, 234, 238),   // #eaeaee
    crust: Color::Rgb(220, 220, 225),    // #dcdce1
    surface1: Color::Rgb(207, 209, 215), // #cfd1d7
    surface2: Color::Rgb(183, 186, 195), // #b7bac3
    overlay1: Color::Rgb(122, 125, 134), // #7a7d86
    overlay2: Color::Rgb(99, 102, 111),  // #63666f
    text: Color::Rgb(28, 28, 34),        // #1c1c22
    subtext0: Color::Rgb(60, 63, 71),    // #3c3f47
    subtext1: Color::Rgb(86, 90, 100),   // #565a64
    sapphire: Color::Rgb(30, 102, 245),  // #1e66f5
    mauve: Color::Rgb(136, 57, 239),     // #8839ef
    green: Color::Rgb(64, 160, 43),      // #40a02b
    yellow: Color::Rgb(223, 142, 29),    // #df8e1d
    red: Color::Rgb(210, 15, 57),        // #d20f39
    lavender: Color::Rgb(114, 135, 253), // #7287fd
};

/// Return the palette for the current mode.
#[must_use]
pub const fn theme(dark_mode: bool) -> Theme {
    if dark_mode { DARK } else { LIGHT }
}

#[cfg(test)]
mod tests {
    #[test]
    fn palettes_differ_between_modes() {
        let dark = super::theme(true);
        let light = super::theme(false);
        assert_ne!(dark, light);
        assert_eq!(dark.base, ratatui::style::Color::Rgb(30, 30, 46));
        assert_eq!(light.base, ratatui::style::Color::Rgb(245, 245, 247));
    }
}
