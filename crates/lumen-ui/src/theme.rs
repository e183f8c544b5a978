//! Theme configuration for `Lumen`.
//!
//! Calm dark palette with a warm accent. Reveal timings live here so the
//! stylesheet and the components agree on them.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#0b1020";
        /// Card background.
        pub const CARD: &str = "#141b2f";
        /// Hovered card background.
        pub const HOVER: &str = "#1c2540";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#f4f6fb";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#9aa4bf";
    }

    /// Accent colors.
    pub mod accent {
        /// Sunrise amber.
        pub const PRIMARY: &str = "#fbbf24";
        /// Sky blue.
        pub const SECONDARY: &str = "#60a5fa";
        /// Brand gradient.
        pub const GRADIENT: &str = "linear-gradient(135deg, #fbbf24 0%, #60a5fa 100%)";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "rgba(255, 255, 255, 0.08)";
    }
}

/// Typography settings.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Heading size.
    pub const HEADING: &str = "2.5rem";
}

/// Spacing scale.
pub mod spacing {
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "2rem";
    /// Section spacing.
    pub const XL: &str = "4rem";
}

/// Reveal-on-scroll transition.
pub mod reveal {
    /// How long an element takes to fade in.
    pub const DURATION: &str = "0.7s";
    /// Easing of the fade.
    pub const EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
    /// Vertical offset an element starts from before it is revealed.
    pub const OFFSET: &str = "2rem";
}

/// Generate CSS custom properties from the theme constants.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --bg-primary: {bg_primary};
  --bg-card: {bg_card};
  --bg-hover: {bg_hover};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --accent-primary: {accent_primary};
  --accent-secondary: {accent_secondary};
  --gradient-brand: {gradient};
  --border-default: {border_default};
  --font-family: {font_family};
  --font-size-heading: {heading};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --spacing-xl: {spacing_xl};
  --reveal-duration: {reveal_duration};
  --reveal-easing: {reveal_easing};
  --reveal-offset: {reveal_offset};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_card = colors::background::CARD,
        bg_hover = colors::background::HOVER,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        accent_primary = colors::accent::PRIMARY,
        accent_secondary = colors::accent::SECONDARY,
        gradient = colors::accent::GRADIENT,
        border_default = colors::border::DEFAULT,
        font_family = typography::FONT_FAMILY,
        heading = typography::HEADING,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        spacing_xl = spacing::XL,
        reveal_duration = reveal::DURATION,
        reveal_easing = reveal::EASING,
        reveal_offset = reveal::OFFSET,
    )
}
