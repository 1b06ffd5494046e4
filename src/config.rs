//! `config.toml`: presentation and build knobs that are not page text.
//!
//! The file sits next to `site.toml` and may be absent. Anything it sets is
//! layered over [`SiteConfig::default`] table by table, so a file holding
//! one key changes exactly that key:
//!
//! ```toml
//! [motion]
//! carousel_interval_ms = 7000
//! ```
//!
//! Sections: `[site]` (title suffix, canonical origin, language), `[colors]`
//! (brand palette, emitted as `--color-*` custom properties), `[motion]`
//! (reveal line, navbar threshold, carousel and marquee timing, reduced
//! motion), `[contact]` (form endpoint) and `[processing]` (render workers).
//! Run `newel-site gen-config` for the annotated full file.
//!
//! A misspelled key is an error, never a silent default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Parsed `config.toml`, with every unset key at its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings (titles, canonical origin, language).
    pub site: SiteMeta,
    /// Brand palette, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Timing and threshold defaults for the motion engine.
    pub motion: MotionConfig,
    /// Contact form delivery.
    pub contact: ContactConfig,
    /// Render worker count.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Range checks serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        if !(0.0..=100.0).contains(&m.default_threshold) {
            return Err(ConfigError::Validation(
                "motion.default_threshold must be 0-100".into(),
            ));
        }
        if !(m.nav_scroll_threshold.is_finite() && m.nav_scroll_threshold >= 0.0) {
            return Err(ConfigError::Validation(
                "motion.nav_scroll_threshold must be a finite, non-negative number".into(),
            ));
        }
        if m.carousel_interval_ms < 500 {
            return Err(ConfigError::Validation(
                "motion.carousel_interval_ms must be at least 500".into(),
            ));
        }
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !(positive(m.marquee_left_seconds) && positive(m.marquee_right_seconds)) {
            return Err(ConfigError::Validation(
                "motion marquee durations must be finite and positive".into(),
            ));
        }
        if let Some(name) = self.colors.first_empty() {
            return Err(ConfigError::Validation(format!(
                "colors.{name} must not be empty"
            )));
        }
        if let Some(endpoint) = &self.contact.endpoint
            && endpoint.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "contact.endpoint must not be empty when set".into(),
            ));
        }
        Ok(())
    }
}

/// Document-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Appended to every page title: `"Careers | {title_suffix}"`.
    pub title_suffix: String,
    /// Absolute origin used for canonical links on redirect stubs.
    /// Empty means root-relative links.
    pub base_url: String,
    pub language: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title_suffix: "Newel Technologies".to_string(),
            base_url: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Brand palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Primary accent (buttons, highlights, scrub lines).
    pub brand: String,
    /// Accent hover state.
    pub brand_dark: String,
    /// Very light accent wash behind hero sections.
    pub tint: String,
    pub text: String,
    /// Secondary copy, captions.
    pub text_muted: String,
    pub background: String,
    /// Alternate section background.
    pub surface: String,
    /// Hairlines and card outlines.
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand: "#5099ff".to_string(),
            brand_dark: "#3d7fd9".to_string(),
            tint: "#f8fbff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("brand", self.brand.as_str()),
            ("brand_dark", self.brand_dark.as_str()),
            ("tint", self.tint.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("border", self.border.as_str()),
        ]
    }

    fn first_empty(&self) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// Motion engine defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Reveal line for sections that don't set their own, as a percentage
    /// of viewport height.
    pub default_threshold: f64,
    /// Scroll distance in pixels after which the navbar gets its solid style.
    pub nav_scroll_threshold: f64,
    /// Carousel auto-advance period in milliseconds.
    pub carousel_interval_ms: u64,
    /// Seconds for one loop of a leftward marquee.
    pub marquee_left_seconds: f64,
    /// Seconds for one loop of a rightward marquee.
    pub marquee_right_seconds: f64,
    /// When true the driver skips transforms and auto motion for visitors
    /// with `prefers-reduced-motion: reduce`.
    pub honor_reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default_threshold: 80.0,
            nav_scroll_threshold: 40.0,
            carousel_interval_ms: 5000,
            marquee_left_seconds: 28.0,
            marquee_right_seconds: 35.0,
            honor_reduced_motion: true,
        }
    }
}

/// Contact form delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// URL the form posts to. When absent the form validates client-side
    /// and stops there.
    pub endpoint: Option<String>,
}

/// Render worker settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Upper bound on rayon workers rendering pages. Unset means one per
    /// core; larger values are capped at the core count.
    pub max_processes: Option<usize>,
}

/// Worker count for the render pool: `max_processes` within `1..=cores`,
/// or every core when unset.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// ============================================================================
// Loading
// ============================================================================

/// Defaults as a TOML table, the bottom layer every file is merged onto.
pub fn defaults_table() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Layer `top` over `bottom`. Tables merge per key, recursively; any other
/// value in `top` wins outright.
pub fn overlay_toml(bottom: toml::Value, top: toml::Value) -> toml::Value {
    use toml::Value::Table;
    match (bottom, top) {
        (Table(mut under), Table(over)) => {
            for (key, value) in over {
                let layered = match under.remove(&key) {
                    Some(existing) => overlay_toml(existing, value),
                    None => value,
                };
                under.insert(key, layered);
            }
            Table(under)
        }
        (_, top) => top,
    }
}

/// `{dir}/config.toml` as raw TOML, or `None` when the file doesn't exist.
pub fn read_config_file(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let file = dir.join("config.toml");
    if !file.is_file() {
        return Ok(None);
    }
    let text = fs::read_to_string(&file)?;
    Ok(Some(toml::from_str(&text)?))
}

/// Apply an optional user layer to `defaults`, then type-check and validate.
pub fn build_config(
    defaults: toml::Value,
    user: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let layered = match user {
        Some(user) => overlay_toml(defaults, user),
        None => defaults,
    };
    let config: SiteConfig = layered.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Config for the content directory `dir`.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    build_config(defaults_table()?, read_config_file(dir)?)
}

/// Annotated `config.toml` listing every key at its default, printed by
/// `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Newel Site Configuration
# ========================
# Every key below is shown at its default; delete the ones you keep as-is.
# The file goes in the content directory, beside site.toml. Keys this build
# does not know are rejected.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Appended to every page title: "Careers | Newel Technologies".
title_suffix = "Newel Technologies"

# Absolute origin for canonical links on legacy redirect pages.
# Leave empty for root-relative links.
base_url = ""

# Value of <html lang="...">.
language = "en"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
brand = "#5099ff"         # Buttons, highlights, scroll-drawn lines
brand_dark = "#3d7fd9"    # Hover state of brand elements
tint = "#f8fbff"          # Hero background wash
text = "#111827"
text_muted = "#6b7280"    # Secondary copy, captions
background = "#ffffff"
surface = "#f9fafb"       # Alternate section background
border = "#e2e8f0"        # Hairlines, card outlines

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Reveal line for sections without their own, as percent of viewport height.
# 80 means "when the element's top reaches 80% down the screen".
default_threshold = 80

# Pixels of scroll before the navbar switches to its solid style.
nav_scroll_threshold = 40

# Carousel auto-advance period in milliseconds (minimum 500).
carousel_interval_ms = 5000

# Seconds per loop for the two client-logo strips.
marquee_left_seconds = 28
marquee_right_seconds = 35

# Skip transforms, marquees and carousel auto-advance for visitors who ask
# for reduced motion.
honor_reduced_motion = true

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# URL the contact form posts JSON to.
# Omit to keep submission client-side only (fields are still validated).
# endpoint = "https://example.com/api/contact"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-rendering workers.
# Unset means one worker per CPU core.
# max_processes = 4
"##
}

/// `:root { --color-*: ... }` block for the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors.entries() {
        css.push_str(&format!(
            "    --color-{}: {};\n",
            name.replace('_', "-"),
            value
        ));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(text: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), text).unwrap();
        tmp
    }

    fn cores() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    #[test]
    fn defaults_match_brand() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.brand, "#5099ff");
        assert_eq!(config.site.title_suffix, "Newel Technologies");
        assert_eq!(config.site.language, "en");
        let m = &config.motion;
        assert_eq!(m.default_threshold, 80.0);
        assert_eq!(m.nav_scroll_threshold, 40.0);
        assert_eq!(m.carousel_interval_ms, 5000);
        assert_eq!((m.marquee_left_seconds, m.marquee_right_seconds), (28.0, 35.0));
        assert!(m.honor_reduced_motion);
    }

    #[test]
    fn one_color_set_keeps_the_rest() {
        let config: SiteConfig = toml::from_str("[colors]\nbrand = \"#ff0000\"").unwrap();
        assert_eq!(config.colors.brand, "#ff0000");
        assert_eq!(config.colors.text, "#111827");
        assert_eq!(config.motion.carousel_interval_ms, 5000);
    }

    #[test]
    fn endpoint_parsed() {
        let config: SiteConfig =
            toml::from_str("[contact]\nendpoint = \"https://example.com/send\"").unwrap();
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://example.com/send")
        );
    }

    #[test]
    fn palette_becomes_custom_properties() {
        let colors = ColorConfig {
            brand: "#123456".to_string(),
            ..ColorConfig::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-brand: #123456;"));
        assert!(css.contains("--color-brand-dark: #3d7fd9;"));
        assert_eq!(css.matches("--color-").count(), 8);
    }

    // =========================================================================
    // Loading from disk
    // =========================================================================

    #[test]
    fn no_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.brand, "#5099ff");
        assert!(config.contact.endpoint.is_none());
    }

    #[test]
    fn file_values_layer_over_defaults() {
        let tmp = write_config("[motion]\ncarousel_interval_ms = 7000\n\n[site]\nlanguage = \"en-IN\"\n");
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.motion.carousel_interval_ms, 7000);
        assert_eq!(config.site.language, "en-IN");
        assert_eq!(config.motion.default_threshold, 80.0);
        assert_eq!(config.motion.marquee_right_seconds, 35.0);
    }

    #[test]
    fn broken_toml_reported_as_toml_error() {
        let tmp = write_config("[motion\ncarousel_interval_ms = ");
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn misspelled_key_rejected() {
        let err = toml::from_str::<SiteConfig>("[motion]\ndefault_treshold = 75")
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown field"));
        assert!(toml::from_str::<SiteConfig>("[animations]\nspeed = 2").is_err());

        let tmp = write_config("[contact]\nurl = \"https://example.com\"");
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn out_of_range_file_fails_validation() {
        let tmp = write_config("[motion]\ndefault_threshold = 200");
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // Worker count
    // =========================================================================

    #[test]
    fn workers_default_to_cores() {
        assert_eq!(effective_threads(&ProcessingConfig::default()), cores());
    }

    #[test]
    fn workers_capped_at_cores() {
        let config = ProcessingConfig {
            max_processes: Some(4096),
        };
        assert_eq!(effective_threads(&config), cores());
    }

    #[test]
    fn workers_at_least_one() {
        for n in [0, 1] {
            let config = ProcessingConfig {
                max_processes: Some(n),
            };
            assert_eq!(effective_threads(&config), 1);
        }
    }

    // =========================================================================
    // Layering
    // =========================================================================

    #[test]
    fn top_scalar_wins() {
        let bottom: toml::Value = toml::from_str("interval = 5000").unwrap();
        let top: toml::Value = toml::from_str("interval = 7000").unwrap();
        let layered = overlay_toml(bottom, top);
        assert_eq!(layered.get("interval").unwrap().as_integer(), Some(7000));
    }

    #[test]
    fn nested_tables_merge_per_key() {
        let bottom: toml::Value =
            toml::from_str("[colors]\nbrand = \"#fff\"\ntext = \"#000\"").unwrap();
        let top: toml::Value = toml::from_str("[colors]\nbrand = \"#fafafa\"").unwrap();
        let colors = overlay_toml(bottom, top)["colors"].clone();
        assert_eq!(colors["brand"].as_str(), Some("#fafafa"));
        assert_eq!(colors["text"].as_str(), Some("#000"));
    }

    #[test]
    fn build_config_applies_user_layer() {
        let user: toml::Value = toml::from_str("[motion]\nmarquee_left_seconds = 20.0").unwrap();
        let config = build_config(defaults_table().unwrap(), Some(user)).unwrap();
        assert_eq!(config.motion.marquee_left_seconds, 20.0);
        assert_eq!(config.motion.marquee_right_seconds, 35.0);
    }

    #[test]
    fn defaults_table_lists_every_section() {
        let table = defaults_table().unwrap();
        for key in ["site", "colors", "motion", "processing"] {
            assert!(table.get(key).is_some(), "missing {key}");
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn threshold_must_be_a_percentage() {
        let mut config = SiteConfig::default();
        for ok in [0.0, 100.0] {
            config.motion.default_threshold = ok;
            assert!(config.validate().is_ok());
        }
        config.motion.default_threshold = 101.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_threshold"));
    }

    #[test]
    fn carousel_interval_has_a_floor() {
        let mut config = SiteConfig::default();
        config.motion.carousel_interval_ms = 499;
        assert!(config.validate().is_err());
        config.motion.carousel_interval_ms = 500;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn marquee_needs_positive_duration() {
        let mut config = SiteConfig::default();
        config.motion.marquee_right_seconds = 0.0;
        assert!(config.validate().is_err());
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            config.motion.marquee_right_seconds = 35.0;
            config.motion.marquee_left_seconds = bad;
            assert!(config.validate().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn nav_threshold_must_be_finite() {
        let mut config = SiteConfig::default();
        config.motion.nav_scroll_threshold = 0.0;
        assert!(config.validate().is_ok());
        for bad in [f64::NAN, f64::INFINITY, -0.5] {
            config.motion.nav_scroll_threshold = bad;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("nav_scroll_threshold"));
        }
    }

    #[test]
    fn nan_and_inf_in_file_fail_validation() {
        for text in [
            "[motion]\nmarquee_left_seconds = nan",
            "[motion]\nnav_scroll_threshold = nan",
            "[motion]\nmarquee_right_seconds = inf",
            "[motion]\ndefault_threshold = nan",
        ] {
            let tmp = write_config(text);
            assert!(
                matches!(load_config(tmp.path()), Err(ConfigError::Validation(_))),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn blank_color_named_in_error() {
        let mut config = SiteConfig::default();
        config.colors.surface = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.surface"));
    }

    #[test]
    fn blank_endpoint_rejected() {
        let mut config = SiteConfig::default();
        config.contact.endpoint = Some(String::new());
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // gen-config output
    // =========================================================================

    #[test]
    fn annotated_file_parses_to_defaults() {
        let text = stock_config_toml();
        for section in ["[site]", "[colors]", "[motion]", "[contact]", "[processing]"] {
            assert!(text.contains(section), "missing {section}");
        }
        let config: SiteConfig = toml::from_str(text).unwrap();
        assert_eq!(config.colors.brand, "#5099ff");
        assert_eq!(config.motion.carousel_interval_ms, 5000);
        assert_eq!(config.motion.default_threshold, 80.0);
        assert!(config.contact.endpoint.is_none());
        assert!(config.validate().is_ok());
    }
}
