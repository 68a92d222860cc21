// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::{Path, PathBuf};

use rune_cfg::RuneConfig;

use cropit_core::geometry::MAX_DISPLAY_SIZE;
use cropit_core::rect::{DEFAULT_CROP_SIZE, MIN_CROP_SIZE};

use crate::error::{EditorError, Result};
use crate::raster::{DEFAULT_JPEG_QUALITY, OutputFormat};

#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Longest display side of the editing viewport, in display pixels.
    pub max_display: f32,
    /// Initial selection square, in source pixels.
    pub default_crop_size: f32,
    /// Smallest the selection may shrink, in source pixels.
    pub min_crop_size: f32,
    /// Painted grip side, in display pixels.
    pub handle_size: i32,
    /// Grip hotspot side for hit-testing, in display pixels.
    pub handle_hit: f32,
    pub border_thickness: i32,
    pub accent_colour: u32, // ARGB
    pub output: OutputFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_display: MAX_DISPLAY_SIZE,
            default_crop_size: DEFAULT_CROP_SIZE,
            min_crop_size: MIN_CROP_SIZE,
            handle_size: 8,
            handle_hit: 20.0,
            border_thickness: 2,
            accent_colour: 0xFF0A_84FF, // default blue
            output: OutputFormat::default(),
        }
    }
}

pub fn load() -> Result<EditorConfig> {
    load_path(&default_user_config_path())
}

/// Read config from `path`, falling back to defaults when the file does
/// not exist. A file that exists but fails to parse is an error.
pub fn load_path(path: &Path) -> Result<EditorConfig> {
    if !path.exists() {
        return Ok(EditorConfig::default());
    }

    let rc = RuneConfig::from_file(path)
        .map_err(|e| EditorError::Config(format!("failed to read config: {e}")))?;

    parse_config(&rc).map_err(EditorError::Config)
}

fn parse_config(rc: &RuneConfig) -> std::result::Result<EditorConfig, String> {
    let mut cfg = EditorConfig::default();

    if !rc.has("cropit") {
        return Ok(cfg);
    }

    // max_display
    if let Some(v) = get_f32(rc, "cropit.max_display")? {
        if v <= 0.0 {
            return Err("config error at cropit.max_display: must be positive".into());
        }
        cfg.max_display = v;
    }

    // default_crop_size
    if let Some(v) = get_f32(rc, "cropit.default_crop_size")? {
        if v <= 0.0 {
            return Err("config error at cropit.default_crop_size: must be positive".into());
        }
        cfg.default_crop_size = v;
    }

    // min_crop_size
    if let Some(v) = get_f32(rc, "cropit.min_crop_size")? {
        if v <= 0.0 {
            return Err("config error at cropit.min_crop_size: must be positive".into());
        }
        cfg.min_crop_size = v;
    }

    // handle_size
    if let Some(v) = get_i32(rc, "cropit.handle_size")? {
        if v <= 0 {
            return Err("config error at cropit.handle_size: must be positive".into());
        }
        cfg.handle_size = v;
    }

    // handle_hit_size
    if let Some(v) = get_f32(rc, "cropit.handle_hit_size")? {
        if v <= 0.0 {
            return Err("config error at cropit.handle_hit_size: must be positive".into());
        }
        cfg.handle_hit = v;
    }

    // border_thickness
    if let Some(v) = get_i32(rc, "cropit.border_thickness")? {
        if v < 0 {
            return Err("config error at cropit.border_thickness: must not be negative".into());
        }
        cfg.border_thickness = v;
    }

    // accent_colour
    if let Some(colour_str) = rc
        .get_optional::<String>("cropit.accent_colour")
        .map_err(|e| format!("config error at cropit.accent_colour: {e}"))?
    {
        cfg.accent_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at cropit.accent_colour: {e}"))?;
    }

    // output_format + jpeg_quality
    let mut want_png = matches!(cfg.output, OutputFormat::Png);
    let mut jpeg_quality = DEFAULT_JPEG_QUALITY;

    if let Some(fmt) = rc
        .get_optional::<String>("cropit.output_format")
        .map_err(|e| format!("config error at cropit.output_format: {e}"))?
    {
        want_png = match fmt.trim().to_lowercase().as_str() {
            "jpeg" | "jpg" => false,
            "png" => true,
            other => {
                return Err(format!(
                    "config error at cropit.output_format: expected jpeg|png, got \"{}\"",
                    other
                ));
            }
        };
    }

    if let Some(q) = get_i32(rc, "cropit.jpeg_quality")? {
        if !(1..=100).contains(&q) {
            return Err("config error at cropit.jpeg_quality: expected 1-100".into());
        }
        jpeg_quality = q as u8;
    }

    cfg.output = if want_png {
        OutputFormat::Png
    } else {
        OutputFormat::Jpeg {
            quality: jpeg_quality,
        }
    };

    Ok(cfg)
}

fn get_f32(rc: &RuneConfig, key: &str) -> std::result::Result<Option<f32>, String> {
    let Some(raw) = rc
        .get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))?
    else {
        return Ok(None);
    };

    let v = raw
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("config error at {key}: expected a number, got \"{raw}\""))?;
    Ok(Some(v))
}

fn get_i32(rc: &RuneConfig, key: &str) -> std::result::Result<Option<i32>, String> {
    let Some(raw) = rc
        .get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))?
    else {
        return Ok(None);
    };

    let v = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("config error at {key}: expected an integer, got \"{raw}\""))?;
    Ok(Some(v))
}

fn parse_hex_colour(s: &str) -> std::result::Result<u32, String> {
    let s = s.trim();

    if !s.starts_with('#') {
        return Err("colour must start with #".into());
    }

    let hex = &s[1..];

    if hex.len() != 6 {
        return Err("colour must be 6 hex digits (RRGGBB)".into());
    }

    let rgb = u32::from_str_radix(hex, 16).map_err(|_| "invalid hex colour".to_string())?;

    Ok(0xFF00_0000 | rgb)
}

fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("cropit").join("cropit.rune")
}
