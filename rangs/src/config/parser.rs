//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::detail::{DetailLevel, RenderMode};
use crate::source::Resolution;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [data] section
    if let Some(section) = ini.section(Some("data")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.data.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("resolution") {
            config.data.resolution = v
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|level| Resolution::new(level).ok())
                .ok_or_else(|| invalid("data", "resolution", v, "must be 0 (finest) to 4 (coarsest)"))?;
        }
    }

    // [render] section
    if let Some(section) = ini.section(Some("render")) {
        if let Some(v) = section.get("detail") {
            config.render.detail = DetailLevel::from_str(v).map_err(|_| {
                invalid(
                    "render",
                    "detail",
                    v,
                    "must be one of: coastlines, lakes, islands_in_lakes, ponds_on_islands",
                )
            })?;
        }
        if let Some(v) = section.get("mode") {
            config.render.mode = RenderMode::from_str(v)
                .map_err(|_| invalid("render", "mode", v, "must be 'fill' or 'outline'"))?;
        }
        if let Some(v) = section.get("emit_all_boundary_points") {
            config.render.emit_all_boundary_points =
                parse_bool(v).ok_or_else(|| invalid("render", "emit_all_boundary_points", v, BOOL_REASON))?;
        }

        let view = &mut config.render.view;
        if let Some(north) = latitude(section, "north")? {
            view.north = north;
        }
        if let Some(south) = latitude(section, "south")? {
            view.south = south;
        }
        if let Some(west) = longitude(section, "west")? {
            view.west = west;
        }
        if let Some(east) = longitude(section, "east")? {
            view.east = east;
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("enabled") {
            config.cache.enabled =
                parse_bool(v).ok_or_else(|| invalid("cache", "enabled", v, BOOL_REASON))?;
        }
        if let Some(capacity) = capacity(section, "cache", "catalog")? {
            config.cache.catalog = capacity;
        }
        if let Some(capacity) = capacity(section, "cache", "opcodes")? {
            config.cache.opcodes = capacity;
        }
        if let Some(capacity) = capacity(section, "cache", "coordinates")? {
            config.cache.coordinates = capacity;
        }
        if let Some(capacity) = capacity(section, "cache", "rims")? {
            config.cache.rims = capacity;
        }
    }

    // [buffer] section
    if let Some(section) = ini.section(Some("buffer")) {
        if let Some(v) = section.get("capacity") {
            config.buffer.capacity = v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n >= 2)
                .ok_or_else(|| invalid("buffer", "capacity", v, "must be an integer of at least 2"))?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

const BOOL_REASON: &str = "must be true or false";

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn capacity(section: &Properties, name: &str, key: &str) -> Result<Option<usize>, ConfigFileError> {
    section
        .get(key)
        .map(|v| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| invalid(name, key, v, "must be a non-negative integer (0 disables)"))
        })
        .transpose()
}

fn degrees(section: &Properties, key: &str, min: f64, max: f64) -> Result<Option<f64>, ConfigFileError> {
    let Some(v) = section.get(key) else {
        return Ok(None);
    };
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && (min..=max).contains(d))
        .map(Some)
        .ok_or_else(|| {
            invalid(
                "render",
                key,
                v,
                &format!("must be a number of degrees between {} and {}", min, max),
            )
        })
}

fn latitude(section: &Properties, key: &str) -> Result<Option<f64>, ConfigFileError> {
    degrees(section, key, -90.0, 90.0)
}

fn longitude(section: &Properties, key: &str) -> Result<Option<f64>, ConfigFileError> {
    degrees(section, key, -360.0, 360.0)
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
