//! INI serialization: `ConfigFile` → commented INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let view = &config.render.view;

    format!(
        r#"[data]
; Directory holding rangs(N).cat, rangs(N).cel and gshhs(N).rim
directory = {}
; Resolution opened at start-up: 0 (finest) to 4 (coarsest)
resolution = {}

[render]
; Nesting depth drawn:
;   coastlines       - land against ocean only
;   lakes            - add lakes
;   islands-in-lakes - add islands in lakes
;   ponds-on-islands - add ponds on those islands
detail = {}
; fill (closed rings) or outline (shore polylines)
mode = {}
; Emit every point of inline boundary runs as shoreline (default: false)
emit_all_boundary_points = {}
; Initial view box in degrees
north = {}
west = {}
south = {}
east = {}

[cache]
; Set to false to disable all decode caches
enabled = {}
; Entry capacities; 0 disables a single cache
catalog = {}
opcodes = {}
coordinates = {}
rims = {}

[buffer]
; Points per fill ring or shore line before a forced flush
capacity = {}

[logging]
; Log directory (default: ~/.rangs/logs)
directory = {}
file = {}
"#,
        path_to_string(&config.data.directory),
        config.data.resolution.level(),
        config.render.detail,
        config.render.mode,
        config.render.emit_all_boundary_points,
        view.north,
        view.west,
        view.south,
        view.east,
        config.cache.enabled,
        config.cache.catalog,
        config.cache.opcodes,
        config.cache.coordinates,
        config.cache.rims,
        config.buffer.capacity,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Display a path, abbreviating the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::settings::ConfigFile;
    use crate::coord::ViewBox;
    use crate::detail::{DetailLevel, RenderMode};
    use crate::source::Resolution;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.data.directory = PathBuf::from("/srv/gshhs");
        config.data.resolution = Resolution::new(0).unwrap();
        config.render.detail = DetailLevel::IslandsInLakes;
        config.render.mode = RenderMode::Outline;
        config.render.emit_all_boundary_points = true;
        config.render.view = ViewBox::new(-10.5, 140.0, -44.0, 154.25);
        config.cache.rims = 0;
        config.buffer.capacity = 512;
        config.logging.file = "decode.log".to_string();

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_written_file_is_commented() {
        let content = super::to_config_string(&ConfigFile::default());
        assert!(content.contains("[cache]"));
        assert!(content.contains("; Entry capacities"));
        assert!(content.contains("mode = fill"));
    }
}
