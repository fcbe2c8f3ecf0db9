use serde::Deserialize;

use crate::ConfigError;
use crate::capture::GridSize;

pub const MAX_GRID: usize = 12;
pub const MAX_MARKERS: usize = 10_000;

/// Page configuration. Defaults describe the stock demo; a host page may
/// supply JSON overrides and the URL query string overrides both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub rows: usize,
    pub cols: usize,
    pub marker_count: usize,
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u32,
    pub locate_zoom: u32,
    pub max_zoom: u32,
    pub tile_url: String,
    pub attribution: String,
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            marker_count: 1000,
            center: [39.4, -78.0],
            zoom: 7,
            locate_zoom: 15,
            max_zoom: 18,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every bound, whichever source the values came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("rows", self.rows as u64, 1, MAX_GRID as u64)?;
        check_range("cols", self.cols as u64, 1, MAX_GRID as u64)?;
        check_range("marker_count", self.marker_count as u64, 0, MAX_MARKERS as u64)?;
        check_range("zoom", self.zoom as u64, 0, self.max_zoom as u64)?;
        check_range("locate_zoom", self.locate_zoom as u64, 0, self.max_zoom as u64)?;
        Ok(())
    }

    /// Apply `rows`, `cols`, `markers`, `seed` and `zoom` from a `?a=b&c=d`
    /// query string. Unknown keys are ignored.
    pub fn apply_query(&mut self, search: &str) -> Result<(), ConfigError> {
        if let Some(v) = get_query_param(search, "rows") {
            self.rows = parse_bounded("rows", &v, 1, MAX_GRID as u64)? as usize;
        }
        if let Some(v) = get_query_param(search, "cols") {
            self.cols = parse_bounded("cols", &v, 1, MAX_GRID as u64)? as usize;
        }
        if let Some(v) = get_query_param(search, "markers") {
            self.marker_count = parse_bounded("markers", &v, 0, MAX_MARKERS as u64)? as usize;
        }
        if let Some(v) = get_query_param(search, "seed") {
            self.seed = Some(parse_bounded("seed", &v, 0, u64::MAX)?);
        }
        if let Some(v) = get_query_param(search, "zoom") {
            self.zoom = parse_bounded("zoom", &v, 0, self.max_zoom as u64)? as u32;
        }
        self.validate()
    }

    pub fn grid(&self) -> GridSize {
        GridSize {
            rows: self.rows,
            cols: self.cols,
        }
    }
}

fn parse_bounded(key: &str, value: &str, min: u64, max: u64) -> Result<u64, ConfigError> {
    let n: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    check_range(key, n, min, max)?;
    Ok(n)
}

fn check_range(key: &str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_defaults() {
        let mut cfg = PuzzleConfig::default();
        cfg.apply_query("?rows=3&cols=5&seed=42&markers=200").unwrap();
        assert_eq!(cfg.grid(), GridSize { rows: 3, cols: 5 });
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.marker_count, 200);
        assert_eq!(cfg.zoom, 7);
    }

    #[test]
    fn empty_query_keeps_defaults() {
        let mut cfg = PuzzleConfig::default();
        cfg.apply_query("").unwrap();
        assert_eq!(cfg, PuzzleConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = PuzzleConfig::default();
        assert_eq!(
            cfg.apply_query("rows=abc"),
            Err(ConfigError::InvalidNumber {
                key: "rows".to_string(),
                value: "abc".to_string()
            })
        );
        assert_eq!(
            cfg.apply_query("cols=0"),
            Err(ConfigError::OutOfRange {
                key: "cols".to_string(),
                value: 0
            })
        );
        assert!(cfg.apply_query("rows=99").is_err());
        assert!(cfg.apply_query("zoom=19").is_err());
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(
            get_query_param("?name=map%20puzzle&x=1", "name").as_deref(),
            Some("map puzzle")
        );
        assert_eq!(get_query_param("a=b+c", "a").as_deref(), Some("b c"));
        assert_eq!(get_query_param("a=b", "z"), None);
    }

    #[test]
    fn json_overrides_partial_fields() {
        let cfg = PuzzleConfig::from_json(r#"{"rows": 2, "center": [51.5, -0.1]}"#).unwrap();
        assert_eq!(cfg.rows, 2);
        assert_eq!(cfg.cols, 4);
        assert_eq!(cfg.center, [51.5, -0.1]);
        assert!(PuzzleConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_is_held_to_query_bounds() {
        assert_eq!(
            PuzzleConfig::from_json(r#"{"rows": 0}"#),
            Err(ConfigError::OutOfRange {
                key: "rows".to_string(),
                value: 0
            })
        );
        assert_eq!(
            PuzzleConfig::from_json(r#"{"cols": 5000}"#),
            Err(ConfigError::OutOfRange {
                key: "cols".to_string(),
                value: 5000
            })
        );
        assert_eq!(
            PuzzleConfig::from_json(r#"{"marker_count": 99999999}"#),
            Err(ConfigError::OutOfRange {
                key: "marker_count".to_string(),
                value: 99999999
            })
        );
        assert!(PuzzleConfig::from_json(r#"{"max_zoom": 10, "locate_zoom": 15}"#).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PuzzleConfig::default().validate(), Ok(()));
    }
}
