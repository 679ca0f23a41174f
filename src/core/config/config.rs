use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Galaxy Backdrop".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    pub num_stars: usize,
    pub radius_range: SpawnRange<f32>,
    pub speed_range: SpawnRange<f32>,
}
impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            num_stars: 400,
            radius_range: SpawnRange { min: 0.2, max: 1.5 },
            speed_range: SpawnRange { min: 0.1, max: 0.6 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PulseConfig {
    /// Seconds per tween phase (grow / shrink each take one phase).
    pub phase_duration: f32,
    /// Per-star start delay; star i begins its loop at `i * stagger` seconds.
    pub stagger: f32,
    /// Radius multiplier at the peak of the grow phase.
    pub radius_peak: f32,
    pub alpha_low: f32,
    pub alpha_high: f32,
}
impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            phase_duration: 1.0,
            stagger: 0.1,
            radius_peak: 1.5,
            alpha_low: 0.2,
            alpha_high: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WarpConfig {
    /// Pixels of scroll depth per mouse-wheel line unit.
    pub scroll_step: f32,
    /// Depth divisor in the speed multiplier `1 + depth / divisor`.
    pub divisor: f32,
}
impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            scroll_step: 60.0,
            divisor: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleShape {
    #[default]
    Capsule,
    Sphere,
}

// Written as a plain string in RON ("capsule" / "sphere"). A bare enum
// identifier would not survive the layered `ron::Value` merge: ron 0.8
// parses it to `Value::Unit`, dropping the variant name.
impl<'de> serde::Deserialize<'de> for ParticleShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "capsule" => Ok(Self::Capsule),
            "sphere" => Ok(Self::Sphere),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["capsule", "sphere"],
            )),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AntigravityConfig {
    pub count: usize,
    /// Planar distance from the pointer within which targets are displaced.
    pub magnet_radius: f32,
    pub ring_radius: f32,
    pub wave_speed: f32,
    pub wave_amplitude: f32,
    pub particle_size: f32,
    /// Per-frame interpolation fraction toward the target (exponential smoothing).
    pub lerp_speed: f32,
    /// Linear RGB base color of the shared particle material.
    pub color: [f32; 3],
    pub opacity: f32,
    pub particle_variance: f32,
    pub rotation_speed: f32,
    /// Scales the initial depth scatter at spawn.
    pub depth_factor: f32,
    pub pulse_speed: f32,
    pub shape: ParticleShape,
    /// Magnet strength; targets are pushed away from the pointer (repulsion).
    pub field_strength: f32,
}
impl Default for AntigravityConfig {
    fn default() -> Self {
        Self {
            count: 300,
            magnet_radius: 10.0,
            ring_radius: 10.0,
            wave_speed: 0.4,
            wave_amplitude: 1.0,
            particle_size: 1.5,
            lerp_speed: 0.05,
            color: [0.32, 0.15, 1.0],
            opacity: 0.6,
            particle_variance: 1.0,
            rotation_speed: 0.0,
            depth_factor: 1.0,
            pulse_speed: 3.0,
            shape: ParticleShape::Capsule,
            field_strength: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GalaxyConfig {
    pub window: WindowConfig,
    pub starfield: StarfieldConfig,
    pub pulse: PulseConfig,
    pub warp: WarpConfig,
    pub antigravity: AntigravityConfig,
}

impl GalaxyConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge a base file plus overlay files (later files win per field).
    /// Returns the config, the paths actually used, and non-fatal error strings.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GalaxyConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GalaxyConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GalaxyConfig::default(), used, errors)
        }
    }

    /// Non-fatal sanity warnings; a bad config still runs (possibly invisibly).
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.starfield.num_stars == 0 {
            w.push("starfield.num_stars is 0; starfield will be empty".into());
        }
        if self.starfield.radius_range.min >= self.starfield.radius_range.max {
            w.push(format!(
                "starfield.radius_range inverted or empty ({}..{})",
                self.starfield.radius_range.min, self.starfield.radius_range.max
            ));
        }
        if self.starfield.speed_range.min >= self.starfield.speed_range.max {
            w.push(format!(
                "starfield.speed_range inverted or empty ({}..{})",
                self.starfield.speed_range.min, self.starfield.speed_range.max
            ));
        }
        if self.pulse.phase_duration <= 0.0 {
            w.push("pulse.phase_duration must be > 0; pulse disabled".into());
        }
        if !(0.0..=1.0).contains(&self.pulse.alpha_low)
            || !(0.0..=1.0).contains(&self.pulse.alpha_high)
        {
            w.push(format!(
                "pulse alpha endpoints outside [0,1] ({} / {})",
                self.pulse.alpha_low, self.pulse.alpha_high
            ));
        }
        if self.pulse.alpha_low > self.pulse.alpha_high {
            w.push("pulse.alpha_low exceeds pulse.alpha_high".into());
        }
        if self.pulse.radius_peak < 1.0 {
            w.push(format!(
                "pulse.radius_peak {} < 1.0; stars will shrink instead of swell",
                self.pulse.radius_peak
            ));
        }
        if self.warp.divisor <= 0.0 {
            w.push("warp.divisor must be > 0; falling back to 1000".into());
        }
        if self.antigravity.count == 0 {
            w.push("antigravity.count is 0; particle ring will be empty".into());
        }
        if self.antigravity.magnet_radius <= 0.0 {
            w.push("antigravity.magnet_radius must be > 0; magnet effect disabled".into());
        }
        if self.antigravity.lerp_speed <= 0.0 || self.antigravity.lerp_speed > 1.0 {
            w.push(format!(
                "antigravity.lerp_speed {} outside (0,1]; particles will not track targets",
                self.antigravity.lerp_speed
            ));
        }
        if self.antigravity.particle_variance >= self.antigravity.particle_size {
            w.push(format!(
                "antigravity.particle_variance {} >= particle_size {}; scale clamps at the floor each pulse trough",
                self.antigravity.particle_variance, self.antigravity.particle_size
            ));
        }
        if !(0.0..=1.0).contains(&self.antigravity.opacity) {
            w.push(format!(
                "antigravity.opacity {} outside [0,1]",
                self.antigravity.opacity
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_no_warnings() {
        assert!(GalaxyConfig::default().validate().is_empty());
    }

    #[test]
    fn inverted_ranges_warn() {
        let mut cfg = GalaxyConfig::default();
        cfg.starfield.radius_range = SpawnRange { min: 2.0, max: 1.0 };
        cfg.starfield.speed_range = SpawnRange { min: 0.6, max: 0.1 };
        let w = cfg.validate();
        assert!(w.iter().any(|m| m.contains("radius_range")));
        assert!(w.iter().any(|m| m.contains("speed_range")));
    }

    #[test]
    fn alpha_endpoints_checked() {
        let mut cfg = GalaxyConfig::default();
        cfg.pulse.alpha_high = 1.4;
        assert!(cfg
            .validate()
            .iter()
            .any(|m| m.contains("alpha endpoints outside")));
    }

    #[test]
    fn parse_partial_ron_fills_defaults() {
        let cfg: GalaxyConfig =
            ron::from_str("(starfield: (num_stars: 12))").expect("partial RON should parse");
        assert_eq!(cfg.starfield.num_stars, 12);
        assert_eq!(cfg.antigravity.count, 300);
        assert_eq!(cfg.pulse.alpha_low, 0.2);
    }

    #[test]
    fn particle_shape_parses_from_string() {
        let cfg: GalaxyConfig =
            ron::from_str("(antigravity: (shape: \"sphere\"))").expect("shape name should parse");
        assert_eq!(cfg.antigravity.shape, ParticleShape::Sphere);
        assert!(ron::from_str::<GalaxyConfig>("(antigravity: (shape: \"cube\"))").is_err());
    }

    #[test]
    fn particle_shape_survives_value_roundtrip() {
        // The layered loader goes through ron::Value; the shape must not be
        // flattened away on that path.
        let val: ron::value::Value =
            ron::from_str("(antigravity: (shape: \"sphere\"))").expect("parse to Value");
        let cfg: GalaxyConfig = val.into_rust().expect("Value into_rust");
        assert_eq!(cfg.antigravity.shape, ParticleShape::Sphere);
    }
}
