//! Command-line interface

use rotorgeom::orientation::OrientationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    /// An articulated fish, turned by dragging
    Fish,
    /// A block world to walk through
    World,
}

/// Interactive rotor demo
///
/// Drag to spin the scene. In the fish scene, shift-click to poke the fish.
/// In the world scene, W/A/S/D walk, Q/E turn, Space and H raise and lower the water.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Args {
    /// Scene to show.
    #[arg(long, value_enum, default_value_t = SceneKind::Fish)]
    pub scene: SceneKind,

    /// Initial window width.
    #[arg(long, default_value_t = 1024.)]
    pub width: f32,

    /// Initial window height.
    #[arg(long, default_value_t = 768.)]
    pub height: f32,

    /// Re-normalize the orientation after this many updates (0 to never).
    #[arg(long, default_value_t = OrientationConfig::default().renormalize_every)]
    pub renormalize_every: u32,

    /// World size along X, Y and Z.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = [32, 16, 32])]
    pub world_size: Vec<usize>,
}

impl Args {
    pub fn orientation_config(&self) -> OrientationConfig {
        OrientationConfig {
            renormalize_every: self.renormalize_every,
        }
    }

    /// `[x, y, z]`, with missing sizes as zero
    pub fn world_size(&self) -> [usize; 3] {
        core::array::from_fn(|i| self.world_size.get(i).copied().unwrap_or(0))
    }
}

/// Windowing crates that log every event at debug level
const CHATTY_CRATES: [&str; 4] = ["winit", "glutin", "calloop", "smithay_client_toolkit"];

/// `RUST_LOG` filter for the demo
///
/// Starts from `existing` if set, else `debug` or `info` depending on the build,
/// and caps the windowing crates at `warn` unless the filter already mentions them.
pub fn log_filter(existing: Option<String>, debug_build: bool) -> String {
    let mut filter = existing.unwrap_or_else(|| {
        if debug_build {
            "debug".to_owned()
        } else {
            "info".to_owned()
        }
    });
    for name in CHATTY_CRATES {
        if !filter.contains(&format!("{name}=")) {
            filter += &format!(",{name}=warn");
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rotorgeom-demo"]);
        assert_eq!(args.scene, SceneKind::Fish);
        assert_eq!(args.world_size(), [32, 16, 32]);
        assert_eq!(args.orientation_config(), OrientationConfig::default());
    }

    #[test]
    fn world_options() {
        let args = Args::parse_from([
            "rotorgeom-demo",
            "--scene",
            "world",
            "--world-size",
            "8",
            "4",
            "6",
            "--renormalize-every",
            "0",
        ]);
        assert_eq!(args.scene, SceneKind::World);
        assert_eq!(args.world_size(), [8, 4, 6]);
        assert_eq!(args.orientation_config().renormalize_every, 0);
    }

    #[test]
    fn log_filter_defaults() {
        assert_eq!(
            log_filter(None, false),
            "info,winit=warn,glutin=warn,calloop=warn,smithay_client_toolkit=warn"
        );
        assert!(log_filter(None, true).starts_with("debug,"));
    }

    #[test]
    fn log_filter_keeps_user_caps() {
        let filter = log_filter(Some("trace,winit=info".to_owned()), true);
        assert!(filter.starts_with("trace,winit=info,"));
        assert!(!filter.contains("winit=warn"));
        assert!(filter.contains("glutin=warn"));
    }

    #[test]
    fn world_size_needs_three_values() {
        assert!(Args::try_parse_from(["rotorgeom-demo", "--world-size", "8", "4"]).is_err());
    }
}
