//! Layer composition and isolated loading for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::Value;

use crate::MarqueeConfig;

/// Source a configuration layer stands in for.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order, later layers taking precedence.
pub fn merge(layers: &[(Layer, Value)]) -> MarqueeConfig {
    let composer = layers
        .iter()
        .fold(MergeComposer::new(), |mut composer, (layer, value)| {
            let owned = value.clone();
            match layer {
                Layer::Defaults => composer.push_defaults(owned),
                Layer::File => composer.push_file(owned, None),
                Layer::Environment => composer.push_environment(owned),
                Layer::Cli => composer.push_cli(owned),
            }
            composer
        });
    MarqueeConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}

/// Loads configuration from `cli_args` with `MARQUEE_API_URL` set to
/// `env_api_url` and home directories pointing at an empty temporary
/// directory, so no user configuration file is discovered.
pub fn load_isolated(env_api_url: Option<&str>, cli_args: &[&str]) -> MarqueeConfig {
    let sandbox = tempfile::tempdir().expect("sandbox directory should be created");
    let sandbox_path = sandbox.path().to_string_lossy().into_owned();
    let _env = env_lock::lock_env([
        ("MARQUEE_API_URL", env_api_url),
        ("HOME", Some(sandbox_path.as_str())),
        ("XDG_CONFIG_HOME", Some(sandbox_path.as_str())),
    ]);

    let argv = std::iter::once("marquee")
        .chain(cli_args.iter().copied())
        .map(OsString::from);
    MarqueeConfig::load_from_iter(argv).expect("configuration should load")
}
