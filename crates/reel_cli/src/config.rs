//! Scene file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use reel_animation::TimingFunction;

/// Top-level scene description (scene.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub tracks: Vec<TrackConfig>,
    pub animation: AnimationConfig,
}

/// Driver settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// Scheduler frame rate for `reel play`
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Number of evenly spaced samples for `reel sample`
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_fps() -> u32 {
    60
}

fn default_samples() -> usize {
    11
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            samples: default_samples(),
        }
    }
}

/// A named scalar the animation writes to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackConfig {
    pub name: String,
    #[serde(default)]
    pub initial: f64,
}

/// One node of the animation tree
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationConfig {
    Basic {
        track: String,
        from: f64,
        to: f64,
        duration: f64,
        #[serde(default)]
        timing: TimingConfig,
    },
    KeyPoints {
        track: String,
        #[serde(default)]
        initial: f64,
        duration: f64,
        #[serde(default)]
        points: Vec<KeyPointConfig>,
    },
    Group {
        #[serde(default)]
        children: Vec<AnimationConfig>,
    },
    Sequence {
        #[serde(default)]
        children: Vec<AnimationConfig>,
    },
    Invert {
        child: Box<AnimationConfig>,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyPointConfig {
    pub value: f64,
    pub time: f64,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Named timing functions available to scene files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingConfig {
    #[default]
    Linear,
    EaseInOut,
}

impl From<TimingConfig> for TimingFunction {
    fn from(timing: TimingConfig) -> Self {
        match timing {
            TimingConfig::Linear => TimingFunction::Linear,
            TimingConfig::EaseInOut => TimingFunction::EaseInOut,
        }
    }
}

impl SceneConfig {
    /// Load a scene from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "No scene found at {}. Run `reel init {}` to create one.",
                path.display(),
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a scene from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// A small scene exercising every node kind
    pub fn sample() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            tracks: vec![
                TrackConfig {
                    name: "x".to_string(),
                    initial: 0.0,
                },
                TrackConfig {
                    name: "opacity".to_string(),
                    initial: 0.0,
                },
            ],
            animation: AnimationConfig::Sequence {
                children: vec![
                    AnimationConfig::Group {
                        children: vec![
                            AnimationConfig::Basic {
                                track: "x".to_string(),
                                from: 0.0,
                                to: 100.0,
                                duration: 1.0,
                                timing: TimingConfig::EaseInOut,
                            },
                            AnimationConfig::Basic {
                                track: "opacity".to_string(),
                                from: 0.0,
                                to: 1.0,
                                duration: 0.5,
                                timing: TimingConfig::Linear,
                            },
                        ],
                    },
                    AnimationConfig::KeyPoints {
                        track: "x".to_string(),
                        initial: 100.0,
                        duration: 1.0,
                        points: vec![
                            KeyPointConfig {
                                value: 150.0,
                                time: 0.5,
                                timing: TimingConfig::Linear,
                            },
                            KeyPointConfig {
                                value: 120.0,
                                time: 1.0,
                                timing: TimingConfig::EaseInOut,
                            },
                        ],
                    },
                    AnimationConfig::Invert {
                        child: Box::new(AnimationConfig::Basic {
                            track: "opacity".to_string(),
                            from: 0.0,
                            to: 1.0,
                            duration: 0.5,
                            timing: TimingConfig::Linear,
                        }),
                    },
                ],
            },
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_scene_uses_defaults() {
        let scene = SceneConfig::from_toml_str(
            r#"
            [[tracks]]
            name = "x"

            [animation]
            kind = "basic"
            track = "x"
            from = 0
            to = 10
            duration = 2
            "#,
        )
        .unwrap();

        assert_eq!(scene.playback.fps, 60);
        assert_eq!(scene.playback.samples, 11);
        assert_eq!(scene.tracks[0].initial, 0.0);
        match scene.animation {
            AnimationConfig::Basic {
                to,
                duration,
                timing,
                ..
            } => {
                assert_eq!(to, 10.0);
                assert_eq!(duration, 2.0);
                assert_eq!(timing, TimingConfig::Linear);
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_scene() {
        let scene = SceneConfig::from_toml_str(
            r#"
            [playback]
            fps = 30

            [animation]
            kind = "sequence"

            [[animation.children]]
            kind = "key_points"
            track = "x"
            duration = 1.0
            points = [{ value = 5.0, time = 0.5 }, { value = 1.0, time = 1.0, timing = "ease_in_out" }]

            [[animation.children]]
            kind = "invert"
            child = { kind = "group", children = [] }
            "#,
        )
        .unwrap();

        assert_eq!(scene.playback.fps, 30);
        let AnimationConfig::Sequence { children } = scene.animation else {
            panic!("expected a sequence");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(
            &children[0],
            AnimationConfig::KeyPoints { points, .. } if points[1].timing == TimingConfig::EaseInOut
        ));
        assert!(matches!(&children[1], AnimationConfig::Invert { .. }));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = SceneConfig::from_toml_str(
            r#"
            [animation]
            kind = "spring"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_scene_survives_serialization() {
        let text = SceneConfig::sample().to_toml().unwrap();
        let scene = SceneConfig::from_toml_str(&text).unwrap();
        assert_eq!(scene.tracks.len(), 2);
        assert!(matches!(scene.animation, AnimationConfig::Sequence { ref children } if children.len() == 3));
    }
}
