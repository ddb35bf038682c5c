//! Building animation trees from scene descriptions

use anyhow::{Context, Result};

use reel_animation::{
    Animation, BasicAnimation, Group, KeyPoints, KeyPointsAnimation, Sequence, TimingFunction,
};
use reel_core::{validate_duration, AnimatableProperty};

use crate::config::{AnimationConfig, SceneConfig};

/// A named property the scene animates
pub struct Track {
    pub name: String,
    pub property: AnimatableProperty<f64>,
}

/// A built scene: its tracks and the root of its animation tree
pub struct Scene {
    pub tracks: Vec<Track>,
    pub root: Box<dyn Animation>,
}

impl Scene {
    pub fn build(config: &SceneConfig) -> Result<Self> {
        let mut tracks: Vec<Track> = Vec::with_capacity(config.tracks.len());
        for track in &config.tracks {
            if tracks.iter().any(|t| t.name == track.name) {
                anyhow::bail!("Track `{}` is declared twice", track.name);
            }
            let name = track.name.clone();
            let property = AnimatableProperty::new(track.initial, move |value| {
                tracing::trace!("{} = {}", name, value);
            });
            tracks.push(Track {
                name: track.name.clone(),
                property,
            });
        }

        let root = build_node(&config.animation, &tracks)?;
        tracing::debug!(
            "Built scene with {} tracks lasting {}s",
            tracks.len(),
            root.duration()
        );

        Ok(Self { tracks, root })
    }
}

/// Current value of every track, in declaration order
pub fn values(tracks: &[Track]) -> Vec<f64> {
    tracks.iter().map(|t| t.property.value()).collect()
}

fn lookup(tracks: &[Track], name: &str) -> Result<AnimatableProperty<f64>> {
    tracks
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.property.clone())
        .with_context(|| format!("Unknown track `{name}`"))
}

fn build_node(node: &AnimationConfig, tracks: &[Track]) -> Result<Box<dyn Animation>> {
    let animation = match node {
        AnimationConfig::Basic {
            track,
            from,
            to,
            duration,
            timing,
        } => {
            let duration = validate_duration(*duration)
                .with_context(|| format!("Invalid basic animation on `{track}`"))?;
            BasicAnimation::new(*from, *to, lookup(tracks, track)?, duration)
                .with_timing(TimingFunction::from(*timing))
                .boxed()
        }
        AnimationConfig::KeyPoints {
            track,
            initial,
            duration,
            points,
        } => {
            let points = points.iter().fold(KeyPoints::new(), |points, p| {
                points.point(p.value, p.time, p.timing.into())
            });
            KeyPointsAnimation::new(*initial, lookup(tracks, track)?, *duration, points)
                .with_context(|| format!("Invalid key points animation on `{track}`"))?
                .boxed()
        }
        AnimationConfig::Group { children } => Group::new(build_children(children, tracks)?)
            .context("Invalid group")?
            .boxed(),
        AnimationConfig::Sequence { children } => {
            Sequence::new(build_children(children, tracks)?)
                .context("Invalid sequence")?
                .boxed()
        }
        AnimationConfig::Invert { child } => build_node(child, tracks)?.inverted().boxed(),
    };
    Ok(animation)
}

fn build_children(children: &[AnimationConfig], tracks: &[Track]) -> Result<Vec<Box<dyn Animation>>> {
    children.iter().map(|child| build_node(child, tracks)).collect()
}
