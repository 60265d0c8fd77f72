//! Render readback
//!
//! Plain, serializable copies of what the renderer needs after a frame.
//! Nothing here feeds back into the simulation.

use serde::Serialize;

use crate::core::Vec2;
use crate::domain::{Body, KindTag};

use super::ArenaCore;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: KindTag,
    pub color: &'static str,
    pub border_color: Option<&'static str>,
    pub border: f64,
    pub score: Option<u32>,
    pub grapple_fraction: Option<f64>,
    pub grapple_anchor: Option<Vec2>,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        let player = body.player_state();
        Self {
            x: body.position.x,
            y: body.position.y,
            width: body.width,
            height: body.height,
            kind: body.tag(),
            color: body.style.color,
            border_color: body.style.border_color,
            border: body.style.border,
            score: body.score(),
            grapple_fraction: player.map(|p| p.grapple_fraction),
            grapple_anchor: player.and_then(|p| p.grapple_anchor()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub slot: usize,
    pub position: Vec2,
    pub score: u32,
    pub grappling: bool,
    pub anchor: Option<Vec2>,
    /// Anchor a grapple would attach to right now, if any is in range
    pub nearest_anchor: Option<Vec2>,
    pub grapple_fraction: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub width: f64,
    pub height: f64,
    pub bodies: Vec<BodyView>,
    pub players: Vec<PlayerView>,
    pub anchors: Vec<Vec2>,
    pub grapple_range: f64,
}

pub(super) fn snapshot(arena: &ArenaCore) -> RenderSnapshot {
    let players = arena
        .players
        .iter()
        .filter_map(|&key| arena.registry.get(key))
        .filter_map(|body| {
            let state = body.player_state()?;
            Some(PlayerView {
                slot: state.slot,
                position: body.position,
                score: state.score,
                grappling: state.is_grappling(),
                anchor: state.grapple_anchor(),
                nearest_anchor: arena
                    .layout
                    .reachable_anchor(body.position)
                    .map(|(anchor, _)| anchor),
                grapple_fraction: state.grapple_fraction,
            })
        })
        .collect();

    RenderSnapshot {
        frame: arena.frame,
        width: arena.layout.width,
        height: arena.layout.height,
        bodies: arena.registry.bodies().iter().map(BodyView::from).collect(),
        players,
        anchors: arena.layout.anchors.clone(),
        grapple_range: arena.layout.grapple_range,
    }
}

pub(super) fn snapshot_json(arena: &ArenaCore) -> String {
    serde_json::to_string(&snapshot(arena)).unwrap_or_else(|_| "{}".to_string())
}
