//! Tracks active touch points and turns raw touch events into canvas
//! gesture calls: one finger drags, two fingers pinch.

use std::collections::BTreeMap;

use egui::{Pos2, TouchPhase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchAction {
    StartDrag(Pos2),
    Drag(Pos2),
    EndDrag,
    StartPinch([Pos2; 2]),
    Pinch([Pos2; 2]),
    EndPinch,
}

#[derive(Debug, Default)]
pub struct TouchTracker {
    /// Ordered by id so the pinch pair is stable between events
    touches: BTreeMap<u64, Pos2>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.touches.is_empty()
    }

    fn pair(&self) -> Option<[Pos2; 2]> {
        let mut points = self.touches.values();
        Some([*points.next()?, *points.next()?])
    }

    fn single(&self) -> Option<Pos2> {
        self.touches.values().next().copied()
    }

    /// Record one touch event and return the gesture calls it implies.
    /// Touches beyond the second are tracked but ignored, as are moves and
    /// ends of touches that never started here.
    pub fn apply(&mut self, id: u64, phase: TouchPhase, pos: Pos2) -> Vec<TouchAction> {
        let before = self.touches.len();
        let known = match phase {
            TouchPhase::Start => {
                self.touches.insert(id, pos);
                true
            }
            TouchPhase::Move => match self.touches.get_mut(&id) {
                Some(point) => {
                    *point = pos;
                    true
                }
                None => false,
            },
            TouchPhase::End | TouchPhase::Cancel => self.touches.remove(&id).is_some(),
        };
        if !known {
            return Vec::new();
        }
        let after = self.touches.len();

        let mut actions = Vec::new();
        match phase {
            TouchPhase::Start => match after {
                1 => actions.push(TouchAction::StartDrag(pos)),
                2 => actions.extend(self.pair().map(TouchAction::StartPinch)),
                _ => {}
            },
            TouchPhase::Move => match after {
                1 => actions.push(TouchAction::Drag(pos)),
                2 => actions.extend(self.pair().map(TouchAction::Pinch)),
                _ => {}
            },
            TouchPhase::End | TouchPhase::Cancel => match (before, after) {
                (2, 1) => {
                    // The remaining finger keeps panning from where it is
                    actions.push(TouchAction::EndPinch);
                    actions.extend(self.single().map(TouchAction::StartDrag));
                }
                (1, 0) => actions.push(TouchAction::EndDrag),
                (3, 2) => actions.extend(self.pair().map(TouchAction::StartPinch)),
                _ => {}
            },
        }
        actions
    }
}
