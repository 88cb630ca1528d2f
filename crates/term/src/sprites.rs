//! Sprite storage for the terminal board.
//!
//! Handles are slot indices. Released slots go on a free list and are handed
//! out again by the next spawn, so a long session reuses the same few dozen
//! slots instead of growing.

use crate::core::BoardView;
use crate::types::{ChipType, GridPoint, ViewHandle};

/// Everything the game view needs to draw one chip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub chip: ChipType,
    pub at: GridPoint,
    pub scale: f32,
    pub selected: bool,
}

/// Pooled [`BoardView`] for the terminal.
#[derive(Debug, Default, Clone)]
pub struct SpriteBoard {
    slots: Vec<Option<Sprite>>,
    free: Vec<usize>,
}

impl SpriteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: ViewHandle) -> Option<&Sprite> {
        self.slots.get(handle.0 as usize).and_then(Option::as_ref)
    }

    /// Live sprites in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewHandle, &Sprite)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (ViewHandle(i as u64), s)))
    }

    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots ever allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot_mut(&mut self, handle: ViewHandle) -> Option<&mut Sprite> {
        self.slots.get_mut(handle.0 as usize).and_then(Option::as_mut)
    }
}

impl BoardView for SpriteBoard {
    fn spawn(&mut self, chip: ChipType, at: GridPoint) -> ViewHandle {
        let sprite = Sprite {
            chip,
            at,
            scale: 1.0,
            selected: false,
        };
        let index = match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(sprite);
                i
            }
            None => {
                self.slots.push(Some(sprite));
                self.slots.len() - 1
            }
        };
        ViewHandle(index as u64)
    }

    fn despawn(&mut self, handle: ViewHandle) {
        let i = handle.0 as usize;
        if let Some(slot) = self.slots.get_mut(i) {
            if slot.take().is_some() {
                self.free.push(i);
            }
        }
    }

    fn place(&mut self, handle: ViewHandle, at: GridPoint) {
        if let Some(s) = self.slot_mut(handle) {
            s.at = at;
        }
    }

    fn set_scale(&mut self, handle: ViewHandle, scale: f32) {
        if let Some(s) = self.slot_mut(handle) {
            s.scale = scale;
        }
    }

    fn set_selected(&mut self, handle: ViewHandle, selected: bool) {
        if let Some(s) = self.slot_mut(handle) {
            s.selected = selected;
        }
    }
}
