//! Keyboard and window input translation

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::game::EventSource;
use crate::sim::{Direction, InputEvent};

/// Arrow keys steer; everything else is ignored
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowRight => Some(Direction::Right),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        _ => None,
    }
}

/// Translate a winit key event. Only fresh presses count; auto-repeat and
/// releases are dropped.
pub fn translate_key(event: &KeyEvent) -> Option<InputEvent> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => map_key(code).map(InputEvent::KeyDown),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Events collected between ticks
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<InputEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl EventSource for EventQueue {
    fn poll(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_arrow_keys() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::ArrowRight), Some(Direction::Right));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::KeyW), None);
        assert_eq!(map_key(KeyCode::Space), None);
    }

    #[test]
    fn test_queue_drains() {
        let mut queue = EventQueue::default();
        queue.push(InputEvent::KeyDown(Direction::Up));
        queue.push(InputEvent::Quit);

        assert_eq!(
            queue.poll(),
            vec![InputEvent::KeyDown(Direction::Up), InputEvent::Quit]
        );
        assert!(queue.is_empty());
        assert!(queue.poll().is_empty());
    }
}
