//! Drag and resize gesture sessions.
//!
//! A session captures the pointer and geometry at gesture start; each
//! pointer-move computes fresh geometry from the *origin* plus the total
//! delta, never from the previous frame, so the math is pure and a lost
//! event can't accumulate drift.

use crate::geometry::{Position, Size};

pub const MIN_WIDTH: i32 = 300;
pub const MIN_HEIGHT: i32 = 200;

/// Compass tag of the edge or corner hit region a resize started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// CSS cursor for the hit region.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::North | Self::South => "ns-resize",
            Self::East | Self::West => "ew-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
        }
    }
}

/// Live resize gesture: one per captured pointer, discarded on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub origin_pointer: Position,
    pub origin_position: Position,
    pub origin_size: Size,
}

impl ResizeSession {
    pub fn new(edge: ResizeEdge, pointer: Position, position: Position, size: Size) -> Self {
        Self {
            edge,
            origin_pointer: pointer,
            origin_position: position,
            origin_size: size,
        }
    }

    /// Geometry for the current pointer location.
    ///
    /// East/south edges track the pointer with the size floored. West/north
    /// edges must move the origin to keep the opposite edge pinned, and
    /// below the floor they stop tracking entirely: both size and position
    /// freeze at the last value that satisfied the floor, so the origin
    /// never runs past the cursor.
    pub fn update(&self, pointer: Position) -> (Size, Position) {
        let dx = pointer.x - self.origin_pointer.x;
        let dy = pointer.y - self.origin_pointer.y;

        let mut size = self.origin_size;
        let mut position = self.origin_position;

        if self.edge.has_east() {
            size.width = (self.origin_size.width + dx).max(MIN_WIDTH);
        }
        if self.edge.has_south() {
            size.height = (self.origin_size.height + dy).max(MIN_HEIGHT);
        }
        if self.edge.has_west() {
            let candidate = self.origin_size.width - dx;
            if candidate >= MIN_WIDTH {
                size.width = candidate;
                position.x = self.origin_position.x + dx;
            } else {
                size.width = MIN_WIDTH;
                position.x = self.origin_position.x + (self.origin_size.width - MIN_WIDTH);
            }
        }
        if self.edge.has_north() {
            let candidate = self.origin_size.height - dy;
            if candidate >= MIN_HEIGHT {
                size.height = candidate;
                position.y = self.origin_position.y + dy;
            } else {
                size.height = MIN_HEIGHT;
                position.y = self.origin_position.y + (self.origin_size.height - MIN_HEIGHT);
            }
        }

        (size, position)
    }
}

/// Live title-bar drag: total pointer delta applied to the origin position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin_pointer: Position,
    pub origin_position: Position,
}

impl DragSession {
    pub fn new(pointer: Position, position: Position) -> Self {
        Self {
            origin_pointer: pointer,
            origin_position: position,
        }
    }

    pub fn update(&self, pointer: Position) -> Position {
        Position::new(
            self.origin_position.x + (pointer.x - self.origin_pointer.x),
            self.origin_position.y + (pointer.y - self.origin_pointer.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EDGES: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    fn session(edge: ResizeEdge) -> ResizeSession {
        ResizeSession::new(
            edge,
            Position::new(1000, 1000),
            Position::new(100, 120),
            Size::new(640, 480),
        )
    }

    #[test]
    fn east_edge_tracks_pointer() {
        let (size, position) = session(ResizeEdge::East).update(Position::new(1150, 1000));
        assert_eq!(size, Size::new(790, 480));
        assert_eq!(position, Position::new(100, 120));
    }

    #[test]
    fn south_edge_tracks_pointer() {
        let (size, position) = session(ResizeEdge::South).update(Position::new(1000, 1070));
        assert_eq!(size, Size::new(640, 550));
        assert_eq!(position, Position::new(100, 120));
    }

    #[test]
    fn west_edge_moves_origin_to_pin_east_edge() {
        let (size, position) = session(ResizeEdge::West).update(Position::new(1100, 1000));
        assert_eq!(size, Size::new(540, 480));
        assert_eq!(position, Position::new(200, 120));
        // East edge stays at x=740 either way.
        assert_eq!(position.x + size.width, 100 + 640);
    }

    #[test]
    fn north_edge_moves_origin_to_pin_south_edge() {
        let (size, position) = session(ResizeEdge::North).update(Position::new(1000, 960));
        assert_eq!(size, Size::new(640, 520));
        assert_eq!(position, Position::new(100, 80));
        assert_eq!(position.y + size.height, 120 + 480);
    }

    #[test]
    fn floors_hold_for_every_direction() {
        // Pointer flung far into the window from every side at once.
        for edge in ALL_EDGES {
            let (size, _) = session(edge).update(Position::new(
                if edge.has_west() { 3000 } else { -3000 },
                if edge.has_north() { 3000 } else { -3000 },
            ));
            assert!(size.width >= MIN_WIDTH, "{edge:?} violated width floor");
            assert!(size.height >= MIN_HEIGHT, "{edge:?} violated height floor");
        }
    }

    #[test]
    fn west_edge_freezes_position_at_the_floor() {
        // 640 wide, dragged 500px rightward: width clamps at 300 and x
        // advances by exactly 640-300=340, not 500.
        let (size, position) = session(ResizeEdge::West).update(Position::new(1500, 1000));
        assert_eq!(size.width, MIN_WIDTH);
        assert_eq!(position.x, 100 + 340);
    }

    #[test]
    fn north_edge_freezes_position_at_the_floor() {
        let (size, position) = session(ResizeEdge::North).update(Position::new(1000, 1500));
        assert_eq!(size.height, MIN_HEIGHT);
        assert_eq!(position.y, 120 + (480 - MIN_HEIGHT));
    }

    #[test]
    fn corner_resizes_act_on_both_axes() {
        let (size, position) = session(ResizeEdge::NorthWest).update(Position::new(1040, 1030));
        assert_eq!(size, Size::new(600, 450));
        assert_eq!(position, Position::new(140, 150));

        let (size, position) = session(ResizeEdge::SouthEast).update(Position::new(1040, 1030));
        assert_eq!(size, Size::new(680, 510));
        assert_eq!(position, Position::new(100, 120));
    }

    #[test]
    fn update_is_pure_in_the_origin() {
        let s = session(ResizeEdge::SouthEast);
        let once = s.update(Position::new(1050, 1050));
        let _ = s.update(Position::new(900, 900));
        assert_eq!(once, s.update(Position::new(1050, 1050)));
    }

    #[test]
    fn drag_accumulates_total_delta() {
        let drag = DragSession::new(Position::new(400, 300), Position::new(50, 50));
        assert_eq!(drag.update(Position::new(460, 250)), Position::new(110, 0));
        // A drag may settle off-viewport; nothing clamps it.
        assert_eq!(
            drag.update(Position::new(-200, -100)),
            Position::new(-550, -350)
        );
    }
}
