use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::campus::Coordinates;
use crate::graph::Edge;

/// Compass heading of a single walking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl Direction {
    /// Classify an angle in radians, measured counter-clockwise from east.
    ///
    /// Each heading covers a 45° sector; boundaries at odd multiples of π/8
    /// belong to the first sector tested, in the order E, NE, N, NW, W, SW, S.
    pub fn from_angle(angle: f64) -> Self {
        if -PI / 8.0 <= angle && angle <= PI / 8.0 {
            Direction::E
        } else if PI / 8.0 <= angle && angle <= 3.0 * PI / 8.0 {
            Direction::NE
        } else if 3.0 * PI / 8.0 <= angle && angle <= 5.0 * PI / 8.0 {
            Direction::N
        } else if 5.0 * PI / 8.0 <= angle && angle <= 7.0 * PI / 8.0 {
            Direction::NW
        } else if -7.0 * PI / 8.0 >= angle || angle >= 7.0 * PI / 8.0 {
            Direction::W
        } else if -7.0 * PI / 8.0 <= angle && angle <= -5.0 * PI / 8.0 {
            Direction::SW
        } else if -5.0 * PI / 8.0 <= angle && angle <= -3.0 * PI / 8.0 {
            Direction::S
        } else {
            Direction::SE
        }
    }

    /// Heading from `from` to `to` on a map whose y axis points down.
    pub fn between(from: &Coordinates, to: &Coordinates) -> Self {
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        Self::from_angle((-dy).atan2(dx))
    }

    /// Heading of a walking edge.
    pub fn of_edge(edge: &Edge<Coordinates>) -> Self {
        Self::between(edge.start(), edge.destination())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::E => "E",
            Direction::NE => "NE",
            Direction::N => "N",
            Direction::NW => "NW",
            Direction::W => "W",
            Direction::SW => "SW",
            Direction::S => "S",
            Direction::SE => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(dx: f64, dy: f64) -> Direction {
        Direction::between(&Coordinates::new(0.0, 0.0), &Coordinates::new(dx, dy))
    }

    #[test]
    fn cardinal_headings_use_screen_coordinates() {
        assert_eq!(heading(5.0, 0.0), Direction::E);
        assert_eq!(heading(0.0, -5.0), Direction::N);
        assert_eq!(heading(0.0, 5.0), Direction::S);
        assert_eq!(heading(-5.0, 0.0), Direction::W);
    }

    #[test]
    fn diagonal_headings() {
        assert_eq!(heading(4.0, -4.0), Direction::NE);
        assert_eq!(heading(-4.0, -4.0), Direction::NW);
        assert_eq!(heading(-4.0, 4.0), Direction::SW);
        assert_eq!(heading(4.0, 4.0), Direction::SE);
    }

    #[test]
    fn boundaries_go_to_first_sector_tested() {
        assert_eq!(Direction::from_angle(PI / 8.0), Direction::E);
        assert_eq!(Direction::from_angle(3.0 * PI / 8.0), Direction::NE);
        assert_eq!(Direction::from_angle(7.0 * PI / 8.0), Direction::NW);
        assert_eq!(Direction::from_angle(-7.0 * PI / 8.0), Direction::W);
        assert_eq!(Direction::from_angle(-5.0 * PI / 8.0), Direction::SW);
        assert_eq!(Direction::from_angle(-3.0 * PI / 8.0), Direction::S);
        assert_eq!(Direction::from_angle(-PI / 8.0), Direction::E);
        assert_eq!(Direction::from_angle(PI), Direction::W);
        assert_eq!(Direction::from_angle(-PI), Direction::W);
    }

    #[test]
    fn zero_length_step_faces_east() {
        assert_eq!(heading(0.0, 0.0), Direction::E);
        assert_eq!(Direction::SE.to_string(), "SE");
    }
}
