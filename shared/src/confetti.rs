use std::f64::consts::PI;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::CONFETTI_PALETTE;
use crate::wheel_render::WheelSurface;

pub const CONFETTI_PIECES: usize = 50;
pub const PIECE_WIDTH: f64 = 6.0;
pub const PIECE_HEIGHT: f64 = 12.0;
const MIN_SPEED: f64 = 2.0;
const MAX_SPEED: f64 = 5.0;
const SPIN_PER_FRAME: f64 = 0.05;
// Pieces count as gone once they are this far below the bottom edge
const EXIT_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub angle: f64,
    pub color: &'static str,
}

/// A one-shot shower of paper rectangles over the wheel.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    height: f64,
}

impl ConfettiBurst {
    /// Scatters pieces across the width, up to one full frame height above the top edge.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let pieces = (0..CONFETTI_PIECES)
            .map(|_| ConfettiPiece {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height - height,
                speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
                angle: rng.gen::<f64>() * PI,
                color: CONFETTI_PALETTE.choose(rng).copied().unwrap_or(CONFETTI_PALETTE[0]),
            })
            .collect();

        Self { pieces, height }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Moves every piece down by its speed and spins it a little.
    pub fn advance(&mut self) {
        for piece in &mut self.pieces {
            piece.y += piece.speed;
            piece.angle += SPIN_PER_FRAME;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.pieces.iter().all(|p| p.y >= self.height + EXIT_MARGIN)
    }

    pub fn draw<S: WheelSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for piece in &self.pieces {
            surface.fill_rotated_rect((piece.x, piece.y), PIECE_WIDTH, PIECE_HEIGHT, piece.angle, piece.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_render::recording::{DrawOp, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_above_frame() {
        let mut rng = StdRng::seed_from_u64(1);
        let burst = ConfettiBurst::spawn(&mut rng, 400.0, 300.0);

        assert_eq!(burst.pieces().len(), CONFETTI_PIECES);
        for piece in burst.pieces() {
            assert!((0.0..400.0).contains(&piece.x));
            assert!((-300.0..0.0).contains(&piece.y));
            assert!((MIN_SPEED..MAX_SPEED).contains(&piece.speed));
            assert!((0.0..PI).contains(&piece.angle));
            assert!(CONFETTI_PALETTE.contains(&piece.color));
        }
        assert!(!burst.is_finished());
    }

    #[test]
    fn test_pieces_fall_and_spin() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut burst = ConfettiBurst::spawn(&mut rng, 200.0, 200.0);
        let before = burst.pieces().to_vec();
        burst.advance();

        for (old, new) in before.iter().zip(burst.pieces()) {
            assert_eq!(new.x, old.x);
            assert_eq!(new.y, old.y + old.speed);
            assert!((new.angle - old.angle - SPIN_PER_FRAME).abs() < 1e-12);
        }
    }

    #[test]
    fn test_burst_finishes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = ConfettiBurst::spawn(&mut rng, 400.0, 400.0);

        // Slowest piece needs (2h + margin) / min speed frames
        let limit = ((2.0 * 400.0 + EXIT_MARGIN) / MIN_SPEED).ceil() as usize + 1;
        let mut frames = 0;
        while !burst.is_finished() {
            burst.advance();
            frames += 1;
            assert!(frames <= limit);
        }
        assert!(burst.pieces().iter().all(|p| p.y >= 420.0));
    }

    #[test]
    fn test_draw_one_rect_per_piece() {
        let mut rng = StdRng::seed_from_u64(4);
        let burst = ConfettiBurst::spawn(&mut rng, 100.0, 100.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        burst.draw(&mut surface);

        assert_eq!(surface.ops[0], DrawOp::Clear);
        let rects = surface.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
        assert_eq!(rects, CONFETTI_PIECES);
    }
}
