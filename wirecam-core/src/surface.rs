/// Interface the core needs from a graphics backend
use crate::projection::ScreenPoint;

/// Linear RGBA color.
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const GRAY: Color = [0.4, 0.4, 0.4, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// The four operations the frame orchestrator performs against a
/// display surface. Backends record or draw as they see fit; one
/// frame is always `clear`, any number of draws, then `present`.
pub trait RenderSurface {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color, width: f32);
    fn draw_point(&mut self, p: ScreenPoint, color: Color, radius: f32);
    fn present(&mut self);
}
