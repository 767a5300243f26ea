mod axis_rectangle;
mod polyline;

pub use axis_rectangle::AxisRectangle;
pub use polyline::Polyline;
