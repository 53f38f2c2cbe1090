use nalgebra::Vector2;

/// Is the endpoint of `a` strictly above the line through the origin along `b`?
///
/// Evaluates the line `y = (By/Bx) x` at `Ax` and compares with `Ay`. A point on
/// the line is "not above" (returns `false`).
///
/// Pre: `Bx != 0`. Unchecked; a vertical `b` turns the slope into ±inf/NaN and
/// the comparison follows IEEE rules.
#[inline]
pub fn is_vector_endpoint_above_vector_slope(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    let slope = b.y / b.x;
    let line_y_at_ax = slope * a.x;
    a.y > line_y_at_ax
}
