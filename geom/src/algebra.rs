//! The geometry algebra on rectangles and sizes.
//!
//! All functions are free functions over [`RectLike`] and [`SizeLike`]. They never allocate and never fail: null, empty,
//! anti-normalized and disjoint rectangles are all regular input. Functions that produce a rectangle, size or point write it into a
//! `result` argument and leave every field they do not document untouched. [`or`] is the one exception, see its documentation.
//!
//! The edge convention is taken from the operands at runtime. With `adj` being [`crate::ScalarKind::adj`] of the inspected operand:
//! * width = `x2 - x1 + adj`, height = `y2 - y1 + adj`;
//! * null: `x2 == x1 - adj` and `y2 == y1 - adj`;
//! * an axis is anti-normalized when `x2 < x1 - adj`.
//!
//! Unless documented otherwise, `adj` comes from the first rectangle argument.

use crate::point::Point;
use crate::rect::{null_corners, RectLike, X1, X2, Y1, Y2};
use crate::scalar::fuzzy_eq;
use crate::size::SizeLike;

/// Returns whether the rectangle is the canonical empty rectangle of its kind.
pub fn is_null(r: &(impl RectLike + ?Sized)) -> bool {
    let adj = r.adj();
    let [x1, y1, x2, y2] = r.corners();
    fuzzy_eq(x2, x1 - adj) && fuzzy_eq(y2, y1 - adj)
}

/// Returns whether the rectangle covers nothing as stored, i.e. its width or height is zero or negative.
pub fn is_empty(r: &(impl RectLike + ?Sized)) -> bool {
    r.width() <= 0.0 || r.height() <= 0.0
}

/// Returns whether the rectangle covers something as stored. The opposite of [`is_empty`].
pub fn is_valid(r: &(impl RectLike + ?Sized)) -> bool {
    !is_empty(r)
}

/// Writes the width and height of `r` into `result`.
pub fn size_of(r: &(impl RectLike + ?Sized), result: &mut (impl SizeLike + ?Sized)) {
    result.set_dimensions([r.width(), r.height()]);
}

/// Moves the bottom-right corner so that `r` gets the provided size. The top-left corner stays where it is.
pub fn set_size(r: &mut (impl RectLike + ?Sized), size: &(impl SizeLike + ?Sized)) {
    r.set_width(size.width());
    r.set_height(size.height());
}

/// Reads the top-left corner.
pub fn top_left(r: &(impl RectLike + ?Sized), result: &mut Point) {
    result.x = r.slot(X1);
    result.y = r.slot(Y1);
}

/// Reads the bottom-right corner.
pub fn bottom_right(r: &(impl RectLike + ?Sized), result: &mut Point) {
    result.x = r.slot(X2);
    result.y = r.slot(Y2);
}

/// Reads the top-right corner.
pub fn top_right(r: &(impl RectLike + ?Sized), result: &mut Point) {
    result.x = r.slot(X2);
    result.y = r.slot(Y1);
}

/// Reads the bottom-left corner.
pub fn bottom_left(r: &(impl RectLike + ?Sized), result: &mut Point) {
    result.x = r.slot(X1);
    result.y = r.slot(Y2);
}

/// Repositions the top-left corner. The bottom-right corner stays where it is, so the size may change.
pub fn set_top_left(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    r.set_slot(X1, pos.x);
    r.set_slot(Y1, pos.y);
}

/// Repositions the bottom-right corner. The top-left corner stays where it is, so the size may change.
pub fn set_bottom_right(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    r.set_slot(X2, pos.x);
    r.set_slot(Y2, pos.y);
}

/// Repositions the top-right corner. The bottom-left corner stays where it is, so the size may change.
pub fn set_top_right(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    r.set_slot(X2, pos.x);
    r.set_slot(Y1, pos.y);
}

/// Repositions the bottom-left corner. The top-right corner stays where it is, so the size may change.
pub fn set_bottom_left(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    r.set_slot(X1, pos.x);
    r.set_slot(Y2, pos.y);
}

/// Writes the arithmetic mean of the corners on each axis into `result`.
///
/// There is no `adj` term: for integer rectangles the result is half a unit up and to the left of the geometric center of the
/// covered units. `(0, 0, 9, 9)` has its center at `(4.5, 4.5)`. Callers round this as they see fit.
pub fn center(r: &(impl RectLike + ?Sized), result: &mut Point) {
    let [x1, y1, x2, y2] = r.corners();
    result.x = (x1 + x2) / 2.0;
    result.y = (y1 + y2) / 2.0;
}

/// Rigidly shifts all four corners.
///
/// Integer rectangles can only move by whole units, so for them the deltas are rounded away from zero first. This keeps the size of
/// the rectangle intact regardless of how the storage truncates.
fn shift(r: &mut (impl RectLike + ?Sized), dx: f64, dy: f64) {
    let (dx, dy) = if r.kind().is_integer() {
        (dx.round(), dy.round())
    } else {
        (dx, dy)
    };
    let [x1, y1, x2, y2] = r.corners();
    r.set_corners([x1 + dx, y1 + dy, x2 + dx, y2 + dy]);
}

/// Slides `r` horizontally so that its left edge is at `at`. The size is preserved.
pub fn move_left(r: &mut (impl RectLike + ?Sized), at: f64) {
    let dx = at - r.slot(X1);
    shift(r, dx, 0.0);
}

/// Slides `r` vertically so that its top edge is at `at`. The size is preserved.
pub fn move_top(r: &mut (impl RectLike + ?Sized), at: f64) {
    let dy = at - r.slot(Y1);
    shift(r, 0.0, dy);
}

/// Slides `r` horizontally so that its right edge is at `at`. The size is preserved.
pub fn move_right(r: &mut (impl RectLike + ?Sized), at: f64) {
    let dx = at - r.slot(X2);
    shift(r, dx, 0.0);
}

/// Slides `r` vertically so that its bottom edge is at `at`. The size is preserved.
pub fn move_bottom(r: &mut (impl RectLike + ?Sized), at: f64) {
    let dy = at - r.slot(Y2);
    shift(r, 0.0, dy);
}

/// Translates `r` so that its top-left corner is at `pos`. The size is preserved.
pub fn move_top_left(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    let (dx, dy) = (pos.x - r.slot(X1), pos.y - r.slot(Y1));
    shift(r, dx, dy);
}

/// Translates `r` so that its bottom-right corner is at `pos`. The size is preserved.
pub fn move_bottom_right(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    let (dx, dy) = (pos.x - r.slot(X2), pos.y - r.slot(Y2));
    shift(r, dx, dy);
}

/// Translates `r` so that its top-right corner is at `pos`. The size is preserved.
pub fn move_top_right(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    let (dx, dy) = (pos.x - r.slot(X2), pos.y - r.slot(Y1));
    shift(r, dx, dy);
}

/// Translates `r` so that its bottom-left corner is at `pos`. The size is preserved.
pub fn move_bottom_left(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    let (dx, dy) = (pos.x - r.slot(X1), pos.y - r.slot(Y2));
    shift(r, dx, dy);
}

/// Translates `r` so that its [`center`] is at `pos`. The size is preserved.
///
/// For integer rectangles the center can only move by whole units, so it lands within half a unit of `pos`.
pub fn move_center(r: &mut (impl RectLike + ?Sized), pos: impl Into<Point>) {
    let pos = pos.into();
    let mut current = Point::default();
    center(&*r, &mut current);
    shift(r, pos.x - current.x, pos.y - current.y);
}

/// Translates `r` in place by a delta, given either as `(dx, dy)` or as a [`Point`].
///
/// For integer rectangles the delta is rounded away from zero.
pub fn translate(r: &mut (impl RectLike + ?Sized), delta: impl Into<Point>) {
    let delta = delta.into();
    shift(r, delta.x, delta.y);
}

/// Writes `r` translated by a delta into `result`.
///
/// If `r` is an integer rectangle, each resulting scalar is rounded away from zero. Results from floating rectangles are not rounded.
pub fn translated(r: &(impl RectLike + ?Sized), delta: impl Into<Point>, result: &mut (impl RectLike + ?Sized)) {
    let delta = delta.into();
    let [x1, y1, x2, y2] = r.corners();
    let mut corners = [x1 + delta.x, y1 + delta.y, x2 + delta.x, y2 + delta.y];
    if r.kind().is_integer() {
        corners = corners.map(f64::round);
    }
    result.set_corners(corners);
}

/// Writes `r` with its corners adjusted by the provided deltas into `result`.
pub fn adjusted(r: &(impl RectLike + ?Sized), dx1: f64, dy1: f64, dx2: f64, dy2: f64, result: &mut (impl RectLike + ?Sized)) {
    let [x1, y1, x2, y2] = r.corners();
    result.set_corners([x1 + dx1, y1 + dy1, x2 + dx2, y2 + dy2]);
}

/// Writes `r` with width and height swapped into `result`. The top-left corner stays where it is.
///
/// The size is measured with the convention of `r` and laid out with the convention of `result`.
pub fn transposed(r: &(impl RectLike + ?Sized), result: &mut (impl RectLike + ?Sized)) {
    let (width, height) = (r.width(), r.height());
    let adj = result.adj();
    let (x1, y1) = (r.slot(X1), r.slot(Y1));
    result.set_corners([x1, y1, x1 + height - adj, y1 + width - adj]);
}

/// Returns the normalized `(low, high)` bounds of one axis.
#[inline(always)]
fn axis(low: f64, high: f64, adj: f64) -> (f64, f64) {
    if high < low - adj {
        (high, low)
    } else {
        (low, high)
    }
}

/// The normalized `(left, top, right, bottom)` of a rectangle.
#[inline(always)]
fn bounds(r: &(impl RectLike + ?Sized)) -> (f64, f64, f64, f64) {
    let adj = r.adj();
    let [x1, y1, x2, y2] = r.corners();
    let (left, right) = axis(x1, x2, adj);
    let (top, bottom) = axis(y1, y2, adj);
    (left, top, right, bottom)
}

/// Writes the normalized form of `r` into `result`: every anti-normalized axis gets its two scalars swapped.
pub fn normalized(r: &(impl RectLike + ?Sized), result: &mut (impl RectLike + ?Sized)) {
    let (left, top, right, bottom) = bounds(r);
    result.set_corners([left, top, right, bottom]);
}

/// Returns whether two normalized intervals overlap. Touching counts.
///
/// A zero-extent integer interval `(l, l - 1)` counts as the line at `l`, so it meets itself and whatever covers `l`.
#[inline(always)]
fn overlaps(low1: f64, high1: f64, low2: f64, high2: f64) -> bool {
    low1 <= high2.max(low2) && low2 <= high1.max(low1)
}

/// Writes the intersection of `a` and `b` into `result`.
///
/// If either input is null or the inputs do not overlap, `result` becomes the null rectangle of its own kind. Each input is
/// normalized independently before the comparison.
pub fn and(a: &(impl RectLike + ?Sized), b: &(impl RectLike + ?Sized), result: &mut (impl RectLike + ?Sized)) {
    if is_null(a) || is_null(b) {
        set_null(result);
        return;
    }

    let (l1, t1, r1, b1) = bounds(a);
    let (l2, t2, r2, b2) = bounds(b);
    if !overlaps(l1, r1, l2, r2) || !overlaps(t1, b1, t2, b2) {
        set_null(result);
        return;
    }

    result.set_corners([l1.max(l2), t1.max(t2), r1.min(r2), b1.min(b2)]);
}

/// Returns the bounding rectangle of `a` and `b`.
///
/// If `a` is null, `b` itself is returned, and if `b` is null, `a` itself is returned. `result` is left untouched in those cases.
/// Otherwise the bounding rectangle of both normalized inputs is written into `result` and a reference to it is returned.
pub fn or<'a, R>(a: &'a R, b: &'a R, result: &'a mut R) -> &'a R where
    R: RectLike + ?Sized,
{
    if is_null(a) {
        return b;
    }
    if is_null(b) {
        return a;
    }

    let (l1, t1, r1, b1) = bounds(a);
    let (l2, t2, r2, b2) = bounds(b);
    result.set_corners([l1.min(l2), t1.min(t2), r1.max(r2), b1.max(b2)]);
    result
}

/// Returns whether a point lies in `r`.
///
/// # Parameters
/// * `r`: The rectangle.
/// * `pos`: The point, either as `(x, y)` or as a [`Point`].
/// * `inside`: If `false`, points on an edge count as contained. If `true`, the point must lie strictly between the edges.
pub fn contains_point(r: &(impl RectLike + ?Sized), pos: impl Into<Point>, inside: bool) -> bool {
    let Point { x, y } = pos.into();
    let (left, top, right, bottom) = bounds(r);
    if inside {
        left < x && x < right && top < y && y < bottom
    } else {
        left <= x && x <= right && top <= y && y <= bottom
    }
}

/// Returns whether `b` lies in `a`.
///
/// Null rectangles contain nothing and are contained by nothing. With `inside` set, every edge of `b` must lie strictly within the
/// edges of `a`.
pub fn contains_rect(a: &(impl RectLike + ?Sized), b: &(impl RectLike + ?Sized), inside: bool) -> bool {
    if is_null(a) || is_null(b) {
        return false;
    }

    let (l1, t1, r1, b1) = bounds(a);
    let (l2, t2, r2, b2) = bounds(b);
    if inside {
        l1 < l2 && r2 < r1 && t1 < t2 && b2 < b1
    } else {
        l1 <= l2 && r2 <= r1 && t1 <= t2 && b2 <= b1
    }
}

/// Returns whether `a` and `b` overlap. Null rectangles overlap nothing, touching edges count as overlap.
pub fn intersects_rect(a: &(impl RectLike + ?Sized), b: &(impl RectLike + ?Sized)) -> bool {
    if is_null(a) || is_null(b) {
        return false;
    }

    let (l1, t1, r1, b1) = bounds(a);
    let (l2, t2, r2, b2) = bounds(b);
    overlaps(l1, r1, l2, r2) && overlaps(t1, b1, t2, b2)
}

/// Compares the four corners with [`fuzzy_eq`]. The kinds are not compared.
pub fn fuzzy_eq_rect(a: &(impl RectLike + ?Sized), b: &(impl RectLike + ?Sized)) -> bool {
    a.corners()
        .into_iter()
        .zip(b.corners())
        .all(|(a, b)| fuzzy_eq(a, b))
}

/// Writes the null rectangle of its own kind into `r`.
pub fn set_null(r: &mut (impl RectLike + ?Sized)) {
    let kind = r.kind();
    r.set_corners(null_corners(kind));
}

/// Returns whether both width and height are zero.
pub fn is_null_size(s: &(impl SizeLike + ?Sized)) -> bool {
    fuzzy_eq(s.width(), 0.0) && fuzzy_eq(s.height(), 0.0)
}

/// Returns whether the width or the height is zero or negative.
pub fn is_empty_size(s: &(impl SizeLike + ?Sized)) -> bool {
    s.width() <= 0.0 || s.height() <= 0.0
}

/// Returns whether both width and height are zero or positive.
pub fn is_valid_size(s: &(impl SizeLike + ?Sized)) -> bool {
    s.width() >= 0.0 && s.height() >= 0.0
}

/// Writes `s` with width and height swapped into `result`.
pub fn transposed_size(s: &(impl SizeLike + ?Sized), result: &mut (impl SizeLike + ?Sized)) {
    result.set_dimensions([s.height(), s.width()]);
}

/// Writes the per-field maximum of `a` and `b` into `result`.
pub fn expanded_to(a: &(impl SizeLike + ?Sized), b: &(impl SizeLike + ?Sized), result: &mut (impl SizeLike + ?Sized)) {
    result.set_dimensions([a.width().max(b.width()), a.height().max(b.height())]);
}

/// Writes the per-field minimum of `a` and `b` into `result`.
pub fn bounded_to(a: &(impl SizeLike + ?Sized), b: &(impl SizeLike + ?Sized), result: &mut (impl SizeLike + ?Sized)) {
    result.set_dimensions([a.width().min(b.width()), a.height().min(b.height())]);
}

/// Compares width and height with [`fuzzy_eq`]. The kinds are not compared.
pub fn fuzzy_eq_size(a: &(impl SizeLike + ?Sized), b: &(impl SizeLike + ?Sized)) -> bool {
    fuzzy_eq(a.width(), b.width()) && fuzzy_eq(a.height(), b.height())
}

#[cfg(test)]
mod test_algebra;
