//! Parsing and formatting of command line geometry values.

use anyhow::{anyhow, bail, Result};
use vista_geom::{Operand, Point, Rect, RectLike, ScalarKind, Size, SizeLike};

/// Parses a comma-separated list of numbers.
fn numbers(input: &str) -> Result<Vec<f64>> {
    input.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| anyhow!("Invalid number {:?} in {:?}.", part, input))
        })
        .collect()
}

/// Parses a rectangle from `x1,y1,x2,y2`.
pub fn parse_rect(kind: ScalarKind, input: &str) -> Result<Rect<'static>> {
    let values = numbers(input)?;
    if values.len() != 4 {
        bail!("Expected a rect as x1,y1,x2,y2 but got {:?}.", input);
    }
    let args: Vec<Operand> = values.into_iter().map(Operand::from).collect();
    Ok(Rect::construct(kind, &args)?)
}

/// Parses a point from `x,y`.
pub fn parse_point(input: &str) -> Result<Point> {
    match numbers(input)?.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => bail!("Expected a point as x,y but got {:?}.", input),
    }
}

/// Parses a size from `WxH`.
pub fn parse_size(kind: ScalarKind, input: &str) -> Result<Size<'static>> {
    let (width, height) = input.split_once('x')
        .ok_or_else(|| anyhow!("Expected a size as WxH but got {:?}.", input))?;
    let args = [numbers(width)?, numbers(height)?].concat();
    if args.len() != 2 {
        bail!("Expected a size as WxH but got {:?}.", input);
    }
    let args: Vec<Operand> = args.into_iter().map(Operand::from).collect();
    Ok(Size::construct(kind, &args)?)
}

pub fn format_rect(r: &impl RectLike) -> String {
    let [x1, y1, x2, y2] = r.corners();
    format!("{},{},{},{}", x1, y1, x2, y2)
}

pub fn format_point(p: &Point) -> String {
    format!("{},{}", p.x, p.y)
}

pub fn format_size(s: &impl SizeLike) -> String {
    format!("{}x{}", s.width(), s.height())
}
