use clap::{ArgEnum, Args, Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use vista_geom::{algebra, xml, Point, Rect, ScalarKind, Size};

mod parse;

use parse::{format_point, format_rect, format_size, parse_point, parse_rect, parse_size};

/// Tool for evaluating rectangle geometry.
///
/// Rectangles are given as `x1,y1,x2,y2`, points as `x,y`, sizes as `WxH`.
#[derive(Parser, Debug)]
#[clap(version)]
struct GeomCli {
    /// The scalar kind of all rectangles: `int` (inclusive bottom-right corner), `f32` or `f64` (exclusive).
    #[clap(long, global = true, default_value = "int")]
    kind: ScalarKind,
    /// The maximum log level.
    #[clap(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Prints the size of a rectangle.
    Size(RectArgs),
    /// Prints the normalized form of a rectangle.
    Normalize(RectArgs),
    /// Prints the center of a rectangle.
    Center(RectArgs),
    /// Prints the intersection of two rectangles.
    Intersect(PairArgs),
    /// Prints the bounding rectangle of two rectangles.
    Unite(PairArgs),
    /// Prints whether two rectangles overlap.
    Intersects(PairArgs),
    /// Prints whether a rectangle contains a point or another rectangle.
    Contains(ContainsArgs),
    /// Prints a translated rectangle.
    Translate(TranslateArgs),
    /// Prints a rectangle moved so that one of its anchors lands on a point.
    MoveTo(MoveToArgs),
    /// Prints a rectangle resized to a size, keeping its top-left corner.
    Resize(ResizeArgs),
    /// Prints a rectangle as XML children.
    Xml(RectArgs),
}

#[derive(Args, Debug)]
struct RectArgs {
    /// The rectangle.
    rect: String,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// The first rectangle.
    a: String,
    /// The second rectangle.
    b: String,
}

#[derive(Args, Debug)]
struct ContainsArgs {
    /// The containing rectangle.
    rect: String,
    /// The point to test.
    #[clap(long, conflicts_with = "other", required_unless_present = "other")]
    point: Option<String>,
    /// The rectangle to test.
    #[clap(long)]
    other: Option<String>,
    /// Require strict containment (touching an edge does not count).
    #[clap(long)]
    inside: bool,
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// The rectangle.
    rect: String,
    /// The delta as `dx,dy`.
    delta: String,
}

#[derive(Args, Debug)]
struct MoveToArgs {
    /// The rectangle.
    rect: String,
    /// The anchor that is moved onto the point.
    #[clap(arg_enum)]
    anchor: Anchor,
    /// The target point.
    point: String,
}

#[derive(Args, Debug)]
struct ResizeArgs {
    /// The rectangle.
    rect: String,
    /// The new size as `WxH`.
    size: String,
}

#[derive(ArgEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

/// Executes a command and returns its output.
fn run(kind: ScalarKind, command: &CliCommand) -> anyhow::Result<String> {
    let output = match command {
        CliCommand::Size(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let mut size = Size::new(kind, 0.0, 0.0);
            algebra::size_of(&rect, &mut size);
            format_size(&size)
        }
        CliCommand::Normalize(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let mut out = Rect::new(kind);
            algebra::normalized(&rect, &mut out);
            format_rect(&out)
        }
        CliCommand::Center(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let mut point = Point::default();
            algebra::center(&rect, &mut point);
            format_point(&point)
        }
        CliCommand::Intersect(args) => {
            let (a, b) = (parse_rect(kind, &args.a)?, parse_rect(kind, &args.b)?);
            let mut out = Rect::new(kind);
            algebra::and(&a, &b, &mut out);
            format_rect(&out)
        }
        CliCommand::Unite(args) => {
            let (a, b) = (parse_rect(kind, &args.a)?, parse_rect(kind, &args.b)?);
            let mut out = Rect::new(kind);
            format_rect(algebra::or(&a, &b, &mut out))
        }
        CliCommand::Intersects(args) => {
            let (a, b) = (parse_rect(kind, &args.a)?, parse_rect(kind, &args.b)?);
            algebra::intersects_rect(&a, &b).to_string()
        }
        CliCommand::Contains(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let contained = match (&args.point, &args.other) {
                (Some(point), _) => algebra::contains_point(&rect, parse_point(point)?, args.inside),
                (None, Some(other)) => algebra::contains_rect(&rect, &parse_rect(kind, other)?, args.inside),
                (None, None) => anyhow::bail!("Either --point or --other is required."),
            };
            contained.to_string()
        }
        CliCommand::Translate(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let mut out = Rect::new(kind);
            algebra::translated(&rect, parse_point(&args.delta)?, &mut out);
            format_rect(&out)
        }
        CliCommand::MoveTo(args) => {
            let mut rect = parse_rect(kind, &args.rect)?;
            let point = parse_point(&args.point)?;
            match args.anchor {
                Anchor::TopLeft => algebra::move_top_left(&mut rect, point),
                Anchor::TopRight => algebra::move_top_right(&mut rect, point),
                Anchor::BottomLeft => algebra::move_bottom_left(&mut rect, point),
                Anchor::BottomRight => algebra::move_bottom_right(&mut rect, point),
                Anchor::Center => algebra::move_center(&mut rect, point),
            }
            format_rect(&rect)
        }
        CliCommand::Resize(args) => {
            let mut rect = parse_rect(kind, &args.rect)?;
            let size = parse_size(kind, &args.size)?;
            algebra::set_size(&mut rect, &size);
            format_rect(&rect)
        }
        CliCommand::Xml(args) => {
            let rect = parse_rect(kind, &args.rect)?;
            let node = xml::rect_element("rect", &rect);
            let children: Vec<String> = node.children.iter()
                .map(|child| format!("<{0}>{1}</{0}>", child.name, child.text))
                .collect();
            format!("<{0}>{1}</{0}>", node.name, children.join(""))
        }
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli_args: GeomCli = GeomCli::parse();

    SimpleLogger::new()
        .with_level(cli_args.log_level)
        .init()?;
    log::debug!("Running {:?} with {} rectangles.", cli_args.command, cli_args.kind);

    let output = run(cli_args.kind, &cli_args.command)?;
    println!("{}", output);

    Ok(())
}
