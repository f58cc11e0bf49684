use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use section_core::shapes::ShapeTemplate;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn",
        global = true
    )]
    pub log_level: LevelFilter,
    /// Iteration cap for the plastic neutral axis search
    #[arg(long, value_name = "N", global = true)]
    pub max_iterations: Option<usize>,
    /// Relative area tolerance for the plastic neutral axis search
    #[arg(long, value_name = "T", global = true)]
    pub tolerance: Option<f64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute properties of a section stored in a section file
    Compute {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the results as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Build a parametric section and compute its properties
    Shape {
        #[command(subcommand)]
        kind: ShapeKind,
        #[arg(long, global = true)]
        json: bool,
        /// Also write the generated section to a section file
        #[arg(long, value_name = "FILE", global = true)]
        save: Option<PathBuf>,
    },
}

/// Dimensions are in inches.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ShapeKind {
    Rectangle {
        width: f64,
        height: f64,
    },
    HollowRectangle {
        width: f64,
        height: f64,
        wall: f64,
    },
    Circle {
        radius: f64,
        #[arg(long, default_value_t = 360)]
        segments: usize,
    },
    Pipe {
        radius: f64,
        wall: f64,
        #[arg(long, default_value_t = 360)]
        segments: usize,
    },
    IShape {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    Channel {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    Angle {
        vertical_leg: f64,
        horizontal_leg: f64,
        thickness: f64,
    },
    Tee {
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        stem_thickness: f64,
    },
}

impl From<ShapeKind> for ShapeTemplate {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle { width, height } => ShapeTemplate::Rectangle { width, height },
            ShapeKind::HollowRectangle { width, height, wall } => ShapeTemplate::HollowRectangle { width, height, wall },
            ShapeKind::Circle { radius, segments } => ShapeTemplate::Circle { radius, segments },
            ShapeKind::Pipe { radius, wall, segments } => ShapeTemplate::Pipe { radius, wall, segments },
            ShapeKind::IShape {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => ShapeTemplate::IShape {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            },
            ShapeKind::Channel {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => ShapeTemplate::Channel {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            },
            ShapeKind::Angle {
                vertical_leg,
                horizontal_leg,
                thickness,
            } => ShapeTemplate::Angle {
                vertical_leg,
                horizontal_leg,
                thickness,
            },
            ShapeKind::Tee {
                depth,
                flange_width,
                flange_thickness,
                stem_thickness,
            } => ShapeTemplate::Tee {
                depth,
                flange_width,
                flange_thickness,
                stem_thickness,
            },
        }
    }
}
