use super::surface::{Point, Stroke, Surface};
use super::theme::ThemeColors;
use crate::anim::Chain;
use crate::anim::scale::divide_scale;
use crate::config::Config;

/// A node's progress is split in two: lines first, then arcs.
const PHASES: usize = 2;

/// Geometry shared by every node of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Vertical distance between node centres.
    pub gap: f64,
    /// Line length and outer arc radius.
    pub size: f64,
    pub stroke_width: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64, config: &Config) -> Self {
        let gap = height / (config.nodes + 1) as f64;
        Self {
            width,
            height,
            gap,
            size: gap / config.size_factor,
            stroke_width: width.min(height) / config.stroke_factor,
        }
    }

    pub fn center(&self, index: usize) -> Point {
        Point::new(self.width / 2.0, self.gap * (index + 1) as f64)
    }
}

/// +1 for the first line, -1 for the second, so the pair fans out symmetrically.
fn sign(j: usize) -> f64 {
    1.0 - 2.0 * j as f64
}

struct NodeRenderer<'a> {
    index: usize,
    scale: f64,
    layout: &'a Layout,
    config: &'a Config,
}

impl<'a> NodeRenderer<'a> {
    fn new(index: usize, scale: f64, layout: &'a Layout, config: &'a Config) -> Self {
        Self {
            index,
            scale,
            layout,
            config,
        }
    }

    fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        let center = self.layout.center(self.index);
        let lines_scale = divide_scale(self.scale, 0, PHASES);
        let arcs_scale = divide_scale(self.scale, 1, PHASES);

        surface.save()?;
        surface.translate(center.x, center.y);
        let drawn = self
            .draw_lines(surface, lines_scale)
            .and_then(|()| self.draw_arcs(surface, arcs_scale));
        surface.restore()?;
        drawn
    }

    fn draw_lines<S: Surface>(&self, surface: &S, scale: f64) -> Result<(), S::Error> {
        let lines = self.config.lines;
        for j in 0..lines {
            let sc = divide_scale(scale, j, lines);
            surface.save()?;
            surface.rotate(sign(j) * self.config.fan_angle * sc);
            let drawn = surface.line(Point::default(), Point::new(0.0, self.layout.size));
            surface.restore()?;
            drawn?;
        }
        Ok(())
    }

    fn draw_arcs<S: Surface>(&self, surface: &S, scale: f64) -> Result<(), S::Error> {
        let arcs = self.config.arcs;
        let r_gap = self.layout.size / arcs as f64;
        let start = self.config.arc_start.start_angle(self.config.fan_angle);
        for j in 0..arcs {
            let sweep = 2.0 * self.config.fan_angle * divide_scale(scale, j, arcs);
            surface.arc(Point::default(), r_gap * (j + 1) as f64, start, sweep)?;
        }
        Ok(())
    }
}

pub fn clear<S: Surface>(surface: &S, colors: &ThemeColors) -> Result<(), S::Error> {
    surface.fill(colors.background)
}

/// Draws every node of the chain, each from its own scale.
pub fn draw<S: Surface>(
    surface: &S,
    chain: &Chain,
    layout: &Layout,
    config: &Config,
    colors: &ThemeColors,
) -> Result<(), S::Error> {
    surface.set_stroke(&Stroke {
        width: layout.stroke_width,
        color: colors.foreground,
    });

    for node in chain.iter() {
        NodeRenderer::new(node.index, node.state.scale, layout, config).draw(surface)?;
    }
    Ok(())
}
