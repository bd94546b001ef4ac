use super::surface::Surface;
use super::theme::ThemeColors;
use super::view::{self, Layout};
use crate::anim::{Animator, Scheduler, Sequence};
use crate::config::Config;

/// Per-frame entry point: paints the figure and drives the running sweep.
pub struct Renderer<S> {
    config: Config,
    colors: ThemeColors,
    sequence: Sequence,
    animator: Animator<S>,
}

impl<S: Scheduler> Renderer<S> {
    pub fn new(config: Config, scheduler: S) -> Self {
        Self {
            colors: ThemeColors::from_config(&config),
            sequence: Sequence::new(config.nodes, config.lines, config.arcs),
            animator: Animator::new(scheduler, config.delay()),
            config,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn scheduler(&self) -> &S {
        self.animator.scheduler()
    }

    /// Clears, draws the chain, then runs one animation step. The step runs
    /// even when drawing failed so a bad frame never stalls the sweep.
    pub fn render<C: Surface>(
        &mut self,
        surface: &C,
        width: f64,
        height: f64,
    ) -> Result<(), C::Error> {
        let layout = Layout::new(width, height, &self.config);
        let drawn = view::clear(surface, &self.colors).and_then(|()| {
            view::draw(
                surface,
                self.sequence.chain(),
                &layout,
                &self.config,
                &self.colors,
            )
        });

        let sequence = &mut self.sequence;
        self.animator.animate(|| match sequence.update() {
            Some(done) => {
                log::debug!("Node {} settled at {}", done.index, done.scale);
                true
            }
            None => false,
        });

        drawn
    }

    /// Starts the next sweep. Returns `false` if one is already running.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequence.start_updating() {
            return false;
        }
        log::debug!("Starting sweep of node {}", self.sequence.current());
        self.animator.start();
        true
    }
}
