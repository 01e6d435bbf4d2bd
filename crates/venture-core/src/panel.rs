//! Resizable side panel docked to the right edge of the viewport.
//!
//! # Drag lifecycle
//!
//! Pointer listeners exist only while a drag is in progress. `begin_drag`
//! acquires them from the [`DragSurface`] through a [`DragSession`] guard;
//! dropping the guard releases them. The guard is dropped by `end_drag`, by
//! closing the panel, and by dropping the panel itself, so listeners never
//! outlive the drag.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PanelError;

pub const MIN_WIDTH: u32 = 300;
pub const MAX_WIDTH: u32 = 800;
pub const DEFAULT_WIDTH: u32 = 400;

/// Assistants offered in the panel's agent picker.
pub const DEFAULT_AGENTS: &[&str] = &["Deal Analyst", "Market Scout", "Legal Assistant"];

type WidthCallback = Box<dyn FnMut(u32)>;
type AgentCallback = Box<dyn FnMut(&str)>;

/// Width bounds of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub min_width: u32,
    pub max_width: u32,
    pub initial_width: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            initial_width: DEFAULT_WIDTH,
        }
    }
}

impl PanelConfig {
    /// Check `0 < min <= initial <= max`.
    pub fn validate(&self) -> Result<(), PanelError> {
        if self.min_width == 0 {
            return Err(PanelError::ZeroMinWidth);
        }
        if self.min_width > self.max_width {
            return Err(PanelError::InvertedBounds {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if !(self.min_width..=self.max_width).contains(&self.initial_width) {
            return Err(PanelError::InitialWidthOutOfBounds {
                width: self.initial_width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        Ok(())
    }

    /// Clamp a candidate width (possibly negative) into the bounds.
    pub fn clamp(&self, candidate: i64) -> u32 {
        let clamped = candidate.clamp(i64::from(self.min_width), i64::from(self.max_width));
        // Bounds are u32, so the clamped value fits.
        u32::try_from(clamped).unwrap_or(self.max_width)
    }
}

/// The environment a drag runs in.
///
/// `acquire` registers pointer-move and pointer-up listeners, suppresses
/// text selection and shows the resize cursor; `release` undoes all of it.
pub trait DragSurface {
    fn acquire(&self);
    fn release(&self);
}

/// A surface that only logs. Used where no real input system exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSurface;

impl DragSurface for TracingSurface {
    fn acquire(&self) {
        debug!("pointer listeners attached, text selection suppressed");
    }

    fn release(&self) {
        debug!("pointer listeners detached, text selection restored");
    }
}

/// Holds the surface's listeners for the duration of one drag.
pub struct DragSession {
    surface: Rc<dyn DragSurface>,
}

impl DragSession {
    fn begin(surface: Rc<dyn DragSurface>) -> Self {
        surface.acquire();
        Self { surface }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.surface.release();
    }
}

/// Observable panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelState {
    pub is_open: bool,
    /// Meaningful only while `is_open`.
    pub width_px: u32,
    pub is_dragging: bool,
}

/// The docked panel.
pub struct DockedPanel {
    config: PanelConfig,
    surface: Rc<dyn DragSurface>,
    is_open: bool,
    width_px: u32,
    session: Option<DragSession>,
    agents: Vec<String>,
    active_agent: Option<usize>,
    on_width_change: Option<WidthCallback>,
    on_agent_change: Option<AgentCallback>,
}

impl DockedPanel {
    /// Create a closed panel at the configured initial width.
    pub fn new(config: PanelConfig, surface: Rc<dyn DragSurface>) -> Result<Self, PanelError> {
        config.validate()?;
        Ok(Self {
            config,
            surface,
            is_open: false,
            width_px: config.initial_width,
            session: None,
            agents: Vec::new(),
            active_agent: None,
            on_width_change: None,
            on_agent_change: None,
        })
    }

    /// Offer `agents` in the picker; the first becomes active.
    #[must_use]
    pub fn with_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agents = agents.into_iter().map(Into::into).collect();
        self.active_agent = if self.agents.is_empty() { None } else { Some(0) };
        self
    }

    #[must_use]
    pub fn on_width_change(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.on_width_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_agent_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_agent_change = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> PanelState {
        PanelState {
            is_open: self.is_open,
            width_px: self.width_px,
            is_dragging: self.session.is_some(),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Show or hide the panel. Hiding ends any drag in progress.
    pub fn toggle(&mut self) -> PanelState {
        self.is_open = !self.is_open;
        if !self.is_open && self.session.take().is_some() {
            debug!("drag ended by closing the panel");
        }
        debug!(open = self.is_open, "panel toggled");
        self.state()
    }

    /// Start a resize drag. Ignored while closed or already dragging.
    pub fn begin_drag(&mut self) -> PanelState {
        if self.is_open && self.session.is_none() {
            self.session = Some(DragSession::begin(Rc::clone(&self.surface)));
            debug!(width = self.width_px, "panel drag started");
        }
        self.state()
    }

    /// Apply a pointer position while dragging; a no-op otherwise.
    pub fn on_pointer_move(&mut self, pointer_x: i32, viewport_width: i32) -> PanelState {
        if self.session.is_none() {
            return self.state();
        }
        let candidate = i64::from(viewport_width) - i64::from(pointer_x);
        let width = self.config.clamp(candidate);
        if width != self.width_px {
            self.width_px = width;
            if let Some(callback) = self.on_width_change.as_mut() {
                callback(width);
            }
        }
        self.state()
    }

    pub fn end_drag(&mut self) -> PanelState {
        if self.session.take().is_some() {
            debug!(width = self.width_px, "panel drag ended");
        }
        self.state()
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn active_agent(&self) -> Option<&str> {
        self.active_agent.map(|index| self.agents[index].as_str())
    }

    /// Switch the active agent. Unknown names are ignored; returns whether
    /// the active agent changed.
    pub fn select_agent(&mut self, name: &str) -> bool {
        let Some(index) = self.agents.iter().position(|agent| agent == name) else {
            debug!(name, "ignoring unknown agent");
            return false;
        };
        if self.active_agent == Some(index) {
            return false;
        }
        self.active_agent = Some(index);
        if let Some(callback) = self.on_agent_change.as_mut() {
            callback(name);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        acquired: Cell<usize>,
        released: Cell<usize>,
    }

    impl CountingSurface {
        fn active(&self) -> usize {
            self.acquired.get() - self.released.get()
        }
    }

    impl DragSurface for CountingSurface {
        fn acquire(&self) {
            self.acquired.set(self.acquired.get() + 1);
        }

        fn release(&self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn open_panel(surface: &Rc<CountingSurface>) -> DockedPanel {
        let shared: Rc<dyn DragSurface> = surface.clone();
        let mut panel = DockedPanel::new(PanelConfig::default(), shared).unwrap();
        panel.toggle();
        panel
    }

    #[test]
    fn config_validation() {
        assert!(PanelConfig::default().validate().is_ok());
        let inverted = PanelConfig {
            min_width: 900,
            ..PanelConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(PanelError::InvertedBounds { min: 900, max: 800 })
        );
        let outside = PanelConfig {
            initial_width: 100,
            ..PanelConfig::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(PanelError::InitialWidthOutOfBounds { width: 100, .. })
        ));
    }

    #[test]
    fn toggle_keeps_width() {
        let surface = Rc::new(CountingSurface::default());
        let mut panel = open_panel(&surface);
        assert!(panel.state().is_open);
        let closed = panel.toggle();
        assert!(!closed.is_open);
        assert_eq!(closed.width_px, DEFAULT_WIDTH);
    }

    #[test]
    fn drag_resizes_from_right_edge() {
        let surface = Rc::new(CountingSurface::default());
        let mut panel = open_panel(&surface);
        panel.begin_drag();
        let state = panel.on_pointer_move(1000, 1500);
        assert_eq!(state.width_px, 500);
        assert!(state.is_dragging);
        let state = panel.end_drag();
        assert!(!state.is_dragging);
        assert_eq!(panel.on_pointer_move(200, 1500).width_px, 500);
    }

    #[test]
    fn drag_clamps_to_bounds() {
        let surface = Rc::new(CountingSurface::default());
        let mut panel = open_panel(&surface);
        panel.begin_drag();
        assert_eq!(panel.on_pointer_move(-8000, 2000).width_px, MAX_WIDTH);
        assert_eq!(panel.on_pointer_move(1995, 2000).width_px, MIN_WIDTH);
        assert_eq!(panel.on_pointer_move(3000, 2000).width_px, MIN_WIDTH);
    }

    #[test]
    fn stray_moves_are_ignored() {
        let surface = Rc::new(CountingSurface::default());
        let mut panel = open_panel(&surface);
        assert_eq!(panel.on_pointer_move(0, 1000).width_px, DEFAULT_WIDTH);
        assert_eq!(surface.acquired.get(), 0);
    }

    #[test]
    fn listeners_released_on_every_exit_path() {
        let surface = Rc::new(CountingSurface::default());

        let mut panel = open_panel(&surface);
        panel.begin_drag();
        panel.begin_drag();
        assert_eq!(surface.active(), 1);
        panel.end_drag();
        assert_eq!(surface.active(), 0);

        panel.begin_drag();
        panel.toggle();
        assert_eq!(surface.active(), 0);
        assert!(!panel.state().is_dragging);

        panel.toggle();
        panel.begin_drag();
        assert_eq!(surface.active(), 1);
        drop(panel);
        assert_eq!(surface.active(), 0);
        assert_eq!(surface.acquired.get(), 3);
    }

    #[test]
    fn closed_panel_cannot_drag() {
        let surface = Rc::new(CountingSurface::default());
        let shared: Rc<dyn DragSurface> = surface.clone();
        let mut panel = DockedPanel::new(PanelConfig::default(), shared).unwrap();
        assert!(!panel.begin_drag().is_dragging);
        assert_eq!(surface.acquired.get(), 0);
    }

    #[test]
    fn width_callback_fires_only_on_change() {
        let widths = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&widths);
        let mut panel = DockedPanel::new(PanelConfig::default(), Rc::new(TracingSurface))
            .unwrap()
            .on_width_change(move |width| sink.borrow_mut().push(width));
        panel.toggle();
        panel.begin_drag();
        panel.on_pointer_move(900, 1500);
        panel.on_pointer_move(900, 1500);
        panel.on_pointer_move(100, 1500);
        assert_eq!(*widths.borrow(), vec![600, 800]);
    }

    #[test]
    fn agent_selection() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let mut panel = DockedPanel::new(PanelConfig::default(), Rc::new(TracingSurface))
            .unwrap()
            .with_agents(DEFAULT_AGENTS.iter().copied())
            .on_agent_change(move |name| sink.borrow_mut().push(name.to_string()));
        assert_eq!(panel.active_agent(), Some("Deal Analyst"));
        assert!(!panel.select_agent("Deal Analyst"));
        assert!(!panel.select_agent("Oracle"));
        assert!(panel.select_agent("Legal Assistant"));
        assert_eq!(panel.active_agent(), Some("Legal Assistant"));
        assert_eq!(*changes.borrow(), vec!["Legal Assistant".to_string()]);
    }
}
