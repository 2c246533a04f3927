use ndarray::Array2;
use tracing::info;

use crate::interaction::{InputEvent, ViewId};
use crate::model::{DataMatrix, GridDims, Mask};

use super::{EditSession, HeatmapView, Notification, RepaintPlan, SessionConfig};

/// Everything observers need after one call: session notifications plus per-view repaints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbenchUpdate {
    pub notifications: Vec<Notification>,
    pub repaints: Vec<(ViewId, RepaintPlan)>,
}

impl WorkbenchUpdate {
    pub fn repaint(&self, view: ViewId) -> Option<&RepaintPlan> {
        self.repaints
            .iter()
            .find(|(id, _)| *id == view)
            .map(|(_, plan)| plan)
    }
}

/// Two heatmaps sharing one mask and one transform.
#[derive(Debug, Clone)]
pub struct Workbench {
    config: SessionConfig,
    session: EditSession,
    views: [HeatmapView; 2],
}

impl Workbench {
    pub fn new(config: SessionConfig) -> Self {
        let layouts = config.layouts(GridDims::default(), GridDims::default());
        Self {
            session: EditSession::new(layouts, config.wheel_zoom_rate),
            views: ViewId::ALL.map(|id| HeatmapView::new(id, config.repaint_threshold)),
            config,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn view(&self, id: ViewId) -> &HeatmapView {
        &self.views[id.index()]
    }

    pub fn mask(&self) -> &Mask {
        self.session.mask()
    }

    /// Union of both matrices' dimensions.
    pub fn mask_dims(&self) -> GridDims {
        self.views
            .iter()
            .map(HeatmapView::dims)
            .fold(GridDims::default(), GridDims::union)
    }

    pub fn load_matrix(&mut self, id: ViewId, matrix: DataMatrix) -> WorkbenchUpdate {
        let dims = matrix.dims();
        let view = &mut self.views[id.index()];
        let plan = view.load_matrix(matrix);
        // The full repaint already covers whatever the mirror picks up here.
        let _ = view.sync(self.session.mask());
        info!(view = ?id, rows = dims.rows, cols = dims.cols, "matrix loaded");

        let layouts = self
            .config
            .layouts(self.views[0].dims(), self.views[1].dims());
        WorkbenchUpdate {
            notifications: self.session.set_layouts(layouts),
            repaints: vec![(id, plan)],
        }
    }

    pub fn load_mask(&mut self, mask: Mask) -> WorkbenchUpdate {
        let notifications = self.session.replace_mask(mask);
        self.synced(notifications)
    }

    pub fn clear_mask(&mut self) -> WorkbenchUpdate {
        let notifications = self.session.clear_mask().into_iter().collect();
        self.synced(notifications)
    }

    pub fn reset_view(&mut self) -> WorkbenchUpdate {
        let notifications = self.session.reset_view();
        self.routed(notifications)
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> WorkbenchUpdate {
        let notifications = self.session.dispatch(event);
        self.routed(notifications)
    }

    /// Dense mask over `mask_dims`, ready to write out.
    pub fn export_mask(&self) -> Array2<bool> {
        self.mask().to_dense(self.mask_dims())
    }

    fn synced(&mut self, notifications: Vec<Notification>) -> WorkbenchUpdate {
        let mask = self.session.mask();
        let repaints = self
            .views
            .iter_mut()
            .map(|view| (view.id(), view.sync(mask)))
            .filter(|(_, plan)| *plan != RepaintPlan::Nothing)
            .collect();
        WorkbenchUpdate {
            notifications,
            repaints,
        }
    }

    /// Mask changes go to each view incrementally; a new transform repaints both.
    fn routed(&mut self, notifications: Vec<Notification>) -> WorkbenchUpdate {
        let mut repaints = Vec::new();
        for notification in &notifications {
            match notification {
                Notification::Mask(change) => {
                    for view in &mut self.views {
                        let plan = view.apply_change(change);
                        if plan != RepaintPlan::Nothing {
                            repaints.push((view.id(), plan));
                        }
                    }
                }
                Notification::Transform(_) => {
                    repaints.extend(ViewId::ALL.map(|id| (id, RepaintPlan::Full)));
                }
                _ => {}
            }
        }
        WorkbenchUpdate {
            notifications,
            repaints,
        }
    }
}
