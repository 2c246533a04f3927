use std::time::Instant;

use tracing::{debug, info};

use crate::runtime::{Notification, Workbench};

use super::{ReplayReport, ReplayScript, Result, StepReport};

pub fn run_replay(script: &ReplayScript, workbench: &mut Workbench) -> Result<ReplayReport> {
    script.validate()?;

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.iter().enumerate() {
        let started = Instant::now();
        let update = workbench.dispatch(event);
        let duration_us = started.elapsed().as_micros();

        let (mut cells_added, mut cells_removed) = (0, 0);
        for notification in &update.notifications {
            if let Notification::Mask(change) = notification {
                if change.added {
                    cells_added += change.len();
                } else {
                    cells_removed += change.len();
                }
            }
        }
        debug!(
            index,
            event = event.kind(),
            cells_added,
            cells_removed,
            "replayed event"
        );
        steps.push(StepReport {
            index,
            event: event.kind().to_string(),
            cells_added,
            cells_removed,
            transform: workbench.session().transform(),
            duration_us,
        });
    }

    let session = workbench.session();
    let report = ReplayReport {
        script_name: script.name.clone(),
        steps,
        mask_cells: workbench.mask().len(),
        mask_dims: workbench.mask_dims(),
        transform: session.transform(),
        interaction: session.interaction(),
        pending_vertices: session.pending_vertices().len(),
    };
    info!(
        events = report.steps.len(),
        mask_cells = report.mask_cells,
        "replay finished"
    );
    Ok(report)
}
