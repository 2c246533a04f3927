mod config;
mod context;
mod error;
mod io_service;
mod mask_service;
mod replay_service;
mod session;
mod view;
mod workbench;


pub use config::{SessionConfig, load_config};
pub use context::AppContext;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use mask_service::{MaskService, MaskSummary};
pub use replay_service::ReplayService;
pub use session::{EditSession, Notification};
pub use view::{DEFAULT_REPAINT_THRESHOLD, HeatmapView, RepaintPlan};
pub use workbench::{Workbench, WorkbenchUpdate};
