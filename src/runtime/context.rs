use super::{IoService, MaskService, ReplayService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    io_service: IoService,
    mask_service: MaskService,
    replay_service: ReplayService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn mask_service(&self) -> &MaskService {
        &self.mask_service
    }

    pub fn replay_service(&self) -> &ReplayService {
        &self.replay_service
    }
}
