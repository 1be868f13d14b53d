use std::sync::Arc;

use visionchef_core::application::VisionChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: VisionChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: VisionChefService) -> Self {
        Self { args, service }
    }
}
