use potluck_application::SplitService;

/// Shared handler state. The event source lives for the whole process.
#[derive(Clone, Copy)]
pub struct AppState {
    pub splits: SplitService<'static>,
}

impl AppState {
    pub fn new(splits: SplitService<'static>) -> Self {
        Self { splits }
    }
}
