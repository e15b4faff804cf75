const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

#[derive(Debug, Clone, Default)]
pub(crate) struct Spinner {
    frame_index: usize,
}

impl Spinner {
    pub(crate) fn next_frame(&mut self) {
        self.frame_index = (self.frame_index + 1) % FRAMES.len();
    }

    pub(crate) fn frame(&self) -> &'static str {
        FRAMES[self.frame_index]
    }

    pub(crate) fn label(&self, message: &str) -> String {
        format!("{} {message}", self.frame())
    }
}
