use common::flows::rating::RatingPanel;

pub struct MovieCard {
    pub panel: RatingPanel,
    /// Raw text of the numeric picker, kept so invalid input stays visible.
    pub stepper_text: String,
}

impl MovieCard {
    pub fn new() -> Self {
        Self {
            panel: RatingPanel::new(),
            stepper_text: String::new(),
        }
    }
}
