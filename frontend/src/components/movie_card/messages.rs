use common::flows::rating::RatingOutcome;
use common::model::rating::Rating;

#[derive(Clone)]
pub enum Msg {
    Enter,
    Leave,
    Select(Rating),
    StepperInput(String),
    Submit,
    Submitted(RatingOutcome),
}
