use std::rc::Rc;

use common::config::AppConfig;
use common::model::movie::Movie;
use common::model::user::UserId;
use yew::prelude::*;

/// How the rating overlay lets the user pick a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerStyle {
    /// Five star buttons.
    #[default]
    Stars,
    /// Free numeric input; only `1..=5` is accepted.
    Stepper,
}

impl PickerStyle {
    pub fn toggled(self) -> Self {
        match self {
            PickerStyle::Stars => PickerStyle::Stepper,
            PickerStyle::Stepper => PickerStyle::Stars,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MovieCardProps {
    pub movie: Movie,
    /// User the rating is recorded for. Required: there is no fallback rater.
    pub user_id: UserId,
    pub config: Rc<AppConfig>,
    #[prop_or_default]
    pub picker: PickerStyle,
}
