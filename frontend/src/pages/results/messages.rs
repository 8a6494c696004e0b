use common::model::navigation::ResultsState;

pub enum Msg {
    Loaded(ResultsState),
    LoadFailed,
    TogglePicker,
    BackToHome,
}
