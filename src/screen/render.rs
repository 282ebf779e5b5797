use crate::device_display::interface::View;
use crate::screen::core::{Model, Phase};

pub fn view(model: &Model) -> View {
    View {
        text: model.text.clone(),
        photo: model.photo.clone(),
        can_take_picture: model.phase == Phase::Idle,
    }
}
