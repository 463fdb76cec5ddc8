// SPDX-License-Identifier: MPL-2.0
//! Media bar view.
//!
//! Thin composition shell: transport button, seek slider, time display,
//! mute button, and volume slider in one row, rendered from session state.
//! Label enums map to text here; nothing else happens in this module.

use crate::controls::{Message, PlaybackSession};
use crate::player::Player;
use crate::ui::styles;
use iced::widget::{button, container, row, slider, text, Row};
use iced::{Element, Length};

/// Transport and mute button width.
const BUTTON_WIDTH: f32 = 75.0;
/// Time display width, wide enough for two `H:MM:SS` fields.
const TIME_LABEL_WIDTH: f32 = 150.0;
/// Volume slider width.
const VOLUME_SLIDER_WIDTH: f32 = 80.0;
/// Bar padding.
const PADDING: f32 = 20.0;
/// Spacing between bar items.
const SPACING: f32 = 8.0;

const VOLUME_LABEL_TEXT: &str = "Volume: ";

/// Seek slider step on the 0–100 scale.
const SEEK_SLIDER_STEP: f64 = 0.1;

/// Renders the media bar for the given session.
///
/// Returns a row with:
/// - Play/Pause/Replay button
/// - Seek slider (dimmed while the duration is unknown)
/// - Elapsed/total time display
/// - Mute button and volume slider (dimmed while muted)
pub fn view<P: Player>(session: &PlaybackSession<P>) -> Element<'_, Message> {
    let transport_button = button(text(session.transport().label().text()))
        .on_press(Message::TransportPressed)
        .width(Length::Fixed(BUTTON_WIDTH));

    // on_input fires only for user interaction; programmatic value changes
    // never re-enter the drag path.
    let seek_slider = {
        let seek = slider(0.0..=100.0, session.seek().value(), Message::SeekDragged)
            .on_release(Message::SeekReleased)
            .width(Length::Fill)
            .step(SEEK_SLIDER_STEP);
        if session.seek().is_enabled() {
            seek
        } else {
            seek.style(styles::dimmed())
        }
    };

    let time_label = text(session.seek().display()).width(Length::Fixed(TIME_LABEL_WIDTH));

    let mute_button = button(text(session.volume().mute_label()))
        .on_press(Message::MuteToggled)
        .width(Length::Fixed(BUTTON_WIDTH));

    let volume_slider = {
        let volume = slider(
            0.0..=100.0,
            session.volume().level().value(),
            Message::VolumeChanged,
        )
        .width(Length::Fixed(VOLUME_SLIDER_WIDTH))
        .step(1.0);
        if session.volume().is_muted() {
            volume.style(styles::dimmed())
        } else {
            volume
        }
    };

    let bar: Row<'_, Message> = row![
        transport_button,
        seek_slider,
        time_label,
        mute_button,
        text(VOLUME_LABEL_TEXT),
        volume_slider,
    ]
    .spacing(SPACING)
    .padding(PADDING)
    .align_y(iced::Alignment::Center);

    container(bar).width(Length::Fill).into()
}
