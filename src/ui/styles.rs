// SPDX-License-Identifier: MPL-2.0
//! Slider styling for de-emphasized controls.
//!
//! Used for the seek slider while the duration is unknown and for the
//! volume slider while muted.

use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Opacity applied to de-emphasized sliders.
pub const DIMMED_SLIDER_OPACITY: f32 = 0.5;

/// Style for a de-emphasized slider: the theme palette at reduced opacity.
pub fn dimmed() -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, _status: slider::Status| {
        let palette = theme.extended_palette();

        let rail = Color {
            a: DIMMED_SLIDER_OPACITY,
            ..palette.background.strong.color
        };
        let handle = Color {
            a: DIMMED_SLIDER_OPACITY,
            ..palette.primary.base.color
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(rail), Background::Color(rail)),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 6.0 },
                background: Background::Color(handle),
                border_width: 1.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}
