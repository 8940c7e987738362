pub mod dialogs;
pub mod rate_card;
pub mod rate_form;
pub mod window;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use rate_card::rate_card_element;
pub use rate_form::RateEntryForm;
pub use window::AppWindow;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(900.0),
                height: px(820.0),
            },
        }
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
///
/// Labels are bilingual and vary in width, so the button grows from a
/// minimum rather than taking a fixed width.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .min_w(px(160.))
        .label(label.into())
        .on_click(on_click)
}
