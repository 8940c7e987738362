use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState, MaskPattern},
    v_flex,
};
use rate_core::models::RawRateFields;

/// The three entry fields for one rate submission.
///
/// The price inputs carry a numeric mask (two fraction digits, comma group
/// separator), the native analogue of the original `min="0" step="0.01"`
/// number widgets. The date is a plain text field taken verbatim.
#[derive(Clone, Debug)]
pub struct RateEntryForm {
    date: Entity<InputState>,
    gold_price: Entity<InputState>,
    silver_price: Entity<InputState>,
}

impl RateEntryForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let date = cx.new(|cx| InputState::new(window, cx).placeholder("YYYY-MM-DD"));
        let gold_price = make_price_input("Enter gold price in ₹", window, cx);
        let silver_price = make_price_input("Enter silver price in ₹", window, cx);

        Self {
            date,
            gold_price,
            silver_price,
        }
    }

    /// Collects the current field values as raw strings.
    pub fn to_raw_fields(
        &self,
        cx: &App,
    ) -> RawRateFields {
        RawRateFields {
            date: self.date.read(cx).value().as_str().to_string(),
            gold_price: self.gold_price.read(cx).value().as_str().to_string(),
            silver_price: self.silver_price.read(cx).value().as_str().to_string(),
        }
    }
}

impl Render for RateEntryForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .size_full()
            .child(make_input_row(&self.date, "Date / తేదీ:"))
            .child(make_input_row(
                &self.gold_price,
                "Gold Price (8 grams, 22 Carat) / బంగారం ధర: ₹",
            ))
            .child(make_input_row(
                &self.silver_price,
                "Silver Price (10 grams) / వెండి ధర: ₹",
            ))
    }
}

fn make_price_input(
    label: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<RateEntryForm>,
) -> Entity<InputState> {
    let pattern: MaskPattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(2),
    };

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(label.into())
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(300.))
                .text_align(TextAlign::Right)
                .child(input_label.into()),
        )
        .child(Input::new(state).flex_grow())
}
