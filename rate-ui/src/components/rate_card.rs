use gpui::{Div, FontWeight, ParentElement, Styled, TextAlign, div, px};
use gpui_component::{h_flex, v_flex};
use rate_core::format::{
    ADDRESS_EN, ADDRESS_TE, CARD_TITLE_EN, CARD_TITLE_TE, CardColumn, FOOTER_EN, FOOTER_TE,
    PHONE_EN, PHONE_TE, RateCard, SHOP_NAME_EN, SHOP_NAME_TE,
};

/// Builds the display region: header, rate table, footer.
///
/// The action buttons are deliberately outside this element; it is the
/// exact region the export path snapshots, and both consume the same
/// [`RateCard`] so the two renditions cannot diverge.
pub fn rate_card_element(card: &RateCard) -> Div {
    v_flex()
        .gap_4()
        .p_5()
        .border_1()
        .rounded_md()
        .child(header_element())
        .child(
            v_flex()
                .items_center()
                .gap_1()
                .child(div().text_lg().font_weight(FontWeight::BOLD).child(CARD_TITLE_EN))
                .child(div().child(CARD_TITLE_TE)),
        )
        .child(
            h_flex()
                .gap_4()
                .items_start()
                .child(column_element(&card.columns[0]))
                .child(column_element(&card.columns[1])),
        )
        .child(
            v_flex()
                .items_center()
                .gap_1()
                .child(div().text_sm().child(FOOTER_EN))
                .child(div().text_sm().child(FOOTER_TE)),
        )
}

fn header_element() -> Div {
    v_flex()
        .items_center()
        .gap_1()
        .child(div().text_xl().font_weight(FontWeight::BOLD).child(SHOP_NAME_EN))
        .child(div().text_lg().font_weight(FontWeight::BOLD).child(SHOP_NAME_TE))
        .child(
            h_flex()
                .gap_4()
                .child(div().text_sm().child(ADDRESS_EN))
                .child(div().text_sm().child(ADDRESS_TE)),
        )
        .child(
            h_flex()
                .gap_4()
                .child(div().text_sm().child(PHONE_EN))
                .child(div().text_sm().child(PHONE_TE)),
        )
}

fn column_element(column: &CardColumn) -> Div {
    let mut body = v_flex()
        .gap_2()
        .flex_grow()
        .p_4()
        .border_1()
        .rounded_md()
        .min_w(px(360.))
        .child(
            div()
                .text_align(TextAlign::Center)
                .font_weight(FontWeight::BOLD)
                .child(column.heading),
        );

    for row in &column.rows {
        body = body.child(
            h_flex()
                .justify_between()
                .gap_4()
                .p_2()
                .border_1()
                .rounded_md()
                .child(div().font_weight(FontWeight::BOLD).child(row.label))
                .child(div().child(row.value.clone())),
        );
    }

    body
}
