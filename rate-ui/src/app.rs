use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render, Styled,
    TextAlign, Window, div,
};
use gpui_component::{h_flex, v_flex};
use rate_core::format::render_card;
use rate_core::models::RateRecord;
use rate_core::state::{ViewEvent, ViewState, apply};
use tracing::{info, warn};

use crate::components::{RateEntryForm, make_button, rate_card_element};
use crate::export::ExportService;

/// The application root: owns the view-state machine and the form entity.
///
/// All transitions go through [`rate_core::state::apply`]; this entity only
/// decides when to fire events and re-render.
pub struct RateApp {
    state: ViewState,
    form: Entity<RateEntryForm>,
    errors: Vec<String>,
    export: ExportService,
}

impl RateApp {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
        export: ExportService,
    ) -> Self {
        Self {
            state: ViewState::Entry,
            form: cx.new(|cx| RateEntryForm::new(window, cx)),
            errors: Vec::new(),
            export,
        }
    }

    fn on_show_rates(
        &mut self,
        _: &ClickEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let raw = self.form.read(cx).to_raw_fields(cx);

        // Widget-level requiredness; beyond this the submission is
        // tolerant and garbage surfaces on the display screen.
        if let Err(errors) = raw.validate_required() {
            for error in &errors {
                warn!(%error, "rate entry validation failed");
            }
            self.errors = errors;
            cx.notify();
            return;
        }
        self.errors.clear();

        let record = RateRecord::from_raw(&raw);
        info!(date = %record.date, "rate entry submitted");
        self.state = apply(std::mem::take(&mut self.state), ViewEvent::Submit(record));
        cx.notify();
    }

    fn on_go_back(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.state = apply(std::mem::take(&mut self.state), ViewEvent::GoBack);
        // A fresh form entity guarantees the entry screen comes back blank.
        self.form = cx.new(|cx| RateEntryForm::new(window, cx));
        self.errors.clear();
        info!("returned to rate entry");
        cx.notify();
    }

    fn on_export(
        &mut self,
        _: &ClickEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        // View-state stays untouched; the export runs in the background
        // and reports its own success or failure.
        if let ViewState::Display(record) = &self.state {
            let card = render_card(record);
            info!(date = %card.date_display, "rate card export requested");
            self.export.request_export(card);
        }
    }

    fn render_entry(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let mut screen = v_flex()
            .size_full()
            .gap_4()
            .p_5()
            .child(screen_heading(
                "Gold & Silver Rate Entry",
                "బంగారం మరియు వెండి ధర నమోదు",
            ))
            .child(self.form.clone());

        if !self.errors.is_empty() {
            let mut list = v_flex().gap_1().p_2().border_1().rounded_md();
            for error in &self.errors {
                list = list.child(div().child(format!("• {error}")));
            }
            screen = screen.child(list);
        }

        screen.child(
            h_flex().justify_center().child(make_button(
                "show-rates",
                "Show Rates / ధరలను చూపించు",
                cx.listener(Self::on_show_rates),
            )),
        )
    }

    fn render_display(
        &self,
        record: &RateRecord,
        cx: &mut Context<Self>,
    ) -> Div {
        let card = render_card(record);

        v_flex()
            .size_full()
            .gap_4()
            .p_5()
            .child(rate_card_element(&card))
            .child(
                h_flex()
                    .gap_4()
                    .justify_center()
                    .child(make_button(
                        "go-back",
                        "Go Back / వెనుకకు వెళ్లు",
                        cx.listener(Self::on_go_back),
                    ))
                    .child(make_button(
                        "export-image",
                        "Download Image / చిత్రం డౌన్‌లోడ్",
                        cx.listener(Self::on_export),
                    )),
            )
    }
}

impl Render for RateApp {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        match self.state.clone() {
            ViewState::Entry => self.render_entry(cx),
            ViewState::Display(record) => self.render_display(&record, cx),
        }
    }
}

fn screen_heading(
    english: &'static str,
    telugu: &'static str,
) -> Div {
    v_flex()
        .items_center()
        .gap_1()
        .child(div().text_xl().text_align(TextAlign::Center).child(english))
        .child(div().text_align(TextAlign::Center).child(telugu))
}
