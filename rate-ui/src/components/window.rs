use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

/// The root view: a plain container around a content factory.
///
/// The factory runs on every render so stateless `RenderOnce` components
/// inside the content are reconstructed each frame.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Box<dyn Fn() -> AnyElement>,
}

impl AppWindow {
    pub fn new(
        cx: &mut Context<Self>,
        content: impl Fn() -> AnyElement + 'static,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: Box::new(content),
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child((self.content)())
    }
}
